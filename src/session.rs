//! Authentication session state.
//!
//! A single [`Session`] lives inside the app state and is passed to the
//! panels that need it. Only the login and logout paths write it; every
//! other panel reads it to gate access and pre-fill forms.

/// Current user identity and token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub token: String,
    pub auth: bool,
}

impl Session {
    /// Unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the session authenticated with the given identity and token.
    pub fn login(&mut self, email: impl Into<String>, token: impl Into<String>) {
        self.email = email.into();
        self.token = token.into();
        self.auth = true;
    }

    /// Clear identity and token synchronously.
    pub fn logout(&mut self) {
        *self = Self::default();
    }

    /// Whether the session holds a valid login.
    pub fn is_authenticated(&self) -> bool {
        self.auth
    }
}
