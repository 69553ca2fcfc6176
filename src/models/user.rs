//! User profile and the editable draft behind the account form.

use serde::{Deserialize, Serialize};

/// Profile as returned by the backend. Any field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Editable profile draft. The password is write-only: it authorizes an
/// update and is cleared after every save attempt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub password: String,
}

impl ProfileDraft {
    /// Pre-fill the draft from a fetched profile, blank fallback for every
    /// absent field.
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone().unwrap_or_default(),
            email: profile.email.clone().unwrap_or_default(),
            address: profile.address.clone().unwrap_or_default(),
            phone: profile.phone.clone().unwrap_or_default(),
            password: String::new(),
        }
    }

    /// Merge a partial update response back into the draft and clear the
    /// password. Absent fields keep their current values.
    pub fn merge_response(&mut self, response: &UserProfile) {
        if let Some(name) = &response.name {
            self.name = name.clone();
        }
        if let Some(email) = &response.email {
            self.email = email.clone();
        }
        if let Some(address) = &response.address {
            self.address = address.clone();
        }
        if let Some(phone) = &response.phone {
            self.phone = phone.clone();
        }
        self.password.clear();
    }

    /// A save is authorized only by a fresh, non-empty password.
    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_from_partial_profile() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"name": "An", "phone": "0901234567"}"#).unwrap();

        let draft = ProfileDraft::from_profile(&profile);
        assert_eq!(draft.name, "An");
        assert_eq!(draft.phone, "0901234567");
        assert!(draft.email.is_empty());
        assert!(draft.address.is_empty());
        assert!(draft.password.is_empty());
    }

    #[test]
    fn test_merge_response_keeps_absent_fields_and_clears_password() {
        let mut draft = ProfileDraft {
            name: "An".to_string(),
            email: "an@shop.test".to_string(),
            address: "Old street".to_string(),
            phone: "0901234567".to_string(),
            password: "secret".to_string(),
        };

        let response: UserProfile = serde_json::from_str(r#"{"address": "New street"}"#).unwrap();
        draft.merge_response(&response);

        assert_eq!(draft.address, "New street");
        assert_eq!(draft.name, "An");
        assert_eq!(draft.email, "an@shop.test");
        assert!(draft.password.is_empty());
    }

    #[test]
    fn test_has_password() {
        let mut draft = ProfileDraft::default();
        assert!(!draft.has_password());
        draft.password = "x".to_string();
        assert!(draft.has_password());
    }
}
