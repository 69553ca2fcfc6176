//! HTTP gateway to the shop backend.
//!
//! Every endpoint wraps its payload in a `{data: ...}` envelope; payments
//! are double-wrapped. Body decoding is split out of the request methods so
//! shape errors are reported as [`AppError::MalformedResponse`] rather than
//! being folded into transport failures.

use crate::error::{AppError, Result};
use crate::models::order::Order;
use crate::models::payment::Payment;
use crate::models::staff::{CreateStaff, Staff};
use crate::models::user::{ProfileDraft, UserProfile};
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::RwLock;

/// Standard response envelope.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Signin payload; the token may be absent even on a 2xx response.
#[derive(Debug, Deserialize)]
struct SigninData {
    token: Option<String>,
}

/// Decode an enveloped body, mapping shape errors to MalformedResponse.
fn decode_data<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str::<Envelope<T>>(body)
        .map(|e| e.data)
        .map_err(|e| AppError::malformed(e.to_string()))
}

/// Extract the token from a signin response body.
///
/// A success response without a token is a malformed response, not a
/// transport failure; the login view reports both as a generic failure but
/// they are logged distinctly.
fn extract_token(body: &str) -> Result<String> {
    let data: SigninData = decode_data(body)?;
    data.token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::malformed("signin response contained no token"))
}

/// Decode the order list, degrading a non-array `data` field to an empty
/// list instead of failing.
fn decode_orders(body: &str) -> Result<Vec<Order>> {
    let data: serde_json::Value = decode_data(body)?;
    match data {
        serde_json::Value::Array(_) => {
            serde_json::from_value(data).map_err(|e| AppError::malformed(e.to_string()))
        }
        _ => Ok(Vec::new()),
    }
}

/// Shop backend HTTP client.
///
/// Holds the bearer token behind a lock so panels can share one client
/// across spawned requests.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Create a new client against the given base URL.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    /// Store the bearer token for subsequent requests.
    pub fn set_token(&self, token: &str) {
        *self.token.write().expect("token lock poisoned") = Some(token.to_string());
    }

    /// Drop the bearer token (logout).
    pub fn clear_token(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorized(self.client.get(format!("{base}{path}", base = self.base_url)))
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token.read().expect("token lock poisoned").as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Authenticate and return the session token.
    pub async fn signin(&self, email: &str, password: &str) -> Result<String> {
        let url = format!("{base}/auth/signin", base = self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AppError::LoginFailed);
        }
        let body = response.error_for_status()?.text().await?;
        extract_token(&body)
    }

    /// Fetch the full staff directory.
    pub async fn fetch_all_staff(&self) -> Result<Vec<Staff>> {
        let body = self.get("/staff").send().await?.error_for_status()?.text().await?;
        decode_data(&body)
    }

    /// Create a staff member; the backend assigns the id.
    pub async fn create_staff(&self, staff: &CreateStaff) -> Result<Staff> {
        let url = format!("{base}/staff", base = self.base_url);
        let body = self
            .authorized(self.client.post(&url))
            .json(staff)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        decode_data(&body)
    }

    /// Delete a staff member by id.
    pub async fn delete_staff(&self, id: i64) -> Result<()> {
        let url = format!("{base}/staff/{id}", base = self.base_url);
        let response = self.authorized(self.client.delete(&url)).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::not_found(format!("staff {id}")));
        }
        response.error_for_status()?;
        Ok(())
    }

    /// Fetch the current user's profile.
    pub async fn get_user_info(&self) -> Result<UserProfile> {
        let body = self.get("/users/me").send().await?.error_for_status()?.text().await?;
        decode_data(&body)
    }

    /// Update the profile. The draft password authorizes the write and must
    /// be validated non-empty by the caller before any network call.
    pub async fn update_user_info(&self, draft: &ProfileDraft) -> Result<UserProfile> {
        if !draft.has_password() {
            return Err(AppError::validation("password is required to update the profile"));
        }

        let url = format!("{base}/users/me", base = self.base_url);
        let body = self
            .authorized(self.client.put(&url))
            .json(draft)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        decode_data(&body)
    }

    /// Fetch the current user's orders.
    pub async fn get_order_by_user(&self) -> Result<Vec<Order>> {
        let body = self.get("/orders").send().await?.error_for_status()?.text().await?;
        decode_orders(&body)
    }

    /// Confirm delivery of a completed order. Intended to be idempotent but
    /// not guaranteed by the backend contract.
    pub async fn update_is_delivered(&self, order_id: i64) -> Result<()> {
        let url = format!("{base}/orders/{order_id}/delivered", base = self.base_url);
        self.authorized(self.client.put(&url))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Fetch the current user's payment history (double-wrapped envelope).
    pub async fn fetch_all_payment(&self) -> Result<Vec<Payment>> {
        let body = self.get("/payments").send().await?.error_for_status()?.text().await?;
        let inner: Envelope<Vec<Payment>> = decode_data(&body)?;
        Ok(inner.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::OrderStatus;

    #[test]
    fn test_extract_token() {
        let body = r#"{"data": {"token": "abc123"}}"#;
        assert_eq!(extract_token(body).unwrap(), "abc123");
    }

    #[test]
    fn test_extract_token_missing_is_malformed() {
        let body = r#"{"data": {}}"#;
        assert!(matches!(extract_token(body), Err(AppError::MalformedResponse(_))));
    }

    #[test]
    fn test_extract_token_empty_is_malformed() {
        let body = r#"{"data": {"token": ""}}"#;
        assert!(matches!(extract_token(body), Err(AppError::MalformedResponse(_))));
    }

    #[test]
    fn test_decode_staff_envelope() {
        let body = r#"{"data": [{"id": 1, "name": "A", "email": "a@x.test",
                       "address": "", "phone": "", "roleId": 2}]}"#;
        let staffs: Vec<Staff> = decode_data(body).unwrap();
        assert_eq!(staffs.len(), 1);
        assert_eq!(staffs[0].role_id, 2);
    }

    #[test]
    fn test_decode_unexpected_shape_is_malformed() {
        let result: Result<Vec<Staff>> = decode_data(r#"{"items": []}"#);
        assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    }

    #[test]
    fn test_decode_orders_array() {
        let body = r#"{"data": [{"orderId": 1, "total": 10.0, "status": "Pending",
                       "items": [], "createdTime": "2025-08-01T00:00:00Z"}]}"#;
        let orders = decode_orders(body).unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].status, OrderStatus::Pending);
    }

    #[test]
    fn test_decode_orders_non_array_degrades_to_empty() {
        let body = r#"{"data": {"message": "no orders"}}"#;
        assert!(decode_orders(body).unwrap().is_empty());
    }

    #[test]
    fn test_decode_payments_double_envelope() {
        let body = r#"{"data": {"data": [{"id": 9, "amount": 5.0,
                       "paymentMethod": "Card", "paymentDate": "2025-08-01T00:00:00Z",
                       "status": "Paid"}]}}"#;
        let inner: Envelope<Vec<Payment>> = decode_data(body).unwrap();
        assert_eq!(inner.data.len(), 1);
        assert_eq!(inner.data[0].id, 9);
    }
}
