//! Payment history records. Read-only in this client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payment as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    pub amount: f64,
    #[serde(default)]
    pub payment_method: String,
    pub payment_date: DateTime<Utc>,
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_payment() {
        let json = r#"{
            "id": 3,
            "amount": 250000.0,
            "paymentMethod": "COD",
            "paymentDate": "2025-07-15T08:00:00Z",
            "status": "Paid"
        }"#;

        let payment: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.id, 3);
        assert_eq!(payment.payment_method, "COD");
        assert_eq!(payment.status, "Paid");
    }
}
