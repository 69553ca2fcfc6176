//! Staff records and DTOs.

use serde::{Deserialize, Serialize};

/// Staff member as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role_id: i32,
}

/// DTO for creating a staff member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaff {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub role_id: i32,
}

/// Row staged from a CSV import.
///
/// Import is display-only: rows replace the in-memory list and are never
/// written back to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedStaff {
    pub email: String,
    pub name: String,
    pub position: String,
}

impl ImportedStaff {
    /// Lift a staged row into a display record. Imported rows have no
    /// backend identity, so the row index stands in for the id.
    pub fn into_staff(self, index: usize) -> Staff {
        Staff {
            id: -(index as i64 + 1),
            name: self.name,
            email: self.email,
            address: self.position,
            phone: String::new(),
            role_id: 0,
        }
    }
}

/// Case-insensitive substring filter over email only.
///
/// Degrades to an empty result for an empty list; never mutates the input.
pub fn filter_by_email<'a>(staffs: &'a [Staff], term: &str) -> Vec<&'a Staff> {
    let term = term.to_lowercase();
    staffs
        .iter()
        .filter(|s| s.email.to_lowercase().contains(&term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: i64, email: &str) -> Staff {
        Staff {
            id,
            name: format!("Staff {id}"),
            email: email.to_string(),
            address: String::new(),
            phone: String::new(),
            role_id: 2,
        }
    }

    #[test]
    fn test_filter_matches_substring_case_insensitive() {
        let staffs = vec![
            sample(1, "alice@shop.test"),
            sample(2, "Bob@Shop.test"),
            sample(3, "carol@other.test"),
        ];

        let hits = filter_by_email(&staffs, "SHOP");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, 1);
        assert_eq!(hits[1].id, 2);
    }

    #[test]
    fn test_filter_empty_term_returns_all() {
        let staffs = vec![sample(1, "a@x.test"), sample(2, "b@x.test")];
        assert_eq!(filter_by_email(&staffs, "").len(), 2);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let staffs = vec![sample(1, "alice@shop.test"), sample(2, "bob@other.test")];

        let once: Vec<Staff> = filter_by_email(&staffs, "shop").into_iter().cloned().collect();
        let twice = filter_by_email(&once, "shop");
        assert_eq!(twice.len(), once.len());
    }

    #[test]
    fn test_filter_empty_list() {
        assert!(filter_by_email(&[], "anything").is_empty());
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let staff: Staff = serde_json::from_str(r#"{"id": 7, "email": "x@y.test"}"#).unwrap();
        assert_eq!(staff.id, 7);
        assert_eq!(staff.email, "x@y.test");
        assert!(staff.name.is_empty());
        assert_eq!(staff.role_id, 0);
    }

    #[test]
    fn test_imported_row_into_staff() {
        let row = ImportedStaff {
            email: "new@shop.test".to_string(),
            name: "New Hire".to_string(),
            position: "Cashier".to_string(),
        };

        let staff = row.into_staff(0);
        assert_eq!(staff.id, -1);
        assert_eq!(staff.email, "new@shop.test");
        assert_eq!(staff.name, "New Hire");
        assert_eq!(staff.address, "Cashier");
    }
}
