use serde::{Deserialize, Serialize};

use crate::helpers::null_as_default;

/// A customer record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Backend identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    /// Customer code.
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    /// Full name or company name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
    /// Whether the customer is active.
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_with_contacts() {
        let customer: Customer = serde_json::from_str(
            r#"{"id":3,"code":"C-003","name":"Dara","phone":"012 345 678","active":true}"#,
        )
        .unwrap();
        assert_eq!(customer.code, "C-003");
        assert_eq!(customer.phone.as_deref(), Some("012 345 678"));
        assert_eq!(customer.email, None);
    }

    #[test]
    fn test_customer_null_fields_use_defaults() {
        let customer: Customer = serde_json::from_str(
            r#"{"id":4,"code":null,"name":null,"phone":null,"active":null}"#,
        )
        .unwrap();
        assert_eq!(customer.id, 4);
        assert_eq!(customer.code, "");
        assert_eq!(customer.name, "");
        assert_eq!(customer.phone, None);
        assert!(!customer.active);
    }
}
