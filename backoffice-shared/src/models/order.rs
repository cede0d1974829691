use serde::{Deserialize, Serialize};

use crate::helpers::null_as_default;

/// One line of a sale report: an order item joined with its order and
/// customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDetails {
    /// Order item identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    /// Parent order identifier.
    #[serde(default)]
    pub order_id: Option<i64>,
    /// Human readable order number.
    #[serde(default)]
    pub order_no: Option<String>,
    /// Name of the buying customer.
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Name of the sold product.
    #[serde(default)]
    pub product_name: Option<String>,
    /// Units sold.
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: f64,
    /// Unit price.
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    /// Line total as reported by the backend.
    #[serde(default)]
    pub amount: Option<f64>,
    /// Order date as sent by the backend.
    #[serde(default)]
    pub order_date: Option<String>,
}

impl OrderItemDetails {
    /// Line total, computed from quantity and price when the backend omits it.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.amount.unwrap_or(self.quantity * self.price)
    }
}
