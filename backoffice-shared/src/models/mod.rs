//! Wire models for the Backoffice REST API.
//!
//! Field names follow the backend's camelCase JSON. Anything the backend may
//! leave out is an `Option` or carries a serde default, so a sparse payload
//! still decodes.

pub mod auth;
pub mod category;
pub mod customer;
pub mod errors;
pub mod order;
pub mod page;

pub use auth::{LoginRequest, LoginResponse};
pub use category::Category;
pub use customer::Customer;
pub use errors::ErrorResponse;
pub use order::OrderItemDetails;
pub use page::PageResponse;
