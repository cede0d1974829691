pub mod use_auth;
pub mod use_category;
pub mod use_customer;
pub mod use_dashboard;
pub mod use_paginated;
pub mod use_sale_report;

pub use use_auth::{UseAuthHandle, use_auth};
pub use use_category::{UseCategoryHandle, use_category};
pub use use_customer::{UseCustomerHandle, use_customer};
pub use use_dashboard::{UseDashboardHandle, use_dashboard, use_dashboard_shortcuts};
pub use use_paginated::{UsePaginatedHandle, use_paginated};
pub use use_sale_report::{UseSaleReportHandle, use_sale_report};
