mod categories;
mod customers;
mod dashboard;
mod error;
mod legal;
mod sale_report;
mod settings;
mod signin;

pub use categories::CategoriesPage;
pub use customers::CustomersPage;
pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use legal::{LegalKind, LegalPage};
pub use sale_report::SaleReportPage;
pub use settings::SettingsPage;
pub use signin::SignInPage;
