pub(crate) mod error_alert;
pub(crate) mod header_nav_item;
pub(crate) mod loading;
pub(crate) mod notifications_slideover;
pub(crate) mod pager;
pub(crate) mod record_modal;
pub(crate) mod user_dropdown;

pub use error_alert::ErrorAlert;
pub use loading::Loading;
pub use notifications_slideover::NotificationsSlideover;
pub use pager::Pager;
pub use record_modal::RecordModal;
