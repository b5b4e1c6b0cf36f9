pub mod auth;
pub mod record_service;
pub mod shift_service;

pub use auth::AuthService;
pub use record_service::RecordService;
pub use shift_service::ShiftService;
