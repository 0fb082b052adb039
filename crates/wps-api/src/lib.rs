//! # WPS API
//!
//! HTTP handlers, request extractors, the response envelope and the router.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod sessions;
pub mod state;

pub use error::ApiError;
pub use response::ApiResponse;
pub use routes::build_router;
pub use sessions::WizardSessions;
pub use state::AppState;
