pub mod api;
pub mod config;
pub mod date_utils;
pub mod form_utils;
pub mod formatting;
pub mod latest_request;
pub mod logging;
pub mod session;

pub use api::{ApiClient, ApiError};
pub use config::AppConfig;
pub use latest_request::{LatestRequest, RequestTicket};
pub use logging::Logger;
pub use session::{Session, SessionHandle};
