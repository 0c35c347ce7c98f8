mod error_handler_service;
mod messages;

pub use error_handler_service::*;
pub use messages::*;
