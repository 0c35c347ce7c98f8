mod user_service;
mod user_service_impl;

pub use user_service::*;
pub use user_service_impl::*;
