mod auth_service;
mod auth_service_impl;

pub use auth_service::*;
pub use auth_service_impl::*;
