mod order_service;
mod order_service_impl;

pub use order_service::*;
pub use order_service_impl::*;
