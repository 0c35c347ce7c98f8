mod cart_service;
mod cart_service_impl;

pub use cart_service::*;
pub use cart_service_impl::*;
