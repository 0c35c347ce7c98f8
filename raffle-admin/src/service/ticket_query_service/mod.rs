mod ticket_query_service;
mod ticket_query_service_impl;

pub use ticket_query_service::*;
pub use ticket_query_service_impl::*;
