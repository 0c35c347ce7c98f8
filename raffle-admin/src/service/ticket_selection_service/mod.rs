mod ticket_selection_service;
mod ticket_selection_service_impl;

pub use ticket_selection_service::*;
pub use ticket_selection_service_impl::*;
