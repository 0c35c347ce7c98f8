mod raffle_service;
mod raffle_service_impl;

pub use raffle_service::*;
pub use raffle_service_impl::*;
