//!
//! Client of the raffle management backend used by association staff.
//!
//! The crate holds a typed REST client, domain services with request
//! caches, the cart and reservation workflow behind order creation,
//! client side form validation and the admin route guard.
//!

pub mod api;
pub mod application;
pub mod cache;
pub mod dto;
pub mod error;
pub mod forms;
pub mod routes;
pub mod service;
pub mod session;
pub mod workflow;
