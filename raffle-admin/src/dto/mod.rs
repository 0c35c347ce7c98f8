//!
//! Module with all dtos exchanged with the raffle backend.
//!
//! [input] holds what the backend sends to the client,
//! [output] holds payloads and query parameters the client sends.
//!

pub mod input;
pub mod output;
mod status;

pub use status::*;
