//!
//! Client side inspection of access tokens issued by the raffle backend.
//!
//! Tokens are never verified here. The backend owns the signing key
//! and rejects forged tokens on every request, the client only needs
//! to know when a stored token stopped being usable.
//!

mod dto;
pub mod error;
pub mod util;

pub use dto::Claims;
pub use util::{decode_claims, is_expired};
