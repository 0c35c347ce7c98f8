//!
//! View models of the order creation pages.
//!
//! View state lives in [tokio::sync::watch] channels so a front-end
//! can subscribe and re-render on every change.
//!

mod banner;
mod debounced_search;
mod order_creation;
mod random_ticket_selector;
mod specific_ticket_selector;

pub use banner::*;
pub use debounced_search::*;
pub use order_creation::*;
pub use random_ticket_selector::*;
pub use specific_ticket_selector::*;
