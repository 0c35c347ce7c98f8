//!
//! Persisted client session: access token, user and association id.
//!
//! Storage is key/value like browser local storage so the same keys
//! can be read by other tools sharing the session file.
//!

mod error;
mod file_session_storage;
mod memory_session_storage;
mod session_storage;
mod session_store;

pub use error::*;
pub use file_session_storage::*;
pub use memory_session_storage::*;
pub use session_storage::*;
pub use session_store::*;
