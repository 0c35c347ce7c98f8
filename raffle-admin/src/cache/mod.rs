mod cache_key;
mod response_cache;

pub use cache_key::*;
pub use response_cache::*;
