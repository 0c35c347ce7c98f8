mod auth;
mod cart;
mod filters;
mod order;
mod raffle;
mod user;

pub use auth::*;
pub use cart::*;
pub use filters::*;
pub use order::*;
pub use raffle::*;
pub use user::*;
