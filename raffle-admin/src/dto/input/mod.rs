mod auth;
mod cart;
mod envelope;
mod order;
mod page;
mod raffle;
mod ticket;
mod user;

pub use auth::*;
pub use cart::*;
pub use envelope::*;
pub use order::*;
pub use page::*;
pub use raffle::*;
pub use ticket::*;
pub use user::*;
