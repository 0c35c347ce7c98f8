//!
//! Services talking to the raffle backend and holding client side state.
//!
//! Every backend facing service is a trait so views and workflows
//! can be tested against mocks.
//!

pub mod auth_service;
pub mod cart_service;
pub mod error_handler_service;
pub mod order_service;
pub mod raffle_service;
pub mod raffle_statistics_update_service;
pub mod ticket_query_service;
pub mod ticket_selection_service;
pub mod user_service;

pub use auth_service::{AuthService, AuthServiceImpl};
pub use cart_service::{CartService, CartServiceImpl, CartState};
pub use error_handler_service::ErrorHandlerService;
pub use order_service::{OrderService, OrderServiceImpl};
pub use raffle_service::{RaffleService, RaffleServiceImpl};
pub use raffle_statistics_update_service::RaffleStatisticsUpdateService;
pub use ticket_query_service::{TicketQueryService, TicketQueryServiceImpl};
pub use ticket_selection_service::{TicketSelectionService, TicketSelectionServiceImpl};
pub use user_service::{UserService, UserServiceImpl};
