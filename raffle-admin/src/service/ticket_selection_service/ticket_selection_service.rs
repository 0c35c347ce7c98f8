use crate::{dto::input::OrderTicket, error::Error};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::watch;

///
/// Tickets selected for the order being created.
///
/// Every selected ticket is expected to be reserved in the current
/// cart. Removal releases the reservation first and changes the
/// selection only when the release succeeded.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketSelectionService: Send + Sync {
    ///
    /// ### Returns
    /// `false` when ticket with the same number is already selected
    ///
    fn add_ticket(&self, ticket: OrderTicket) -> bool;

    ///
    /// ### Returns
    /// number of tickets that were not selected before
    ///
    fn add_tickets(&self, tickets: Vec<OrderTicket>) -> usize;

    ///
    /// ### Errors
    /// - error of [crate::service::CartService::release_tickets],
    ///   ticket stays selected
    ///
    async fn remove_ticket(&self, ticket_number: String) -> Result<(), Error>;

    async fn remove_tickets(&self, ticket_numbers: Vec<String>) -> Result<(), Error>;

    ///
    /// Release every selected ticket and clear the selection
    ///
    async fn clear_tickets(&self) -> Result<(), Error>;

    ///
    /// Forget selection without touching reservations.
    /// Used once tickets became part of an order or the cart was dropped.
    ///
    fn reset_selection(&self);

    fn tickets(&self) -> Vec<OrderTicket>;

    fn contains(&self, ticket_number: &str) -> bool;

    fn get_total_price(&self) -> Decimal;

    fn get_ticket_count(&self) -> usize;

    fn subscribe(&self) -> watch::Receiver<Vec<OrderTicket>>;
}
