use crate::{
    dto::{
        input::{PageResponse, Ticket},
        output::{PageRequest, TicketFilters},
    },
    error::Error,
};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketQueryService: Send + Sync {
    ///
    /// Find tickets of the raffle, typically by partial ticket number
    /// and status
    ///
    async fn search_tickets(
        &self,
        raffle_id: i64,
        filters: TicketFilters,
        page: PageRequest,
    ) -> Result<PageResponse<Ticket>, Error>;

    ///
    /// Ask backend to pick `quantity` random AVAILABLE tickets.
    /// Picked tickets are not reserved.
    ///
    async fn random_tickets(&self, raffle_id: i64, quantity: u32) -> Result<Vec<Ticket>, Error>;
}
