use super::TicketQueryService;
use crate::{
    api::ApiClient,
    cache::search_params,
    dto::{
        input::{PageResponse, Ticket},
        output::{PageRequest, TicketFilters},
    },
    error::Error,
};
use async_trait::async_trait;
use std::sync::Arc;

///
/// Tickets change with every reservation so nothing is cached
///
pub struct TicketQueryServiceImpl {
    api: Arc<ApiClient>,
}

impl TicketQueryServiceImpl {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl TicketQueryService for TicketQueryServiceImpl {
    async fn search_tickets(
        &self,
        raffle_id: i64,
        filters: TicketFilters,
        page: PageRequest,
    ) -> Result<PageResponse<Ticket>, Error> {
        tracing::info!(raffle_id, "searching tickets");
        tracing::trace!(?filters, ?page);

        let path = self
            .api
            .association_path(&format!("/raffles/{raffle_id}/tickets"))?;
        let tickets = self
            .api
            .get::<PageResponse<Ticket>>(&path, &search_params(&filters, &page))
            .await?
            .into_data()?;
        tracing::info!(raffle_id, count = tickets.content.len(), "found tickets");

        Ok(tickets)
    }

    async fn random_tickets(&self, raffle_id: i64, quantity: u32) -> Result<Vec<Ticket>, Error> {
        tracing::info!(raffle_id, quantity, "picking random tickets");

        let path = self
            .api
            .association_path(&format!("/raffles/{raffle_id}/tickets/random"))?;
        let tickets = self
            .api
            .get::<Vec<Ticket>>(&path, &[("quantity", quantity.to_string())])
            .await?
            .into_data()?;
        tracing::info!(raffle_id, count = tickets.len(), "picked random tickets");

        Ok(tickets)
    }
}
