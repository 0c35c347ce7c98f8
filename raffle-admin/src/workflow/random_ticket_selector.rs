use crate::{
    dto::input::OrderTicket,
    error::Error,
    forms::{FieldError, FormErrors},
    service::{
        CartService, ErrorHandlerService, RaffleService, TicketQueryService,
        TicketSelectionService,
    },
};
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy)]
pub struct RandomTicketSelectorConfig {
    pub max_random_tickets: u32,
}

impl Default for RandomTicketSelectorConfig {
    fn default() -> Self {
        Self {
            max_random_tickets: 50,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RandomTicketSelectorState {
    pub is_loading: bool,
    pub error: Option<String>,
}

///
/// Selection of tickets picked at random by the backend.
///
/// The whole batch is reserved at once, the backend either
/// reserves every ticket or none of them.
///
pub struct RandomTicketSelector {
    raffle_id: i64,
    raffle_service: Arc<dyn RaffleService>,
    ticket_query_service: Arc<dyn TicketQueryService>,
    cart_service: Arc<dyn CartService>,
    ticket_selection_service: Arc<dyn TicketSelectionService>,
    error_handler: ErrorHandlerService,
    config: RandomTicketSelectorConfig,
    state: watch::Sender<RandomTicketSelectorState>,
}

impl RandomTicketSelector {
    pub fn new(
        raffle_id: i64,
        raffle_service: Arc<dyn RaffleService>,
        ticket_query_service: Arc<dyn TicketQueryService>,
        cart_service: Arc<dyn CartService>,
        ticket_selection_service: Arc<dyn TicketSelectionService>,
        error_handler: ErrorHandlerService,
        config: RandomTicketSelectorConfig,
    ) -> Self {
        let (state, _) = watch::channel(RandomTicketSelectorState::default());

        Self {
            raffle_id,
            raffle_service,
            ticket_query_service,
            cart_service,
            ticket_selection_service,
            error_handler,
            config,
            state,
        }
    }

    pub fn state(&self) -> RandomTicketSelectorState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RandomTicketSelectorState> {
        self.state.subscribe()
    }

    fn validate_quantity(&self, quantity: u32) -> Result<(), Error> {
        if (1..=self.config.max_random_tickets).contains(&quantity) {
            return Ok(());
        }

        let mut errors = FormErrors::new();
        errors.add(
            "quantity",
            FieldError::OutOfRange {
                min: "1".to_string(),
                max: self.config.max_random_tickets.to_string(),
            },
        );

        Err(Error::Validation(errors))
    }

    ///
    /// Pick, reserve and select `quantity` random tickets.
    ///
    /// ### Returns
    /// number of tickets added to the selection
    ///
    /// ### Errors
    /// - [Error::Validation] when quantity is outside `1..=max_random_tickets`
    /// - any error of picking or reserving, nothing is selected then
    ///
    pub async fn select_random(&self, quantity: u32) -> Result<usize, Error> {
        self.validate_quantity(quantity)?;

        tracing::info!(raffle_id = self.raffle_id, quantity, "selecting random tickets");
        self.state.send_replace(RandomTicketSelectorState {
            is_loading: true,
            error: None,
        });

        let result = async {
            let raffle = self.raffle_service.get_raffle(self.raffle_id).await?;
            let tickets = self
                .ticket_query_service
                .random_tickets(self.raffle_id, quantity)
                .await?;
            let ticket_ids = tickets.iter().map(|ticket| ticket.id).collect();
            self.cart_service.reserve_tickets(ticket_ids).await?;

            Ok::<_, Error>((raffle.ticket_price, tickets))
        }
        .await;

        let (ticket_price, tickets) = match result {
            Ok(result) => result,
            Err(err) => {
                let message = self.error_handler.get_error_message(&err);
                tracing::warn!(raffle_id = self.raffle_id, %message, "failed to select random tickets");
                self.cart_service.reset_reserving_state();
                self.state.send_replace(RandomTicketSelectorState {
                    is_loading: false,
                    error: Some(message),
                });
                return Err(err);
            }
        };

        let added = self.ticket_selection_service.add_tickets(
            tickets
                .into_iter()
                .map(|ticket| OrderTicket::new(ticket, ticket_price))
                .collect(),
        );
        self.state.send_replace(RandomTicketSelectorState::default());
        tracing::info!(raffle_id = self.raffle_id, added, "selected random tickets");

        Ok(added)
    }
}
