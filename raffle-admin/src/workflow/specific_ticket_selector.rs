use super::{DebouncedSearch, SearchOutcome};
use crate::{
    dto::{
        input::{OrderTicket, Ticket},
        output::{PageRequest, TicketFilters},
        TicketStatus,
    },
    error::Error,
    service::{
        CartService, ErrorHandlerService, RaffleService, TicketQueryService,
        TicketSelectionService,
    },
};
use std::{sync::Arc, time::Duration};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy)]
pub struct SpecificTicketSelectorConfig {
    pub debounce: Duration,
    pub max_suggestions: u32,
}

impl Default for SpecificTicketSelectorConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            max_suggestions: 10,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecificTicketSelectorState {
    pub ticket_number: String,
    pub suggestions: Vec<Ticket>,
    pub is_searching: bool,
    pub is_reserving: bool,
    pub error: Option<String>,
}

///
/// Selection of a ticket picked by its number.
///
/// Typing searches AVAILABLE tickets of the raffle, choosing
/// a suggestion reserves it in the current cart and adds it
/// to the selection.
///
pub struct SpecificTicketSelector {
    raffle_id: i64,
    raffle_service: Arc<dyn RaffleService>,
    ticket_query_service: Arc<dyn TicketQueryService>,
    cart_service: Arc<dyn CartService>,
    ticket_selection_service: Arc<dyn TicketSelectionService>,
    error_handler: ErrorHandlerService,
    config: SpecificTicketSelectorConfig,
    search: DebouncedSearch,
    state: watch::Sender<SpecificTicketSelectorState>,
}

impl SpecificTicketSelector {
    pub fn new(
        raffle_id: i64,
        raffle_service: Arc<dyn RaffleService>,
        ticket_query_service: Arc<dyn TicketQueryService>,
        cart_service: Arc<dyn CartService>,
        ticket_selection_service: Arc<dyn TicketSelectionService>,
        error_handler: ErrorHandlerService,
        config: SpecificTicketSelectorConfig,
    ) -> Self {
        let (state, _) = watch::channel(SpecificTicketSelectorState::default());

        Self {
            raffle_id,
            raffle_service,
            ticket_query_service,
            cart_service,
            ticket_selection_service,
            error_handler,
            config,
            search: DebouncedSearch::new(config.debounce),
            state,
        }
    }

    pub fn state(&self) -> SpecificTicketSelectorState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SpecificTicketSelectorState> {
        self.state.subscribe()
    }

    ///
    /// Ticket number input changed.
    ///
    /// Suggestions are replaced only by the latest term.
    /// Already selected tickets are not suggested.
    ///
    pub async fn search(&self, ticket_number: String) -> Result<(), Error> {
        let term = ticket_number.trim().to_string();
        self.state.send_modify(|state| {
            state.ticket_number = ticket_number;
            state.error = None;
        });

        if term.is_empty() {
            self.search.reset();
            self.state.send_modify(|state| {
                state.suggestions.clear();
                state.is_searching = false;
            });
            return Ok(());
        }

        self.state.send_modify(|state| state.is_searching = true);
        let outcome = self
            .search
            .run(term, |term| {
                let filters = TicketFilters {
                    ticket_number: Some(term),
                    status: Some(TicketStatus::Available),
                    customer_id: None,
                };
                let page = PageRequest::new(0, self.config.max_suggestions);
                self.ticket_query_service
                    .search_tickets(self.raffle_id, filters, page)
            })
            .await;

        match outcome {
            Ok(SearchOutcome::Results(page)) => {
                let suggestions = page
                    .content
                    .into_iter()
                    .filter(|ticket| !self.ticket_selection_service.contains(&ticket.ticket_number))
                    .collect::<Vec<_>>();
                self.state.send_modify(|state| {
                    state.suggestions = suggestions;
                    state.is_searching = false;
                });
            }
            Ok(SearchOutcome::Unchanged) => {
                self.state.send_modify(|state| state.is_searching = false);
            }
            Ok(SearchOutcome::Superseded | SearchOutcome::InFlight) => {}
            Err(err) => {
                let message = self.error_handler.get_error_message(&err);
                tracing::warn!(raffle_id = self.raffle_id, %message, "ticket search failed");
                self.state.send_modify(|state| {
                    state.suggestions.clear();
                    state.is_searching = false;
                    state.error = Some(message);
                });
                return Err(err);
            }
        }

        Ok(())
    }

    ///
    /// Suggestion chosen: reserve it and add it to the selection
    /// with the raffle's ticket price.
    ///
    /// On failure input and search are reset and loading state
    /// of the cart is lowered.
    ///
    pub async fn select(&self, ticket: Ticket) -> Result<(), Error> {
        if self.ticket_selection_service.contains(&ticket.ticket_number) {
            tracing::debug!(ticket_number = %ticket.ticket_number, "ticket already selected");
            return Ok(());
        }

        tracing::info!(
            raffle_id = self.raffle_id,
            ticket_id = ticket.id,
            "selecting specific ticket"
        );
        self.state.send_modify(|state| {
            state.is_reserving = true;
            state.error = None;
        });

        let result = async {
            let raffle = self.raffle_service.get_raffle(self.raffle_id).await?;
            self.cart_service.reserve_tickets(vec![ticket.id]).await?;

            Ok::<_, Error>(raffle.ticket_price)
        }
        .await;

        self.search.reset();

        let ticket_price = match result {
            Ok(ticket_price) => ticket_price,
            Err(err) => {
                let message = self.error_handler.get_error_message(&err);
                tracing::warn!(ticket_id = ticket.id, %message, "failed to select ticket");
                self.cart_service.reset_reserving_state();
                self.state.send_replace(SpecificTicketSelectorState {
                    error: Some(message),
                    ..Default::default()
                });
                return Err(err);
            }
        };

        let ticket_id = ticket.id;
        self.ticket_selection_service
            .add_ticket(OrderTicket::new(ticket, ticket_price));
        self.state.send_replace(SpecificTicketSelectorState::default());
        tracing::info!(raffle_id = self.raffle_id, ticket_id, "selected specific ticket");

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        api::ApiError,
        dto::{
            input::{Cart, PageResponse, Raffle},
            CartStatus, RaffleStatus,
        },
        service::{
            cart_service::MockCartService, raffle_service::MockRaffleService,
            ticket_query_service::MockTicketQueryService, TicketSelectionServiceImpl,
        },
    };
    use rust_decimal::Decimal;

    const RAFFLE_ID: i64 = 4;

    fn ticket(id: i64, number: &str) -> Ticket {
        Ticket {
            id,
            ticket_number: number.to_string(),
            status: TicketStatus::Available,
            raffle_id: RAFFLE_ID,
            customer_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn raffle() -> Raffle {
        Raffle {
            id: RAFFLE_ID,
            title: "Spring raffle".to_string(),
            description: None,
            ticket_price: Decimal::new(250, 2),
            total_tickets: 100,
            status: RaffleStatus::Active,
            start_date: None,
            end_date: None,
            images: Vec::new(),
            association_id: Some(7),
            created_at: None,
            updated_at: None,
        }
    }

    fn page(tickets: Vec<Ticket>) -> PageResponse<Ticket> {
        PageResponse {
            total_elements: tickets.len() as u64,
            content: tickets,
            total_pages: 1,
            page: 0,
            size: 10,
        }
    }

    struct Mocks {
        raffle_service: MockRaffleService,
        ticket_query_service: MockTicketQueryService,
        cart_service: MockCartService,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                raffle_service: MockRaffleService::new(),
                ticket_query_service: MockTicketQueryService::new(),
                cart_service: MockCartService::new(),
            }
        }

        fn selector(self) -> (SpecificTicketSelector, Arc<TicketSelectionServiceImpl>) {
            let cart_service: Arc<dyn CartService> = Arc::new(self.cart_service);
            let selection = Arc::new(TicketSelectionServiceImpl::new(
                cart_service.clone(),
                ErrorHandlerService::new(),
            ));
            let selector = SpecificTicketSelector::new(
                RAFFLE_ID,
                Arc::new(self.raffle_service),
                Arc::new(self.ticket_query_service),
                cart_service,
                selection.clone(),
                ErrorHandlerService::new(),
                SpecificTicketSelectorConfig::default(),
            );

            (selector, selection)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn search_suggests_available_tickets() {
        let mut mocks = Mocks::new();
        mocks
            .ticket_query_service
            .expect_search_tickets()
            .withf(|raffle_id, filters, page| {
                *raffle_id == RAFFLE_ID
                    && filters.ticket_number.as_deref() == Some("12")
                    && filters.status == Some(TicketStatus::Available)
                    && page.size == 10
            })
            .times(1)
            .returning(|_, _, _| Ok(page(vec![ticket(12, "0012"), ticket(112, "0112")])));
        let (selector, _) = mocks.selector();

        selector.search(" 12 ".to_string()).await.unwrap();

        let state = selector.state();
        assert_eq!(state.ticket_number, " 12 ");
        assert_eq!(state.suggestions.len(), 2);
        assert!(!state.is_searching);
    }

    #[tokio::test(start_paused = true)]
    async fn search_blank_term_clears_suggestions() {
        let mut mocks = Mocks::new();
        mocks.ticket_query_service.expect_search_tickets().never();
        let (selector, _) = mocks.selector();

        selector.search("  ".to_string()).await.unwrap();

        assert!(selector.state().suggestions.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn search_failure_shows_message() {
        let mut mocks = Mocks::new();
        mocks
            .ticket_query_service
            .expect_search_tickets()
            .returning(|_, _, _| Err(Error::Api(ApiError::new(503, None))));
        let (selector, _) = mocks.selector();

        let result = selector.search("12".to_string()).await;

        assert!(result.is_err());
        let state = selector.state();
        assert!(!state.is_searching);
        assert_eq!(
            state.error.as_deref(),
            Some("The service is temporarily unavailable. Please try again later.")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn select_reserves_and_adds_with_raffle_price() {
        let mut mocks = Mocks::new();
        mocks
            .raffle_service
            .expect_get_raffle()
            .returning(|_| Ok(raffle()));
        mocks
            .cart_service
            .expect_reserve_tickets()
            .withf(|ids| ids == &vec![12])
            .times(1)
            .returning(|_| {
                Ok(Cart {
                    id: 1,
                    user_id: 3,
                    tickets: vec![ticket(12, "0012")],
                    status: CartStatus::Active,
                    created_at: None,
                    updated_at: None,
                })
            });
        let (selector, selection) = mocks.selector();

        selector.select(ticket(12, "0012")).await.unwrap();

        let selected = selection.tickets();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].ticket_number(), "0012");
        assert_eq!(selected[0].price, Decimal::new(250, 2));
        assert_eq!(selector.state(), SpecificTicketSelectorState::default());
    }

    #[tokio::test(start_paused = true)]
    async fn select_reservation_failed_resets_state() {
        let mut mocks = Mocks::new();
        mocks
            .raffle_service
            .expect_get_raffle()
            .returning(|_| Ok(raffle()));
        mocks
            .cart_service
            .expect_reserve_tickets()
            .returning(|_| Err(Error::Api(ApiError::new(409, None))));
        mocks
            .cart_service
            .expect_reset_reserving_state()
            .times(1)
            .return_const(());
        let (selector, selection) = mocks.selector();

        let result = selector.select(ticket(12, "0012")).await;

        assert!(result.is_err());
        assert_eq!(selection.get_ticket_count(), 0);
        let state = selector.state();
        assert_eq!(state.ticket_number, "");
        assert!(state.suggestions.is_empty());
        assert!(!state.is_reserving);
        assert!(state.error.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn select_already_selected_does_nothing() {
        let mut mocks = Mocks::new();
        mocks.raffle_service.expect_get_raffle().never();
        mocks.cart_service.expect_reserve_tickets().never();
        let (selector, selection) = mocks.selector();
        selection.add_ticket(OrderTicket::new(ticket(12, "0012"), Decimal::ONE));

        selector.select(ticket(12, "0012")).await.unwrap();

        assert_eq!(selection.get_ticket_count(), 1);
    }
}
