use super::ApplicationEnv;
use crate::{
    api::{ApiClient, ApiClientConfig},
    service::{
        AuthService, AuthServiceImpl, CartService, CartServiceImpl, ErrorHandlerService,
        OrderService, OrderServiceImpl, RaffleService, RaffleServiceImpl,
        RaffleStatisticsUpdateService, TicketQueryService, TicketQueryServiceImpl,
        TicketSelectionService, TicketSelectionServiceImpl, UserService, UserServiceImpl,
    },
    session::{FileSessionStorage, SessionStore},
    workflow::{
        Banner, BannerConfig, OrderCreationWorkflow, RandomTicketSelector,
        RandomTicketSelectorConfig, SpecificTicketSelector, SpecificTicketSelectorConfig,
    },
};
use std::sync::Arc;

///
/// Every service of the client wired together.
/// Services are shared, workflows are created per page.
///
#[derive(Clone)]
pub struct ApplicationState {
    pub session: Arc<SessionStore>,
    pub error_handler: ErrorHandlerService,
    pub auth_service: Arc<dyn AuthService>,
    pub raffle_service: Arc<dyn RaffleService>,
    pub order_service: Arc<dyn OrderService>,
    pub user_service: Arc<dyn UserService>,
    pub ticket_query_service: Arc<dyn TicketQueryService>,
    pub cart_service: Arc<dyn CartService>,
    pub ticket_selection_service: Arc<dyn TicketSelectionService>,
    pub specific_ticket_selector_config: SpecificTicketSelectorConfig,
    pub random_ticket_selector_config: RandomTicketSelectorConfig,
    pub banner_config: BannerConfig,
}

pub fn create_state(env: &ApplicationEnv) -> anyhow::Result<ApplicationState> {
    tracing::info!(session_file = %env.session_file.display(), "opening session");
    let storage = FileSessionStorage::open(&env.session_file)?;
    let session = Arc::new(SessionStore::new(Arc::new(storage)));

    tracing::info!(base_url = %env.api_base_url, "creating api client");
    let api = Arc::new(ApiClient::new(
        ApiClientConfig {
            base_url: env.api_base_url.clone(),
            timeout: env.http_timeout,
        },
        session.clone(),
    )?);

    tracing::info!("creating services");
    let error_handler = ErrorHandlerService::new();
    let statistics_update_service = Arc::new(RaffleStatisticsUpdateService::new());
    let auth_service = Arc::new(AuthServiceImpl::new(api.clone()));
    let raffle_service = Arc::new(RaffleServiceImpl::new(
        api.clone(),
        &statistics_update_service,
    ));
    let order_service = Arc::new(OrderServiceImpl::new(
        api.clone(),
        statistics_update_service,
    ));
    let user_service = Arc::new(UserServiceImpl::new(api.clone()));
    let ticket_query_service = Arc::new(TicketQueryServiceImpl::new(api.clone()));
    let cart_service: Arc<dyn CartService> = Arc::new(CartServiceImpl::new(api));
    let ticket_selection_service = Arc::new(TicketSelectionServiceImpl::new(
        cart_service.clone(),
        error_handler,
    ));

    Ok(ApplicationState {
        session,
        error_handler,
        auth_service,
        raffle_service,
        order_service,
        user_service,
        ticket_query_service,
        cart_service,
        ticket_selection_service,
        specific_ticket_selector_config: SpecificTicketSelectorConfig {
            debounce: env.search_debounce,
            ..Default::default()
        },
        random_ticket_selector_config: RandomTicketSelectorConfig::default(),
        banner_config: BannerConfig::default(),
    })
}

impl ApplicationState {
    pub fn specific_ticket_selector(&self, raffle_id: i64) -> SpecificTicketSelector {
        SpecificTicketSelector::new(
            raffle_id,
            self.raffle_service.clone(),
            self.ticket_query_service.clone(),
            self.cart_service.clone(),
            self.ticket_selection_service.clone(),
            self.error_handler,
            self.specific_ticket_selector_config,
        )
    }

    pub fn random_ticket_selector(&self, raffle_id: i64) -> RandomTicketSelector {
        RandomTicketSelector::new(
            raffle_id,
            self.raffle_service.clone(),
            self.ticket_query_service.clone(),
            self.cart_service.clone(),
            self.ticket_selection_service.clone(),
            self.error_handler,
            self.random_ticket_selector_config,
        )
    }

    pub fn order_creation(&self, raffle_id: i64) -> OrderCreationWorkflow {
        OrderCreationWorkflow::new(
            raffle_id,
            self.raffle_service.clone(),
            self.cart_service.clone(),
            self.ticket_selection_service.clone(),
            self.order_service.clone(),
            self.error_handler,
            Banner::new(self.banner_config),
        )
    }
}
