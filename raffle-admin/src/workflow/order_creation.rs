use super::Banner;
use crate::{
    dto::input::{Cart, Order, OrderTicket},
    error::Error,
    forms::{FormErrors, OrderForm, CUSTOMER_PREFIX},
    service::{
        CartService, ErrorHandlerService, OrderService, RaffleService, TicketSelectionService,
    },
};
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderCreationState {
    pub form_errors: FormErrors,
    pub is_submitting: bool,
    pub created_order: Option<Order>,
}

///
/// Order creation page: owns the cart for its lifetime.
///
/// [OrderCreationWorkflow::open] must be called before tickets are
/// selected and [OrderCreationWorkflow::leave] when the page is left
/// without creating an order.
///
pub struct OrderCreationWorkflow {
    raffle_id: i64,
    raffle_service: Arc<dyn RaffleService>,
    cart_service: Arc<dyn CartService>,
    ticket_selection_service: Arc<dyn TicketSelectionService>,
    order_service: Arc<dyn OrderService>,
    error_handler: ErrorHandlerService,
    banner: Banner,
    state: watch::Sender<OrderCreationState>,
}

impl OrderCreationWorkflow {
    pub fn new(
        raffle_id: i64,
        raffle_service: Arc<dyn RaffleService>,
        cart_service: Arc<dyn CartService>,
        ticket_selection_service: Arc<dyn TicketSelectionService>,
        order_service: Arc<dyn OrderService>,
        error_handler: ErrorHandlerService,
        banner: Banner,
    ) -> Self {
        let (state, _) = watch::channel(OrderCreationState::default());

        Self {
            raffle_id,
            raffle_service,
            cart_service,
            ticket_selection_service,
            order_service,
            error_handler,
            banner,
            state,
        }
    }

    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    pub fn state(&self) -> OrderCreationState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<OrderCreationState> {
        self.state.subscribe()
    }

    ///
    /// Reuse active cart left on the server or create a new one.
    ///
    /// Tickets of this raffle already reserved in a reused cart
    /// are put back into the selection.
    ///
    pub async fn open(&self) -> Result<Cart, Error> {
        tracing::info!(raffle_id = self.raffle_id, "opening order creation");

        match self.prepare_cart().await {
            Ok(cart) => Ok(cart),
            Err(err) => {
                let message = self.error_handler.get_error_message(&err);
                tracing::warn!(raffle_id = self.raffle_id, %message, "failed to prepare cart");
                self.banner.show_error(message);
                Err(err)
            }
        }
    }

    async fn prepare_cart(&self) -> Result<Cart, Error> {
        let Some(cart) = self.cart_service.get_user_active_cart().await? else {
            return self.cart_service.create_cart().await;
        };

        tracing::info!(cart_id = cart.id, "reusing active cart");
        self.cart_service.use_cart(cart.clone());

        let reserved = cart
            .tickets
            .iter()
            .filter(|ticket| ticket.raffle_id == self.raffle_id)
            .cloned()
            .collect::<Vec<_>>();
        if !reserved.is_empty() {
            let raffle = self.raffle_service.get_raffle(self.raffle_id).await?;
            let restored = self.ticket_selection_service.add_tickets(
                reserved
                    .into_iter()
                    .map(|ticket| OrderTicket::new(ticket, raffle.ticket_price))
                    .collect(),
            );
            tracing::info!(cart_id = cart.id, restored, "restored selection from cart");
        }

        Ok(cart)
    }

    ///
    /// Validate form and create order from the selected tickets.
    ///
    /// Field errors returned by the server are attached to the form
    /// controls, `customer.` prefix of their paths is dropped.
    ///
    /// ### Errors
    /// - [Error::Validation] when form is invalid, nothing is sent then
    /// - [Error::NoActiveCart] when [OrderCreationWorkflow::open] was not called
    ///
    pub async fn submit(&self, form: &OrderForm) -> Result<Order, Error> {
        let cart = self.cart_service.current_cart().ok_or(Error::NoActiveCart)?;
        let ticket_ids = self
            .ticket_selection_service
            .tickets()
            .iter()
            .map(OrderTicket::id)
            .collect();

        let request = match form.validate(cart.id, self.raffle_id, ticket_ids) {
            Ok(request) => request,
            Err(errors) => {
                self.state.send_modify(|state| state.form_errors = errors.clone());
                return Err(Error::Validation(errors));
            }
        };

        self.state.send_modify(|state| {
            state.form_errors = FormErrors::new();
            state.is_submitting = true;
        });

        let order = match self.order_service.create_order(request).await {
            Ok(order) => order,
            Err(err) => {
                let message = self.error_handler.get_error_message(&err);
                tracing::warn!(cart_id = cart.id, %message, "failed to create order");

                let mut form_errors = FormErrors::new();
                if self.error_handler.is_validation_error(&err) {
                    let server_errors = self.error_handler.get_validation_errors(&err);
                    form_errors.apply_server_errors(
                        &server_errors,
                        &[CUSTOMER_PREFIX],
                        OrderForm::FIELDS,
                    );
                }
                self.state.send_modify(|state| {
                    state.form_errors = form_errors;
                    state.is_submitting = false;
                });
                self.banner.show_error(message);

                return Err(err);
            }
        };

        self.ticket_selection_service.reset_selection();
        self.cart_service.clear_cart();
        self.banner.show_success(format!(
            "Order {} created successfully.",
            order.order_number
        ));
        self.state.send_replace(OrderCreationState {
            form_errors: FormErrors::new(),
            is_submitting: false,
            created_order: Some(order.clone()),
        });

        Ok(order)
    }

    ///
    /// Page left without an order. Reservations are released on
    /// best-effort basis, local cart and selection are always dropped.
    ///
    pub async fn leave(&self) {
        tracing::info!(raffle_id = self.raffle_id, "leaving order creation");

        if let Err(err) = self.cart_service.release_all_tickets_and_clear_cart().await {
            tracing::warn!(%err, "failed to release reserved tickets");
            self.cart_service.clear_cart();
        }
        self.ticket_selection_service.reset_selection();
    }
}
