use super::{CartService, CartState};
use crate::{
    api::ApiClient,
    dto::{
        input::{Cart, EmptyResponse},
        output::ReservationRequest,
    },
    error::Error,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;

pub struct CartServiceImpl {
    api: Arc<ApiClient>,
    state: watch::Sender<CartState>,
}

impl CartServiceImpl {
    pub fn new(api: Arc<ApiClient>) -> Self {
        let (state, _) = watch::channel(CartState::default());

        Self { api, state }
    }

    fn current_cart_id(&self) -> Result<i64, Error> {
        self.state
            .borrow()
            .current_cart
            .as_ref()
            .map(|cart| cart.id)
            .ok_or(Error::NoActiveCart)
    }

    fn reservations_path(&self, cart_id: i64) -> Result<String, Error> {
        self.api
            .association_path(&format!("/carts/{cart_id}/reservations"))
    }
}

#[async_trait]
impl CartService for CartServiceImpl {
    async fn create_cart(&self) -> Result<Cart, Error> {
        tracing::info!("creating cart");
        self.state.send_modify(|state| state.is_creating = true);

        let result = async {
            let path = self.api.association_path("/carts")?;
            self.api.post_empty::<Cart>(&path).await?.into_data()
        }
        .await;

        let cart = match result {
            Ok(cart) => cart,
            Err(err) => {
                self.state.send_modify(|state| state.is_creating = false);
                return Err(err);
            }
        };
        tracing::info!(id = cart.id, "created cart");

        self.state.send_modify(|state| {
            state.current_cart = Some(cart.clone());
            state.is_creating = false;
        });

        Ok(cart)
    }

    async fn reserve_tickets(&self, ticket_ids: Vec<i64>) -> Result<Cart, Error> {
        let cart_id = self.current_cart_id()?;
        tracing::info!(cart_id, ?ticket_ids, "reserving tickets");
        self.state.send_modify(|state| state.is_reserving = true);

        let path = self.reservations_path(cart_id)?;
        let cart = self
            .api
            .post::<_, Cart>(&path, &ReservationRequest { ticket_ids })
            .await?
            .into_data()?;
        tracing::info!(cart_id, tickets = cart.tickets.len(), "reserved tickets");

        self.state.send_modify(|state| {
            state.current_cart = Some(cart.clone());
            state.is_reserving = false;
        });

        Ok(cart)
    }

    async fn release_tickets(&self, ticket_ids: Vec<i64>) -> Result<(), Error> {
        let cart_id = self.current_cart_id()?;
        if ticket_ids.is_empty() {
            return Ok(());
        }

        tracing::info!(cart_id, ?ticket_ids, "releasing tickets");
        self.state.send_modify(|state| state.is_releasing = true);

        let result = async {
            let path = self.reservations_path(cart_id)?;
            self.api
                .put::<_, EmptyResponse>(
                    &path,
                    &ReservationRequest {
                        ticket_ids: ticket_ids.clone(),
                    },
                )
                .await
        }
        .await;

        if let Err(err) = result {
            self.state.send_modify(|state| state.is_releasing = false);
            return Err(err);
        }
        tracing::info!(cart_id, released = ticket_ids.len(), "released tickets");

        self.state.send_modify(|state| {
            if let Some(cart) = state.current_cart.as_mut() {
                cart.tickets.retain(|ticket| !ticket_ids.contains(&ticket.id));
            }
            state.is_releasing = false;
        });

        Ok(())
    }

    async fn release_all_tickets_and_clear_cart(&self) -> Result<(), Error> {
        let Some(cart) = self.current_cart() else {
            return Ok(());
        };

        self.release_tickets(cart.ticket_ids()).await?;
        self.clear_cart();

        Ok(())
    }

    async fn get_user_active_cart(&self) -> Result<Option<Cart>, Error> {
        tracing::info!("finding active cart");

        let path = self.api.association_path("/carts/active")?;
        let Some(response) = self.api.get_optional::<Cart>(&path, &[]).await? else {
            tracing::info!("no active cart");
            return Ok(None);
        };

        let cart = response.into_data()?;
        tracing::info!(id = cart.id, tickets = cart.tickets.len(), "found active cart");

        Ok(Some(cart))
    }

    fn use_cart(&self, cart: Cart) {
        tracing::debug!(id = cart.id, "using existing cart");
        self.state.send_modify(|state| state.current_cart = Some(cart));
    }

    fn reset_reserving_state(&self) {
        self.state.send_modify(|state| state.is_reserving = false);
    }

    fn clear_cart(&self) {
        tracing::debug!("clearing cart");
        self.state.send_replace(CartState::default());
    }

    fn current_cart(&self) -> Option<Cart> {
        self.state.borrow().current_cart.clone()
    }

    fn state(&self) -> CartState {
        self.state.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<CartState> {
        self.state.subscribe()
    }
}
