use crate::{dto::input::Cart, error::Error};
use async_trait::async_trait;
use tokio::sync::watch;

///
/// Local mirror of the cart and its loading flags
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    pub current_cart: Option<Cart>,
    pub is_creating: bool,
    pub is_reserving: bool,
    pub is_releasing: bool,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartService: Send + Sync {
    ///
    /// Create new cart on the server and make it the current one
    ///
    async fn create_cart(&self) -> Result<Cart, Error>;

    ///
    /// Reserve tickets in the current cart. Current cart is replaced
    /// with the one returned by the server.
    ///
    /// Reserving flag is left raised on failure, callers
    /// lower it with [CartService::reset_reserving_state].
    ///
    /// ### Errors
    /// - [Error::NoActiveCart] when there is no current cart
    /// - [Error::Api] when any of the tickets can't be reserved
    ///
    async fn reserve_tickets(&self, ticket_ids: Vec<i64>) -> Result<Cart, Error>;

    ///
    /// Release reservations and drop released tickets from the
    /// current cart. Ids not in the cart are ignored locally.
    ///
    /// ### Errors
    /// - [Error::NoActiveCart] when there is no current cart
    ///
    async fn release_tickets(&self, ticket_ids: Vec<i64>) -> Result<(), Error>;

    ///
    /// Release every ticket of the current cart and forget the cart.
    /// Does nothing without a current cart.
    ///
    async fn release_all_tickets_and_clear_cart(&self) -> Result<(), Error>;

    ///
    /// Active cart of the logged in user left on the server
    /// by an earlier session
    ///
    /// ### Returns
    /// `None` when server has no active cart
    ///
    async fn get_user_active_cart(&self) -> Result<Option<Cart>, Error>;

    ///
    /// Make cart fetched from the server the current one
    ///
    fn use_cart(&self, cart: Cart);

    fn reset_reserving_state(&self);

    fn clear_cart(&self);

    fn current_cart(&self) -> Option<Cart>;

    fn state(&self) -> CartState;

    fn subscribe(&self) -> watch::Receiver<CartState>;
}
