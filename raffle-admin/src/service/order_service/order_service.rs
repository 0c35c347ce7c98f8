use crate::{
    dto::{
        input::{Order, OrderComment, PageResponse},
        output::{CreateOrderRequest, OrderFilters, PageRequest},
        PaymentMethod,
    },
    error::Error,
};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderService: Send + Sync {
    ///
    /// Create order from tickets reserved in the cart
    ///
    /// ### Errors
    /// - [Error::Api] with field errors when customer data is rejected
    ///
    async fn create_order(&self, order: CreateOrderRequest) -> Result<Order, Error>;

    async fn search_orders(
        &self,
        filters: OrderFilters,
        page: PageRequest,
    ) -> Result<PageResponse<Order>, Error>;

    async fn get_order(&self, id: i64) -> Result<Order, Error>;

    ///
    /// Mark order as paid. Statistics of the order's raffle
    /// are announced as changed.
    ///
    async fn complete_order(&self, id: i64, payment_method: PaymentMethod) -> Result<Order, Error>;

    ///
    /// Cancel order, its tickets return to the pool.
    /// Statistics of the order's raffle are announced as changed.
    ///
    async fn cancel_order(&self, id: i64, reason: Option<String>) -> Result<Order, Error>;

    async fn set_unpaid(&self, id: i64) -> Result<Order, Error>;

    async fn refund_order(&self, id: i64, reason: Option<String>) -> Result<Order, Error>;

    async fn add_comment(&self, order_id: i64, comment: String) -> Result<OrderComment, Error>;

    async fn update_comment(
        &self,
        order_id: i64,
        comment_id: i64,
        comment: String,
    ) -> Result<OrderComment, Error>;

    async fn delete_comment(&self, order_id: i64, comment_id: i64) -> Result<(), Error>;
}
