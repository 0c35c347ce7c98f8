use super::OrderService;
use crate::{
    api::ApiClient,
    cache::{cache_key, search_params, ResponseCache},
    dto::{
        input::{EmptyResponse, Order, OrderComment, PageResponse},
        output::{
            CommentRequest, CompleteOrderRequest, CreateOrderRequest, OrderActionRequest,
            OrderFilters, PageRequest,
        },
        PaymentMethod,
    },
    error::Error,
    service::raffle_statistics_update_service::RaffleStatisticsUpdateService,
};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

pub struct OrderServiceImpl {
    api: Arc<ApiClient>,
    statistics_update_service: Arc<RaffleStatisticsUpdateService>,
    search_cache: ResponseCache<String, PageResponse<Order>>,
    order_cache: ResponseCache<i64, Order>,
}

impl OrderServiceImpl {
    pub fn new(
        api: Arc<ApiClient>,
        statistics_update_service: Arc<RaffleStatisticsUpdateService>,
    ) -> Self {
        Self {
            api,
            statistics_update_service,
            search_cache: ResponseCache::new(),
            order_cache: ResponseCache::new(),
        }
    }

    async fn clear_caches(&self) {
        self.search_cache.clear().await;
        self.order_cache.clear().await;
    }

    fn order_path(&self, id: i64, suffix: &str) -> Result<String, Error> {
        self.api.association_path(&format!("/orders/{id}{suffix}"))
    }

    ///
    /// Executes order action and announces that statistics
    /// of the affected raffle changed
    ///
    async fn order_action<B>(&self, id: i64, action: &str, body: &B) -> Result<Order, Error>
    where
        B: Serialize + Sync,
    {
        tracing::info!(id, action, "executing order action");

        let path = self.order_path(id, &format!("/{action}"))?;
        let order = self.api.put::<_, Order>(&path, body).await?.into_data()?;
        tracing::info!(id, action, status = %order.status, "executed order action");

        self.clear_caches().await;
        self.statistics_update_service
            .notify_raffle_updated(order.raffle_id);

        Ok(order)
    }
}

#[async_trait]
impl OrderService for OrderServiceImpl {
    async fn create_order(&self, order: CreateOrderRequest) -> Result<Order, Error> {
        tracing::info!(
            cart_id = order.cart_id,
            raffle_id = order.raffle_id,
            tickets = order.ticket_ids.len(),
            "creating order"
        );
        tracing::trace!(?order);

        let path = self.api.association_path("/orders")?;
        let order = self.api.post::<_, Order>(&path, &order).await?.into_data()?;
        tracing::info!(id = order.id, order_number = %order.order_number, "created order");

        self.clear_caches().await;

        Ok(order)
    }

    async fn search_orders(
        &self,
        filters: OrderFilters,
        page: PageRequest,
    ) -> Result<PageResponse<Order>, Error> {
        let key = cache_key(&filters, &page);
        if let Some(cached) = self.search_cache.get(&key).await {
            tracing::debug!(%key, "order search answered from cache");
            return Ok(cached);
        }

        tracing::info!("searching orders");
        tracing::trace!(?filters, ?page);

        let path = self.api.association_path("/orders")?;
        let orders = self
            .api
            .get::<PageResponse<Order>>(&path, &search_params(&filters, &page))
            .await?
            .into_data()?;
        tracing::info!(count = orders.content.len(), "found orders");

        self.search_cache.insert(key, orders.clone()).await;

        Ok(orders)
    }

    async fn get_order(&self, id: i64) -> Result<Order, Error> {
        if let Some(cached) = self.order_cache.get(&id).await {
            return Ok(cached);
        }

        tracing::info!(id, "finding order");

        let path = self.order_path(id, "")?;
        let order = self.api.get::<Order>(&path, &[]).await?.into_data()?;
        tracing::info!(id, "found order");

        self.order_cache.insert(id, order.clone()).await;

        Ok(order)
    }

    async fn complete_order(&self, id: i64, payment_method: PaymentMethod) -> Result<Order, Error> {
        self.order_action(id, "complete", &CompleteOrderRequest { payment_method })
            .await
    }

    async fn cancel_order(&self, id: i64, reason: Option<String>) -> Result<Order, Error> {
        self.order_action(id, "cancel", &OrderActionRequest { reason })
            .await
    }

    async fn set_unpaid(&self, id: i64) -> Result<Order, Error> {
        self.order_action(id, "unpaid", &OrderActionRequest { reason: None })
            .await
    }

    async fn refund_order(&self, id: i64, reason: Option<String>) -> Result<Order, Error> {
        self.order_action(id, "refund", &OrderActionRequest { reason })
            .await
    }

    async fn add_comment(&self, order_id: i64, comment: String) -> Result<OrderComment, Error> {
        tracing::info!(order_id, "adding order comment");

        let path = self.order_path(order_id, "/comments")?;
        let comment = self
            .api
            .post::<_, OrderComment>(&path, &CommentRequest { comment })
            .await?
            .into_data()?;
        tracing::info!(order_id, comment_id = comment.id, "added order comment");

        self.clear_caches().await;

        Ok(comment)
    }

    async fn update_comment(
        &self,
        order_id: i64,
        comment_id: i64,
        comment: String,
    ) -> Result<OrderComment, Error> {
        tracing::info!(order_id, comment_id, "updating order comment");

        let path = self.order_path(order_id, &format!("/comments/{comment_id}"))?;
        let comment = self
            .api
            .put::<_, OrderComment>(&path, &CommentRequest { comment })
            .await?
            .into_data()?;
        tracing::info!(order_id, comment_id, "updated order comment");

        self.clear_caches().await;

        Ok(comment)
    }

    async fn delete_comment(&self, order_id: i64, comment_id: i64) -> Result<(), Error> {
        tracing::info!(order_id, comment_id, "deleting order comment");

        let path = self.order_path(order_id, &format!("/comments/{comment_id}"))?;
        self.api.delete::<EmptyResponse>(&path).await?;
        tracing::info!(order_id, comment_id, "deleted order comment");

        self.clear_caches().await;

        Ok(())
    }
}
