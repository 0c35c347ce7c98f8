use super::TicketSelectionService;
use crate::{
    dto::input::OrderTicket,
    error::Error,
    service::{cart_service::CartService, error_handler_service::ErrorHandlerService},
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::watch;

pub struct TicketSelectionServiceImpl {
    cart_service: Arc<dyn CartService>,
    error_handler: ErrorHandlerService,
    tickets: watch::Sender<Vec<OrderTicket>>,
}

impl TicketSelectionServiceImpl {
    pub fn new(cart_service: Arc<dyn CartService>, error_handler: ErrorHandlerService) -> Self {
        let (tickets, _) = watch::channel(Vec::new());

        Self {
            cart_service,
            error_handler,
            tickets,
        }
    }

    fn insert(tickets: &mut Vec<OrderTicket>, ticket: OrderTicket) -> bool {
        let selected = tickets
            .iter()
            .any(|selected| selected.ticket_number() == ticket.ticket_number());
        if selected {
            return false;
        }

        tickets.push(ticket);
        true
    }

    ///
    /// Releases selected tickets with given numbers and unselects them.
    /// Numbers that are not selected are ignored.
    ///
    async fn release(&self, ticket_numbers: &[String]) -> Result<(), Error> {
        let ticket_ids = self
            .tickets
            .borrow()
            .iter()
            .filter(|ticket| ticket_numbers.iter().any(|number| number == ticket.ticket_number()))
            .map(OrderTicket::id)
            .collect::<Vec<_>>();
        if ticket_ids.is_empty() {
            return Ok(());
        }

        if let Err(err) = self.cart_service.release_tickets(ticket_ids.clone()).await {
            let message = self.error_handler.get_error_message(&err);
            tracing::warn!(?ticket_ids, %message, "failed to release tickets");
            return Err(err);
        }

        self.tickets
            .send_modify(|tickets| tickets.retain(|ticket| !ticket_ids.contains(&ticket.id())));
        tracing::debug!(?ticket_ids, "tickets unselected");

        Ok(())
    }
}

#[async_trait]
impl TicketSelectionService for TicketSelectionServiceImpl {
    fn add_ticket(&self, ticket: OrderTicket) -> bool {
        self.tickets
            .send_if_modified(|tickets| Self::insert(tickets, ticket))
    }

    fn add_tickets(&self, tickets: Vec<OrderTicket>) -> usize {
        let mut added = 0;
        self.tickets.send_if_modified(|selected| {
            for ticket in tickets {
                if Self::insert(selected, ticket) {
                    added += 1;
                }
            }
            added > 0
        });

        added
    }

    async fn remove_ticket(&self, ticket_number: String) -> Result<(), Error> {
        self.release(&[ticket_number]).await
    }

    async fn remove_tickets(&self, ticket_numbers: Vec<String>) -> Result<(), Error> {
        self.release(&ticket_numbers).await
    }

    async fn clear_tickets(&self) -> Result<(), Error> {
        let ticket_numbers = self
            .tickets
            .borrow()
            .iter()
            .map(|ticket| ticket.ticket_number().to_string())
            .collect::<Vec<_>>();

        self.release(&ticket_numbers).await
    }

    fn reset_selection(&self) {
        self.tickets.send_replace(Vec::new());
    }

    fn tickets(&self) -> Vec<OrderTicket> {
        self.tickets.borrow().clone()
    }

    fn contains(&self, ticket_number: &str) -> bool {
        self.tickets
            .borrow()
            .iter()
            .any(|ticket| ticket.ticket_number() == ticket_number)
    }

    fn get_total_price(&self) -> Decimal {
        self.tickets.borrow().iter().map(|ticket| ticket.price).sum()
    }

    fn get_ticket_count(&self) -> usize {
        self.tickets.borrow().len()
    }

    fn subscribe(&self) -> watch::Receiver<Vec<OrderTicket>> {
        self.tickets.subscribe()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        api::ApiError,
        dto::{input::Ticket, TicketStatus},
        service::cart_service::MockCartService,
    };
    use std::str::FromStr;

    fn ticket(id: i64, number: &str, price: &str) -> OrderTicket {
        let ticket = Ticket {
            id,
            ticket_number: number.to_string(),
            status: TicketStatus::Reserved,
            raffle_id: 1,
            customer_id: None,
            created_at: None,
            updated_at: None,
        };

        OrderTicket::new(ticket, Decimal::from_str(price).unwrap())
    }

    fn service(cart_service: MockCartService) -> TicketSelectionServiceImpl {
        TicketSelectionServiceImpl::new(Arc::new(cart_service), ErrorHandlerService::new())
    }

    #[test]
    fn add_ticket_is_idempotent_on_ticket_number() {
        let service = service(MockCartService::new());

        let first = service.add_ticket(ticket(1, "0001", "5"));
        let second = service.add_ticket(ticket(1, "0001", "5"));

        assert!(first);
        assert!(!second);
        assert_eq!(service.get_ticket_count(), 1);
    }

    #[test]
    fn add_tickets_keeps_order_and_skips_selected() {
        let service = service(MockCartService::new());
        service.add_ticket(ticket(2, "0002", "5"));

        let added = service.add_tickets(vec![
            ticket(3, "0003", "5"),
            ticket(2, "0002", "5"),
            ticket(1, "0001", "5"),
        ]);

        let numbers = service
            .tickets()
            .iter()
            .map(|ticket| ticket.ticket_number().to_string())
            .collect::<Vec<_>>();
        assert_eq!(added, 2);
        assert_eq!(numbers, vec!["0002", "0003", "0001"]);
    }

    #[test]
    fn total_price_sums_selected_tickets() {
        let service = service(MockCartService::new());
        service.add_tickets(vec![ticket(1, "0001", "2.50"), ticket(2, "0002", "3.25")]);

        assert_eq!(service.get_total_price(), Decimal::from_str("5.75").unwrap());
    }

    #[test]
    fn total_price_empty_selection() {
        let service = service(MockCartService::new());

        assert_eq!(service.get_total_price(), Decimal::ZERO);
        assert_eq!(service.get_ticket_count(), 0);
    }

    #[tokio::test]
    async fn remove_ticket_released_ok() {
        let mut cart_service = MockCartService::new();
        cart_service
            .expect_release_tickets()
            .withf(|ids| ids == &vec![2])
            .times(1)
            .returning(|_| Ok(()));
        let service = service(cart_service);
        service.add_tickets(vec![ticket(1, "0001", "5"), ticket(2, "0002", "5")]);

        service.remove_ticket("0002".to_string()).await.unwrap();

        assert!(service.contains("0001"));
        assert!(!service.contains("0002"));
    }

    #[tokio::test]
    async fn remove_ticket_release_failed_keeps_ticket() {
        let mut cart_service = MockCartService::new();
        cart_service
            .expect_release_tickets()
            .times(1)
            .returning(|_| Err(Error::Api(ApiError::new(500, None))));
        let service = service(cart_service);
        service.add_ticket(ticket(1, "0001", "5"));

        let result = service.remove_ticket("0001".to_string()).await;

        assert!(matches!(result, Err(Error::Api(_))));
        assert!(service.contains("0001"));
    }

    #[tokio::test]
    async fn remove_ticket_not_selected_is_noop() {
        let mut cart_service = MockCartService::new();
        cart_service.expect_release_tickets().never();
        let service = service(cart_service);

        service.remove_ticket("0009".to_string()).await.unwrap();
    }

    #[tokio::test]
    async fn clear_tickets_releases_everything() {
        let mut cart_service = MockCartService::new();
        cart_service
            .expect_release_tickets()
            .withf(|ids| ids == &vec![1, 2])
            .times(1)
            .returning(|_| Ok(()));
        let service = service(cart_service);
        service.add_tickets(vec![ticket(1, "0001", "5"), ticket(2, "0002", "5")]);

        service.clear_tickets().await.unwrap();

        assert_eq!(service.get_ticket_count(), 0);
    }

    #[test]
    fn reset_selection_does_not_release() {
        let mut cart_service = MockCartService::new();
        cart_service.expect_release_tickets().never();
        let service = service(cart_service);
        service.add_ticket(ticket(1, "0001", "5"));

        service.reset_selection();

        assert!(service.tickets().is_empty());
    }

    #[test]
    fn subscribers_see_added_tickets() {
        let service = service(MockCartService::new());
        let mut receiver = service.subscribe();

        service.add_ticket(ticket(1, "0001", "5"));

        assert!(receiver.has_changed().unwrap());
        assert_eq!(receiver.borrow_and_update().len(), 1);
    }
}
