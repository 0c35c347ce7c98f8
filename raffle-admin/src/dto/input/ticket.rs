use crate::dto::TicketStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i64,
    pub ticket_number: String,
    pub status: TicketStatus,
    pub raffle_id: i64,
    pub customer_id: Option<i64>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

///
/// Ticket selected for an order.
/// Price is copied from the raffle when the ticket is selected.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTicket {
    #[serde(flatten)]
    pub ticket: Ticket,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl OrderTicket {
    pub fn new(ticket: Ticket, price: Decimal) -> Self {
        Self { ticket, price }
    }

    pub fn id(&self) -> i64 {
        self.ticket.id
    }

    pub fn ticket_number(&self) -> &str {
        &self.ticket.ticket_number
    }
}
