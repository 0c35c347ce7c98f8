use super::Ticket;
use crate::dto::CartStatus;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    pub status: CartStatus,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Cart {
    pub fn ticket_ids(&self) -> Vec<i64> {
        self.tickets.iter().map(|ticket| ticket.id).collect()
    }
}
