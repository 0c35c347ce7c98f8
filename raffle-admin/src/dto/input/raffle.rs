use crate::dto::RaffleStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Raffle {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub ticket_price: Decimal,
    pub total_tickets: u32,
    pub status: RaffleStatus,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_date: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,
    #[serde(default)]
    pub images: Vec<RaffleImage>,
    pub association_id: Option<i64>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaffleImage {
    pub id: i64,
    pub url: String,
    pub file_name: Option<String>,
    #[serde(default)]
    pub display_order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaffleStatistics {
    pub raffle_id: i64,
    pub available_tickets: u32,
    pub reserved_tickets: u32,
    pub sold_tickets: u32,
    #[serde(default)]
    pub completed_orders: u32,
    #[serde(default)]
    pub pending_orders: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
}
