use crate::dto::RaffleStatus;
use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;

///
/// Body of both create and update requests
///
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaffleRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub ticket_price: Decimal,
    pub total_tickets: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_date: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRaffleStatusRequest {
    pub status: RaffleStatus,
}

///
/// Image uploaded as multipart part named `file`
///
#[derive(Debug, Clone, PartialEq)]
pub struct RaffleImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub content: Vec<u8>,
}
