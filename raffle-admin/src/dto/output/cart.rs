use serde::Serialize;

///
/// Body of both reserve and release requests
///
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub ticket_ids: Vec<i64>,
}
