#![allow(dead_code)]

use raffle_admin::{
    api::{ApiClient, ApiClientConfig},
    session::{MemorySessionStorage, SessionStore},
};
use serde_json::{json, Value};
use std::{sync::Arc, time::Duration};
use wiremock::{MockServer, ResponseTemplate};

pub const ASSOCIATION_ID: i64 = 7;
pub const ASSOCIATION_PATH: &str = "/v1/associations/7";

pub struct TestContext {
    pub server: MockServer,
    pub session: Arc<SessionStore>,
    pub api: Arc<ApiClient>,
    pub access_token: String,
}

///
/// Mock backend and api client with logged in session
///
pub async fn setup() -> TestContext {
    let context = setup_anonymous().await;
    context
        .session
        .set_access_token(&context.access_token)
        .unwrap();
    context.session.set_association_id(ASSOCIATION_ID).unwrap();

    context
}

///
/// Mock backend and api client with empty session
///
pub async fn setup_anonymous() -> TestContext {
    let server = MockServer::start().await;
    let session = Arc::new(SessionStore::new(Arc::new(MemorySessionStorage::new())));
    let api = Arc::new(api_client(&server.uri(), session.clone()));

    TestContext {
        server,
        session,
        api,
        access_token: access_token::test::create_long_lived_jwt("3"),
    }
}

pub fn api_client(base_url: &str, session: Arc<SessionStore>) -> ApiClient {
    let config = ApiClientConfig {
        base_url: base_url.to_string(),
        timeout: Duration::from_secs(5),
    };

    ApiClient::new(config, session).unwrap()
}

pub fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "success": true,
        "message": "OK",
        "data": data,
        "timestamp": "2024-05-01T10:00:00Z"
    }))
}

pub fn error(status: u16, code: &str, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "code": code,
        "message": message,
        "success": false,
        "statusCode": status,
        "statusText": "",
        "timestamp": "2024-05-01T10:00:00Z"
    }))
}

pub fn page(content: Vec<Value>) -> Value {
    json!({
        "totalElements": content.len(),
        "totalPages": 1,
        "number": 0,
        "size": 20,
        "content": content,
    })
}

pub fn user(id: i64, role: &str) -> Value {
    json!({
        "id": id,
        "email": "john@example.com",
        "firstName": "John",
        "lastName": "Doe",
        "phoneNumber": null,
        "role": role,
        "enabled": true,
        "associationId": ASSOCIATION_ID,
        "createdAt": "2024-01-10T08:30:00Z",
        "updatedAt": "2024-01-10T08:30:00Z"
    })
}

pub fn raffle(id: i64) -> Value {
    json!({
        "id": id,
        "title": "Spring raffle",
        "description": "Charity raffle",
        "ticketPrice": 2.5,
        "totalTickets": 100,
        "status": "ACTIVE",
        "startDate": "2024-03-01T00:00:00Z",
        "endDate": "2024-06-01T00:00:00Z",
        "images": [],
        "associationId": ASSOCIATION_ID
    })
}

pub fn ticket(id: i64, raffle_id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "ticketNumber": format!("{id:04}"),
        "status": status,
        "raffleId": raffle_id,
        "customerId": null
    })
}

pub fn cart(id: i64, tickets: Vec<Value>) -> Value {
    json!({
        "id": id,
        "userId": 3,
        "tickets": tickets,
        "status": "ACTIVE",
        "createdAt": "2024-05-01T10:00:00Z",
        "updatedAt": "2024-05-01T10:00:00Z"
    })
}

pub fn order(id: i64, raffle_id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "orderNumber": format!("ORD-{id:04}"),
        "status": status,
        "raffleId": raffle_id,
        "customer": {
            "firstName": "Ana",
            "lastName": "Lopez",
            "email": "ana@example.com"
        },
        "tickets": [ticket(1, raffle_id, "SOLD")],
        "payment": null,
        "total": 2.5,
        "comments": []
    })
}
