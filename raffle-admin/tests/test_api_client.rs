mod common;
pub use common::*;

use raffle_admin::{
    dto::input::{EmptyResponse, Raffle},
    error::Error,
    service::ErrorHandlerService,
    session::{MemorySessionStorage, SessionStore},
};
use serde_json::json;
use std::sync::Arc;
use wiremock::{
    matchers::{header, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn requests_carry_bearer_token() {
    let context = setup().await;
    Mock::given(method("GET"))
        .and(path(format!("{ASSOCIATION_PATH}/raffles/1")))
        .and(header(
            "Authorization",
            format!("Bearer {}", context.access_token).as_str(),
        ))
        .respond_with(ok(raffle(1)))
        .expect(1)
        .mount(&context.server)
        .await;

    let path = context.api.association_path("/raffles/1").unwrap();
    let raffle = context
        .api
        .get::<Raffle>(&path, &[])
        .await
        .unwrap()
        .into_data()
        .unwrap();

    assert_eq!(raffle.title, "Spring raffle");
}

#[tokio::test]
async fn association_path_without_session() {
    let context = setup_anonymous().await;

    let result = context.api.association_path("/raffles");

    assert!(matches!(result, Err(Error::NotAuthenticated)));
}

#[tokio::test]
async fn error_envelope_is_decoded() {
    let context = setup().await;
    Mock::given(method("POST"))
        .and(path(format!("{ASSOCIATION_PATH}/users")))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "DUPLICATE_ENTRY",
            "message": "Duplicate entry",
            "success": false,
            "statusCode": 409,
            "statusText": "Conflict",
            "timestamp": "2024-05-01T10:00:00Z",
            "errors": { "email": "ALREADY_EXISTS" },
            "constraintName": "uk_users_email",
            "friendlyErrors": { "email": "Email is already registered" }
        })))
        .mount(&context.server)
        .await;
    let error_handler = ErrorHandlerService::new();

    let path = context.api.association_path("/users").unwrap();
    let err = context
        .api
        .post::<_, EmptyResponse>(&path, &json!({ "email": "john@example.com" }))
        .await
        .unwrap_err();

    assert!(error_handler.is_unique_constraint_error(&err));
    assert_eq!(
        error_handler.get_error_message(&err),
        "One or more values already exist in the system."
    );
    assert_eq!(
        error_handler.get_validation_errors(&err).get("email").map(String::as_str),
        Some("Email is already registered")
    );
}

#[tokio::test]
async fn server_error_without_envelope() {
    let context = setup().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/me"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&context.server)
        .await;

    let err = context
        .api
        .get::<EmptyResponse>("/v1/users/me", &[])
        .await
        .unwrap_err();

    let Error::Api(api_error) = &err else {
        panic!("expected api error, got {err:?}");
    };
    assert_eq!(api_error.status, 502);
    assert!(api_error.envelope.is_none());
    assert_eq!(
        ErrorHandlerService::new().get_error_message(&err),
        "The server is temporarily unreachable. Please try again later."
    );
}

#[tokio::test]
async fn malformed_success_body() {
    let context = setup().await;
    Mock::given(method("GET"))
        .and(path(format!("{ASSOCIATION_PATH}/raffles/1")))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&context.server)
        .await;

    let path = context.api.association_path("/raffles/1").unwrap();
    let result = context.api.get::<Raffle>(&path, &[]).await;

    assert!(matches!(result, Err(Error::Decode(_))));
}

#[tokio::test]
async fn empty_body_is_empty_response() {
    let context = setup().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{ASSOCIATION_PATH}/raffles/1")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&context.server)
        .await;

    let path = context.api.association_path("/raffles/1").unwrap();
    let response = context.api.delete::<EmptyResponse>(&path).await.unwrap();

    assert!(response.data.is_none());
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    let session = Arc::new(SessionStore::new(Arc::new(MemorySessionStorage::new())));
    let api = api_client(&format!("http://{address}"), session);

    let err = api
        .get::<EmptyResponse>("/v1/users/me", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Network(_)));
    assert_eq!(err.status(), Some(0));
    assert_eq!(
        ErrorHandlerService::new().get_error_message(&err),
        "Unable to connect to the server. Please check your internet connection."
    );
}
