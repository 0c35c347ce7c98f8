use super::{
    error_code_message, server_status_message, FALLBACK_MESSAGE, NETWORK_ERROR_MESSAGE,
    UNIQUE_CONSTRAINT_MESSAGE, VALIDATION_MESSAGE,
};
use crate::{api::ApiError, dto::input::ApiErrorEnvelope, error::Error};
use serde_json::Value;
use std::collections::BTreeMap;

///
/// Classifies errors and turns them into messages shown to the user.
///
/// Stateless, every method is a pure function of the error.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorHandlerService;

impl ErrorHandlerService {
    pub fn new() -> Self {
        Self
    }

    ///
    /// Message to display for the error. Checks, in order:
    /// connectivity, server faults, unique constraints, known codes,
    /// validation envelopes, server message, client error message.
    ///
    pub fn get_error_message(&self, error: &Error) -> String {
        if error.status() == Some(0) {
            return NETWORK_ERROR_MESSAGE.to_string();
        }

        let Error::Api(api_error) = error else {
            return error.to_string();
        };

        if let Some(message) = server_status_message(api_error.status_code()) {
            return message.to_string();
        }

        if self.is_unique_constraint_error(error) {
            return UNIQUE_CONSTRAINT_MESSAGE.to_string();
        }

        if let Some(message) = api_error.code().and_then(error_code_message) {
            return message.to_string();
        }

        if self.is_validation_error(error) {
            return VALIDATION_MESSAGE.to_string();
        }

        api_error
            .envelope
            .as_ref()
            .and_then(|envelope| envelope.message.as_deref())
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .unwrap_or(FALLBACK_MESSAGE)
            .to_string()
    }

    ///
    /// Field path to message map.
    ///
    /// Messages precomputed by the server are preferred,
    /// otherwise raw error codes are returned as strings.
    ///
    pub fn get_validation_errors(&self, error: &Error) -> BTreeMap<String, String> {
        let Some(envelope) = Self::envelope(error) else {
            return BTreeMap::new();
        };

        if let Some(friendly_errors) = envelope
            .friendly_errors
            .as_ref()
            .filter(|errors| !errors.is_empty())
        {
            return friendly_errors.clone();
        }

        envelope
            .errors
            .iter()
            .flatten()
            .map(|(field, value)| (field.clone(), Self::stringify(value)))
            .collect()
    }

    ///
    /// Envelope carrying per-field errors that is not a unique
    /// constraint violation
    ///
    pub fn is_validation_error(&self, error: &Error) -> bool {
        let Some(envelope) = Self::envelope(error) else {
            return false;
        };

        envelope.has_field_errors() && !self.is_unique_constraint_error(error)
    }

    pub fn is_unique_constraint_error(&self, error: &Error) -> bool {
        let Error::Api(api_error) = error else {
            return false;
        };
        let Some(envelope) = api_error.envelope.as_ref() else {
            return false;
        };

        api_error.status_code() == 409 && envelope.has_field_errors()
    }

    pub fn is_error_of_type(&self, error: &Error, code: &str) -> bool {
        match error {
            Error::Api(api_error) => api_error.code() == Some(code),
            _ => false,
        }
    }

    fn envelope(error: &Error) -> Option<&ApiErrorEnvelope> {
        match error {
            Error::Api(ApiError { envelope, .. }) => envelope.as_ref(),
            _ => None,
        }
    }

    fn stringify(value: &Value) -> String {
        match value {
            Value::String(value) => value.clone(),
            value => value.to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::forms::FormErrors;
    use serde_json::json;

    fn api_error(status: u16, envelope: Value) -> Error {
        let envelope = serde_json::from_value::<ApiErrorEnvelope>(envelope).unwrap();
        Error::Api(ApiError::new(status, Some(envelope)))
    }

    #[test]
    fn message_unauthorized_code() {
        let error = api_error(
            401,
            json!({ "code": "UNAUTHORIZED", "statusCode": 401, "success": false }),
        );

        let message = ErrorHandlerService::new().get_error_message(&error);

        assert_eq!(message, "Authentication failed. Please log in again.");
    }

    #[test]
    fn message_internal_server_error() {
        let error = Error::Api(ApiError::new(500, None));

        let message = ErrorHandlerService::new().get_error_message(&error);

        assert_eq!(
            message,
            "Something went wrong on our end. Please try again later."
        );
    }

    #[test]
    fn message_server_status_wins_over_code() {
        let error = api_error(503, json!({ "code": "NOT_FOUND", "statusCode": 503 }));

        let message = ErrorHandlerService::new().get_error_message(&error);

        assert_eq!(
            message,
            "The service is temporarily unavailable. Please try again later."
        );
    }

    #[test]
    fn message_unique_constraint() {
        let error = api_error(
            409,
            json!({
                "code": "CONFLICT",
                "message": "Unique constraint violated",
                "success": false,
                "statusCode": 409,
                "statusText": "Conflict",
                "timestamp": "2025-03-01T10:00:00Z",
                "constraintName": "USER_EMAIL_UNIQUE",
                "errors": { "userData.email": "VALUE_ALREADY_EXISTS" }
            }),
        );
        let service = ErrorHandlerService::new();

        assert!(service.is_unique_constraint_error(&error));
        assert!(!service.is_validation_error(&error));
        assert_eq!(
            service.get_error_message(&error),
            "One or more values already exist in the system."
        );
    }

    #[test]
    fn conflict_without_errors_is_not_unique_constraint() {
        let error = api_error(409, json!({ "code": "CONFLICT", "statusCode": 409 }));
        let service = ErrorHandlerService::new();

        assert!(!service.is_unique_constraint_error(&error));
        assert_eq!(
            service.get_error_message(&error),
            "The request conflicts with the current state of the resource."
        );
    }

    #[test]
    fn message_validation_envelope() {
        let error = api_error(
            400,
            json!({
                "code": "VALIDATION_ERROR",
                "statusCode": 400,
                "errors": { "email": "EMAIL_INVALID" }
            }),
        );
        let service = ErrorHandlerService::new();

        assert!(service.is_validation_error(&error));
        assert_eq!(
            service.get_error_message(&error),
            "Please correct the errors in the form and try again."
        );
    }

    #[test]
    fn message_unknown_code_uses_server_message() {
        let error = api_error(
            422,
            json!({ "code": "RAFFLE_HAS_ORDERS", "message": "Raffle has orders." }),
        );

        let message = ErrorHandlerService::new().get_error_message(&error);

        assert_eq!(message, "Raffle has orders.");
    }

    #[test]
    fn message_opaque_error() {
        let error = Error::Api(ApiError::new(418, None));

        let message = ErrorHandlerService::new().get_error_message(&error);

        assert_eq!(message, "An unexpected error occurred. Please try again.");
    }

    #[test]
    fn message_client_error() {
        let message = ErrorHandlerService::new().get_error_message(&Error::UserProfile);

        assert_eq!(message, "Failed to load user profile");
    }

    #[test]
    fn message_client_validation_error() {
        let error = Error::Validation(FormErrors::new());

        let message = ErrorHandlerService::new().get_error_message(&error);

        assert_eq!(message, VALIDATION_MESSAGE);
    }

    #[test]
    fn validation_errors_raw_codes() {
        let error = api_error(
            400,
            json!({
                "code": "VALIDATION_ERROR",
                "statusCode": 400,
                "errors": { "email": "EMAIL_INVALID", "password": "PASSWORD_TOO_SHORT" }
            }),
        );

        let errors = ErrorHandlerService::new().get_validation_errors(&error);

        assert_eq!(
            errors,
            BTreeMap::from([
                ("email".to_string(), "EMAIL_INVALID".to_string()),
                ("password".to_string(), "PASSWORD_TOO_SHORT".to_string()),
            ])
        );
    }

    #[test]
    fn validation_errors_prefer_friendly_errors() {
        let error = api_error(
            400,
            json!({
                "statusCode": 400,
                "errors": { "email": "EMAIL_INVALID" },
                "friendlyErrors": { "email": "Please enter a valid email address." }
            }),
        );

        let errors = ErrorHandlerService::new().get_validation_errors(&error);

        assert_eq!(
            errors.get("email").map(String::as_str),
            Some("Please enter a valid email address.")
        );
    }

    #[test]
    fn validation_errors_stringify_non_string_codes() {
        let error = api_error(
            400,
            json!({ "errors": { "tickets": ["TICKET_SOLD", "TICKET_RESERVED"], "quantity": 0 } }),
        );

        let errors = ErrorHandlerService::new().get_validation_errors(&error);

        assert_eq!(
            errors.get("tickets").map(String::as_str),
            Some(r#"["TICKET_SOLD","TICKET_RESERVED"]"#)
        );
        assert_eq!(errors.get("quantity").map(String::as_str), Some("0"));
    }

    #[test]
    fn validation_errors_of_client_error() {
        let errors = ErrorHandlerService::new().get_validation_errors(&Error::NoActiveCart);

        assert!(errors.is_empty());
    }

    #[test]
    fn error_of_type() {
        let error = api_error(404, json!({ "code": "CART_NOT_FOUND" }));
        let service = ErrorHandlerService::new();

        assert!(service.is_error_of_type(&error, "CART_NOT_FOUND"));
        assert!(!service.is_error_of_type(&error, "NOT_FOUND"));
        assert!(!service.is_error_of_type(&Error::NoActiveCart, "CART_NOT_FOUND"));
    }
}
