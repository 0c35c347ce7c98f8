//!
//! User facing messages of classified errors
//!

pub const NETWORK_ERROR_MESSAGE: &str =
    "Unable to connect to the server. Please check your internet connection.";
pub const UNIQUE_CONSTRAINT_MESSAGE: &str = "One or more values already exist in the system.";
pub const VALIDATION_MESSAGE: &str = "Please correct the errors in the form and try again.";
pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred. Please try again.";

pub fn server_status_message(status: u16) -> Option<&'static str> {
    let message = match status {
        500 => "Something went wrong on our end. Please try again later.",
        502 => "The server is temporarily unreachable. Please try again later.",
        503 => "The service is temporarily unavailable. Please try again later.",
        504 => "The server took too long to respond. Please try again later.",
        _ => return None,
    };

    Some(message)
}

pub fn error_code_message(code: &str) -> Option<&'static str> {
    let message = match code {
        "UNAUTHORIZED" => "Authentication failed. Please log in again.",
        "INVALID_CREDENTIALS" => "Invalid email or password.",
        "TOKEN_EXPIRED" => "Your session has expired. Please log in again.",
        "FORBIDDEN" | "ACCESS_DENIED" => "You do not have permission to perform this action.",
        "ACCOUNT_DISABLED" => "Your account has been disabled. Please contact an administrator.",
        "EMAIL_NOT_VERIFIED" => "Please verify your email address before logging in.",
        "VERIFICATION_TOKEN_INVALID" => "The verification link is invalid or has expired.",
        "RESET_TOKEN_INVALID" => "The password reset link is invalid or has expired.",
        "NOT_FOUND" => "The requested resource was not found.",
        "USER_NOT_FOUND" => "User not found.",
        "ASSOCIATION_NOT_FOUND" => "Association not found.",
        "RAFFLE_NOT_FOUND" => "Raffle not found.",
        "ORDER_NOT_FOUND" => "Order not found.",
        "CART_NOT_FOUND" => "Cart not found. Please start a new order.",
        "TICKET_NOT_FOUND" => "Ticket not found.",
        "CART_EXPIRED" => "Your cart has expired. Please start a new order.",
        "TICKETS_NOT_AVAILABLE" => "One or more selected tickets are no longer available.",
        "TICKET_ALREADY_RESERVED" => "This ticket is already reserved.",
        "NOT_ENOUGH_TICKETS" => "There are not enough available tickets for this request.",
        "RAFFLE_NOT_ACTIVE" => "This raffle is not active.",
        "INVALID_STATUS_TRANSITION" => "This action is not allowed in the current status.",
        "BAD_REQUEST" => "The request was invalid.",
        "CONFLICT" => "The request conflicts with the current state of the resource.",
        "PAYLOAD_TOO_LARGE" => "The uploaded file is too large.",
        "UNSUPPORTED_MEDIA_TYPE" => "The uploaded file type is not supported.",
        "TOO_MANY_REQUESTS" => "Too many requests. Please wait a moment and try again.",
        _ => return None,
    };

    Some(message)
}
