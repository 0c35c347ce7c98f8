use crate::{api::ApiError, forms::FormErrors, session};

///
/// Display of variants that are not HTTP failures is shown to the user
/// as is, so it is phrased as a user facing message.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("Received malformed response from the server.")]
    Decode(#[from] serde_json::Error),

    #[error("Received empty response from the server.")]
    MissingData,

    #[error("You are not logged in.")]
    NotAuthenticated,

    #[error("No active cart. Please start a new order.")]
    NoActiveCart,

    #[error("Failed to load user profile")]
    UserProfile,

    #[error("Please correct the errors in the form and try again.")]
    Validation(FormErrors),

    #[error("session error: {0}")]
    Session(#[from] session::Error),

    ///
    /// This error should be returned only in situations
    /// that should never occur when system is setup correctly.
    ///
    #[error("unexpected error: {0}")]
    UnexpectedError(#[from] anyhow::Error),
}

impl Error {
    ///
    /// HTTP status of the failure. Transport failures have status 0.
    ///
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Network(_) => Some(0),
            Error::Api(err) => Some(err.status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
