use crate::dto::input::ApiErrorEnvelope;

///
/// Non 2xx response. Envelope is missing when body
/// was not a backend error envelope (e.g. proxy error page).
///
#[derive(Debug, Clone, thiserror::Error)]
#[error("request failed with status {status}")]
pub struct ApiError {
    pub status: u16,
    pub envelope: Option<ApiErrorEnvelope>,
}

impl ApiError {
    pub fn new(status: u16, envelope: Option<ApiErrorEnvelope>) -> Self {
        Self { status, envelope }
    }

    pub fn code(&self) -> Option<&str> {
        self.envelope.as_ref()?.code.as_deref()
    }

    ///
    /// Status declared in the envelope takes precedence
    /// over the transport status.
    ///
    pub fn status_code(&self) -> u16 {
        self.envelope
            .as_ref()
            .and_then(|envelope| envelope.status_code)
            .unwrap_or(self.status)
    }
}
