#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("session io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("session value corrupted: {0}")]
    Corrupted(&'static str),
}
