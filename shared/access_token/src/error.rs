#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed access token: {0}")]
    Malformed(#[from] jsonwebtoken::errors::Error),

    #[error("invalid expiration claim: {0}")]
    InvalidExpiration(#[from] time::error::ComponentRange),
}
