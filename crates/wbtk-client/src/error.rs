use thiserror::Error;
use wbtk_cache::CacheError;
use wbtk_model::ModelError;

/// Errors from talking to a Wikibase instance.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failure (connection, TLS, non-2xx status).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with an error payload.
    #[error("API error {code}: {info}")]
    Api { code: String, info: String },

    /// The login flow was refused.
    #[error("login failed: {0}")]
    Login(String),

    /// The server kept reporting replication lag past the retry budget.
    #[error("maxlag retries exhausted after {attempts} attempts")]
    MaxlagExhausted { attempts: u32 },

    /// A 2xx response that does not have the promised shape.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Failure in the entity cache along the load path.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// Failure building an entity from fetched JSON.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
