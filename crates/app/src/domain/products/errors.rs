//! Products repository errors.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductsRepositoryError {
    #[error("product not found")]
    NotFound,

    #[error("product already exists")]
    AlreadyExists,

    #[error("request rejected with status {status}: {message}")]
    Rejected { status: StatusCode, message: String },

    #[error("unexpected response from product store: {0}")]
    UnexpectedResponse(String),

    #[error("invalid product store url: {0}")]
    InvalidBaseUrl(String),

    #[error("http error")]
    Http(#[from] reqwest::Error),
}

impl ProductsRepositoryError {
    /// Classify a non-success HTTP status and its response body.
    pub(crate) fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::CONFLICT => Self::AlreadyExists,
            status if status.is_client_error() => Self::Rejected {
                status,
                message: body,
            },
            status => Self::UnexpectedResponse(format!("status {status}: {body}")),
        }
    }
}
