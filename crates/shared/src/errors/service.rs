use crate::{errors::repository::RepositoryError, model::OrderStatus};
use bcrypt::BcryptError;
use jsonwebtoken::errors::Error as JwtError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("Cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] BcryptError),

    #[error("JWT error: {0}")]
    Jwt(#[from] JwtError),

    #[error("Token has expired")]
    TokenExpired,
}

impl ServiceError {
    /// Replaces a bare repository not-found with a resource specific message.
    pub fn or_not_found(self, message: &str) -> Self {
        match self {
            ServiceError::Repo(RepositoryError::NotFound) => {
                ServiceError::NotFound(message.to_string())
            }
            other => other,
        }
    }
}
