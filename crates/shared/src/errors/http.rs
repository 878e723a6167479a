use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidCredentials => {
                HttpError::Unauthorized("Invalid credentials".to_string())
            }

            ServiceError::Validation(errors) => HttpError::BadRequest(errors.join("; ")),

            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::AlreadyExists(msg) => HttpError::BadRequest(msg),

            ServiceError::InvalidTransition { from, to } => {
                HttpError::Conflict(format!("Cannot move order from {from} to {to}"))
            }

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::AlreadyExists(msg) => {
                    HttpError::BadRequest(format!("Already exists: {msg}"))
                }
                RepositoryError::ForeignKey(msg) => {
                    HttpError::BadRequest(format!("Foreign key violation: {msg}"))
                }
                other => HttpError::Internal(other.to_string()),
            },

            ServiceError::Jwt(_) => HttpError::Unauthorized("Invalid token".into()),

            ServiceError::TokenExpired => HttpError::Unauthorized("Token expired".into()),

            ServiceError::Bcrypt(err) => HttpError::Internal(format!("bcrypt: {err}")),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Internal(detail) => {
                error!("❌ Internal error: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_registration_is_a_bad_request() {
        let err = HttpError::from(ServiceError::AlreadyExists("User already exists".into()));
        assert!(matches!(err, HttpError::BadRequest(msg) if msg == "User already exists"));
    }

    #[test]
    fn internal_detail_is_not_leaked() {
        let response = HttpError::Internal("connection refused".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_transition_is_a_conflict() {
        let err = HttpError::from(ServiceError::InvalidTransition {
            from: crate::model::OrderStatus::Delivered,
            to: crate::model::OrderStatus::Pending,
        });
        assert!(matches!(err, HttpError::Conflict(_)));
    }
}
