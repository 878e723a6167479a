use sqlx::Error as SqlxError;
use thiserror::Error;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match err {
            SqlxError::RowNotFound => RepositoryError::NotFound,
            SqlxError::Database(ref db_err) => match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => RepositoryError::AlreadyExists(
                    db_err.constraint().unwrap_or("unique constraint").to_string(),
                ),
                Some(FOREIGN_KEY_VIOLATION) => RepositoryError::ForeignKey(
                    db_err.constraint().unwrap_or("foreign key").to_string(),
                ),
                _ => RepositoryError::Sqlx(err),
            },
            other => RepositoryError::Sqlx(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_becomes_not_found() {
        let err = RepositoryError::from(SqlxError::RowNotFound);
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[test]
    fn other_errors_stay_database_errors() {
        let err = RepositoryError::from(SqlxError::PoolTimedOut);
        assert!(matches!(err, RepositoryError::Sqlx(_)));
    }
}
