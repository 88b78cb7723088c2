use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Dish repository is unavailable")]
    RepositoryUnavailable,

    #[error("Failed to write to the dish repository")]
    RepositoryWriteError,

    #[error("Malformed dish record: {0}")]
    MalformedDishRecord(String),

    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Unknown category: {0}")]
    InvalidCategory(String),

    #[error("Unknown diet tag: {0}")]
    InvalidDietTag(String),

    #[error("Internal server error")]
    InternalServerError,
}
