use thiserror::Error;

/// The single recoverable error of the catalog model. Every failing operation
/// returns one of these and leaves the entity untouched; callers report and
/// carry on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("rating must be between 0 and 5 (got {value})")]
    RatingOutOfRange { value: f64 },

    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("{field} must be positive")]
    NonPositive { field: &'static str },

    #[error("duplicate id: {id}")]
    DuplicateId { id: String },
}
