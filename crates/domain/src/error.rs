/// Error raised when a caller-supplied query parameter cannot be used.
///
/// The display strings are part of the API contract: they end up verbatim
/// in the `error` field of a `400` response body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The named parameter is missing or does not parse as a finite number.
    #[error("invalid parameter: {0}")]
    InvalidNumber(String),
    /// The named parameter parsed as a number but carries a fractional part.
    #[error("parameter {0} must be an integer")]
    NotAnInteger(String),
    /// A combined bounding box string does not have exactly four fields.
    #[error("bbox must be provided as \"s,w,n,e\"")]
    MalformedBbox,
}

/// Top level error for clinic lookups.
///
/// Validation failures keep their message so the HTTP layer can echo it
/// back to the caller; storage failures are opaque by design and only
/// surface a generic message.
#[derive(Debug, thiserror::Error)]
pub enum BuscaDogError {
    #[error("validation error")]
    Validation(#[from] ValidationError),
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}
