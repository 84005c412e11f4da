//! Operation outcomes
//!
//! Every store operation reports back through an [`Outcome`]: a human-readable
//! message plus either a typed payload or the [`StoreError`] describing why the
//! request was refused. Anticipated failures are data, never panics.

pub mod store_error;

pub use store_error::StoreError;

/// Result of a store operation
///
/// Carries the display message alongside the payload. Operations without a
/// meaningful payload use `Outcome<()>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    message: String,
    result: Result<T, StoreError>,
}

impl<T> Outcome<T> {
    /// Create a successful outcome carrying `payload`
    pub fn success(message: impl Into<String>, payload: T) -> Self {
        Outcome {
            message: message.into(),
            result: Ok(payload),
        }
    }

    /// Create a failed outcome; the message is the error's display text
    pub fn failure(error: StoreError) -> Self {
        Outcome {
            message: error.to_string(),
            result: Err(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn is_error(&self) -> bool {
        self.result.is_err()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Borrow the payload, if the operation succeeded
    pub fn payload(&self) -> Option<&T> {
        self.result.as_ref().ok()
    }

    /// Borrow the failure reason, if the operation failed
    pub fn error(&self) -> Option<&StoreError> {
        self.result.as_ref().err()
    }

    pub fn into_payload(self) -> Option<T> {
        self.result.ok()
    }

    pub fn into_result(self) -> Result<T, StoreError> {
        self.result
    }

    /// Transform the payload while keeping the message
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            message: self.message,
            result: self.result.map(f),
        }
    }
}

impl<T> From<StoreError> for Outcome<T> {
    fn from(error: StoreError) -> Self {
        Outcome::failure(error)
    }
}

impl<T> std::fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
