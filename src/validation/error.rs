use thiserror::Error;

/// Error classification for path analysis
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// A grid locator string is structurally invalid
    #[error("invalid grid locator {locator:?}: {reason}")]
    InvalidFormat { locator: String, reason: String },

    /// A numeric input falls outside its documented bounds
    #[error("{parameter} = {value} outside valid range {bounds}")]
    OutOfRange {
        parameter: String,
        value: f64,
        bounds: String,
    },

    /// An input combination for which the requested metric has no defined value
    #[error("degenerate input: {reason}")]
    DegenerateInput { reason: String },
}

pub type PathResult<T> = Result<T, PathError>;

impl PathError {
    pub fn out_of_range(parameter: &str, value: f64, bounds: &str) -> Self {
        Self::OutOfRange {
            parameter: parameter.to_string(),
            value,
            bounds: bounds.to_string(),
        }
    }

    pub fn invalid_format(locator: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            locator: locator.to_string(),
            reason: reason.into(),
        }
    }
}
