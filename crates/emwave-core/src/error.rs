/// Errors raised when sampling inputs are out of range.
///
/// Every sampling call validates its inputs up front and returns this
/// instead of a partial result.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WaveError {
    #[error("invalid wave parameters: {0}")]
    InvalidParameters(String),
}

impl WaveError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        WaveError::InvalidParameters(reason.into())
    }
}

/// Reject NaN and infinities for a named input.
pub fn ensure_finite(name: &str, value: f64) -> Result<(), WaveError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WaveError::invalid(format!("{name} must be finite, got {value}")))
    }
}
