use crate::LmError;

/// Reject NaN and infinite values.
pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, LmError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(LmError::NonFinite { what, value: v })
    }
}

/// Check that a per-component vector has one entry per component.
pub fn ensure_len<T>(values: &[T], expected: usize, what: &'static str) -> Result<(), LmError> {
    if values.len() == expected {
        Ok(())
    } else {
        Err(LmError::DimensionMismatch {
            what,
            expected,
            found: values.len(),
        })
    }
}
