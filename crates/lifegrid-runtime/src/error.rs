//! Construction-error taxonomy for the runtime.
//!
//! Every operation after construction is total; the only rejectable inputs
//! are zero grid dimensions and a zero tick frequency, both caught when a
//! store or ticker is built.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("grid dimensions must be positive (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("tick frequency must be positive")]
    ZeroFrequency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_dimensions() {
        let err = RuntimeError::InvalidDimensions { rows: 0, cols: 24 };
        assert_eq!(
            err.to_string(),
            "grid dimensions must be positive (got 0x24)"
        );
    }

    #[test]
    fn zero_frequency_display() {
        assert_eq!(
            RuntimeError::ZeroFrequency.to_string(),
            "tick frequency must be positive"
        );
    }
}
