//! Error types for catalog loading
//!
//! The calculator and filter never fail: user-entered values are coerced.
//! Errors only arise when reading property data from an external source.

use thiserror::Error;

/// Result type alias for ResiFund operations
pub type Result<T> = std::result::Result<T, ResiFundError>;

/// Errors raised while loading property data
#[derive(Error, Debug)]
pub enum ResiFundError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed JSON input
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A column held a value outside its enumeration (e.g. Type = "Industrial")
    #[error("unknown {field} '{value}' for property {id}")]
    UnknownValue {
        field: &'static str,
        value: String,
        id: u32,
    },

    /// Two records share the same id
    #[error("duplicate property id {0}")]
    DuplicateId(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ResiFundError::UnknownValue {
            field: "Type",
            value: "Industrial".to_string(),
            id: 7,
        };
        assert_eq!(err.to_string(), "unknown Type 'Industrial' for property 7");
        assert_eq!(ResiFundError::DuplicateId(3).to_string(), "duplicate property id 3");
    }
}
