use thiserror::Error;

/// Engine-wide error type, consolidating all fallible surfaces into a
/// single enum. Analysis and matching themselves never fail; only the
/// JSON import/export paths do.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Represents malformed JSON on the report or knowledge-base paths.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Represents structurally valid but semantically unusable input
    /// (e.g., a knowledge-base entry with an empty question).
    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::Validation("empty question".to_string());
        assert_eq!(err.to_string(), "Validation error: empty question");
    }
}
