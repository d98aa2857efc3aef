use thiserror::Error;

/// Convenient result alias for the lead intake library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The request body was not valid JSON, or a field had the wrong JSON type.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// The request body parsed, but was not a JSON object.
    #[error("request body must be a JSON object, found {found}")]
    BodyNotObject { found: &'static str },

    /// A score source produced a value outside the closed interval [1, 100].
    #[error("purchase probability {value} is outside the range 1-100")]
    ScoreOutOfRange { value: u8 },

    /// The backing store rejected or failed the write.
    #[error("failed to store lead {lead_id}: {message}")]
    Store { lead_id: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_mentions_lead_and_cause() {
        let err = Error::Store {
            lead_id: "abc".to_string(),
            message: "throttled".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("abc"));
        assert!(text.contains("throttled"));
    }

    #[test]
    fn invalid_body_wraps_serde_error() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = serde_err.into();
        assert!(err.to_string().starts_with("invalid request body"));
    }
}
