//! Body encoding and decoding errors.

use thiserror::Error;

/// Errors raised by the [`Formats`](crate::Formats) codecs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// JSON (de)serialization failed.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// YAML (de)serialization failed.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// A `text/plain` body was not valid UTF-8.
    #[error("Text body is not valid UTF-8: {0}")]
    NonUtf8Text(#[from] std::string::FromUtf8Error),

    /// No codec is registered for the response media type.
    #[error("no consumer: {media_type:?}")]
    NoConsumer {
        /// The media type of the response.
        media_type: String,
    },

    /// No codec is registered for the request media type.
    #[error("no producer: {media_type:?}")]
    NoProducer {
        /// The media type the operation consumes.
        media_type: String,
    },

    /// The body shape cannot be represented in the chosen media type.
    #[error("Unexpected content: expected {expected}, got {actual}")]
    ContentTypeMismatch {
        /// What the codec can handle.
        expected: String,
        /// What it was given.
        actual: String,
    },

    /// A body value could not be turned into JSON before encoding.
    #[error("Failed to serialize request body: {0}")]
    Serialize(String),
}

impl ValidationError {
    /// Returns `true` if this is a parsing error.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::JsonParse(_) | Self::YamlParse(_) | Self::NonUtf8Text(_)
        )
    }

    /// Returns `true` when no codec exists for the media type involved.
    pub fn is_unsupported_media_type(&self) -> bool {
        matches!(self, Self::NoConsumer { .. } | Self::NoProducer { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_consumer_display() {
        let err = ValidationError::NoConsumer {
            media_type: "application/xml".to_string(),
        };
        assert_eq!(err.to_string(), "no consumer: \"application/xml\"");
        assert!(err.is_unsupported_media_type());
        assert!(!err.is_parse_error());
    }

    #[test]
    fn test_json_parse_is_parse_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = ValidationError::JsonParse(json_err);
        assert!(err.is_parse_error());
    }
}
