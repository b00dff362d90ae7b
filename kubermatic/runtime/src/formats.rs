//! Media-type codecs and named string formats.
//!
//! [`Formats`] is shared by every operation of a client. It decides how a
//! body is encoded for a given `Content-Type`, how a response body is decoded,
//! and which named string formats (`date-time`, `cidr`, ...) models can check
//! their fields against.

use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};

use ipnetwork::IpNetwork;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::{FieldError, ParamLocation, ValidationError};

/// The media type assumed when a response has no `Content-Type` header.
pub const DEFAULT_MEDIA_TYPE: &str = "application/json";

/// A validator for one named string format.
pub type FormatValidator = fn(&str) -> bool;

/// Encoding strategy for a media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Json,
    Yaml,
    /// The body is a bare UTF-8 string.
    Text,
}

impl Codec {
    fn decode<T: DeserializeOwned>(self, body: &[u8]) -> Result<T, ValidationError> {
        match self {
            Self::Json => Ok(serde_json::from_slice(body)?),
            Self::Yaml => Ok(serde_yaml::from_slice(body)?),
            Self::Text => {
                let text = String::from_utf8(body.to_vec())?;
                Ok(serde_json::from_value(serde_json::Value::String(text))?)
            }
        }
    }

    fn encode(self, value: &serde_json::Value) -> Result<Vec<u8>, ValidationError> {
        match self {
            Self::Json => Ok(serde_json::to_vec(value)?),
            Self::Yaml => Ok(serde_yaml::to_string(value)?.into_bytes()),
            Self::Text => match value {
                serde_json::Value::String(text) => Ok(text.clone().into_bytes()),
                other => Err(ValidationError::ContentTypeMismatch {
                    expected: "a string body for text/plain".to_string(),
                    actual: other.to_string(),
                }),
            },
        }
    }
}

/// Registry of codecs and string-format validators.
#[derive(Debug, Clone)]
pub struct Formats {
    codecs: HashMap<String, Codec>,
    validators: HashMap<String, FormatValidator>,
    default_media_type: String,
}

impl Default for Formats {
    /// JSON, YAML and plain text codecs plus the built-in string formats.
    fn default() -> Self {
        let mut formats = Self::empty();
        formats.register_codec("application/json", Codec::Json);
        formats.register_codec("application/merge-patch+json", Codec::Json);
        formats.register_codec("application/yaml", Codec::Yaml);
        formats.register_codec("application/x-yaml", Codec::Yaml);
        formats.register_codec("text/plain", Codec::Text);

        formats.register_format("date-time", is_date_time);
        formats.register_format("date", is_date);
        formats.register_format("email", is_email);
        formats.register_format("hostname", is_hostname);
        formats.register_format("ipv4", |s| s.parse::<Ipv4Addr>().is_ok());
        formats.register_format("ipv6", |s| s.parse::<Ipv6Addr>().is_ok());
        formats.register_format("cidr", is_cidr);
        formats.register_format("uri", |s| url::Url::parse(s).is_ok());
        formats.register_format("uuid", is_uuid);
        formats
    }
}

impl Formats {
    /// A registry with nothing registered.
    pub fn empty() -> Self {
        Self {
            codecs: HashMap::new(),
            validators: HashMap::new(),
            default_media_type: DEFAULT_MEDIA_TYPE.to_string(),
        }
    }

    pub fn register_codec(&mut self, media_type: &str, codec: Codec) {
        self.codecs.insert(essence(media_type), codec);
    }

    pub fn register_format(&mut self, name: &str, validator: FormatValidator) {
        self.validators.insert(name.to_string(), validator);
    }

    /// Overrides the media type used for responses without `Content-Type`.
    pub fn with_default_media_type(mut self, media_type: &str) -> Self {
        self.default_media_type = essence(media_type);
        self
    }

    pub fn default_media_type(&self) -> &str {
        &self.default_media_type
    }

    /// Finds the codec for a media type, ignoring parameters and falling back
    /// to structured-syntax suffixes (`+json`, `+yaml`).
    pub fn codec_for(&self, media_type: &str) -> Option<Codec> {
        let essence = essence(media_type);
        if let Some(codec) = self.codecs.get(&essence) {
            return Some(*codec);
        }
        if essence.ends_with("+json") {
            Some(Codec::Json)
        } else if essence.ends_with("+yaml") {
            Some(Codec::Yaml)
        } else {
            None
        }
    }

    /// Decodes a body. `None` means the response had no `Content-Type`.
    pub fn decode<T: DeserializeOwned>(
        &self,
        media_type: Option<&str>,
        body: &[u8],
    ) -> Result<T, ValidationError> {
        let media_type = media_type.unwrap_or(&self.default_media_type);
        let codec = self
            .codec_for(media_type)
            .ok_or_else(|| ValidationError::NoConsumer {
                media_type: media_type.to_string(),
            })?;
        codec.decode(body)
    }

    pub fn encode(
        &self,
        media_type: &str,
        value: &serde_json::Value,
    ) -> Result<Vec<u8>, ValidationError> {
        let codec = self
            .codec_for(media_type)
            .ok_or_else(|| ValidationError::NoProducer {
                media_type: media_type.to_string(),
            })?;
        codec.encode(value)
    }

    pub fn contains_format(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    /// Checks `value` against a named format. Unknown formats accept anything.
    pub fn validate_format(&self, name: &str, value: &str) -> bool {
        self.validators
            .get(name)
            .is_none_or(|validator| validator(value))
    }

    /// [`validate_format`](Self::validate_format) as a field error for model validation.
    pub fn check_format(&self, format: &str, field: &str, value: &str) -> Result<(), FieldError> {
        if self.validate_format(format, value) {
            Ok(())
        } else {
            Err(FieldError::invalid_format(
                field,
                ParamLocation::Body,
                format,
                value,
            ))
        }
    }
}

/// Lowercased media type without parameters.
fn essence(media_type: &str) -> String {
    media_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn is_date_time(s: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(s).is_ok()
}

fn is_date(s: &str) -> bool {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !s.chars().any(char::is_whitespace)
        && is_hostname(domain)
        && domain.contains('.')
}

fn is_hostname(s: &str) -> bool {
    if s.is_empty() || s.len() > 253 {
        return false;
    }
    s.trim_end_matches('.').split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

/// `address/prefix`; a bare address is not a network here.
fn is_cidr(s: &str) -> bool {
    s.contains('/') && s.parse::<IpNetwork>().is_ok()
}

fn is_uuid(s: &str) -> bool {
    Uuid::parse_str(s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Named {
        name: String,
    }

    #[test]
    fn test_codec_lookup_ignores_parameters_and_case() {
        let formats = Formats::default();
        assert_eq!(
            formats.codec_for("Application/JSON; charset=utf-8"),
            Some(Codec::Json)
        );
        assert_eq!(formats.codec_for("application/vnd.kkp+json"), Some(Codec::Json));
        assert_eq!(formats.codec_for("application/xml"), None);
    }

    #[test]
    fn test_decode_without_content_type_uses_default() {
        let formats = Formats::default();
        let named: Named = formats.decode(None, br#"{"name":"europe-west3"}"#).unwrap();
        assert_eq!(named.name, "europe-west3");
    }

    #[test]
    fn test_decode_yaml() {
        let formats = Formats::default();
        let named: Named = formats
            .decode(Some("application/yaml"), b"name: kubermatic\n")
            .unwrap();
        assert_eq!(named.name, "kubermatic");
    }

    #[test]
    fn test_decode_text_into_string() {
        let formats = Formats::default();
        let text: String = formats.decode(Some("text/plain"), b"v2.21.0").unwrap();
        assert_eq!(text, "v2.21.0");
    }

    #[test]
    fn test_unknown_media_type_has_no_consumer() {
        let formats = Formats::default();
        let err = formats
            .decode::<Named>(Some("application/xml"), b"<name/>")
            .unwrap_err();
        assert!(matches!(err, ValidationError::NoConsumer { .. }));
    }

    #[test]
    fn test_text_encode_rejects_objects() {
        let formats = Formats::default();
        let err = formats
            .encode("text/plain", &serde_json::json!({"a": 1}))
            .unwrap_err();
        assert!(matches!(err, ValidationError::ContentTypeMismatch { .. }));
    }

    #[test]
    fn test_builtin_formats() {
        let formats = Formats::default();
        assert!(formats.validate_format("cidr", "10.0.0.0/16"));
        assert!(formats.validate_format("cidr", "fd00::/64"));
        assert!(!formats.validate_format("cidr", "10.0.0.0/33"));
        assert!(!formats.validate_format("cidr", "10.0.0.0"));
        assert!(formats.validate_format("email", "admin@kubermatic.io"));
        assert!(!formats.validate_format("email", "admin@"));
        assert!(formats.validate_format("date-time", "2022-03-01T10:00:00Z"));
        assert!(!formats.validate_format("date-time", "yesterday"));
        assert!(formats.validate_format("uuid", "123e4567-e89b-12d3-a456-426614174000"));
        assert!(!formats.validate_format("uuid", "123e4567-e89b-12d3-a456-42661417400g"));
        assert!(!formats.validate_format("cidr", "10.0.0.300/8"));
        assert!(!formats.validate_format("cidr", "fd00::/129"));
        assert!(formats.validate_format("hostname", "api.dev.kubermatic.io"));
        assert!(!formats.validate_format("hostname", "-bad-.io"));
    }

    #[test]
    fn test_unknown_format_accepts_anything() {
        let formats = Formats::default();
        assert!(!formats.contains_format("cron"));
        assert!(formats.validate_format("cron", "not checked"));
    }

    #[test]
    fn test_register_custom_format() {
        let mut formats = Formats::default();
        formats.register_format("dns-label", |s| !s.is_empty() && !s.contains('.'));
        assert!(formats.check_format("dns-label", "name", "seed-a").is_ok());
        let err = formats.check_format("dns-label", "name", "seed.a").unwrap_err();
        assert_eq!(err.name(), "name");
    }
}
