//! The outgoing request as parameter objects and auth writers see it.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use url::Url;

use crate::error::{ConfigError, FieldError, ParamLocation};
use crate::method::RestMethod;

/// A request under construction.
///
/// Parameter objects write into it through the `set_*` methods; the
/// transport turns it into a URL, headers and a body once every write has
/// succeeded.
#[derive(Debug, Clone)]
pub struct ClientRequest {
    method: RestMethod,
    path_pattern: String,
    path_params: HashMap<String, String>,
    query: Vec<(String, String)>,
    headers: HeaderMap,
    body: Option<serde_json::Value>,
    basic_auth: Option<(String, Option<String>)>,
    timeout: Option<Duration>,
}

impl ClientRequest {
    pub fn new(method: RestMethod, path_pattern: impl Into<String>) -> Self {
        Self {
            method,
            path_pattern: path_pattern.into(),
            path_params: HashMap::new(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
            basic_auth: None,
            timeout: None,
        }
    }

    pub fn method(&self) -> RestMethod {
        self.method
    }

    pub fn path_pattern(&self) -> &str {
        &self.path_pattern
    }

    /// Binds a `{name}` placeholder. Path segments cannot be empty, and
    /// `.` or `..` would be folded away by URL normalization.
    pub fn set_path_param(&mut self, name: &str, value: &str) -> Result<(), FieldError> {
        if value.is_empty() {
            return Err(FieldError::required(name, ParamLocation::Path));
        }
        if is_dot_segment(value) {
            return Err(FieldError::invalid(
                name,
                ParamLocation::Path,
                format!("{value:?} is a relative path segment"),
            ));
        }
        self.path_params.insert(name.to_string(), value.to_string());
        Ok(())
    }

    pub fn path_param(&self, name: &str) -> Option<&str> {
        self.path_params.get(name).map(String::as_str)
    }

    /// Sets a query parameter, replacing earlier values of the same name.
    pub fn set_query_param(&mut self, name: &str, value: impl Into<String>) {
        self.query.retain(|(key, _)| key != name);
        self.query.push((name.to_string(), value.into()));
    }

    /// Appends a query parameter, keeping earlier values of the same name.
    pub fn add_query_param(&mut self, name: &str, value: impl Into<String>) {
        self.query.push((name.to_string(), value.into()));
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn set_header_param(&mut self, name: &str, value: &str) -> Result<(), FieldError> {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            FieldError::invalid(name, ParamLocation::Header, "not a valid header name")
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|_| {
            FieldError::invalid(name, ParamLocation::Header, "not a valid header value")
        })?;
        self.headers.insert(header_name, header_value);
        Ok(())
    }

    /// Inserts an already validated header, as auth writers do.
    pub fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Stores the body; it is encoded later with the operation's media type.
    pub fn set_body_param<T: Serialize + ?Sized>(&mut self, body: &T) -> Result<(), FieldError> {
        let value = serde_json::to_value(body)
            .map_err(|e| FieldError::invalid("body", ParamLocation::Body, e.to_string()))?;
        self.body = Some(value);
        Ok(())
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    pub fn set_basic_auth(&mut self, username: impl Into<String>, password: Option<String>) {
        self.basic_auth = Some((username.into(), password));
    }

    pub fn basic_auth(&self) -> Option<(&str, Option<&str>)> {
        self.basic_auth
            .as_ref()
            .map(|(user, password)| (user.as_str(), password.as_deref()))
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Resolves the path pattern against `base` and appends the query.
    ///
    /// Each pattern segment becomes one percent-encoded URL segment, so a
    /// value containing `/` cannot escape its placeholder. Every unbound
    /// placeholder is named in the error.
    pub fn build_url(&self, base: &Url) -> Result<Url, ConfigError> {
        let unbound: Vec<String> = placeholders(&self.path_pattern)
            .into_iter()
            .filter(|name| !self.path_params.contains_key(*name))
            .map(|name| format!("{{{name}}}"))
            .collect();
        if !unbound.is_empty() {
            return Err(ConfigError::invalid_path(format!(
                "no value for {} in {}",
                unbound.join(", "),
                self.path_pattern
            )));
        }

        let mut url = base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                ConfigError::invalid_path(format!("base URL {base} cannot carry a path"))
            })?;
            segments.pop_if_empty();
            for raw in self.path_pattern.split('/').filter(|s| !s.is_empty()) {
                let segment = self.substitute(raw)?;
                if is_dot_segment(&segment) {
                    return Err(ConfigError::invalid_path(format!(
                        "{raw} resolves to {segment:?} in {}",
                        self.path_pattern
                    )));
                }
                segments.push(&segment);
            }
        }
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(
                self.query
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str())),
            );
        }
        Ok(url)
    }

    fn substitute(&self, segment: &str) -> Result<String, ConfigError> {
        let mut resolved = String::with_capacity(segment.len());
        let mut rest = segment;
        while let Some(start) = rest.find('{') {
            resolved.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after.find('}').ok_or_else(|| {
                ConfigError::invalid_path(format!("unclosed brace in {}", self.path_pattern))
            })?;
            let name = &after[..end];
            let value = self.path_params.get(name).ok_or_else(|| {
                ConfigError::invalid_path(format!(
                    "no value for {{{name}}} in {}",
                    self.path_pattern
                ))
            })?;
            resolved.push_str(value);
            rest = &after[end + 1..];
        }
        resolved.push_str(rest);
        Ok(resolved)
    }
}

/// `.` and `..`, including their `%2e` spellings, which URL parsing also folds.
fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

/// Placeholder names of a path pattern, in order of appearance.
pub fn placeholders(pattern: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = pattern;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            break;
        };
        if end > 0 {
            names.push(&after[..end]);
        }
        rest = &after[end + 1..];
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://kkp.example.com/").unwrap()
    }

    #[test]
    fn test_placeholders_in_order() {
        assert_eq!(
            placeholders("/api/v2/projects/{project_id}/clusters/{cluster_id}/addons/{addon_id}"),
            vec!["project_id", "cluster_id", "addon_id"]
        );
        assert!(placeholders("/api/v1/me").is_empty());
    }

    #[test]
    fn test_empty_path_param_is_required() {
        let mut request = ClientRequest::new(RestMethod::Get, "/api/v1/projects/{project_id}");
        let err = request.set_path_param("project_id", "").unwrap_err();
        assert_eq!(err, FieldError::required("project_id", ParamLocation::Path));
    }

    #[test]
    fn test_build_url_substitutes_and_encodes() {
        let mut request =
            ClientRequest::new(RestMethod::Get, "/api/v1/admin/seeds/{seed_name}");
        request.set_path_param("seed_name", "eu west/1").unwrap();
        let url = request.build_url(&base()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://kkp.example.com/api/v1/admin/seeds/eu%20west%2F1"
        );
    }

    #[test]
    fn test_build_url_keeps_base_path() {
        let mut request = ClientRequest::new(RestMethod::Get, "/api/v1/projects");
        request.set_query_param("displayAll", "true");
        let base = Url::parse("http://127.0.0.1:8080/kkp/").unwrap();
        let url = request.build_url(&base).unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8080/kkp/api/v1/projects?displayAll=true"
        );
    }

    #[test]
    fn test_unbound_placeholder_is_config_error() {
        let request = ClientRequest::new(RestMethod::Delete, "/api/v2/ipampools/{ipampool_name}");
        let err = request.build_url(&base()).unwrap_err();
        assert!(err.to_string().contains("{ipampool_name}"));
    }

    #[test]
    fn test_dot_path_values_are_rejected() {
        let mut request =
            ClientRequest::new(RestMethod::Get, "/api/v1/admin/seeds/{seed_name}");
        for value in [".", "..", "%2e", ".%2E"] {
            let err = request.set_path_param("seed_name", value).unwrap_err();
            assert_eq!(err.name(), "seed_name");
            assert_eq!(err.location(), ParamLocation::Path);
        }
        assert!(request.path_param("seed_name").is_none());

        request.set_path_param("seed_name", "...").unwrap();
        let url = request.build_url(&base()).unwrap();
        assert_eq!(url.as_str(), "https://kkp.example.com/api/v1/admin/seeds/...");
    }

    #[test]
    fn test_composed_segment_cannot_become_dot_dot() {
        let mut request = ClientRequest::new(RestMethod::Delete, "/api/v1/projects/.{a}");
        request.set_path_param("a", ".x").unwrap();
        assert!(request.build_url(&base()).is_ok());
        let mut request = ClientRequest::new(RestMethod::Delete, "/api/v1/projects/.{a}");
        request.path_params.insert("a".to_string(), ".".to_string());
        let err = request.build_url(&base()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPathTemplate { .. }));
    }

    #[test]
    fn test_every_unbound_placeholder_is_reported() {
        let mut request = ClientRequest::new(
            RestMethod::Get,
            "/api/v2/projects/{project_id}/clusters/{cluster_id}/addons/{addon_id}",
        );
        request.set_path_param("cluster_id", "c1").unwrap();
        let message = request.build_url(&base()).unwrap_err().to_string();
        assert!(message.contains("{project_id}, {addon_id}"), "{message}");
    }

    #[test]
    fn test_set_query_param_replaces() {
        let mut request = ClientRequest::new(RestMethod::Get, "/x");
        request.set_query_param("type", "snapshot");
        request.set_query_param("type", "automatic");
        request.add_query_param("label", "a");
        request.add_query_param("label", "b");
        assert_eq!(
            request.query(),
            &[
                ("type".to_string(), "automatic".to_string()),
                ("label".to_string(), "a".to_string()),
                ("label".to_string(), "b".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_header_value() {
        let mut request = ClientRequest::new(RestMethod::Get, "/x");
        let err = request.set_header_param("Location", "west\neurope").unwrap_err();
        assert_eq!(err.location(), ParamLocation::Header);
        assert!(request.set_header_param("Location", "westeurope").is_ok());
        assert_eq!(request.headers()["location"], "westeurope");
    }
}
