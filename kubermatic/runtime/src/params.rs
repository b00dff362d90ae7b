//! Traits shared by every per-operation parameter object.

use std::fmt;
use std::time::Duration;

use crate::error::CompositeError;
use crate::formats::Formats;
use crate::request::ClientRequest;

/// Per-call overrides carried by every parameter object.
///
/// Cancellation needs no field here: dropping the future returned by an
/// operation aborts the request.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    pub timeout: Option<Duration>,
    pub http_client: Option<reqwest::Client>,
}

/// Serializes a parameter object into a [`ClientRequest`].
pub trait WriteRequest {
    /// Writes every path, query, header and body parameter.
    ///
    /// All writes are attempted; the failures are returned together and the
    /// request must not be sent.
    fn write_to_request(
        &self,
        request: &mut ClientRequest,
        formats: &Formats,
    ) -> Result<(), CompositeError>;
}

/// A parameter object for one operation.
///
/// The provided methods give every parameter type the same fluent
/// timeout and HTTP client setters.
pub trait OperationParams: WriteRequest + Send + Sync + fmt::Debug {
    fn call_options(&self) -> &CallOptions;

    fn call_options_mut(&mut self) -> &mut CallOptions;

    fn with_timeout(mut self, timeout: Duration) -> Self
    where
        Self: Sized,
    {
        self.set_timeout(timeout);
        self
    }

    fn set_timeout(&mut self, timeout: Duration) {
        self.call_options_mut().timeout = Some(timeout);
    }

    fn with_http_client(mut self, client: reqwest::Client) -> Self
    where
        Self: Sized,
    {
        self.set_http_client(client);
        self
    }

    fn set_http_client(&mut self, client: reqwest::Client) {
        self.call_options_mut().http_client = Some(client);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FieldError, ParamLocation};
    use crate::method::RestMethod;

    #[derive(Debug, Default)]
    struct LookupParams {
        name: String,
        zone: Option<String>,
        options: CallOptions,
    }

    impl WriteRequest for LookupParams {
        fn write_to_request(
            &self,
            request: &mut ClientRequest,
            _formats: &Formats,
        ) -> Result<(), CompositeError> {
            let mut errors = CompositeError::new();
            errors.record(request.set_path_param("name", &self.name));
            if let Some(zone) = &self.zone {
                errors.record(request.set_header_param("Zone", zone));
            }
            errors.into_result()
        }
    }

    impl OperationParams for LookupParams {
        fn call_options(&self) -> &CallOptions {
            &self.options
        }

        fn call_options_mut(&mut self) -> &mut CallOptions {
            &mut self.options
        }
    }

    #[test]
    fn test_fluent_timeout() {
        let params = LookupParams::default().with_timeout(Duration::from_secs(5));
        assert_eq!(params.call_options().timeout, Some(Duration::from_secs(5)));
        assert!(params.call_options().http_client.is_none());
    }

    #[test]
    fn test_every_failure_is_reported() {
        let params = LookupParams {
            name: String::new(),
            zone: Some("bad\nzone".to_string()),
            options: CallOptions::default(),
        };
        let mut request = ClientRequest::new(RestMethod::Get, "/things/{name}");
        let err = params
            .write_to_request(&mut request, &Formats::default())
            .unwrap_err();
        assert_eq!(err.len(), 2);
        assert_eq!(
            err.errors()[0],
            FieldError::required("name", ParamLocation::Path)
        );
    }

    #[test]
    fn test_unset_optional_is_skipped() {
        let params = LookupParams {
            name: "n1".to_string(),
            ..Default::default()
        };
        let mut request = ClientRequest::new(RestMethod::Get, "/things/{name}");
        params
            .write_to_request(&mut request, &Formats::default())
            .unwrap();
        assert!(request.headers().is_empty());
        assert_eq!(request.path_param("name"), Some("n1"));
    }
}
