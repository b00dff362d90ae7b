//! The transport seam and its reqwest implementation.
//!
//! [`ClientTransport`] is what facades talk to. [`HttpTransport`] is the
//! stock implementation; tests and embedders can swap in their own through
//! the root client's `set_transport`.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use tracing::{Span, debug, instrument, warn};
use url::Url;

use crate::auth::AuthInfoWriter;
use crate::config::TransportConfig;
use crate::error::{ApiError, ClientError, ConfigError, OperationError};
use crate::formats::{DEFAULT_MEDIA_TYPE, Formats};
use crate::operation::ClientOperation;
use crate::request::ClientRequest;
use crate::response::{ClientResponse, ReadResponse};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A boxed future, so transports stay object safe.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Performs the HTTP exchange for an operation descriptor.
///
/// Implementations write the parameters, apply auth, send the request and
/// hand back the full response. Status codes are never interpreted here.
pub trait ClientTransport: Send + Sync + fmt::Debug {
    fn submit<'a>(
        &'a self,
        operation: ClientOperation<'a>,
        formats: &'a Formats,
    ) -> BoxFuture<'a, Result<ClientResponse, ApiError>>;
}

/// Runs one operation end to end: transport round trip, then the reader.
///
/// Every facade method is a thin wrapper around this function.
pub async fn submit<E: ReadResponse>(
    transport: &dyn ClientTransport,
    formats: &Formats,
    operation: ClientOperation<'_>,
) -> Result<E::Success, OperationError<E>> {
    let id = operation.id;
    let response = transport.submit(operation, formats).await?;
    let reply = E::read_response(&response, formats)?;
    reply.into_result(id)
}

/// Builder for an [`HttpTransport`].
#[derive(Debug)]
pub struct HttpTransportBuilder {
    config: TransportConfig,
    timeout: Duration,
    default_headers: HeaderMap,
    default_auth: Option<Arc<dyn AuthInfoWriter>>,
}

impl HttpTransportBuilder {
    fn new(config: TransportConfig) -> Self {
        Self {
            config,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
            default_auth: None,
        }
    }

    /// Timeout for calls whose parameters do not set one.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header to every request.
    ///
    /// ## Errors
    ///
    /// [`ConfigError::InvalidDefaultHeader`] when either half is not legal HTTP.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        let rejected = |reason: String| ConfigError::InvalidDefaultHeader {
            name: name.as_ref().to_string(),
            reason,
        };
        let header_name =
            HeaderName::try_from(name.as_ref()).map_err(|e| rejected(e.to_string()))?;
        let header_value =
            HeaderValue::try_from(value.as_ref()).map_err(|e| rejected(e.to_string()))?;
        self.default_headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Auth applied when a call passes none.
    pub fn default_auth(mut self, auth: Arc<dyn AuthInfoWriter>) -> Self {
        self.default_auth = Some(auth);
        self
    }

    /// ## Errors
    ///
    /// Fails when reqwest cannot set up its TLS backend.
    pub fn build(self) -> Result<HttpTransport, ApiError> {
        let client = reqwest::Client::builder()
            .default_headers(self.default_headers)
            .build()
            .map_err(ClientError::Request)?;

        Ok(HttpTransport {
            client,
            config: self.config,
            timeout: self.timeout,
            default_auth: self.default_auth,
        })
    }
}

/// [`ClientTransport`] over a pooled `reqwest::Client`.
///
/// ## Examples
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use kubermatic_runtime::{BearerToken, HttpTransport, TransportConfig};
///
/// let transport = HttpTransport::builder(TransportConfig::from_env())
///     .default_auth(Arc::new(BearerToken::from_env()?))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: TransportConfig,
    timeout: Duration,
    default_auth: Option<Arc<dyn AuthInfoWriter>>,
}

impl HttpTransport {
    pub fn builder(config: TransportConfig) -> HttpTransportBuilder {
        HttpTransportBuilder::new(config)
    }

    /// Same as `builder(config).build()`.
    pub fn new(config: TransportConfig) -> Result<Self, ApiError> {
        Self::builder(config).build()
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    fn base_url(&self, operation: &ClientOperation<'_>) -> Result<Url, ConfigError> {
        let scheme = self.config.pick_scheme(operation.schemes).ok_or_else(|| {
            ConfigError::UnsupportedScheme {
                operation: operation.id.to_string(),
                offered: operation.schemes.join(", "),
            }
        })?;
        self.config.base_url(scheme)
    }

    #[instrument(
        name = "api_request",
        skip(self, operation, formats),
        fields(
            operation = operation.id,
            http.method = %operation.method,
            http.idempotent = operation.method.is_idempotent(),
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    async fn execute(
        &self,
        operation: ClientOperation<'_>,
        formats: &Formats,
    ) -> Result<ClientResponse, ApiError> {
        let mut request = ClientRequest::new(operation.method, operation.path_pattern);

        // nothing leaves the process unless every parameter wrote cleanly
        if let Err(errors) = operation.params.write_to_request(&mut request, formats) {
            debug!(%errors, "parameter serialization failed");
            return Err(errors.into());
        }

        if let Some(auth) = operation.auth {
            auth.authenticate(&mut request, formats)?;
        } else if let Some(auth) = self.default_auth.as_deref() {
            auth.authenticate(&mut request, formats)?;
        }

        let url = request.build_url(&self.base_url(&operation)?)?;
        Span::current().record("http.url", url.as_str());

        let options = operation.params.call_options();
        let client = options.http_client.as_ref().unwrap_or(&self.client);
        let timeout = options
            .timeout
            .or(request.timeout())
            .unwrap_or(self.timeout);
        let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);

        let mut builder = client
            .request(operation.method.to_reqwest(), url)
            .headers(request.headers().clone())
            .timeout(timeout);

        if let Some(accept) = operation.produces.first() {
            builder = builder.header(ACCEPT, *accept);
        }
        if let Some(body) = request.body() {
            let media_type = operation
                .consumes
                .first()
                .copied()
                .unwrap_or(DEFAULT_MEDIA_TYPE);
            let encoded = formats.encode(media_type, body)?;
            builder = builder.header(CONTENT_TYPE, media_type).body(encoded);
        }
        if let Some((username, password)) = request.basic_auth() {
            builder = builder.basic_auth(username, password);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, "request failed");
            ClientError::from_reqwest(e, timeout_ms)
        })?;

        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());
        let otel_status = if status.is_server_error() {
            "ERROR"
        } else if status.is_success() {
            "OK"
        } else {
            "UNSET"
        };
        Span::current().record("otel.status_code", otel_status);

        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::from_reqwest(e, timeout_ms))?;

        debug!(bytes = body.len(), "response received");
        Ok(ClientResponse::new(status.as_u16(), headers, body))
    }
}

impl ClientTransport for HttpTransport {
    fn submit<'a>(
        &'a self,
        operation: ClientOperation<'a>,
        formats: &'a Formats,
    ) -> BoxFuture<'a, Result<ClientResponse, ApiError>> {
        Box::pin(self.execute(operation, formats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompositeError;
    use crate::method::RestMethod;
    use crate::params::{CallOptions, OperationParams, WriteRequest};
    use tracing_test::traced_test;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Default)]
    struct SeedParams {
        seed_name: String,
        options: CallOptions,
    }

    impl WriteRequest for SeedParams {
        fn write_to_request(
            &self,
            request: &mut ClientRequest,
            _formats: &Formats,
        ) -> Result<(), CompositeError> {
            let mut errors = CompositeError::new();
            errors.record(request.set_path_param("seed_name", &self.seed_name));
            errors.into_result()
        }
    }

    impl OperationParams for SeedParams {
        fn call_options(&self) -> &CallOptions {
            &self.options
        }

        fn call_options_mut(&mut self) -> &mut CallOptions {
            &mut self.options
        }
    }

    async fn transport_for(server: &MockServer) -> HttpTransport {
        HttpTransport::new(TransportConfig::from_url(&server.uri()).unwrap()).unwrap()
    }

    #[tokio::test]
    #[traced_test]
    async fn test_span_records_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/admin/seeds/europe"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        let transport = transport_for(&server).await;
        let params = SeedParams {
            seed_name: "europe".to_string(),
            ..Default::default()
        };
        let op = ClientOperation::new(
            "getSeed",
            RestMethod::Get,
            "/api/v1/admin/seeds/{seed_name}",
            &params,
        );
        let response = transport
            .submit(op, &Formats::default())
            .await
            .unwrap();

        assert_eq!(response.code(), 200);
        assert!(logs_contain("api_request"));
        assert!(logs_contain("getSeed"));
        assert!(logs_contain("idempotent=true"));
        assert!(logs_contain("response received"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_parameter_failure_is_logged_and_not_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let transport = transport_for(&server).await;
        let params = SeedParams::default();
        let op = ClientOperation::new(
            "getSeed",
            RestMethod::Get,
            "/api/v1/admin/seeds/{seed_name}",
            &params,
        );
        let err = transport
            .submit(op, &Formats::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Params(_)));
        assert!(logs_contain("parameter serialization failed"));
    }

    #[tokio::test]
    async fn test_unsupported_scheme() {
        let transport =
            HttpTransport::new(TransportConfig::default().with_schemes(Vec::<String>::new()))
                .unwrap();
        let params = SeedParams {
            seed_name: "s".to_string(),
            ..Default::default()
        };
        let op = ClientOperation::new("getSeed", RestMethod::Get, "/x/{seed_name}", &params)
            .schemes(&[]);
        let err = transport
            .submit(op, &Formats::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Config(ConfigError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn test_default_header_rejects_bad_name() {
        let err = HttpTransport::builder(TransportConfig::default())
            .default_header("bad header", "v")
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Config(ConfigError::InvalidDefaultHeader { ref name, .. }) if name == "bad header"
        ));
    }
}
