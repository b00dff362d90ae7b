//! Auth info writers.
//!
//! A writer decorates a [`ClientRequest`] after the parameters are written
//! and before it is sent. Writers can be passed per call or installed as
//! the transport default.

use std::fmt;
use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderName, HeaderValue};

use crate::error::{ApiError, AuthError};
use crate::formats::Formats;
use crate::request::ClientRequest;

/// Environment variables consulted by [`BearerToken::from_env`], in order.
pub const TOKEN_ENV_VARS: &[&str] = &["KUBERMATIC_TOKEN", "KKP_TOKEN"];

pub trait AuthInfoWriter: Send + Sync + fmt::Debug {
    fn authenticate(&self, request: &mut ClientRequest, formats: &Formats) -> Result<(), ApiError>;
}

/// `Authorization: Bearer <token>`, the scheme the Kubermatic API uses for
/// both OIDC ID tokens and service account tokens.
#[derive(Clone)]
pub struct BearerToken {
    token: String,
}

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Reads the token from the first set, non-empty variable of [`TOKEN_ENV_VARS`].
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_env_vars(TOKEN_ENV_VARS)
    }

    pub fn from_env_vars(vars: &[&str]) -> Result<Self, AuthError> {
        vars.iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty())
            .map(|token| Self::new(token.trim()))
            .ok_or_else(|| AuthError::missing(vars))
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerToken").field("token", &"***").finish()
    }
}

impl AuthInfoWriter for BearerToken {
    fn authenticate(&self, request: &mut ClientRequest, _formats: &Formats) -> Result<(), ApiError> {
        let value = HeaderValue::try_from(format!("Bearer {}", self.token))
            .map_err(|_| AuthError::InvalidKeyFormat)?;
        request.insert_header(AUTHORIZATION, value);
        Ok(())
    }
}

/// Where an API key travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyLocation {
    Header,
    Query,
}

#[derive(Clone)]
pub struct ApiKeyAuth {
    name: String,
    value: String,
    location: ApiKeyLocation,
}

impl ApiKeyAuth {
    pub fn header(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            location: ApiKeyLocation::Header,
        }
    }

    pub fn query(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            location: ApiKeyLocation::Query,
        }
    }
}

impl fmt::Debug for ApiKeyAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyAuth")
            .field("name", &self.name)
            .field("value", &"***")
            .field("location", &self.location)
            .finish()
    }
}

impl AuthInfoWriter for ApiKeyAuth {
    fn authenticate(&self, request: &mut ClientRequest, _formats: &Formats) -> Result<(), ApiError> {
        match self.location {
            ApiKeyLocation::Header => {
                let name = HeaderName::try_from(self.name.as_str()).map_err(|_| {
                    AuthError::InvalidHeader {
                        name: self.name.clone(),
                    }
                })?;
                let value = HeaderValue::try_from(self.value.as_str())
                    .map_err(|_| AuthError::InvalidKeyFormat)?;
                request.insert_header(name, value);
            }
            ApiKeyLocation::Query => request.set_query_param(&self.name, self.value.clone()),
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct BasicAuth {
    username: String,
    password: Option<String>,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: Option<String>) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

impl AuthInfoWriter for BasicAuth {
    fn authenticate(&self, request: &mut ClientRequest, _formats: &Formats) -> Result<(), ApiError> {
        request.set_basic_auth(self.username.clone(), self.password.clone());
        Ok(())
    }
}

/// Sends the request unauthenticated, overriding any transport default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

impl AuthInfoWriter for NoAuth {
    fn authenticate(&self, _request: &mut ClientRequest, _formats: &Formats) -> Result<(), ApiError> {
        Ok(())
    }
}

/// Applies several writers in order; later writers win on header clashes.
#[derive(Debug, Clone, Default)]
pub struct ComposeAuth(Vec<Arc<dyn AuthInfoWriter>>);

impl ComposeAuth {
    pub fn new(writers: Vec<Arc<dyn AuthInfoWriter>>) -> Self {
        Self(writers)
    }

    pub fn with(mut self, writer: Arc<dyn AuthInfoWriter>) -> Self {
        self.0.push(writer);
        self
    }
}

impl AuthInfoWriter for ComposeAuth {
    fn authenticate(&self, request: &mut ClientRequest, formats: &Formats) -> Result<(), ApiError> {
        for writer in &self.0 {
            writer.authenticate(request, formats)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::RestMethod;

    fn request() -> ClientRequest {
        ClientRequest::new(RestMethod::Get, "/api/v1/me")
    }

    #[test]
    fn test_bearer_sets_authorization() {
        let mut req = request();
        BearerToken::new("abc")
            .authenticate(&mut req, &Formats::default())
            .unwrap();
        assert_eq!(req.headers()[AUTHORIZATION], "Bearer abc");
    }

    #[test]
    fn test_bearer_rejects_newlines() {
        let mut req = request();
        let err = BearerToken::new("abc\ndef")
            .authenticate(&mut req, &Formats::default())
            .unwrap_err();
        assert!(matches!(err, ApiError::Auth(AuthError::InvalidKeyFormat)));
    }

    #[test]
    fn test_bearer_debug_redacts() {
        let debug = format!("{:?}", BearerToken::new("secret-token"));
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn test_from_env_vars_reports_every_variable() {
        let err = BearerToken::from_env_vars(&["KKP_TEST_UNSET_A", "KKP_TEST_UNSET_B"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing credential: set one of KKP_TEST_UNSET_A, KKP_TEST_UNSET_B"
        );
    }

    #[test]
    fn test_api_key_in_query() {
        let mut req = request();
        ApiKeyAuth::query("token", "t0k")
            .authenticate(&mut req, &Formats::default())
            .unwrap();
        assert_eq!(req.query(), &[("token".to_string(), "t0k".to_string())]);
    }

    #[test]
    fn test_api_key_bad_header_name() {
        let mut req = request();
        let err = ApiKeyAuth::header("x api key", "v")
            .authenticate(&mut req, &Formats::default())
            .unwrap_err();
        assert!(matches!(err, ApiError::Auth(AuthError::InvalidHeader { .. })));
    }

    #[test]
    fn test_compose_applies_in_order() {
        let mut req = request();
        ComposeAuth::default()
            .with(Arc::new(BearerToken::new("first")))
            .with(Arc::new(ApiKeyAuth::header("Authorization", "Bearer second")))
            .with(Arc::new(BasicAuth::new("admin", None)))
            .authenticate(&mut req, &Formats::default())
            .unwrap();
        assert_eq!(req.headers()[AUTHORIZATION], "Bearer second");
        assert_eq!(req.basic_auth(), Some(("admin", None)));
    }
}
