//! Operation descriptors handed to a transport.

use crate::auth::AuthInfoWriter;
use crate::method::RestMethod;
use crate::params::OperationParams;

/// Media types every Kubermatic operation consumes and produces.
pub const JSON_MEDIA_TYPES: &[&str] = &["application/json"];

/// Schemes an operation accepts unless it says otherwise.
pub const DEFAULT_OPERATION_SCHEMES: &[&str] = &["https"];

/// Everything a transport needs to perform one call.
#[derive(Debug, Clone, Copy)]
pub struct ClientOperation<'a> {
    /// Operation id as published by the API, e.g. `listSeeds`.
    pub id: &'static str,
    pub method: RestMethod,
    /// Path with `{placeholders}`, relative to the transport's base path.
    pub path_pattern: &'static str,
    pub consumes: &'static [&'static str],
    pub produces: &'static [&'static str],
    pub schemes: &'static [&'static str],
    pub params: &'a dyn OperationParams,
    /// Per-call auth; `None` falls back to the transport's default.
    pub auth: Option<&'a dyn AuthInfoWriter>,
}

impl<'a> ClientOperation<'a> {
    pub fn new(
        id: &'static str,
        method: RestMethod,
        path_pattern: &'static str,
        params: &'a dyn OperationParams,
    ) -> Self {
        Self {
            id,
            method,
            path_pattern,
            consumes: JSON_MEDIA_TYPES,
            produces: JSON_MEDIA_TYPES,
            schemes: DEFAULT_OPERATION_SCHEMES,
            params,
            auth: None,
        }
    }

    pub fn consumes(mut self, media_types: &'static [&'static str]) -> Self {
        self.consumes = media_types;
        self
    }

    pub fn produces(mut self, media_types: &'static [&'static str]) -> Self {
        self.produces = media_types;
        self
    }

    pub fn schemes(mut self, schemes: &'static [&'static str]) -> Self {
        self.schemes = schemes;
        self
    }

    pub fn auth(mut self, auth: Option<&'a dyn AuthInfoWriter>) -> Self {
        self.auth = auth;
        self
    }
}
