//! Raw responses, the default wrapper and status-code dispatch.

use std::fmt;

use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, OperationError, ValidationError};
use crate::formats::Formats;
use crate::status::StatusFamily;

/// A fully received HTTP response.
#[derive(Debug, Clone)]
pub struct ClientResponse {
    code: u16,
    headers: HeaderMap,
    body: Bytes,
}

impl ClientResponse {
    pub fn new(code: u16, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    /// Canonical reason phrase for the status code, when it has one.
    pub fn message(&self) -> &'static str {
        reqwest::StatusCode::from_u16(self.code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("")
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// `true` when decoding would immediately hit end of stream.
    pub fn is_body_empty(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    /// Decodes the success payload.
    ///
    /// An empty body is not an error: it yields `T::default()`.
    pub fn read_payload<T>(&self, formats: &Formats) -> Result<T, ValidationError>
    where
        T: DeserializeOwned + Default,
    {
        if self.is_body_empty() {
            return Ok(T::default());
        }
        formats.decode(self.content_type(), &self.body)
    }
}

/// Catch-all outcome for a status code an operation does not declare.
///
/// The payload is decoded on a best-effort basis with the API's error
/// shape; `None` means the body was empty.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultResponse<P> {
    code: u16,
    payload: Option<P>,
}

impl<P> DefaultResponse<P> {
    pub fn new(code: u16, payload: Option<P>) -> Self {
        Self { code, payload }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    pub fn into_payload(self) -> Option<P> {
        self.payload
    }

    pub fn family(&self) -> StatusFamily {
        StatusFamily::of(self.code)
    }

    pub fn is_success(&self) -> bool {
        self.family() == StatusFamily::Success
    }

    pub fn is_redirect(&self) -> bool {
        self.family() == StatusFamily::Redirect
    }

    pub fn is_client_error(&self) -> bool {
        self.family() == StatusFamily::ClientError
    }

    pub fn is_server_error(&self) -> bool {
        self.family() == StatusFamily::ServerError
    }

    pub fn is_code(&self, code: u16) -> bool {
        self.code == code
    }
}

impl<P: DeserializeOwned> DefaultResponse<P> {
    /// Reads the status and decodes whatever error payload is present.
    pub fn read(response: &ClientResponse, formats: &Formats) -> Result<Self, ValidationError> {
        let payload = if response.is_body_empty() {
            None
        } else {
            Some(formats.decode(response.content_type(), response.body())?)
        };
        Ok(Self::new(response.code(), payload))
    }
}

impl<P: fmt::Debug> fmt::Display for DefaultResponse<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Some(payload) => write!(f, "status {} ({}): {payload:?}", self.code, self.family()),
            None => write!(f, "status {} ({})", self.code, self.family()),
        }
    }
}

impl<P: fmt::Debug> std::error::Error for DefaultResponse<P> {}

/// What a reader made of one response.
#[derive(Debug)]
pub enum Reply<S, E> {
    /// A declared success code with its payload.
    Success(S),
    /// A declared error code, or any undeclared non-2xx code.
    Failure(E),
    /// An undeclared 2xx code, held in the default variant of `E`.
    UnexpectedSuccess(E),
}

impl<S, E> Reply<S, E> {
    /// Routes a default wrapper by its status family.
    pub fn from_default<P>(default: DefaultResponse<P>) -> Self
    where
        E: From<DefaultResponse<P>>,
    {
        if default.is_success() {
            Self::UnexpectedSuccess(default.into())
        } else {
            Self::Failure(default.into())
        }
    }

    pub fn into_result(self, operation: &'static str) -> Result<S, OperationError<E>>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::Failure(err) => Err(OperationError::Response(err)),
            Self::UnexpectedSuccess(response) => {
                Err(OperationError::UnexpectedSuccess { operation, response })
            }
        }
    }
}

/// Status-code dispatch for one operation.
///
/// Implemented by each operation's outcome enum; the success payload type
/// is attached as an associated type so readers stay a pure function of
/// the response.
pub trait ReadResponse: std::error::Error + Sized + Send + 'static {
    type Success;

    fn read_response(
        response: &ClientResponse,
        formats: &Formats,
    ) -> Result<Reply<Self::Success, Self>, ApiError>;

    /// Status code the outcome was produced from.
    fn code(&self) -> u16;
}
