//! Runtime for the Kubermatic API client.
//!
//! This crate knows nothing about Kubermatic resources. It provides the
//! pieces every operation is assembled from:
//!
//! - **Parameters**: [`OperationParams`] objects write themselves into a
//!   [`ClientRequest`]; any failure aborts the call before it is sent
//! - **Transport**: [`ClientTransport`] is the swappable seam, [`HttpTransport`]
//!   the `reqwest` implementation with `tracing` spans
//! - **Readers**: [`ReadResponse`] turns a [`ClientResponse`] into exactly one
//!   [`Reply`], with [`DefaultResponse`] catching undeclared status codes
//! - **Formats**: [`Formats`] holds media-type codecs and string-format validators
//! - **Errors**: layered `thiserror` enums topped by [`ApiError`] and
//!   [`OperationError`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use kubermatic_runtime::{submit, ClientOperation, RestMethod};
//!
//! let op = ClientOperation::new("listSeeds", RestMethod::Get, "/api/v1/admin/seeds", &params);
//! let seeds = submit::<ListSeedsError>(&transport, &formats, op).await?;
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod formats;
pub mod method;
pub mod operation;
pub mod params;
pub mod request;
pub mod response;
pub mod status;
pub mod transport;
pub mod validate;

pub use auth::{ApiKeyAuth, AuthInfoWriter, BasicAuth, BearerToken, ComposeAuth, NoAuth};
pub use config::TransportConfig;
pub use error::{
    ApiError, AuthError, ClientError, CompositeError, ConfigError, FieldError, OperationError,
    ParamLocation, ValidationError,
};
pub use formats::{Codec, Formats};
pub use method::RestMethod;
pub use operation::ClientOperation;
pub use params::{CallOptions, OperationParams, WriteRequest};
pub use request::ClientRequest;
pub use response::{ClientResponse, DefaultResponse, ReadResponse, Reply};
pub use status::StatusFamily;
pub use transport::{BoxFuture, ClientTransport, HttpTransport, HttpTransportBuilder, submit};
pub use validate::Validate;
