//! Layered error types for the runtime crate.
//!
//! - [`ApiError`] - everything that can go wrong before a reader sees a response
//! - [`ClientError`] - network and protocol failures from the HTTP layer
//! - [`ValidationError`] - encoding and decoding failures for bodies
//! - [`AuthError`] - credential lookup and formatting problems
//! - [`ConfigError`] - transport configuration and path template problems
//! - [`CompositeError`] / [`FieldError`] - aggregated parameter and model validation
//! - [`OperationError`] - the error half of every facade method's result

mod api_error;
mod auth_error;
mod client_error;
mod config_error;
mod field_error;
mod operation_error;
mod validation_error;

pub use api_error::ApiError;
pub use auth_error::AuthError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use field_error::{CompositeError, FieldError, ParamLocation};
pub use operation_error::OperationError;
pub use validation_error::ValidationError;
