//! Cloud provider lookups.
//!
//! Operations that take explicit credentials send them as request headers;
//! a `Credential` header names a stored preset instead. The `_no_credentials`
//! variants resolve credentials from an existing cluster's datacenter.

mod aks;
mod alibaba;
mod anexia;
mod azure;
mod eks;
mod gcp;
mod gke;

pub use aks::*;
pub use alibaba::*;
pub use anexia::*;
pub use azure::*;
pub use eks::*;
pub use gcp::*;
pub use gke::*;
