//! Per-field validation failures and their aggregate.

use std::fmt;

use strum::Display;
use thiserror::Error;

/// Where a failing value lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ParamLocation {
    Path,
    Query,
    Header,
    Body,
}

/// A single field that failed to validate or to write to a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The value is mandatory and was empty or absent.
    #[error("{name} in {location} is required")]
    Required {
        name: String,
        location: ParamLocation,
    },

    /// The value does not match a named string format.
    #[error("{name} in {location} must be of type {format}: {value:?}")]
    InvalidFormat {
        name: String,
        location: ParamLocation,
        format: String,
        value: String,
    },

    /// The value is not one of the allowed enumeration members.
    #[error("{name} in {location} should be one of {allowed:?}")]
    EnumMismatch {
        name: String,
        location: ParamLocation,
        value: String,
        allowed: Vec<String>,
    },

    /// Any other constraint violation.
    #[error("{name} in {location}: {reason}")]
    Invalid {
        name: String,
        location: ParamLocation,
        reason: String,
    },
}

impl FieldError {
    pub fn required(name: impl Into<String>, location: ParamLocation) -> Self {
        Self::Required {
            name: name.into(),
            location,
        }
    }

    pub fn invalid_format(
        name: impl Into<String>,
        location: ParamLocation,
        format: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidFormat {
            name: name.into(),
            location,
            format: format.into(),
            value: value.into(),
        }
    }

    pub fn enum_mismatch(
        name: impl Into<String>,
        location: ParamLocation,
        value: impl Into<String>,
        allowed: &[&str],
    ) -> Self {
        Self::EnumMismatch {
            name: name.into(),
            location,
            value: value.into(),
            allowed: allowed.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    pub fn invalid(
        name: impl Into<String>,
        location: ParamLocation,
        reason: impl Into<String>,
    ) -> Self {
        Self::Invalid {
            name: name.into(),
            location,
            reason: reason.into(),
        }
    }

    /// The dotted path of the failing field.
    pub fn name(&self) -> &str {
        match self {
            Self::Required { name, .. }
            | Self::InvalidFormat { name, .. }
            | Self::EnumMismatch { name, .. }
            | Self::Invalid { name, .. } => name,
        }
    }

    pub fn location(&self) -> ParamLocation {
        match self {
            Self::Required { location, .. }
            | Self::InvalidFormat { location, .. }
            | Self::EnumMismatch { location, .. }
            | Self::Invalid { location, .. } => *location,
        }
    }

    /// Prefixes the field name, turning `cidr` into `spec.cidr`.
    pub fn nested(mut self, prefix: &str) -> Self {
        let name = match &mut self {
            Self::Required { name, .. }
            | Self::InvalidFormat { name, .. }
            | Self::EnumMismatch { name, .. }
            | Self::Invalid { name, .. } => name,
        };
        *name = format!("{prefix}.{name}");
        self
    }
}

/// Every field failure collected while writing parameters or validating a model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositeError {
    errors: Vec<FieldError>,
}

impl fmt::Display for CompositeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failure list:")?;
        for err in &self.errors {
            write!(f, "\n{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for CompositeError {}

impl CompositeError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, err: FieldError) {
        self.errors.push(err);
    }

    /// Records the failure of a fallible write, discarding the success value.
    pub fn record<T>(&mut self, result: Result<T, FieldError>) {
        if let Err(err) = result {
            self.errors.push(err);
        }
    }

    /// Absorbs a nested model's failures under `prefix`.
    pub fn absorb(&mut self, prefix: &str, result: Result<(), CompositeError>) {
        if let Err(nested) = result {
            self.errors
                .extend(nested.errors.into_iter().map(|e| e.nested(prefix)));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// `Ok(())` when nothing was collected, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<FieldError> for CompositeError {
    fn from(err: FieldError) -> Self {
        Self { errors: vec![err] }
    }
}
