//! Model validation.

use std::collections::BTreeMap;

use crate::error::CompositeError;
use crate::formats::Formats;

/// Client-side checks a model can run before it is sent.
///
/// Failures are collected, not short-circuited, and nested models report
/// their fields with a dotted prefix.
pub trait Validate {
    fn validate(&self, formats: &Formats) -> Result<(), CompositeError>;
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self, formats: &Formats) -> Result<(), CompositeError> {
        match self {
            Some(inner) => inner.validate(formats),
            None => Ok(()),
        }
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self, formats: &Formats) -> Result<(), CompositeError> {
        let mut errors = CompositeError::new();
        for (index, item) in self.iter().enumerate() {
            errors.absorb(&index.to_string(), item.validate(formats));
        }
        errors.into_result()
    }
}

impl<T: Validate> Validate for BTreeMap<String, T> {
    fn validate(&self, formats: &Formats) -> Result<(), CompositeError> {
        let mut errors = CompositeError::new();
        for (key, item) in self {
            errors.absorb(key, item.validate(formats));
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FieldError, ParamLocation};

    struct Cidr(&'static str);

    impl Validate for Cidr {
        fn validate(&self, formats: &Formats) -> Result<(), CompositeError> {
            formats
                .check_format("cidr", "cidr", self.0)
                .map_err(CompositeError::from)
        }
    }

    #[test]
    fn test_vec_prefixes_index() {
        let items = vec![Cidr("10.0.0.0/8"), Cidr("nope")];
        let err = items.validate(&Formats::default()).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.errors()[0].name(), "1.cidr");
        assert_eq!(err.errors()[0].location(), ParamLocation::Body);
    }

    #[test]
    fn test_map_prefixes_key() {
        let items = BTreeMap::from([("dc-1".to_string(), Cidr("bad"))]);
        let err = items.validate(&Formats::default()).unwrap_err();
        assert!(matches!(&err.errors()[0], FieldError::InvalidFormat { name, .. } if name == "dc-1.cidr"));
    }

    #[test]
    fn test_none_is_valid() {
        assert!(None::<Cidr>.validate(&Formats::default()).is_ok());
    }
}
