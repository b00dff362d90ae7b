//! Status-code families.

use strum::Display;

/// The class of an HTTP status code, derived from `code / 100` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum StatusFamily {
    /// 1xx
    Informational,
    /// 2xx
    Success,
    /// 3xx
    Redirect,
    /// 4xx
    ClientError,
    /// 5xx
    ServerError,
    /// Anything outside 100..=599.
    Unknown,
}

impl StatusFamily {
    pub fn of(code: u16) -> Self {
        match code / 100 {
            1 => Self::Informational,
            2 => Self::Success,
            3 => Self::Redirect,
            4 => Self::ClientError,
            5 => Self::ServerError,
            _ => Self::Unknown,
        }
    }
}

impl From<u16> for StatusFamily {
    fn from(code: u16) -> Self {
        Self::of(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_boundaries() {
        assert_eq!(StatusFamily::of(199), StatusFamily::Informational);
        assert_eq!(StatusFamily::of(200), StatusFamily::Success);
        assert_eq!(StatusFamily::of(299), StatusFamily::Success);
        assert_eq!(StatusFamily::of(300), StatusFamily::Redirect);
        assert_eq!(StatusFamily::of(404), StatusFamily::ClientError);
        assert_eq!(StatusFamily::of(599), StatusFamily::ServerError);
        assert_eq!(StatusFamily::of(600), StatusFamily::Unknown);
        assert_eq!(StatusFamily::of(42), StatusFamily::Unknown);
    }

    #[test]
    fn test_family_is_a_function_of_the_hundreds_digit() {
        for code in 100u16..600 {
            assert_eq!(StatusFamily::of(code), StatusFamily::of(code / 100 * 100));
        }
    }
}
