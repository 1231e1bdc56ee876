//! Conversion between stored text and typed option values.

use std::fmt;

use super::ConfigError;

/// The closed set of value kinds an option can be read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    Float,
    Boolean,
    String,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::Boolean => write!(f, "boolean"),
            Self::String => write!(f, "string"),
        }
    }
}

/// A type that can be read from and written to an option's textual value.
pub trait OptionValue: Sized {
    const KIND: ValueKind;

    /// Converts the stored text of option `key` into `Self`.
    fn from_setting(key: &str, raw: &str) -> Result<Self, ConfigError>;

    /// Canonical text stored by [`Options::set`](super::Options::set).
    fn to_setting(&self) -> String;
}

fn invalid(key: &str, raw: &str, expected: ValueKind) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: raw.to_string(),
        expected,
    }
}

macro_rules! numeric_option {
    ($kind:expr => $($ty:ty),+) => {
        $(
            impl OptionValue for $ty {
                const KIND: ValueKind = $kind;

                fn from_setting(key: &str, raw: &str) -> Result<Self, ConfigError> {
                    raw.trim().parse().map_err(|_| invalid(key, raw, Self::KIND))
                }

                fn to_setting(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

numeric_option!(ValueKind::Integer => i32, i64, u32, u64, usize);
numeric_option!(ValueKind::Float => f32, f64);

impl OptionValue for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    /// Only the first character counts: `Y`, `T` or `1` is true and `N`, `F`
    /// or `0` is false, in either case.
    fn from_setting(key: &str, raw: &str) -> Result<Self, ConfigError> {
        match raw.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('Y' | 'T' | '1') => Ok(true),
            Some('N' | 'F' | '0') => Ok(false),
            _ => Err(invalid(key, raw, Self::KIND)),
        }
    }

    fn to_setting(&self) -> String {
        self.to_string()
    }
}

impl OptionValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn from_setting(_key: &str, raw: &str) -> Result<Self, ConfigError> {
        Ok(raw.to_string())
    }

    fn to_setting(&self) -> String {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_first_character() {
        for raw in ["yes", "true", "1", "Y", "TRUE", "t"] {
            assert!(bool::from_setting("flag", raw).unwrap(), "{raw}");
        }
        for raw in ["no", "false", "0", "N", "False"] {
            assert!(!bool::from_setting("flag", raw).unwrap(), "{raw}");
        }
    }

    #[test]
    fn test_bool_rejects_other_text() {
        let err = bool::from_setting("restart", "maybe").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                expected: ValueKind::Boolean,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "option 'restart': boolean expected, got 'maybe'"
        );
        assert!(bool::from_setting("restart", "").is_err());
    }

    #[test]
    fn test_numeric_parsing() {
        assert_eq!(i32::from_setting("n", " 42 ").unwrap(), 42);
        assert_eq!(i64::from_setting("n", "-7").unwrap(), -7);
        assert_eq!(f64::from_setting("dt", "1e-3").unwrap(), 1e-3);
        assert_eq!(usize::from_setting("n", "8").unwrap(), 8);
    }

    #[test]
    fn test_numeric_rejects_garbage() {
        let err = i32::from_setting("nout", "ten").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                expected: ValueKind::Integer,
                ..
            }
        ));
        assert!(i32::from_setting("nout", "1.5").is_err());
        assert!(f64::from_setting("dt", "fast").is_err());
        assert!(u32::from_setting("n", "-1").is_err());
    }

    #[test]
    fn test_string_verbatim() {
        assert_eq!(
            String::from_setting("path", "'Data Dir'").unwrap(),
            "'Data Dir'"
        );
    }

    #[test]
    fn test_float_setting_round_trips() {
        let text = 2.75_f64.to_setting();
        assert_eq!(f64::from_setting("x", &text).unwrap(), 2.75);
        assert_eq!(true.to_setting(), "true");
    }
}
