use thiserror::Error;

/// Errors that can occur when working with parameter tables at runtime.
///
/// Static constant lookups never fail; these cover by-name lookup and
/// loading chain parameters from external sources.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("Parameter {name} must not be negative, got {value}")]
    NegativeValue { name: &'static str, value: String },

    #[error("Bound divisor {0} must not be zero")]
    ZeroDivisor(&'static str),

    #[error("Genesis gas limit {genesis} is below the minimum gas limit {minimum}")]
    GasLimitBelowMinimum { genesis: String, minimum: String },

    #[error("Invalid integer: {0}")]
    InvalidInteger(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, ParamsError>;

impl From<std::io::Error> for ParamsError {
    fn from(e: std::io::Error) -> Self {
        ParamsError::Io(e.to_string())
    }
}

impl From<num_bigint::ParseBigIntError> for ParamsError {
    fn from(e: num_bigint::ParseBigIntError) -> Self {
        ParamsError::InvalidInteger(e.to_string())
    }
}

#[cfg(feature = "serde")]
impl From<toml::de::Error> for ParamsError {
    fn from(e: toml::de::Error) -> Self {
        ParamsError::Serialization(e.to_string())
    }
}

#[cfg(feature = "serde")]
impl From<toml::ser::Error> for ParamsError {
    fn from(e: toml::ser::Error) -> Self {
        ParamsError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ParamsError::UnknownParameter("FOO_GAS".to_string());
        assert_eq!(err.to_string(), "Unknown parameter: FOO_GAS");

        let err = ParamsError::ZeroDivisor("gas_limit_bound_divisor");
        assert!(err.to_string().contains("gas_limit_bound_divisor"));
    }

    #[test]
    fn test_from_parse_error() {
        let parse_err = "12x".parse::<num_bigint::BigInt>().unwrap_err();
        let err: ParamsError = parse_err.into();
        assert!(matches!(err, ParamsError::InvalidInteger(_)));
    }
}
