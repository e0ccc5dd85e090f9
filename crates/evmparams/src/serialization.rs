//! Serde support and chain-parameter files.
//!
//! Arbitrary-precision values are written as decimal strings so that TOML
//! and JSON readers never truncate them. On input, `0x` hex strings and
//! plain integers are accepted too.

use crate::chain_params::{parse_integer, ChainParams};
use crate::error::Result;
use crate::registry::ParamValue;
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::Path;

mod decimal {
    use super::*;

    /// Hand-written files may use plain integers; strings carry values
    /// beyond 64 bits.
    #[derive(Deserialize)]
    #[serde(untagged)]
    pub(super) enum IntegerRepr {
        Signed(i64),
        Unsigned(u64),
        Text(String),
    }

    impl IntegerRepr {
        pub(super) fn into_bigint<E: serde::de::Error>(self) -> std::result::Result<BigInt, E> {
            match self {
                IntegerRepr::Signed(v) => Ok(BigInt::from(v)),
                IntegerRepr::Unsigned(v) => Ok(BigInt::from(v)),
                IntegerRepr::Text(s) => parse_integer(&s).map_err(E::custom),
            }
        }
    }

    pub fn serialize<S>(value: &BigInt, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        IntegerRepr::deserialize(deserializer)?.into_bigint()
    }

    pub mod option {
        use super::*;

        pub fn serialize<S>(
            value: &Option<BigInt>,
            serializer: S,
        ) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            value.as_ref().map(|v| v.to_string()).serialize(serializer)
        }

        pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Option<BigInt>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<IntegerRepr>::deserialize(deserializer)?
                .map(IntegerRepr::into_bigint)
                .transpose()
        }
    }
}

/// On-disk shape of [`ChainParams`]. The target gas limit may be omitted,
/// in which case it is copied from the genesis gas limit.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChainParamsRepr {
    #[serde(with = "decimal")]
    gas_limit_bound_divisor: BigInt,
    #[serde(with = "decimal")]
    min_gas_limit: BigInt,
    #[serde(with = "decimal")]
    genesis_gas_limit: BigInt,
    #[serde(with = "decimal::option", default, skip_serializing_if = "Option::is_none")]
    target_gas_limit: Option<BigInt>,
    #[serde(with = "decimal")]
    difficulty_bound_divisor: BigInt,
    #[serde(with = "decimal")]
    genesis_difficulty: BigInt,
    #[serde(with = "decimal")]
    minimum_difficulty: BigInt,
    #[serde(with = "decimal")]
    duration_limit: BigInt,
}

impl Serialize for ChainParams {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let repr = ChainParamsRepr {
            gas_limit_bound_divisor: self.gas_limit_bound_divisor.clone(),
            min_gas_limit: self.min_gas_limit.clone(),
            genesis_gas_limit: self.genesis_gas_limit.clone(),
            target_gas_limit: Some(self.target_gas_limit.clone()),
            difficulty_bound_divisor: self.difficulty_bound_divisor.clone(),
            genesis_difficulty: self.genesis_difficulty.clone(),
            minimum_difficulty: self.minimum_difficulty.clone(),
            duration_limit: self.duration_limit.clone(),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ChainParams {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = ChainParamsRepr::deserialize(deserializer)?;
        let target_gas_limit = repr
            .target_gas_limit
            .unwrap_or_else(|| repr.genesis_gas_limit.clone());
        Ok(ChainParams {
            gas_limit_bound_divisor: repr.gas_limit_bound_divisor,
            min_gas_limit: repr.min_gas_limit,
            genesis_gas_limit: repr.genesis_gas_limit,
            target_gas_limit,
            difficulty_bound_divisor: repr.difficulty_bound_divisor,
            genesis_difficulty: repr.genesis_difficulty,
            minimum_difficulty: repr.minimum_difficulty,
            duration_limit: repr.duration_limit,
        })
    }
}

/// Fixed-width values stay numbers; arbitrary-precision ones become strings.
impl Serialize for ParamValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ParamValue::Fixed(v) => serializer.serialize_u64(*v),
            ParamValue::Arbitrary(v) => v.to_string().serialize(serializer),
        }
    }
}

impl ChainParams {
    /// Parse and validate chain parameters from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let params: ChainParams = toml::from_str(s)?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load chain parameters from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let params = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded chain parameters");
        Ok(params)
    }

    /// Write chain parameters to a TOML file.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let contents = self.to_toml_string()?;
        std::fs::write(path, contents)?;
        tracing::debug!(path = %path.display(), "Saved chain parameters");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParamsError;

    const GENESIS_TOML: &str = r#"
gas_limit_bound_divisor = "1024"
min_gas_limit = "5000"
genesis_gas_limit = "4712388"
difficulty_bound_divisor = "2048"
genesis_difficulty = "131072"
minimum_difficulty = "131072"
duration_limit = "13"
"#;

    #[test]
    fn test_missing_target_copies_genesis() {
        let params = ChainParams::from_toml_str(GENESIS_TOML).unwrap();
        assert_eq!(params, ChainParams::genesis());
        assert_eq!(params.target_gas_limit, BigInt::from(4712388));
    }

    #[test]
    fn test_explicit_target_kept() {
        let input = format!("{}target_gas_limit = \"0x7a1200\"\n", GENESIS_TOML);
        let params = ChainParams::from_toml_str(&input).unwrap();
        assert_eq!(params.target_gas_limit, BigInt::from(8_000_000));
        assert_eq!(params.genesis_gas_limit, BigInt::from(4712388));
    }

    #[test]
    fn test_toml_writes_decimal_strings() {
        let toml = ChainParams::genesis().to_toml_string().unwrap();
        assert!(toml.contains("genesis_gas_limit = \"4712388\""));
        assert!(toml.contains("target_gas_limit = \"4712388\""));
    }

    #[test]
    fn test_toml_round_trip_large_values() {
        let mut params = ChainParams::genesis();
        params.genesis_difficulty = BigInt::from(1u8) << 200;
        params.minimum_difficulty = params.genesis_difficulty.clone();

        let toml = params.to_toml_string().unwrap();
        assert_eq!(ChainParams::from_toml_str(&toml).unwrap(), params);
    }

    #[test]
    fn test_invalid_integer_rejected() {
        let input = GENESIS_TOML.replace("\"13\"", "\"thirteen\"");
        assert!(matches!(
            ChainParams::from_toml_str(&input),
            Err(ParamsError::Serialization(_))
        ));
    }

    #[test]
    fn test_plain_integers_accepted() {
        let input = r#"
gas_limit_bound_divisor = 1024
min_gas_limit = 5000
genesis_gas_limit = "4712388"
target_gas_limit = 6000000
difficulty_bound_divisor = 2048
genesis_difficulty = "0x20000"
minimum_difficulty = 131072
duration_limit = 13
"#;
        let params = ChainParams::from_toml_str(input).unwrap();
        assert_eq!(params.min_gas_limit, BigInt::from(5000));
        assert_eq!(params.target_gas_limit, BigInt::from(6_000_000));
        assert_eq!(params.genesis_difficulty, BigInt::from(131072));

        let json = r#"{"gas_limit_bound_divisor":1024,"min_gas_limit":5000,"genesis_gas_limit":18446744073709551615,
            "difficulty_bound_divisor":2048,"genesis_difficulty":131072,"minimum_difficulty":131072,"duration_limit":13}"#;
        let params: ChainParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.genesis_gas_limit, BigInt::from(u64::MAX));
        assert_eq!(params.target_gas_limit, BigInt::from(u64::MAX));
    }

    #[test]
    fn test_malformed_integer_strings_rejected() {
        for bad in ["-+5", "0x+5", "1_000"] {
            let input = GENESIS_TOML.replace("\"13\"", &format!("\"{}\"", bad));
            assert!(matches!(
                ChainParams::from_toml_str(&input),
                Err(ParamsError::Serialization(_))
            ));
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        let input = format!("{}block_reward = \"5\"\n", GENESIS_TOML);
        assert!(ChainParams::from_toml_str(&input).is_err());
    }

    #[test]
    fn test_loaded_params_are_validated() {
        let input = GENESIS_TOML.replace("\"4712388\"", "\"100\"");
        assert!(matches!(
            ChainParams::from_toml_str(&input),
            Err(ParamsError::GasLimitBelowMinimum { .. })
        ));
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("chain.toml");

        let mut params = ChainParams::genesis();
        params.set_target_gas_limit(BigInt::from(5_500_000));
        params.to_file(&path).unwrap();

        let loaded = ChainParams::from_file(&path).unwrap();
        assert_eq!(loaded, params);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let result = ChainParams::from_file(temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ParamsError::Io(_))));
    }

    #[test]
    fn test_param_value_json() {
        let fixed = serde_json::to_string(&ParamValue::Fixed(2300)).unwrap();
        assert_eq!(fixed, "2300");
        let big = serde_json::to_string(&ParamValue::Arbitrary(BigInt::from(4712388))).unwrap();
        assert_eq!(big, "\"4712388\"");
    }

    #[test]
    fn test_chain_params_json() {
        let json = serde_json::to_value(ChainParams::genesis()).unwrap();
        assert_eq!(json["min_gas_limit"], "5000");
        let back: ChainParams = serde_json::from_value(json).unwrap();
        assert_eq!(back, ChainParams::genesis());
    }
}
