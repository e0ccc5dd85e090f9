use crate::error::{ParamsError, Result};
use crate::registry::ArbitraryParam;
use num_bigint::{BigInt, Sign};
use num_traits::{Num, Zero};

/// Arbitrary-precision chain parameters.
///
/// Unlike the fixed-width constants in [`crate::protocol`], these values are
/// owned by whoever builds the chain (validator, miner, test harness) and are
/// handed around by reference. The target gas limit starts as a copy of the
/// genesis gas limit and may be moved independently afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChainParams {
    /// The bound divisor of the gas limit, used in update calculations.
    pub gas_limit_bound_divisor: BigInt,
    /// Minimum the gas limit may ever be.
    pub min_gas_limit: BigInt,
    /// Gas limit of the Genesis block.
    pub genesis_gas_limit: BigInt,
    /// The artificial target.
    pub target_gas_limit: BigInt,
    /// The bound divisor of the difficulty, used in the update calculations.
    pub difficulty_bound_divisor: BigInt,
    /// Difficulty of the Genesis block.
    pub genesis_difficulty: BigInt,
    /// The minimum that the difficulty may ever be.
    pub minimum_difficulty: BigInt,
    /// Blocktime boundary (seconds) deciding whether difficulty goes up or not.
    pub duration_limit: BigInt,
}

// Genesis seeds
const GAS_LIMIT_BOUND_DIVISOR: u64 = 1024;
const MIN_GAS_LIMIT: u64 = 5000;
const GENESIS_GAS_LIMIT: u64 = 4712388;
const DIFFICULTY_BOUND_DIVISOR: u64 = 2048;
const GENESIS_DIFFICULTY: u64 = 131072;
const MINIMUM_DIFFICULTY: u64 = 131072;
const DURATION_LIMIT: u64 = 13;

impl Default for ChainParams {
    fn default() -> Self {
        Self::genesis()
    }
}

impl ChainParams {
    /// Genesis parameter set. The target gas limit is copied from the
    /// genesis gas limit.
    pub fn genesis() -> Self {
        let genesis_gas_limit = BigInt::from(GENESIS_GAS_LIMIT);
        Self {
            gas_limit_bound_divisor: BigInt::from(GAS_LIMIT_BOUND_DIVISOR),
            min_gas_limit: BigInt::from(MIN_GAS_LIMIT),
            target_gas_limit: genesis_gas_limit.clone(),
            genesis_gas_limit,
            difficulty_bound_divisor: BigInt::from(DIFFICULTY_BOUND_DIVISOR),
            genesis_difficulty: BigInt::from(GENESIS_DIFFICULTY),
            minimum_difficulty: BigInt::from(MINIMUM_DIFFICULTY),
            duration_limit: BigInt::from(DURATION_LIMIT),
        }
    }

    /// Get a parameter by its registry key.
    pub fn get(&self, param: ArbitraryParam) -> &BigInt {
        match param {
            ArbitraryParam::GasLimitBoundDivisor => &self.gas_limit_bound_divisor,
            ArbitraryParam::MinGasLimit => &self.min_gas_limit,
            ArbitraryParam::GenesisGasLimit => &self.genesis_gas_limit,
            ArbitraryParam::TargetGasLimit => &self.target_gas_limit,
            ArbitraryParam::DifficultyBoundDivisor => &self.difficulty_bound_divisor,
            ArbitraryParam::GenesisDifficulty => &self.genesis_difficulty,
            ArbitraryParam::MinimumDifficulty => &self.minimum_difficulty,
            ArbitraryParam::DurationLimit => &self.duration_limit,
        }
    }

    /// Move the target gas limit, returning the previous target.
    ///
    /// Only the target changes; the genesis gas limit is left alone.
    pub fn set_target_gas_limit(&mut self, target: BigInt) -> BigInt {
        tracing::debug!(
            old = %self.target_gas_limit,
            new = %target,
            "Updating target gas limit"
        );
        std::mem::replace(&mut self.target_gas_limit, target)
    }

    /// Copy the current genesis gas limit back into the target.
    pub fn reset_target_gas_limit(&mut self) {
        let genesis = self.genesis_gas_limit.clone();
        self.set_target_gas_limit(genesis);
    }

    /// Validate a parameter set that did not come from [`ChainParams::genesis`].
    pub fn validate(&self) -> Result<()> {
        for param in ArbitraryParam::ALL {
            let value = self.get(param);
            if value.sign() == Sign::Minus {
                return Err(ParamsError::NegativeValue {
                    name: param.name(),
                    value: value.to_string(),
                });
            }
        }

        for param in [
            ArbitraryParam::GasLimitBoundDivisor,
            ArbitraryParam::DifficultyBoundDivisor,
        ] {
            if self.get(param).is_zero() {
                return Err(ParamsError::ZeroDivisor(param.name()));
            }
        }

        if self.genesis_gas_limit < self.min_gas_limit {
            return Err(ParamsError::GasLimitBelowMinimum {
                genesis: self.genesis_gas_limit.to_string(),
                minimum: self.min_gas_limit.to_string(),
            });
        }

        Ok(())
    }
}

/// Parse an integer written in decimal or as a `0x`-prefixed hex string.
pub fn parse_integer(s: &str) -> Result<BigInt> {
    let s = s.trim();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (radix, body) = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, digits),
    };
    // Digits only: no inner sign, no underscores.
    if body.is_empty() || !body.chars().all(|c| c.is_digit(radix)) {
        return Err(ParamsError::InvalidInteger(s.to_string()));
    }
    let value = BigInt::from_str_radix(body, radix)?;
    Ok(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_values() {
        let params = ChainParams::genesis();
        assert_eq!(params.gas_limit_bound_divisor, BigInt::from(1024));
        assert_eq!(params.min_gas_limit, BigInt::from(5000));
        assert_eq!(params.genesis_gas_limit, BigInt::from(4712388));
        assert_eq!(params.target_gas_limit, BigInt::from(4712388));
        assert_eq!(params.difficulty_bound_divisor, BigInt::from(2048));
        assert_eq!(params.genesis_difficulty, BigInt::from(131072));
        assert_eq!(params.minimum_difficulty, BigInt::from(131072));
        assert_eq!(params.duration_limit, BigInt::from(13));
    }

    #[test]
    fn test_default_is_genesis() {
        assert_eq!(ChainParams::default(), ChainParams::genesis());
    }

    #[test]
    fn test_target_starts_at_genesis() {
        let params = ChainParams::genesis();
        assert_eq!(params.target_gas_limit, params.genesis_gas_limit);
    }

    #[test]
    fn test_set_target_leaves_genesis_untouched() {
        let mut params = ChainParams::genesis();
        let previous = params.set_target_gas_limit(BigInt::from(8_000_000));

        assert_eq!(previous, BigInt::from(4712388));
        assert_eq!(params.target_gas_limit, BigInt::from(8_000_000));
        assert_eq!(params.genesis_gas_limit, BigInt::from(4712388));
    }

    #[test]
    fn test_in_place_target_mutation_is_independent() {
        let mut params = ChainParams::genesis();
        params.target_gas_limit += 1;
        params.target_gas_limit *= 2;

        assert_eq!(params.target_gas_limit, BigInt::from((4712388 + 1) * 2));
        assert_eq!(params.genesis_gas_limit, BigInt::from(4712388));
    }

    #[test]
    fn test_genesis_mutation_does_not_move_target() {
        let mut params = ChainParams::genesis();
        params.genesis_gas_limit = BigInt::from(10_000_000);
        assert_eq!(params.target_gas_limit, BigInt::from(4712388));

        params.reset_target_gas_limit();
        assert_eq!(params.target_gas_limit, BigInt::from(10_000_000));
    }

    #[test]
    fn test_clones_are_independent() {
        let original = ChainParams::genesis();
        let mut copy = original.clone();
        copy.set_target_gas_limit(BigInt::from(1));
        assert_eq!(original.target_gas_limit, BigInt::from(4712388));
    }

    #[test]
    fn test_get_by_key() {
        let params = ChainParams::genesis();
        assert_eq!(params.get(ArbitraryParam::MinGasLimit), &BigInt::from(5000));
        assert_eq!(params.get(ArbitraryParam::DurationLimit), &BigInt::from(13));
    }

    #[test]
    fn test_validate_genesis() {
        assert!(ChainParams::genesis().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative() {
        let mut params = ChainParams::genesis();
        params.duration_limit = BigInt::from(-1);
        assert_eq!(
            params.validate(),
            Err(ParamsError::NegativeValue {
                name: "duration_limit",
                value: "-1".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_rejects_zero_divisor() {
        let mut params = ChainParams::genesis();
        params.difficulty_bound_divisor = BigInt::zero();
        assert_eq!(
            params.validate(),
            Err(ParamsError::ZeroDivisor("difficulty_bound_divisor"))
        );
    }

    #[test]
    fn test_validate_rejects_gas_limit_below_minimum() {
        let mut params = ChainParams::genesis();
        params.genesis_gas_limit = BigInt::from(4999);
        assert!(matches!(
            params.validate(),
            Err(ParamsError::GasLimitBelowMinimum { .. })
        ));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("4712388").unwrap(), BigInt::from(4712388));
        assert_eq!(parse_integer("0x400").unwrap(), BigInt::from(1024));
        assert_eq!(parse_integer(" -13 ").unwrap(), BigInt::from(-13));
        assert_eq!(
            parse_integer("115792089237316195423570985008687907853269984665640564039457584007913129639936")
                .unwrap(),
            BigInt::from(1u8) << 256
        );
        assert!(parse_integer("").is_err());
        assert!(parse_integer("0xzz").is_err());
        assert!(parse_integer("--5").is_err());
        assert!(parse_integer("-+5").is_err());
        assert!(parse_integer("0x+5").is_err());
        assert!(parse_integer("1_000").is_err());
        assert!(parse_integer("-").is_err());
        assert!(parse_integer("0x").is_err());
    }
}
