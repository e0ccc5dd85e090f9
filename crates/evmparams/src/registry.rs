//! Runtime descriptors for the parameter table.
//!
//! Code that consumes a parameter should bind it statically through
//! [`crate::protocol`] or a [`ChainParams`] field. The registry exists for
//! tooling that has to enumerate or look parameters up by name, such as
//! the `evmparams` CLI.

use crate::chain_params::ChainParams;
use crate::error::{ParamsError, Result};
use crate::protocol;
use num_bigint::BigInt;
use std::fmt;
use std::str::FromStr;

/// Numeric precision of a parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PrecisionClass {
    /// 64-bit unsigned, wraps/overflows like `u64`.
    Fixed64,
    /// Unbounded signed integer.
    Arbitrary,
}

/// Semantic unit of a parameter value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Unit {
    Gas,
    Bytes,
    Blocks,
    Seconds,
    Difficulty,
    /// Dimensionless bound or divisor.
    Bound,
}

impl Unit {
    pub const ALL: [Unit; 6] = [
        Unit::Gas,
        Unit::Bytes,
        Unit::Blocks,
        Unit::Seconds,
        Unit::Difficulty,
        Unit::Bound,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Gas => "gas",
            Unit::Bytes => "bytes",
            Unit::Blocks => "blocks",
            Unit::Seconds => "seconds",
            Unit::Difficulty => "difficulty",
            Unit::Bound => "bound",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PrecisionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrecisionClass::Fixed64 => f.write_str("u64"),
            PrecisionClass::Arbitrary => f.write_str("bigint"),
        }
    }
}

macro_rules! fixed_params {
    ($( $variant:ident => $konst:ident, $unit:ident, $desc:literal; )*) => {
        /// Keys for the fixed-width parameters in [`crate::protocol`].
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum FixedParam {
            $( $variant, )*
        }

        impl FixedParam {
            /// Every fixed-width parameter, in declaration order.
            pub const ALL: &'static [FixedParam] = &[ $( FixedParam::$variant, )* ];

            /// Identifier of the constant in [`crate::protocol`].
            pub const fn name(&self) -> &'static str {
                match self {
                    $( FixedParam::$variant => stringify!($konst), )*
                }
            }

            pub const fn value(&self) -> u64 {
                match self {
                    $( FixedParam::$variant => protocol::$konst, )*
                }
            }

            pub const fn unit(&self) -> Unit {
                match self {
                    $( FixedParam::$variant => Unit::$unit, )*
                }
            }

            pub const fn description(&self) -> &'static str {
                match self {
                    $( FixedParam::$variant => $desc, )*
                }
            }
        }
    };
}

fixed_params! {
    MaximumExtraDataSize => MAXIMUM_EXTRA_DATA_SIZE, Bytes, "Maximum size extra data may be after Genesis";
    ExpByteGas => EXP_BYTE_GAS, Gas, "Times ceil(log256(exponent)) for the EXP instruction";
    SloadGas => SLOAD_GAS, Gas, "Per 32-byte word copied by any *COPY operation";
    CallValueTransferGas => CALL_VALUE_TRANSFER_GAS, Gas, "Paid for CALL when the value transfer is non-zero";
    CallNewAccountGas => CALL_NEW_ACCOUNT_GAS, Gas, "Paid for CALL when the destination address didn't exist prior";
    TxGas => TX_GAS, Gas, "Per transaction not creating a contract";
    TxGasContractCreation => TX_GAS_CONTRACT_CREATION, Gas, "Per transaction that creates a contract";
    TxDataZeroGas => TX_DATA_ZERO_GAS, Gas, "Per zero byte of transaction data";
    QuadCoeffDiv => QUAD_COEFF_DIV, Bound, "Divisor for the quadratic particle of the memory cost equation";
    SstoreSetGas => SSTORE_SET_GAS, Gas, "Once per SLOAD operation";
    LogDataGas => LOG_DATA_GAS, Gas, "Per byte in a LOG* operation's data";
    CallStipend => CALL_STIPEND, Gas, "Free gas given at beginning of call";
    Sha256WordGas => SHA256_WORD_GAS, Gas, "";
    Sha3Gas => SHA3_GAS, Gas, "Once per SHA3 operation";
    Sha256Gas => SHA256_GAS, Gas, "";
    IdentityWordGas => IDENTITY_WORD_GAS, Gas, "";
    Sha3WordGas => SHA3_WORD_GAS, Gas, "Once per word of the SHA3 operation's data";
    SstoreResetGas => SSTORE_RESET_GAS, Gas, "Once per SSTORE operation if the zeroness changes from zero";
    SstoreClearGas => SSTORE_CLEAR_GAS, Gas, "Once per SSTORE operation if the zeroness doesn't change";
    SstoreRefundGas => SSTORE_REFUND_GAS, Gas, "Once per SSTORE operation if the zeroness changes to zero";
    JumpdestGas => JUMPDEST_GAS, Gas, "";
    IdentityGas => IDENTITY_GAS, Gas, "";
    EpochDuration => EPOCH_DURATION, Blocks, "Duration between proof-of-work epochs";
    CallGas => CALL_GAS, Gas, "Once per CALL operation & message call transaction";
    CreateDataGas => CREATE_DATA_GAS, Gas, "";
    Ripemd160Gas => RIPEMD160_GAS, Gas, "";
    Ripemd160WordGas => RIPEMD160_WORD_GAS, Gas, "";
    CallCreateDepth => CALL_CREATE_DEPTH, Bound, "Maximum depth of call/create stack";
    ExpGas => EXP_GAS, Gas, "Once per EXP instruction";
    LogGas => LOG_GAS, Gas, "Per LOG* operation";
    CopyGas => COPY_GAS, Gas, "";
    StackLimit => STACK_LIMIT, Bound, "Maximum size of VM stack allowed";
    TierStepGas => TIER_STEP_GAS, Gas, "Once per operation, for a selection of them";
    LogTopicGas => LOG_TOPIC_GAS, Gas, "Multiplied by the topic count of a LOG* operation";
    CreateGas => CREATE_GAS, Gas, "Once per CREATE operation & contract-creation transaction";
    SuicideRefundGas => SUICIDE_REFUND_GAS, Gas, "Refunded following a suicide operation";
    MemoryGas => MEMORY_GAS, Gas, "Times the address of the (highest referenced byte in memory + 1)";
    TxDataNonZeroGas => TX_DATA_NON_ZERO_GAS, Gas, "Per non-zero byte of transaction data";
    MaxCodeSize => MAX_CODE_SIZE, Bytes, "Maximum bytecode to permit for a contract";
    EcrecoverGas => ECRECOVER_GAS, Gas, "Elliptic curve sender recovery gas price";
    Sha256BaseGas => SHA256_BASE_GAS, Gas, "Base price for a SHA256 operation";
    Sha256PerWordGas => SHA256_PER_WORD_GAS, Gas, "Per-word price for a SHA256 operation";
    Ripemd160BaseGas => RIPEMD160_BASE_GAS, Gas, "Base price for a RIPEMD160 operation";
    Ripemd160PerWordGas => RIPEMD160_PER_WORD_GAS, Gas, "Per-word price for a RIPEMD160 operation";
    IdentityBaseGas => IDENTITY_BASE_GAS, Gas, "Base price for a data copy operation";
    IdentityPerWordGas => IDENTITY_PER_WORD_GAS, Gas, "Per-word price for a data copy operation";
    ModExpQuadCoeffDiv => MOD_EXP_QUAD_COEFF_DIV, Bound, "Divisor for the quadratic particle of the big int modular exponentiation";
    Bn256AddGas => BN256_ADD_GAS, Gas, "Gas needed for an elliptic curve addition";
    Bn256ScalarMulGas => BN256_SCALAR_MUL_GAS, Gas, "Gas needed for an elliptic curve scalar multiplication";
    Bn256PairingBaseGas => BN256_PAIRING_BASE_GAS, Gas, "Base price for an elliptic curve pairing check";
    Bn256PairingPerPointGas => BN256_PAIRING_PER_POINT_GAS, Gas, "Per-point price for an elliptic curve pairing check";
}

/// Keys for the arbitrary-precision fields of [`ChainParams`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArbitraryParam {
    GasLimitBoundDivisor,
    MinGasLimit,
    GenesisGasLimit,
    TargetGasLimit,
    DifficultyBoundDivisor,
    GenesisDifficulty,
    MinimumDifficulty,
    DurationLimit,
}

impl ArbitraryParam {
    pub const ALL: [ArbitraryParam; 8] = [
        ArbitraryParam::GasLimitBoundDivisor,
        ArbitraryParam::MinGasLimit,
        ArbitraryParam::GenesisGasLimit,
        ArbitraryParam::TargetGasLimit,
        ArbitraryParam::DifficultyBoundDivisor,
        ArbitraryParam::GenesisDifficulty,
        ArbitraryParam::MinimumDifficulty,
        ArbitraryParam::DurationLimit,
    ];

    /// Field name on [`ChainParams`].
    pub const fn name(&self) -> &'static str {
        match self {
            ArbitraryParam::GasLimitBoundDivisor => "gas_limit_bound_divisor",
            ArbitraryParam::MinGasLimit => "min_gas_limit",
            ArbitraryParam::GenesisGasLimit => "genesis_gas_limit",
            ArbitraryParam::TargetGasLimit => "target_gas_limit",
            ArbitraryParam::DifficultyBoundDivisor => "difficulty_bound_divisor",
            ArbitraryParam::GenesisDifficulty => "genesis_difficulty",
            ArbitraryParam::MinimumDifficulty => "minimum_difficulty",
            ArbitraryParam::DurationLimit => "duration_limit",
        }
    }

    pub const fn unit(&self) -> Unit {
        match self {
            ArbitraryParam::GasLimitBoundDivisor | ArbitraryParam::DifficultyBoundDivisor => {
                Unit::Bound
            }
            ArbitraryParam::MinGasLimit
            | ArbitraryParam::GenesisGasLimit
            | ArbitraryParam::TargetGasLimit => Unit::Gas,
            ArbitraryParam::GenesisDifficulty | ArbitraryParam::MinimumDifficulty => {
                Unit::Difficulty
            }
            ArbitraryParam::DurationLimit => Unit::Seconds,
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            ArbitraryParam::GasLimitBoundDivisor => {
                "The bound divisor of the gas limit, used in update calculations"
            }
            ArbitraryParam::MinGasLimit => "Minimum the gas limit may ever be",
            ArbitraryParam::GenesisGasLimit => "Gas limit of the Genesis block",
            ArbitraryParam::TargetGasLimit => {
                "The artificial target, initialised from the genesis gas limit"
            }
            ArbitraryParam::DifficultyBoundDivisor => {
                "The bound divisor of the difficulty, used in the update calculations"
            }
            ArbitraryParam::GenesisDifficulty => "Difficulty of the Genesis block",
            ArbitraryParam::MinimumDifficulty => "The minimum that the difficulty may ever be",
            ArbitraryParam::DurationLimit => {
                "Blocktime boundary deciding whether difficulty should go up or not"
            }
        }
    }
}

/// Any parameter in the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Param {
    Fixed(FixedParam),
    Arbitrary(ArbitraryParam),
}

impl Param {
    /// Every parameter: fixed-width first, then arbitrary-precision.
    pub fn all() -> impl Iterator<Item = Param> {
        FixedParam::ALL
            .iter()
            .copied()
            .map(Param::Fixed)
            .chain(ArbitraryParam::ALL.into_iter().map(Param::Arbitrary))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Param::Fixed(p) => p.name(),
            Param::Arbitrary(p) => p.name(),
        }
    }

    pub fn class(&self) -> PrecisionClass {
        match self {
            Param::Fixed(_) => PrecisionClass::Fixed64,
            Param::Arbitrary(_) => PrecisionClass::Arbitrary,
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            Param::Fixed(p) => p.unit(),
            Param::Arbitrary(p) => p.unit(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Param::Fixed(p) => p.description(),
            Param::Arbitrary(p) => p.description(),
        }
    }

    /// Current value, reading arbitrary-precision parameters from `chain`.
    pub fn value(&self, chain: &ChainParams) -> ParamValue {
        match self {
            Param::Fixed(p) => ParamValue::Fixed(p.value()),
            Param::Arbitrary(p) => ParamValue::Arbitrary(chain.get(*p).clone()),
        }
    }

    pub fn entry(&self, chain: &ChainParams) -> ParamEntry {
        ParamEntry {
            name: self.name(),
            class: self.class(),
            unit: self.unit(),
            value: self.value(chain),
            description: self.description(),
        }
    }
}

impl FromStr for Param {
    type Err = ParamsError;

    /// Names match case-insensitively and `-` may stand in for `_`.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().replace('-', "_");
        Param::all()
            .find(|p| p.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ParamsError::UnknownParameter(s.to_string()))
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parameter value together with its precision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    Fixed(u64),
    Arbitrary(BigInt),
}

impl ParamValue {
    pub fn to_bigint(&self) -> BigInt {
        match self {
            ParamValue::Fixed(v) => BigInt::from(*v),
            ParamValue::Arbitrary(v) => v.clone(),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            ParamValue::Fixed(v) => *v == 0,
            ParamValue::Arbitrary(v) => v.sign() == num_bigint::Sign::NoSign,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Fixed(v) => write!(f, "{}", v),
            ParamValue::Arbitrary(v) => write!(f, "{}", v),
        }
    }
}

/// Snapshot of one parameter for display or export.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParamEntry {
    pub name: &'static str,
    pub class: PrecisionClass,
    pub unit: Unit,
    pub value: ParamValue,
    pub description: &'static str,
}

/// Describe every parameter, reading the arbitrary-precision ones from `chain`.
pub fn entries(chain: &ChainParams) -> Vec<ParamEntry> {
    Param::all().map(|p| p.entry(chain)).collect()
}

/// Look a parameter up by name.
pub fn lookup(chain: &ChainParams, name: &str) -> Result<ParamEntry> {
    let param: Param = name.parse()?;
    Ok(param.entry(chain))
}

/// Gas costs that are zero in this schedule.
///
/// Several costs are zeroed even though their descriptions imply a charge.
/// They are reported here, never corrected.
pub fn zeroed_costs() -> Vec<FixedParam> {
    FixedParam::ALL
        .iter()
        .copied()
        .filter(|p| p.unit() == Unit::Gas && p.value() == 0)
        .collect()
}
