//! EVM Params - Protocol parameter table for an EVM execution engine.
//!
//! This crate provides the resource-accounting parameters consumed by an
//! interpreter, block validator and precompile dispatcher:
//! - Fixed-width gas costs and VM limits as compile-time constants
//! - Arbitrary-precision chain parameters seeded from genesis
//! - A by-name registry over both, for tooling

pub mod protocol;
pub mod chain_params;
pub mod registry;
pub mod error;

#[cfg(feature = "serde")]
mod serialization;

pub use chain_params::{parse_integer, ChainParams};
pub use registry::{
    entries, lookup, zeroed_costs, ArbitraryParam, FixedParam, Param, ParamEntry, ParamValue,
    PrecisionClass, Unit,
};
pub use error::{ParamsError, Result};
pub use num_bigint::BigInt;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::protocol::*;
    pub use crate::{BigInt, ChainParams, ParamsError};
}
