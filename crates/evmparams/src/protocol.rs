//! Fixed-width protocol parameters.
//!
//! Per-operation gas costs, VM limits and precompile prices. All values are
//! compile-time constants; several gas costs are deliberately zero in this
//! schedule and are kept as-is (see [`crate::registry::zeroed_costs`]).

/// Maximum size extra data may be after Genesis.
pub const MAXIMUM_EXTRA_DATA_SIZE: u64 = 32;
/// Times ceil(log256(exponent)) for the EXP instruction.
pub const EXP_BYTE_GAS: u64 = 0;
/// Multiplied by the number of 32-byte words that are copied (round up) for any *COPY operation and added.
pub const SLOAD_GAS: u64 = 0;
/// Paid for CALL when the value transfer is non-zero.
pub const CALL_VALUE_TRANSFER_GAS: u64 = 0;
/// Paid for CALL when the destination address didn't exist prior.
pub const CALL_NEW_ACCOUNT_GAS: u64 = 0;
/// Per transaction not creating a contract.
pub const TX_GAS: u64 = 0;
/// Per transaction that creates a contract.
pub const TX_GAS_CONTRACT_CREATION: u64 = 0;
/// Per byte of data attached to a transaction that equals zero.
pub const TX_DATA_ZERO_GAS: u64 = 0;
/// Divisor for the quadratic particle of the memory cost equation.
pub const QUAD_COEFF_DIV: u64 = 512;
/// Once per SLOAD operation.
pub const SSTORE_SET_GAS: u64 = 0;
/// Per byte in a LOG* operation's data.
pub const LOG_DATA_GAS: u64 = 0;
/// Free gas given at beginning of call.
pub const CALL_STIPEND: u64 = 2300;
pub const SHA256_WORD_GAS: u64 = 12;

/// Once per SHA3 operation.
pub const SHA3_GAS: u64 = 0;
pub const SHA256_GAS: u64 = 0;
pub const IDENTITY_WORD_GAS: u64 = 0;
/// Once per word of the SHA3 operation's data.
pub const SHA3_WORD_GAS: u64 = 0;
/// Once per SSTORE operation if the zeroness changes from zero.
pub const SSTORE_RESET_GAS: u64 = 0;
/// Once per SSTORE operation if the zeroness doesn't change.
pub const SSTORE_CLEAR_GAS: u64 = 0;
/// Once per SSTORE operation if the zeroness changes to zero.
pub const SSTORE_REFUND_GAS: u64 = 0;
pub const JUMPDEST_GAS: u64 = 0;
pub const IDENTITY_GAS: u64 = 0;
/// Duration between proof-of-work epochs, in blocks.
pub const EPOCH_DURATION: u64 = 30000;
/// Once per CALL operation & message call transaction.
pub const CALL_GAS: u64 = 0;
pub const CREATE_DATA_GAS: u64 = 0;
pub const RIPEMD160_GAS: u64 = 0;
pub const RIPEMD160_WORD_GAS: u64 = 0;
/// Maximum depth of call/create stack.
pub const CALL_CREATE_DEPTH: u64 = 1024;
/// Once per EXP instruction.
pub const EXP_GAS: u64 = 0;
/// Per LOG* operation.
pub const LOG_GAS: u64 = 0;
pub const COPY_GAS: u64 = 0;
/// Maximum size of VM stack allowed.
pub const STACK_LIMIT: u64 = 1024;
/// Once per operation, for a selection of them.
pub const TIER_STEP_GAS: u64 = 0;
/// Multiplied by the topic count of LOG*. LOG0 incurs nothing, LOG4 incurs 4x.
pub const LOG_TOPIC_GAS: u64 = 0;
/// Once per CREATE operation & contract-creation transaction.
pub const CREATE_GAS: u64 = 0;
/// Refunded following a suicide operation.
pub const SUICIDE_REFUND_GAS: u64 = 0;
/// Times the address of the (highest referenced byte in memory + 1).
pub const MEMORY_GAS: u64 = 0;
/// Per byte of data attached to a transaction that is not equal to zero.
pub const TX_DATA_NON_ZERO_GAS: u64 = 0;

/// Maximum bytecode to permit for a contract.
pub const MAX_CODE_SIZE: u64 = 24576;

// Precompiled contract gas prices

/// Elliptic curve sender recovery gas price.
pub const ECRECOVER_GAS: u64 = 0;
/// Base price for a SHA256 operation.
pub const SHA256_BASE_GAS: u64 = 0;
/// Per-word price for a SHA256 operation.
pub const SHA256_PER_WORD_GAS: u64 = 0;
/// Base price for a RIPEMD160 operation.
pub const RIPEMD160_BASE_GAS: u64 = 0;
/// Per-word price for a RIPEMD160 operation.
pub const RIPEMD160_PER_WORD_GAS: u64 = 0;
/// Base price for a data copy operation.
pub const IDENTITY_BASE_GAS: u64 = 0;
/// Per-word price for a data copy operation.
pub const IDENTITY_PER_WORD_GAS: u64 = 0;
/// Divisor for the quadratic particle of the big int modular exponentiation.
pub const MOD_EXP_QUAD_COEFF_DIV: u64 = 20;
/// Gas needed for an elliptic curve addition.
pub const BN256_ADD_GAS: u64 = 0;
/// Gas needed for an elliptic curve scalar multiplication.
pub const BN256_SCALAR_MUL_GAS: u64 = 0;
/// Base price for an elliptic curve pairing check.
pub const BN256_PAIRING_BASE_GAS: u64 = 0;
/// Per-point price for an elliptic curve pairing check.
pub const BN256_PAIRING_PER_POINT_GAS: u64 = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vm_limits() {
        assert_eq!(MAX_CODE_SIZE, 24576);
        assert_eq!(CALL_CREATE_DEPTH, 1024);
        assert_eq!(STACK_LIMIT, 1024);
        assert_eq!(CALL_STIPEND, 2300);
    }

    #[test]
    fn test_non_zero_schedule_entries() {
        assert_eq!(MAXIMUM_EXTRA_DATA_SIZE, 32);
        assert_eq!(QUAD_COEFF_DIV, 512);
        assert_eq!(SHA256_WORD_GAS, 12);
        assert_eq!(EPOCH_DURATION, 30000);
        assert_eq!(MOD_EXP_QUAD_COEFF_DIV, 20);
    }

    #[test]
    fn test_zeroed_costs_kept_literal() {
        assert_eq!(TX_GAS, 0);
        assert_eq!(TX_GAS_CONTRACT_CREATION, 0);
        assert_eq!(CREATE_GAS, 0);
        assert_eq!(SSTORE_SET_GAS, 0);
        assert_eq!(ECRECOVER_GAS, 0);
        assert_eq!(BN256_PAIRING_PER_POINT_GAS, 0);
    }

    #[test]
    fn test_max_code_size_matches_hex_bound() {
        assert_eq!(MAX_CODE_SIZE, 0x6000);
    }
}
