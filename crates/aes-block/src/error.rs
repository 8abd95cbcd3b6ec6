//! Error taxonomy for cipher construction and block operations.

use thiserror::Error;

/// Errors reported at the public operation boundary.
///
/// Every check runs before any state is touched, so a failed call performs
/// no partial work. These are caller bugs to fix, not transient conditions
/// to retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Key byte-length is not 16, 24, or 32.
    #[error("key must be 16, 24, or 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    /// Block byte-length is not exactly 16.
    #[error("block must be exactly 16 bytes, got {0}")]
    InvalidBlockLength(usize),
}
