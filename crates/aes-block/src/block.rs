//! Block representation helpers.

/// AES block of 16 bytes.
pub type Block = [u8; 16];

/// Block size in bytes. Fixed at 16 regardless of key size.
pub const BLOCK_SIZE: usize = 16;
