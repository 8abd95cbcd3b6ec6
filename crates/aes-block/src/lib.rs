//! Raw single-block AES encryption and decryption.
//!
//! This crate implements the AES block cipher of FIPS-197 for 128-, 192-,
//! and 256-bit keys, one 16-byte block at a time. It is the bare ECB
//! primitive: callers encrypting more than one block, or more than one
//! value under the same key, must wrap it in a block-cipher mode of
//! operation with its own IV/nonce management and padding. None of that is
//! provided here.
//!
//! The round transformations live in [`round`] as standalone pure
//! functions so they can be tested against the FIPS-197 intermediate
//! values directly. The implementation aims for clarity and testability
//! rather than constant-time guarantees; it should not be treated as
//! side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
pub mod round;
mod schedule;
mod state;
pub mod tables;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::Aes;
pub use crate::error::CipherError;
pub use crate::key::{Key, KeySize};
pub use crate::schedule::{expand_key, RoundKeys};
pub use crate::state::State;
