//! Cipher construction and single-block encryption/decryption.

use crate::block::Block;
use crate::error::CipherError;
use crate::key::{Key, KeySize};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, mix_columns, shift_rows, sub_bytes,
};
use crate::schedule::{expand_key, RoundKeys};
use crate::state::State;
use crate::tables::{INV_SBOX, SBOX};

/// An AES cipher instance for one key.
///
/// Construction validates the key and expands the round-key schedule once;
/// the schedule never changes afterwards. Encrypt and decrypt work on
/// stack-local state, so a shared `&Aes` can be used from any number of
/// threads without coordination.
///
/// This is the raw single-block primitive. Anything longer than one block,
/// or more than one value under the same key, needs a block-cipher mode of
/// operation layered on top, with its own IV/nonce and padding handling.
#[derive(Clone, Debug)]
pub struct Aes {
    round_keys: RoundKeys,
    size: KeySize,
}

impl Aes {
    /// Builds a cipher from raw key bytes.
    ///
    /// Fails with [`CipherError::InvalidKeyLength`] unless the slice is
    /// exactly 16, 24, or 32 bytes long.
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        let key = Key::new(key)?;
        Ok(Self::from_key(&key))
    }

    /// Builds a cipher from an already validated [`Key`].
    pub fn from_key(key: &Key) -> Self {
        Self {
            round_keys: expand_key(key),
            size: key.size(),
        }
    }

    /// The key size this instance was built with.
    pub const fn key_size(&self) -> KeySize {
        self.size
    }

    /// Encrypts a single 16-byte block.
    ///
    /// Fails with [`CipherError::InvalidBlockLength`] unless `input` is
    /// exactly 16 bytes; nothing is computed on failure.
    pub fn encrypt_block(&self, input: &[u8]) -> Result<Block, CipherError> {
        let block = check_block(input)?;
        let rounds = self.size.rounds();
        let mut state = State::from_block(&block);

        add_round_key(&mut state, &self.round_keys, 0);
        for round in 1..rounds {
            sub_bytes(&mut state, &SBOX);
            shift_rows(&mut state);
            mix_columns(&mut state);
            add_round_key(&mut state, &self.round_keys, round);
        }
        sub_bytes(&mut state, &SBOX);
        shift_rows(&mut state);
        add_round_key(&mut state, &self.round_keys, rounds);

        Ok(state.to_block())
    }

    /// Decrypts a single 16-byte block.
    ///
    /// Fails with [`CipherError::InvalidBlockLength`] unless `input` is
    /// exactly 16 bytes; nothing is computed on failure.
    pub fn decrypt_block(&self, input: &[u8]) -> Result<Block, CipherError> {
        let block = check_block(input)?;
        let rounds = self.size.rounds();
        let mut state = State::from_block(&block);

        add_round_key(&mut state, &self.round_keys, rounds);
        for round in 1..rounds {
            inv_shift_rows(&mut state);
            sub_bytes(&mut state, &INV_SBOX);
            add_round_key(&mut state, &self.round_keys, rounds - round);
            inv_mix_columns(&mut state);
        }
        inv_shift_rows(&mut state);
        sub_bytes(&mut state, &INV_SBOX);
        add_round_key(&mut state, &self.round_keys, 0);

        Ok(state.to_block())
    }
}

fn check_block(input: &[u8]) -> Result<Block, CipherError> {
    input
        .try_into()
        .map_err(|_| CipherError::InvalidBlockLength(input.len()))
}
