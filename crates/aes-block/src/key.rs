//! Key types and key-size parameters.

use crate::error::CipherError;

/// Supported AES key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeySize {
    /// 16-byte key, 10 rounds.
    Aes128,
    /// 24-byte key, 12 rounds.
    Aes192,
    /// 32-byte key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Determines the key size from a key byte-length.
    pub fn from_byte_len(len: usize) -> Result<Self, CipherError> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            other => Err(CipherError::InvalidKeyLength(other)),
        }
    }

    /// Key length in bytes.
    pub const fn byte_len(self) -> usize {
        self.words() * 4
    }

    /// Key length in 32-bit words (`Nk`).
    pub const fn words(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Number of rounds, `Nr = Nk + 6`.
    pub const fn rounds(self) -> usize {
        self.words() + 6
    }
}

/// A validated AES key.
///
/// Holds an owned copy of the key material; immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Key {
    bytes: [u8; 32],
    size: KeySize,
}

impl Key {
    /// Validates and copies a key from a byte slice.
    ///
    /// Fails with [`CipherError::InvalidKeyLength`] unless the slice is
    /// exactly 16, 24, or 32 bytes long.
    pub fn new(bytes: &[u8]) -> Result<Self, CipherError> {
        let size = KeySize::from_byte_len(bytes.len())?;
        let mut buf = [0u8; 32];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self { bytes: buf, size })
    }

    /// The key material.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.size.byte_len()]
    }

    /// The key size.
    pub const fn size(&self) -> KeySize {
        self.size
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = CipherError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_three_standard_lengths() {
        for (len, words, rounds) in [(16, 4, 10), (24, 6, 12), (32, 8, 14)] {
            let key = Key::new(&vec![0xab; len]).expect("valid length");
            assert_eq!(key.as_bytes().len(), len);
            assert_eq!(key.size().words(), words);
            assert_eq!(key.size().rounds(), rounds);
        }
    }

    #[test]
    fn rejects_every_other_length() {
        for len in [0, 1, 15, 17, 23, 25, 31, 33, 64] {
            let err = Key::new(&vec![0u8; len]).unwrap_err();
            assert_eq!(err, CipherError::InvalidKeyLength(len));
        }
    }

    #[test]
    fn keeps_the_key_material() {
        let bytes: Vec<u8> = (0..24).collect();
        let key = Key::new(&bytes).expect("valid length");
        assert_eq!(key.as_bytes(), &bytes[..]);
    }
}
