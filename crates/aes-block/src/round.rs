//! AES round transformations.
//!
//! Standalone pure functions over a [`State`], so each step can be checked
//! against the FIPS-197 intermediate values without instrumenting the
//! cipher loop.

use crate::schedule::RoundKeys;
use crate::state::State;
use crate::tables::{MUL11, MUL13, MUL14, MUL2, MUL3, MUL9};

/// Substitutes every state byte through `sbox`.
///
/// Pass [`tables::SBOX`](crate::tables::SBOX) when encrypting and
/// [`tables::INV_SBOX`](crate::tables::INV_SBOX) when decrypting.
#[inline]
pub fn sub_bytes(state: &mut State, sbox: &[u8; 256]) {
    for row in 0..4 {
        for col in 0..4 {
            state.set(row, col, sbox[state.get(row, col) as usize]);
        }
    }
}

/// Rotates row `r` left by `r` positions (row 0 untouched).
///
/// Each row is staged through a scratch copy so the rotation never reads a
/// byte it has already overwritten.
#[inline]
pub fn shift_rows(state: &mut State) {
    for row in 1..4 {
        let scratch = state.row(row);
        for col in 0..4 {
            state.set(row, col, scratch[(col + row) % 4]);
        }
    }
}

/// Rotates row `r` right by `r` positions, undoing [`shift_rows`].
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for row in 1..4 {
        let scratch = state.row(row);
        for col in 0..4 {
            state.set(row, (col + row) % 4, scratch[col]);
        }
    }
}

/// Multiplies every column by the `[2, 3, 1, 1]` circulant matrix over
/// GF(2^8).
#[inline]
pub fn mix_columns(state: &mut State) {
    for col in 0..4 {
        let [a0, a1, a2, a3] = state.column(col);
        state.set(0, col, MUL2[a0 as usize] ^ MUL3[a1 as usize] ^ a2 ^ a3);
        state.set(1, col, a0 ^ MUL2[a1 as usize] ^ MUL3[a2 as usize] ^ a3);
        state.set(2, col, a0 ^ a1 ^ MUL2[a2 as usize] ^ MUL3[a3 as usize]);
        state.set(3, col, MUL3[a0 as usize] ^ a1 ^ a2 ^ MUL2[a3 as usize]);
    }
}

/// Multiplies every column by the `[14, 11, 13, 9]` circulant matrix,
/// undoing [`mix_columns`].
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    for col in 0..4 {
        let [a0, a1, a2, a3] = state.column(col);
        state.set(
            0,
            col,
            MUL14[a0 as usize] ^ MUL11[a1 as usize] ^ MUL13[a2 as usize] ^ MUL9[a3 as usize],
        );
        state.set(
            1,
            col,
            MUL9[a0 as usize] ^ MUL14[a1 as usize] ^ MUL11[a2 as usize] ^ MUL13[a3 as usize],
        );
        state.set(
            2,
            col,
            MUL13[a0 as usize] ^ MUL9[a1 as usize] ^ MUL14[a2 as usize] ^ MUL11[a3 as usize],
        );
        state.set(
            3,
            col,
            MUL11[a0 as usize] ^ MUL13[a1 as usize] ^ MUL9[a2 as usize] ^ MUL14[a3 as usize],
        );
    }
}

/// XORs schedule word `round * 4 + col` into column `col`, for every
/// column.
#[inline]
pub fn add_round_key(state: &mut State, keys: &RoundKeys, round: usize) {
    for col in 0..4 {
        let word = keys.word(round * 4 + col);
        for row in 0..4 {
            state.set(row, col, state.get(row, col) ^ word[row]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Key;
    use crate::schedule::expand_key;
    use crate::tables::{INV_SBOX, SBOX};

    fn sample_state() -> State {
        let mut block = [0u8; 16];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = (i as u8).wrapping_mul(0x1f) ^ 0x3c;
        }
        State::from_block(&block)
    }

    #[test]
    fn sub_bytes_round_trips_through_both_boxes() {
        let mut state = sample_state();
        sub_bytes(&mut state, &SBOX);
        assert_ne!(state, sample_state());
        sub_bytes(&mut state, &INV_SBOX);
        assert_eq!(state, sample_state());
    }

    #[test]
    fn shift_rows_rotates_each_row_by_its_index() {
        let mut block = [0u8; 16];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = i as u8;
        }
        let mut state = State::from_block(&block);
        shift_rows(&mut state);
        assert_eq!(state.row(0), [0, 4, 8, 12]);
        assert_eq!(state.row(1), [5, 9, 13, 1]);
        assert_eq!(state.row(2), [10, 14, 2, 6]);
        assert_eq!(state.row(3), [15, 3, 7, 11]);
    }

    #[test]
    fn inv_shift_rows_undoes_shift_rows() {
        let mut state = sample_state();
        shift_rows(&mut state);
        inv_shift_rows(&mut state);
        assert_eq!(state, sample_state());
    }

    #[test]
    fn mix_columns_matches_the_known_column_vector() {
        // Worked example from the MixColumns literature:
        // [db, 13, 53, 45] -> [8e, 4d, a1, bc].
        let mut state = State::from_block(&[
            0xdb, 0x13, 0x53, 0x45, 0x01, 0x01, 0x01, 0x01, 0xc6, 0xc6, 0xc6, 0xc6, 0xd4, 0xd4,
            0xd4, 0xd5,
        ]);
        mix_columns(&mut state);
        assert_eq!(state.column(0), [0x8e, 0x4d, 0xa1, 0xbc]);
        // All-equal columns are fixed points of the [2, 3, 1, 1] matrix.
        assert_eq!(state.column(1), [0x01, 0x01, 0x01, 0x01]);
        assert_eq!(state.column(2), [0xc6, 0xc6, 0xc6, 0xc6]);
        assert_eq!(state.column(3), [0xd5, 0xd5, 0xd7, 0xd6]);
    }

    #[test]
    fn inv_mix_columns_undoes_mix_columns() {
        let mut state = sample_state();
        mix_columns(&mut state);
        inv_mix_columns(&mut state);
        assert_eq!(state, sample_state());
    }

    #[test]
    fn add_round_key_zero_xors_the_raw_key_in() {
        let key_bytes: Vec<u8> = (0x10..0x20).collect();
        let keys = expand_key(&Key::new(&key_bytes).expect("valid length"));
        let mut state = State::from_block(&[0u8; 16]);
        add_round_key(&mut state, &keys, 0);
        // Schedule words 0..4 are the key itself, so XOR into a zero state
        // reproduces the key bytes in block order.
        assert_eq!(state.to_block().to_vec(), key_bytes);
    }

    #[test]
    fn add_round_key_is_its_own_inverse() {
        let keys = expand_key(&Key::new(&[0x5a; 24]).expect("valid length"));
        let mut state = sample_state();
        add_round_key(&mut state, &keys, 7);
        assert_ne!(state, sample_state());
        add_round_key(&mut state, &keys, 7);
        assert_eq!(state, sample_state());
    }
}
