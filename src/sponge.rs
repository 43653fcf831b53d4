//! Sponge absorb and squeeze over any [`Permuter`].
//!
//! Neither operation pads. [`absorb`] only consumes whole blocks and reports
//! how many trailing bytes it left; the caller pads them into a final block and
//! absorbs that block before squeezing:
//!
//! ```
//! use keccak_core::{absorb, squeeze, KeccakState, NativeLanes, Rate};
//!
//! let rate = Rate::SHA3_256;
//! let mut state = KeccakState::default();
//! let message = b"abc";
//! let left = absorb::<NativeLanes>(&mut state, message, rate);
//!
//! // SHA3-256 padding: domain bits 01, then pad10*1.
//! let mut block = [0u8; 136];
//! block[..left].copy_from_slice(&message[message.len() - left..]);
//! block[left] ^= 0x06;
//! block[135] ^= 0x80;
//! assert_eq!(absorb::<NativeLanes>(&mut state, &block, rate), 0);
//!
//! let mut digest = [0u8; 32];
//! squeeze::<NativeLanes>(&mut state, &mut digest, rate);
//! assert_eq!(digest[..4], [0x3a, 0x98, 0x5d, 0xa7]);
//! ```
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::permutation::Permuter;
use crate::rate::Rate;

/// XOR every full `rate`-sized block of `input` into `state`, permuting after each.
///
/// Returns the number of trailing bytes of `input` that did not fill a block
/// (always less than `rate`). Those bytes are left to the caller's padding.
pub fn absorb<P: Permuter>(state: &mut P::State, input: &[u8], rate: Rate) -> usize {
    let mut blocks = input.chunks_exact(rate.bytes());
    for block in &mut blocks {
        P::xor_block(state, block);
        P::permute(state);
    }
    blocks.remainder().len()
}

/// Fill `output` from the rate part of `state`, permuting whenever a block is exhausted.
///
/// The first block is read from `state` as given, so the state must already hold
/// the padded final block. No permutation follows the last byte written.
pub fn squeeze<P: Permuter>(state: &mut P::State, output: &mut [u8], rate: Rate) {
    for (i, block) in output.chunks_mut(rate.bytes()).enumerate() {
        if i > 0 {
            P::permute(state);
        }
        for (index, chunk) in block.chunks_mut(8).enumerate() {
            let bytes = P::lane_bytes(state, index);
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// A squeeze that can be resumed.
///
/// Keeps the position inside the current block between calls, so
///
/// ```text
/// squeeze(1); squeeze(1); squeeze(1) = squeeze(3);
/// ```
///
/// and the concatenated output equals a single [`squeeze`] of the same total length.
#[derive(Clone)]
pub struct Squeezer<P: Permuter> {
    state: P::State,
    rate: Rate,
    /// Bytes of the current block already handed out.
    pos: usize,
}

impl<P: Permuter> Squeezer<P> {
    /// Start squeezing from an absorbed and padded state.
    pub fn new(state: P::State, rate: Rate) -> Self {
        Self { state, rate, pos: 0 }
    }

    pub fn rate(&self) -> Rate {
        self.rate
    }

    pub fn squeeze(&mut self, mut output: &mut [u8]) -> &mut Self {
        while !output.is_empty() {
            if self.pos == self.rate.bytes() {
                P::permute(&mut self.state);
                self.pos = 0;
            }
            debug_assert!(self.pos < self.rate.bytes());

            let (index, offset) = (self.pos / 8, self.pos % 8);
            let bytes = P::lane_bytes(&self.state, index);
            let chunk_len = usize::min(output.len(), 8 - offset);
            let (chunk, rest) = output.split_at_mut(chunk_len);
            chunk.copy_from_slice(&bytes[offset..offset + chunk_len]);
            self.pos += chunk_len;
            output = rest;
        }
        self
    }

    /// Give the state back, as left by the last permutation.
    pub fn into_state(mut self) -> P::State {
        core::mem::take(&mut self.state)
    }
}

impl<P: Permuter> Zeroize for Squeezer<P> {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.pos = 0;
    }
}

impl<P: Permuter> Drop for Squeezer<P> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<P: Permuter> ZeroizeOnDrop for Squeezer<P> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutation::{NativeLanes, SplitLanes};
    use crate::state::{KeccakState, SplitState};

    /// Absorbing nothing returns zero and does not touch the state.
    #[test]
    fn test_empty_absorb() {
        let mut state = KeccakState::from_lanes(core::array::from_fn(|i| i as u64));
        let before = state.clone();
        assert_eq!(absorb::<NativeLanes>(&mut state, &[], Rate::SHA3_256), 0);
        assert_eq!(state, before);

        let mut split = SplitState::from(&before);
        assert_eq!(absorb::<SplitLanes>(&mut split, &[], Rate::SHAKE128), 0);
        assert_eq!(KeccakState::from(&split), before);
    }

    /// A short input is left entirely to the caller.
    #[test]
    fn test_short_absorb() {
        let mut state = KeccakState::default();
        let input = [0xaau8; 135];
        assert_eq!(absorb::<NativeLanes>(&mut state, &input, Rate::SHA3_256), 135);
        assert_eq!(state, KeccakState::default());
    }

    /// One full block is XORed in lane order, then permuted.
    #[test]
    fn test_absorb_one_block() {
        let rate = Rate::new(16).unwrap();
        let input: Vec<u8> = (1..=16).collect();

        let mut state = KeccakState::default();
        assert_eq!(absorb::<NativeLanes>(&mut state, &input, rate), 0);

        let mut expected = KeccakState::default();
        expected[0] = u64::from_le_bytes([1, 2, 3, 4, 5, 6, 7, 8]);
        expected[(1, 0)] = u64::from_le_bytes([9, 10, 11, 12, 13, 14, 15, 16]);
        NativeLanes::permute(&mut expected);
        assert_eq!(state, expected);
    }

    /// Output shorter than a lane takes its low-order bytes.
    #[test]
    fn test_squeeze_partial_lane() {
        let mut state = KeccakState::default();
        state[0] = 0x0807_0605_0403_0201;
        state[1] = 0x100f_0e0d_0c0b_0a09;
        let mut out = [0u8; 11];
        squeeze::<NativeLanes>(&mut state, &mut out, Rate::SHA3_256);
        assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    }

    /// Squeezing across a block boundary permutes exactly once per extra block.
    #[test]
    fn test_squeeze_window_refresh() {
        let rate = Rate::new(8).unwrap();
        let start = KeccakState::from_lanes(core::array::from_fn(|i| (i as u64) << 3));

        let mut state = start.clone();
        let mut out = [0u8; 20];
        squeeze::<NativeLanes>(&mut state, &mut out, rate);

        let mut expected = start.clone();
        assert_eq!(out[..8], expected[0].to_le_bytes());
        NativeLanes::permute(&mut expected);
        assert_eq!(out[8..16], expected[0].to_le_bytes());
        NativeLanes::permute(&mut expected);
        assert_eq!(out[16..], expected[0].to_le_bytes()[..4]);
        assert_eq!(state, expected);
    }

    /// The resumable squeezer agrees with one-shot squeezing, whatever the chunking.
    #[test]
    fn test_squeezer_streaming() {
        let lanes = core::array::from_fn(|i| 0x9e37_79b9_7f4a_7c15u64.wrapping_mul(i as u64));
        let start = KeccakState::from_lanes(lanes);
        let rate = Rate::SHAKE128;

        let mut control = [0u8; 1000];
        squeeze::<NativeLanes>(&mut start.clone(), &mut control, rate);

        for step in [1usize, 3, 7, 8, 13, 168, 169, 500] {
            let mut squeezer = Squeezer::<SplitLanes>::new(SplitState::from(&start), rate);
            let mut output = Vec::with_capacity(control.len());
            while output.len() < control.len() {
                let mut chunk = vec![0u8; usize::min(step, control.len() - output.len())];
                squeezer.squeeze(&mut chunk);
                output.extend_from_slice(&chunk);
            }
            assert_eq!(output[..], control[..], "step {step}");
        }
    }

    #[test]
    fn test_squeezer_into_state() {
        let rate = Rate::SHA3_512;
        let mut squeezer = Squeezer::<NativeLanes>::new(KeccakState::default(), rate);
        squeezer.squeeze(&mut [0u8; 72]);
        assert_eq!(squeezer.clone().into_state(), KeccakState::default());
        squeezer.squeeze(&mut [0u8; 1]);

        let mut expected = KeccakState::default();
        NativeLanes::permute(&mut expected);
        assert_eq!(squeezer.into_state(), expected);
    }
}
