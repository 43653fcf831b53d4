//! The two physical encodings of the 1600-bit Keccak state.
//!
//! Both hold 25 lanes. Lane `(x, y)`, with `x` the column and `y` the row (plane),
//! sits at flat index `x + 5 * y`, which is also the order in which the sponge maps
//! bytes onto lanes: byte `8 * i .. 8 * i + 8` of a block is lane `i`, little-endian.
use core::ops::{Index, IndexMut};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{LANES, STATE_BYTES};
use crate::interleave::{deinterleave_u64, interleave_u64};

/// Flat index of lane `(x, y)`. Coordinates are taken modulo 5.
#[inline(always)]
pub const fn lane_index(x: usize, y: usize) -> usize {
    (x % 5) + 5 * (y % 5)
}

/// The logical state: one `u64` per lane.
///
/// This is also the working state of the [`NativeLanes`](crate::permutation::NativeLanes) engine.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeccakState([u64; LANES]);

impl KeccakState {
    /// Wrap 25 lane values.
    pub const fn from_lanes(lanes: [u64; LANES]) -> Self {
        Self(lanes)
    }

    /// The 25 lane values.
    pub fn lanes(&self) -> &[u64; LANES] {
        &self.0
    }

    pub fn lanes_mut(&mut self) -> &mut [u64; LANES] {
        &mut self.0
    }

    /// Read 200 bytes as 25 little-endian lanes.
    pub fn from_bytes(bytes: &[u8; STATE_BYTES]) -> Self {
        let mut state = Self::default();
        for (lane, chunk) in state.0.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *lane = u64::from_le_bytes(word);
        }
        state
    }

    /// Write the 25 lanes as 200 little-endian bytes.
    pub fn to_bytes(&self) -> [u8; STATE_BYTES] {
        let mut bytes = [0u8; STATE_BYTES];
        for (chunk, lane) in bytes.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
        bytes
    }
}

impl From<&KeccakState> for KeccakState {
    fn from(state: &KeccakState) -> Self {
        state.clone()
    }
}

impl core::fmt::Debug for KeccakState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|lane| format!("{lane:016x}")))
            .finish()
    }
}

impl Index<usize> for KeccakState {
    type Output = u64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for KeccakState {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl Index<(usize, usize)> for KeccakState {
    type Output = u64;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.0[lane_index(x, y)]
    }
}

impl IndexMut<(usize, usize)> for KeccakState {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        &mut self.0[lane_index(x, y)]
    }
}

/// One lane in the bit-interleaved encoding.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Zeroize)]
pub struct SplitLane {
    /// Bits `0, 2, .., 62` of the lane.
    pub even: u32,
    /// Bits `1, 3, .., 63` of the lane.
    pub odd: u32,
}

impl SplitLane {
    #[inline(always)]
    pub const fn from_u64(x: u64) -> Self {
        let (even, odd) = interleave_u64(x);
        Self { even, odd }
    }

    #[inline(always)]
    pub const fn to_u64(self) -> u64 {
        deinterleave_u64(self.even, self.odd)
    }
}

/// The state of the [`SplitLanes`](crate::permutation::SplitLanes) engine:
/// every lane stored as two 32-bit halves.
#[derive(Clone, Default, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SplitState([SplitLane; LANES]);

impl SplitState {
    pub fn lanes(&self) -> &[SplitLane; LANES] {
        &self.0
    }

    pub fn lanes_mut(&mut self) -> &mut [SplitLane; LANES] {
        &mut self.0
    }
}

impl Index<usize> for SplitState {
    type Output = SplitLane;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for SplitState {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl From<&KeccakState> for SplitState {
    fn from(state: &KeccakState) -> Self {
        let mut split = Self::default();
        for (lane, &word) in split.0.iter_mut().zip(state.0.iter()) {
            *lane = SplitLane::from_u64(word);
        }
        split
    }
}

impl From<KeccakState> for SplitState {
    fn from(state: KeccakState) -> Self {
        Self::from(&state)
    }
}

impl From<&SplitState> for KeccakState {
    fn from(split: &SplitState) -> Self {
        let mut state = Self::default();
        for (word, lane) in state.0.iter_mut().zip(split.0.iter()) {
            *word = lane.to_u64();
        }
        state
    }
}

impl From<SplitState> for KeccakState {
    fn from(split: SplitState) -> Self {
        Self::from(&split)
    }
}
