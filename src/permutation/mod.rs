//! The Keccak-f\[1600\] permutation and its two engines.
//!
//! Both engines apply the same 24 rounds of theta, rho, pi, chi and iota,
//! and agree bit for bit on the logical state.
//! They differ in how a lane is laid out in memory:
//!
//! - [`SplitLanes`] keeps each lane as two bit-interleaved 32-bit halves
//!   and never needs a 64-bit rotate. It suits targets without native 64-bit arithmetic.
//! - [`NativeLanes`] keeps each lane as a `u64` and processes two columns
//!   at a time through a 128-bit [`LanePair`](native::LanePair).
//!   It suits targets with wide registers and a native 64-bit rotate.
//!
//! Sponge code is generic over [`Permuter`], so the engine is chosen at compile time
//! (or once per call by [`KeccakCore`](crate::KeccakCore)), never once per block.

/// Two-columns-at-a-time engine on native 64-bit lanes.
pub mod native;
/// Bit-interleaved engine on 32-bit halves.
pub mod split;

pub use native::NativeLanes;
pub use split::SplitLanes;

use zeroize::Zeroize;

use crate::state::KeccakState;

/// A Keccak-f\[1600\] engine.
///
/// Implementors own the physical layout of the state ([`Permuter::State`])
/// and the byte-level codec between a little-endian lane and that layout.
///
/// **HAZARD**: every implementation must agree bit for bit with [`NativeLanes`] and [`SplitLanes`]
/// on the logical state.
pub trait Permuter {
    /// The physical state this engine operates on.
    /// `Default` must be the all-zero state.
    type State: Clone
        + Default
        + Zeroize
        + Send
        + Sync
        + for<'a> From<&'a KeccakState>
        + Into<KeccakState>;

    /// Short name, for diagnostics.
    const NAME: &'static str;

    /// Apply the 24 rounds in place.
    fn permute(state: &mut Self::State);

    /// XOR the little-endian lane `bytes` into lane `index`.
    fn xor_lane(state: &mut Self::State, index: usize, bytes: [u8; 8]);

    /// Lane `index` as little-endian bytes.
    fn lane_bytes(state: &Self::State, index: usize) -> [u8; 8];

    /// XOR a block of whole lanes into the first `block.len() / 8` lanes.
    fn xor_block(state: &mut Self::State, block: &[u8]) {
        debug_assert!(block.len() % 8 == 0 && block.len() <= 8 * crate::constants::LANES);
        for (index, chunk) in block.chunks_exact(8).enumerate() {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            Self::xor_lane(state, index, bytes);
        }
    }
}

/// Permute a logical state with the default engine.
#[inline]
pub fn keccak_f1600(state: &mut KeccakState) {
    NativeLanes::permute(state)
}
