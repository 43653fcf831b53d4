//!
//! The Keccak-f\[1600\] permutation and the sponge absorb/squeeze loops underneath SHA-3 and SHAKE.
//!
//! # Overview
//!
//! The crate provides the cryptographic core only. Message padding, domain separation,
//! output lengths and algorithm identifiers belong to the hash wrappers built on top of it.
//!
//! - [`keccak_f1600`] and the [`Permuter`] engines apply the 24-round permutation in place.
//! - [`absorb`] XORs whole `rate`-sized blocks into the state, permuting after each,
//!   and returns the number of trailing bytes left for the caller's padding.
//! - [`squeeze`] (or the resumable [`Squeezer`]) streams output out of the rate part of the state,
//!   permuting whenever a block is exhausted.
//!
//! ```
//! use keccak_core::{absorb, squeeze, KeccakState, NativeLanes, Rate};
//!
//! let rate = Rate::SHAKE128;
//! let mut state = KeccakState::default();
//! // a single, already padded, SHAKE128 block for the empty message
//! let mut block = [0u8; 168];
//! block[0] = 0x1f;
//! block[167] = 0x80;
//! assert_eq!(absorb::<NativeLanes>(&mut state, &block, rate), 0);
//!
//! let mut output = [0u8; 4];
//! squeeze::<NativeLanes>(&mut state, &mut output, rate);
//! assert_eq!(output, [0x7f, 0x9c, 0x2b, 0xa4]);
//! ```
//!
//! # Engines
//!
//! The state can live in one of two layouts, each with its own engine:
//!
//! - [`SplitLanes`] stores every lane as two bit-interleaved 32-bit halves ([`SplitState`]),
//!   trading a 64-bit rotate for two 32-bit ones. Use it where 64-bit arithmetic is not native.
//! - [`NativeLanes`] stores every lane as a `u64` ([`KeccakState`]) and works on two columns per
//!   operation. Use it where wide registers and a 64-bit rotate are available.
//!
//! Both are observationally identical. Pick one statically through the type parameter of
//! [`absorb`] and [`squeeze`], or at runtime with [`Backend::select`] and [`KeccakCore`]:
//!
//! ```
//! use keccak_core::{Backend, Capabilities, KeccakCore, Rate};
//!
//! let mut core = KeccakCore::new(Backend::select(Capabilities::portable()));
//! assert_eq!(core.backend(), Backend::Split);
//! assert_eq!(core.absorb(&[0u8; 100], Rate::SHA3_512), 28);
//! ```
//!
//! # Rates
//!
//! A [`Rate`] is a positive multiple of 8 no larger than 200 bytes.
//! It can only be built through [`Rate::new`] (or one of its constants), so the sponge loops never
//! see an invalid block size and never fail.
//!
//! Lanes are always read and written little-endian, independently of the host.

/// Engine selection at runtime.
mod backend;
/// Permuting independent states in bulk.
pub mod batch;
/// Round constants and step-mapping tables.
pub mod constants;
/// Invalid rates.
mod errors;
/// Bit-interleave codec.
pub mod interleave;
/// Keccak-f\[1600\] engines.
pub mod permutation;
/// The sponge block size.
mod rate;
/// Absorb and squeeze.
pub mod sponge;
/// Lane layouts.
mod state;

pub use backend::{Backend, Capabilities, KeccakCore};
pub use errors::RateError;
pub use permutation::{keccak_f1600, NativeLanes, Permuter, SplitLanes};
pub use rate::Rate;
pub use sponge::{absorb, squeeze, Squeezer};
pub use state::{lane_index, KeccakState, SplitLane, SplitState};
