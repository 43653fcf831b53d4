//! The permutation and the sponge loops cannot fail.
//! The only error in this crate arises when building a [`Rate`](crate::Rate)
//! out of a raw byte count, so that invalid rates are never handed to
//! [`absorb`](crate::absorb) or [`squeeze`](crate::squeeze).
use std::{error::Error, fmt::Display};

use crate::constants::STATE_BYTES;

/// Signals a block size that cannot be used as the rate of Keccak-f\[1600\].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateError {
    /// The rate must be positive.
    Zero,
    /// The rate is not a whole number of 8-byte lanes.
    Unaligned(usize),
    /// The rate is wider than the 200-byte state.
    TooLarge(usize),
}

impl Display for RateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Zero => write!(f, "rate must be positive"),
            Self::Unaligned(bytes) => write!(f, "rate of {bytes} bytes is not a multiple of 8"),
            Self::TooLarge(bytes) => {
                write!(f, "rate of {bytes} bytes exceeds the {STATE_BYTES}-byte state")
            }
        }
    }
}

impl Error for RateError {}
