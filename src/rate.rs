use crate::constants::STATE_BYTES;
use crate::errors::RateError;

/// The sponge block size, in bytes.
///
/// A rate is always a positive multiple of 8 no larger than the 200-byte state:
/// the first `rate / 8` lanes are exposed to input and output,
/// the remaining `200 - rate` bytes form the capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rate(usize);

impl Rate {
    /// SHAKE128.
    pub const SHAKE128: Rate = Rate(168);
    /// SHA3-224.
    pub const SHA3_224: Rate = Rate(144);
    /// SHA3-256.
    pub const SHA3_256: Rate = Rate(136);
    /// SHAKE256, same rate as SHA3-256.
    pub const SHAKE256: Rate = Rate(136);
    /// SHA3-384.
    pub const SHA3_384: Rate = Rate(104);
    /// SHA3-512.
    pub const SHA3_512: Rate = Rate(72);

    pub const fn new(bytes: usize) -> Result<Self, RateError> {
        if bytes == 0 {
            Err(RateError::Zero)
        } else if bytes % 8 != 0 {
            Err(RateError::Unaligned(bytes))
        } else if bytes > STATE_BYTES {
            Err(RateError::TooLarge(bytes))
        } else {
            Ok(Self(bytes))
        }
    }

    /// The rate leaving `capacity` bytes of the state untouched.
    pub const fn with_capacity(capacity: usize) -> Result<Self, RateError> {
        if capacity > STATE_BYTES {
            return Err(RateError::Zero);
        }
        Self::new(STATE_BYTES - capacity)
    }

    #[inline(always)]
    pub const fn bytes(self) -> usize {
        self.0
    }

    /// Number of lanes covered by one block.
    #[inline(always)]
    pub const fn lanes(self) -> usize {
        self.0 / 8
    }

    /// Bytes of the state never exposed to input or output.
    pub const fn capacity(self) -> usize {
        STATE_BYTES - self.0
    }
}

impl TryFrom<usize> for Rate {
    type Error = RateError;

    fn try_from(bytes: usize) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

impl From<Rate> for usize {
    fn from(rate: Rate) -> Self {
        rate.0
    }
}
