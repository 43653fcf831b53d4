//! Bit-interleave codec.
//!
//! A 64-bit lane `x` is split into two 32-bit halves:
//! `even` holds bits `0, 2, .., 62` of `x` and `odd` holds bits `1, 3, .., 63`,
//! both packed from the least significant bit upwards.
//! In this encoding a 64-bit rotation becomes two independent 32-bit rotations
//! (with the halves swapped when the amount is odd),
//! which is what the [`SplitLanes`](crate::permutation::SplitLanes) engine relies on.
//!
//! Lanes are always read and written as little-endian bytes, regardless of the host.

const EVEN_BITS: u64 = 0x5555_5555_5555_5555;

/// Gather the even-indexed bits of `x` into the low 32 bits.
#[inline(always)]
const fn compact(x: u64) -> u32 {
    let mut x = x & EVEN_BITS;
    x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
    x = (x | (x >> 2)) & 0x0f0f_0f0f_0f0f_0f0f;
    x = (x | (x >> 4)) & 0x00ff_00ff_00ff_00ff;
    x = (x | (x >> 8)) & 0x0000_ffff_0000_ffff;
    x = (x | (x >> 16)) & 0x0000_0000_ffff_ffff;
    x as u32
}

/// Inverse of [`compact`]: scatter the bits of `x` to the even positions of a `u64`.
#[inline(always)]
const fn spread(x: u32) -> u64 {
    let mut x = x as u64;
    x = (x | (x << 16)) & 0x0000_ffff_0000_ffff;
    x = (x | (x << 8)) & 0x00ff_00ff_00ff_00ff;
    x = (x | (x << 4)) & 0x0f0f_0f0f_0f0f_0f0f;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    (x | (x << 1)) & EVEN_BITS
}

/// Split a lane value into its `(even, odd)` bit halves.
#[inline(always)]
pub const fn interleave_u64(x: u64) -> (u32, u32) {
    (compact(x), compact(x >> 1))
}

/// Recombine `(even, odd)` bit halves into a lane value.
#[inline(always)]
pub const fn deinterleave_u64(even: u32, odd: u32) -> u64 {
    spread(even) | (spread(odd) << 1)
}

/// Interpret `bytes` as a little-endian lane and split it into `(even, odd)` halves.
#[inline(always)]
pub fn interleave(bytes: [u8; 8]) -> (u32, u32) {
    interleave_u64(u64::from_le_bytes(bytes))
}

/// Inverse of [`interleave`].
#[inline(always)]
pub fn deinterleave(even: u32, odd: u32) -> [u8; 8] {
    deinterleave_u64(even, odd).to_le_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    /// Reference bit-by-bit split, used to check the branch-free one.
    fn naive_interleave(x: u64) -> (u32, u32) {
        let (mut even, mut odd) = (0u32, 0u32);
        for i in 0..32 {
            even |= (((x >> (2 * i)) & 1) as u32) << i;
            odd |= (((x >> (2 * i + 1)) & 1) as u32) << i;
        }
        (even, odd)
    }

    #[test]
    fn test_single_bits() {
        for bit in 0..64 {
            let (even, odd) = interleave_u64(1 << bit);
            if bit % 2 == 0 {
                assert_eq!((even, odd), (1 << (bit / 2), 0), "bit {bit}");
            } else {
                assert_eq!((even, odd), (0, 1 << (bit / 2)), "bit {bit}");
            }
        }
    }

    #[test]
    fn test_matches_naive_split() {
        let mut rng = SmallRng::seed_from_u64(0x1600);
        for _ in 0..1000 {
            let x: u64 = rng.gen();
            assert_eq!(interleave_u64(x), naive_interleave(x));
        }
        assert_eq!(interleave_u64(u64::MAX), (u32::MAX, u32::MAX));
        assert_eq!(interleave_u64(EVEN_BITS), (u32::MAX, 0));
    }

    #[test]
    fn test_round_trip() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..1000 {
            let bytes: [u8; 8] = rng.gen();
            let (even, odd) = interleave(bytes);
            assert_eq!(deinterleave(even, odd), bytes);
        }
        for byte in 0..=255u8 {
            for pos in 0..8 {
                let mut bytes = [0u8; 8];
                bytes[pos] = byte;
                let (even, odd) = interleave(bytes);
                assert_eq!(deinterleave(even, odd), bytes);
            }
        }
    }

    /// Byte 0 is the least significant byte of the lane.
    #[test]
    fn test_little_endian_input() {
        assert_eq!(interleave([0b10, 0, 0, 0, 0, 0, 0, 0]), (0, 1));
        assert_eq!(interleave([0, 0, 0, 0, 0, 0, 0, 0x80]), (0, 1 << 31));
    }
}
