use core::ops::{BitXor, BitXorAssign};

use super::Permuter;
use crate::constants::{PI_TARGETS, RHO_OFFSETS, SPLIT_ROUND_CONSTANTS};
use crate::interleave::{deinterleave, interleave};
use crate::state::{lane_index, SplitLane, SplitState};

/// Keccak-f\[1600\] over bit-interleaved lanes, using only 32-bit operations.
#[derive(Clone, Copy, Debug, Default)]
pub struct SplitLanes;

impl SplitLane {
    /// Rotate the underlying 64-bit lane left by `n`.
    ///
    /// An even amount `2k` rotates both halves by `k`.
    /// An odd amount `2k + 1` moves the even bits to the odd half (rotated by `k`)
    /// and the odd bits to the even half (rotated by `k + 1`).
    #[inline(always)]
    pub fn rotate_left(self, n: u32) -> Self {
        let k = n / 2;
        if n % 2 == 0 {
            Self {
                even: self.even.rotate_left(k),
                odd: self.odd.rotate_left(k),
            }
        } else {
            Self {
                even: self.odd.rotate_left(k + 1),
                odd: self.even.rotate_left(k),
            }
        }
    }

    /// `!self & other`, half by half.
    #[inline(always)]
    fn andnot(self, other: Self) -> Self {
        Self {
            even: !self.even & other.even,
            odd: !self.odd & other.odd,
        }
    }
}

impl BitXor for SplitLane {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self {
            even: self.even ^ rhs.even,
            odd: self.odd ^ rhs.odd,
        }
    }
}

impl BitXorAssign for SplitLane {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.even ^= rhs.even;
        self.odd ^= rhs.odd;
    }
}

#[inline(always)]
fn round(a: &mut [SplitLane; 25], (rc_even, rc_odd): (u32, u32)) {
    // theta
    let mut c = [SplitLane::default(); 5];
    for (x, cx) in c.iter_mut().enumerate() {
        *cx = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            a[lane_index(x, y)] ^= d;
        }
    }

    // rho and pi
    let mut b = [SplitLane::default(); 25];
    for (index, &lane) in a.iter().enumerate() {
        b[PI_TARGETS[index]] = lane.rotate_left(RHO_OFFSETS[index]);
    }

    // chi
    for y in 0..5 {
        for x in 0..5 {
            let next = b[lane_index(x + 1, y)];
            let after = b[lane_index(x + 2, y)];
            a[lane_index(x, y)] = b[lane_index(x, y)] ^ next.andnot(after);
        }
    }

    // iota
    a[0].even ^= rc_even;
    a[0].odd ^= rc_odd;
}

impl Permuter for SplitLanes {
    type State = SplitState;

    const NAME: &'static str = "split-lanes";

    fn permute(state: &mut SplitState) {
        let lanes = state.lanes_mut();
        for &rc in SPLIT_ROUND_CONSTANTS.iter() {
            round(lanes, rc);
        }
    }

    #[inline]
    fn xor_lane(state: &mut SplitState, index: usize, bytes: [u8; 8]) {
        let (even, odd) = interleave(bytes);
        state[index] ^= SplitLane { even, odd };
    }

    #[inline]
    fn lane_bytes(state: &SplitState, index: usize) -> [u8; 8] {
        let lane = state[index];
        deinterleave(lane.even, lane.odd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    /// Rotating the halves matches rotating the recombined lane.
    #[test]
    fn test_rotate_matches_u64() {
        let mut rng = SmallRng::seed_from_u64(0xc0ffee);
        for _ in 0..64 {
            let x: u64 = rng.gen();
            for n in 0..64 {
                let rotated = SplitLane::from_u64(x).rotate_left(n);
                assert_eq!(rotated.to_u64(), x.rotate_left(n), "x = {x:#x}, n = {n}");
            }
        }
    }

    #[test]
    fn test_xor_lane_round_trip() {
        let mut state = SplitState::default();
        let bytes = *b"lane #12";
        SplitLanes::xor_lane(&mut state, 12, bytes);
        assert_eq!(SplitLanes::lane_bytes(&state, 12), bytes);
        assert_eq!(SplitLanes::lane_bytes(&state, 11), [0u8; 8]);
        SplitLanes::xor_lane(&mut state, 12, bytes);
        assert_eq!(state, SplitState::default());
    }
}
