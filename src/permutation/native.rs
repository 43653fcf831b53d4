use core::ops::{BitXor, BitXorAssign};

use super::Permuter;
use crate::constants::{PI_TARGETS, RHO_OFFSETS, ROUND_CONSTANTS};
use crate::state::KeccakState;

/// Keccak-f\[1600\] over native 64-bit lanes, two columns per operation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeLanes;

/// Two 64-bit lanes sharing one 128-bit register.
///
/// Every operation acts on both halves independently, so the compiler lowers it
/// to a single vector instruction where the target has one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct LanePair(pub [u64; 2]);

impl LanePair {
    #[inline(always)]
    pub const fn new(lo: u64, hi: u64) -> Self {
        Self([lo, hi])
    }

    /// Rotate each half left by its own amount.
    #[inline(always)]
    pub fn rotate_left(self, [lo, hi]: [u32; 2]) -> Self {
        Self([self.0[0].rotate_left(lo), self.0[1].rotate_left(hi)])
    }

    /// `!self & other`.
    #[inline(always)]
    pub fn andnot(self, other: Self) -> Self {
        Self([!self.0[0] & other.0[0], !self.0[1] & other.0[1]])
    }
}

impl BitXor for LanePair {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self([self.0[0] ^ rhs.0[0], self.0[1] ^ rhs.0[1]])
    }
}

impl BitXorAssign for LanePair {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0[0] ^= rhs.0[0];
        self.0[1] ^= rhs.0[1];
    }
}

/// One row of five lanes: columns 0-1 and 2-3 paired, column 4 alone.
#[derive(Clone, Copy, Default)]
struct Plane {
    x01: LanePair,
    x23: LanePair,
    x4: u64,
}

/// Rho offsets of the paired columns, per row.
const RHO_PAIRS: [[[u32; 2]; 2]; 5] = {
    let mut table = [[[0u32; 2]; 2]; 5];
    let mut y = 0;
    while y < 5 {
        table[y] = [
            [RHO_OFFSETS[5 * y], RHO_OFFSETS[5 * y + 1]],
            [RHO_OFFSETS[5 * y + 2], RHO_OFFSETS[5 * y + 3]],
        ];
        y += 1;
    }
    table
};

fn load(state: &KeccakState) -> [Plane; 5] {
    let lanes = state.lanes();
    core::array::from_fn(|y| {
        let row = &lanes[5 * y..5 * y + 5];
        Plane {
            x01: LanePair::new(row[0], row[1]),
            x23: LanePair::new(row[2], row[3]),
            x4: row[4],
        }
    })
}

fn store(planes: &[Plane; 5], state: &mut KeccakState) {
    for (row, plane) in state.lanes_mut().chunks_exact_mut(5).zip(planes.iter()) {
        let [l0, l1] = plane.x01.0;
        let [l2, l3] = plane.x23.0;
        row.copy_from_slice(&[l0, l1, l2, l3, plane.x4]);
    }
}

#[inline(always)]
fn round(planes: &mut [Plane; 5], rc: u64) {
    // theta
    let mut c01 = planes[0].x01;
    let mut c23 = planes[0].x23;
    let mut c4 = planes[0].x4;
    for plane in planes[1..].iter() {
        c01 ^= plane.x01;
        c23 ^= plane.x23;
        c4 ^= plane.x4;
    }
    let [c0, c1] = c01.0;
    let [c2, c3] = c23.0;
    let d01 = LanePair::new(c4, c0) ^ LanePair::new(c1, c2).rotate_left([1, 1]);
    let d23 = LanePair::new(c1, c2) ^ LanePair::new(c3, c4).rotate_left([1, 1]);
    let d4 = c3 ^ c0.rotate_left(1);
    for plane in planes.iter_mut() {
        plane.x01 ^= d01;
        plane.x23 ^= d23;
        plane.x4 ^= d4;
    }

    // rho on pairs, then pi scatters the lanes across rows
    let mut b = [0u64; 25];
    for (y, plane) in planes.iter().enumerate() {
        let [l0, l1] = plane.x01.rotate_left(RHO_PAIRS[y][0]).0;
        let [l2, l3] = plane.x23.rotate_left(RHO_PAIRS[y][1]).0;
        let l4 = plane.x4.rotate_left(RHO_OFFSETS[5 * y + 4]);
        for (x, lane) in [l0, l1, l2, l3, l4].into_iter().enumerate() {
            b[PI_TARGETS[x + 5 * y]] = lane;
        }
    }

    // chi
    for (plane, row) in planes.iter_mut().zip(b.chunks_exact(5)) {
        let (b0, b1, b2, b3, b4) = (row[0], row[1], row[2], row[3], row[4]);
        plane.x01 = LanePair::new(b0, b1) ^ LanePair::new(b1, b2).andnot(LanePair::new(b2, b3));
        plane.x23 = LanePair::new(b2, b3) ^ LanePair::new(b3, b4).andnot(LanePair::new(b4, b0));
        plane.x4 = b4 ^ (!b0 & b1);
    }

    // iota
    planes[0].x01.0[0] ^= rc;
}

impl Permuter for NativeLanes {
    type State = KeccakState;

    const NAME: &'static str = "native-lanes";

    fn permute(state: &mut KeccakState) {
        let mut planes = load(state);
        for &rc in ROUND_CONSTANTS.iter() {
            round(&mut planes, rc);
        }
        store(&planes, state);
    }

    #[inline]
    fn xor_lane(state: &mut KeccakState, index: usize, bytes: [u8; 8]) {
        state[index] ^= u64::from_le_bytes(bytes);
    }

    #[inline]
    fn lane_bytes(state: &KeccakState, index: usize) -> [u8; 8] {
        state[index].to_le_bytes()
    }
}
