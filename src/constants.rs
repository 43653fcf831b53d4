//! Fixed tables of Keccak-f\[1600\].
//!
//! Lane `(x, y)` lives at flat index `x + 5 * y`; every table here uses that indexing.
use crate::interleave::interleave_u64;

/// Number of rounds of Keccak-f\[1600\].
pub const ROUNDS: usize = 24;

/// Number of 64-bit lanes in the state.
pub const LANES: usize = 25;

/// Width of the state in bytes.
pub const STATE_BYTES: usize = 200;

/// Round constants XORed into lane `(0, 0)` by iota, one per round.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// [`ROUND_CONSTANTS`] in the bit-interleaved `(even, odd)` encoding.
pub const SPLIT_ROUND_CONSTANTS: [(u32, u32); ROUNDS] = {
    let mut table = [(0u32, 0u32); ROUNDS];
    let mut round = 0;
    while round < ROUNDS {
        table[round] = interleave_u64(ROUND_CONSTANTS[round]);
        round += 1;
    }
    table
};

/// Rho rotation offsets, indexed by `x + 5 * y`.
pub const RHO_OFFSETS: [u32; LANES] = [
    0, 1, 62, 28, 27, //
    36, 44, 6, 55, 20, //
    3, 10, 43, 25, 39, //
    41, 45, 15, 21, 8, //
    18, 2, 61, 56, 14,
];

/// Destination of each lane under pi: the lane at `x + 5 * y` moves to `y + 5 * ((2x + 3y) mod 5)`.
pub const PI_TARGETS: [usize; LANES] = {
    let mut table = [0usize; LANES];
    let mut index = 0;
    while index < LANES {
        let (x, y) = (index % 5, index / 5);
        table[index] = y + 5 * ((2 * x + 3 * y) % 5);
        index += 1;
    }
    table
};
