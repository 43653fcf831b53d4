//! Engine selection.
//!
//! Which engine runs is decided once, from a [`Capabilities`] value the caller obtains
//! from whatever CPU probe it trusts. [`KeccakCore`] then dispatches on the chosen
//! [`Backend`] once per call; the absorb and squeeze loops underneath are monomorphized.
use core::fmt::Display;

use crate::permutation::{NativeLanes, Permuter, SplitLanes};
use crate::rate::Rate;
use crate::sponge;
use crate::state::{KeccakState, SplitState};

/// What the target can do, as far as Keccak is concerned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// 64-bit lanes can be rotated in a single instruction.
    pub native_rotate64: bool,
    /// Registers at least 128 bits wide, able to hold a pair of lanes.
    pub wide_registers: bool,
}

impl Capabilities {
    /// Assume nothing: 32-bit arithmetic only.
    pub const fn portable() -> Self {
        Self {
            native_rotate64: false,
            wide_registers: false,
        }
    }

    /// A conservative guess from the compilation target, without any runtime probing.
    pub const fn host() -> Self {
        let wide = cfg!(target_pointer_width = "64");
        Self {
            native_rotate64: wide,
            wide_registers: wide,
        }
    }
}

/// The two Keccak-f\[1600\] engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// [`SplitLanes`]: bit-interleaved 32-bit halves.
    Split,
    /// [`NativeLanes`]: 64-bit lanes, two columns at a time.
    Native,
}

impl Backend {
    /// Pick the native engine only when the target has both wide registers and a 64-bit rotate.
    pub fn select(capabilities: Capabilities) -> Self {
        let backend = if capabilities.native_rotate64 && capabilities.wide_registers {
            Self::Native
        } else {
            Self::Split
        };
        log::debug!("selected the {backend} Keccak-f[1600] engine for {capabilities:?}");
        backend
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Split => SplitLanes::NAME,
            Self::Native => NativeLanes::NAME,
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::select(Capabilities::host())
    }
}

impl Display for Backend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A Keccak state bound to the engine selected at runtime.
///
/// Two cores built from the same [`KeccakState`] behave identically,
/// whichever [`Backend`] each one uses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeccakCore {
    Split(SplitState),
    Native(KeccakState),
}

impl KeccakCore {
    /// An all-zero state for `backend`.
    pub fn new(backend: Backend) -> Self {
        Self::from_state(backend, &KeccakState::default())
    }

    /// Load a logical state into the layout of `backend`.
    pub fn from_state(backend: Backend, state: &KeccakState) -> Self {
        match backend {
            Backend::Split => Self::Split(SplitState::from(state)),
            Backend::Native => Self::Native(state.clone()),
        }
    }

    pub fn backend(&self) -> Backend {
        match self {
            Self::Split(_) => Backend::Split,
            Self::Native(_) => Backend::Native,
        }
    }

    /// The logical state.
    pub fn to_state(&self) -> KeccakState {
        match self {
            Self::Split(state) => KeccakState::from(state),
            Self::Native(state) => state.clone(),
        }
    }

    pub fn permute(&mut self) {
        match self {
            Self::Split(state) => SplitLanes::permute(state),
            Self::Native(state) => NativeLanes::permute(state),
        }
    }

    /// See [`sponge::absorb`].
    pub fn absorb(&mut self, input: &[u8], rate: Rate) -> usize {
        match self {
            Self::Split(state) => sponge::absorb::<SplitLanes>(state, input, rate),
            Self::Native(state) => sponge::absorb::<NativeLanes>(state, input, rate),
        }
    }

    /// See [`sponge::squeeze`].
    pub fn squeeze(&mut self, output: &mut [u8], rate: Rate) {
        match self {
            Self::Split(state) => sponge::squeeze::<SplitLanes>(state, output, rate),
            Self::Native(state) => sponge::squeeze::<NativeLanes>(state, output, rate),
        }
    }
}

impl zeroize::Zeroize for KeccakCore {
    fn zeroize(&mut self) {
        match self {
            Self::Split(state) => state.zeroize(),
            Self::Native(state) => state.zeroize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select() {
        assert_eq!(Backend::select(Capabilities::portable()), Backend::Split);
        let rotate_only = Capabilities {
            native_rotate64: true,
            wide_registers: false,
        };
        assert_eq!(Backend::select(rotate_only), Backend::Split);
        let both = Capabilities {
            native_rotate64: true,
            wide_registers: true,
        };
        assert_eq!(Backend::select(both), Backend::Native);
        assert_eq!(Backend::Native.to_string(), "native-lanes");
    }

    /// Both backends absorb, permute and squeeze to the same bytes.
    #[test]
    fn test_backends_interchangeable() {
        let start = KeccakState::from_lanes(core::array::from_fn(|i| (i as u64) << 40 | i as u64));
        let input: Vec<u8> = (0..=255u8).cycle().take(1000).collect();

        let outputs = [Backend::Split, Backend::Native].map(|backend| {
            let mut core = KeccakCore::from_state(backend, &start);
            assert_eq!(core.backend(), backend);
            assert_eq!(core.absorb(&input, Rate::SHAKE128), 1000 % 168);
            core.permute();
            let mut out = [0u8; 400];
            core.squeeze(&mut out, Rate::SHA3_384);
            (out, core.to_state())
        });
        assert_eq!(outputs[0].0, outputs[1].0);
        assert_eq!(outputs[0].1, outputs[1].1);
    }
}
