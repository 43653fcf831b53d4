//! Permuting many independent states at once.
//!
//! Each state is still permuted by a single thread; with the `parallel` feature
//! the states are spread over `rayon`'s thread pool.
use crate::permutation::Permuter;

/// Apply Keccak-f\[1600\] to every state in `states`.
pub fn permute_all<P: Permuter>(states: &mut [P::State]) {
    log::trace!("permuting {} states with {}", states.len(), P::NAME);

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        states.par_iter_mut().for_each(P::permute);
    }

    #[cfg(not(feature = "parallel"))]
    states.iter_mut().for_each(P::permute);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutation::{NativeLanes, SplitLanes};
    use crate::state::{KeccakState, SplitState};

    #[test]
    fn test_permute_all() {
        let states: Vec<KeccakState> = (0..33u64)
            .map(|seed| KeccakState::from_lanes(core::array::from_fn(|i| seed ^ (i as u64) << 32)))
            .collect();

        let mut expected = states.clone();
        expected.iter_mut().for_each(NativeLanes::permute);

        let mut native = states.clone();
        permute_all::<NativeLanes>(&mut native);
        assert_eq!(native, expected);

        let mut split: Vec<SplitState> = states.iter().map(SplitState::from).collect();
        permute_all::<SplitLanes>(&mut split);
        let split: Vec<KeccakState> = split.iter().map(KeccakState::from).collect();
        assert_eq!(split, expected);
    }

    #[test]
    fn test_permute_none() {
        permute_all::<SplitLanes>(&mut []);
    }
}
