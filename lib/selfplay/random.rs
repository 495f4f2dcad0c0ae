use super::Select;
use derive_more::DebugCustom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::instrument;

/// Selects uniformly at random using a seedable [`rand::rngs::StdRng`].
#[derive(DebugCustom, Clone)]
#[debug(fmt = "Random")]
pub struct Random(StdRng);

impl Random {
    /// Constructs [`Random`] deterministically from a seed.
    pub fn new(seed: u64) -> Self {
        Random(StdRng::seed_from_u64(seed))
    }
}

/// Initializes a [`rand::rngs::StdRng`] seeded by [system entropy].
///
/// [system entropy]: rand::rngs::StdRng::from_entropy
impl Default for Random {
    fn default() -> Self {
        Random(StdRng::from_entropy())
    }
}

impl Select for Random {
    #[instrument(level = "trace")]
    fn select(&mut self, n: usize) -> usize {
        self.0.gen_range(0..n)
    }
}
