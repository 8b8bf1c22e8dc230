/// The single source of randomness for the simulation.
///
/// Every randomized rule (die rolls, direction picks, enemy branches,
/// random squares, tie-breaks) draws from a `Dice`, so a game is fully
/// reproducible from its seed and tests can script exact outcomes.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait Dice {
    /// Uniform integer in `lo..=hi`.
    fn roll(&mut self, lo: u32, hi: u32) -> u32;

    /// Uniform index into a collection of `len` items. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        assert!(len > 0, "pick from an empty set");
        self.roll(0, len as u32 - 1) as usize
    }
}

/// Seeded ChaCha generator used by the real game.
pub struct ChaChaDice {
    rng: ChaCha8Rng,
}

impl ChaChaDice {
    pub fn seeded(seed: u64) -> Self {
        ChaChaDice { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        ChaChaDice { rng: ChaCha8Rng::from_entropy() }
    }
}

impl Dice for ChaChaDice {
    fn roll(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.gen_range(lo..=hi)
    }
}

/// Replays a fixed list of outcomes, then keeps answering `lo`.
///
/// Scripted values are clamped into the requested range so a script
/// written for one call site can't produce an impossible result at another.
#[cfg_attr(not(test), allow(dead_code))]
#[derive(Default)]
pub struct ScriptedDice {
    queue: VecDeque<u32>,
}

#[cfg_attr(not(test), allow(dead_code))]
impl ScriptedDice {
    pub fn new(values: &[u32]) -> Self {
        ScriptedDice { queue: values.iter().copied().collect() }
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, lo: u32, hi: u32) -> u32 {
        match self.queue.pop_front() {
            Some(v) => v.clamp(lo, hi),
            None => lo,
        }
    }
}
