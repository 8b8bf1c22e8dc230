/// Roaming enemies.
///
/// An enemy alternates between pausing on a square and walking a random
/// number of squares in random directions:
///   pausing(n) ──n hits 0──▶ walking(ticks) ──ticks hit 0──▶ pausing(180)
///
/// While paused it applies its landing effect to players that stop on it.
/// What that effect is, and what happens when a walk ends, depends on the
/// kind and is resolved by the simulation step.

use super::actor::ActivationLatch;
use super::dice::Dice;
use super::geom::{Dir, Pos};
use super::mover::{Mover, Terrain};

pub const PAUSE_TICKS: u32 = 180;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EnemyKind {
    Bowser,
    Boo,
}

impl EnemyKind {
    pub fn max_squares(self) -> u32 {
        match self {
            EnemyKind::Bowser => 10,
            EnemyKind::Boo => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EnemyKind::Bowser => "bowser",
            EnemyKind::Boo => "boo",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub mover: Mover,
    pub pause: u32,
    pub latch: ActivationLatch,
}

impl Enemy {
    pub fn new(kind: EnemyKind, pos: Pos) -> Self {
        Enemy {
            kind,
            mover: Mover::new(pos),
            pause: PAUSE_TICKS,
            latch: ActivationLatch::default(),
        }
    }

    /// Count down the pause; when it runs out, set off on a random walk.
    pub fn tick_pause(&mut self, terrain: &impl Terrain, dice: &mut dyn Dice) {
        self.pause = self.pause.saturating_sub(1);
        if self.pause == 0 {
            let squares = dice.roll(1, self.kind.max_squares());
            let dir = self.mover.random_dir(terrain, dice);
            self.mover.set_walk_dir(dir);
            self.mover.start_walk(squares);
        }
    }

    /// One walking sub-step. Returns true when the walk completes, at which
    /// point the enemy is pausing again.
    pub fn tick_walk(&mut self, terrain: &impl Terrain, dice: &mut dyn Dice) -> bool {
        if self.mover.at_intersection(terrain) {
            let dir = self.mover.random_dir(terrain, dice);
            self.mover.set_walk_dir(dir);
        }
        self.mover.keep_on_board(terrain);
        if self.mover.advance() {
            self.pause = PAUSE_TICKS;
            return true;
        }
        false
    }

    /// Struck by a vortex: drop the current walk and restart the pause at
    /// `dest`.
    pub fn on_hit(&mut self, dest: Pos) {
        self.mover.stop();
        self.mover.set_walk_dir(Dir::Right);
        self.pause = PAUSE_TICKS;
        self.mover.pos = dest;
    }
}
