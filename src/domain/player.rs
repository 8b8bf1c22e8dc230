/// Player record: movement plus the resources squares and enemies act on.
///
/// Lifecycle per turn:
///   idle ──roll──▶ walking ──ticks hit 0──▶ idle (just landed)
///
/// Resource counters never go below zero. Every mutator returns the delta
/// it actually applied, so callers can pass on exactly what was taken.

use super::geom::{Dir, Pos};
use super::mover::{Mover, Terrain};

/// One player's input for one tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Intent {
    #[default]
    None,
    Roll,
    Fire,
    Steer(Dir),
}

/// Result of one walking tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WalkStep {
    /// At an intersection without a usable steer; no movement this tick.
    Waiting,
    Moved,
    Landed,
}

pub const DIE_FACES: u32 = 10;

#[derive(Clone, Debug)]
pub struct Player {
    pub mover: Mover,
    pub stars: u32,
    pub coins: u32,
    pub has_vortex: bool,
    pub just_landed: bool,
    /// Set by a direction square; skips this player's own steering once.
    pub directed_by_square: bool,
}

impl Player {
    pub fn new(pos: Pos) -> Self {
        Player {
            mover: Mover::new(pos),
            stars: 0,
            coins: 0,
            has_vortex: false,
            just_landed: true,
            directed_by_square: false,
        }
    }

    pub fn pos(&self) -> Pos {
        self.mover.pos
    }

    pub fn walking(&self) -> bool {
        self.mover.walking
    }

    pub fn squares_to_move(&self) -> u32 {
        self.mover.squares_to_move()
    }

    pub fn change_coins(&mut self, delta: i32) -> i32 {
        apply_clamped(&mut self.coins, delta)
    }

    pub fn change_stars(&mut self, delta: i32) -> i32 {
        apply_clamped(&mut self.stars, delta)
    }

    pub fn swap_coins(&mut self, other: &mut Player) {
        std::mem::swap(&mut self.coins, &mut other.coins);
    }

    pub fn swap_stars(&mut self, other: &mut Player) {
        std::mem::swap(&mut self.stars, &mut other.stars);
    }

    /// Redirect from a direction square.
    pub fn force_dir(&mut self, dir: Dir) {
        self.mover.set_walk_dir(dir);
        self.directed_by_square = true;
    }

    /// Begin a walk of `roll` squares.
    pub fn start_roll(&mut self, roll: u32) {
        self.mover.start_walk(roll);
    }

    /// One tick of an in-progress walk.
    ///
    /// Unless a square redirected the player, an intersection requires a
    /// steer that neither reverses the heading nor leads off the board;
    /// anything else holds the player in place.
    pub fn walk(&mut self, intent: Intent, terrain: &impl Terrain) -> WalkStep {
        if !self.directed_by_square {
            if self.mover.at_intersection(terrain) {
                match intent {
                    Intent::Steer(dir)
                        if dir != self.mover.walk_dir.opposite()
                            && self.mover.can_move(terrain, dir) =>
                    {
                        self.mover.set_walk_dir(dir);
                    }
                    _ => return WalkStep::Waiting,
                }
            }
            self.mover.keep_on_board(terrain);
        }
        self.directed_by_square = false;

        if self.mover.advance() {
            self.just_landed = true;
            WalkStep::Landed
        } else {
            WalkStep::Moved
        }
    }
}

fn apply_clamped(value: &mut u32, delta: i32) -> i32 {
    let next = (*value as i64 + delta as i64).max(0);
    let applied = next - *value as i64;
    *value = next as u32;
    applied as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mover::tests::Grid;

    fn player_at(col: usize, row: usize) -> Player {
        Player::new(Pos::of_cell(col, row))
    }

    #[test]
    fn coin_decrement_clamps_and_reports() {
        for c in 0..12u32 {
            for k in 1..15i32 {
                let mut p = player_at(0, 0);
                p.coins = c;
                let applied = p.change_coins(-k);
                if (c as i32) < k {
                    assert_eq!(applied, -(c as i32));
                    assert_eq!(p.coins, 0);
                } else {
                    assert_eq!(applied, -k);
                    assert_eq!(p.coins, c - k as u32);
                }
            }
        }
    }

    #[test]
    fn stars_gain_and_clamp() {
        let mut p = player_at(0, 0);
        assert_eq!(p.change_stars(1), 1);
        assert_eq!(p.change_stars(-3), -1);
        assert_eq!(p.stars, 0);
    }

    #[test]
    fn swaps_exchange_resources() {
        let mut a = player_at(0, 0);
        let mut b = player_at(1, 0);
        a.coins = 7;
        b.stars = 2;
        a.swap_coins(&mut b);
        a.swap_stars(&mut b);
        assert_eq!((a.coins, a.stars, b.coins, b.stars), (0, 2, 7, 0));
    }

    #[test]
    fn waits_at_intersection_without_valid_steer() {
        let g = Grid::from(&[
            ".#.",
            "###",
        ]);
        let mut p = player_at(1, 0);
        p.start_roll(1);
        p.mover.set_walk_dir(Dir::Right);

        assert_eq!(p.walk(Intent::None, &g), WalkStep::Waiting);
        assert_eq!(p.walk(Intent::Steer(Dir::Left), &g), WalkStep::Waiting);
        assert_eq!(p.walk(Intent::Steer(Dir::Down), &g), WalkStep::Waiting);
        assert_eq!(p.walk(Intent::Roll, &g), WalkStep::Waiting);
        assert_eq!(p.mover.ticks, 8);
        assert_eq!(p.pos(), Pos::of_cell(1, 0));

        assert_eq!(p.walk(Intent::Steer(Dir::Up), &g), WalkStep::Moved);
        assert_eq!(p.mover.walk_dir, Dir::Up);
        assert_eq!(p.pos(), Pos::new(16, 2));
    }

    #[test]
    fn square_redirect_skips_steering_once() {
        let g = Grid::from(&[
            ".#.",
            "###",
        ]);
        let mut p = player_at(1, 0);
        p.start_roll(1);
        p.force_dir(Dir::Left);
        assert_eq!(p.walk(Intent::None, &g), WalkStep::Moved);
        assert!(!p.directed_by_square);
        assert_eq!(p.pos(), Pos::new(14, 0));
    }

    #[test]
    fn lands_after_full_walk() {
        let g = Grid::from(&[
            "####",
        ]);
        let mut p = player_at(0, 0);
        p.just_landed = false;
        p.start_roll(3);
        let mut steps = 0;
        loop {
            steps += 1;
            if p.walk(Intent::None, &g) == WalkStep::Landed {
                break;
            }
        }
        assert_eq!(steps, 24);
        assert!(p.just_landed);
        assert!(!p.walking());
        assert_eq!(p.pos(), Pos::of_cell(3, 0));
    }
}
