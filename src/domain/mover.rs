/// Grid-constrained movement shared by players, enemies and vortices.
///
/// A mover walks in 2-pixel sub-steps. While it stands exactly on a
/// board square it may only head toward a neighbouring square; between
/// squares (and off the board entirely) nothing constrains it.

use super::dice::Dice;
use super::geom::{Dir, Facing, Pos, SQUARE_SIZE, SUB_STEP, TICKS_PER_SQUARE};

/// Read-only view of where the board's squares are.
pub trait Terrain {
    fn has_square_at(&self, pos: Pos) -> bool;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Mover {
    pub pos: Pos,
    pub facing: Facing,
    pub walking: bool,
    pub walk_dir: Dir,
    /// Sub-steps left in the current walk. Zero whenever `walking` is false.
    pub ticks: u32,
}

impl Mover {
    pub fn new(pos: Pos) -> Self {
        Mover {
            pos,
            facing: Facing::Right,
            walking: false,
            walk_dir: Dir::Right,
            ticks: 0,
        }
    }

    pub fn on_square(&self, terrain: &impl Terrain) -> bool {
        terrain.has_square_at(self.pos)
    }

    pub fn can_move(&self, terrain: &impl Terrain, dir: Dir) -> bool {
        !self.on_square(terrain) || terrain.has_square_at(self.pos.offset(dir, SQUARE_SIZE))
    }

    /// Passable directions in `Dir::ALL` order.
    pub fn passable_dirs(&self, terrain: &impl Terrain) -> Vec<Dir> {
        Dir::ALL.into_iter().filter(|&d| self.can_move(terrain, d)).collect()
    }

    pub fn count_passable(&self, terrain: &impl Terrain) -> usize {
        Dir::ALL.iter().filter(|&&d| self.can_move(terrain, d)).count()
    }

    /// Standing on a square with three or more ways out.
    pub fn at_intersection(&self, terrain: &impl Terrain) -> bool {
        self.on_square(terrain) && self.count_passable(terrain) > 2
    }

    pub fn set_walk_dir(&mut self, dir: Dir) {
        self.walk_dir = dir;
        self.facing = Facing::for_walk(dir);
    }

    /// Turn to use when the current heading is blocked: leaving a horizontal
    /// heading try Up then Down, leaving a vertical one try Right then Left.
    ///
    /// # Panics
    /// If neither turn is passable. Loaded boards never contain such a
    /// square, so reaching it means the board is malformed.
    pub fn automatic_dir(&self, terrain: &impl Terrain) -> Dir {
        let (first, second) = if self.walk_dir.is_horizontal() {
            (Dir::Up, Dir::Down)
        } else {
            (Dir::Right, Dir::Left)
        };
        if self.can_move(terrain, first) {
            first
        } else if self.can_move(terrain, second) {
            second
        } else {
            panic!("no way to turn at {:?} heading {:?}", self.pos, self.walk_dir);
        }
    }

    /// Uniform pick among the passable directions.
    ///
    /// # Panics
    /// If no direction is passable.
    pub fn random_dir(&self, terrain: &impl Terrain, dice: &mut dyn Dice) -> Dir {
        let dirs = self.passable_dirs(terrain);
        assert!(!dirs.is_empty(), "no passable direction at {:?}", self.pos);
        dirs[dice.pick(dirs.len())]
    }

    /// Fall back to the automatic turn if the heading is blocked.
    pub fn keep_on_board(&mut self, terrain: &impl Terrain) {
        if !self.can_move(terrain, self.walk_dir) {
            let dir = self.automatic_dir(terrain);
            self.set_walk_dir(dir);
        }
    }

    pub fn start_walk(&mut self, squares: u32) {
        self.ticks += squares * TICKS_PER_SQUARE;
        self.walking = self.ticks > 0;
    }

    pub fn stop(&mut self) {
        self.walking = false;
        self.ticks = 0;
    }

    /// One sub-step along the heading. Returns true when the walk completes.
    pub fn advance(&mut self) -> bool {
        self.pos = self.pos.offset(self.walk_dir, SUB_STEP);
        self.ticks = self.ticks.saturating_sub(1);
        if self.ticks == 0 {
            self.walking = false;
            return true;
        }
        false
    }

    /// Exchange the complete movement state with another mover.
    pub fn swap_with(&mut self, other: &mut Mover) {
        std::mem::swap(self, other);
    }

    pub fn squares_to_move(&self) -> u32 {
        self.ticks / TICKS_PER_SQUARE
    }
}
