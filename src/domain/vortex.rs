/// Vortex projectile: flies straight until it leaves the board or hits
/// an enemy.

use super::geom::{Dir, Pos, SUB_STEP};
use super::mover::Mover;

#[derive(Clone, Copy, Debug)]
pub struct Vortex {
    pub mover: Mover,
}

impl Vortex {
    pub fn new(pos: Pos, dir: Dir) -> Self {
        let mut mover = Mover::new(pos);
        mover.set_walk_dir(dir);
        mover.walking = true;
        Vortex { mover }
    }

    /// Advance one sub-step. Returns false once the vortex is off the view.
    pub fn fly(&mut self) -> bool {
        self.mover.pos = self.mover.pos.offset(self.mover.walk_dir, SUB_STEP);
        self.mover.pos.in_view()
    }
}
