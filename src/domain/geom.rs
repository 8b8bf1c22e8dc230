/// Board geometry: pixel positions, cardinal directions, overlap tests.
///
/// Positions are in pixels. A board square is `SQUARE_SIZE` pixels wide,
/// and squares sit at multiples of `SQUARE_SIZE`. Movers advance
/// `SUB_STEP` pixels per tick, so one square costs `TICKS_PER_SQUARE` ticks.
/// `y` grows upward; row 0 is the bottom of the board.

pub const SQUARE_SIZE: i32 = 16;
pub const SUB_STEP: i32 = 2;
pub const TICKS_PER_SQUARE: u32 = (SQUARE_SIZE / SUB_STEP) as u32;

pub const BOARD_WIDTH: usize = 16;
pub const BOARD_HEIGHT: usize = 16;

pub const VIEW_WIDTH: i32 = SQUARE_SIZE * BOARD_WIDTH as i32;
pub const VIEW_HEIGHT: i32 = SQUARE_SIZE * BOARD_HEIGHT as i32;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Dir {
    Right,
    Left,
    Up,
    Down,
}

impl Dir {
    /// Enumeration order used by every direction scan (random picks included).
    pub const ALL: [Dir; 4] = [Dir::Right, Dir::Left, Dir::Up, Dir::Down];

    pub fn opposite(self) -> Dir {
        match self {
            Dir::Right => Dir::Left,
            Dir::Left => Dir::Right,
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Dir::Right | Dir::Left)
    }

    fn delta(self) -> (i32, i32) {
        match self {
            Dir::Right => (1, 0),
            Dir::Left => (-1, 0),
            Dir::Up => (0, 1),
            Dir::Down => (0, -1),
        }
    }
}

/// Sprite facing. Only left/right are drawn.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn for_walk(dir: Dir) -> Facing {
        if dir == Dir::Left { Facing::Left } else { Facing::Right }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Pos { x, y }
    }

    /// Position of board cell (col, row).
    pub fn of_cell(col: usize, row: usize) -> Self {
        Pos::new(col as i32 * SQUARE_SIZE, row as i32 * SQUARE_SIZE)
    }

    /// `dist` pixels away in `dir`.
    pub fn offset(self, dir: Dir, dist: i32) -> Pos {
        let (dx, dy) = dir.delta();
        Pos::new(self.x + dx * dist, self.y + dy * dist)
    }

    /// Board cell containing this position (rounded toward the origin).
    pub fn cell(self) -> (i32, i32) {
        (self.x.div_euclid(SQUARE_SIZE), self.y.div_euclid(SQUARE_SIZE))
    }

    pub fn in_view(self) -> bool {
        (0..VIEW_WIDTH).contains(&self.x) && (0..VIEW_HEIGHT).contains(&self.y)
    }

    /// Exact coordinate equality.
    pub fn coincides(self, other: Pos) -> bool {
        self == other
    }

    /// Sprites touch: both axis displacements strictly under one square.
    pub fn overlaps(self, other: Pos) -> bool {
        (self.x - other.x).abs() < SQUARE_SIZE && (self.y - other.y).abs() < SQUARE_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_y_up() {
        let p = Pos::new(32, 32);
        assert_eq!(p.offset(Dir::Up, 16), Pos::new(32, 48));
        assert_eq!(p.offset(Dir::Down, 2), Pos::new(32, 30));
        assert_eq!(p.offset(Dir::Left, 16), Pos::new(16, 32));
        assert_eq!(p.offset(Dir::Right, 2), Pos::new(34, 32));
    }

    #[test]
    fn overlap_is_strict() {
        let a = Pos::new(0, 0);
        assert!(a.overlaps(Pos::new(15, 15)));
        assert!(a.overlaps(Pos::new(-15, 0)));
        assert!(!a.overlaps(Pos::new(16, 0)));
        assert!(!a.overlaps(Pos::new(0, -16)));
        assert!(a.coincides(Pos::new(0, 0)));
        assert!(!a.coincides(Pos::new(0, 2)));
    }

    #[test]
    fn view_bounds() {
        assert!(Pos::new(0, 0).in_view());
        assert!(Pos::new(254, 255).in_view());
        assert!(!Pos::new(256, 0).in_view());
        assert!(!Pos::new(0, -2).in_view());
    }

    #[test]
    fn opposite_and_axis() {
        for d in Dir::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_eq!(d.is_horizontal(), d.opposite().is_horizontal());
        }
        assert_eq!(TICKS_PER_SQUARE, 8);
    }
}
