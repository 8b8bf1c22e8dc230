/// Board loader.
///
/// ## Sources
///   1. `boards/boardNN.txt` in the configured boards directory
///   2. The built-in board (board number 0)
///
/// ## Board format (`.txt`):
///   Exactly 16 rows of exactly 16 cells. The first row is the top of the
///   board. Lines starting with `;` are comments and blank lines are
///   ignored.
///
/// ## Cell legend:
///   '.' = Empty                  '@' = Player start (both players)
///   '+' = Blue coin square       '-' = Red coin square
///   '*' = Star square            '$' = Bank square
///   '?' = Event square           '^' 'v' '<' '>' = Direction squares
///   'B' = Bowser spawn           'b' = Boo spawn
///
/// Player starts and enemy spawns sit on a blue coin square.
///
/// Every square needs at least two neighbouring squares. A square with
/// fewer is a dead end that movers could never leave, so it is rejected
/// at load time rather than discovered mid-game.

use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::domain::actor::{Body, PlayerId};
use crate::domain::dice::Dice;
use crate::domain::enemy::{Enemy, EnemyKind};
use crate::domain::geom::{Dir, Pos, BOARD_HEIGHT, BOARD_WIDTH};
use crate::domain::square::{Square, SquareKind};

use super::world::World;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed board (line {line}): {reason}")]
    Malformed { line: usize, reason: String },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    PlayerStart,
    BlueCoin,
    RedCoin,
    Star,
    Dir(Dir),
    Bank,
    Event,
    Bowser,
    Boo,
}

impl Cell {
    fn from_char(ch: char) -> Option<Cell> {
        Some(match ch {
            '.' => Cell::Empty,
            '@' => Cell::PlayerStart,
            '+' => Cell::BlueCoin,
            '-' => Cell::RedCoin,
            '*' => Cell::Star,
            '^' => Cell::Dir(Dir::Up),
            'v' => Cell::Dir(Dir::Down),
            '<' => Cell::Dir(Dir::Left),
            '>' => Cell::Dir(Dir::Right),
            '$' => Cell::Bank,
            '?' => Cell::Event,
            'B' => Cell::Bowser,
            'b' => Cell::Boo,
            _ => return None,
        })
    }

    pub fn is_square(self) -> bool {
        self != Cell::Empty
    }

    /// The square laid down for this cell.
    fn square(self) -> Option<SquareKind> {
        match self {
            Cell::Empty => None,
            Cell::PlayerStart | Cell::BlueCoin | Cell::Bowser | Cell::Boo => {
                Some(SquareKind::Coin { grant: true })
            }
            Cell::RedCoin => Some(SquareKind::Coin { grant: false }),
            Cell::Star => Some(SquareKind::Star),
            Cell::Dir(d) => Some(SquareKind::Dir(d)),
            Cell::Bank => Some(SquareKind::Bank),
            Cell::Event => Some(SquareKind::Event),
        }
    }
}

/// A parsed board. `cells[row][col]`, row 0 at the bottom.
#[derive(Clone, Debug)]
pub struct Board {
    cells: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Board {
    pub fn cell(&self, col: usize, row: usize) -> Cell {
        self.cells[row][col]
    }

    fn is_square(&self, col: i32, row: i32) -> bool {
        (0..BOARD_WIDTH as i32).contains(&col)
            && (0..BOARD_HEIGHT as i32).contains(&row)
            && self.cells[row as usize][col as usize].is_square()
    }

    fn neighbours(&self, col: usize, row: usize) -> usize {
        let (c, r) = (col as i32, row as i32);
        [(c + 1, r), (c - 1, r), (c, r + 1), (c, r - 1)]
            .iter()
            .filter(|&&(x, y)| self.is_square(x, y))
            .count()
    }
}

// ══════════════════════════════════════════════════════════════
// Public API
// ══════════════════════════════════════════════════════════════

/// Path of board `number` inside `dir`.
pub fn board_path(dir: &Path, number: u32) -> PathBuf {
    dir.join(format!("board{:02}.txt", number))
}

/// Load board `number`; 0 selects the built-in board.
pub fn load_board(dir: &Path, number: u32) -> Result<Board, BoardError> {
    if number == 0 {
        return parse_board(BUILTIN_BOARD);
    }
    let path = board_path(dir, number);
    let text = std::fs::read_to_string(&path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            BoardError::NotFound { path: path.clone() }
        } else {
            BoardError::Io { path: path.clone(), source }
        }
    })?;
    let board = parse_board(&text)?;
    info!("loaded board {}", path.display());
    Ok(board)
}

pub fn parse_board(text: &str) -> Result<Board, BoardError> {
    let rows: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim_end()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with(';'))
        .collect();

    if rows.len() != BOARD_HEIGHT {
        return Err(BoardError::Malformed {
            line: rows.last().map_or(0, |r| r.0),
            reason: format!("expected {} rows, found {}", BOARD_HEIGHT, rows.len()),
        });
    }

    let mut cells = [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT];
    let mut starts = 0;
    for (i, &(line, text)) in rows.iter().enumerate() {
        let row = BOARD_HEIGHT - 1 - i;
        let width = text.chars().count();
        if width != BOARD_WIDTH {
            return Err(BoardError::Malformed {
                line,
                reason: format!("expected {} cells, found {}", BOARD_WIDTH, width),
            });
        }
        for (col, ch) in text.chars().enumerate() {
            let cell = Cell::from_char(ch).ok_or_else(|| BoardError::Malformed {
                line,
                reason: format!("unknown cell '{}' at column {}", ch, col + 1),
            })?;
            if cell == Cell::PlayerStart {
                starts += 1;
            }
            cells[row][col] = cell;
        }
    }

    if starts != 1 {
        return Err(BoardError::Malformed {
            line: 0,
            reason: format!("expected one player start, found {}", starts),
        });
    }

    let board = Board { cells };
    for row in 0..BOARD_HEIGHT {
        for col in 0..BOARD_WIDTH {
            if board.cell(col, row).is_square() && board.neighbours(col, row) < 2 {
                return Err(BoardError::Malformed {
                    line: rows[BOARD_HEIGHT - 1 - row].0,
                    reason: format!("dead-end square at column {}", col + 1),
                });
            }
        }
    }
    Ok(board)
}

/// Build a fresh world from a board.
///
/// Cells are visited column by column, bottom to top. A start cell adds
/// player one, player two and then its square; an enemy cell adds the
/// enemy before its square.
pub fn populate(board: &Board, dice: Box<dyn Dice>) -> World {
    let mut world = World::new(dice);
    for col in 0..BOARD_WIDTH {
        for row in 0..BOARD_HEIGHT {
            let cell = board.cell(col, row);
            let pos = Pos::of_cell(col, row);
            match cell {
                Cell::PlayerStart => {
                    world.place_player(PlayerId::One, pos);
                    world.place_player(PlayerId::Two, pos);
                }
                Cell::Bowser => world.spawn(Body::Enemy(Enemy::new(EnemyKind::Bowser, pos))),
                Cell::Boo => world.spawn(Body::Enemy(Enemy::new(EnemyKind::Boo, pos))),
                _ => {}
            }
            if let Some(kind) = cell.square() {
                world.spawn(Body::Square(Square::new(kind, pos)));
            }
        }
    }
    debug!("populated {} actors, {} squares", world.actors.len(), world.live_square_count());
    world
}

// ══════════════════════════════════════════════════════════════
// Built-in board
// ══════════════════════════════════════════════════════════════

pub const BUILTIN_BOARD: &str = "\
; Star Crawl built-in board
................
.+-+*+?++$+-+*+.
.-......+.....?.
.+......-.....+.
.?......+.....b.
.+......+.....-.
.+......?.....+.
.>+-++?+*++-++<.
.+......+.....+.
.+......-.....+.
.-......+.....?.
.+......B.....+.
.?......+.....-.
.+......+.....+.
.+++-+@++?+*+$+.
................
";
