/// Presentation layer: double-buffered, diff-based terminal renderer.
///
/// Each frame is built into `front`, compared cell by cell with `back`
/// (the previous frame), and only changed cells are written. Commands are
/// batched with `queue!` and flushed once, then the buffers swap.
///
/// Layout:
///   row 0          status line
///   rows 2..18     the board, top row first, two terminal columns per square
///   row 19         key help

use std::io::{self, BufWriter, Write};

use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::domain::actor::{Body, PlayerId};
use crate::domain::enemy::EnemyKind;
use crate::domain::geom::{Dir, Pos, BOARD_HEIGHT, BOARD_WIDTH, SQUARE_SIZE};
use crate::domain::square::SquareKind;
use crate::sim::world::{GameResult, World};

const BASE_BG: Color = Color::Rgb { r: 22, g: 22, b: 35 };
const CELL_W: usize = 2;
const STATUS_ROW: usize = 0;
const BOARD_ROW: usize = 2;
const HELP_ROW: usize = BOARD_ROW + BOARD_HEIGHT + 1;

const HELP: &str =
    "P1: WASD steer  1/Space roll  E fire   P2: arrows steer  Enter roll  / fire   Esc quit";

// ── Cell ──

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
}

impl Glyph {
    const EMPTY: Glyph = Glyph { ch: ' ', fg: Color::White };
    /// Never drawn; forces a full repaint when placed in `back`.
    const INVALID: Glyph = Glyph { ch: '\u{0}', fg: Color::Magenta };

    const fn new(ch: char, fg: Color) -> Self {
        Glyph { ch, fg }
    }
}

struct FrameBuffer {
    width: usize,
    height: usize,
    cells: Vec<Glyph>,
}

impl FrameBuffer {
    fn new(w: usize, h: usize) -> Self {
        FrameBuffer { width: w, height: h, cells: vec![Glyph::EMPTY; w * h] }
    }

    fn resize(&mut self, w: usize, h: usize) {
        if self.width != w || self.height != h {
            *self = FrameBuffer::new(w, h);
        }
    }

    fn set(&mut self, x: usize, y: usize, g: Glyph) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = g;
        }
    }

    fn get(&self, x: usize, y: usize) -> Glyph {
        self.cells[y * self.width + x]
    }

    fn put_str(&mut self, x: usize, y: usize, s: &str, fg: Color) {
        for (i, ch) in s.chars().enumerate() {
            self.set(x + i, y, Glyph::new(ch, fg));
        }
    }
}

// ── Board composition ──

fn square_glyph(kind: SquareKind) -> Glyph {
    match kind {
        SquareKind::Coin { grant: true } => Glyph::new('+', Color::Blue),
        SquareKind::Coin { grant: false } => Glyph::new('-', Color::Red),
        SquareKind::Star => Glyph::new('*', Color::Yellow),
        SquareKind::Dir(Dir::Up) => Glyph::new('^', Color::Cyan),
        SquareKind::Dir(Dir::Down) => Glyph::new('v', Color::Cyan),
        SquareKind::Dir(Dir::Left) => Glyph::new('<', Color::Cyan),
        SquareKind::Dir(Dir::Right) => Glyph::new('>', Color::Cyan),
        SquareKind::Bank => Glyph::new('$', Color::Green),
        SquareKind::Event => Glyph::new('?', Color::Magenta),
        SquareKind::Dropping => Glyph::new('%', Color::DarkYellow),
    }
}

/// Board cell nearest to a pixel position, if it is on the board.
fn nearest_cell(pos: Pos) -> Option<(usize, usize)> {
    let half = SQUARE_SIZE / 2;
    let (col, row) = Pos::new(pos.x + half, pos.y + half).cell();
    let on_board = (0..BOARD_WIDTH as i32).contains(&col) && (0..BOARD_HEIGHT as i32).contains(&row);
    on_board.then(|| (col as usize, row as usize))
}

/// Glyphs for the whole board, indexed `[row][col]` with row 0 at the bottom.
///
/// Squares are drawn first, then enemies and vortices, then the players,
/// so a player standing on an enemy stays visible.
pub fn compose_board(world: &World) -> Vec<Vec<Glyph>> {
    let mut grid = vec![vec![Glyph::new('·', Color::DarkGrey); BOARD_WIDTH]; BOARD_HEIGHT];
    let mut put = |pos: Pos, g: Glyph| {
        if let Some((col, row)) = nearest_cell(pos) {
            grid[row][col] = g;
        }
    };

    for a in world.actors.iter().filter(|a| a.alive) {
        if let Body::Square(s) = &a.body {
            put(s.pos, square_glyph(s.kind));
        }
    }
    for a in world.actors.iter().filter(|a| a.alive) {
        if let Some(e) = a.as_enemy() {
            let ch = if e.kind == EnemyKind::Bowser { 'B' } else { 'b' };
            put(e.mover.pos, Glyph::new(ch, Color::DarkRed));
        } else if let Body::Vortex(v) = &a.body {
            put(v.mover.pos, Glyph::new('o', Color::White));
        }
    }
    put(world.player(PlayerId::Two).pos(), Glyph::new('2', Color::Rgb { r: 80, g: 220, b: 80 }));
    put(world.player(PlayerId::One).pos(), Glyph::new('1', Color::Rgb { r: 255, g: 120, b: 60 }));
    grid
}

pub fn result_lines(result: &GameResult) -> [String; 2] {
    [
        format!("PLAYER {} WINS!", result.winner.number()),
        format!("Stars: {}   Coins: {}", result.stars, result.coins),
    ]
}

// ── Renderer ──

pub struct Renderer {
    writer: BufWriter<io::Stdout>,
    front: FrameBuffer,
    back: FrameBuffer,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            writer: BufWriter::with_capacity(16384, io::stdout()),
            front: FrameBuffer::new(0, 0),
            back: FrameBuffer::new(0, 0),
        }
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.writer,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            SetBackgroundColor(BASE_BG),
            Clear(ClearType::All)
        )?;
        self.fit_terminal()?;
        Ok(())
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(self.writer, ResetColor, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    /// Track terminal size; on change repaint everything.
    fn fit_terminal(&mut self) -> io::Result<()> {
        let (tw, th) = terminal::size().unwrap_or((80, 24));
        let (tw, th) = (tw as usize, th as usize);
        if tw != self.front.width || th != self.front.height || self.front.cells.is_empty() {
            self.front.resize(tw, th);
            self.back.resize(tw, th);
            self.back.cells.fill(Glyph::INVALID);
            queue!(self.writer, SetBackgroundColor(BASE_BG), Clear(ClearType::All))?;
        }
        Ok(())
    }

    pub fn render(&mut self, world: &World, time_left: u32) -> io::Result<()> {
        self.fit_terminal()?;
        self.front.cells.fill(Glyph::EMPTY);

        self.front.put_str(0, STATUS_ROW, &world.status_line(time_left), Color::White);

        let board = compose_board(world);
        for (i, row) in board.iter().rev().enumerate() {
            for (col, &g) in row.iter().enumerate() {
                self.front.set(col * CELL_W, BOARD_ROW + i, g);
            }
        }

        if let Some(result) = &world.result {
            let [title, score] = result_lines(result);
            let mid = BOARD_ROW + BOARD_HEIGHT / 2;
            let x = BOARD_WIDTH * CELL_W + 4;
            self.front.put_str(x, mid - 1, &title, Color::Yellow);
            self.front.put_str(x, mid + 1, &score, Color::White);
            self.front.put_str(0, HELP_ROW, "Game over. Press Esc to exit.", Color::DarkGrey);
        } else {
            self.front.put_str(0, HELP_ROW, HELP, Color::DarkGrey);
        }

        self.flush_diff()?;
        std::mem::swap(&mut self.front, &mut self.back);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_fg = Color::White;
        let mut cursor_at: Option<(usize, usize)> = None;
        queue!(self.writer, SetForegroundColor(last_fg), SetBackgroundColor(BASE_BG))?;

        for y in 0..self.front.height {
            for x in 0..self.front.width {
                let g = self.front.get(x, y);
                if g == self.back.get(x, y) {
                    continue;
                }
                if cursor_at != Some((x, y)) {
                    queue!(self.writer, MoveTo(x as u16, y as u16))?;
                }
                if g.fg != last_fg {
                    queue!(self.writer, SetForegroundColor(g.fg))?;
                    last_fg = g.fg;
                }
                queue!(self.writer, Print(g.ch))?;
                cursor_at = Some((x + 1, y));
            }
        }
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dice::ScriptedDice;
    use crate::domain::enemy::Enemy;
    use crate::domain::square::Square;

    #[test]
    fn players_draw_over_enemies_and_squares() {
        let mut w = World::new(Box::new(ScriptedDice::default()));
        let at = Pos::of_cell(3, 2);
        w.spawn(Body::Square(Square::new(SquareKind::Star, at)));
        w.spawn(Body::Enemy(Enemy::new(EnemyKind::Boo, at)));
        w.spawn(Body::Square(Square::new(SquareKind::Bank, Pos::of_cell(4, 2))));
        w.place_player(PlayerId::One, Pos::of_cell(0, 0));
        w.place_player(PlayerId::Two, Pos::of_cell(0, 0));

        let grid = compose_board(&w);
        assert_eq!(grid[2][3].ch, 'b');
        assert_eq!(grid[2][4].ch, '$');
        assert_eq!(grid[0][0].ch, '1');
        assert_eq!(grid[5][5].ch, '·');
    }

    #[test]
    fn moving_actors_snap_to_nearest_cell() {
        assert_eq!(nearest_cell(Pos::new(38, 16)), Some((2, 1)));
        assert_eq!(nearest_cell(Pos::new(42, 16)), Some((3, 1)));
        assert_eq!(nearest_cell(Pos::new(-10, 0)), None);
    }

    #[test]
    fn result_text() {
        let r = GameResult { winner: PlayerId::Two, stars: 3, coins: 41 };
        assert_eq!(result_lines(&r), ["PLAYER 2 WINS!".to_string(), "Stars: 3   Coins: 41".to_string()]);
    }
}
