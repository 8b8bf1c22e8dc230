/// Board squares: stationary tiles with a landing effect.

use super::actor::{ActivationLatch, LandingMode};
use super::geom::{Dir, Pos};

pub const COIN_AMOUNT: i32 = 3;
pub const STAR_PRICE: u32 = 20;
pub const BANK_FEE: i32 = 5;
pub const DROPPING_COIN_LOSS: i32 = 10;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SquareKind {
    /// Blue squares give coins, red squares take them.
    Coin { grant: bool },
    Star,
    Dir(Dir),
    Bank,
    Event,
    Dropping,
}

impl SquareKind {
    pub fn landing_mode(self) -> LandingMode {
        match self {
            SquareKind::Coin { .. } | SquareKind::Event | SquareKind::Dropping => {
                LandingMode::OnLanding
            }
            SquareKind::Star | SquareKind::Dir(_) => LandingMode::Always,
            SquareKind::Bank => LandingMode::TwoPhase,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SquareKind::Coin { grant: true } => "blue coin square",
            SquareKind::Coin { grant: false } => "red coin square",
            SquareKind::Star => "star square",
            SquareKind::Dir(_) => "direction square",
            SquareKind::Bank => "bank square",
            SquareKind::Event => "event square",
            SquareKind::Dropping => "dropping square",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Square {
    pub kind: SquareKind,
    pub pos: Pos,
    pub latch: ActivationLatch,
}

impl Square {
    pub fn new(kind: SquareKind, pos: Pos) -> Self {
        Square { kind, pos, latch: ActivationLatch::default() }
    }
}
