/// Actors: everything the world ticks.
///
/// The actor kinds form a closed set, so an `Actor` is a liveness flag
/// plus a `Body` enum and behaviour is dispatched by matching on it.
/// Players live in the world's `players` array; their `Body::Player`
/// entry only marks where in the tick order they act.
///
/// ## Landing protocol
///
/// Squares and paused enemies react to players standing on them. Each
/// such actor carries an `ActivationLatch` with one slot per player:
///   - player not on the actor  → slot cleared
///   - player on it, slot clear → effect may fire, slot set
///   - player on it, slot set   → nothing
///
/// The slot is recomputed from coincidence every tick, so an effect fires
/// at most once per continuous stay and again after the player leaves
/// and comes back.

use super::enemy::Enemy;
use super::geom::Pos;
use super::square::Square;
use super::vortex::Vortex;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// When a landing effect is allowed to fire.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LandingMode {
    /// Only while the player is standing still.
    OnLanding,
    /// Whether or not the player is mid-walk.
    Always,
    /// Primary effect when standing, secondary when passing over.
    TwoPhase,
}

/// Which effect hook the protocol selected.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Hook {
    Primary,
    Secondary,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ActivationLatch {
    fired: [bool; 2],
}

impl ActivationLatch {
    pub fn is_set(&self, player: PlayerId) -> bool {
        self.fired[player.index()]
    }

    /// One protocol step for one player.
    ///
    /// Returns the hook to run, already latched, or `None` when nothing
    /// fires this tick.
    pub fn evaluate(
        &mut self,
        player: PlayerId,
        coincident: bool,
        walking: bool,
        mode: LandingMode,
    ) -> Option<Hook> {
        if !coincident {
            self.fired[player.index()] = false;
            return None;
        }
        if self.is_set(player) {
            return None;
        }
        let hook = match (mode, walking) {
            (LandingMode::OnLanding, true) => return None,
            (LandingMode::OnLanding, false) | (LandingMode::Always, _) => Hook::Primary,
            (LandingMode::TwoPhase, false) => Hook::Primary,
            (LandingMode::TwoPhase, true) => Hook::Secondary,
        };
        self.fired[player.index()] = true;
        Some(hook)
    }
}

#[derive(Clone, Debug)]
pub enum Body {
    Player(PlayerId),
    Enemy(Enemy),
    Square(Square),
    Vortex(Vortex),
}

#[derive(Clone, Debug)]
pub struct Actor {
    pub alive: bool,
    pub body: Body,
}

impl Actor {
    pub fn new(body: Body) -> Self {
        Actor { alive: true, body }
    }

    pub fn is_square(&self) -> bool {
        matches!(self.body, Body::Square(_))
    }

    /// Can a vortex strike this actor?
    pub fn is_vulnerable(&self) -> bool {
        matches!(self.body, Body::Enemy(_))
    }

    /// Position of non-player actors. Player markers carry no position of
    /// their own; ask the world for the player record instead.
    pub fn pos(&self) -> Option<Pos> {
        match &self.body {
            Body::Player(_) => None,
            Body::Enemy(e) => Some(e.mover.pos),
            Body::Square(s) => Some(s.pos),
            Body::Vortex(v) => Some(v.mover.pos),
        }
    }

    pub fn as_square(&self) -> Option<&Square> {
        match &self.body {
            Body::Square(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_enemy(&self) -> Option<&Enemy> {
        match &self.body {
            Body::Enemy(e) => Some(e),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match &self.body {
            Body::Player(_) => "player",
            Body::Enemy(e) => e.kind.name(),
            Body::Square(s) => s.kind.name(),
            Body::Vortex(_) => "vortex",
        }
    }
}
