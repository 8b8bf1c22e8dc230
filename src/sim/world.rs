/// World: the complete state of a running game.
///
/// ## Ownership
///
/// `actors` holds every ticked thing in tick order. Enemies, squares and
/// vortices live inside their `Actor` entry. The two players live in
/// `players`; their entries in `actors` are `Body::Player` markers that only
/// fix where in the order each player acts.
///
/// ## Liveness
///
/// Nothing is removed mid-tick. Killing an actor clears its `alive` flag,
/// which hides it from every query below, and `reap()` drops it after the
/// pass. New actors are appended (see `step` for when they first act).

use log::debug;

use crate::domain::actor::{Actor, Body, PlayerId};
use crate::domain::dice::Dice;
use crate::domain::geom::Pos;
use crate::domain::mover::Terrain;
use crate::domain::player::Player;
use crate::domain::square::{Square, SquareKind};

use super::event::GameEvent;

/// Terminal outcome reported when the countdown runs out.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GameResult {
    pub winner: PlayerId,
    pub stars: u32,
    pub coins: u32,
}

/// Square lookup over a borrowed actor list.
///
/// Borrowing only `actors` lets callers hold this alongside a mutable
/// borrow of the players or the dice.
pub struct SquareMap<'a>(pub &'a [Actor]);

impl SquareMap<'_> {
    pub fn index_at(&self, pos: Pos) -> Option<usize> {
        self.0.iter().position(|a| a.alive && a.is_square() && a.pos() == Some(pos))
    }
}

impl Terrain for SquareMap<'_> {
    fn has_square_at(&self, pos: Pos) -> bool {
        self.index_at(pos).is_some()
    }
}

pub struct World {
    pub actors: Vec<Actor>,
    pub players: [Player; 2],
    pub bank: u32,
    pub dice: Box<dyn Dice>,
    /// Events produced by the current tick; drained by `step`.
    pub events: Vec<GameEvent>,
    pub tick: u64,
    pub result: Option<GameResult>,
}

// ── Construction ──

impl World {
    pub fn new(dice: Box<dyn Dice>) -> Self {
        World {
            actors: Vec::new(),
            players: [Player::new(Pos::default()), Player::new(Pos::default())],
            bank: 0,
            dice,
            events: Vec::new(),
            tick: 0,
            result: None,
        }
    }

    pub fn spawn(&mut self, body: Body) {
        self.actors.push(Actor::new(body));
    }

    /// Place a player record and its slot in the tick order.
    pub fn place_player(&mut self, id: PlayerId, pos: Pos) {
        self.players[id.index()] = Player::new(pos);
        self.spawn(Body::Player(id));
    }
}

// ── Queries ──

impl World {
    pub fn squares(&self) -> SquareMap<'_> {
        SquareMap(&self.actors)
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    pub fn other_player(&self, id: PlayerId) -> &Player {
        self.player(id.other())
    }

    /// Both players, `id` first.
    pub fn player_and_other_mut(&mut self, id: PlayerId) -> (&mut Player, &mut Player) {
        let [one, two] = &mut self.players;
        match id {
            PlayerId::One => (one, two),
            PlayerId::Two => (two, one),
        }
    }

    pub fn square_at(&self, pos: Pos) -> Option<&Square> {
        self.squares().index_at(pos).and_then(|i| self.actors[i].as_square())
    }

    pub fn live_square_count(&self) -> usize {
        self.actors.iter().filter(|a| a.alive && a.is_square()).count()
    }

    /// Uniformly chosen live square.
    pub fn random_square_pos(&mut self) -> Option<Pos> {
        let squares: Vec<Pos> = self.actors.iter()
            .filter(|a| a.alive && a.is_square())
            .filter_map(Actor::pos)
            .collect();
        if squares.is_empty() {
            return None;
        }
        Some(squares[self.dice.pick(squares.len())])
    }

    /// First live vortex-vulnerable actor touching `pos`.
    pub fn vulnerable_overlapping(&self, pos: Pos) -> Option<usize> {
        self.actors.iter().position(|a| {
            a.alive && a.is_vulnerable() && a.pos().map_or(false, |p| p.overlaps(pos))
        })
    }
}

// ── Cross-actor actions ──

impl World {
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Leave a dropping square at `pos`, replacing whatever square is there.
    pub fn deposit_dropping(&mut self, pos: Pos) {
        if let Some(i) = self.squares().index_at(pos) {
            self.actors[i].alive = false;
            debug!("{} at {:?} replaced by dropping", self.actors[i].label(), pos);
        }
        self.spawn(Body::Square(Square::new(SquareKind::Dropping, pos)));
        self.emit(GameEvent::DroppingCreated { at: pos });
    }

    /// Move a player to a random square, facing a random way out of it.
    pub fn teleport_player(&mut self, id: PlayerId) {
        let Some(dest) = self.random_square_pos() else { return };
        let terrain = SquareMap(&self.actors);
        let mover = &mut self.players[id.index()].mover;
        mover.pos = dest;
        let dir = mover.random_dir(&terrain, self.dice.as_mut());
        mover.set_walk_dir(dir);
        debug!("player {} teleported to {:?} heading {:?}", id.number(), dest, dir);
    }

    /// Exchange `id`'s complete movement state with the other player's.
    pub fn swap_player_movement(&mut self, id: PlayerId) {
        let (me, other) = self.player_and_other_mut(id);
        me.mover.swap_with(&mut other.mover);
    }

    /// Remove actors whose liveness flag was cleared this tick.
    pub fn reap(&mut self) {
        self.actors.retain(|a| {
            if !a.alive {
                debug!("removing {} at {:?}", a.label(), a.pos());
            }
            a.alive
        });
    }

    /// Pick the winner: most stars, then most coins, then a coin flip.
    pub fn decide_winner(&mut self) -> GameResult {
        let [one, two] = &self.players;
        let winner = match (one.stars, one.coins).cmp(&(two.stars, two.coins)) {
            std::cmp::Ordering::Greater => PlayerId::One,
            std::cmp::Ordering::Less => PlayerId::Two,
            std::cmp::Ordering::Equal => {
                if self.dice.roll(1, 2) == 1 { PlayerId::One } else { PlayerId::Two }
            }
        };
        let p = self.player(winner);
        GameResult { winner, stars: p.stars, coins: p.coins }
    }
}

// ── Status line ──

impl World {
    /// One-line summary for the presentation layer.
    pub fn status_line(&self, time_left: u32) -> String {
        format!(
            "{} | Time: {} | Bank: {} | {}",
            self.player_status(PlayerId::One),
            time_left,
            self.bank,
            self.player_status(PlayerId::Two),
        )
    }

    fn player_status(&self, id: PlayerId) -> String {
        let p = self.player(id);
        format!(
            "P{} Roll: {} Stars: {} $$: {}{}",
            id.number(),
            p.squares_to_move(),
            p.stars,
            p.coins,
            if p.has_vortex { " VOR" } else { "" },
        )
    }
}
