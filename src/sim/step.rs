/// The step function: advances the world by one tick.
///
/// Processing order:
///   1. Every live actor acts once, in `actors` order
///   2. Dead actors are reaped
///   3. Countdown check: at zero the game is decided
///
/// Scheduling rule for spawns: actors created during the pass (vortices,
/// droppings) are appended, and the pass runs until the end of the list as
/// it grows, so a fresh spawn acts in the same tick it was created.
///
/// Each actor's tick copies its state out of `world.actors`, works on the
/// copy with the world free for queries and side effects, and writes the
/// copy back. Only the acting actor's own entry is written back, and other
/// actors are only ever appended or marked dead, so indices stay valid for
/// the whole pass.

use log::{debug, info};

use crate::domain::actor::{ActivationLatch, Body, Hook, LandingMode, PlayerId};
use crate::domain::enemy::EnemyKind;
use crate::domain::geom::{Pos, SQUARE_SIZE};
use crate::domain::player::{Intent, WalkStep, DIE_FACES};
use crate::domain::square::{
    SquareKind, BANK_FEE, COIN_AMOUNT, DROPPING_COIN_LOSS, STAR_PRICE,
};
use crate::domain::vortex::Vortex;
use super::event::GameEvent;
use super::world::{SquareMap, World};

/// Everything the outside world feeds into one tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    pub intents: [Intent; 2],
    /// Seconds left on the game clock.
    pub time_left: u32,
}

// ══════════════════════════════════════════════════════════════
// Main entry point
// ══════════════════════════════════════════════════════════════

pub fn step(world: &mut World, input: FrameInput) -> Vec<GameEvent> {
    if world.result.is_some() { return vec![]; }

    world.tick += 1;

    let mut i = 0;
    while i < world.actors.len() {
        if world.actors[i].alive {
            match world.actors[i].body {
                Body::Player(id) => tick_player(world, id, input.intents[id.index()]),
                Body::Enemy(_) => tick_enemy(world, i),
                Body::Square(_) => tick_square(world, i),
                Body::Vortex(_) => tick_vortex(world, i),
            }
        }
        i += 1;
    }

    world.reap();

    if input.time_left == 0 {
        let result = world.decide_winner();
        info!(
            "game over: player {} wins with {} stars and {} coins",
            result.winner.number(), result.stars, result.coins,
        );
        world.result = Some(result);
        world.emit(GameEvent::GameFinished { result });
    }

    std::mem::take(&mut world.events)
}

// ══════════════════════════════════════════════════════════════
// Landing protocol
// ══════════════════════════════════════════════════════════════

/// A landing effect owned by a square or an enemy.
trait LandingEffect: Copy {
    fn mode(self) -> LandingMode;
    fn primary(self, world: &mut World, player: PlayerId);
    fn secondary(self, _world: &mut World, _player: PlayerId) {}
}

/// Run the protocol at `at` for player one, then player two.
fn activate_on_players(
    world: &mut World,
    latch: &mut ActivationLatch,
    at: Pos,
    effect: impl LandingEffect,
) {
    for id in PlayerId::BOTH {
        let p = world.player(id);
        let coincident = p.pos().coincides(at);
        match latch.evaluate(id, coincident, p.walking(), effect.mode()) {
            Some(Hook::Primary) => effect.primary(world, id),
            Some(Hook::Secondary) => effect.secondary(world, id),
            None => {}
        }
    }
}

// ══════════════════════════════════════════════════════════════
// Players
// ══════════════════════════════════════════════════════════════

fn tick_player(world: &mut World, id: PlayerId, intent: Intent) {
    let player = &mut world.players[id.index()];
    player.just_landed = false;

    if !player.walking() {
        match intent {
            Intent::Roll => {
                let roll = world.dice.roll(1, DIE_FACES);
                player.start_roll(roll);
                debug!("player {} rolled {}", id.number(), roll);
            }
            Intent::Fire => {
                if player.has_vortex {
                    player.has_vortex = false;
                    let dir = player.mover.walk_dir;
                    let at = player.pos().offset(dir, SQUARE_SIZE);
                    world.spawn(Body::Vortex(Vortex::new(at, dir)));
                    world.emit(GameEvent::VortexFired { player: id });
                }
                return;
            }
            _ => return,
        }
    }

    let terrain = SquareMap(&world.actors);
    let player = &mut world.players[id.index()];
    if player.walk(intent, &terrain) == WalkStep::Landed {
        let at = player.pos();
        let on = world.square_at(at).map_or("nothing", |s| s.kind.name());
        debug!("player {} landed on {} at {:?}", id.number(), on, at);
    }
}

// ══════════════════════════════════════════════════════════════
// Enemies
// ══════════════════════════════════════════════════════════════

impl LandingEffect for EnemyKind {
    fn mode(self) -> LandingMode {
        LandingMode::OnLanding
    }

    fn primary(self, world: &mut World, player: PlayerId) {
        match self {
            EnemyKind::Bowser => {
                if world.dice.roll(0, 1) == 1 {
                    let p = world.player_mut(player);
                    p.coins = 0;
                    p.stars = 0;
                    info!("bowser robbed player {}", player.number());
                    world.emit(GameEvent::BowserActivated { player });
                }
            }
            EnemyKind::Boo => {
                let swap_coins = world.dice.roll(0, 1) == 0;
                let (me, other) = world.player_and_other_mut(player);
                if swap_coins {
                    me.swap_coins(other);
                } else {
                    me.swap_stars(other);
                }
                let other = world.other_player(player);
                info!(
                    "boo swapped {} for player {}, other player now has {} coins and {} stars",
                    if swap_coins { "coins" } else { "stars" },
                    player.number(), other.coins, other.stars,
                );
                world.emit(GameEvent::BooActivated { player });
            }
        }
    }
}

fn tick_enemy(world: &mut World, i: usize) {
    let mut enemy = match world.actors[i].body {
        Body::Enemy(e) => e,
        _ => return,
    };

    if !enemy.mover.walking {
        activate_on_players(world, &mut enemy.latch, enemy.mover.pos, enemy.kind);
        let terrain = SquareMap(&world.actors);
        enemy.tick_pause(&terrain, world.dice.as_mut());
    }

    if enemy.mover.walking {
        let terrain = SquareMap(&world.actors);
        let finished = enemy.tick_walk(&terrain, world.dice.as_mut());
        if finished && enemy.kind == EnemyKind::Bowser && world.dice.roll(0, 3) == 3 {
            world.deposit_dropping(enemy.mover.pos);
        }
    }

    if let Body::Enemy(slot) = &mut world.actors[i].body {
        *slot = enemy;
    }
}

/// A vortex struck actor `i`.
fn hit_enemy(world: &mut World, i: usize) {
    let Some(here) = world.actors[i].pos() else { return };
    let dest = world.random_square_pos().unwrap_or(here);
    if let Body::Enemy(e) = &mut world.actors[i].body {
        e.on_hit(dest);
        info!("{} hit by vortex, sent to {:?}", e.kind.name(), dest);
    }
}

// ══════════════════════════════════════════════════════════════
// Squares
// ══════════════════════════════════════════════════════════════

impl LandingEffect for SquareKind {
    fn mode(self) -> LandingMode {
        self.landing_mode()
    }

    fn primary(self, world: &mut World, player: PlayerId) {
        match self {
            SquareKind::Coin { grant } => {
                let delta = if grant { COIN_AMOUNT } else { -COIN_AMOUNT };
                let applied = world.player_mut(player).change_coins(delta);
                let amount = applied.unsigned_abs();
                world.emit(if grant {
                    GameEvent::CoinsGiven { player, amount }
                } else {
                    GameEvent::CoinsTaken { player, amount }
                });
            }
            SquareKind::Star => {
                let p = world.player_mut(player);
                if p.coins >= STAR_PRICE {
                    p.change_coins(-(STAR_PRICE as i32));
                    p.change_stars(1);
                    world.emit(GameEvent::StarGiven { player });
                }
            }
            SquareKind::Dir(dir) => world.player_mut(player).force_dir(dir),
            SquareKind::Bank => {
                let amount = std::mem::take(&mut world.bank);
                world.player_mut(player).change_coins(amount as i32);
                world.emit(GameEvent::BankWithdraw { player, amount });
            }
            SquareKind::Event => {
                if !world.player(player).just_landed {
                    return;
                }
                match world.dice.roll(1, 3) {
                    1 => {
                        world.teleport_player(player);
                        world.emit(GameEvent::Teleported { player });
                    }
                    2 => {
                        world.swap_player_movement(player);
                        debug!(
                            "player {} swapped places, now at {:?}; other player at {:?}",
                            player.number(),
                            world.player(player).pos(),
                            world.other_player(player).pos(),
                        );
                        world.emit(GameEvent::Teleported { player });
                    }
                    _ => {
                        world.player_mut(player).has_vortex = true;
                        world.emit(GameEvent::VortexGiven { player });
                    }
                }
            }
            SquareKind::Dropping => {
                let lose_coins = world.dice.roll(1, 2) == 1;
                let p = world.player_mut(player);
                if lose_coins {
                    p.change_coins(-DROPPING_COIN_LOSS);
                } else {
                    p.change_stars(-1);
                }
                world.emit(GameEvent::DroppingActivated { player });
            }
        }
    }

    fn secondary(self, world: &mut World, player: PlayerId) {
        if self == SquareKind::Bank {
            let taken = world.player_mut(player).change_coins(-BANK_FEE);
            let amount = taken.unsigned_abs();
            world.bank += amount;
            world.emit(GameEvent::BankDeposit { player, amount });
        }
    }
}

fn tick_square(world: &mut World, i: usize) {
    let mut square = match world.actors[i].body {
        Body::Square(s) => s,
        _ => return,
    };
    activate_on_players(world, &mut square.latch, square.pos, square.kind);
    if let Body::Square(slot) = &mut world.actors[i].body {
        slot.latch = square.latch;
    }
}

// ══════════════════════════════════════════════════════════════
// Vortices
// ══════════════════════════════════════════════════════════════

fn tick_vortex(world: &mut World, i: usize) {
    let mut vortex = match world.actors[i].body {
        Body::Vortex(v) => v,
        _ => return,
    };

    let in_view = vortex.fly();
    if let Body::Vortex(slot) = &mut world.actors[i].body {
        *slot = vortex;
    }
    if !in_view {
        debug!("vortex left the board at {:?}", vortex.mover.pos);
        world.actors[i].alive = false;
        return;
    }

    if let Some(target) = world.vulnerable_overlapping(vortex.mover.pos) {
        hit_enemy(world, target);
        world.actors[i].alive = false;
        world.emit(GameEvent::VortexHit { at: vortex.mover.pos });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dice::ScriptedDice;
    use crate::domain::enemy::{Enemy, PAUSE_TICKS};
    use crate::domain::geom::Dir;
    use crate::domain::square::Square;

    /// Build a world from a diagram (first row = top of board).
    /// Legend: '#' blue coin  '-' red coin  '*' star  '$' bank  '?' event
    ///         '%' dropping  '^' up arrow  '1' / '2' player start on a blue coin
    ///         'B' bowser on a blue coin  'b' boo on a blue coin
    fn world_from(rows: &[&str], rolls: &[u32]) -> World {
        let mut w = World::new(Box::new(ScriptedDice::new(rolls)));
        let h = rows.len();
        let mut enemies = vec![];
        for (i, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let pos = Pos::of_cell(x, h - 1 - i);
                let kind = match ch {
                    '#' | '1' | '2' | 'B' | 'b' => SquareKind::Coin { grant: true },
                    '-' => SquareKind::Coin { grant: false },
                    '*' => SquareKind::Star,
                    '$' => SquareKind::Bank,
                    '?' => SquareKind::Event,
                    '%' => SquareKind::Dropping,
                    '^' => SquareKind::Dir(Dir::Up),
                    _ => continue,
                };
                match ch {
                    '1' => w.place_player(PlayerId::One, pos),
                    '2' => w.place_player(PlayerId::Two, pos),
                    'B' => enemies.push(Enemy::new(EnemyKind::Bowser, pos)),
                    'b' => enemies.push(Enemy::new(EnemyKind::Boo, pos)),
                    _ => {}
                }
                w.spawn(Body::Square(Square::new(kind, pos)));
            }
        }
        for e in enemies {
            w.spawn(Body::Enemy(e));
        }
        w
    }

    fn run(w: &mut World, ticks: usize, intents: [Intent; 2]) -> Vec<GameEvent> {
        let mut all = vec![];
        for _ in 0..ticks {
            all.extend(step(w, FrameInput { intents, time_left: 99 }));
        }
        all
    }

    fn idle() -> [Intent; 2] {
        [Intent::None, Intent::None]
    }

    #[test]
    fn coin_square_grants_once_per_landing() {
        // P1 rolls 1 and walks onto the blue square to the right.
        let mut w = world_from(&["1#-", "2.."], &[1]);
        let events = run(&mut w, 1, [Intent::Roll, Intent::None]);
        assert!(w.players[0].walking());
        let mut all = events;
        all.extend(run(&mut w, 60, idle()));

        assert_eq!(w.players[0].pos(), Pos::of_cell(1, 1));
        assert_eq!(w.players[0].coins, 3);
        let given = all.iter()
            .filter(|e| matches!(e, GameEvent::CoinsGiven { player: PlayerId::One, .. }))
            .count();
        assert_eq!(given, 1);
    }

    #[test]
    fn starting_square_pays_on_first_tick() {
        let mut w = world_from(&["1#", "2#"], &[]);
        let events = run(&mut w, 5, idle());
        assert_eq!(w.players[0].coins, 3);
        assert_eq!(w.players[1].coins, 3);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn red_square_takes_what_it_can() {
        let mut w = world_from(&["1-#", "2.."], &[1]);
        w.players[0].coins = 2;
        // Start square pays 3 first.
        run(&mut w, 1, idle());
        assert_eq!(w.players[0].coins, 5);
        let events = run(&mut w, 1, [Intent::Roll, Intent::None]);
        assert!(events.is_empty());
        let events = run(&mut w, 10, idle());
        assert_eq!(w.players[0].coins, 2);
        assert!(events.contains(&GameEvent::CoinsTaken { player: PlayerId::One, amount: 3 }));
    }

    #[test]
    fn star_square_needs_twenty_coins() {
        for (coins, stars_after, coins_after) in [(19, 0, 19), (20, 1, 0)] {
            let mut w = world_from(&["1*#", "2.."], &[1]);
            w.players[0].coins = coins;
            run(&mut w, 1, [Intent::Roll, Intent::None]);
            run(&mut w, 8, idle());
            assert_eq!(w.players[0].pos(), Pos::of_cell(1, 1));
            assert_eq!(w.players[0].stars, stars_after);
            assert_eq!(w.players[0].coins, coins_after);
        }
    }

    #[test]
    fn bank_collects_fee_in_passing_and_pays_out_on_landing() {
        let mut w = world_from(&["1$##", "2..."], &[2]);
        w.players[0].coins = 3;
        run(&mut w, 1, [Intent::Roll, Intent::None]);
        let events = run(&mut w, 16, idle());
        // Only 3 of the 5 coin fee could be paid.
        assert_eq!(w.bank, 3);
        assert_eq!(w.players[0].coins, 3);
        assert!(events.contains(&GameEvent::BankDeposit { player: PlayerId::One, amount: 3 }));

        w.bank = 12;
        w.players[0].mover.pos = Pos::of_cell(1, 1);
        let events = run(&mut w, 1, idle());
        assert_eq!(w.bank, 0);
        assert_eq!(w.players[0].coins, 15);
        assert!(events.contains(&GameEvent::BankWithdraw { player: PlayerId::One, amount: 12 }));
    }

    #[test]
    fn direction_square_overrides_intersection_choice() {
        // The up arrow sits on a T-junction; without it P1 would wait there.
        let mut w = world_from(&[
            "..#.",
            "1#^#",
            "2...",
        ], &[3]);
        run(&mut w, 1, [Intent::Roll, Intent::None]);
        run(&mut w, 23, idle());
        assert_eq!(w.players[0].pos(), Pos::of_cell(2, 2));
        assert_eq!(w.players[0].mover.walk_dir, Dir::Up);
        assert!(!w.players[0].walking());
    }

    #[test]
    fn latch_rearms_after_swap_away_and_back() {
        let mut w = world_from(&["1#", "2#"], &[]);
        run(&mut w, 1, idle());
        let top_left = 1;
        let latched = |w: &World| match &w.actors[top_left].body {
            Body::Square(s) => s.latch.is_set(PlayerId::One),
            _ => unreachable!(),
        };
        assert!(latched(&w));

        w.swap_player_movement(PlayerId::One);
        run(&mut w, 1, idle());
        assert!(!latched(&w));
        assert_eq!(w.players[0].coins, 6);

        w.swap_player_movement(PlayerId::One);
        run(&mut w, 1, idle());
        assert!(latched(&w));
        assert_eq!(w.players[0].coins, 9);
    }

    #[test]
    fn event_square_acts_only_on_landing() {
        // Roll 1 onto the event square, which grants a vortex (roll 3).
        let mut w = world_from(&["1?#", "2.."], &[1, 3]);
        run(&mut w, 1, [Intent::Roll, Intent::None]);
        let events = run(&mut w, 12, idle());
        assert!(w.players[0].has_vortex);
        assert_eq!(
            events.iter().filter(|e| matches!(e, GameEvent::VortexGiven { .. })).count(),
            1
        );
    }

    #[test]
    fn event_square_swap_exchanges_players() {
        let mut w = world_from(&["1?#", "2##"], &[1, 2]);
        run(&mut w, 1, [Intent::Roll, Intent::None]);
        run(&mut w, 8, idle());
        assert_eq!(w.players[0].pos(), Pos::of_cell(0, 0));
        assert_eq!(w.players[1].pos(), Pos::of_cell(1, 1));
    }

    #[test]
    fn event_square_teleport_faces_a_passable_way() {
        // Rolls: die 1, event 1 (teleport), square index 5, heading index 1.
        let mut w = world_from(&["1?#", "2##"], &[1, 1, 5, 1]);
        run(&mut w, 1, [Intent::Roll, Intent::None]);
        let events = run(&mut w, 8, idle());
        assert!(events.contains(&GameEvent::Teleported { player: PlayerId::One }));

        let p1 = &w.players[0];
        assert_eq!(p1.pos(), Pos::of_cell(2, 0));
        // Passable from the bottom-right corner: [Left, Up].
        assert_eq!(p1.mover.walk_dir, Dir::Up);
        assert!(!p1.walking());
        assert_eq!(w.players[1].pos(), Pos::of_cell(0, 0));
    }

    #[test]
    fn dropping_square_takes_coins_or_a_star() {
        // Second roll picks the branch: 1 loses ten coins, 2 loses a star.
        for (branch, coins_after, stars_after) in [(1, 0, 2), (2, 4, 1)] {
            let mut w = world_from(&["1%#", "2.."], &[1, branch]);
            w.players[0].coins = 4;
            w.players[0].stars = 2;
            run(&mut w, 1, [Intent::Roll, Intent::None]);
            let events = run(&mut w, 8, idle());
            assert_eq!(w.players[0].pos(), Pos::of_cell(1, 1));
            assert_eq!((w.players[0].coins, w.players[0].stars), (coins_after, stars_after));
            let activations: Vec<_> = events.iter()
                .filter(|e| matches!(e, GameEvent::DroppingActivated { .. }))
                .collect();
            assert_eq!(activations, vec![&GameEvent::DroppingActivated { player: PlayerId::One }]);
        }
    }

    #[test]
    fn fired_vortex_hits_enemy_and_resets_it() {
        let mut w = world_from(&["1#b#", "2###"], &[]);
        w.players[0].has_vortex = true;
        let boo = w.actors.iter().position(|a| a.is_vulnerable()).unwrap();
        if let Body::Enemy(e) = &mut w.actors[boo].body {
            e.pause = 40;
        }
        let events = run(&mut w, 1, [Intent::Fire, Intent::None]);
        assert!(!w.players[0].has_vortex);
        assert!(events.contains(&GameEvent::VortexFired { player: PlayerId::One }));
        // Spawned one square ahead and already overlapping on its first move.
        assert!(events.iter().any(|e| matches!(e, GameEvent::VortexHit { .. })));
        assert!(w.actors.iter().all(|a| !matches!(a.body, Body::Vortex(_))));
        let boo = w.actors.iter().find_map(|a| a.as_enemy()).unwrap();
        assert_eq!(boo.pause, PAUSE_TICKS);
        assert!(!boo.mover.walking);
    }

    #[test]
    fn vortex_off_board_dies_without_hits() {
        let mut w = world_from(&["2#b", "1##"], &[]);
        w.players[0].has_vortex = true;
        run(&mut w, 1, [Intent::Fire, Intent::None]);
        let mut alive_ticks = 0;
        while w.actors.iter().any(|a| matches!(a.body, Body::Vortex(_))) {
            let events = run(&mut w, 1, idle());
            assert!(!events.iter().any(|e| matches!(e, GameEvent::VortexHit { .. })));
            alive_ticks += 1;
            assert!(alive_ticks < 256);
        }
        let events = run(&mut w, 50, idle());
        assert!(!events.iter().any(|e| matches!(e, GameEvent::VortexHit { .. })));
    }

    #[test]
    fn bowser_drops_on_walk_complete() {
        // Bowser walks one square right and drops (rolls: length 1, dir 0, drop 3).
        let mut w = world_from(&["B##", "...", "1.2"], &[1, 0, 3]);
        let bowser = w.actors.iter().position(|a| a.is_vulnerable()).unwrap();
        if let Body::Enemy(e) = &mut w.actors[bowser].body {
            e.pause = 1;
        }
        let mut events = vec![];
        events.extend(run(&mut w, 8, idle()));
        let at = Pos::of_cell(1, 2);
        assert!(events.contains(&GameEvent::DroppingCreated { at }));
        let here: Vec<_> = w.actors.iter()
            .filter_map(|a| a.as_square())
            .filter(|s| s.pos == at)
            .collect();
        assert_eq!(here.len(), 1);
        assert_eq!(here[0].kind, SquareKind::Dropping);
    }

    #[test]
    fn bowser_robs_standing_player() {
        let mut w = world_from(&["1B", "2."], &[1]);
        w.players[0].coins = 40;
        w.players[0].stars = 2;
        // Move P1 onto Bowser's square without walking.
        w.players[0].mover.pos = Pos::of_cell(1, 1);
        let events = run(&mut w, 1, idle());
        assert_eq!((w.players[0].coins, w.players[0].stars), (0, 0));
        assert!(events.contains(&GameEvent::BowserActivated { player: PlayerId::One }));
    }

    #[test]
    fn bowser_may_spare_standing_player() {
        let mut w = world_from(&["1B", "2."], &[0]);
        w.players[0].coins = 40;
        w.players[0].stars = 2;
        w.players[0].mover.pos = Pos::of_cell(1, 1);
        let events = run(&mut w, 1, idle());
        // Only the blue square under Bowser paid out.
        assert_eq!((w.players[0].coins, w.players[0].stars), (43, 2));
        assert!(!events.iter().any(|e| matches!(e, GameEvent::BowserActivated { .. })));
    }

    #[test]
    fn boo_swaps_coins() {
        let mut w = world_from(&["1b", "2."], &[0]);
        w.players[0].coins = 7;
        w.players[1].coins = 2;
        w.players[0].stars = 3;
        w.players[0].mover.pos = Pos::of_cell(1, 1);
        let events = run(&mut w, 1, idle());
        // Both squares pay 3 before Boo acts.
        assert_eq!((w.players[0].coins, w.players[1].coins), (5, 10));
        assert_eq!((w.players[0].stars, w.players[1].stars), (3, 0));
        assert!(events.contains(&GameEvent::BooActivated { player: PlayerId::One }));
    }

    #[test]
    fn boo_swaps_stars() {
        let mut w = world_from(&["1b", "2."], &[1]);
        w.players[0].stars = 3;
        w.players[1].stars = 1;
        w.players[0].mover.pos = Pos::of_cell(1, 1);
        let events = run(&mut w, 1, idle());
        assert_eq!((w.players[0].stars, w.players[1].stars), (1, 3));
        assert!(events.contains(&GameEvent::BooActivated { player: PlayerId::One }));
    }

    #[test]
    fn countdown_zero_finishes_game() {
        let mut w = world_from(&["1#", "2#"], &[]);
        w.players[1].stars = 1;
        let events = step(&mut w, FrameInput { intents: idle(), time_left: 0 });
        let result = w.result.unwrap();
        assert_eq!(result.winner, PlayerId::Two);
        assert!(events.contains(&GameEvent::GameFinished { result }));
        assert!(step(&mut w, FrameInput::default()).is_empty());
    }
}
