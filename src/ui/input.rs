/// Keyboard state and per-player bindings.
///
/// Both players share one keyboard. Steering reads held keys so a player
/// can hold a direction while approaching an intersection; rolling and
/// firing are edge-triggered so one press means one action.
///
/// Terminals that never report key releases are handled by expiring a
/// held key after `HOLD_TIMEOUT` without a press or repeat.

use std::collections::HashMap;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, poll, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};
use log::debug;

use crate::domain::actor::PlayerId;
use crate::domain::geom::Dir;
use crate::domain::player::Intent;

const HOLD_TIMEOUT: Duration = Duration::from_millis(160);

// ── Bindings ──

pub struct KeyBindings {
    pub right: &'static [KeyCode],
    pub left: &'static [KeyCode],
    pub up: &'static [KeyCode],
    pub down: &'static [KeyCode],
    pub roll: &'static [KeyCode],
    pub fire: &'static [KeyCode],
}

pub const PLAYER_ONE_KEYS: KeyBindings = KeyBindings {
    right: &[KeyCode::Char('d'), KeyCode::Char('D')],
    left: &[KeyCode::Char('a'), KeyCode::Char('A')],
    up: &[KeyCode::Char('w'), KeyCode::Char('W')],
    down: &[KeyCode::Char('s'), KeyCode::Char('S')],
    roll: &[KeyCode::Char('1'), KeyCode::Char(' ')],
    fire: &[KeyCode::Char('e'), KeyCode::Char('E')],
};

pub const PLAYER_TWO_KEYS: KeyBindings = KeyBindings {
    right: &[KeyCode::Right],
    left: &[KeyCode::Left],
    up: &[KeyCode::Up],
    down: &[KeyCode::Down],
    roll: &[KeyCode::Enter],
    fire: &[KeyCode::Char('/')],
};

impl KeyBindings {
    pub fn for_player(id: PlayerId) -> &'static KeyBindings {
        match id {
            PlayerId::One => &PLAYER_ONE_KEYS,
            PlayerId::Two => &PLAYER_TWO_KEYS,
        }
    }

    fn steer(&self, dir: Dir) -> &'static [KeyCode] {
        match dir {
            Dir::Right => self.right,
            Dir::Left => self.left,
            Dir::Up => self.up,
            Dir::Down => self.down,
        }
    }
}

// ── State ──

pub struct InputState {
    /// Last press/repeat per key.
    last_active: HashMap<KeyCode, Instant>,
    /// Keys that went from released to held during the last drain.
    fresh_presses: Vec<KeyCode>,
    pub raw_events: Vec<KeyEvent>,
    /// Trust release events; set once the terminal agrees to report them.
    honor_release: bool,
}

impl InputState {
    pub fn new() -> Self {
        InputState {
            last_active: HashMap::with_capacity(16),
            fresh_presses: Vec::with_capacity(8),
            raw_events: Vec::with_capacity(8),
            honor_release: false,
        }
    }

    /// Ask the terminal to report key releases. When it can, releases end a
    /// hold immediately instead of after `HOLD_TIMEOUT`.
    pub fn enable_release_events(&mut self) -> io::Result<()> {
        if terminal::supports_keyboard_enhancement()? {
            execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            self.honor_release = true;
        }
        debug!("key release events: {}", self.honor_release);
        Ok(())
    }

    pub fn disable_release_events(&mut self) -> io::Result<()> {
        if self.honor_release {
            execute!(io::stdout(), PopKeyboardEnhancementFlags)?;
            self.honor_release = false;
        }
        Ok(())
    }

    /// Read every pending terminal event without blocking.
    /// Call once per frame before building intents.
    pub fn drain_events(&mut self) {
        self.fresh_presses.clear();
        self.raw_events.clear();

        while poll(Duration::ZERO).unwrap_or(false) {
            if let Ok(Event::Key(key)) = event::read() {
                self.record(key, Instant::now());
            }
        }

        let now = Instant::now();
        self.last_active.retain(|_, t| now.duration_since(*t) < HOLD_TIMEOUT);
    }

    fn record(&mut self, key: KeyEvent, at: Instant) {
        self.raw_events.push(key);
        match key.kind {
            KeyEventKind::Release if self.honor_release => {
                self.last_active.remove(&key.code);
            }
            KeyEventKind::Release => {}
            _ => {
                if !self.is_held(key.code) {
                    self.fresh_presses.push(key.code);
                }
                self.last_active.insert(key.code, at);
            }
        }
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.last_active.get(&code)
            .map_or(false, |t| t.elapsed() < HOLD_TIMEOUT)
    }

    pub fn any_held(&self, codes: &[KeyCode]) -> bool {
        codes.iter().any(|c| self.is_held(*c))
    }

    pub fn was_pressed(&self, code: KeyCode) -> bool {
        self.fresh_presses.contains(&code)
    }

    pub fn any_pressed(&self, codes: &[KeyCode]) -> bool {
        codes.iter().any(|c| self.was_pressed(*c))
    }

    pub fn ctrl_c_pressed(&self) -> bool {
        self.raw_events.iter().any(|k| {
            k.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(k.code, KeyCode::Char('c') | KeyCode::Char('C'))
        })
    }

    pub fn quit_pressed(&self) -> bool {
        self.was_pressed(KeyCode::Esc) || self.ctrl_c_pressed()
    }

    /// This frame's intent for one player.
    ///
    /// Roll beats fire beats steering; steering checks directions in
    /// `Dir::ALL` order.
    pub fn intent(&self, id: PlayerId) -> Intent {
        let keys = KeyBindings::for_player(id);
        if self.any_pressed(keys.roll) {
            return Intent::Roll;
        }
        if self.any_pressed(keys.fire) {
            return Intent::Fire;
        }
        Dir::ALL.iter()
            .find(|&&d| {
                let codes = keys.steer(d);
                self.any_held(codes) || self.any_pressed(codes)
            })
            .map_or(Intent::None, |&d| Intent::Steer(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(state: &mut InputState, code: KeyCode) {
        state.record(KeyEvent::new(code, KeyModifiers::NONE), Instant::now());
    }

    #[test]
    fn players_read_their_own_keys() {
        let mut input = InputState::new();
        press(&mut input, KeyCode::Char('w'));
        press(&mut input, KeyCode::Enter);
        assert_eq!(input.intent(PlayerId::One), Intent::Steer(Dir::Up));
        assert_eq!(input.intent(PlayerId::Two), Intent::Roll);
    }

    #[test]
    fn roll_wins_over_steering() {
        let mut input = InputState::new();
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Char('/'));
        assert_eq!(input.intent(PlayerId::Two), Intent::Fire);
        press(&mut input, KeyCode::Enter);
        assert_eq!(input.intent(PlayerId::Two), Intent::Roll);
    }

    #[test]
    fn repeat_is_not_a_fresh_press() {
        let mut input = InputState::new();
        press(&mut input, KeyCode::Char(' '));
        input.fresh_presses.clear();
        press(&mut input, KeyCode::Char(' '));
        assert!(input.is_held(KeyCode::Char(' ')));
        assert_eq!(input.intent(PlayerId::One), Intent::None);
    }

    #[test]
    fn release_only_counts_when_honored() {
        let mut input = InputState::new();
        press(&mut input, KeyCode::Up);
        let release = KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Release);
        input.record(release, Instant::now());
        assert!(input.is_held(KeyCode::Up));

        input.honor_release = true;
        input.record(release, Instant::now());
        assert!(!input.is_held(KeyCode::Up));
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut input = InputState::new();
        input.record(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), Instant::now());
        assert!(input.quit_pressed());
        let mut input = InputState::new();
        press(&mut input, KeyCode::Esc);
        assert!(input.quit_pressed());
    }

    #[test]
    fn without_release_reporting_nothing_is_restored() {
        let mut input = InputState::new();
        assert!(input.disable_release_events().is_ok());
        assert!(!input.honor_release);
    }
}
