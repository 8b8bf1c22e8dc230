/// Gamepad input for player two, via gilrs.
///
/// Default mapping (buttons configurable in `config.toml`):
///   D-pad / Left Stick    →  Steer
///   A                     →  Roll
///   B                     →  Fire vortex
///   Select                →  Quit
///
/// Without the `gamepad` feature this never reports a connected pad and
/// every query answers "not pressed".

#[cfg(feature = "gamepad")]
use gilrs::{Axis, Button, EventType, Gilrs};

use crate::config::GamepadConfig;
use crate::domain::geom::Dir;
use crate::domain::player::Intent;

#[cfg_attr(not(feature = "gamepad"), allow(dead_code))]
const STICK_DEADZONE: f32 = 0.25;

const BUTTON_COUNT: usize = 10;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Btn {
    A,       // South
    B,       // East
    X,       // West
    Y,       // North
    L1,
    R1,
    L2,
    R2,
    Start,
    Select,
}

impl Btn {
    fn from_name(s: &str) -> Option<Btn> {
        match s.to_uppercase().as_str() {
            "A" | "SOUTH" => Some(Btn::A),
            "B" | "EAST" => Some(Btn::B),
            "X" | "WEST" => Some(Btn::X),
            "Y" | "NORTH" => Some(Btn::Y),
            "L1" | "LB" => Some(Btn::L1),
            "R1" | "RB" => Some(Btn::R1),
            "L2" | "LT" => Some(Btn::L2),
            "R2" | "RT" => Some(Btn::R2),
            "START" => Some(Btn::Start),
            "SELECT" | "BACK" => Some(Btn::Select),
            _ => None,
        }
    }

    #[cfg(feature = "gamepad")]
    fn from_gilrs(btn: Button) -> Option<Btn> {
        Some(match btn {
            Button::South => Btn::A,
            Button::East => Btn::B,
            Button::West => Btn::X,
            Button::North => Btn::Y,
            Button::LeftTrigger => Btn::L1,
            Button::RightTrigger => Btn::R1,
            Button::LeftTrigger2 => Btn::L2,
            Button::RightTrigger2 => Btn::R2,
            Button::Start => Btn::Start,
            Button::Select => Btn::Select,
            _ => return None,
        })
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct BtnState {
    held: bool,
    just_pressed: bool,
}

impl BtnState {
    fn set(&mut self, held: bool) {
        if held && !self.held {
            self.just_pressed = true;
        }
        self.held = held;
    }
}

struct ActionMap {
    roll: Vec<Btn>,
    fire: Vec<Btn>,
    quit: Vec<Btn>,
}

impl Default for ActionMap {
    fn default() -> Self {
        ActionMap {
            roll: vec![Btn::A],
            fire: vec![Btn::B],
            quit: vec![Btn::Select],
        }
    }
}

fn dir_index(dir: Dir) -> usize {
    match dir {
        Dir::Right => 0,
        Dir::Left => 1,
        Dir::Up => 2,
        Dir::Down => 3,
    }
}

pub struct GamepadState {
    #[cfg(feature = "gamepad")]
    gilrs: Option<Gilrs>,
    buttons: [BtnState; BUTTON_COUNT],
    dpad: [BtnState; 4],
    stick: [BtnState; 4],
    stick_x: f32,
    stick_y: f32,
    action_map: ActionMap,
    pub connected: bool,
}

impl GamepadState {
    pub fn new() -> Self {
        #[cfg(feature = "gamepad")]
        let (gilrs, connected) = match Gilrs::new() {
            Ok(g) => {
                let has_pad = g.gamepads().next().is_some();
                (Some(g), has_pad)
            }
            Err(e) => {
                log::warn!("gamepad support unavailable: {e}");
                (None, false)
            }
        };
        #[cfg(not(feature = "gamepad"))]
        let connected = false;

        GamepadState {
            #[cfg(feature = "gamepad")]
            gilrs,
            buttons: [BtnState::default(); BUTTON_COUNT],
            dpad: [BtnState::default(); 4],
            stick: [BtnState::default(); 4],
            stick_x: 0.0,
            stick_y: 0.0,
            action_map: ActionMap::default(),
            connected,
        }
    }

    /// Replace default actions with configured buttons. Unknown names are
    /// skipped; a list with no known names keeps the default.
    pub fn load_button_config(&mut self, cfg: &GamepadConfig) {
        fn parse_list(names: &[String], into: &mut Vec<Btn>) {
            let btns: Vec<Btn> = names.iter().filter_map(|s| Btn::from_name(s)).collect();
            if !btns.is_empty() {
                *into = btns;
            }
        }
        let map = &mut self.action_map;
        parse_list(&cfg.roll, &mut map.roll);
        parse_list(&cfg.fire, &mut map.fire);
        parse_list(&cfg.quit, &mut map.quit);
    }

    pub fn update(&mut self) {
        for b in self.buttons.iter_mut().chain(&mut self.dpad).chain(&mut self.stick) {
            b.just_pressed = false;
        }

        #[cfg(feature = "gamepad")]
        self.poll_gilrs();
    }

    #[cfg(feature = "gamepad")]
    fn poll_gilrs(&mut self) {
        let Some(gilrs) = &mut self.gilrs else { return };
        let events: Vec<_> = std::iter::from_fn(|| gilrs.next_event()).collect();

        for event in events {
            match event.event {
                EventType::ButtonPressed(btn, _) => {
                    self.connected = true;
                    self.set_button(btn, true);
                }
                EventType::ButtonReleased(btn, _) => self.set_button(btn, false),
                EventType::AxisChanged(Axis::LeftStickX, v, _) => self.stick_x = v,
                EventType::AxisChanged(Axis::LeftStickY, v, _) => self.stick_y = v,
                EventType::Connected => self.connected = true,
                EventType::Disconnected => {
                    self.connected = false;
                    self.release_all();
                }
                _ => {}
            }
        }
        self.derive_stick();
    }

    #[cfg(feature = "gamepad")]
    fn set_button(&mut self, btn: Button, held: bool) {
        let dir = match btn {
            Button::DPadRight => Some(Dir::Right),
            Button::DPadLeft => Some(Dir::Left),
            Button::DPadUp => Some(Dir::Up),
            Button::DPadDown => Some(Dir::Down),
            _ => None,
        };
        if let Some(d) = dir {
            self.dpad[dir_index(d)].set(held);
        } else if let Some(b) = Btn::from_gilrs(btn) {
            self.buttons[b as usize].set(held);
        }
    }

    /// Turn analog stick position into four digital directions.
    #[cfg_attr(not(feature = "gamepad"), allow(dead_code))]
    fn derive_stick(&mut self) {
        let (x, y) = (self.stick_x, self.stick_y);
        self.stick[dir_index(Dir::Right)].set(x > STICK_DEADZONE);
        self.stick[dir_index(Dir::Left)].set(x < -STICK_DEADZONE);
        self.stick[dir_index(Dir::Up)].set(y > STICK_DEADZONE);
        self.stick[dir_index(Dir::Down)].set(y < -STICK_DEADZONE);
    }

    #[cfg_attr(not(feature = "gamepad"), allow(dead_code))]
    fn release_all(&mut self) {
        self.buttons = [BtnState::default(); BUTTON_COUNT];
        self.dpad = [BtnState::default(); 4];
        self.stick = [BtnState::default(); 4];
        self.stick_x = 0.0;
        self.stick_y = 0.0;
    }

    // ── Queries ──

    fn any_just_pressed(&self, btns: &[Btn]) -> bool {
        btns.iter().any(|&b| self.buttons[b as usize].just_pressed)
    }

    fn steer_held(&self, dir: Dir) -> bool {
        let i = dir_index(dir);
        self.dpad[i].held || self.stick[i].held
    }

    pub fn quit_pressed(&self) -> bool {
        self.any_just_pressed(&self.action_map.quit)
    }

    /// Player two's intent from the pad, same priority as the keyboard.
    pub fn intent(&self) -> Intent {
        if self.any_just_pressed(&self.action_map.roll) {
            return Intent::Roll;
        }
        if self.any_just_pressed(&self.action_map.fire) {
            return Intent::Fire;
        }
        Dir::ALL.iter()
            .find(|&&d| self.steer_held(d))
            .map_or(Intent::None, |&d| Intent::Steer(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn configured_buttons_replace_defaults() {
        let mut pad = GamepadState::new();
        pad.load_button_config(&GamepadConfig {
            roll: names(&["x", "Start"]),
            fire: names(&["nonsense"]),
            quit: names(&[]),
        });
        assert_eq!(pad.action_map.roll, vec![Btn::X, Btn::Start]);
        assert_eq!(pad.action_map.fire, vec![Btn::B]);
        assert_eq!(pad.action_map.quit, vec![Btn::Select]);
    }

    #[test]
    fn buttons_map_to_intents() {
        let mut pad = GamepadState::new();
        pad.buttons[Btn::B as usize].set(true);
        assert_eq!(pad.intent(), Intent::Fire);
        pad.update();
        assert_eq!(pad.intent(), Intent::None);
    }

    #[test]
    fn stick_past_deadzone_steers() {
        let mut pad = GamepadState::new();
        pad.stick_y = -0.6;
        pad.derive_stick();
        assert_eq!(pad.intent(), Intent::Steer(Dir::Down));
        pad.stick_y = 0.1;
        pad.derive_stick();
        assert_eq!(pad.intent(), Intent::None);
    }
}
