/// External configuration loader.
///
/// Reads `config.toml` from the executable's directory, the working
/// directory or the per-user / system data directories, in that order.
/// A missing file or missing keys fall back to defaults.

use log::warn;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "starcrawl";

// ── Public Config Struct ──

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub game: GameSettings,
    pub gamepad: GamepadConfig,
    pub boards_dir: PathBuf,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameSettings {
    pub tick_rate_ms: u64,
    pub time_limit_secs: u32,
    /// Fixed dice seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Board number; 0 is the built-in board.
    pub board: u32,
}

/// Player two's gamepad buttons.
#[derive(Clone, Debug, PartialEq)]
pub struct GamepadConfig {
    pub roll: Vec<String>,
    pub fire: Vec<String>,
    pub quit: Vec<String>,
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    game: TomlGame,
    #[serde(default)]
    gamepad: TomlGamepad,
    #[serde(default)]
    general: TomlGeneral,
}

#[derive(Deserialize, Debug)]
struct TomlGame {
    #[serde(default = "default_tick_rate")]
    tick_rate_ms: u64,
    #[serde(default = "default_time_limit")]
    time_limit_secs: u32,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default = "default_board")]
    board: u32,
}

#[derive(Deserialize, Debug)]
struct TomlGamepad {
    #[serde(default = "default_roll")]
    roll: Vec<String>,
    #[serde(default = "default_fire")]
    fire: Vec<String>,
    #[serde(default = "default_quit")]
    quit: Vec<String>,
}

#[derive(Deserialize, Debug)]
struct TomlGeneral {
    #[serde(default = "default_boards_dir")]
    boards_dir: String,
}

// ── Defaults ──

fn default_tick_rate() -> u64 { 33 }     // ~30 ticks per second
fn default_time_limit() -> u32 { 99 }
fn default_board() -> u32 { 1 }

fn default_roll() -> Vec<String> { vec!["A".into()] }
fn default_fire() -> Vec<String> { vec!["B".into()] }
fn default_quit() -> Vec<String> { vec!["Select".into()] }
fn default_boards_dir() -> String { "boards".into() }

impl Default for TomlGame {
    fn default() -> Self {
        TomlGame {
            tick_rate_ms: default_tick_rate(),
            time_limit_secs: default_time_limit(),
            seed: None,
            board: default_board(),
        }
    }
}

impl Default for TomlGamepad {
    fn default() -> Self {
        TomlGamepad {
            roll: default_roll(),
            fire: default_fire(),
            quit: default_quit(),
        }
    }
}

impl Default for TomlGeneral {
    fn default() -> Self {
        TomlGeneral {
            boards_dir: default_boards_dir(),
        }
    }
}

// ── Loading ──

impl GameConfig {
    pub fn load() -> Self {
        let search_dirs = candidate_dirs();
        let toml_cfg = load_toml(&search_dirs);
        Self::resolve(toml_cfg, &search_dirs)
    }

    fn resolve(toml_cfg: TomlConfig, search_dirs: &[PathBuf]) -> Self {
        let boards_dir_str = &toml_cfg.general.boards_dir;
        let boards_dir = if Path::new(boards_dir_str).is_absolute() {
            PathBuf::from(boards_dir_str)
        } else {
            search_dirs.iter()
                .map(|d| d.join(boards_dir_str))
                .find(|p| p.is_dir())
                .unwrap_or_else(|| PathBuf::from(boards_dir_str))
        };

        let mut game = GameSettings {
            tick_rate_ms: toml_cfg.game.tick_rate_ms,
            time_limit_secs: toml_cfg.game.time_limit_secs,
            seed: toml_cfg.game.seed,
            board: toml_cfg.game.board,
        };
        if game.tick_rate_ms == 0 {
            warn!("tick_rate_ms must be positive, using {}", default_tick_rate());
            game.tick_rate_ms = default_tick_rate();
        }

        GameConfig {
            game,
            gamepad: GamepadConfig {
                roll: toml_cfg.gamepad.roll,
                fire: toml_cfg.gamepad.fire,
                quit: toml_cfg.gamepad.quit,
            },
            boards_dir,
        }
    }
}

/// Candidate directories to search: exe dir + CWD + data dirs (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = vec![];
    let mut push = |dir: PathBuf| {
        if !dirs.iter().any(|d| d == &dir) {
            dirs.push(dir);
        }
    };

    if let Ok(exe) = std::env::current_exe() {
        // Follow symlinks so an installed link still finds data beside the binary.
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        push(cwd);
    }

    if let Ok(home) = std::env::var("HOME") {
        let xdg = PathBuf::from(home).join(".local/share").join(APP_DIR);
        if xdg.is_dir() {
            push(xdg);
        }
    }

    let sys = PathBuf::from("/usr/share").join(APP_DIR);
    if sys.is_dir() {
        push(sys);
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }
    dirs
}

/// First readable `config.toml` among the candidates.
fn load_toml(search_dirs: &[PathBuf]) -> TomlConfig {
    for dir in search_dirs {
        let path = dir.join("config.toml");
        if !path.exists() {
            continue;
        }
        match std::fs::read_to_string(&path) {
            Ok(text) => return parse_toml(&text, &path),
            Err(e) => warn!("could not read {}: {e}", path.display()),
        }
    }
    TomlConfig::default()
}

fn parse_toml(text: &str, path: &Path) -> TomlConfig {
    match toml::from_str::<TomlConfig>(text) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("{} parse error, using defaults: {e}", path.display());
            TomlConfig::default()
        }
    }
}
