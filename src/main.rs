/// Entry point and game loop.

mod config;
mod domain;
mod sim;
mod ui;

use std::process::ExitCode;
use std::time::{Duration, Instant};

use log::{error, info, warn};

use config::GameConfig;
use domain::actor::PlayerId;
use domain::dice::{ChaChaDice, Dice};
use domain::player::Intent;
use sim::board;
use sim::step::{self, FrameInput};
use sim::world::{GameResult, World};
use ui::gamepad::GamepadState;
use ui::input::InputState;
use ui::renderer::Renderer;
use ui::sound::{self, SoundEngine};

const FRAME_SLEEP: Duration = Duration::from_millis(5);

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = GameConfig::load();

    let board = match board::load_board(&config.boards_dir, config.game.board) {
        Ok(b) => b,
        Err(e) => {
            error!("{e}");
            eprintln!("Could not load board {}: {e}", config.game.board);
            return ExitCode::FAILURE;
        }
    };

    let dice: Box<dyn Dice> = match config.game.seed {
        Some(seed) => {
            info!("dice seeded with {seed}");
            Box::new(ChaChaDice::seeded(seed))
        }
        None => Box::new(ChaChaDice::from_entropy()),
    };
    let mut world = board::populate(&board, dice);

    let mut renderer = Renderer::new();
    if let Err(e) = renderer.init() {
        eprintln!("Terminal init failed: {e}");
        return ExitCode::FAILURE;
    }

    let mut kb = InputState::new();
    if let Err(e) = kb.enable_release_events() {
        warn!("key release events unavailable: {e}");
    }

    let sound = SoundEngine::new();
    let outcome = game_loop(&mut world, &mut kb, &mut renderer, sound.as_ref(), &config);

    if let Err(e) = kb.disable_release_events() {
        warn!("could not restore keyboard mode: {e}");
    }
    if let Err(e) = renderer.cleanup() {
        eprintln!("Terminal cleanup failed: {e}");
    }

    match outcome {
        Err(e) => {
            eprintln!("Game error: {e}");
            ExitCode::FAILURE
        }
        Ok(Some(result)) => {
            println!("Player {} wins with {} stars and {} coins.",
                result.winner.number(), result.stars, result.coins);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("Game abandoned.");
            ExitCode::SUCCESS
        }
    }
}

/// Run until the players quit. Returns the result if the countdown ran out.
fn game_loop(
    world: &mut World,
    kb: &mut InputState,
    renderer: &mut Renderer,
    sound: Option<&SoundEngine>,
    config: &GameConfig,
) -> Result<Option<GameResult>, Box<dyn std::error::Error>> {
    let mut gp = GamepadState::new();
    gp.load_button_config(&config.gamepad);

    let tick_rate = Duration::from_millis(config.game.tick_rate_ms);
    let started = Instant::now();
    let mut last_tick = started;
    let mut time_left = config.game.time_limit_secs;
    // Edge-triggered presses survive until the next tick consumes them.
    let mut pending: [Intent; 2] = [Intent::None; 2];

    loop {
        kb.drain_events();
        gp.update();

        if kb.quit_pressed() || gp.quit_pressed() {
            break;
        }

        for id in PlayerId::BOTH {
            let mut intent = kb.intent(id);
            if id == PlayerId::Two && intent == Intent::None {
                intent = gp.intent();
            }
            latch_intent(&mut pending[id.index()], intent);
        }

        if world.result.is_none() && last_tick.elapsed() >= tick_rate {
            let elapsed = started.elapsed().as_secs();
            time_left = config.game.time_limit_secs.saturating_sub(elapsed as u32);

            let input = FrameInput { intents: std::mem::take(&mut pending), time_left };
            let events = step::step(world, input);
            sound::play_events(sound, &events);
            last_tick = Instant::now();
        }

        renderer.render(world, time_left)?;
        std::thread::sleep(FRAME_SLEEP);
    }

    Ok(world.result)
}

/// Keep a one-shot press until the tick that consumes it; steering is
/// replaced by whatever is held now.
fn latch_intent(slot: &mut Intent, fresh: Intent) {
    match (*slot, fresh) {
        (Intent::Roll | Intent::Fire, Intent::None | Intent::Steer(_)) => {}
        _ => *slot = fresh,
    }
}
