use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use log::{debug, error, info};
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

use arena_duel::engine::game_loop::GameLoop;
use arena_duel::engine::input::InputManager;
use arena_duel::{CombatConfig, CombatEvent, Match, MatchSnapshot, PresentationSink};

/// Reports match events through the log in place of a renderer
#[derive(Default)]
struct LogSink;

impl PresentationSink for LogSink {
    fn on_tick(&mut self, snapshot: &MatchSnapshot) {
        for event in &snapshot.events {
            match event {
                CombatEvent::AttackStarted { player } => {
                    debug!("Player {} attacks", player.number());
                }
                CombatEvent::Hit {
                    attacker,
                    defender,
                    damage,
                    remaining_health,
                } => {
                    info!(
                        "Player {} hits player {} for {} | Player 1: {} Player 2: {}",
                        attacker.number(),
                        defender.number(),
                        damage,
                        snapshot.fighter1.health,
                        snapshot.fighter2.health
                    );
                    debug!("Player {} has {} left", defender.number(), remaining_health);
                }
                CombatEvent::MatchDecided(outcome) => {
                    if let Some(message) = outcome.message() {
                        info!("{} Press F5 to restart", message);
                    }
                }
            }
        }
    }
}

/// Build a fresh match with a wall-clock seed
fn new_match() -> Result<Match> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    Ok(Match::new(CombatConfig::with_seed(seed))?)
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Arena Duel...");

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Arena Duel")
        .with_inner_size(winit::dpi::LogicalSize::new(800, 450))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Player 1: A/D move, W jump, S attack. Player 2: arrows, Down attacks.");

    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();
    let mut sink = LogSink;
    let mut duel = new_match()?;

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::Focused(false) => input.release_all(),
                WindowEvent::KeyboardInput { event, .. } => {
                    if event.state == ElementState::Pressed && !event.repeat {
                        match event.physical_key {
                            PhysicalKey::Code(KeyCode::F5) => {
                                match new_match() {
                                    Ok(fresh) => {
                                        duel = fresh;
                                        input.release_all();
                                        info!("Match restarted");
                                    }
                                    Err(e) => error!("Restart failed: {}", e),
                                }
                                return;
                            }
                            PhysicalKey::Code(KeyCode::KeyP) => {
                                game_loop.toggle_pause();
                                // Nothing pressed before or during the pause carries over
                                input.release_all();
                                return;
                            }
                            _ => {}
                        }
                    }
                    if !game_loop.is_paused() {
                        input.process_keyboard_event(&event);
                    }
                }
                WindowEvent::RedrawRequested => {
                    let steps = game_loop.begin_frame();
                    for _ in 0..steps {
                        duel.tick_into(game_loop.fixed_timestep_ms(), &mut input, &mut sink);
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
