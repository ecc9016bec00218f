use std::env;
use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use dungeon_crawler::config::GameConfig;
use dungeon_crawler::engine::{GameEngine, GameMode};
use dungeon_crawler::error::{ConfigError, GenerationError};
use dungeon_crawler::events::GameEvent;
use dungeon_crawler::game_loop::FixedStepLoop;
use dungeon_crawler::input::{ActionPresses, MoveIntent, TickInput};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

const CONFIG_ENV_VAR: &str = "CRAWLER_CONFIG";
const TICKS_ENV_VAR: &str = "CRAWLER_TICKS";
const PROFILE_ENV_VAR: &str = "CRAWLER_PROFILE";
const DEFAULT_TICK_BUDGET: u64 = 600;

fn main() -> ExitCode {
    init_tracing();
    let _profiler = start_profiler();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "config_failed");
            return ExitCode::FAILURE;
        }
    };
    let tick_rate = config.tick_rate;
    let budget = tick_budget();

    let mut engine = match GameEngine::new(config) {
        Ok(engine) => engine,
        Err(err) => {
            error!(%err, "level_generation_failed");
            return ExitCode::FAILURE;
        }
    };
    info!(seed = engine.state.seed, tick_rate, budget, "=== Dungeon Crawler (headless) ===");

    if let Err(err) = run(&mut engine, tick_rate, budget) {
        error!(%err, tick = engine.ticks, "level_generation_failed");
        return ExitCode::FAILURE;
    }

    if let Some(hud) = engine.hud() {
        info!(
            level = hud.level,
            health = hud.health,
            mode = ?hud.mode,
            ticks = engine.ticks,
            "session_finished"
        );
    }
    ExitCode::SUCCESS
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Serve puffin scopes when `CRAWLER_PROFILE` is set.
fn start_profiler() -> Option<puffin_http::Server> {
    env::var_os(PROFILE_ENV_VAR)?;
    let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    match puffin_http::Server::new(&addr) {
        Ok(server) => {
            puffin::set_scopes_on(true);
            info!(%addr, "profiler_listening");
            Some(server)
        }
        Err(err) => {
            warn!(%err, "profiler_failed_to_start");
            None
        }
    }
}

fn load_config() -> Result<GameConfig, ConfigError> {
    match env::var_os(CONFIG_ENV_VAR) {
        Some(path) => GameConfig::load(path),
        None => Ok(GameConfig::default()),
    }
}

fn tick_budget() -> u64 {
    match env::var(TICKS_ENV_VAR) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(value = %raw, default = DEFAULT_TICK_BUDGET, "invalid_tick_budget");
            DEFAULT_TICK_BUDGET
        }),
        Err(_) => DEFAULT_TICK_BUDGET,
    }
}

fn run(
    engine: &mut GameEngine,
    tick_rate: u32,
    budget: u64,
) -> Result<(), GenerationError> {
    let mut clock = FixedStepLoop::new(tick_rate);
    let mut last = Instant::now();

    while engine.ticks < budget {
        puffin::GlobalProfiler::lock().new_frame();
        let now = Instant::now();
        let plan = clock.advance(now - last);
        last = now;

        for _ in 0..plan.ticks_to_run {
            if engine.ticks >= budget {
                break;
            }
            engine.tick(scripted_input(engine.ticks, engine.mode))?;
            for event in engine.drain_events() {
                log_event(&event);
            }
        }
        thread::sleep(clock.fixed_dt() / 2);
    }
    Ok(())
}

/// Stand-in for a keyboard: wander the compass, swing and shoot on a timer,
/// and restart as soon as the player goes down.
fn scripted_input(tick: u64, mode: GameMode) -> TickInput {
    if mode == GameMode::Defeated {
        return TickInput::restart();
    }

    const COMPASS: [(bool, bool, bool, bool); 8] = [
        (true, false, false, false),
        (true, false, false, true),
        (false, false, false, true),
        (false, true, false, true),
        (false, true, false, false),
        (false, true, true, false),
        (false, false, true, false),
        (true, false, true, false),
    ];
    let (up, down, left, right) = COMPASS[(tick / 40) as usize % COMPASS.len()];

    TickInput {
        intent: MoveIntent {
            up,
            down,
            left,
            right,
        },
        actions: ActionPresses {
            melee: tick % 20 == 0,
            ranged: tick % 30 == 15,
            restart: false,
        },
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::PlayerDamaged { amount, remaining } => {
            debug!(amount, remaining, "player_damaged")
        }
        other => debug!(event = ?other, "game_event"),
    }
}
