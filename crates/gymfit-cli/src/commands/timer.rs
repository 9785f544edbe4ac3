use std::time::Duration;

use clap::Subcommand;
use gymfit_core::storage::Database;
use gymfit_core::timer::TimerEngine;
use gymfit_core::{Catalog, Config, Event, HistorySink};
use tracing::{debug, info};

const ENGINE_KEY: &str = "timer_engine";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start (or resume) a session for an exercise
    Start {
        /// Exercise id from the catalog
        exercise_id: String,
    },
    /// Pause the running session
    Pause,
    /// Resume a paused session
    Resume,
    /// Re-initialize the session at warm-up, paused
    Reset {
        /// Exercise id from the catalog
        exercise_id: String,
    },
    /// Apply one second of progress (for external tick drivers)
    Tick,
    /// Print current timer state as JSON
    Status,
    /// Run a session in the foreground, ticking once per second
    Run {
        /// Exercise id from the catalog
        exercise_id: String,
    },
}

fn load_engine(db: &Database) -> TimerEngine {
    if let Ok(Some(json)) = db.kv_get(ENGINE_KEY) {
        if let Ok(engine) = serde_json::from_str::<TimerEngine>(&json) {
            return engine;
        }
    }
    TimerEngine::new()
}

fn save_engine(db: &Database, engine: &TimerEngine) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(engine)?;
    db.kv_set(ENGINE_KEY, &json)?;
    Ok(())
}

/// Forward a completion event to the history sink. Exactly one record per
/// completed session: the engine emits `SessionCompleted` only on the
/// terminal transition tick.
fn handle_completion(
    sink: &mut impl HistorySink,
    event: &Event,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Event::SessionCompleted {
        session_id,
        exercise_id,
        total_secs,
        at,
    } = event
    {
        sink.record(exercise_id, *session_id, *total_secs, *at)?;
        info!(exercise_id = %exercise_id, total_secs = *total_secs, "workout recorded");
    }
    Ok(())
}

fn print_event_or_snapshot(
    engine: &TimerEngine,
    event: Option<Event>,
) -> Result<(), Box<dyn std::error::Error>> {
    match event {
        Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
        None => println!("{}", serde_json::to_string_pretty(&engine.snapshot())?),
    }
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut db = Database::open()?;
    let mut engine = load_engine(&db);

    match action {
        TimerAction::Start { exercise_id } => {
            let catalog = Catalog::builtin();
            let params = catalog.lookup(&exercise_id)?.params();
            let config = Config::load()?;

            // A paused session stays paused unless configured otherwise.
            let paused = engine
                .session()
                .is_some_and(|s| !s.is_running() && s.phase() != gymfit_core::Phase::Completed);
            let event = if paused && !config.timer.auto_resume_on_start {
                None
            } else {
                engine.start(params)
            };
            print_event_or_snapshot(&engine, event)?;
        }
        TimerAction::Pause => {
            let event = engine.pause();
            print_event_or_snapshot(&engine, event)?;
        }
        TimerAction::Resume => {
            let event = engine.resume();
            print_event_or_snapshot(&engine, event)?;
        }
        TimerAction::Reset { exercise_id } => {
            let catalog = Catalog::builtin();
            let params = catalog.lookup(&exercise_id)?.params();
            let event = engine.reset(params);
            print_event_or_snapshot(&engine, event)?;
        }
        TimerAction::Tick => {
            let event = engine.tick();
            if let Some(ref event) = event {
                handle_completion(&mut db, event)?;
            }
            print_event_or_snapshot(&engine, event)?;
        }
        TimerAction::Status => {
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
        TimerAction::Run { exercise_id } => {
            let catalog = Catalog::builtin();
            let params = catalog.lookup(&exercise_id)?.params();
            if let Some(event) = engine.start(params) {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(run_session(&mut engine, &mut db))?;
        }
    }

    save_engine(&db, &engine)?;
    Ok(())
}

/// Foreground tick driver: one tick per second until the session completes
/// or the user interrupts. Ctrl-C pauses the session so a later `resume`
/// picks up where it left off; dropping the interval stops the tick source.
async fn run_session(
    engine: &mut TimerEngine,
    db: &mut Database,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    interval.tick().await; // First tick fires immediately; skip it.

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let event = engine.tick();
                if let Some(event) = event {
                    handle_completion(db, &event)?;
                    println!("{}", serde_json::to_string_pretty(&event)?);
                    if matches!(event, Event::SessionCompleted { .. }) {
                        return Ok(());
                    }
                } else if let Some(snap) = engine.snapshot() {
                    debug!(
                        phase = ?snap.phase,
                        remaining_secs = snap.remaining_secs,
                        set = snap.current_set,
                        "tick"
                    );
                } else {
                    return Ok(()); // No session to drive.
                }
            }
            _ = tokio::signal::ctrl_c() => {
                if let Some(event) = engine.pause() {
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
                info!("interrupted; session paused");
                return Ok(());
            }
        }
    }
}
