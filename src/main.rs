//! Infinite Stairs entry point
//!
//! The browser build is driven from JS through `infinite_stairs::web`. The
//! native build runs a headless autopilot climb, handy for checking balance
//! changes: `infinite-stairs [SEED] [MAX_CLIMBS] [TUNING]`.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_SEED: u64 = 0x57A1;

/// Headless autopilot run of Infinite Stairs.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for the stair layout. Defaults to a fixed seed so runs compare.
    #[arg(value_name = "SEED")]
    seed: Option<u64>,
    /// Stop after this many successful climbs.
    #[arg(
        value_name = "MAX_CLIMBS",
        default_value_t = 1_000,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_climbs: u32,
    /// JSON file overriding the default balance tuning.
    #[arg(value_name = "TUNING")]
    tuning: Option<PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use infinite_stairs::sim::{GameEvent, GameState, TickInput, tick};
    use infinite_stairs::Tuning;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or(DEFAULT_SEED);
    let max_climbs = args.max_climbs;

    let tuning = match &args.tuning {
        Some(path) => match std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(tuning) => tuning,
            Err(err) => {
                log::error!("Failed to load tuning from {}: {}", path.display(), err);
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    log::info!("Infinite Stairs (native autopilot) starting, seed {}", seed);

    let mut state = GameState::with_tuning(seed, tuning);
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    // One climb every 20 frames at 60 Hz: 180 steps per minute
    const FRAME_DT: f32 = 1.0 / 60.0;
    const FRAMES_PER_CLIMB: u32 = 20;
    let idle = TickInput::default();
    let mut now_ms = 0.0;
    let mut peak_rate = 0.0_f32;

    while state.is_playing() && state.score < max_climbs {
        tick(&mut state, &input, FRAME_DT, now_ms);
        for _ in 1..FRAMES_PER_CLIMB {
            now_ms += FRAME_DT as f64 * 1000.0;
            tick(&mut state, &idle, FRAME_DT, now_ms);
        }
        now_ms += FRAME_DT as f64 * 1000.0;

        for event in state.drain_events() {
            if let GameEvent::TempoChanged { playback_rate, .. } = event {
                peak_rate = peak_rate.max(playback_rate);
            }
        }
    }

    let summary = state.summary();

    println!("Seed:          {}", seed);
    println!("Score:         {}", summary.score);
    println!("Level reached: {}", state.difficulty_level());
    println!("Max BPM:       {}", summary.max_bpm);
    println!("Peak rate:     {:.2}x", peak_rate);
    println!("Time:          {:.1}s", summary.time_secs);
    println!("Stairs placed: {}", state.track.len());
    println!(
        "Outcome:       {}",
        if state.is_playing() { "still climbing" } else { "fell" }
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_start, this is just to satisfy the compiler
}
