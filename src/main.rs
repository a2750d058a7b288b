//! House Sweep entry point
//!
//! Headless native run: drives the simulation with the autopilot at a fixed
//! 60 Hz frame rate and prints the final snapshot as JSON.

use house_sweep::driver::autopilot_input;
use house_sweep::{ConfigError, FrameDriver, GameConfig, Key};

/// Simulated frame rate for the headless run
const FRAME_RATE: f64 = 60.0;
/// Frames to simulate (one minute of play)
const FRAME_BUDGET: u64 = 60 * 60;

fn run() -> Result<(), ConfigError> {
    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path)?,
        None => {
            log::info!("No config given, using defaults");
            GameConfig::default()
        }
    };

    let mut driver = FrameDriver::new(&config)?;
    let mut restarted = false;

    for frame in 0..FRAME_BUDGET {
        if driver.session().is_ended() {
            if restarted {
                break;
            }
            log::info!("Session cleared at frame {frame}, restarting");
            driver.input_mut().key_down(Key::Restart);
            restarted = true;
        }

        // Feed the autopilot through the same key path a window would use
        let steer = autopilot_input(driver.session());
        let input = driver.input_mut();
        for (key, held) in [
            (Key::Up, steer.up),
            (Key::Down, steer.down),
            (Key::Left, steer.left),
            (Key::Right, steer.right),
        ] {
            if held {
                input.key_down(key);
            } else {
                input.key_up(key);
            }
        }

        driver.frame(frame as f64 / FRAME_RATE);
    }

    let session = driver.session();
    log::info!(
        "Stopped after {} frames: {}/{} NPCs remaining, {} stains",
        driver.frames(),
        session.remaining_npcs(),
        session.npcs().len(),
        session.stains().len()
    );

    match serde_json::to_string_pretty(&session.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {e}"),
    }
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("House Sweep (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
