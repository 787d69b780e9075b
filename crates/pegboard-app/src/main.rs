//! Main application entry point.
//!
//! Usage: `pegboard [script.json]`. Reads the script from stdin when no path
//! is given and prints the final layout as JSON.

use pegboard_app::{AppError, Script, layout, replay};
use std::io::Read;
use std::process::ExitCode;

fn run() -> Result<(), AppError> {
    let json = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let script = Script::from_json(&json)?;
    log::info!(
        "Replaying {} events on a {}px grid",
        script.events.len(),
        script.config.grid_size
    );
    let board = replay(&script)?;
    println!("{}", serde_json::to_string_pretty(&layout(&board))?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting pegboard");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
