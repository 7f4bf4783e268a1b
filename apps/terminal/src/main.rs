//! # Dulce Terminal Entry Point
//!
//! The setup lives in `lib.rs` so it can be tested; this only runs it.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match dulce_terminal_lib::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dulce: {err}");
            ExitCode::FAILURE
        }
    }
}
