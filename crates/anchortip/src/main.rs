//! anchortip - headless placement preview.
//!
//! Reads a scenario file (anchor and container rects in window coordinates,
//! the content size and an optional tooltip style), shows the tooltip against
//! a windowless host and prints where it lands and which animations ran.
//!
//! ```text
//! anchortip scenario.json
//! ```

mod headless;
mod scenario;

use std::path::Path;
use std::process::ExitCode;

use anchortip_core::logging::init_logging_default;
use anchortip_core::AnchorTipError;

use scenario::Scenario;

fn main() -> ExitCode {
    let logging_guard = init_logging_default();
    tracing::debug!(file_output = logging_guard.has_file_output(), "Logging initialized");

    let Some(path) = std::env::args_os().nth(1) else {
        eprintln!("usage: anchortip <scenario.json>");
        return ExitCode::from(2);
    };

    match run(Path::new(&path)) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Preview failed");
            eprintln!("{e}");
            if let Some(hint) = e.hint() {
                eprintln!("hint: {hint}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path) -> Result<String, AnchorTipError> {
    tracing::info!(path = %path.display(), "Previewing scenario");
    let scenario = Scenario::load(path)?;
    let report = headless::preview(&scenario)?;
    Ok(serde_json::to_string_pretty(&report)?)
}
