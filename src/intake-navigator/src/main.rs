//! Intake Navigator — resolves which questionnaire step an intake sees
//! next, over the production step catalog.
//!
//! Stand-in for the controller layer: loads a snapshot, picks a flow, and
//! prints the resolved steps as JSON lines.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{info, warn};

use intake_catalog::catalog;
use intake_core::{AppConfig, IntakeError, IntakeResult, IntakeSnapshot};
use intake_navigation::Navigator;

#[derive(Parser, Debug)]
#[command(name = "intake-navigator")]
#[command(about = "Questionnaire navigation engine for intake flows")]
#[command(version)]
struct Cli {
    /// Flow to navigate (overrides config)
    #[arg(long, env = "INTAKE__DEFAULT_FLOW")]
    flow: Option<String>,

    /// Intake snapshot JSON file; omitted topics default to unanswered
    #[arg(long)]
    state: Option<PathBuf>,

    /// Print every step of the flow instead of walking it
    #[arg(long, default_value_t = false)]
    list: bool,

    /// Resolve next and previous from this step id instead of walking
    #[arg(long)]
    from: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "intake_navigator=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(flow) = cli.flow {
        config.default_flow = flow;
    }

    let flows = catalog()?;
    let flow = flows
        .iter()
        .find(|flow| flow.name() == config.default_flow)
        .ok_or_else(|| IntakeError::UnknownFlow(config.default_flow.clone()))?;

    let state = match &cli.state {
        Some(path) => load_snapshot(path)?,
        None => IntakeSnapshot::new(),
    };

    info!(
        flow = flow.name(),
        steps = flow.len(),
        "Catalog loaded"
    );

    let navigator = Navigator::new().with_logging(config.navigation.log_transitions);

    if cli.list {
        for step in flow.steps() {
            println!("{}", serde_json::to_string(&step.descriptor())?);
        }
        return Ok(());
    }

    if let Some(from) = cli.from {
        let next = navigator.next(flow, &from, &state).map(|step| step.id());
        let previous = navigator
            .previous(flow, &from, &state)
            .map(|step| step.id());
        println!(
            "{}",
            serde_json::json!({ "from": from, "next": next, "previous": previous })
        );
        return Ok(());
    }

    for step in navigator.walk(flow, &state) {
        println!("{}", serde_json::to_string(&step.descriptor())?);
    }

    Ok(())
}

/// Reads a snapshot from disk; an unreadable file is an `Io` error, a
/// malformed document a `Serialization` error.
fn load_snapshot(path: &Path) -> IntakeResult<IntakeSnapshot> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_snapshot_file_is_an_io_error() {
        let result = load_snapshot(Path::new("/nonexistent/intake-snapshot.json"));
        assert!(matches!(result, Err(IntakeError::Io(_))));
    }

    #[test]
    fn test_malformed_snapshot_is_a_serialization_error() {
        let path = std::env::temp_dir().join("intake-navigator-bad-snapshot.json");
        std::fs::write(&path, r#"{"married": "maybe"}"#).unwrap();
        let result = load_snapshot(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(IntakeError::Serialization(_))));
    }
}
