//! Fantasy Draft Calculator
//!
//! Loads a roster spreadsheet export, applies the requested picks round by
//! round and prints the budget and position breakdown.

mod logging;
mod render;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use colored::*;
use draft_board::{DraftConfig, DraftSession, RoundId};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use crate::render::LayoutMode;

#[derive(Parser)]
#[command(name = "draft-calculator")]
#[command(about = "Pick players per round and track spend against the draft budget")]
#[command(version = "0.1.0")]
struct Cli {
    /// Roster file (.csv or .json) with name, price and position columns
    #[arg(short, long)]
    roster: PathBuf,

    /// TOML config file; otherwise DRAFT_* environment variables apply
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pick a player for a round, as ROUND=NAME (repeatable)
    #[arg(short, long = "pick", value_name = "ROUND=NAME")]
    picks: Vec<String>,

    /// Empty a round (repeatable); every --clear runs after every --pick,
    /// whatever their order on the command line
    #[arg(long = "clear", value_name = "ROUND")]
    clears: Vec<u32>,

    /// Board layout
    #[arg(long, value_enum, default_value = "wide")]
    layout: LayoutMode,

    /// Print the summary as JSON instead of the board
    #[arg(long)]
    json: bool,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Log format (compact, pretty, json)
    #[arg(long, default_value = "compact")]
    log_format: String,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    logging::initialize_logging(&cli.log_level, &cli.log_format)?;
    info!("Starting draft calculator v{}", env!("CARGO_PKG_VERSION"));

    let config = match &cli.config {
        Some(path) => DraftConfig::from_file(path),
        None => DraftConfig::from_env(),
    }
    .context("Failed to load draft configuration")?;

    let load = roster_catalog::load_from_path(&cli.roster)
        .with_context(|| format!("Failed to load roster from {:?}", cli.roster))?;
    for notice in &load.notices {
        eprintln!("{} {}", "notice:".yellow(), notice);
    }

    let mut session = DraftSession::new(Arc::new(load.catalog), config)?;

    for e in apply_requests(&mut session, &cli.picks, &cli.clears) {
        eprintln!("{} {}", "rejected:".red(), e);
    }

    let summary = session.summarize();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render::render(&session, &summary, cli.layout));
    }

    if summary.budget.overspend {
        warn!("Draft finished over budget by {}", -summary.budget.remaining);
    }
    Ok(())
}

/// Apply every pick, then every clear, collecting the rejected requests
fn apply_requests(
    session: &mut DraftSession,
    picks: &[String],
    clears: &[u32],
) -> Vec<anyhow::Error> {
    let mut rejected = Vec::new();

    for request in picks {
        let outcome = parse_pick(request).and_then(|(round, name)| {
            session.assign(round, &name).map_err(anyhow::Error::from)
        });
        if let Err(e) = outcome {
            rejected.push(e);
        }
    }

    for round in clears {
        if let Err(e) = session.clear(RoundId(*round)) {
            rejected.push(e.into());
        }
    }

    rejected
}

/// Parse a `ROUND=NAME` pick request
fn parse_pick(request: &str) -> Result<(RoundId, String)> {
    let (round, name) = request
        .split_once('=')
        .ok_or_else(|| anyhow!("pick must look like ROUND=NAME: {request}"))?;
    let round = round
        .trim()
        .parse::<u32>()
        .with_context(|| format!("invalid round number in pick: {request}"))?;
    Ok((RoundId(round), name.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_catalog::{RosterCatalog, RosterRow};

    #[test]
    fn test_parse_pick() {
        assert_eq!(parse_pick(" 3 = Jugador A ").unwrap(), (RoundId(3), "Jugador A".to_string()));
        assert!(parse_pick("Jugador A").is_err());
        assert!(parse_pick("x=Jugador A").is_err());
    }

    #[test]
    fn test_cli_parses_repeated_picks() {
        let cli = Cli::try_parse_from([
            "draft-calculator",
            "--roster",
            "players.csv",
            "--pick",
            "1=Jugador A",
            "-p",
            "2=Jugador B",
            "--clear",
            "2",
            "--layout",
            "compact",
        ])
        .unwrap();

        assert_eq!(cli.picks, vec!["1=Jugador A", "2=Jugador B"]);
        assert_eq!(cli.clears, vec![2]);
        assert_eq!(cli.layout, LayoutMode::Compact);
        assert!(!cli.json);
    }

    #[test]
    fn test_clears_run_after_picks() {
        let catalog = RosterCatalog::load(vec![RosterRow::new("Jugador A", 25_000.0, "B")]).catalog;
        let mut session = DraftSession::new(Arc::new(catalog), DraftConfig::default()).unwrap();
        let cli = Cli::try_parse_from([
            "draft-calculator",
            "--roster",
            "players.csv",
            "--clear",
            "1",
            "--pick",
            "1=Jugador A",
            "--pick",
            "2=Nobody",
        ])
        .unwrap();

        let rejected = apply_requests(&mut session, &cli.picks, &cli.clears);

        assert_eq!(rejected.len(), 1);
        assert_eq!(session.pick(RoundId(1)), None);
        assert_eq!(session.pick(RoundId(2)), None);
    }
}
