// src/cli.rs
//! Developer inspection tool: read a saved page, print what we extract as JSON.

use std::path::{Path, PathBuf};

use chrono::FixedOffset;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::config::{Dialect, ExtractOptions, Features};
use crate::error::ExtractError;
use crate::extractor::Extractor;

#[derive(Parser)]
#[command(name = "og_scrape", about = "Extract typed data from saved OGame pages")]
struct Cli {
    /// Account has lifeforms enabled (shifts construction regions).
    #[arg(long, global = true)]
    lifeform: bool,

    /// Hours east of UTC the server prints dates in.
    #[arg(long, global = true, default_value_t = 0, allow_hyphen_values = true)]
    utc_offset: i32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resource bar of any in-game page.
    Resources { page: PathBuf },
    /// Shipyard production queue from the overview.
    Production { page: PathBuf },
    /// Per-planet snapshots from the empire page (or its bare JSON).
    Empire { page: PathBuf },
    /// One espionage report from its message detail markup.
    Report {
        page: PathBuf,
        /// Print what was read even when entity pictures were hidden.
        #[arg(long)]
        allow_partial: bool,
    },
    /// Token and ids for cancelling the running research.
    CancelResearch { page: PathBuf },
    /// Token and ids for cancelling the running lifeform building.
    CancelLfBuilding { page: PathBuf },
}

pub fn run() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let zone = FixedOffset::east_opt(cli.utc_offset * 3600)
        .ok_or_else(|| eyre!("utc offset {}h out of range", cli.utc_offset))?;
    let dialect = Dialect::v9(Features { lifeform: cli.lifeform });
    let extractor = Extractor::new(ExtractOptions::new(dialect, zone));

    match cli.command {
        Command::Resources { page } => print(&extractor.resources(&read(&page)?)?),
        Command::Production { page } => print(&extractor.production_queue(&read(&page)?)?),
        Command::Empire { page } => print(&extractor.empire(&read(&page)?)?),
        Command::Report { page, allow_partial } => match extractor.espionage_report(&read(&page)?) {
            Ok(report) => print(&report),
            Err(ExtractError::ExtractionBlocked { partial }) if allow_partial => {
                loge!("report {}: entity pictures hidden, output is partial", partial.id);
                print(&partial)
            }
            Err(e) => Err(e.into()),
        },
        Command::CancelResearch { page } => print(&extractor.cancel_research(&read(&page)?)?),
        Command::CancelLfBuilding { page } => print(&extractor.cancel_lf_building(&read(&page)?)?),
    }
}

fn read(path: &Path) -> Result<Vec<u8>> {
    logf!("reading {}", path.display());
    std::fs::read(path).wrap_err_with(|| format!("cannot read {}", path.display()))
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
