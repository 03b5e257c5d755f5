//! Read-only command line front end over a JSON snapshot.

pub mod output;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use ledgerlens_config::{AnalyticsConfig, ConfigManager};
use ledgerlens_core::{Clock, DashboardService, FixedClock, SystemClock};
use ledgerlens_domain::TimeRange;
use ledgerlens_storage_json::JsonSnapshotStore;

use crate::{
    errors::{AppError, AppResult},
    settings::engine_from_config,
};

/// Dashboard analytics over an account and operation snapshot.
#[derive(Debug, Parser)]
#[command(name = "ledgerlens_cli", author, version, about, long_about = None)]
pub struct Cli {
    /// Snapshot file to analyse. Defaults to `snapshot_path` from the config.
    #[arg(long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Directory holding `config/config.json`. Defaults to `$LEDGERLENS_HOME` or `~/.ledgerlens`.
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    pub format: OutputFormat,

    /// Reference instant for rolling windows (RFC 3339 or YYYY-MM-DD). Defaults to now.
    #[arg(long, global = true)]
    pub as_of: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Headline dashboard figures.
    Stats(RangeArgs),
    /// Account count and balance per category.
    Accounts(RangeArgs),
    /// Deposits and withdrawals per calendar bucket.
    Series(SeriesArgs),
}

#[derive(Debug, Args)]
pub struct RangeArgs {
    /// Exclusive lower bound (RFC 3339 or YYYY-MM-DD).
    #[arg(long)]
    pub start: Option<String>,
    /// Exclusive upper bound (RFC 3339 or YYYY-MM-DD).
    #[arg(long)]
    pub end: Option<String>,
}

#[derive(Debug, Args)]
pub struct SeriesArgs {
    #[arg(long)]
    pub start: String,
    #[arg(long)]
    pub end: String,
    /// daily, weekly or monthly. Defaults to `default_granularity` from the config.
    #[arg(long)]
    pub interval: Option<String>,
}

/// Parses process arguments and runs the selected command against stdout.
pub fn run_cli() -> AppResult<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}

pub fn run<W: Write>(cli: Cli, out: &mut W) -> AppResult<()> {
    let base = cli
        .config_dir
        .clone()
        .unwrap_or_else(ConfigManager::default_base_dir);
    let config = ConfigManager::with_base_dir(base)?.load()?;
    let offset = FixedOffset::east_opt(config.utc_offset_minutes * 60)
        .ok_or_else(|| AppError::InvalidInput("invalid utc offset in config".into()))?;

    let snapshot_path = resolve_snapshot_path(&cli, &config)?;
    let snapshot = JsonSnapshotStore::new(snapshot_path).load_snapshot()?;
    let now = match cli.as_of.as_deref() {
        Some(raw) => parse_instant(raw, offset)?,
        None => SystemClock.now(),
    };
    let service = DashboardService::with_clock(&snapshot, &snapshot, FixedClock(now))
        .with_engine(engine_from_config(&config)?);

    match cli.command {
        Command::Stats(args) => {
            let range = parse_range(&args, offset)?;
            let stats = service.dashboard_stats(&range)?;
            output::render_dashboard(out, cli.format, &stats)
        }
        Command::Accounts(args) => {
            let range = parse_range(&args, offset)?;
            let stats = service.account_stats(&range)?;
            output::render_accounts(out, cli.format, &stats)
        }
        Command::Series(args) => {
            let range = TimeRange::new(
                parse_instant(&args.start, offset)?,
                parse_instant(&args.end, offset)?,
            );
            let interval = args
                .interval
                .unwrap_or_else(|| config.default_granularity.clone());
            let series = service.transaction_stats(&range, &interval)?;
            output::render_series(out, cli.format, &series)
        }
    }
}

fn resolve_snapshot_path(cli: &Cli, config: &AnalyticsConfig) -> AppResult<PathBuf> {
    cli.snapshot
        .clone()
        .or_else(|| config.snapshot_path.clone())
        .ok_or_else(|| {
            AppError::InvalidInput(
                "no snapshot given; pass --snapshot or set snapshot_path in the config".into(),
            )
        })
}

fn parse_range(args: &RangeArgs, offset: FixedOffset) -> AppResult<TimeRange> {
    let start = args
        .start
        .as_deref()
        .map(|raw| parse_instant(raw, offset))
        .transpose()?;
    let end = args
        .end
        .as_deref()
        .map(|raw| parse_instant(raw, offset))
        .transpose()?;
    Ok(TimeRange { start, end })
}

/// Accepts RFC 3339, or a bare ISO date taken as midnight at `offset`.
pub fn parse_instant(raw: &str, offset: FixedOffset) -> AppResult<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidInput(format!("`{raw}` is not a date or timestamp")))?;
    date.and_hms_opt(0, 0, 0)
        .and_then(|midnight| midnight.and_local_timezone(offset).single())
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| AppError::InvalidInput(format!("`{raw}` is out of range")))
}
