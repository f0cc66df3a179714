use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser, Subcommand};

use crate::render::{views, ColorMode};
use crate::services::range::{extends_past, last_n_days, ALL_TIME_HEADING};
use crate::services::{
    load_samples, Aggregator, ConfigService, EnvVars, Overrides, RangeSpec, Settings,
};
use crate::types::{DailySample, DateWindow};

/// Calendar heatmaps and stat cards for daily activity time
#[derive(Parser)]
#[command(name = "heatcard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON document with daily samples ("-" or omitted reads stdin)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// today, yesterday, 7d, 30d, 6m, 1y, all, or a year (e.g. 2024)
    #[arg(short, long, global = true)]
    range: Option<String>,

    /// Show the last N days ending today (overrides --range)
    #[arg(short, long, global = true)]
    days: Option<u32>,

    /// Force terminal width in columns
    #[arg(short, long, global = true)]
    width: Option<usize>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    json: bool,

    /// When to use color
    #[arg(long, value_enum, global = true)]
    color: Option<ColorMode>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Summary card: total, daily average, active days, best day (default)
    Summary,

    /// Calendar heatmap of daily activity
    Heatmap,

    /// Per-day breakdown card
    Breakdown,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        init_tracing(self.verbose, self.quiet);

        let file_config = match ConfigService::new() {
            Ok(service) => service.load_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "config unavailable");
                Default::default()
            }
        };
        let overrides = Overrides {
            width: self.width,
            color: self.color,
            range: self.range.clone(),
        };
        let settings = Settings::resolve(&overrides, &EnvVars::from_env(), &file_config)?;

        let samples = load_samples(self.input.as_deref()).with_context(|| match &self.input {
            Some(p) => format!("Failed to load samples from {}", p.display()),
            None => "Failed to load samples from stdin".to_string(),
        })?;

        let command = self.command.unwrap_or(Commands::Summary);
        let lines = render(
            command,
            &samples,
            &settings,
            self.days,
            self.json,
            Local::now().date_naive(),
        )?;

        if lines.is_empty() {
            tracing::warn!("no activity to display");
            return Ok(());
        }

        let mut out = io::stdout().lock();
        for line in lines {
            writeln!(out, "{}", line).context("Failed to write to stdout")?;
        }
        Ok(())
    }
}

/// Window shown by `command`, or `None` for the whole input span.
/// `--days` beats `--range`; a window never runs past today.
fn select_window(
    command: Commands,
    days: Option<u32>,
    range: Option<RangeSpec>,
    today: NaiveDate,
) -> Option<DateWindow> {
    if let Some(n) = days.filter(|&n| n > 0) {
        return Some(last_n_days(n, today));
    }

    let spec = match command {
        Commands::Heatmap => range.map(RangeSpec::for_heatmap),
        Commands::Summary | Commands::Breakdown => range,
    }?;
    let mut window = spec.window(today)?;
    if extends_past(&window, today) {
        window.end = today;
    }
    tracing::debug!(
        range = %spec,
        days = window.num_days(),
        heading = %window.heading,
        "selected window"
    );
    Some(window)
}

/// Produce output lines for `command` (cards, or JSON when `json` is set)
fn render(
    command: Commands,
    samples: &[DailySample],
    settings: &Settings,
    days: Option<u32>,
    json: bool,
    today: NaiveDate,
) -> anyhow::Result<Vec<String>> {
    let window = select_window(command, days, settings.range, today);
    let heading = window
        .as_ref()
        .map_or(ALL_TIME_HEADING, |w| w.heading.as_str());

    let daily = Aggregator::daily(samples, window.as_ref())?;
    let rows = Aggregator::breakdown(&daily)?;
    let stats = Aggregator::summary(&daily)?;
    let palette = settings.palette;

    if json {
        let doc = match command {
            Commands::Summary => serde_json::to_string_pretty(&stats)?,
            Commands::Heatmap | Commands::Breakdown => serde_json::to_string_pretty(&rows)?,
        };
        return Ok(vec![doc]);
    }

    Ok(match command {
        Commands::Summary => views::summary_page(&stats, heading, palette),
        Commands::Heatmap => views::heatmap_page(&daily, &stats, heading, settings.width, palette),
        Commands::Breakdown => views::breakdown_page(&rows, heading, palette),
    })
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}
