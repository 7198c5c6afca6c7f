//! Terminal view of the tool catalog.
//!
//! Drives the same table and chart pipelines as the library, printing the
//! result of a single trigger.
//!
//! # Usage
//!
//! ```bash
//! # First page, default page size
//! cargo run --bin board -- table
//!
//! # Third page of 20 rows
//! cargo run --bin board -- table --page 3 --page-size 20
//!
//! # Tools created in the last 30 days, per day
//! cargo run --bin board -- trend --range 30
//! ```
//!
//! # Environment Variables
//!
//! - `TOOLS_SOURCE_URL` (required unless `--source` is given): collection endpoint
//! - `RUST_LOG`: log level for diagnostics on stderr (default: `warn`)

use tool_trends::application::services::{Controls, Dashboard, ViewState};
use tool_trends::domain::clock::SystemClock;
use tool_trends::domain::entities::{
    Lookback, PAGE_SIZE_OPTIONS, PageView, ScoreBand, TimeSeries, is_page_size_option,
};
use tool_trends::infrastructure::http::HttpToolSource;
use tool_trends::logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

const BAR_WIDTH: usize = 40;

/// Terminal view of the tool catalog.
#[derive(Parser)]
#[command(name = "board")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Collection endpoint returning a JSON array of tools
    #[arg(long, env = "TOOLS_SOURCE_URL")]
    source: String,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of the tool table
    Table {
        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: NonZeroU32,

        /// Rows per page: 10, 20, 30, 40 or 50
        #[arg(short = 's', long, default_value = "10", value_parser = parse_page_size)]
        page_size: NonZeroU32,
    },

    /// Show tools created per day over a lookback window
    Trend {
        /// Lookback in days (90, 30 and 7 are the labeled options)
        #[arg(short, long, default_value_t = 90, value_parser = clap::value_parser!(u32).range(1..))]
        range: u32,
    },
}

fn parse_page_size(raw: &str) -> Result<NonZeroU32, String> {
    let size: u32 = raw.parse().map_err(|_| format!("'{raw}' is not a number"))?;
    if !is_page_size_option(size) {
        return Err(format!("page size must be one of {PAGE_SIZE_OPTIONS:?}"));
    }
    NonZeroU32::new(size).ok_or_else(|| "page size must be greater than 0".to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init("warn", "text");

    let cli = Cli::parse();

    let source = HttpToolSource::new(&cli.source, cli.timeout.map(Duration::from_secs))
        .context("Failed to initialize tool source")?;
    let dashboard = Dashboard::new(Arc::new(source), Arc::new(SystemClock));

    match cli.command {
        Commands::Table { page, page_size } => {
            let dashboard = dashboard.with_controls(Controls {
                page,
                page_size,
                ..Controls::default()
            });
            render_state(dashboard.refresh_table().await, render_table)
        }
        Commands::Trend { range } => {
            let range = Lookback::days(range);
            let state = dashboard.set_range(range).await;
            render_state(state, |series| render_trend(&series, range))
        }
    }
}

/// Prints a ready view, or the failure message and a non-zero exit.
fn render_state<V>(state: ViewState<V>, render: impl FnOnce(V)) -> Result<()> {
    match state {
        ViewState::Ready(view) => {
            render(view);
            Ok(())
        }
        ViewState::Failed(message) => {
            eprintln!("{} {}", "Error:".red().bold(), message.red());
            anyhow::bail!("failed to load tools")
        }
        ViewState::Idle | ViewState::Loading => anyhow::bail!("no result was produced"),
    }
}

/// Renders the current page.
///
/// ```text
///   Name                     Topics                   Score              Link
///   ────────────────────────────────────────────────────────────────────────
///   Summarizer               ai, nlp                  great              https://tool.dev/
///
///   Page 1 of 3 · 25 tools
/// ```
fn render_table(view: PageView) {
    println!("{}", "Tools".bright_blue().bold());
    println!();

    if view.records.is_empty() {
        println!("{}", "  No tools on this page".yellow());
    } else {
        println!(
            "  {:<24} {:<24} {:<18} {}",
            "Name".bright_white().bold(),
            "Topics".bright_white().bold(),
            "Score".bright_white().bold(),
            "Link".bright_white().bold()
        );
        println!("  {}", "─".repeat(90).bright_black());

        for record in &view.records {
            let band = record.score_band();
            let band_label = match band {
                ScoreBand::Great => band.label().green(),
                ScoreBand::PrettyGood => band.label().cyan(),
                ScoreBand::Meh => band.label().yellow(),
                ScoreBand::NotYetEvaluated => band.label().bright_black(),
            };

            println!(
                "  {:<24} {:<24} {:<18} {}",
                truncate(&record.name, 24).cyan(),
                truncate(&record.topics.join(", "), 24),
                band_label,
                record.link_target().unwrap_or_default().bright_black()
            );
        }
    }

    println!();
    println!(
        "  Page {} of {} · {} tools",
        view.page_index.get().to_string().bright_white().bold(),
        view.total_pages().to_string().bright_white().bold(),
        view.total_count
    );

    let mut hints = Vec::new();
    if !view.is_first_page() {
        hints.push(format!("prev: --page {}", view.page_index.get() - 1));
    }
    if !view.is_last_page() {
        hints.push(format!("next: --page {}", view.page_index.get() + 1));
    }
    if !hints.is_empty() {
        println!("  {}", hints.join("  ").bright_black());
    }
    println!();
}

/// Renders per-day counts with a bar scaled to the busiest day.
fn render_trend(series: &TimeSeries, range: Lookback) {
    println!(
        "{} {}",
        "Tools added".bright_blue().bold(),
        format!("({range})").bright_black()
    );
    println!();

    if series.is_empty() {
        println!("{}", "  No tools in this window".yellow());
        println!();
        return;
    }

    let peak = series.peak().max(1) as usize;
    for point in &series.points {
        let width = (point.count as usize * BAR_WIDTH).div_ceil(peak);
        println!(
            "  {:<7} {} {}",
            point.display_label(),
            "█".repeat(width).green(),
            point.count.to_string().bright_white()
        );
    }

    println!();
    println!(
        "  Total: {} over {} days",
        series.total().to_string().bright_white().bold(),
        series.len()
    );
    println!();
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let mut cut: String = value.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
