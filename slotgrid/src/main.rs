/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info, warn};

use slotgrid::config::ScheduleConfig;
use slotgrid::placement::GridPlacer;
use slotgrid::render::{html, text, DefaultCells, GridView};
use slotgrid::slots::{try_generate_slots, SlotOptions};
use slotgrid::time::{TimeFormat, DEFAULT_TIME_PATTERN};

// ── CLI argument definition ───────────────────────────────────────────────────

/// Resource-by-time scheduling grid.
///
/// Example:
///   slotgrid slots --start "9:00 AM" --end "5:30 PM" --interval 30
///   slotgrid render --schedule demos/team_day.yaml --output html
#[derive(Debug, Parser)]
#[command(
    name = "slotgrid",
    about = "Place time-bounded events on a users × time-slot grid",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print generated slot labels, one per line.
    Slots {
        /// First slot, e.g. "9:00 AM".
        #[arg(short = 's', long)]
        start: String,

        /// Last possible slot, e.g. "5:30 PM".
        #[arg(short = 'e', long)]
        end: String,

        /// Minutes between slots.
        #[arg(short = 'i', long, default_value_t = 60, allow_negative_numbers = true)]
        interval: i64,

        /// chrono pattern for the printed labels.
        #[arg(short = 't', long = "time-format", default_value = DEFAULT_TIME_PATTERN)]
        time_format: String,
    },

    /// Place a schedule file's events and print the grid.
    Render {
        /// Path to the YAML schedule file.
        #[arg(short = 'c', long)]
        schedule: PathBuf,

        /// Output surface.
        #[arg(short = 'o', long, value_enum, default_value_t = Output::Text)]
        output: Output,

        /// Also print placement diagnostics after the grid.
        #[arg(long, default_value_t = false)]
        issues: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    Text,
    Html,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialise structured logging on stderr so stdout carries only output.
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Slots {
            start,
            end,
            interval,
            time_format,
        } => {
            let format = TimeFormat::new(time_format).context("Invalid --time-format")?;
            let options = SlotOptions::new(start, end).interval(interval).format(format);
            let slots = try_generate_slots(&options).context("Cannot generate slots")?;
            for slot in slots {
                println!("{slot}");
            }
        }

        Command::Render {
            schedule,
            output,
            issues,
        } => {
            let cfg = ScheduleConfig::load_from_file(&schedule)?;
            let slots = cfg.resolve_slots()?;

            let placer = GridPlacer::new(cfg.time_format.clone());
            let placement = placer.place(&cfg.rows, &slots, &cfg.events);

            let view = GridView::new(&cfg.rows, &slots, &cfg.events, &placement, &cfg.time_format);
            let grid = view.layout(&DefaultCells);

            match output {
                Output::Text => print!("{}", text::to_text(&grid)),
                Output::Html => print!("{}", html::to_html(&grid).context("Cannot render HTML")?),
            }

            if issues {
                println!();
                println!("Issues: {}", placement.issues.len());
                for issue in &placement.issues {
                    println!("  - {issue}");
                }
            } else if !placement.issues.is_empty() {
                warn!(
                    count = placement.issues.len(),
                    "some inputs could not be placed (re-run with --issues for details)"
                );
            }

            info!(
                rows = grid.rows.len(),
                slots = slots.len(),
                anchors = placement.anchor_count(),
                "Grid rendered"
            );
        }
    }
    Ok(())
}
