// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Logigram CLI entrypoint.
//!
//! Every command reads a Markdown file (`-` for stdin) and writes to stdout unless told
//! otherwise. Logs go to stderr and honour `RUST_LOG`.

use std::io::{Read as _, Write as _};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use logigram::format::markdown::{export_steps, parse_io_events, parse_steps};
use logigram::model::StepRecord;
use logigram::render::flowchart::{render_flowchart, render_flowchart_dot, render_flowchart_svg};
use logigram::report::{export_actor_table, ActorReport};
use logigram::Config;

#[derive(Debug, Parser)]
#[command(name = "logigram")]
#[command(author, version, about = "Procedure tables to flowcharts and actor reports")]
#[command(propagate_version = true)]
struct Cli {
    /// TOML configuration file
    #[arg(long, short = 'c', global = true, env = "LOGIGRAM_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract procedure steps from a Markdown table
    Steps {
        /// Markdown file, `-` for stdin
        file: PathBuf,

        #[arg(long, short = 'f', default_value = "text")]
        format: ReportFormat,
    },

    /// Extract start and end labels from an I/O events table
    Io {
        /// Markdown file, `-` for stdin
        file: PathBuf,

        #[arg(long, short = 'f', default_value = "text")]
        format: IoFormat,
    },

    /// Render the procedure flowchart
    Flowchart {
        /// Markdown file holding the procedure table, `-` for stdin
        file: PathBuf,

        /// Markdown file holding the I/O events table
        #[arg(long)]
        io: Option<PathBuf>,

        /// Write to this file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        #[arg(long, default_value = "png")]
        emit: Emit,

        /// Title drawn above the chart; overrides the configuration
        #[arg(long)]
        title: Option<String>,
    },

    /// Summarize activities per actor
    Actors {
        /// Markdown file, `-` for stdin
        file: PathBuf,

        #[arg(long, short = 'f', default_value = "text")]
        format: ReportFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum ReportFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum IoFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum Emit {
    #[default]
    Png,
    Base64,
    Svg,
    Dot,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "logigram=debug" } else { "logigram=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn write_output(output: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = bytes.len(), "output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes).context("failed to write stdout")?;
            stdout.flush().context("failed to write stdout")?;
        }
    }
    Ok(())
}

fn steps_text(steps: &[StepRecord]) -> String {
    let mut out = String::new();
    for step in steps {
        out.push_str(&format!("{}. {}", step.number(), step.activity()));
        if let Some(actor) = step.actor() {
            out.push_str(&format!(" ({actor})"));
        }
        if let Some(document) = step.document() {
            out.push_str(&format!(" [{document}]"));
        }
        out.push('\n');
    }
    out
}

fn actors_text(report: &ActorReport) -> String {
    let mut out = format!("{}\n", report.message);
    for aggregate in &report.actors {
        out.push_str(&format!("\n{} ({})\n", aggregate.actor_name(), aggregate.activity_count()));
        for entry in aggregate.activities() {
            out.push_str(&format!("  {}. {}\n", entry.step_number, entry.activity));
        }
    }
    if let Some(busiest) = &report.summary.busiest_actor {
        out.push_str(&format!(
            "\nbusiest: {} ({} activities), average {:.2} per actor\n",
            busiest.actor_name(),
            busiest.activity_count(),
            report.summary.avg_activities_per_actor
        ));
    }
    out
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_optional(cli.config.as_deref())?;

    match cli.command {
        Commands::Steps { file, format } => {
            let steps = parse_steps(&read_input(&file)?);
            let text = match format {
                ReportFormat::Text => steps_text(&steps),
                ReportFormat::Json => serde_json::to_string_pretty(&steps)?,
                ReportFormat::Markdown => export_steps(&steps),
            };
            write_output(None, with_newline(text).as_bytes())
        }
        Commands::Io { file, format } => {
            let events = parse_io_events(&read_input(&file)?);
            let text = match format {
                IoFormat::Text => format!("start: {}\nend: {}", events.start, events.end),
                IoFormat::Json => serde_json::to_string_pretty(&events)?,
            };
            write_output(None, with_newline(text).as_bytes())
        }
        Commands::Flowchart { file, io, output, emit, title } => {
            let steps = parse_steps(&read_input(&file)?);
            let events = match &io {
                Some(path) => parse_io_events(&read_input(path)?),
                None => Default::default(),
            };
            let mut flowchart = config.flowchart_config();
            if title.is_some() {
                flowchart.title = title;
            }

            let (start, end) = (events.start.as_str(), events.end.as_str());
            let bytes = match emit {
                Emit::Png => render_flowchart(&steps, start, end, &flowchart)?.into_png(),
                Emit::Base64 => {
                    let image = render_flowchart(&steps, start, end, &flowchart)?;
                    with_newline(image.to_base64()).into_bytes()
                }
                Emit::Svg => with_newline(render_flowchart_svg(&steps, start, end, &flowchart)?).into_bytes(),
                Emit::Dot => render_flowchart_dot(&steps, start, end, &flowchart)?.into_bytes(),
            };
            write_output(output.as_deref(), &bytes)
        }
        Commands::Actors { file, format } => {
            let report = ActorReport::from_steps(&parse_steps(&read_input(&file)?));
            let text = match format {
                ReportFormat::Text => actors_text(&report),
                ReportFormat::Json => serde_json::to_string_pretty(&report)?,
                ReportFormat::Markdown => export_actor_table(&report.actors),
            };
            write_output(None, with_newline(text).as_bytes())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
