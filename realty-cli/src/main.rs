use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use realty_cli::{csv_loader, logging};
use realty_report::{LayoutConfig, Orientation, PdfRenderer, Session, write_report};
use tracing::{debug, info, warn};

// ─── CLI definition ──────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliOrientation {
    Portrait,
    Landscape,
}

impl From<CliOrientation> for Orientation {
    fn from(value: CliOrientation) -> Self {
        match value {
            CliOrientation::Portrait => Orientation::Portrait,
            CliOrientation::Landscape => Orientation::Landscape,
        }
    }
}

/// Real estate purchase calculator.
///
/// Reads property submissions from a CSV file, prints the portfolio table
/// and optionally exports it as a PDF report.
#[derive(Debug, Parser)]
#[command(name = "realty-calculator", version, about, long_about = None)]
struct Cli {
    /// CSV file with one property per row.
    #[arg(short, long)]
    input: PathBuf,

    /// Directory to write the PDF report into. No report is written without it.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// TOML file with report layout settings.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page orientation; overrides the layout config.
    #[arg(long, value_enum)]
    orientation: Option<CliOrientation>,

    /// Report heading; overrides the layout config.
    #[arg(long)]
    title: Option<String>,

    /// Log level or filter directive (defaults to RUST_LOG, then `info`).
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn layout_config(&self) -> Result<LayoutConfig> {
        let mut config = match &self.config {
            Some(path) => LayoutConfig::load(path)
                .with_context(|| format!("Failed to load layout config: {}", path.display()))?,
            None => LayoutConfig::default(),
        };
        if let Some(orientation) = self.orientation {
            config.orientation = orientation.into();
        }
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        Ok(config)
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    let layout = cli.layout_config()?;
    debug!(?layout, "Resolved layout config");

    let inputs = csv_loader::load_from_file(&cli.input)
        .with_context(|| format!("Failed to load properties: {}", cli.input.display()))?;

    let mut session = Session::new();
    let mut rejected = 0usize;
    for (idx, input) in inputs.into_iter().enumerate() {
        if let Err(err) = session.add_property(input) {
            warn!(row = idx + 1, %err, "Submission rejected");
            rejected += 1;
        }
    }
    info!(added = session.portfolio().len(), rejected, "Loaded properties");

    print!("{}", session.portfolio_view());

    if let Some(dir) = &cli.output_dir {
        let renderer = PdfRenderer::new(layout);
        let document = session
            .export_report(&renderer)
            .context("Failed to generate report")?;
        let path = write_report(&document, dir)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}
