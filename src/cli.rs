use std::path::PathBuf;

mod terminal;

use anyhow::Context;
use clap::ArgAction;
use reqtrace::{Config, ReportTable, report, scan_tree};
use terminal::Colorize;
use tracing::instrument;

/// Command-line interface for the traceability report generator.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The path to search recursively for tagged requirements
    #[arg(short, long, default_value = ".")]
    path: PathBuf,

    /// File extensions to scan (repeatable); all files if omitted
    #[arg(short, long = "ext", value_name = "EXT")]
    ext: Vec<String>,

    /// Name of the output file
    #[arg(short, long, default_value = "requirements.html")]
    output: PathBuf,

    /// Omit files with no requirements from the report
    #[arg(long)]
    skip_no_require: bool,
}

impl Cli {
    /// Runs the scan and writes the HTML report.
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);
        self.generate()
    }

    #[instrument(level = "debug", skip(self))]
    fn generate(&self) -> anyhow::Result<()> {
        // Command-line flags take precedence over the config file.
        let mut config = Config::load_or_default(&self.path);
        config.apply_overrides(&self.ext, self.skip_no_require);

        let records = scan_tree(&self.path, &config)
            .with_context(|| format!("failed to scan {}", self.path.display()))?;
        let table = ReportTable::new(records);

        let html = report::render(&table);
        std::fs::write(&self.output, html)
            .with_context(|| format!("failed to write report to {}", self.output.display()))?;

        if table.is_empty() {
            println!(
                "{}",
                format!("No files matched under {}", self.path.display()).warning()
            );
            println!(
                "{}",
                "Check the --path and --ext filters if this is unexpected".dim()
            );
        } else {
            println!(
                "{}",
                format!(
                    "✓ {} requirements ({} rows) written to {}",
                    table.requirement_count(),
                    table.len(),
                    self.output.display()
                )
                .success()
            );
        }

        Ok(())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
