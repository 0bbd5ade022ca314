// SPDX-License-Identifier: PMPL-1.0-or-later
//! Contrastbot CLI - WCAG color contrast checks for storefront themes
//!
//! Part of the gitbot-fleet ecosystem.

use contrastbot::config;
use contrastbot::report::{generate_report, OutputFormat};
use contrastbot::{classify, contrast_ratio, scanner};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// WCAG color contrast checker for gitbot-fleet
#[derive(Parser)]
#[command(name = "contrastbot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the contrast ratio of a single color pair
    Pair {
        /// Foreground color (#RRGGBB)
        foreground: String,

        /// Background color (#RRGGBB)
        background: String,
    },

    /// Evaluate a single theme file
    Check {
        /// Theme file (toml, yaml, json or css)
        theme: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Evaluate every theme file under a directory
    Scan {
        /// Directory to scan
        dir: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Write a default configuration file
    Init {
        /// Where to write it (defaults to the user config directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Show the effective configuration
    Show,
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI
    Sarif,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Sarif => OutputFormat::Sarif,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("contrastbot=debug")
        } else {
            EnvFilter::new("contrastbot=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);

    match cli.command {
        Commands::Pair { foreground, background } => {
            init_logging(false);
            let ratio = contrast_ratio(&foreground, &background);
            match (ratio, classify(ratio)) {
                (Some(ratio), Some(verdict)) => println!("{:.2}:1 {}", ratio, verdict),
                _ => {
                    println!("unavailable");
                    std::process::exit(2);
                }
            }
        }

        Commands::Check { theme, format, output, verbose } => {
            init_logging(verbose);
            let config = config::load_config(&config_path)?;
            let report = scanner::scan_file(&theme, &config)?;
            let reports = vec![report];
            write_output(&generate_report(&reports, format.into(), config.fail_on), output.as_deref())?;

            if config.fail_on.trips(&reports) {
                std::process::exit(1);
            }
        }

        Commands::Scan { dir, format, output, verbose } => {
            init_logging(verbose);
            let config = config::load_config(&config_path)?;
            let reports = scanner::scan_directory(&dir, &config)?;
            write_output(&generate_report(&reports, format.into(), config.fail_on), output.as_deref())?;

            if config.fail_on.trips(&reports) {
                std::process::exit(1);
            }
        }

        Commands::Init { path } => {
            init_logging(false);
            let path = path.unwrap_or(config_path);
            config::write_default_config(&path)?;
            eprintln!("Config written to {}", path.display());
        }

        Commands::Show => {
            init_logging(false);
            let config = config::load_config(&config_path)?;
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
