//! Grid Designer command-line entry point.
//!
//! Replays a script of designer commands against a fresh layout and prints
//! the generated code.  This is the headless counterpart of the interactive
//! designer: every drag, edit and undo a user would perform is one JSON line.
//!
//! # Usage
//!
//! ```text
//! grid-designer [OPTIONS]
//!
//! Options:
//!   --config <PATH>       Config file [default: platform config dir]
//!   --script <PATH>       Command script; stdin when absent
//!   --emit <WHAT>         html | css | snapshot | all [default: all]
//!   --log-level <LEVEL>   Overrides the configured log level
//!   --init-config         Write the effective config to disk and exit
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable                | Description                    |
//! |-------------------------|--------------------------------|
//! | `GRID_DESIGNER_CONFIG`  | Config file path               |
//! | `GRID_DESIGNER_SCRIPT`  | Command script path            |
//! | `RUST_LOG`              | Full `tracing` filter directive |
//!
//! Logs go to stderr; stdout carries only the emitted artifacts.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use grid_designer::application::controller::LayoutController;
use grid_designer::application::script::parse_script;
use grid_designer::infrastructure::export::CodeExporter;
use grid_designer::infrastructure::storage::config::{
    load_config, load_config_from, save_config, save_config_to, ConfigError, DesignerConfig,
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Which generated artifacts to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    Html,
    Css,
    Snapshot,
    All,
}

/// Grid Designer: replay layout commands and emit HTML/CSS.
#[derive(Debug, Parser)]
#[command(
    name = "grid-designer",
    about = "Replay grid layout commands and emit the generated HTML/CSS",
    version
)]
struct Cli {
    /// Path to the TOML config file.
    ///
    /// When absent, the platform config directory is used; a missing file
    /// means built-in defaults.
    #[arg(long, env = "GRID_DESIGNER_CONFIG")]
    config: Option<PathBuf>,

    /// Newline-delimited JSON command script.  Reads stdin when absent.
    #[arg(long, env = "GRID_DESIGNER_SCRIPT")]
    script: Option<PathBuf>,

    /// Artifact(s) to print to stdout.
    #[arg(long, value_enum, default_value_t = Emit::All)]
    emit: Emit,

    /// Log level, overriding `[designer] log_level`.  `RUST_LOG` wins over both.
    #[arg(long)]
    log_level: Option<String>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    init_config: bool,
}

impl Cli {
    /// Loads the config from `--config` or the platform directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.  A
    /// platform without a config directory falls back to defaults.
    fn load_config(&self) -> anyhow::Result<DesignerConfig> {
        match &self.config {
            Some(path) => load_config_from(path)
                .with_context(|| format!("failed to load config from {}", path.display())),
            None => match load_config() {
                Err(ConfigError::NoPlatformConfigDir) => Ok(DesignerConfig::default()),
                other => other.context("failed to load config"),
            },
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    // ── Logging setup ─────────────────────────────────────────────────────────
    //
    // `RUST_LOG` wins; otherwise `--log-level`, then the config file.
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.designer.log_level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .init();

    info!("Grid Designer starting");

    if cli.init_config {
        match &cli.config {
            Some(path) => save_config_to(path, &config)
                .with_context(|| format!("failed to write config to {}", path.display()))?,
            None => save_config(&config).context("failed to write config")?,
        }
        info!("config written");
        return Ok(());
    }

    // ── Controller and observers ──────────────────────────────────────────────
    let mut controller = LayoutController::new(config.controller_settings());
    let exporter = CodeExporter::new();
    exporter.refresh(controller.state());
    controller.add_observer(Box::new(exporter.clone()));

    // ── Replay the script ─────────────────────────────────────────────────────
    let commands = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            parse_script(BufReader::new(file))
        }
        None => parse_script(io::stdin().lock()),
    }
    .context("failed to read command script")?;

    let total = commands.len();
    let mut applied = 0usize;
    for command in commands {
        if controller.dispatch(command).is_applied() {
            applied += 1;
        }
    }

    let stats = controller.stats();
    info!(
        commands = total,
        applied,
        modules = stats.modules,
        "script finished: {}",
        controller.mode_hint()
    );

    // ── Emit ──────────────────────────────────────────────────────────────────
    let code = exporter.latest();
    let mut out = io::stdout().lock();
    if matches!(cli.emit, Emit::Html | Emit::All) {
        writeln!(out, "{}", code.markup)?;
    }
    if matches!(cli.emit, Emit::Css | Emit::All) {
        writeln!(out, "{}", code.stylesheet)?;
    }
    if matches!(cli.emit, Emit::Snapshot | Emit::All) {
        let snapshot = serde_json::to_string_pretty(&controller.state().snapshot())
            .context("failed to serialize layout snapshot")?;
        writeln!(out, "{snapshot}")?;
    }

    info!("Grid Designer stopped");
    Ok(())
}
