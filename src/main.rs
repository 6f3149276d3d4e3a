//! Minvi - a minimal modal terminal text editor.
//!
//! # Usage
//!
//! ```bash
//! minvi notes.txt
//! minvi --tab-width 4 notes.txt
//! minvi --wrap-left notes.txt
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use minvi::app::App;
use minvi::config::{ConfigFlags, global_config_path, load_config_flags, local_override_path};
use minvi::editor::DEFAULT_TAB_WIDTH;

/// A minimal modal terminal text editor
#[derive(Parser, Debug)]
#[command(name = "minvi", version, about, long_about = None)]
struct Cli {
    /// File to edit (created on first `:w` if it does not exist)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Tab stop width used for visual columns
    #[arg(long, value_name = "N")]
    tab_width: Option<usize>,

    /// Let left movement at column zero wrap to the end of the previous line
    #[arg(long)]
    wrap_left: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let cli_flags = ConfigFlags {
        wrap_left: cli.wrap_left,
        tab_width: cli.tab_width.filter(|&width| width > 0),
    };

    let global_flags = load_config_flags(&global_config_path())?;
    let local_flags = load_config_flags(&local_override_path())?;
    let effective = global_flags.union(&local_flags).union(&cli_flags);

    let tab_width = effective.tab_width.unwrap_or(DEFAULT_TAB_WIDTH);

    let mut app = App::new(cli.file)
        .with_tab_width(tab_width)
        .with_wrap_left(effective.wrap_left);

    app.run().context("Application error")
}
