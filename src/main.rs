//! Gutters - a terminal pager with a draggable, persistent reading column.
//!
//! # Usage
//!
//! ```bash
//! gutters README.md
//! gutters --margin 8 notes.txt
//! gutters --no-handles log.txt
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use gutters::app::App;
use gutters::config::{
    clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags, ConfigFlags,
};
use gutters::persist::default_state_path;

/// A terminal pager with a draggable, persistent reading column
#[derive(Parser, Debug)]
#[command(name = "gutters", version, about, long_about = None)]
struct Cli {
    /// File to view
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Base margins for the reading column, in columns
    #[arg(long, value_name = "COLS")]
    margin: Option<u16>,

    /// Start with the gutter handles visible
    #[arg(long)]
    handles: bool,

    /// Start with the gutter handles hidden
    #[arg(long)]
    no_handles: bool,

    /// Where to persist gutter state (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    state_file: Option<PathBuf>,

    /// Save current command-line flags as defaults in .guttersrc
    #[arg(long)]
    save: bool,

    /// Clear saved defaults in .guttersrc
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    // Verify file exists
    if !cli.file.exists() {
        anyhow::bail!("File not found: {}", cli.file.display());
    }

    let state_path = effective.state_file.clone().or_else(default_state_path);
    if state_path.is_none() {
        tracing::debug!("no state directory resolved, gutter persistence disabled");
    }

    // Run the application
    let mut app = App::new(cli.file)
        .with_margin(effective.margin.unwrap_or(0))
        .with_handles_visible(!effective.no_handles || effective.handles)
        .with_state_path(state_path);

    app.run().context("Application error")
}
