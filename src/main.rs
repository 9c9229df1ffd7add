//! tb — inspect and normalise taskbar appearance settings.
//!
//! Run with:  `RUST_LOG=info tb ~/.config/tb/settings.json --watch`

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tb_config::{default_path, load, render, ConfigWatcher, Format, TaskbarAppearance};
use tracing_subscriber::EnvFilter;

/// Output document format.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Toml,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => Format::Json,
            OutputFormat::Toml => Format::Toml,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Settings file to read (defaults to `$XDG_CONFIG_HOME/tb/settings.json`).
    path: Option<PathBuf>,

    /// Format used to print the normalised appearance.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Keep running and reprint the appearance whenever the file changes.
    #[arg(short, long)]
    watch: bool,
}

fn print(appearance: &TaskbarAppearance, format: OutputFormat) -> Result<()> {
    println!("{}", render(appearance, format.into())?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let path = args.path.unwrap_or_else(default_path);

    tracing::info!("tb v{} reading {}", env!("CARGO_PKG_VERSION"), path.display());

    print(&load(&path), args.format)?;

    if args.watch {
        let (_watcher, mut rx) = ConfigWatcher::spawn(&path);
        while let Some(appearance) = rx.recv().await {
            print(&appearance, args.format)?;
        }
    }

    Ok(())
}
