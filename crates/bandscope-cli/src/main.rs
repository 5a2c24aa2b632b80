//! bandscope
//!
//! Looks up LTE/NR bands for channel numbers given on the command line.
//! Channel numbers are what a modem or phone reports for the serving cell
//! (EARFCN for LTE, NR-ARFCN for NR).
//!
//! ```text
//! bandscope nr 643334 159630 --all
//! bandscope --json lte 1850
//! bandscope --legacy freq 2070015
//! ```

mod output;

use std::path::PathBuf;

use anyhow::Context;
use bandscope_core::BandResolver;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use output::Format;

/// Cellular band lookup from EARFCN / NR-ARFCN.
#[derive(Parser, Debug)]
#[command(name = "bandscope", about = "LTE/NR band lookup from channel numbers")]
struct Cli {
    /// Emit one JSON object per channel.
    #[arg(long, global = true, conflicts_with = "legacy")]
    json: bool,

    /// Emit the legacy string forms ("n78", "nnull", -1).
    #[arg(long, global = true)]
    legacy: bool,

    /// TOML file overriding band tables or the refarm threshold.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve LTE EARFCNs.
    Lte {
        #[arg(required = true)]
        earfcn: Vec<i32>,
    },
    /// Resolve NR-ARFCNs.
    Nr {
        #[arg(required = true)]
        nrarfcn: Vec<i32>,
        /// List every matching band, not just the preferred one.
        #[arg(long)]
        all: bool,
    },
    /// NR-ARFCN to frequency in MHz.
    Freq {
        #[arg(required = true)]
        nrarfcn: Vec<i32>,
    },
}

impl Cli {
    fn format(&self) -> Format {
        if self.json {
            Format::Json
        } else if self.legacy {
            Format::Legacy
        } else {
            Format::Text
        }
    }
}

fn load_resolver(path: Option<&PathBuf>) -> anyhow::Result<BandResolver> {
    let Some(path) = path else {
        return Ok(BandResolver::builtin());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let resolver = BandResolver::from_toml_str(&text)
        .with_context(|| format!("loading config {}", path.display()))?;
    tracing::info!(path = %path.display(), "using band tables from config");
    Ok(resolver)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let resolver = load_resolver(cli.config.as_ref())?;
    let format = cli.format();

    let lines = match &cli.command {
        Command::Lte { earfcn } => earfcn
            .iter()
            .map(|&ch| output::lte_line(&resolver, ch, format))
            .collect::<anyhow::Result<Vec<_>>>()?,
        Command::Nr { nrarfcn, all } => nrarfcn
            .iter()
            .map(|&ch| output::nr_line(&resolver, ch, *all, format))
            .collect::<anyhow::Result<Vec<_>>>()?,
        Command::Freq { nrarfcn } => nrarfcn
            .iter()
            .map(|&ch| output::freq_line(&resolver, ch, format))
            .collect::<anyhow::Result<Vec<_>>>()?,
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}
