use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use ledgerlift_export::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod state;
mod statement_cmd;

#[derive(Parser, Debug)]
#[command(
    name = "ledgerlift",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("LEDGERLIFT_BUILD_SHA"), ")"),
    about = "Turn bank statement text into a signed transaction ledger"
)]
struct Cli {
    /// More log output on stderr (-v debug, -vv trace). Overrides LEDGERLIFT_LOG.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Config file (default: ~/.ledgerlift/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract transactions from a statement (PDF or text) into CSV/JSON
    Extract {
        /// Statement file; `.pdf` is read through its text layer, anything else as text
        #[arg(default_value = "statement.pdf")]
        input: PathBuf,

        /// Output file, or `-` for stdout (default: input with .csv/.json extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// csv or json (default from config, else csv)
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Show how every line of a statement is classified
    Inspect {
        #[arg(default_value = "statement.pdf")]
        input: PathBuf,

        /// Also list empty lines
        #[arg(long, default_value_t = false)]
        all: bool,
    },

    /// Write default settings to --config, or ~/.ledgerlift/config.toml
    InitConfig,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env("LEDGERLIFT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Extract {
            input,
            output,
            format,
        } => {
            let cfg = config::load_config(cli.config.as_deref())?;
            statement_cmd::run_extract(&cfg, &input, output, format)?;
        }

        Command::Inspect { input, all } => {
            let cfg = config::load_config(cli.config.as_deref())?;
            statement_cmd::run_inspect(&cfg, &input, all)?;
        }

        Command::InitConfig => {
            config::init_config(cli.config.as_deref())?;
        }
    }

    Ok(())
}
