use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

mod cmd;
mod output;

/// twofin - native driver for the two_finance_blockchain method channel
#[derive(Parser)]
#[command(name = "twofin")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Send a method call through the plugin channel
  Call {
    /// Method name to invoke
    method: String,

    /// JSON argument payload for the call
    #[arg(short, long)]
    args: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
  },

  /// Show channel and host platform details
  Info,
}

fn main() -> Result<()> {
  // Initialize logging
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .without_time()
    .init();

  let cli = Cli::parse();

  match cli.command {
    Commands::Call {
      method,
      args,
      format,
    } => cmd::cmd_call(&method, args.as_deref(), format, cli.verbose),
    Commands::Info => cmd::cmd_info(),
  }
}
