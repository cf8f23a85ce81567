//! textop command-line interface
//!
//! Dispatches to the subcommand implementations and reports the
//! three-valued outcome: failed, succeeded without changes, or succeeded
//! with changes.

use clap::Parser;

use textop_cli::commands::{Commands, Completion};

/// Line and unit oriented text file transformations
#[derive(Debug, Parser)]
#[command(name = "textop", version, about = "This program provides methods to modify lines of a text file.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.execute(cli.quiet) {
        Ok(completion) => {
            log::info!("Everything was successful!");
            if completion == Completion::Unchanged {
                log::info!("Didn't change anything.");
            }
        }
        Err(error) => {
            log::error!("Not everything was successful: {error:#}");
            std::process::exit(1);
        }
    }
}
