//! Command-line interface: argument parsing and dispatch.

mod config;
mod convert;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vault2hugo",
    version,
    about = "Convert a vault note into a Hugo page bundle"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a note into a Hugo page bundle
    Convert {
        /// Path to the note to convert
        note: PathBuf,

        /// Bundle directory name (prompted for when omitted)
        #[arg(long)]
        name: Option<String>,

        /// Vault root that image references resolve against
        /// (defaults to the note's parent directory)
        #[arg(long)]
        vault: Option<PathBuf>,

        /// Where to create the bundle (defaults to your Downloads directory)
        #[arg(long)]
        output_root: Option<PathBuf>,
    },

    /// Show or edit configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the current configuration
    Show,
    /// Set the vault-relative image directory
    SetImageDir {
        /// New image directory, relative to the vault root
        directory: String,
    },
}

/// Parse arguments and run the selected command.
pub fn run_cli() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Convert {
            note,
            name,
            vault,
            output_root,
        } => convert::handle_convert(&note, name, vault, output_root),
        Commands::Config { command } => config::handle_config_command(command),
    }
}
