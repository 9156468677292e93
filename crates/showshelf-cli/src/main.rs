use clap::{ArgAction, Parser, Subcommand};
use commands::{browse, catalog, config};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "showshelf")]
#[command(about = "ShowShelf - Browse a streaming catalog, profiles, and watch history from your terminal")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog interactively
    #[command(long_about = "Start the interactive catalog browser: list titles, play something, manage downloads, rate titles, and maintain per-profile watchlists and watch history. State lives in memory for the duration of the run.")]
    Browse {
        /// Region used for availability checks (overrides the configured one)
        #[arg(long)]
        region: Option<String>,

        /// Profile to start with, by name (overrides the configured default)
        #[arg(long)]
        profile: Option<String>,
    },

    /// List the catalog without entering the interactive browser
    #[command(long_about = "Print every catalog entry as a table, or as JSON when --output json is given. Useful for piping into other tools.")]
    Catalog {
        /// Only list entries of this kind
        #[arg(long, value_enum)]
        kind: Option<catalog::KindFilter>,
    },

    /// View or modify configuration
    #[command(long_about = "Manage the ShowShelf configuration file. Running without a subcommand shows the current configuration.")]
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },

    /// Change configuration values
    Set {
        /// Region used for availability checks
        #[arg(long)]
        region: Option<String>,

        /// Profile selected at startup, by name (empty string clears it)
        #[arg(long)]
        default_profile: Option<String>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Initialize logging with verbose level
    logging::init_logging(cli.verbose, cli.quiet).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    // Create output handler
    let output = output::Output::new(cli.output, cli.quiet);

    // Browsing is what the tool is for, so it is the default subcommand
    let command = cli.command.unwrap_or(Commands::Browse {
        region: None,
        profile: None,
    });

    match command {
        Commands::Browse { region, profile } => browse::run_browse(region, profile, &output),
        Commands::Catalog { kind } => catalog::run_catalog(kind, &output),
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show);
            config::run_config(cmd, &output)
        }
    }
}
