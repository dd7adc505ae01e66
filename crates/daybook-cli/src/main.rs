use clap::{Parser, Subcommand};
use daybook_core::Config;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "daybook-cli", version, about = "Daybook CLI")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one section of a fresh workspace
    Show(commands::show::ShowArgs),
    /// Apply a script of JSON intents, then render the active section
    Run(commands::run::RunArgs),
    /// List the available sections
    Sections,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    logging::init(&config.log_level);
    if let Some(e) = load_error {
        tracing::warn!(error = %e, "falling back to default config");
    }

    let result = match cli.command {
        Commands::Show(args) => commands::show::run(args, &config),
        Commands::Run(args) => commands::run::run(args, &config),
        Commands::Sections => commands::sections::run(),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
