//! Snippy CLI
//!
//! Command-line interface for the snippet manager

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use snippy_core::logging_facility::{self, Profile};

mod commands;

/// Environment variable selecting the logging profile (`dev` / `prod`)
const ENV_LOG_PROFILE: &str = "SNIPPY_LOG_PROFILE";

#[derive(Debug, Parser)]
#[command(name = "snippy")]
#[command(about = "Snippy - Code snippet manager", long_about = None)]
struct Cli {
    /// Directory holding the snippet collection
    #[arg(long, global = true, default_value = snippy_store::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List snippets, optionally searched and filtered
    List(commands::snippet::ListArgs),
    /// Show one snippet
    Show(commands::snippet::ShowArgs),
    /// Create a snippet
    Add(commands::snippet::AddArgs),
    /// Update fields of a snippet
    Update(commands::snippet::UpdateArgs),
    /// Remove a snippet
    Remove(commands::snippet::RemoveArgs),
    /// Languages present in the collection
    Languages,
    /// Tags present in the collection
    Tags,
    /// Estimate the performance of a snippet with the configured model
    Analyze(commands::analyze::AnalyzeArgs),
    /// Run the performance relay HTTP endpoint
    Serve(commands::serve::ServeArgs),
    /// Conversational assistant actions and context
    Assist(commands::assist::AssistArgs),
}

fn init_logging(fallback: Option<Profile>) {
    let profile = match std::env::var(ENV_LOG_PROFILE) {
        Ok(value) => match value.parse::<Profile>() {
            Ok(profile) => Some(profile),
            Err(e) => {
                eprintln!("Warning: {}", e);
                fallback
            }
        },
        Err(_) => fallback,
    };
    if let Some(profile) = profile {
        logging_facility::init(profile);
    }
}

fn main() {
    let cli = Cli::parse();

    let fallback = match cli.command {
        Commands::Serve(_) => Some(Profile::Development),
        _ => None,
    };
    init_logging(fallback);

    let data_dir = cli.data_dir;
    let result = match cli.command {
        Commands::List(args) => commands::snippet::execute_list(&data_dir, args),
        Commands::Show(args) => commands::snippet::execute_show(&data_dir, args),
        Commands::Add(args) => commands::snippet::execute_add(&data_dir, args),
        Commands::Update(args) => commands::snippet::execute_update(&data_dir, args),
        Commands::Remove(args) => commands::snippet::execute_remove(&data_dir, args),
        Commands::Languages => commands::snippet::execute_languages(&data_dir),
        Commands::Tags => commands::snippet::execute_tags(&data_dir),
        Commands::Analyze(args) => commands::analyze::execute(&data_dir, args),
        Commands::Serve(args) => commands::serve::execute(args),
        Commands::Assist(args) => commands::assist::execute(&data_dir, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
