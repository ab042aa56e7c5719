use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Keyboard layout ergonomics statistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a single layout
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Analyze the built-in layouts side by side
    Compare(cmd::compare::CompareArgs),
    /// Build a corpus directory from plain text
    Generate(cmd::generate::GenerateArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args),
        Commands::Compare(args) => cmd::compare::run(args),
        Commands::Generate(args) => cmd::generate::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
