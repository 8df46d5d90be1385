use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod corpus;
mod filter;
mod lexicon;
mod matching;
mod planning;
mod utils;
mod web;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("frigo_match=debug,info")
    } else {
        EnvFilter::new("frigo_match=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Suggest(args) => {
            cli::suggest::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Check(args) => {
            cli::check::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Menu(args) => {
            cli::menu::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Corpus(args) => {
            cli::corpus::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Serve(args) => {
            web::server::run(args)?;
        }
    }

    Ok(())
}
