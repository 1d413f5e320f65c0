//! ghorg CLI - list an organization's public repositories

use clap::Parser;
use colored::Colorize;

use ghorg::cli::{self, Cli, CommandContext, Commands, GlobalOptions};
use ghorg::error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

/// Default to warnings only; `--debug` raises to debug; `RUST_LOG` overrides both.
fn init_logging(debug: bool) {
    let default_filter = if debug { "ghorg=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Version => {
            println!("ghorg version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Org { name } => {
            let ctx = CommandContext::new(&opts)?;
            cli::org::get(&ctx, &name).await
        }
        Commands::Repos { names, license } => {
            let ctx = CommandContext::new(&opts)?;
            cli::repo::list(&ctx, &names, license.as_deref()).await
        }
    }
}
