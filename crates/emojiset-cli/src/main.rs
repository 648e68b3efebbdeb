//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, initialises logging, bootstraps the
//! [`CliContext`](emojiset_cli::CliContext) and dispatches to a handler.
//! Handler errors are printed and mapped to an exit code.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use emojiset_cli::handlers::sanitize::SanitizeArgs;
use emojiset_cli::{Cli, CliConfig, CliContext, Commands, bootstrap, exit_code, handlers};

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "EMOJISET_LOG";

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch(ctx: &CliContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Validate => handlers::validate::execute(ctx),
        Commands::Sanitize {
            output,
            allow_list,
            drop_empty_categories,
            pretty,
        } => {
            let args = SanitizeArgs {
                output,
                allow_list,
                drop_empty_categories,
                pretty,
            };
            handlers::sanitize::execute(ctx, &args)
        }
        Commands::Reaction { text, allow_list } => {
            handlers::reaction::execute(ctx, &text, allow_list.as_deref())
        }
        Commands::Show { short_code, json } => handlers::show::execute(ctx, &short_code, json),
        Commands::Stats { json } => handlers::stats::execute(ctx, json),
        Commands::Categories => handlers::categories::execute(ctx),
    }
}

fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // No command provided - show help
    let Some(command) = cli.command else {
        return match Cli::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::from(74),
        };
    };

    // Bootstrap the CLI context (composition root)
    let config = CliConfig::from_env().with_data_path(cli.data);
    let ctx = bootstrap(config);

    match dispatch(&ctx, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}
