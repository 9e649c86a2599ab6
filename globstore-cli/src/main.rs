mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use cli::{parse_path_args, parse_value_arg, Cli, Commands};
use error::exit_with_error;

fn init_tracing(cli: &Cli) {
    // CLI tracing policy:
    //   --quiet  → always "off" (no logs, no matter what)
    //   --verbose → honour RUST_LOG if set, otherwise "info"
    //   default  → "off" (clean terminal output; RUST_LOG intentionally
    //              ignored so developer env vars don't leak log lines into
    //              user-facing output)
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Disable color when --no-color flag or NO_COLOR env var is set.
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = run(cli).await {
        exit_with_error(e);
    }
}

async fn run(cli: Cli) -> error::CliResult<()> {
    let store = context::build_store(cli.connect.as_deref()).await?;

    match cli.command {
        Commands::Set { global, path, value } => {
            let path = parse_path_args(&path);
            commands::set::run(store.as_ref(), &global, &path, parse_value_arg(&value)).await
        }

        Commands::Get { global, path } => {
            let path = parse_path_args(&path);
            commands::get::run(store.as_ref(), &global, &path).await
        }

        Commands::Kill { global, path, force } => {
            let path = parse_path_args(&path);
            commands::kill::run(store.as_ref(), &global, &path, force).await
        }

        Commands::Load { global, file } => {
            commands::load::run(store.as_ref(), &global, &file).await
        }

        Commands::View { global, prefix } => {
            let prefix = parse_path_args(&prefix);
            commands::view::run(store.as_ref(), &global, &prefix).await
        }
    }
}
