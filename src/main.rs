//! Trackline CLI - Resolve status histories into tracking steps

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use trackline::cli::commands;
use trackline::cli::{Cli, Commands, Context};
use trackline::errors::to_exit_code;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flags
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> trackline::Result<()> {
    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    // Message needs no config
    let ctx = || Context::load(cli.cwd.as_deref(), cli.config.as_deref());
    match command {
        Commands::Resolve {
            domain,
            file,
            pipeline,
            chronological,
            json,
        } => commands::resolve::run(
            &ctx()?,
            &domain,
            &file,
            pipeline.as_deref(),
            chronological,
            json,
        ),
        Commands::Update {
            domain,
            file,
            status,
            json,
        } => commands::update::run(&ctx()?, &domain, &file, &status, json),
        Commands::Steps { name, json } => commands::steps::run(&ctx()?, &name, json),
        Commands::Message { status, domain } => commands::message::run(&domain, &status),
    }
}
