//! keycalc: sequential four-function desk calculator

use clap::Parser;
use keycalc_cli::logging::{self, LogBuffer, LogTarget};
use keycalc_cli::{handlers, print_lines, Cli, CliConfig, CliResult, Commands, Verbosity};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);

    // The interactive session owns the terminal; hold log output until it ends
    let held_logs = matches!(cli.command, Commands::Interactive(_)).then(LogBuffer::new);
    let target = held_logs
        .clone()
        .map_or(LogTarget::Stderr, LogTarget::Buffer);
    logging::init(&config, target)?;

    let config = config.load_calculator(cli.config.as_deref())?;

    let result = match &cli.command {
        Commands::Eval(args) => handlers::eval(&config, args),
        Commands::Interactive(args) => handlers::interactive(&config, args),
        Commands::Config(args) => handlers::show_config(&config, args),
    };

    if let Some(buffer) = held_logs {
        std::io::stderr().write_all(&buffer.take()?)?;
    }
    print_lines(&result?)
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.verbose, cli.quiet))
        .with_color(cli.color.into())
        .with_log_json(cli.log_json)
}
