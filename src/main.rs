//! Boiler CLI entry point.

use std::process::ExitCode;

use boiler::cli::{Cli, CommandDispatcher};
use boiler::config::{default_config_path, Configuration};
use boiler::error::BoilerError;
use boiler::ui::{create_ui, OutputMode};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("boiler=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("boiler=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Boiler starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let mut ui = create_ui(output_mode);

    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            ui.error(&BoilerError::CurrentDirUnavailable(e).to_string());
            return ExitCode::from(1);
        }
    };

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let mut registry = match Configuration::load(config_path) {
        Ok(registry) => registry,
        Err(e) => {
            ui.error(&e.to_string());
            return ExitCode::from(1);
        }
    };

    let dispatcher = CommandDispatcher::new(working_dir);

    match dispatcher.dispatch(&cli, &mut registry, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_status()),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
