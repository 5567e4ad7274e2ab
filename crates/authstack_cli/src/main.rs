//! authstack CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Unknown recipe
//! - 3: Missing environment input

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const UNKNOWN_RECIPE: u8 = 2;
    pub const MISSING_ENV: u8 = 3;
}

fn main() -> ExitCode {
    // Initialize logging
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::from_default_env()
                .add_directive("authstack=info".parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(args),
        Commands::Synth(args) => commands::synth::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    if let Some(stack_err) = e.downcast_ref::<authstack_stacks::StackError>() {
        return match stack_err {
            authstack_stacks::StackError::Config(_) => ExitCodes::MISSING_ENV,
            _ => ExitCodes::GENERAL_ERROR,
        };
    }

    if e.to_string().to_lowercase().contains("unknown recipe") {
        ExitCodes::UNKNOWN_RECIPE
    } else {
        ExitCodes::GENERAL_ERROR
    }
}
