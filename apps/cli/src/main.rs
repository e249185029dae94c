#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

mod handlers;
mod models;

use crate::handlers::{check, install, render, service};
use crate::models::args::{AppCommands, Cli, GlobalArgs, InstallArgs};

use anyhow::{Context, Result};
use clap::Parser;
use config::Map;
use postbox_domain::config::ResolvedConfig;
use postbox_kernel::config::{Overrides, load_settings};
use postbox_logger::{LevelFilter, Logger};
use postbox_provision::ProvisionError;
use std::process::ExitCode;
use tracing::debug;

const APP_NAME: &str = "postbox";

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _logger = match init_logger(&cli.global) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        },
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code(&err))
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli.global)?;
    debug!(?config, "Configuration resolved");

    match cli.command.unwrap_or(AppCommands::Install(InstallArgs::default())) {
        AppCommands::Install(args) => install::provision(&config, &args)?,
        AppCommands::Check {} => check::check_tls(&config)?,
        AppCommands::Render { stdout } => render::render_manifest(&config, stdout)?,
        AppCommands::Down { volumes } => service::stop(&config, volumes)?,
        AppCommands::Logs { follow } => service::logs(&config, follow)?,
    }

    Ok(())
}

fn resolve_config(global: &GlobalArgs) -> Result<ResolvedConfig> {
    let env = process_env();
    let overrides =
        Overrides { domain: global.domain.clone(), admin_email: global.admin_email.clone() };

    let settings = load_settings(global.config.as_deref(), &env, &overrides)
        .context("Failed to load configuration")?;
    Ok(settings.resolve())
}

/// Process environment as UTF-8 pairs. Variables that are not valid UTF-8 are skipped.
fn process_env() -> Map<String, String> {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

fn init_logger(global: &GlobalArgs) -> Result<Logger> {
    let level = match global.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let builder = Logger::builder().name(APP_NAME).level(level);

    let logger = match &global.log_dir {
        Some(dir) => builder.path(dir).json().init(),
        None => builder.init(),
    }
    .context("Failed to initialize logging")?;
    Ok(logger)
}

/// Failed external commands pass their exit code through; everything else exits with 1.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ProvisionError>().map_or(1, ProvisionError::exit_code)
}
