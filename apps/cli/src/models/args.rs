//! # CLI Argument Definitions
//!
//! Global flags feed the configuration layers; subcommands select what to do with the
//! resolved configuration. Running `postbox` with no subcommand provisions the host.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "postbox")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Provision a single-host Poste.io mail server")]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) global: GlobalArgs,

    #[command(subcommand)]
    pub(crate) command: Option<AppCommands>,
}

#[derive(Debug, Args)]
pub(crate) struct GlobalArgs {
    /// Settings file (TOML). Defaults to an optional `postbox.toml` in the working directory
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Mail domain; overrides `DOMAIN` and the settings file
    #[arg(long, global = true)]
    pub(crate) domain: Option<String>,

    /// Administrator email; defaults to `admin@<domain>`
    #[arg(long, global = true)]
    pub(crate) admin_email: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,

    /// Also write JSON logs to this directory
    #[arg(long, global = true, env = "POSTBOX_LOG_DIR")]
    pub(crate) log_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum AppCommands {
    /// Check TLS files, install the runtime, write the manifest and start the server
    Install(InstallArgs),
    /// Only verify that the TLS certificate and key are present
    Check {},
    /// Print or write the compose manifest without starting anything
    Render {
        /// Print the manifest instead of writing it to the project directory
        #[arg(long)]
        stdout: bool,
    },
    /// Stop the mail server
    Down {
        /// Also remove named volumes
        #[arg(long)]
        volumes: bool,
    },
    /// Show mail server logs
    Logs {
        /// Follow log output
        #[arg(short, long)]
        follow: bool,
    },
}

#[derive(Debug, Default, Args)]
pub(crate) struct InstallArgs {
    /// Do not probe for or install the container runtime
    #[arg(long)]
    pub(crate) skip_install: bool,

    /// Leave the host firewall untouched
    #[arg(long)]
    pub(crate) skip_firewall: bool,
}
