//! The seam between the pipeline and the machine it provisions.
//!
//! Every external program, probe and download goes through [`Host`], so stages can be
//! exercised against a recording fake without touching the real system.

use crate::error::{ProvisionError, ProvisionErrorExt};
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

const USER_AGENT: &str = concat!("postbox/", env!("CARGO_PKG_VERSION"));

pub trait Host {
    /// Runs a probe command silently; `true` only if it started and exited successfully.
    fn probe(&self, program: &str, args: &[&str]) -> bool;

    /// Runs a command with inherited stdio.
    ///
    /// # Errors
    /// [`ProvisionError::Io`] if the program cannot be started,
    /// [`ProvisionError::CommandFailed`] if it exits unsuccessfully.
    fn run(&self, program: &str, args: &[&str]) -> Result<(), ProvisionError>;

    /// Downloads `url` to `dest`, creating parent directories.
    ///
    /// # Errors
    /// [`ProvisionError::Download`] for HTTP failures, [`ProvisionError::Io`] for
    /// filesystem failures.
    fn fetch(&self, url: &str, dest: &Path, executable: bool) -> Result<(), ProvisionError>;
}

/// [`Host`] backed by `std::process` and a blocking `reqwest` client.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl Host for SystemHost {
    fn probe(&self, program: &str, args: &[&str]) -> bool {
        Command::new(program)
            .args(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|status| status.success())
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<(), ProvisionError> {
        let command = command_line(program, args);
        debug!(%command, "Running command");

        let status = Command::new(program)
            .args(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .context(format!("Failed to execute {program}. Is it installed and in your PATH?"))?;

        if !status.success() {
            return Err(ProvisionError::CommandFailed { command, code: status.code() });
        }
        Ok(())
    }

    fn fetch(&self, url: &str, dest: &Path, executable: bool) -> Result<(), ProvisionError> {
        debug!(url, dest = %dest.display(), "Downloading");

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .context(format!("Failed to create {}", parent.display()))?;
        }

        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        let mut response = client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .context(format!("GET {url}"))?;

        let mut file =
            fs::File::create(dest).context(format!("Failed to create {}", dest.display()))?;
        response.copy_to(&mut file).context(format!("Failed to save {url}"))?;

        if executable {
            make_executable(dest)?;
        }
        Ok(())
    }
}

/// Renders a command the way it would be typed, for logs and error messages.
#[must_use]
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>().join(" ")
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), ProvisionError> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .context(format!("Failed to mark {} executable", path.display()))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), ProvisionError> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_joins_program_and_args() {
        assert_eq!(command_line("docker", &["compose", "version"]), "docker compose version");
        assert_eq!(command_line("ufw", &[]), "ufw");
    }

    #[test]
    fn probe_of_missing_program_is_false() {
        assert!(!SystemHost.probe("postbox-definitely-not-installed", &["--version"]));
    }

    #[test]
    fn run_of_missing_program_is_io_error() {
        let err = SystemHost.run("postbox-definitely-not-installed", &[]).unwrap_err();
        assert!(matches!(err, ProvisionError::Io { .. }));
        assert!(err.to_string().contains("Is it installed"));
    }

    #[cfg(unix)]
    #[test]
    fn run_reports_exit_code() {
        let err = SystemHost.run("sh", &["-c", "exit 3"]).unwrap_err();
        assert!(matches!(err, ProvisionError::CommandFailed { code: Some(3), .. }));
        assert_eq!(err.exit_code(), 3);
    }
}
