use crate::error::ProvisionError;
use crate::host::Host;
use std::path::{Path, PathBuf};
use tracing::info;

/// `docker compose` bound to one manifest file.
#[derive(Debug)]
pub struct ComposeProject<'h, H: Host> {
    host: &'h H,
    file_path: PathBuf,
}

impl<'h, H: Host> ComposeProject<'h, H> {
    pub fn new(host: &'h H, file_path: impl Into<PathBuf>) -> Self {
        Self { host, file_path: file_path.into() }
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Runs `docker compose -f <manifest> <args>`.
    ///
    /// # Errors
    /// [`ProvisionError::ManifestMissing`] if the manifest does not exist, otherwise any
    /// error from the host.
    pub fn run(&self, args: &[&str]) -> Result<(), ProvisionError> {
        if !self.file_path.exists() {
            return Err(ProvisionError::ManifestMissing { path: self.file_path.clone() });
        }

        let file = self.file_path.to_string_lossy().into_owned();
        let mut full = vec!["compose", "-f", file.as_str()];
        full.extend_from_slice(args);
        self.host.run("docker", &full)
    }

    /// Pulls the image, then starts the service detached. No readiness polling.
    ///
    /// # Errors
    /// The first failing compose command.
    pub fn launch(&self) -> Result<(), ProvisionError> {
        info!("Pulling container image...");
        self.run(&["pull"])?;
        info!("Starting mail server...");
        self.run(&["up", "-d", "--remove-orphans"])
    }

    /// # Errors
    /// Returns an error if the compose command fails.
    pub fn down(&self, volumes: bool) -> Result<(), ProvisionError> {
        info!("Stopping mail server...");
        let mut args = vec!["down"];
        if volumes {
            args.push("-v");
        }
        self.run(&args)
    }

    /// # Errors
    /// Returns an error if the compose command fails.
    pub fn logs(&self, follow: bool) -> Result<(), ProvisionError> {
        let mut args = vec!["logs"];
        if follow {
            args.push("-f");
        }
        self.run(&args)
    }
}
