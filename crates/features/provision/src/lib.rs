//! # Provisioning Pipeline
//!
//! Brings a single host from "TLS files on disk" to "Poste.io running in a container".
//! The mail server itself lives entirely in the container image; this crate only prepares
//! the host and hands over.
//!
//! ## Stages
//!
//! Stages run once, in order, and the first error aborts the run. Nothing is rolled back.
//!
//! 1.  **[`preflight`]**: certificate and key must exist and be readable.
//! 2.  **[`installer`]**: container engine and compose plugin, installed only if missing.
//! 3.  **[`manifest`]**: compose file written to the project directory (overwritten).
//! 4.  **[`firewall`]**: mail ports opened with ufw or firewalld; best-effort, never fatal.
//! 5.  **[`compose`]**: image pulled and service started detached.
//!
//! All side effects on the machine go through the [`Host`] trait.
//!
//! ```rust,no_run
//! use postbox_domain::config::Settings;
//! use postbox_provision::{Options, Provisioner, SystemHost};
//!
//! let config = Settings::default().resolve();
//! let report = Provisioner::new(&config, &SystemHost, Options::default()).run()?;
//! println!("{}", postbox_provision::report::summary(&config, &report));
//! # Ok::<(), postbox_provision::ProvisionError>(())
//! ```

pub mod compose;
mod error;
pub mod firewall;
pub mod host;
pub mod installer;
pub mod manifest;
pub mod preflight;
pub mod report;

pub use crate::error::{ProvisionError, ProvisionErrorExt};
pub use crate::host::{Host, SystemHost};

use crate::compose::ComposeProject;
use crate::firewall::FirewallOutcome;
use crate::installer::{InstallOutcome, InstallPaths};
use postbox_domain::config::ResolvedConfig;
use postbox_domain::ports::MAIL_PORTS;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Stage toggles for a provisioning run.
#[derive(Debug, Default, Clone)]
pub struct Options {
    pub skip_install: bool,
    pub skip_firewall: bool,
    pub install_paths: InstallPaths,
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    pub manifest_path: PathBuf,
    /// `None` when installation was skipped.
    pub install: Option<InstallOutcome>,
    pub firewall: FirewallOutcome,
}

#[derive(Debug)]
pub struct Provisioner<'a, H: Host> {
    config: &'a ResolvedConfig,
    host: &'a H,
    options: Options,
}

impl<'a, H: Host> Provisioner<'a, H> {
    pub const fn new(config: &'a ResolvedConfig, host: &'a H, options: Options) -> Self {
        Self { config, host, options }
    }

    /// Runs the precondition check alone.
    ///
    /// # Errors
    /// [`ProvisionError::MissingTls`] naming every missing file.
    pub fn check(&self) -> Result<(), ProvisionError> {
        preflight::check_tls(self.config.tls_paths())
    }

    /// Runs every stage in order.
    ///
    /// # Errors
    /// The first stage error. Missing TLS files stop the run before any host command is
    /// issued; firewall problems never do.
    #[instrument(skip(self), fields(domain = %self.config.domain))]
    pub fn run(&self) -> Result<ProvisionReport, ProvisionError> {
        self.check()?;

        let install = if self.options.skip_install {
            info!("Runtime installation skipped");
            None
        } else {
            Some(installer::ensure_runtime(self.host, &self.options.install_paths)?)
        };

        let manifest_path = manifest::write(self.config)?;

        let firewall = if self.options.skip_firewall {
            info!("Firewall configuration skipped");
            FirewallOutcome::Skipped
        } else {
            firewall::open_ports(self.host, MAIL_PORTS)
        };

        ComposeProject::new(self.host, &manifest_path).launch()?;
        info!("Mail server started");

        Ok(ProvisionReport { manifest_path, install, firewall })
    }
}
