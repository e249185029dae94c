//! Compose manifest for the Poste.io service.
//!
//! The document is built from typed structs and serialized with `serde_yaml`. Maps are
//! `BTreeMap`s so the same configuration always produces byte-identical output.

use crate::error::{ProvisionError, ProvisionErrorExt};
use postbox_domain::config::ResolvedConfig;
use postbox_domain::ports::MAIL_PORTS;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::info;

pub const SERVICE_NAME: &str = "poste";
pub const RESTART_POLICY: &str = "unless-stopped";
pub const CONTAINER_DATA_DIR: &str = "/data";
pub const CONTAINER_CERT_PATH: &str = "/data/ssl/server.crt";
pub const CONTAINER_KEY_PATH: &str = "/data/ssl/server.key";
const NETWORK_DRIVER: &str = "bridge";

#[derive(Debug, Serialize)]
pub struct ComposeFile {
    pub services: BTreeMap<String, ComposeService>,
    pub networks: BTreeMap<String, ComposeNetwork>,
}

#[derive(Debug, Serialize)]
pub struct ComposeService {
    pub image: String,
    pub container_name: String,
    pub restart: String,
    pub ports: Vec<String>,
    pub environment: BTreeMap<String, String>,
    pub volumes: Vec<String>,
    pub networks: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ComposeNetwork {
    pub driver: String,
}

impl ComposeFile {
    /// Builds the single-service manifest for a resolved configuration.
    #[must_use]
    pub fn for_config(config: &ResolvedConfig) -> Self {
        let service = ComposeService {
            image: config.image.clone(),
            container_name: config.container_name.clone(),
            restart: RESTART_POLICY.to_owned(),
            ports: MAIL_PORTS.iter().map(|p| p.compose_mapping()).collect(),
            environment: environment(config),
            volumes: vec![
                format!("{}:{CONTAINER_DATA_DIR}", config.data_dir().display()),
                format!("{}:{CONTAINER_CERT_PATH}:ro", config.tls.cert.display()),
                format!("{}:{CONTAINER_KEY_PATH}:ro", config.tls.key.display()),
            ],
            networks: vec![config.network.clone()],
        };

        Self {
            services: BTreeMap::from([(SERVICE_NAME.to_owned(), service)]),
            networks: BTreeMap::from([(
                config.network.clone(),
                ComposeNetwork { driver: NETWORK_DRIVER.to_owned() },
            )]),
        }
    }

    /// # Errors
    /// [`ProvisionError::Manifest`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ProvisionError> {
        serde_yaml::to_string(self).context("Failed to serialize compose manifest")
    }
}

fn environment(config: &ResolvedConfig) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("TZ".to_owned(), config.timezone.clone()),
        ("HTTPS".to_owned(), if config.https { "ON" } else { "OFF" }.to_owned()),
        ("DOMAIN".to_owned(), config.domain.clone()),
        ("ADMIN_EMAIL".to_owned(), config.admin_email.clone()),
    ])
}

/// Renders the manifest without touching the filesystem.
///
/// # Errors
/// [`ProvisionError::Manifest`] if serialization fails.
pub fn render(config: &ResolvedConfig) -> Result<String, ProvisionError> {
    ComposeFile::for_config(config).to_yaml()
}

/// Writes the manifest into the project directory, replacing any previous version.
///
/// Also creates the data directory mounted into the container.
///
/// # Errors
/// [`ProvisionError::Manifest`] or [`ProvisionError::Io`].
pub fn write(config: &ResolvedConfig) -> Result<PathBuf, ProvisionError> {
    let yaml = render(config)?;
    let data_dir = config.data_dir();
    let path = config.manifest_path();

    fs::create_dir_all(&data_dir).context(format!("Failed to create {}", data_dir.display()))?;
    fs::write(&path, yaml).context(format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), "Compose manifest written");
    Ok(path)
}
