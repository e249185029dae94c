use crate::error::ProvisionError;
use crate::host::Host;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DOCKER_INSTALL_SCRIPT_URL: &str = "https://get.docker.com";
pub const COMPOSE_RELEASE_URL: &str = "https://github.com/docker/compose/releases/latest/download";
pub const COMPOSE_PLUGIN_DIR: &str = "/usr/local/lib/docker/cli-plugins";
const INSTALL_SCRIPT_NAME: &str = "get-docker.sh";

const ENGINE_PROBE: (&str, &[&str]) = ("docker", &["--version"]);
const COMPOSE_PROBE: (&str, &[&str]) = ("docker", &["compose", "version"]);

/// What the installer had to do on this run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InstallOutcome {
    pub engine_installed: bool,
    pub compose_installed: bool,
}

impl InstallOutcome {
    #[must_use]
    pub const fn nothing_to_do(&self) -> bool {
        !self.engine_installed && !self.compose_installed
    }
}

/// Where the engine install script is staged and where the compose plugin lands.
#[derive(Debug, Clone)]
pub struct InstallPaths {
    pub script: PathBuf,
    pub compose_plugin: PathBuf,
}

impl Default for InstallPaths {
    fn default() -> Self {
        Self {
            script: std::env::temp_dir().join(INSTALL_SCRIPT_NAME),
            compose_plugin: Path::new(COMPOSE_PLUGIN_DIR).join("docker-compose"),
        }
    }
}

/// Makes sure the container engine and its compose plugin are available.
///
/// Each component is probed first and only installed when the probe fails, so a second
/// run on a prepared host issues no install commands.
///
/// # Errors
/// Any download or install failure, unchanged.
pub fn ensure_runtime<H: Host>(
    host: &H,
    paths: &InstallPaths,
) -> Result<InstallOutcome, ProvisionError> {
    let mut outcome = InstallOutcome::default();

    if host.probe(ENGINE_PROBE.0, ENGINE_PROBE.1) {
        info!("Container engine already installed");
    } else {
        info!("Container engine not found, installing from {DOCKER_INSTALL_SCRIPT_URL}");
        host.fetch(DOCKER_INSTALL_SCRIPT_URL, &paths.script, false)?;
        let script = paths.script.to_string_lossy();
        host.run("sh", &[script.as_ref()])?;
        outcome.engine_installed = true;
    }

    // The engine script usually ships the plugin, so probe again after installing it.
    if host.probe(COMPOSE_PROBE.0, COMPOSE_PROBE.1) {
        info!("Compose plugin already installed");
    } else {
        let url = compose_download_url(std::env::consts::ARCH);
        info!(
            dest = %paths.compose_plugin.display(),
            "Compose plugin not found, downloading {url}"
        );
        host.fetch(&url, &paths.compose_plugin, true)?;
        outcome.compose_installed = true;
    }

    Ok(outcome)
}

/// Release asset URL of the standalone compose plugin for a Rust target architecture.
#[must_use]
pub fn compose_download_url(arch: &str) -> String {
    let asset_arch = match arch {
        "arm" => "armv7",
        "powerpc64" => "ppc64le",
        other => other,
    };
    format!("{COMPOSE_RELEASE_URL}/docker-compose-linux-{asset_arch}")
}
