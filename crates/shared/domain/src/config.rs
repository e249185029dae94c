use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_DOMAIN: &str = "example.com";
pub const DEFAULT_TIMEZONE: &str = "Etc/UTC";
pub const DEFAULT_PROJECT_DIR: &str = "/opt/poste";
pub const DEFAULT_IMAGE: &str = "analogic/poste.io:latest";
pub const DEFAULT_CONTAINER_NAME: &str = "poste";
pub const DEFAULT_NETWORK: &str = "poste-net";
pub const DEFAULT_TLS_CERT: &str = "/etc/ssl/poste/fullchain.pem";
pub const DEFAULT_TLS_KEY: &str = "/etc/ssl/poste/privkey.pem";

pub const MANIFEST_FILE_NAME: &str = "docker-compose.yml";
pub const DATA_DIR_NAME: &str = "data";
pub const HOSTNAME_PREFIX: &str = "mail";

/// Raw provisioning settings as read from defaults, file, environment and flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub domain: String,
    pub admin_email: Option<String>,
    pub timezone: String,
    pub project_dir: PathBuf,
    pub image: String,
    pub container_name: String,
    pub network: String,
    /// Forces HTTPS redirects inside the container.
    pub https: bool,
    pub tls: TlsConfig,
}

/// Pre-issued certificate chain and private key. Never generated here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TlsConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_owned(),
            admin_email: None,
            timezone: DEFAULT_TIMEZONE.to_owned(),
            project_dir: PathBuf::from(DEFAULT_PROJECT_DIR),
            image: DEFAULT_IMAGE.to_owned(),
            container_name: DEFAULT_CONTAINER_NAME.to_owned(),
            network: DEFAULT_NETWORK.to_owned(),
            https: true,
            tls: TlsConfig::default(),
        }
    }
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from(DEFAULT_TLS_CERT), key: PathBuf::from(DEFAULT_TLS_KEY) }
    }
}

/// Settings with every derived value filled in. Read-only for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub domain: String,
    pub hostname: String,
    pub admin_email: String,
    pub timezone: String,
    pub project_dir: PathBuf,
    pub image: String,
    pub container_name: String,
    pub network: String,
    pub https: bool,
    pub tls: TlsConfig,
}

impl Settings {
    /// Derives hostname and admin email, treating blank values as unset.
    ///
    /// `DOMAIN=test.com` with no admin email resolves to `admin@test.com`.
    #[must_use]
    pub fn resolve(self) -> ResolvedConfig {
        let domain = non_blank(Some(self.domain)).unwrap_or_else(|| DEFAULT_DOMAIN.to_owned());
        let admin_email =
            non_blank(self.admin_email).unwrap_or_else(|| format!("admin@{domain}"));
        let timezone =
            non_blank(Some(self.timezone)).unwrap_or_else(|| DEFAULT_TIMEZONE.to_owned());

        ResolvedConfig {
            hostname: format!("{HOSTNAME_PREFIX}.{domain}"),
            domain,
            admin_email,
            timezone,
            project_dir: self.project_dir,
            image: self.image,
            container_name: self.container_name,
            network: self.network,
            https: self.https,
            tls: self.tls,
        }
    }
}

impl ResolvedConfig {
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.project_dir.join(MANIFEST_FILE_NAME)
    }

    /// Host directory mounted as the container's `/data` volume.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.project_dir.join(DATA_DIR_NAME)
    }

    #[must_use]
    pub fn admin_url(&self) -> String {
        format!("https://{}/admin/", self.hostname)
    }

    #[must_use]
    pub fn webmail_url(&self) -> String {
        format!("https://{}/webmail/", self.hostname)
    }

    #[must_use]
    pub fn tls_paths(&self) -> [&Path; 2] {
        [self.tls.cert.as_path(), self.tls.key.as_path()]
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
