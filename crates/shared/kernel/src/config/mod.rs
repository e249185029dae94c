use config::{Config, ConfigBuilder, Environment, File, Map, builder::DefaultState};
use postbox_domain::config::Settings;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Base name of the optional settings file looked up in the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "postbox";
/// Prefix of structured environment overrides (`POSTBOX__TLS__CERT`).
pub const ENV_PREFIX: &str = "POSTBOX";
pub const ENV_SEPARATOR: &str = "__";
/// Unprefixed variables accepted for compatibility with plain shell usage.
pub const PLAIN_ENV_KEYS: &[&str] = &["DOMAIN", "ADMIN_EMAIL"];

#[postbox_derive::postbox_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Values given on the command line. They take precedence over every other layer.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub domain: Option<String>,
    pub admin_email: Option<String>,
}

/// Loads provisioning settings from all configuration layers.
///
/// Layers, lowest precedence first:
/// 1. **Defaults** from [`Settings::default`].
/// 2. **File**: `path` when given (must exist), otherwise an optional `postbox.{toml,...}`
///    in the working directory.
/// 3. **Plain environment**: `DOMAIN` and `ADMIN_EMAIL`.
/// 4. **Prefixed environment**: `POSTBOX__<KEY>`, nested with `__`
///    (e.g. `POSTBOX__TLS__KEY` maps to `tls.key`).
/// 5. **Overrides** from the command line.
///
/// The environment is passed in rather than read from the process so callers decide what
/// is visible.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing or unreadable, or if the
/// merged values do not deserialize into [`Settings`].
pub fn load_settings(
    path: Option<&Path>,
    env: &Map<String, String>,
    overrides: &Overrides,
) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = match path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            builder.add_source(File::from(path).required(true))
        },
        None => builder.add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false)),
    };

    builder = builder
        .add_source(Environment::default().source(Some(plain_env(env))))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .source(Some(env.clone())),
        );

    let settings = apply_overrides(builder, overrides)?
        .build()
        .context("Failed to build config")?
        .try_deserialize::<Settings>()
        .context("Failed to deserialize config")?;

    debug!(
        domain = %settings.domain,
        project_dir = %settings.project_dir.display(),
        "Config loaded"
    );
    Ok(settings)
}

fn plain_env(env: &Map<String, String>) -> Map<String, String> {
    env.iter()
        .filter(|(key, _)| PLAIN_ENV_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.to_lowercase(), value.clone()))
        .collect()
}

fn apply_overrides(
    builder: ConfigBuilder<DefaultState>,
    overrides: &Overrides,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder
        .set_override_option("domain", overrides.domain.clone())
        .context("Invalid --domain override")?
        .set_override_option("admin_email", overrides.admin_email.clone())
        .context("Invalid --admin-email override")?;
    Ok(builder)
}
