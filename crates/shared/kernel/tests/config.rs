use config::Map;
use postbox_kernel::config::{ConfigError, Overrides, load_settings};
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> Map<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

/// Switches the working directory for the lifetime of the guard.
struct CwdGuard(PathBuf);

impl CwdGuard {
    fn enter(dir: &Path) -> Self {
        let previous = std::env::current_dir().expect("current dir");
        std::env::set_current_dir(dir).expect("enter dir");
        Self(previous)
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.0);
    }
}

#[test]
#[serial]
fn plain_domain_drives_admin_email() {
    let settings = load_settings(None, &env(&[("DOMAIN", "test.com")]), &Overrides::default())
        .expect("settings load");
    let resolved = settings.resolve();

    assert_eq!(resolved.domain, "test.com");
    assert_eq!(resolved.admin_email, "admin@test.com");
}

#[test]
#[serial]
fn prefixed_env_overrides_nested_keys_and_plain_env() {
    let vars = env(&[
        ("DOMAIN", "plain.com"),
        ("POSTBOX__DOMAIN", "prefixed.com"),
        ("POSTBOX__TLS__CERT", "/certs/chain.pem"),
        ("POSTBOX__HTTPS", "false"),
    ]);
    let settings = load_settings(None, &vars, &Overrides::default()).expect("settings load");

    assert_eq!(settings.domain, "prefixed.com");
    assert_eq!(settings.tls.cert, PathBuf::from("/certs/chain.pem"));
    assert!(!settings.https);
}

#[test]
#[serial]
fn command_line_overrides_win() {
    let overrides = Overrides {
        domain: Some("cli.com".to_owned()),
        admin_email: Some("root@cli.com".to_owned()),
    };
    let vars = env(&[("DOMAIN", "plain.com"), ("POSTBOX__ADMIN_EMAIL", "env@plain.com")]);
    let settings = load_settings(None, &vars, &overrides).expect("settings load");

    assert_eq!(settings.domain, "cli.com");
    assert_eq!(settings.admin_email.as_deref(), Some("root@cli.com"));
}

#[test]
fn file_layer_sits_below_environment() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("postbox.toml");
    fs::write(
        &path,
        r#"
domain = "file.com"
timezone = "Europe/Kyiv"
project_dir = "/srv/poste"

[tls]
key = "/srv/tls/key.pem"
"#,
    )?;

    let settings =
        load_settings(Some(path.as_path()), &env(&[("DOMAIN", "env.com")]), &Overrides::default())?;

    assert_eq!(settings.domain, "env.com");
    assert_eq!(settings.timezone, "Europe/Kyiv");
    assert_eq!(settings.project_dir, PathBuf::from("/srv/poste"));
    assert_eq!(settings.tls.key, PathBuf::from("/srv/tls/key.pem"));
    assert_eq!(settings.tls.cert, PathBuf::from("/etc/ssl/poste/fullchain.pem"));
    Ok(())
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("absent.toml");

    let err =
        load_settings(Some(missing.as_path()), &env(&[]), &Overrides::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Config { .. }));
    assert!(err.to_string().contains("Failed to build config"));
}

#[test]
#[serial]
fn default_file_is_picked_up_from_working_directory() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("postbox.toml"), "domain = \"cwd.com\"\n").expect("write file");
    let _cwd = CwdGuard::enter(dir.path());

    let settings = load_settings(None, &env(&[]), &Overrides::default()).expect("settings load");

    assert_eq!(settings.domain, "cwd.com");
}

#[test]
#[serial]
fn absent_default_file_falls_back_to_defaults() {
    let dir = tempdir().expect("tempdir");
    let _cwd = CwdGuard::enter(dir.path());

    let settings = load_settings(None, &env(&[]), &Overrides::default()).expect("settings load");

    assert_eq!(settings.domain, "example.com");
    assert_eq!(settings.project_dir, PathBuf::from("/opt/poste"));
}
