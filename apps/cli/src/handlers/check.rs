use anyhow::Result;
use postbox_domain::config::ResolvedConfig;
use postbox_provision::preflight;

/// # Errors
/// Returns [`postbox_provision::ProvisionError::MissingTls`] naming every missing file.
pub(crate) fn check_tls(config: &ResolvedConfig) -> Result<()> {
    preflight::check_tls(config.tls_paths())?;

    println!("✅ TLS certificate: {}", config.tls.cert.display());
    println!("✅ TLS key:         {}", config.tls.key.display());
    Ok(())
}
