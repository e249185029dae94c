use anyhow::Result;
use postbox_domain::config::ResolvedConfig;
use postbox_provision::SystemHost;
use postbox_provision::compose::ComposeProject;

/// # Errors
/// Returns an error if the manifest is missing or `docker compose down` fails.
pub(crate) fn stop(config: &ResolvedConfig, volumes: bool) -> Result<()> {
    ComposeProject::new(&SystemHost, config.manifest_path()).down(volumes)?;
    println!("🛑 Mail server stopped.");
    Ok(())
}

/// # Errors
/// Returns an error if the manifest is missing or `docker compose logs` fails.
pub(crate) fn logs(config: &ResolvedConfig, follow: bool) -> Result<()> {
    ComposeProject::new(&SystemHost, config.manifest_path()).logs(follow)?;
    Ok(())
}
