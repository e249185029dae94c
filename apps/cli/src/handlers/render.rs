use anyhow::Result;
use postbox_domain::config::ResolvedConfig;
use postbox_provision::manifest;

/// Prints the manifest, or writes it to the project directory without launching anything.
///
/// # Errors
/// Returns an error if the manifest cannot be serialized or written.
pub(crate) fn render_manifest(config: &ResolvedConfig, stdout: bool) -> Result<()> {
    if stdout {
        print!("{}", manifest::render(config)?);
    } else {
        let path = manifest::write(config)?;
        println!("📄 Manifest written to {}", path.display());
    }
    Ok(())
}
