use crate::error::ProvisionError;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Verifies that every TLS file exists and can be opened for reading.
///
/// All paths are checked before failing so the diagnostic names every missing file.
///
/// # Errors
/// [`ProvisionError::MissingTls`] listing each path that is absent, not a regular file,
/// or unreadable.
pub fn check_tls<'a>(paths: impl IntoIterator<Item = &'a Path>) -> Result<(), ProvisionError> {
    let missing: Vec<PathBuf> =
        paths.into_iter().filter(|path| !is_readable_file(path)).map(Path::to_path_buf).collect();

    if !missing.is_empty() {
        for path in &missing {
            error!(path = %path.display(), "TLS file missing or unreadable");
        }
        return Err(ProvisionError::MissingTls { paths: missing });
    }

    info!("TLS certificate and key found");
    Ok(())
}

fn is_readable_file(path: &Path) -> bool {
    path.is_file() && File::open(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn present_files_pass() {
        let dir = tempfile::tempdir().unwrap();
        let cert = dir.path().join("fullchain.pem");
        let key = dir.path().join("privkey.pem");
        fs::write(&cert, "cert").unwrap();
        fs::write(&key, "key").unwrap();

        check_tls([cert.as_path(), key.as_path()]).unwrap();
    }

    #[test]
    fn every_missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let cert = dir.path().join("fullchain.pem");
        let key = dir.path().join("privkey.pem");

        let err = check_tls([cert.as_path(), key.as_path()]).unwrap_err();
        let ProvisionError::MissingTls { paths } = err else { panic!("unexpected error: {err}") };
        assert_eq!(paths, vec![cert, key]);
    }

    #[test]
    fn directory_is_not_a_certificate() {
        let dir = tempfile::tempdir().unwrap();
        let key = dir.path().join("privkey.pem");
        fs::write(&key, "key").unwrap();

        let err = check_tls([dir.path(), key.as_path()]).unwrap_err();
        let ProvisionError::MissingTls { paths } = err else { panic!("unexpected error: {err}") };
        assert_eq!(paths, vec![dir.path().to_path_buf()]);
    }
}
