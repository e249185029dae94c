use std::borrow::Cow;
use std::path::PathBuf;

/// A specialized [`ProvisionError`] enum of this crate.
#[postbox_derive::postbox_error]
pub enum ProvisionError {
    #[error("Required TLS file(s) missing or unreadable: {}", join_paths(.paths))]
    MissingTls { paths: Vec<PathBuf> },

    #[error("Command `{command}` {}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Download failed{}: {source}", format_context(.context))]
    Download { source: reqwest::Error, context: Option<Cow<'static, str>> },

    #[error("Manifest serialization failed{}: {source}", format_context(.context))]
    Manifest { source: serde_yaml::Error, context: Option<Cow<'static, str>> },

    #[error("Compose manifest not found at {}", .path.display())]
    ManifestMissing { path: PathBuf },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ProvisionError {
    /// Process exit status for this error.
    ///
    /// A failed external command passes its own exit code through; everything else,
    /// including missing TLS material, exits with `1`.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::CommandFailed { code: Some(code), .. } => {
                u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1)
            },
            _ => 1,
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

fn describe_exit(code: &Option<i32>) -> String {
    code.map_or_else(
        || "was terminated by a signal".to_owned(),
        |code| format!("failed with exit code {code}"),
    )
}
