use postbox_derive::postbox_error;

#[postbox_error]
pub enum DemoError {
    #[error("IO error: {source}")]
    Io { source: std::io::Error },
}

fn main() {}
