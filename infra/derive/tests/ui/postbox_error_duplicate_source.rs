use postbox_derive::postbox_error;

#[postbox_error]
pub enum DemoError {
    #[error("read failed: {source}")]
    Read { source: std::io::Error, context: Option<std::borrow::Cow<'static, str>> },

    #[error("write failed: {source}")]
    Write { source: std::io::Error, context: Option<std::borrow::Cow<'static, str>> },
}

fn main() {}
