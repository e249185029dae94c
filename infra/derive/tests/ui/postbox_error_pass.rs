use postbox_derive::postbox_error;
use std::borrow::Cow;

#[postbox_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing files: {count}")]
    Missing { count: usize },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: DemoError = "boom".into();
    assert_eq!(err.to_string(), "Internal error: boom");

    let err = DemoError::Missing { count: 2 };
    assert_eq!(err.to_string(), "Missing files: 2");
}
