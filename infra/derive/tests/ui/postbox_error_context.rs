use postbox_derive::postbox_error;
use std::borrow::Cow;

#[postbox_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read_missing() -> Result<String, DemoError> {
    let text = std::fs::read_to_string("/definitely/not/here").context("Reading manifest")?;
    Ok(text)
}

fn relabel() -> Result<(), DemoError> {
    Err(DemoError::from(String::from("first"))).context("second")
}

fn main() {
    let err = read_missing().unwrap_err();
    assert!(err.to_string().starts_with("IO error (Reading manifest): "));

    let err = relabel().unwrap_err();
    assert_eq!(err.to_string(), "Internal error (second): first");
}
