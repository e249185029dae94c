#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the Postbox crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! postbox-derive.workspace = true
//! thiserror.workspace = true
//! ```
//!
//! Examples are `ignore`d because a proc-macro crate cannot use its own macros in doctests.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// Turns a plain enum into a `thiserror` error that fits the workspace conventions.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless the enum already derives them.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>` and for
///   `Result<T, SourceError>` of every variant that wraps a source.
/// * `From<SourceError>` for every variant with a `source` field (or a field marked
///   `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant is present.
/// * A module-private `format_context` helper for use inside `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant has named fields.
/// 3. A variant with a source must also carry `context: Option<Cow<'static, str>>`.
/// 4. Two variants may not wrap the same source type.
///
/// # Example
///
/// ```rust,ignore
/// use postbox_derive::postbox_error;
/// use std::borrow::Cow;
///
/// #[postbox_error]
/// pub enum ManifestError {
///     #[error("Manifest I/O failed{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn write(path: &std::path::Path) -> Result<(), ManifestError> {
///     std::fs::write(path, b"services: {}").context("Writing compose manifest")?;
///     Err("unreachable".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn postbox_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
