//! Kernel utilities shared by the Postbox crates.
//! Keep this crate lightweight; today it owns configuration loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use postbox_kernel::config::{Overrides, load_settings};
//!
//! let env = std::env::vars().collect();
//! let settings = load_settings(None, &env, &Overrides::default()).unwrap();
//! let resolved = settings.resolve();
//! println!("{}", resolved.hostname);
//! ```
pub mod config;

pub use postbox_domain as domain;
