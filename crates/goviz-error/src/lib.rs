//! # goviz-error
//!
//! Unified error handling for goviz.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., NoSourceFiles, PackageNotFound)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use goviz_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::NoSourceFiles, "no go files")
//!         .with_operation("import::parse_relation")
//!         .with_context("dir", "cmd/server"))
//! }
//! ```
//!
//! ## Principles
//!
//! - Fallible functions return `Result<T, goviz_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using goviz Error
pub type Result<T> = std::result::Result<T, Error>;
