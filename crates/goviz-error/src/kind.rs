//! Error kinds for goviz operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on `ErrorKind` to decide what to tell the user; the plotter
/// itself never fails, so every kind here belongs to discovery or the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid argument or option value
    InvalidArgument,

    // =========================================================================
    // Discovery errors
    // =========================================================================
    /// A package has no Go source files
    NoSourceFiles,

    /// A package was requested by import path but is not in the graph
    PackageNotFound,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File or directory not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    /// Directory traversal failed
    TraversalFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}
