//! Go package discovery for goviz.
//!
//! Scans a Go source tree, reads the import declarations of each package and
//! builds an [`ImportGraph`] whose packages can be drawn by `goviz-dot`
//! through [`PackageNode`].

mod graph;
mod parse;
mod relation;

pub use graph::{ImportGraph, Package, PackageId, PackageNode};
pub use parse::{extract_imports, is_go_source, module_path};
pub use relation::parse_relation;
