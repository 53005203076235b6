//! Graph plotting for goviz: walks a dependency graph and emits Graphviz DOT.
//!
//! The plotter is generic over [`DotNode`], so any graph that can name its
//! vertices and list their forward and backward neighbours can be drawn.
//! Traversal is depth first in adjacency order, bounded by a depth budget,
//! and optionally limited to the root's project [`Scope`].
//!
//! # Module Structure
//!
//! - [`dot`]: DOT quoting and the line-oriented output buffer
//! - [`scope`]: project-prefix membership test
//! - [`context`]: visited sets and depth budget for one render
//! - [`plot`]: the traversal itself

pub mod context;
pub mod dot;
mod node;
pub mod plot;
pub mod scope;

pub use context::{PlotCtx, Visited};
pub use dot::{DotBuilder, quote};
pub use node::DotNode;
pub use plot::{DEFAULT_MAX_DEPTH, DotWriter, RenderOptions, Rendered, render_graph};
pub use scope::{DEFAULT_SCOPE_LEVEL, Scope};
