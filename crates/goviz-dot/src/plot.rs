//! Depth-limited traversal that emits DOT statements.

use tracing::{debug, trace};

use crate::context::{PlotCtx, Visited};
use crate::dot::DotBuilder;
use crate::node::DotNode;
use crate::scope::{DEFAULT_SCOPE_LEVEL, Scope};

/// Default number of edges followed from the root.
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// Options for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Depth budget; 0 draws nothing at all.
    pub max_depth: usize,
    /// Only draw nodes inside the root's project scope.
    pub scope_only: bool,
    /// Walk backward edges (dependents) instead of forward edges.
    pub reversed: bool,
    /// Segments used when a scope has to be established from the root.
    pub scope_level: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            scope_only: true,
            reversed: false,
            scope_level: DEFAULT_SCOPE_LEVEL,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_scope_only(mut self, scope_only: bool) -> Self {
        self.scope_only = scope_only;
        self
    }

    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    pub fn with_scope_level(mut self, scope_level: usize) -> Self {
        self.scope_level = scope_level;
        self
    }
}

/// Result of a render.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub dot: String,
    /// Scope used by the render. `None` unless `scope_only` was set. Pass it
    /// to later renders that should share the same project boundary.
    pub scope: Option<Scope>,
}

/// Plots one graph into a DOT string.
pub struct DotWriter {
    options: RenderOptions,
    scope: Option<Scope>,
    dot: DotBuilder,
}

impl DotWriter {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            scope: None,
            dot: DotBuilder::new("main"),
        }
    }

    /// Use an already established scope instead of deriving one from the root.
    pub fn with_scope(mut self, scope: Option<Scope>) -> Self {
        self.scope = scope;
        self
    }

    /// Walk from `root` and return the finished graph.
    pub fn plot_graph<N: DotNode>(mut self, root: &N) -> Rendered {
        let mut visited = Visited::new();
        let mut ctx = PlotCtx::new(&mut visited, self.options.max_depth);
        self.plot_node(&mut ctx, root);

        debug!(
            root = root.name(),
            nodes = visited.node_count(),
            edges = visited.edge_count(),
            "graph plotted"
        );

        Rendered {
            dot: self.dot.build(),
            scope: self.scope,
        }
    }

    fn plot_node<N: DotNode>(&mut self, ctx: &mut PlotCtx<'_>, node: &N) {
        if self.options.scope_only {
            let level = self.options.scope_level;
            let scope = self
                .scope
                .get_or_insert_with(|| Scope::with_level(node.name(), level));
            if !scope.contains(node.name()) {
                trace!(node = node.name(), "out of scope");
                return;
            }
        }

        if ctx.is_plotted_node(node.name()) {
            return;
        }
        if ctx.is_depth_over() {
            trace!(node = node.name(), "depth budget exhausted");
            return;
        }

        ctx.set_plotted(node.name());
        self.plot_node_style(node);

        for dep in self.dependencies(node) {
            if !self.is_within_scope(dep.name()) {
                continue;
            }
            self.plot_edge(ctx, node, &dep);
            self.plot_node(&mut ctx.deeper(), &dep);
        }
    }

    fn dependencies<N: DotNode>(&self, node: &N) -> Vec<N> {
        if self.options.reversed {
            node.parents()
        } else {
            node.children()
        }
    }

    fn is_within_scope(&self, name: &str) -> bool {
        if !self.options.scope_only {
            return true;
        }
        self.scope.as_ref().is_none_or(|scope| scope.contains(name))
    }

    fn plot_node_style<N: DotNode>(&mut self, node: &N) {
        debug!(node = node.name(), "plot node");
        self.dot
            .comment(&format!("plot {}", node.name()))
            .node(node.name(), node.shape(), node.label(), node.style());
    }

    fn plot_edge<N: DotNode>(&mut self, ctx: &mut PlotCtx<'_>, from: &N, to: &N) {
        if !ctx.mark_edge(from.name(), to.name()) {
            return;
        }
        let dir = if self.options.reversed { "back" } else { "forward" };
        trace!(from = from.name(), to = to.name(), dir, "plot edge");
        self.dot.edge(from.name(), to.name(), dir);
    }
}

/// Render the graph reachable from `root` as DOT text.
///
/// `scope` is an already established project scope, if any. When `scope_only`
/// is set and `scope` is `None`, a scope is derived from `root` and returned in
/// [`Rendered::scope`].
pub fn render_graph<N: DotNode>(
    root: &N,
    options: &RenderOptions,
    scope: Option<Scope>,
) -> Rendered {
    DotWriter::new(*options).with_scope(scope).plot_graph(root)
}
