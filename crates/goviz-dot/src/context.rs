//! Per-render traversal bookkeeping.

use std::collections::HashSet;

/// Nodes expanded and edges emitted during one render.
///
/// Shared by every depth level of the walk; dropped when the render ends.
#[derive(Debug, Default)]
pub struct Visited {
    nodes: HashSet<String>,
    edges: HashSet<(String, String)>,
}

impl Visited {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Traversal state at one depth level.
///
/// Holds a mutable borrow of the render's [`Visited`] sets plus the remaining
/// depth budget. [`PlotCtx::deeper`] reborrows the same sets with a budget one
/// lower, so a child branch can never change its parent's or a sibling's
/// budget.
pub struct PlotCtx<'v> {
    visited: &'v mut Visited,
    level: usize,
}

impl<'v> PlotCtx<'v> {
    pub fn new(visited: &'v mut Visited, level: usize) -> Self {
        Self { visited, level }
    }

    /// Remaining depth budget.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn is_plotted_node(&self, name: &str) -> bool {
        self.visited.nodes.contains(name)
    }

    pub fn set_plotted(&mut self, name: &str) {
        if !self.visited.nodes.contains(name) {
            self.visited.nodes.insert(name.to_string());
        }
    }

    /// Record the directed edge `from -> to`.
    ///
    /// Returns true only the first time a given ordered pair is seen, so
    /// callers emit the edge exactly when this returns true.
    pub fn mark_edge(&mut self, from: &str, to: &str) -> bool {
        self.visited
            .edges
            .insert((from.to_string(), to.to_string()))
    }

    pub fn is_depth_over(&self) -> bool {
        self.level == 0
    }

    /// State for the next level down: same visited sets, budget minus one.
    pub fn deeper(&mut self) -> PlotCtx<'_> {
        PlotCtx {
            visited: &mut *self.visited,
            level: self.level.saturating_sub(1),
        }
    }
}
