//! goviz command-line interface.
//!
pub mod options;
pub mod output;

use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use goviz_dot::render_graph;
use goviz_error::{Error, Result};
use goviz_import::parse_relation;

pub use options::PlotOptions;
pub use output::OutputTarget;

/// Options for running goviz.
#[derive(Debug, Clone, Default)]
pub struct GovizOptions {
    pub input: PathBuf,
    pub search: Option<PathBuf>,
    pub output: OutputTarget,
    /// Focus package; when set the graph shows what depends on it.
    pub focus: Option<String>,
    pub include_leaf: bool,
    pub plot: PlotOptions,
}

/// Discover the project and render its import graph.
///
/// Nothing is written here; every failure is reported before any DOT text
/// exists, so callers never emit a partial graph.
pub fn run_main(opts: &GovizOptions) -> Result<String> {
    let render_options = opts.plot.render_options(opts.focus.is_some())?;

    let graph = parse_relation(&opts.input, opts.search.as_deref(), opts.include_leaf)
        .map_err(|e| e.with_operation("cli::run_main"))?;

    let root = graph.root();
    if !root.has_files() {
        return Err(Error::no_source_files(root.package().import_path()));
    }

    let start = match &opts.focus {
        None => root,
        Some(focus) => {
            let node = graph
                .get(focus)
                .ok_or_else(|| Error::package_not_found(focus.as_str()))?;
            if !node.has_files() {
                return Err(Error::no_source_files(focus.as_str()));
            }
            node
        }
    };

    let render_start = Instant::now();
    let rendered = render_graph(&start, &render_options, None);
    info!(
        "Graph rendering: {:.2}s",
        render_start.elapsed().as_secs_f64()
    );

    Ok(rendered.dot)
}
