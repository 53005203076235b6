//! Plot options shared by the CLI and its callers.

use clap::Args;

use goviz_dot::{DEFAULT_MAX_DEPTH, DEFAULT_SCOPE_LEVEL, RenderOptions};
use goviz_error::{Error, Result};

/// Options controlling how much of the graph is plotted.
#[derive(Args, Debug, Clone)]
pub struct PlotOptions {
    /// Max plot depth of the dependency tree
    #[arg(
        short = 'd',
        long = "depth",
        default_value_t = DEFAULT_MAX_DEPTH as i64,
        allow_negative_numbers = true
    )]
    pub depth: i64,

    /// Only include packages from the immediate project
    #[arg(
        short = 'p',
        long = "ppackage",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub project_packages_only: bool,

    /// Number of leading import path segments that identify the project
    #[arg(long = "scope-level", default_value_t = DEFAULT_SCOPE_LEVEL)]
    pub scope_level: usize,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_MAX_DEPTH as i64,
            project_packages_only: true,
            scope_level: DEFAULT_SCOPE_LEVEL,
        }
    }
}

impl PlotOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_depth(mut self, depth: i64) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_project_packages_only(mut self, only: bool) -> Self {
        self.project_packages_only = only;
        self
    }

    pub fn with_scope_level(mut self, scope_level: usize) -> Self {
        self.scope_level = scope_level;
        self
    }

    /// Validate and convert into plotter options.
    pub fn render_options(&self, reversed: bool) -> Result<RenderOptions> {
        let max_depth = usize::try_from(self.depth).map_err(|_| {
            Error::invalid_argument("-d or --depth should have positive int")
                .with_operation("cli::render_options")
                .with_context("depth", self.depth.to_string())
        })?;

        Ok(RenderOptions::new()
            .with_max_depth(max_depth)
            .with_scope_only(self.project_packages_only)
            .with_reversed(reversed)
            .with_scope_level(self.scope_level))
    }
}
