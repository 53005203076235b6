use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[cfg(target_env = "msvc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use goviz::{GovizOptions, OutputTarget, PlotOptions, run_main};
use goviz_error::Result;

#[derive(Parser, Debug)]
#[command(
    name = "goviz",
    about = "goviz: plot the import graph of a Go project as Graphviz DOT",
    version
)]
pub struct Cli {
    /// Project directory
    #[arg(short = 'i', long = "input", value_name = "DIR")]
    input: PathBuf,

    /// Output file, or STDOUT / STDERR
    #[arg(short = 'o', long = "output", value_name = "FILE", default_value = "STDOUT")]
    output: OutputTarget,

    /// Focus on the specific package: plot what imports it
    #[arg(short = 'f', long = "focus", value_name = "PACKAGE", default_value = "")]
    focus: String,

    /// Top directory of searching for imported packages
    #[arg(short = 's', long = "search", value_name = "DIR")]
    search: Option<PathBuf>,

    /// Plot leaf packages whose sources cannot be found
    #[arg(short = 'l', long = "leaf", default_value_t = false)]
    leaf: bool,

    #[command(flatten)]
    plot: PlotOptions,
}

impl Cli {
    fn into_options(self) -> GovizOptions {
        GovizOptions {
            input: self.input,
            search: self.search,
            output: self.output,
            focus: Some(self.focus).filter(|focus| !focus.is_empty()),
            include_leaf: self.leaf,
            plot: self.plot,
        }
    }
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = args.into_options();
    let dot = run_main(&opts)?;
    opts.output.write(&dot)?;

    tracing::info!(total_secs = total_start.elapsed().as_secs_f64(), "complete");
    Ok(())
}

pub fn main() -> ExitCode {
    let args = Cli::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            ExitCode::FAILURE
        }
    }
}
