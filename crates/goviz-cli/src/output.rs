//! Output destination for the generated DOT text.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::info;

use goviz_error::{Error, Result};

/// Where the graph is written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
    File(PathBuf),
}

impl FromStr for OutputTarget {
    type Err = std::convert::Infallible;

    /// `STDOUT` and `STDERR` name the standard streams; anything else is a path.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "STDOUT" => Self::Stdout,
            "STDERR" => Self::Stderr,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

impl OutputTarget {
    /// Write the full graph text to the target.
    pub fn write(&self, text: &str) -> Result<()> {
        match self {
            Self::Stdout => write_stream(&mut std::io::stdout().lock(), text),
            Self::Stderr => write_stream(&mut std::io::stderr().lock(), text),
            Self::File(path) => {
                fs::write(path, text).map_err(|e| {
                    Error::from(e)
                        .with_operation("cli::write_output")
                        .with_context("path", path.display().to_string())
                })?;
                info!(path = %path.display(), "output written");
                Ok(())
            }
        }
    }
}

fn write_stream(stream: &mut impl Write, text: &str) -> Result<()> {
    stream
        .write_all(text.as_bytes())
        .and_then(|()| stream.flush())
        .map_err(|e| Error::from(e).with_operation("cli::write_output"))
}
