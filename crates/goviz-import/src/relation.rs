//! Build an [`ImportGraph`] from a Go source tree.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use ignore::WalkBuilder;
use tracing::{debug, info};

use goviz_error::{Error, Result};

use crate::graph::{ImportGraph, PackageId};
use crate::parse::{extract_imports, is_go_source, module_path};

const GO_MOD: &str = "go.mod";
const VENDOR_DIR: &str = "vendor";

/// Maps import paths to package directories.
#[derive(Debug)]
struct Resolver {
    input_dir: PathBuf,
    search_dir: Option<PathBuf>,
    module: Option<String>,
}

impl Resolver {
    fn new(input_dir: &Path, search_dir: Option<&Path>) -> Result<Self> {
        let go_mod = input_dir.join(GO_MOD);
        let module = if go_mod.is_file() {
            let text = fs::read_to_string(&go_mod).map_err(|e| {
                Error::from(e)
                    .with_operation("import::read_go_mod")
                    .with_context("file", go_mod.display().to_string())
            })?;
            module_path(&text)
        } else {
            None
        };

        Ok(Self {
            input_dir: input_dir.to_path_buf(),
            search_dir: search_dir.map(Path::to_path_buf),
            module,
        })
    }

    /// Import path of the input directory itself.
    fn root_path(&self) -> String {
        if let Some(module) = &self.module {
            return module.clone();
        }
        if let Some(rel) = self
            .search_dir
            .as_deref()
            .and_then(|search| self.input_dir.strip_prefix(search).ok())
            .filter(|rel| !rel.as_os_str().is_empty())
        {
            return path_to_import(rel);
        }
        self.input_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_string())
    }

    fn resolve(&self, import_path: &str) -> Option<PathBuf> {
        if let Some(module) = &self.module {
            if import_path == module {
                return Some(self.input_dir.clone());
            }
            if let Some(rest) = import_path
                .strip_prefix(module.as_str())
                .and_then(|rest| rest.strip_prefix('/'))
            {
                return Some(self.input_dir.join(rest)).filter(|dir| dir.is_dir());
            }
        }

        let vendored = self.input_dir.join(VENDOR_DIR).join(import_path);
        if vendored.is_dir() {
            return Some(vendored);
        }

        self.search_dir
            .as_deref()
            .map(|search| search.join(import_path))
            .filter(|dir| dir.is_dir())
    }
}

/// Absolute form of `dir`, so `.` and `..` name the directory they point at.
fn canonical_dir(dir: &Path) -> Result<PathBuf> {
    fs::canonicalize(dir).map_err(|e| {
        Error::from(e)
            .with_operation("import::canonical_dir")
            .with_context("path", dir.display().to_string())
    })
}

fn path_to_import(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Go source files directly inside `dir`, sorted by path.
///
/// Hidden and ignored files are skipped, as are `_test.go` files.
fn list_go_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut builder = WalkBuilder::new(dir);
    builder
        .standard_filters(true)
        .follow_links(false)
        .max_depth(Some(1));

    for entry in builder.build() {
        let entry = entry.map_err(|e| {
            Error::traversal_failed(format!("failed to walk directory {}: {e}", dir.display()))
                .with_operation("import::list_go_files")
                .set_source(e)
        })?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if is_go_source(name) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Imports of all files in a package, first-seen order across files.
fn package_imports(files: &[PathBuf]) -> Result<Vec<String>> {
    let mut imports: Vec<String> = Vec::new();
    for file in files {
        let source = fs::read_to_string(file).map_err(|e| {
            Error::from(e)
                .with_operation("import::read_source")
                .with_context("file", file.display().to_string())
        })?;
        for path in extract_imports(&source) {
            if !imports.contains(&path) {
                imports.push(path);
            }
        }
    }
    Ok(imports)
}

/// Discover the import graph of the Go project in `input_dir`.
///
/// - `search_dir`: top directory for resolving non-module imports, laid out
///   as `<search_dir>/<import path>` (a GOPATH `src` directory, say).
/// - `include_leaf`: keep imports whose sources cannot be found (standard
///   library, unvendored third-party packages) as file-less leaf packages.
///
/// Both directories may be relative; they are made absolute before the root
/// import path is derived. The root package is returned even if it has no Go
/// files; callers check [`crate::Package::has_files`] before plotting.
pub fn parse_relation(
    input_dir: &Path,
    search_dir: Option<&Path>,
    include_leaf: bool,
) -> Result<ImportGraph> {
    let discovery_start = Instant::now();

    if !input_dir.is_dir() {
        return Err(Error::file_not_found(input_dir.display().to_string())
            .with_operation("import::parse_relation"));
    }
    let input_dir = canonical_dir(input_dir)?;
    let search_dir = search_dir.map(canonical_dir).transpose()?;
    let input_dir = input_dir.as_path();

    let resolver = Resolver::new(input_dir, search_dir.as_deref())?;
    let root_path = resolver.root_path();
    debug!(root = %root_path, module = ?resolver.module, "resolved root package");

    let mut graph = ImportGraph::new(root_path, Some(input_dir.to_path_buf()));
    let mut queue: VecDeque<PackageId> = VecDeque::new();

    let root = graph.root_id();
    graph.set_files(root, list_go_files(input_dir)?);
    queue.push_back(root);

    while let Some(id) = queue.pop_front() {
        let imports = package_imports(graph.package(id).files())?;

        for import_path in imports {
            if let Some(dep) = graph.id_of(&import_path) {
                graph.add_import(id, dep);
                continue;
            }

            let dir = resolver.resolve(&import_path);
            let files = match &dir {
                Some(dir) => list_go_files(dir)?,
                None => Vec::new(),
            };

            if files.is_empty() && !include_leaf {
                debug!(package = %import_path, "skipping package without sources");
                continue;
            }

            let has_files = !files.is_empty();
            let dep = graph.intern(import_path, dir);
            graph.set_files(dep, files);
            graph.add_import(id, dep);
            if has_files {
                queue.push_back(dep);
            }
        }
    }

    info!(
        "Import discovery: {:.2}s ({} packages)",
        discovery_start.elapsed().as_secs_f64(),
        graph.len()
    );

    Ok(graph)
}
