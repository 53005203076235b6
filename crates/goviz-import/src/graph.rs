//! Package graph produced by discovery.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use goviz_dot::DotNode;

/// Index of a package inside an [`ImportGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageId(u32);

impl PackageId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A Go package: one import path, optionally backed by a directory of sources.
#[derive(Debug, Clone)]
pub struct Package {
    import_path: String,
    dir: Option<PathBuf>,
    files: Vec<PathBuf>,
    /// Packages this one imports, in first-seen source order.
    imports: Vec<PackageId>,
    /// Packages importing this one, in discovery order.
    importers: Vec<PackageId>,
}

impl Package {
    pub fn import_path(&self) -> &str {
        &self.import_path
    }

    /// Directory the package was resolved to, if any.
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn imports(&self) -> &[PackageId] {
        &self.imports
    }

    pub fn importers(&self) -> &[PackageId] {
        &self.importers
    }

    pub fn has_files(&self) -> bool {
        !self.files.is_empty()
    }
}

/// Import relations between Go packages, rooted at the project package.
#[derive(Debug)]
pub struct ImportGraph {
    packages: Vec<Package>,
    by_path: HashMap<String, PackageId>,
    root: PackageId,
}

impl ImportGraph {
    /// Create a graph holding only the root package.
    pub fn new(root_path: impl Into<String>, root_dir: Option<PathBuf>) -> Self {
        let mut graph = Self {
            packages: Vec::new(),
            by_path: HashMap::new(),
            root: PackageId(0),
        };
        graph.root = graph.intern(root_path, root_dir);
        graph
    }

    /// Return the id for `import_path`, adding an empty package if it is new.
    pub fn intern(&mut self, import_path: impl Into<String>, dir: Option<PathBuf>) -> PackageId {
        let import_path = import_path.into();
        if let Some(&id) = self.by_path.get(&import_path) {
            return id;
        }
        let id = PackageId(self.packages.len() as u32);
        self.by_path.insert(import_path.clone(), id);
        self.packages.push(Package {
            import_path,
            dir,
            files: Vec::new(),
            imports: Vec::new(),
            importers: Vec::new(),
        });
        id
    }

    pub fn set_files(&mut self, id: PackageId, files: Vec<PathBuf>) {
        self.packages[id.index()].files = files;
    }

    /// Record that `from` imports `to`. Repeated imports are kept once.
    pub fn add_import(&mut self, from: PackageId, to: PackageId) {
        if self.packages[from.index()].imports.contains(&to) {
            return;
        }
        self.packages[from.index()].imports.push(to);
        self.packages[to.index()].importers.push(from);
    }

    pub fn root_id(&self) -> PackageId {
        self.root
    }

    pub fn root(&self) -> PackageNode<'_> {
        self.node(self.root)
    }

    pub fn id_of(&self, import_path: &str) -> Option<PackageId> {
        self.by_path.get(import_path).copied()
    }

    /// Look up a package by import path.
    pub fn get(&self, import_path: &str) -> Option<PackageNode<'_>> {
        self.id_of(import_path).map(|id| self.node(id))
    }

    pub fn package(&self, id: PackageId) -> &Package {
        &self.packages[id.index()]
    }

    pub fn node(&self, id: PackageId) -> PackageNode<'_> {
        PackageNode { graph: self, id }
    }

    /// Every package, in discovery order.
    pub fn all(&self) -> impl Iterator<Item = PackageNode<'_>> {
        (0..self.packages.len()).map(|idx| self.node(PackageId(idx as u32)))
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

/// Borrowed view of one package, drawable by the plotter.
#[derive(Clone, Copy)]
pub struct PackageNode<'g> {
    graph: &'g ImportGraph,
    id: PackageId,
}

impl<'g> PackageNode<'g> {
    pub fn package(&self) -> &'g Package {
        self.graph.package(self.id)
    }

    pub fn is_root(&self) -> bool {
        self.id == self.graph.root
    }

    pub fn has_files(&self) -> bool {
        self.package().has_files()
    }

    fn nodes(&self, ids: &[PackageId]) -> Vec<Self> {
        ids.iter().map(|&id| self.graph.node(id)).collect()
    }
}

impl std::fmt::Debug for PackageNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PackageNode")
            .field(&self.package().import_path)
            .finish()
    }
}

impl DotNode for PackageNode<'_> {
    fn name(&self) -> &str {
        self.package().import_path()
    }

    fn label(&self) -> &str {
        self.package().import_path()
    }

    fn shape(&self) -> &str {
        if self.has_files() { "box" } else { "folder" }
    }

    fn style(&self) -> &str {
        if self.is_root() {
            "filled"
        } else if self.has_files() {
            "solid"
        } else {
            "dashed"
        }
    }

    fn children(&self) -> Vec<Self> {
        self.nodes(self.package().imports())
    }

    fn parents(&self) -> Vec<Self> {
        self.nodes(self.package().importers())
    }
}
