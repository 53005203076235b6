//! Import declaration extraction from Go source text.

use std::sync::LazyLock;

use regex::Regex;

static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid block comment regex"));

static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//[^\n]*").expect("valid line comment regex"));

/// `import "x"`, `import alias "x"` or `import ( ... )` at the start of a line.
static IMPORT_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^[ \t]*import[ \t]*(?:\(([^)]*)\)|((?:[\w.]+[ \t]+)?["`][^"`\n]+["`]))"#)
        .expect("valid import declaration regex")
});

/// One import spec: optional name (`_`, `.` or an identifier) then the path.
static IMPORT_SPEC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:[\w.]+[ \t]+)?["`]([^"`\n]+)["`]"#).expect("valid import spec regex")
});

/// First top-level declaration; no import may follow it.
static TOP_LEVEL_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?:func|type|var|const)\b").expect("valid top-level declaration regex")
});

/// Package name used by cgo; never a real dependency.
const CGO_PSEUDO_PACKAGE: &str = "C";

/// Extract imported package paths from a Go source file, in source order.
///
/// Only the file header is scanned: text from the first top-level `func`,
/// `type`, `var` or `const` on is ignored. Paths repeated within one file are
/// returned once.
pub fn extract_imports(source: &str) -> Vec<String> {
    let source = BLOCK_COMMENT.replace_all(source, "");
    let source = LINE_COMMENT.replace_all(&source, "");
    let header = match TOP_LEVEL_DECL.find(&source) {
        Some(decl) => &source[..decl.start()],
        None => &source[..],
    };

    let mut imports: Vec<String> = Vec::new();
    for decl in IMPORT_DECL.captures_iter(header) {
        let Some(body) = decl.get(1).or_else(|| decl.get(2)) else {
            continue;
        };
        for spec in IMPORT_SPEC.captures_iter(body.as_str()) {
            let path = spec[1].trim();
            if path.is_empty() || path == CGO_PSEUDO_PACKAGE {
                continue;
            }
            if !imports.iter().any(|seen| seen == path) {
                imports.push(path.to_string());
            }
        }
    }
    imports
}

/// Module path declared by a `go.mod` file.
pub fn module_path(go_mod: &str) -> Option<String> {
    static MODULE_DECL: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r#"(?m)^[ \t]*module[ \t]+"?([^"\s]+)"?"#).expect("valid module regex")
    });

    let go_mod = LINE_COMMENT.replace_all(go_mod, "");
    MODULE_DECL
        .captures(&go_mod)
        .map(|caps| caps[1].to_string())
}

/// Test files are compiled separately and never part of the package graph.
pub fn is_go_source(file_name: &str) -> bool {
    file_name.ends_with(".go") && !file_name.ends_with("_test.go")
}
