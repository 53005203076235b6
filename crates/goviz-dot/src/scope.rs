//! Project scope: which nodes count as "ours".

/// Separator between hierarchical name segments.
pub const SEPARATOR: &str = "/";

/// Number of leading segments that identify a project, e.g. `host/org/project`.
pub const DEFAULT_SCOPE_LEVEL: usize = 3;

/// A name prefix restricting the plot to one logical project.
///
/// A scope is established once from the first node visited and never changes
/// afterwards. Callers that render several subtrees thread the same value
/// through each render.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope {
    prefix: String,
}

impl Scope {
    /// Establish a scope from `name` using the first [`DEFAULT_SCOPE_LEVEL`] segments.
    pub fn establish(name: &str) -> Self {
        Self::with_level(name, DEFAULT_SCOPE_LEVEL)
    }

    /// Establish a scope from the first `level` segments of `name`.
    ///
    /// Names with fewer segments are used whole.
    pub fn with_level(name: &str, level: usize) -> Self {
        let prefix = name
            .split(SEPARATOR)
            .take(level)
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        Self { prefix }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// True if `name` starts with the scope prefix.
    ///
    /// This is a plain string prefix test: with prefix `a/b/c`, the name
    /// `a/b/cd` is in scope too.
    pub fn contains(&self, name: &str) -> bool {
        name.starts_with(&self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn establish_takes_three_segments() {
        let scope = Scope::establish("host/org/proj/sub/x");
        assert_eq!(scope.prefix(), "host/org/proj");
        assert!(scope.contains("host/org/proj/other"));
        assert!(scope.contains("host/org/proj"));
        assert!(!scope.contains("host/org/other/thing"));
        assert!(!scope.contains("fmt"));
    }

    #[test]
    fn establish_short_name_uses_whole_name() {
        assert_eq!(Scope::establish("host/org").prefix(), "host/org");
        assert_eq!(Scope::establish("main").prefix(), "main");
        assert_eq!(Scope::establish("").prefix(), "");
    }

    #[test]
    fn custom_level() {
        let scope = Scope::with_level("host/org/proj/sub/x", 2);
        assert_eq!(scope.prefix(), "host/org");
        assert!(scope.contains("host/org/other/thing"));
        assert!(!scope.contains("host/elsewhere"));
    }

    #[test]
    fn zero_level_admits_everything() {
        let scope = Scope::with_level("host/org/proj", 0);
        assert_eq!(scope.prefix(), "");
        assert!(scope.contains("anything/at/all"));
    }

    #[test]
    fn prefix_match_is_textual() {
        let scope = Scope::establish("host/org/proj/x");
        assert!(scope.contains("host/org/project2"));
    }
}
