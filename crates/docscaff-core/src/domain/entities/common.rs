use super::DomainError;
use std::fmt;
use std::path::{Path, PathBuf};

/// A filesystem path guaranteed to be relative.
///
/// Invariant: Never absolute. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() {
            Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            })
        } else {
            Ok(Self(path))
        }
    }

    /// Resolve against a root directory.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_accepts_nested() {
        let p = RelativePath::try_new(".github/workflows").unwrap();
        assert_eq!(p.as_path(), Path::new(".github/workflows"));
        assert_eq!(p.to_string(), ".github/workflows");
    }

    #[test]
    fn relative_path_rejects_absolute() {
        let err = RelativePath::try_new("/etc/passwd").unwrap_err();
        assert!(matches!(err, DomainError::AbsolutePathNotAllowed { .. }));
    }

    #[test]
    fn resolve_joins_root() {
        let p = RelativePath::try_new("docs/infra").unwrap();
        assert_eq!(
            p.resolve(Path::new("/tmp/proj")),
            PathBuf::from("/tmp/proj/docs/infra")
        );
    }
}
