use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for git-bump operations
#[derive(Error, Debug)]
pub enum GitBumpError {
    #[error("Could not find version in {}", path.display())]
    VersionNotFound { path: PathBuf },

    #[error("Invalid bump kind: {0}")]
    InvalidBumpKind(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-bump
pub type Result<T> = std::result::Result<T, GitBumpError>;

impl GitBumpError {
    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        GitBumpError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitBumpError::Config(msg.into())
    }

    /// Create a not-found error for a manifest path
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        GitBumpError::VersionNotFound { path: path.into() }
    }

    /// True for the pattern-missing case that the sync step tolerates
    pub fn is_not_found(&self) -> bool {
        matches!(self, GitBumpError::VersionNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GitBumpError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GitBumpError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_not_found_names_the_path() {
        let err = GitBumpError::not_found("setup.py");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("setup.py"));
    }

    #[test]
    fn test_invalid_bump_kind_echoes_input() {
        let err = GitBumpError::InvalidBumpKind("bogus".to_string());
        assert_eq!(err.to_string(), "Invalid bump kind: bogus");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_error_all_variants_nonempty() {
        let errors = vec![
            GitBumpError::config("config issue"),
            GitBumpError::version("version issue"),
            GitBumpError::not_found("file.py"),
            GitBumpError::InvalidBumpKind("x".to_string()),
        ];

        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
