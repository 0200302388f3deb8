use crate::config::ManifestConfig;
use crate::error::{GitBumpError, Result};
use crate::version::Version;
use regex::Regex;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// A manifest file carrying an embedded version string.
///
/// Couples the file path with a single compiled pattern whose first capture
/// group spans exactly the version text. Reading returns that capture;
/// writing splices the replacement over the same span, so every byte outside
/// the span survives a rewrite untouched. Only the leftmost match is ever
/// considered.
#[derive(Debug)]
pub struct ManifestRef {
    path: PathBuf,
    pattern: Regex,
}

impl ManifestRef {
    /// Compile a manifest reference from a path and pattern.
    ///
    /// The pattern must contain at least one capture group; group 1 is the
    /// version span.
    pub fn new(path: impl Into<PathBuf>, pattern: &str) -> Result<Self> {
        let compiled = Regex::new(pattern).map_err(|e| {
            GitBumpError::config(format!("Invalid manifest pattern '{}': {}", pattern, e))
        })?;

        if compiled.captures_len() < 2 {
            return Err(GitBumpError::config(format!(
                "Manifest pattern '{}' has no capture group for the version",
                pattern
            )));
        }

        Ok(ManifestRef {
            path: path.into(),
            pattern: compiled,
        })
    }

    /// Build a manifest reference from configuration, resolving the path
    /// against the checkout root.
    pub fn from_config(root: &Path, config: &ManifestConfig) -> Result<Self> {
        ManifestRef::new(root.join(&config.path), &config.pattern)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Byte range of the version capture in `content`, if the pattern matches.
    fn version_span(&self, content: &str) -> Option<Range<usize>> {
        self.pattern
            .captures(content)
            .and_then(|captures| captures.get(1))
            .map(|m| m.range())
    }

    /// Read the embedded version.
    ///
    /// Returns `VersionNotFound` when the pattern does not match, and a
    /// version error when the captured text is not a valid `X.Y.Z` triple.
    pub fn read_version(&self) -> Result<Version> {
        let content = fs::read_to_string(&self.path)?;
        let span = self
            .version_span(&content)
            .ok_or_else(|| GitBumpError::not_found(&self.path))?;

        Version::parse(&content[span])
    }

    /// Replace the embedded version and persist the file.
    ///
    /// Read-modify-write of the whole file; only the capture span changes.
    /// A missing pattern is an error here, never a silent no-op.
    pub fn write_version(&self, version: &Version) -> Result<()> {
        let content = fs::read_to_string(&self.path)?;
        let span = self
            .version_span(&content)
            .ok_or_else(|| GitBumpError::not_found(&self.path))?;

        let mut updated = String::with_capacity(content.len());
        updated.push_str(&content[..span.start]);
        updated.push_str(&version.to_string());
        updated.push_str(&content[span.end..]);

        fs::write(&self.path, updated)?;
        Ok(())
    }
}
