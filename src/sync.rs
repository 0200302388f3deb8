use crate::error::{GitBumpError, Result};
use crate::manifest::ManifestRef;
use crate::version::Version;

/// Result of reconciling the secondary manifest against the primary.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// Both manifests already carry the same version.
    AlreadyInSync(Version),
    /// The secondary manifest was rewritten to match the primary.
    /// `from` is `None` when the secondary carried a malformed version.
    Updated { from: Option<Version>, to: Version },
    /// The secondary manifest has no version field; nothing was synced.
    SecondaryUnreadable { reason: String },
}

impl SyncOutcome {
    /// Whether the sync step rewrote the secondary manifest.
    pub fn changed(&self) -> bool {
        matches!(self, SyncOutcome::Updated { .. })
    }
}

/// Reconcile the secondary manifest's version with the primary's.
///
/// The primary is the source of truth: a mismatch (or a malformed secondary
/// version) is repaired by splicing the primary version into the secondary
/// file. A secondary whose pattern does not match at all is reported as
/// `SecondaryUnreadable` rather than failing the run; a failing primary read
/// is always fatal. With `dry_run` the decision is reported but no file is
/// written.
pub fn sync_versions(
    primary: &ManifestRef,
    secondary: &ManifestRef,
    dry_run: bool,
) -> Result<SyncOutcome> {
    let primary_version = primary.read_version()?;

    let secondary_version = match secondary.read_version() {
        Ok(version) => Some(version),
        Err(e) if e.is_not_found() => {
            return Ok(SyncOutcome::SecondaryUnreadable {
                reason: e.to_string(),
            })
        }
        // A matched but malformed version field is repaired like a mismatch
        Err(GitBumpError::Version(_)) => None,
        Err(e) => return Err(e),
    };

    if secondary_version == Some(primary_version) {
        return Ok(SyncOutcome::AlreadyInSync(primary_version));
    }

    if !dry_run {
        secondary.write_version(&primary_version)?;
    }

    Ok(SyncOutcome::Updated {
        from: secondary_version,
        to: primary_version,
    })
}
