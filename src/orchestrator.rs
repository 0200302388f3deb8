//! Release workflow orchestration
//!
//! Runs the single-pass release flow: reconcile the secondary manifest,
//! decide the bump kind (explicit or classified from commits), rewrite both
//! manifests, and record the release as a commit plus tag.

use crate::config::Config;
use crate::conventional;
use crate::error::Result;
use crate::git_ops::GitRepo;
use crate::manifest::ManifestRef;
use crate::sync;
use crate::ui;
use crate::version::{BumpKind, Version};
use std::path::Path;

/// How the bump kind is decided for this invocation.
///
/// Parsed from the optional positional CLI argument. This decoupling allows
/// the workflow to be called programmatically without depending on clap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No argument: classify commits since the last tag.
    Auto,
    /// `sync`: stop after the sync step.
    Sync,
    /// `major`, `minor`, or `patch`: apply directly.
    Explicit(BumpKind),
}

impl Mode {
    /// Parse the optional CLI argument into a mode.
    ///
    /// Any value other than `major`, `minor`, `patch`, or `sync` is an
    /// `InvalidBumpKind` error, surfaced as a usage failure before any file
    /// is touched.
    pub fn parse(arg: Option<&str>) -> Result<Self> {
        match arg {
            None => Ok(Mode::Auto),
            Some("sync") => Ok(Mode::Sync),
            Some(other) => Ok(Mode::Explicit(other.parse()?)),
        }
    }
}

/// Terminal state of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// `sync` mode: the sync step ran and the workflow stopped there.
    SyncedOnly { changed: bool },
    /// Automatic mode found no bump-worthy commits.
    NoBumpNeeded { synced: bool },
    /// Both manifests rewritten, release commit and tag created.
    Released { version: Version, tag: String },
    /// Dry run: the decision that would have been applied.
    DryRun { version: Version, tag: String },
}

/// Run the release workflow once.
///
/// `root` is the checkout directory the configured manifest paths resolve
/// against. With `dry_run` no file is written and no git state is touched.
pub fn run(mode: Mode, config: &Config, root: &Path, dry_run: bool) -> Result<Outcome> {
    let primary = ManifestRef::from_config(root, &config.manifests.primary)?;
    let secondary = ManifestRef::from_config(root, &config.manifests.secondary)?;

    // Step 1: always reconcile the secondary manifest first
    let sync_outcome = sync::sync_versions(&primary, &secondary, dry_run)?;
    ui::display_sync_outcome(&sync_outcome, primary.path(), secondary.path());

    // Step 2: mode decision
    let kind = match mode {
        Mode::Sync => {
            return Ok(Outcome::SyncedOnly {
                changed: sync_outcome.changed(),
            });
        }
        Mode::Explicit(kind) => kind,
        Mode::Auto => {
            // Step 3: classify commits since the last tag
            let repo = GitRepo::open(root)?;
            let latest_tag = repo.latest_tag()?;
            let messages = repo.commit_messages_since(latest_tag.as_deref())?;
            ui::display_commit_analysis(&messages, latest_tag.as_deref());

            match conventional::determine_bump(&messages, &config.conventional_commits) {
                Some(kind) => kind,
                None => {
                    return Ok(Outcome::NoBumpNeeded {
                        synced: sync_outcome.changed(),
                    });
                }
            }
        }
    };

    // Step 4: compute and apply
    let current = primary.read_version()?;
    let next = current.bump(kind);
    ui::display_version_change(&current, &next, kind);

    let tag_name = config.release.tag_name(&next.to_string());

    if dry_run {
        ui::display_status(&format!(
            "Dry run: would update {} and {}",
            primary.path().display(),
            secondary.path().display()
        ));
        ui::display_status(&format!(
            "Dry run: would commit and create tag: {}",
            tag_name
        ));
        return Ok(Outcome::DryRun {
            version: next,
            tag: tag_name,
        });
    }

    primary.write_version(&next)?;
    secondary.write_version(&next)?;
    println!("Updated version to {} in:", next);
    println!("  - {}", primary.path().display());
    println!("  - {}", secondary.path().display());

    // Step 5: stage both manifests, commit, tag. A git failure here aborts
    // the run; the file edits above are not rolled back.
    let repo = GitRepo::open(root)?;
    repo.stage(&[
        primary.path().to_path_buf(),
        secondary.path().to_path_buf(),
    ])?;
    repo.commit_staged(&config.release.message(&next.to_string()))?;
    repo.create_tag(&tag_name)?;
    ui::display_success(&format!("Created tag: {}", tag_name));

    Ok(Outcome::Released {
        version: next,
        tag: tag_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse_absent_is_auto() {
        assert_eq!(Mode::parse(None).unwrap(), Mode::Auto);
    }

    #[test]
    fn test_mode_parse_sync() {
        assert_eq!(Mode::parse(Some("sync")).unwrap(), Mode::Sync);
    }

    #[test]
    fn test_mode_parse_explicit_kinds() {
        assert_eq!(
            Mode::parse(Some("major")).unwrap(),
            Mode::Explicit(BumpKind::Major)
        );
        assert_eq!(
            Mode::parse(Some("minor")).unwrap(),
            Mode::Explicit(BumpKind::Minor)
        );
        assert_eq!(
            Mode::parse(Some("patch")).unwrap(),
            Mode::Explicit(BumpKind::Patch)
        );
    }

    #[test]
    fn test_mode_parse_rejects_unknown() {
        let err = Mode::parse(Some("bogus")).unwrap_err();
        assert!(matches!(
            err,
            crate::error::GitBumpError::InvalidBumpKind(ref s) if s == "bogus"
        ));
    }
}
