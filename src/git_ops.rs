use crate::error::Result;
use git2::{ErrorCode, Oid, Repository};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Wrapper around git2 Repository for the release workflow.
///
/// Provides the handful of operations git-bump needs: finding the most
/// recent tag, listing commit messages since it, and recording the release
/// as a staged commit plus lightweight tag.
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Opens the repository containing `path`.
    ///
    /// Discovers the git repository at the given directory or any of its
    /// parents.
    ///
    /// # Returns
    /// * `Ok(GitRepo)` - Successfully initialized repository wrapper
    /// * `Err` - If the path is not inside a git repository
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitRepo { repo })
    }

    /// OID of the current HEAD commit, or `None` for an unborn branch.
    ///
    /// A repository with no commits yet is an expected state for this tool,
    /// not an error.
    fn head_oid(&self) -> Result<Option<Oid>> {
        match self.repo.head() {
            Ok(head) => Ok(head.target()),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Finds the most recent tag reachable from HEAD.
    ///
    /// Walks the commit history from HEAD backwards and returns the first
    /// commit that carries a tag. Handles both lightweight and annotated
    /// tags.
    ///
    /// # Returns
    /// * `Ok(Some(tag))` - The latest tag name found
    /// * `Ok(None)` - If no tags exist yet (expected empty state)
    /// * `Err` - If history traversal fails
    pub fn latest_tag(&self) -> Result<Option<String>> {
        let head_oid = match self.head_oid()? {
            Some(oid) => oid,
            None => return Ok(None),
        };

        // Map every tag's target OID to its name (peeling annotated tags)
        let mut tag_oids = HashMap::new();
        let tags = self.repo.tag_names(None)?;
        for tag_name in tags.iter().flatten() {
            if let Ok(tag_ref) = self.repo.find_reference(&format!("refs/tags/{}", tag_name)) {
                if let Ok(tag_obj) = tag_ref.peel(git2::ObjectType::Any) {
                    tag_oids.insert(tag_obj.id(), tag_name.to_string());
                }
            }
        }

        if tag_oids.is_empty() {
            return Ok(None);
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head_oid)?;

        for oid in revwalk {
            let oid = oid?;
            if let Some(tag_name) = tag_oids.get(&oid) {
                return Ok(Some(tag_name.clone()));
            }
        }

        Ok(None)
    }

    /// Collects the one-line messages of all commits since a tag.
    ///
    /// Walks from HEAD backwards until the tag's commit is reached; with no
    /// tag, the entire reachable history is returned. An empty repository
    /// yields an empty list.
    ///
    /// # Arguments
    /// * `tag_name` - Optional tag to stop at (exclusive)
    ///
    /// # Returns
    /// * `Ok(messages)` - Commit summaries in chronological order (oldest first)
    /// * `Err` - If history traversal fails
    pub fn commit_messages_since(&self, tag_name: Option<&str>) -> Result<Vec<String>> {
        let head_oid = match self.head_oid()? {
            Some(oid) => oid,
            None => return Ok(Vec::new()),
        };

        let tag_oid = tag_name.and_then(|name| {
            self.repo
                .find_reference(&format!("refs/tags/{}", name))
                .ok()
                .and_then(|r| r.peel(git2::ObjectType::Any).ok())
                .map(|obj| obj.id())
        });

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head_oid)?;

        let mut messages = Vec::new();
        for oid in revwalk {
            let oid = oid?;

            if Some(oid) == tag_oid {
                break;
            }

            if let Ok(commit) = self.repo.find_commit(oid) {
                messages.push(commit.summary().unwrap_or("(empty message)").to_string());
            }
        }

        // Chronological order (oldest first)
        messages.reverse();
        Ok(messages)
    }

    /// Stages the given files in the index.
    ///
    /// Absolute paths are resolved against the repository working directory;
    /// relative paths are used as-is.
    pub fn stage(&self, paths: &[PathBuf]) -> Result<()> {
        let workdir = self
            .repo
            .workdir()
            .ok_or_else(|| git2::Error::from_str("repository has no working directory"))?;
        let workdir = workdir.canonicalize().unwrap_or_else(|_| workdir.to_path_buf());

        let mut index = self.repo.index()?;
        for path in paths {
            let absolute = path.canonicalize().unwrap_or_else(|_| path.clone());
            let relative = absolute.strip_prefix(&workdir).unwrap_or(path.as_path());
            index.add_path(relative)?;
        }
        index.write()?;

        Ok(())
    }

    /// Creates a commit from the staged index on HEAD.
    ///
    /// Handles the first-commit case (unborn HEAD) by committing without a
    /// parent.
    pub fn commit_staged(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let signature = self.repo.signature()?;

        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                None
            }
            Err(e) => return Err(e.into()),
        };
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?;

        Ok(())
    }

    /// Creates a lightweight tag on the current HEAD commit.
    ///
    /// # Arguments
    /// * `tag_name` - Name of the tag to create
    ///
    /// # Returns
    /// * `Ok(())` - Tag created successfully
    /// * `Err` - If HEAD is unborn or tag creation fails
    pub fn create_tag(&self, tag_name: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        self.repo
            .tag_lightweight(tag_name, head.as_object(), false)?;
        Ok(())
    }
}
