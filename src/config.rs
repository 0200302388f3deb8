use crate::error::{GitBumpError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for git-bump.
///
/// Contains the manifest references, conventional commit markers, and release
/// formatting templates.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub manifests: ManifestsConfig,

    #[serde(default)]
    pub conventional_commits: ConventionalCommitsConfig,

    #[serde(default)]
    pub release: ReleaseConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manifests: ManifestsConfig::default(),
            conventional_commits: ConventionalCommitsConfig::default(),
            release: ReleaseConfig::default(),
        }
    }
}

/// The two manifests carrying the version string.
///
/// The primary is the source of truth; the secondary mirrors it.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ManifestsConfig {
    #[serde(default = "default_primary_manifest")]
    pub primary: ManifestConfig,

    #[serde(default = "default_secondary_manifest")]
    pub secondary: ManifestConfig,
}

impl Default for ManifestsConfig {
    fn default() -> Self {
        ManifestsConfig {
            primary: default_primary_manifest(),
            secondary: default_secondary_manifest(),
        }
    }
}

/// A manifest file path plus the pattern locating its version field.
///
/// The pattern's first capture group must span exactly the version string;
/// the same pattern serves both reading and rewriting.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ManifestConfig {
    pub path: String,
    pub pattern: String,
}

fn default_primary_manifest() -> ManifestConfig {
    ManifestConfig {
        path: "__init__.py".to_string(),
        pattern: r#"__version__\s*=\s*["']([^"']+)["']"#.to_string(),
    }
}

fn default_secondary_manifest() -> ManifestConfig {
    ManifestConfig {
        path: "setup.py".to_string(),
        pattern: r#"version\s*=\s*"([^"]+)""#.to_string(),
    }
}

/// Returns the default markers signalling a breaking change (major bump).
fn default_breaking_markers() -> Vec<String> {
    vec!["!".to_string()]
}

/// Returns the default markers signalling a feature (minor bump).
fn default_minor_markers() -> Vec<String> {
    vec!["feat:".to_string(), "feat(".to_string()]
}

/// Returns the default markers signalling a fix (patch bump).
fn default_patch_markers() -> Vec<String> {
    vec![
        "fix:".to_string(),
        "fix(".to_string(),
        "perf:".to_string(),
        "perf(".to_string(),
    ]
}

/// Configuration for conventional commit classification.
///
/// Defines the substring markers scanned for in commit messages when deciding
/// the bump granularity automatically.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ConventionalCommitsConfig {
    #[serde(default = "default_breaking_markers")]
    pub breaking_markers: Vec<String>,

    #[serde(default = "default_minor_markers")]
    pub minor_markers: Vec<String>,

    #[serde(default = "default_patch_markers")]
    pub patch_markers: Vec<String>,
}

impl Default for ConventionalCommitsConfig {
    fn default() -> Self {
        ConventionalCommitsConfig {
            breaking_markers: default_breaking_markers(),
            minor_markers: default_minor_markers(),
            patch_markers: default_patch_markers(),
        }
    }
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

fn default_commit_message() -> String {
    "chore(release): {version}".to_string()
}

/// Configuration for the release commit and tag formatting.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            tag_pattern: default_tag_pattern(),
            commit_message: default_commit_message(),
        }
    }
}

impl ReleaseConfig {
    /// Render the tag name for a version string.
    pub fn tag_name(&self, version: &str) -> String {
        self.tag_pattern.replace("{version}", version)
    }

    /// Render the release commit message for a version string.
    pub fn message(&self, version: &str) -> String {
        self.commit_message.replace("{version}", version)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitbump.toml` in current directory
/// 3. `.gitbump.toml` in user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitbump.toml").exists() {
        fs::read_to_string("./gitbump.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitbump.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| GitBumpError::config(e.to_string()))?;
    Ok(config)
}
