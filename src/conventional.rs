use crate::config::ConventionalCommitsConfig;
use crate::version::BumpKind;

/// Classify commit messages into a bump decision.
///
/// Scans every message for the configured substring markers. Breaking
/// markers win outright regardless of anything else in the history; feature
/// markers beat fix markers. A history with no markers yields `None`,
/// meaning no bump is needed (this is not an error). Message order is
/// irrelevant.
pub fn determine_bump(
    messages: &[String],
    config: &ConventionalCommitsConfig,
) -> Option<BumpKind> {
    let mut has_features = false;
    let mut has_fixes = false;

    for message in messages {
        if contains_any(message, &config.breaking_markers) {
            // Highest precedence, short-circuit
            return Some(BumpKind::Major);
        }

        if contains_any(message, &config.minor_markers) {
            has_features = true;
        }

        if contains_any(message, &config.patch_markers) {
            has_fixes = true;
        }
    }

    if has_features {
        Some(BumpKind::Minor)
    } else if has_fixes {
        Some(BumpKind::Patch)
    } else {
        None
    }
}

fn contains_any(message: &str, markers: &[String]) -> bool {
    markers.iter().any(|marker| message.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(messages: &[&str]) -> Option<BumpKind> {
        let owned: Vec<String> = messages.iter().map(|m| m.to_string()).collect();
        determine_bump(&owned, &ConventionalCommitsConfig::default())
    }

    #[test]
    fn test_breaking_marker_yields_major() {
        assert_eq!(
            classify(&["feat(api)!: redesign endpoint"]),
            Some(BumpKind::Major)
        );
    }

    #[test]
    fn test_breaking_beats_features_anywhere() {
        assert_eq!(
            classify(&[
                "feat: new feature 1",
                "fix(core)!: breaking change",
                "feat: new feature 2",
            ]),
            Some(BumpKind::Major)
        );
    }

    #[test]
    fn test_feature_yields_minor() {
        assert_eq!(
            classify(&["feat(auth): add oauth support", "fix: bug fix"]),
            Some(BumpKind::Minor)
        );
    }

    #[test]
    fn test_fixes_only_yield_patch() {
        assert_eq!(
            classify(&["fix(ui): button styling", "perf(db): cache results"]),
            Some(BumpKind::Patch)
        );
    }

    #[test]
    fn test_unmarked_history_yields_none() {
        assert_eq!(
            classify(&["docs: update readme", "chore: update deps", "Updated stuff"]),
            None
        );
    }

    #[test]
    fn test_empty_history_yields_none() {
        assert_eq!(classify(&[]), None);
    }

    #[test]
    fn test_order_is_irrelevant() {
        let newest_first = classify(&["fix: later", "feat: earlier"]);
        let oldest_first = classify(&["feat: earlier", "fix: later"]);
        assert_eq!(newest_first, oldest_first);
        assert_eq!(newest_first, Some(BumpKind::Minor));
    }

    #[test]
    fn test_custom_markers() {
        let config = ConventionalCommitsConfig {
            breaking_markers: vec!["BREAKING".to_string()],
            minor_markers: vec!["added:".to_string()],
            patch_markers: vec!["fixed:".to_string()],
        };

        let messages = vec!["fixed: a thing".to_string()];
        assert_eq!(determine_bump(&messages, &config), Some(BumpKind::Patch));

        // Default '!' marker no longer applies
        let messages = vec!["feat!: redesign".to_string()];
        assert_eq!(determine_bump(&messages, &config), None);
    }
}
