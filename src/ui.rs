use crate::sync::SyncOutcome;
use crate::version::{BumpKind, Version};
use std::path::Path;

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

pub fn display_warning(message: &str) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", message);
}

pub fn display_sync_outcome(outcome: &SyncOutcome, primary_path: &Path, secondary_path: &Path) {
    match outcome {
        SyncOutcome::AlreadyInSync(version) => {
            display_success(&format!("Versions already in sync: {}", version));
        }
        SyncOutcome::Updated { from, to } => {
            println!("Version mismatch detected:");
            println!("  {}: {}", primary_path.display(), to);
            match from {
                Some(from) => println!("  {}: {}", secondary_path.display(), from),
                None => println!("  {}: (malformed version)", secondary_path.display()),
            }
            display_success(&format!(
                "Updated {} version to {}",
                secondary_path.display(),
                to
            ));
        }
        SyncOutcome::SecondaryUnreadable { reason } => {
            display_warning(reason);
        }
    }
}

pub fn display_commit_analysis(commit_messages: &[String], since_tag: Option<&str>) {
    match since_tag {
        Some(tag) => println!("\n\x1b[1mAnalyzing commits since tag '{}'\x1b[0m", tag),
        None => println!("\n\x1b[1mAnalyzing full commit history (no tags found)\x1b[0m"),
    }
    println!("\x1b[4m{} commits:\x1b[0m", commit_messages.len());

    for (i, message) in commit_messages.iter().take(10).enumerate() {
        let short_msg = if message.len() > 60 {
            &message[..60]
        } else {
            message
        };
        println!("  {}. {}", i + 1, short_msg);
    }

    if commit_messages.len() > 10 {
        println!("  ... and {} more commits", commit_messages.len() - 10);
    }
}

pub fn display_version_change(current: &Version, next: &Version, kind: BumpKind) {
    println!(
        "\n\x1b[1mBumping version:\x1b[0m \x1b[31m{}\x1b[0m -> \x1b[32m{}\x1b[0m ({})",
        current, next, kind
    );
}
