use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod conventional;
mod error;
mod git_ops;
mod manifest;
mod orchestrator;
mod sync;
mod ui;
mod version;

use orchestrator::{Mode, Outcome};

#[derive(clap::Parser)]
#[command(
    name = "git-bump",
    about = "Sync manifest versions, bump them from conventional commits, and tag the release"
)]
struct Args {
    #[arg(
        value_name = "MODE",
        help = "Bump kind to apply: major, minor, patch, or sync (omit to classify commits)"
    )]
    mode: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short = 'C',
        long = "dir",
        help = "Run against this checkout instead of the current directory"
    )]
    dir: Option<String>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-bump {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Invalid mode values are a usage error, reported before anything runs
    let mode = match Mode::parse(args.mode.as_deref()) {
        Ok(mode) => mode,
        Err(_) => {
            println!("Usage: git-bump [major|minor|patch|sync]");
            std::process::exit(1);
        }
    };

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let root = PathBuf::from(args.dir.as_deref().unwrap_or("."));

    match orchestrator::run(mode, &config, &root, args.dry_run) {
        Ok(Outcome::SyncedOnly { changed }) => {
            if changed {
                println!("Version sync completed successfully");
            } else {
                println!("Versions were already in sync");
            }
        }
        Ok(Outcome::NoBumpNeeded { synced }) => {
            if synced {
                println!(
                    "Version sync completed, but no version bump needed (no feat/fix/perf commits found)"
                );
            } else {
                println!("No version bump needed (no feat/fix/perf commits found)");
            }
        }
        Ok(Outcome::Released { version, .. }) => {
            ui::display_success(&format!("Version successfully bumped to {}", version));
        }
        Ok(Outcome::DryRun { .. }) => {
            ui::display_status("Dry run complete; nothing was changed");
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}
