//! Release helper: bumps the crate version in Cargo.toml, commits, tags,
//! and optionally publishes.
//!
//! Usage: `cargo run --bin release -- <new-version> [--dry-run] [--no-publish]`

use std::env;
use std::error::Error;
use std::fs;
use std::process::Command;

use toml_edit::{DocumentMut, Item};

struct Options {
    version: String,
    dry_run: bool,
    publish: bool,
}

fn parse_args() -> Result<Options, Box<dyn Error>> {
    let mut version = None;
    let mut dry_run = false;
    let mut publish = true;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--dry-run" => dry_run = true,
            "--no-publish" => publish = false,
            flag if flag.starts_with("--") => {
                return Err(format!("unknown flag: {}", flag).into());
            }
            value => {
                if version.replace(value.to_string()).is_some() {
                    return Err("expected exactly one version argument".into());
                }
            }
        }
    }

    let version = version.ok_or("usage: release <new-version> [--dry-run] [--no-publish]")?;
    if !is_plausible_version(&version) {
        return Err(format!("`{}` does not look like a version (want x.y.z)", version).into());
    }

    Ok(Options {
        version,
        dry_run,
        publish,
    })
}

fn is_plausible_version(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3 && parts.iter().all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}

fn run(description: &str, program: &str, args: &[&str], dry_run: bool) -> Result<(), Box<dyn Error>> {
    println!("{}: {} {}", description, program, args.join(" "));
    if dry_run {
        return Ok(());
    }
    let status = Command::new(program).args(args).status()?;
    if !status.success() {
        return Err(format!("{} failed", description).into());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let options = parse_args()?;

    let cargo_content = fs::read_to_string("Cargo.toml")?;
    let mut doc = cargo_content.parse::<DocumentMut>()?;

    let current_version = doc["package"]["version"]
        .as_str()
        .ok_or("could not find package.version in Cargo.toml")?
        .to_string();
    println!("Bumping {} -> {}", current_version, options.version);

    if current_version == options.version {
        return Err("new version matches the current one".into());
    }

    doc["package"]["version"] = Item::from(options.version.as_str());
    if options.dry_run {
        println!("dry run: not writing Cargo.toml");
    } else {
        fs::write("Cargo.toml", doc.to_string())?;
    }

    // Refresh Cargo.lock so the commit below picks it up.
    run("Update lockfile", "cargo", &["check"], options.dry_run)?;

    let tag = format!("v{}", options.version);
    let message = format!("Bump version to {}", options.version);
    run(
        "Stage manifests",
        "git",
        &["add", "Cargo.toml", "Cargo.lock"],
        options.dry_run,
    )?;
    run("Commit", "git", &["commit", "-m", &message], options.dry_run)?;
    run("Tag", "git", &["tag", "-a", &tag, "-m", &tag], options.dry_run)?;
    run("Push commits", "git", &["push"], options.dry_run)?;
    run("Push tags", "git", &["push", "--tags"], options.dry_run)?;

    if options.publish {
        run("Publish", "cargo", &["publish"], options.dry_run)?;
    } else {
        println!("Skipping crates.io publish.");
    }

    println!("Released {}", tag);
    Ok(())
}
