use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Crates the domain must never depend on: runtimes, storage, logging, and
/// the outer workspace layers.
const DOMAIN_FORBIDDEN_DEPS: &[&str] = &[
    "anyhow",
    "async-trait",
    "charsheet-engine",
    "charsheet-player",
    "chrono",
    "sqlx",
    "tokio",
    "tracing",
    "tracing-subscriber",
];

/// Source patterns that mean I/O has leaked into the domain.
const DOMAIN_FORBIDDEN_PATTERNS: &str = r"\b(std::fs|std::net|std::env|tokio::|sqlx::|tracing::)";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_root: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let mut violations = dependency_violations(&metadata.packages);
    violations.extend(source_violations(
        &metadata.workspace_root.join("crates/domain/src"),
    )?);

    if violations.is_empty() {
        println!("arch-check: ok");
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} architecture violation(s)", violations.len())
}

/// Layering rules: the domain stays free of infrastructure, the engine never
/// reaches up into the player. Dev-dependencies are exempt.
fn dependency_violations(packages: &[Package]) -> Vec<String> {
    let mut violations = Vec::new();

    for package in packages {
        let forbidden: &[&str] = match package.name.as_str() {
            "charsheet-domain" => DOMAIN_FORBIDDEN_DEPS,
            "charsheet-engine" => &["charsheet-player"],
            _ => continue,
        };

        for dep in &package.dependencies {
            if dep.kind.as_deref() == Some("dev") {
                continue;
            }
            if forbidden.contains(&dep.name.as_str()) {
                violations.push(format!("{} depends on {}", package.name, dep.name));
            }
        }
    }

    violations
}

fn source_violations(dir: &Path) -> anyhow::Result<Vec<String>> {
    let pattern = regex_lite::Regex::new(DOMAIN_FORBIDDEN_PATTERNS)?;
    let mut violations = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries =
            std::fs::read_dir(&dir).with_context(|| format!("reading {}", dir.display()))?;
        for entry in entries {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some("rs") {
                continue;
            }

            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            violations.extend(scan_source(&pattern, &path, &source));
        }
    }

    Ok(violations)
}

fn scan_source(pattern: &regex_lite::Regex, path: &Path, source: &str) -> Vec<String> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
        .filter_map(|(i, line)| {
            pattern.find(line).map(|m| {
                format!("{}:{} uses {}", path.display(), i + 1, m.as_str())
            })
        })
        .collect()
}
