use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::github::types::Issue;

/// Glob for `gh` exports such as `issues.repo-name.json` or `prs.repo-name.json`
pub const DUMP_PATTERN: &str = "*s.*-*.json";

/// Find every dump file in `dir`, in sorted path order.
pub fn find_dumps(dir: &Path) -> Result<Vec<PathBuf>> {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&escaped).join(DUMP_PATTERN);
    let pattern = pattern.to_string_lossy();

    let mut paths = Vec::new();
    for entry in glob::glob(&pattern).with_context(|| format!("Invalid glob pattern {}", pattern))? {
        let path = entry.context("Failed to read directory entry")?;
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Parse a single dump file as a JSON array of issues.
pub fn load_dump(path: &Path) -> Result<Vec<Issue>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open issue dump at {}", path.display()))?;

    let issues: Vec<Issue> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse issue dump {}", path.display()))?;

    Ok(issues)
}

/// Load and concatenate every dump in `dir`.
pub fn load_issues(dir: &Path) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();
    for path in find_dumps(dir)? {
        let loaded = load_dump(&path)?;
        tracing::debug!("loaded {} issues from {}", loaded.len(), path.display());
        issues.extend(loaded);
    }
    Ok(issues)
}
