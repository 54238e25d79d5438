// src/git.rs
//
// Change-set resolution. Shells out to git; exit code and stdout are the
// only contract relied upon. Every failure mode degrades to the next
// fallback tier or to an empty list, never to an error.

use std::io;
use std::path::Path;
use std::process::Command;

/// Runs git in `root` and returns trimmed, non-empty stdout lines.
/// `Ok(None)` means the command ran but exited non-zero.
fn run_git(root: &Path, args: &[&str]) -> io::Result<Option<Vec<String>>> {
    let out = Command::new("git").args(args).current_dir(root).output()?;

    if !out.status.success() {
        return Ok(None);
    }

    let lines = String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    Ok(Some(lines))
}

/// Candidate files for test generation, in the order git emits them.
///
/// Tiers:
/// 1. files changed between HEAD~1 and HEAD
/// 2. full tracked listing when the diff fails or is empty
/// 3. empty when git itself cannot be invoked
pub fn changed_files(root: &Path) -> Vec<String> {
    match run_git(root, &["diff", "--name-only", "HEAD~1..HEAD"]) {
        Ok(Some(files)) if !files.is_empty() => files,
        Ok(_) => tracked_files(root),
        Err(_) => Vec::new(),
    }
}

fn tracked_files(root: &Path) -> Vec<String> {
    match run_git(root, &["ls-files"]) {
        Ok(Some(files)) => files,
        _ => Vec::new(),
    }
}

/* ============================================================
   Tests
   ============================================================ */
