// src/report.rs

use std::fs;
use std::io;
use std::path::Path;

use crate::pipeline::ResultRecord;

/// Overwrites `path` with one line per record, in processing order. The
/// caller guarantees `records` is non-empty; an empty run never reaches
/// here.
pub fn write_report(path: &Path, records: &[ResultRecord]) -> io::Result<()> {
    let mut out = String::new();

    for r in records {
        out.push_str(&format!(
            "- `{}` → **{}** ({}, {})\n",
            r.file,
            r.artifact.display(),
            r.language,
            r.framework
        ));
    }

    fs::write(path, out)
}
