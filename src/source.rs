// src/source.rs

use std::fs;
use std::path::Path;

/// Full UTF-8 text of `path`, or an empty string when the file is missing,
/// unreadable, or not valid UTF-8. The failure is surfaced on stderr for
/// the operator; the caller only ever sees the empty sentinel.
pub fn read_content(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("could not read {}: {}", path.display(), e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_full_file_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.py");
        fs::write(&path, "class A:\n    pass\n").unwrap();

        assert_eq!(read_content(&path), "class A:\n    pass\n");
    }

    #[test]
    fn missing_file_becomes_empty_string() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_content(&dir.path().join("gone.py")), "");
    }

    #[test]
    fn invalid_utf8_becomes_empty_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin.py");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert_eq!(read_content(&path), "");
    }
}
