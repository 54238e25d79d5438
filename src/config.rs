// src/config.rs
//
// Runtime configuration for the generation pipeline.
//
// Built once in main and passed by reference everywhere; nothing in here
// mutates after startup. A JSON file in the user config directory can
// override the defaults, and CLI flags override the file.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Framework requested when an extension has no mapping (regenerate path).
pub const FALLBACK_FRAMEWORK: &str = "pytest";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend_url: String,
    pub out_dir: PathBuf,
    pub report_path: PathBuf,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:5000".into(),
            out_dir: PathBuf::from("generated_unit_test_cases"),
            report_path: PathBuf::from("generated_tests_report.md"),
            timeout_secs: 60,
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/* ============================================================
   Closed lookup tables
   ============================================================ */

/// Extension → test framework. Doubles as the supported-extension
/// allow-list: `None` means the file is out of scope for generation.
pub fn framework_for(ext: &str) -> Option<&'static str> {
    match ext {
        "py" => Some("pytest"),
        "java" => Some("JUnit"),
        _ => None,
    }
}

/// Detected language → artifact file extension, case-insensitive.
pub fn artifact_extension(language: &str) -> &'static str {
    match language.to_ascii_lowercase().as_str() {
        "python" => "py",
        "java" => "java",
        _ => "txt",
    }
}

/// Extension → language label, for the paths where the backend does not
/// report one (feedback regeneration).
pub fn language_for(ext: &str) -> &'static str {
    match ext {
        "py" => "Python",
        "java" => "Java",
        _ => "Unknown",
    }
}

/* ============================================================
   Persisted overrides
   ============================================================ */

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("testforge/config.json")
}

pub fn load_config() -> Option<Config> {
    fs::read_to_string(config_path())
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
}

pub fn save_config(cfg: &Config) -> std::io::Result<()> {
    let path = config_path();
    if let Some(p) = path.parent() {
        fs::create_dir_all(p)?;
    }
    let json = serde_json::to_string_pretty(cfg).map_err(std::io::Error::other)?;
    fs::write(path, json)
}

/* ============================================================
   Tests
   ============================================================ */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_map_covers_supported_extensions() {
        assert_eq!(framework_for("py"), Some("pytest"));
        assert_eq!(framework_for("java"), Some("JUnit"));
        assert_eq!(framework_for("txt"), None);
        assert_eq!(framework_for("rs"), None);
    }

    #[test]
    fn artifact_extension_is_case_insensitive() {
        assert_eq!(artifact_extension("Python"), "py");
        assert_eq!(artifact_extension("PYTHON"), "py");
        assert_eq!(artifact_extension("Java"), "java");
        assert_eq!(artifact_extension("Kotlin"), "txt");
        assert_eq!(artifact_extension("Unknown"), "txt");
    }

    #[test]
    fn language_for_extension_defaults_to_unknown() {
        assert_eq!(language_for("py"), "Python");
        assert_eq!(language_for("java"), "Java");
        assert_eq!(language_for("md"), "Unknown");
    }

    #[test]
    fn partial_config_file_keeps_defaults_for_missing_fields() {
        let cfg: Config =
            serde_json::from_str(r#"{"backend_url": "http://10.0.0.1:5000"}"#).unwrap();
        assert_eq!(cfg.backend_url, "http://10.0.0.1:5000");
        assert_eq!(cfg.out_dir, PathBuf::from("generated_unit_test_cases"));
        assert_eq!(cfg.report_path, PathBuf::from("generated_tests_report.md"));
        assert_eq!(cfg.timeout_secs, 60);
    }
}
