// src/backend.rs
//
// Client for the test-generation backend service. One synchronous
// round-trip per call; no retries. Transport and protocol failures map to
// `Generation::Failed`, never to a panic or a propagated error — a failed
// call is equivalent to "no tests produced".

use std::time::Duration;

use serde_json::{json, Value};

/// Language reported when the backend omits `detected_language`.
pub const DEFAULT_LANGUAGE: &str = "Unknown";

/// Test text recorded when the backend omits `generated_tests` or the
/// request fails outright.
pub const FAILED_SENTINEL: &str = "Failed to generate.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    Produced {
        detected_language: String,
        generated_tests: String,
    },
    Failed(String),
}

pub struct BackendClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, String> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// POST /generate_tests — the backend detects the language and writes
    /// tests in the requested framework.
    pub fn generate_tests(&self, code: &str, framework: &str) -> Generation {
        self.post(
            "/generate_tests",
            json!({ "code": code, "framework": framework }),
        )
    }

    /// POST /regenerate_tests_with_feedback — same contract, steered by
    /// operator feedback. The response carries no detected language.
    pub fn regenerate_with_feedback(
        &self,
        code: &str,
        framework: &str,
        feedback: &str,
    ) -> Generation {
        self.post(
            "/regenerate_tests_with_feedback",
            json!({ "code": code, "framework": framework, "feedback": feedback }),
        )
    }

    fn post(&self, endpoint: &str, body: Value) -> Generation {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .and_then(|r| r.json::<Value>());

        match response {
            Ok(v) => parse_response(&v),
            Err(e) => Generation::Failed(format!("API error: {e}")),
        }
    }
}

/// The backend signals failure by shape, not status: an `error` key means
/// the call produced nothing usable. Missing success keys get defaults.
fn parse_response(v: &Value) -> Generation {
    if let Some(err) = v.get("error").and_then(Value::as_str) {
        return Generation::Failed(err.to_string());
    }

    let detected_language = v
        .get("detected_language")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_LANGUAGE)
        .to_string();

    let generated_tests = v
        .get("generated_tests")
        .and_then(Value::as_str)
        .unwrap_or(FAILED_SENTINEL)
        .to_string();

    Generation::Produced {
        detected_language,
        generated_tests,
    }
}

/* ============================================================
   Tests
   ============================================================ */
