//! GitHub contents API client
//!
//! Commits the payload as pretty-printed JSON via a read-modify-write of
//! the file's revision SHA. The SHA match is optimistic concurrency, not a
//! lock: two concurrent saves can still race, and the loser surfaces as a
//! commit failure rather than a silent overwrite.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::{Value, json};
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::config::PublishConfig;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Missing Connection Settings")]
    MissingSettings,

    #[error("Failed to fetch revision: {0}")]
    FetchRevision(String),

    #[error("Commit failed: {0}")]
    Commit(String),

    #[error("Invalid payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub struct GithubClient {
    http: reqwest::Client,
    cfg: PublishConfig,
}

impl GithubClient {
    pub fn new(cfg: PublishConfig) -> Self {
        // The GitHub API rejects requests without a User-Agent.
        let http = reqwest::Client::builder()
            .user_agent("nr-publish/0.1")
            .build()
            .unwrap_or_default();

        Self { http, cfg }
    }

    /// Commit the payload to the data file
    pub async fn commit_payload(&self, payload: &Value) -> Result<(), PublishError> {
        let sha = self.current_sha().await?;

        let pretty = serde_json::to_string_pretty(payload)?;
        let body = json!({
            "message": commit_message(&self.cfg.file_path, &rfc3339_now()),
            "content": BASE64.encode(pretty),
            "sha": sha,
            "branch": self.cfg.branch,
        });

        let response = self
            .http
            .put(self.cfg.contents_url())
            .bearer_auth(&self.cfg.token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| v["message"].as_str().map(str::to_string))
                .unwrap_or_else(|| status.to_string());
            return Err(PublishError::Commit(detail));
        }

        Ok(())
    }

    /// Fetch the file's current revision SHA
    async fn current_sha(&self) -> Result<String, PublishError> {
        let response = self
            .http
            .get(self.cfg.contents_url())
            .bearer_auth(&self.cfg.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PublishError::FetchRevision(response.status().to_string()));
        }

        let meta: Value = response.json().await?;
        meta["sha"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| PublishError::FetchRevision("response missing sha".to_string()))
    }
}

fn rfc3339_now() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string())
}

fn commit_message(file_path: &str, timestamp: &str) -> String {
    format!("Update {file_path} via Admin Panel [{timestamp}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_message_format() {
        let msg = commit_message("data.json", "2026-08-28T12:00:00Z");
        assert_eq!(msg, "Update data.json via Admin Panel [2026-08-28T12:00:00Z]");
    }

    #[test]
    fn test_payload_encoding_roundtrip() {
        let payload = json!({ "games": [{ "name": "Fortune Ox" }] });
        let pretty = serde_json::to_string_pretty(&payload).unwrap();
        let encoded = BASE64.encode(&pretty);

        let decoded = BASE64.decode(encoded).unwrap();
        let parsed: Value = serde_json::from_slice(&decoded).unwrap();
        assert_eq!(parsed, payload);

        // Pretty-printed, like the original commit contents.
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_error_messages_are_structured() {
        assert_eq!(
            PublishError::FetchRevision("404 Not Found".into()).to_string(),
            "Failed to fetch revision: 404 Not Found"
        );
        assert_eq!(
            PublishError::Commit("is at abc123 but expected def456".into()).to_string(),
            "Commit failed: is at abc123 but expected def456"
        );
    }
}
