//! Connection settings for the hosted repository
//!
//! Resolved from the environment on every save request, like the original
//! serverless deployment: a missing setting is a request-time error, not a
//! boot failure.

use crate::github::PublishError;

#[derive(Debug, Clone)]
pub struct PublishConfig {
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub file_path: String,
}

impl PublishConfig {
    pub fn from_env() -> Result<Self, PublishError> {
        let token = required("GITHUB_TOKEN")?;
        let owner = required("REPO_OWNER")?;
        let repo = required("REPO_NAME")?;

        let branch = std::env::var("REPO_BRANCH").unwrap_or_else(|_| "main".to_string());
        let file_path = std::env::var("DATA_FILE_PATH").unwrap_or_else(|_| "data.json".to_string());

        Ok(Self {
            token,
            owner,
            repo,
            branch,
            file_path,
        })
    }

    /// GitHub contents API URL for the data file
    pub fn contents_url(&self) -> String {
        format!(
            "https://api.github.com/repos/{}/{}/contents/{}",
            self.owner, self.repo, self.file_path
        )
    }
}

fn required(key: &str) -> Result<String, PublishError> {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(PublishError::MissingSettings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env mutation is process-global; serialize the tests that touch it.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env(vars: &[(&str, Option<&str>)], f: impl FnOnce()) {
        let _guard = ENV_LOCK.lock().unwrap();
        for (key, value) in vars {
            match value {
                Some(v) => unsafe { std::env::set_var(key, v) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
        f();
        for (key, _) in vars {
            unsafe { std::env::remove_var(key) };
        }
    }

    #[test]
    fn test_missing_token_is_missing_settings() {
        with_env(
            &[
                ("GITHUB_TOKEN", None),
                ("REPO_OWNER", Some("acme")),
                ("REPO_NAME", Some("landing")),
            ],
            || {
                let err = PublishConfig::from_env().unwrap_err();
                assert_eq!(err.to_string(), "Missing Connection Settings");
            },
        );
    }

    #[test]
    fn test_defaults_for_branch_and_path() {
        with_env(
            &[
                ("GITHUB_TOKEN", Some("t0ken")),
                ("REPO_OWNER", Some("acme")),
                ("REPO_NAME", Some("landing")),
                ("REPO_BRANCH", None),
                ("DATA_FILE_PATH", None),
            ],
            || {
                let cfg = PublishConfig::from_env().unwrap();
                assert_eq!(cfg.branch, "main");
                assert_eq!(cfg.file_path, "data.json");
                assert_eq!(
                    cfg.contents_url(),
                    "https://api.github.com/repos/acme/landing/contents/data.json"
                );
            },
        );
    }
}
