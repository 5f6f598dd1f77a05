//! Optional Credentials
//!
//! Two JSON files in the config directory switch on the remote features:
//! `firebase.config.json` for comments and `admin.config.json` for the
//! contribution review. A missing or unreadable file leaves the feature off.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const FIREBASE_CONFIG_FILE: &str = "firebase.config.json";
pub const ADMIN_CONFIG_FILE: &str = "admin.config.json";

/// Overrides the platform config directory
pub const CONFIG_DIR_ENV: &str = "COMMAND_GUIDE_CONFIG_DIR";

pub const DEFAULT_FIRESTORE_URL: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
const DEFAULT_POLL_INTERVAL_MS: u64 = 2500;
const MIN_POLL_INTERVAL_MS: u64 = 250;

/// Document database connection parameters (Firebase web app config)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirestoreConfig {
    pub api_key: String,
    pub project_id: String,
    #[serde(default)]
    pub auth_domain: Option<String>,
    #[serde(default)]
    pub storage_bucket: Option<String>,
    #[serde(default)]
    pub messaging_sender_id: Option<String>,
    #[serde(default)]
    pub app_id: Option<String>,
    #[serde(default)]
    pub measurement_id: Option<String>,
    /// How often subscribed sections are re-read
    #[serde(default)]
    pub poll_interval_ms: Option<u64>,
    /// REST root, e.g. an emulator at `http://localhost:8080/v1`
    #[serde(default)]
    pub base_url: Option<String>,
}

impl FirestoreConfig {
    pub fn new(api_key: &str, project_id: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            project_id: project_id.to_string(),
            auth_domain: None,
            storage_bucket: None,
            messaging_sender_id: None,
            app_id: None,
            measurement_id: None,
            poll_interval_ms: None,
            base_url: None,
        }
    }

    pub fn poll_interval(&self) -> Duration {
        let ms = self
            .poll_interval_ms
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS)
            .max(MIN_POLL_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_FIRESTORE_URL)
            .trim_end_matches('/')
    }

    fn is_complete(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.project_id.trim().is_empty()
    }
}

/// Issue-tracker credentials for the admin view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminConfig {
    pub github_token: String,
    pub owner: String,
    pub repo: String,
    /// REST root for GitHub Enterprise installs
    #[serde(default)]
    pub api_base_url: Option<String>,
}

impl AdminConfig {
    pub fn new(token: &str, owner: &str, repo: &str) -> Self {
        Self {
            github_token: token.to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            api_base_url: None,
        }
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url
            .as_deref()
            .unwrap_or(DEFAULT_GITHUB_API_URL)
            .trim_end_matches('/')
    }

    fn is_complete(&self) -> bool {
        [&self.github_token, &self.owner, &self.repo]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}

/// Everything optional the app reads at startup
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub firestore: Option<FirestoreConfig>,
    pub admin: Option<AdminConfig>,
}

impl AppConfig {
    pub fn load(config_dir: &Path) -> Self {
        let firestore = load_optional::<FirestoreConfig>(&config_dir.join(FIREBASE_CONFIG_FILE))
            .filter(|c| {
                let complete = c.is_complete();
                if !complete {
                    log::warn!("{} is missing apiKey or projectId", FIREBASE_CONFIG_FILE);
                }
                complete
            });
        let admin = load_optional::<AdminConfig>(&config_dir.join(ADMIN_CONFIG_FILE))
            .filter(|c| {
                let complete = c.is_complete();
                if !complete {
                    log::warn!("{} is missing githubToken, owner or repo", ADMIN_CONFIG_FILE);
                }
                complete
            });

        if firestore.is_none() {
            log::warn!("Firebase not configured. Comments disabled.");
        }
        if admin.is_none() {
            log::info!("Admin config not found. Contribution review unavailable.");
        }

        Self { firestore, admin }
    }
}

/// Resolve the config directory: env override first, then the platform dir
pub fn resolve_config_dir(platform_dir: Option<PathBuf>) -> Option<PathBuf> {
    std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .or(platform_dir)
}

/// Read a JSON file, treating absence and parse failures as "not configured"
pub fn load_optional<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            log::warn!("Cannot read {}: {}", path.display(), e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring malformed {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_files_disable_everything() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path());
        assert!(config.firestore.is_none());
        assert!(config.admin.is_none());
    }

    #[test]
    fn test_reads_firebase_web_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(FIREBASE_CONFIG_FILE),
            r#"{
                "apiKey": "AIza-test",
                "authDomain": "guide.firebaseapp.com",
                "projectId": "guide",
                "storageBucket": "guide.appspot.com",
                "messagingSenderId": "123",
                "appId": "1:123:web:abc"
            }"#,
        )
        .unwrap();

        let config = AppConfig::load(dir.path());
        let firestore = config.firestore.expect("firestore config");
        assert_eq!(firestore.project_id, "guide");
        assert_eq!(firestore.base_url(), DEFAULT_FIRESTORE_URL);
        assert_eq!(firestore.poll_interval(), Duration::from_millis(2500));
    }

    #[test]
    fn test_reads_admin_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(ADMIN_CONFIG_FILE),
            r#"{"githubToken": "ghp_x", "owner": "me", "repo": "guide"}"#,
        )
        .unwrap();

        let admin = AppConfig::load(dir.path()).admin.expect("admin config");
        assert_eq!(admin.owner, "me");
        assert_eq!(admin.api_base_url(), DEFAULT_GITHUB_API_URL);
    }

    #[test]
    fn test_malformed_file_is_treated_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(ADMIN_CONFIG_FILE), "export const adminConfig = {}").unwrap();
        assert!(AppConfig::load(dir.path()).admin.is_none());
    }

    #[test]
    fn test_blank_credentials_are_treated_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(FIREBASE_CONFIG_FILE),
            r#"{"apiKey": "", "projectId": "guide"}"#,
        )
        .unwrap();
        assert!(AppConfig::load(dir.path()).firestore.is_none());
    }

    #[test]
    fn test_poll_interval_has_a_floor() {
        let mut config = FirestoreConfig::new("k", "p");
        config.poll_interval_ms = Some(10);
        assert_eq!(config.poll_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let mut config = AdminConfig::new("t", "o", "r");
        config.api_base_url = Some("https://ghe.example.com/api/v3/".to_string());
        assert_eq!(config.api_base_url(), "https://ghe.example.com/api/v3");
    }
}
