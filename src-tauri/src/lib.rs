//! Command Guide Backend
//!
//! Layered architecture:
//! - domain: Core entities and the shared error type
//! - content: Embedded guide document and search
//! - repository: Remote stores (Firestore, GitHub)
//! - service: Comment subscriptions and contribution review
//! - commands: Tauri command handlers

use tauri::Manager;

mod config;
mod domain;
mod content;
mod repository;
mod service;
mod commands;

use config::AppConfig;
use content::ContentStore;
use service::{CommentsHub, ContributionReview};

/// Application state shared across commands
pub struct AppState {
    pub content: ContentStore,
    pub comments: CommentsHub,
    pub review: ContributionReview,
}

impl AppState {
    fn load(config_dir: Option<&std::path::Path>) -> Result<Self, domain::DomainError> {
        let config = config_dir.map(AppConfig::load).unwrap_or_default();
        let content = ContentStore::load(config_dir)?;
        log::info!(
            "Guide '{}' loaded with {} sections",
            content.info().title,
            content.sections().len()
        );
        Ok(Self {
            content,
            comments: CommentsHub::from_config(config.firestore.as_ref()),
            review: ContributionReview::from_config(config.admin.as_ref()),
        })
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            let log_dir = app_handle.path().app_log_dir()?;
            rolling_logger::init_logger(&log_dir, "CommandGuide")?;

            let config_dir = config::resolve_config_dir(app_handle.path().app_config_dir().ok());
            match &config_dir {
                Some(dir) => log::info!("Reading configuration from {}", dir.display()),
                None => log::warn!("No configuration directory available"),
            }

            let state = AppState::load(config_dir.as_deref())?;
            app.manage(state);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Guide content
            commands::get_guide_info,
            commands::list_sections,
            commands::search_sections,
            // Comments
            commands::comments_status,
            commands::subscribe_comments,
            commands::unsubscribe_comments,
            commands::submit_comment,
            commands::vote_comment,
            // Admin
            commands::list_contributions,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_without_config_dir_uses_embedded_guide() {
        let state = AppState::load(None).unwrap();
        assert!(!state.content.sections().is_empty());
        assert_eq!(state.comments.status(), service::CommentsStatus::Disabled);
        assert!(!state.review.is_configured());
    }

    #[test]
    fn test_state_picks_up_admin_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(config::ADMIN_CONFIG_FILE),
            r#"{"githubToken": "ghp_x", "owner": "me", "repo": "guide"}"#,
        )
        .unwrap();

        let state = AppState::load(Some(dir.path())).unwrap();
        assert!(state.review.is_configured());
        assert_eq!(state.comments.status(), service::CommentsStatus::Disabled);
    }
}
