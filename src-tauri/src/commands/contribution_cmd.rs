//! Tauri Commands for the Admin View

use tauri::State;
use crate::domain::ContributionIssue;
use crate::AppState;

/// Open issues labeled `contribution`, fetched fresh on every call
#[tauri::command]
pub async fn list_contributions(state: State<'_, AppState>) -> Result<Vec<ContributionIssue>, String> {
    state.review.fetch_open().await.map_err(|e| e.to_string())
}
