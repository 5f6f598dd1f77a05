//! Tauri Commands for Guide Content
//!
//! Read-only access to the loaded guide and the search engine.

use tauri::State;
use crate::content::{GuideInfo, GuideView};
use crate::domain::Section;
use crate::AppState;

/// Header metadata (title, subtitle, repository link)
#[tauri::command]
pub async fn get_guide_info(state: State<'_, AppState>) -> Result<GuideInfo, String> {
    Ok(state.content.info().clone())
}

/// All sections in content-file order
#[tauri::command]
pub async fn list_sections(state: State<'_, AppState>) -> Result<Vec<Section>, String> {
    Ok(state.content.sections().to_vec())
}

/// Browse the active section, or search every section when `query` is not blank
#[tauri::command]
pub async fn search_sections(
    state: State<'_, AppState>,
    query: String,
    active_section: Option<String>,
) -> Result<GuideView, String> {
    let active = active_section
        .as_deref()
        .or_else(|| state.content.first_section_id());
    Ok(state.content.view(&query, active))
}
