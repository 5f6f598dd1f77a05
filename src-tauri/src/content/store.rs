//! Content Store
//!
//! Loads the guide document once at startup. The embedded copy ships with
//! the binary; a `guide.json` in the config directory replaces it.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult, Entity, Section};
use super::search::{guide_view, GuideView};

/// File name looked up in the config directory
pub const CONTENT_FILE_NAME: &str = "guide.json";

const EMBEDDED_CONTENT: &str = include_str!("../../data/guide.json");

/// Header metadata of the guide document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideInfo {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// Repository that receives feedback and contribution issues
    #[serde(default)]
    pub repo_url: Option<String>,
}

fn default_title() -> String {
    "Command Guide".to_string()
}

impl Default for GuideInfo {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: String::new(),
            repo_url: None,
        }
    }
}

#[derive(Deserialize)]
struct ContentFile {
    #[serde(flatten)]
    info: GuideInfo,
    sections: Vec<Section>,
}

/// Immutable, validated guide content
#[derive(Debug, Clone)]
pub struct ContentStore {
    info: GuideInfo,
    sections: Vec<Section>,
}

impl ContentStore {
    pub fn new(info: GuideInfo, sections: Vec<Section>) -> DomainResult<Self> {
        validate_ids(&sections)?;
        Ok(Self { info, sections })
    }

    /// The copy compiled into the binary
    pub fn embedded() -> DomainResult<Self> {
        Self::from_json_str(EMBEDDED_CONTENT)
    }

    pub fn from_json_str(json: &str) -> DomainResult<Self> {
        let file: ContentFile = serde_json::from_str(json)?;
        Self::new(file.info, file.sections)
    }

    pub fn from_path(path: &Path) -> DomainResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| DomainError::Internal(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// Load the override from `config_dir` when present, else the embedded copy.
    ///
    /// A broken override is logged and skipped.
    pub fn load(config_dir: Option<&Path>) -> DomainResult<Self> {
        if let Some(path) = config_dir.map(|dir| dir.join(CONTENT_FILE_NAME)) {
            if path.exists() {
                match Self::from_path(&path) {
                    Ok(store) => {
                        log::info!("Loaded guide content from {}", path.display());
                        return Ok(store);
                    }
                    Err(e) => log::warn!("Ignoring {}: {}", path.display(), e),
                }
            }
        }
        Self::embedded()
    }

    pub fn info(&self) -> &GuideInfo {
        &self.info
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn first_section_id(&self) -> Option<&str> {
        self.sections.first().map(|s| s.id.as_str())
    }

    pub fn contains_section(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }

    /// Comments may only attach to sections of the loaded guide
    pub fn require_section(&self, id: &str) -> DomainResult<()> {
        if self.contains_section(id) {
            Ok(())
        } else {
            Err(DomainError::InvalidInput(format!("unknown section '{}'", id)))
        }
    }

    /// What the guide should display for a query and the selected section
    pub fn view(&self, query: &str, active_section: Option<&str>) -> GuideView {
        guide_view(&self.sections, query, active_section)
    }
}

fn validate_ids(sections: &[Section]) -> DomainResult<()> {
    let mut seen = HashSet::new();
    for section in sections {
        let id = section.id();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidInput(format!(
                "section '{}' has an empty id",
                section.label
            )));
        }
        if !seen.insert(id.clone()) {
            return Err(DomainError::InvalidInput(format!("duplicate section id '{}'", id)));
        }
    }
    Ok(())
}
