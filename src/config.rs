//! Page Configuration
//!
//! Constants plus the bootstrap data the server page embeds as a JSON
//! script tag (Django `json_script`).

use std::collections::BTreeSet;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Member, OrgProfile, ProgramOption};

/// Element the app mounts into; `<body>` when absent
pub const MOUNT_ROOT_ID: &str = "org-app";
/// `<script type="application/json">` holding [`PageConfig`]
pub const CONFIG_ELEMENT_ID: &str = "org-page-config";
/// Hidden input rendered by `{% csrf_token %}`
pub const CSRF_INPUT_SELECTOR: &str = "[name=csrfmiddlewaretoken]";
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Time the "removing" row transition gets before the record is dropped
pub const REMOVAL_DELAY_MS: u32 = 300;
/// How long the success banner stays up
pub const SUCCESS_BANNER_MS: u32 = 3_000;

pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png"];
pub const DESCRIPTION_MAX_CHARS: usize = 500;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config element #{0} not found")]
    Missing(&'static str),
    #[error("invalid page config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Bootstrap data rendered by the server alongside the mount root
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub csrf_token: Option<String>,
    pub organization: OrgProfile,
    /// Checklist offered by the programs modal
    pub programs: Vec<ProgramOption>,
    /// Ids of the programs currently allowed to join
    pub allowed_programs: Vec<String>,
    /// Members known to the server; the sample roster is used when empty
    pub members: Vec<Member>,
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the config script from the current document
    pub fn from_document() -> Result<Self, ConfigError> {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .ok_or(ConfigError::Missing(CONFIG_ELEMENT_ID))?;
        Self::from_json(&text)
    }

    /// Like [`from_document`](Self::from_document), falling back to defaults
    pub fn load() -> Self {
        match Self::from_document() {
            Ok(config) => {
                for id in config.duplicate_member_ids() {
                    web_sys::console::warn_1(&format!("[CONFIG] Member id {} repeats, later entries renumbered", id).into());
                }
                config
            }
            Err(ConfigError::Missing(id)) => {
                web_sys::console::log_1(&format!("[CONFIG] No #{} on page, using defaults", id).into());
                Self::default()
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("[CONFIG] {}, using defaults", e).into());
                Self::default()
            }
        }
    }

    /// Member ids that appear more than once, in first-repeat order
    pub fn duplicate_member_ids(&self) -> Vec<u32> {
        let mut seen = BTreeSet::new();
        let mut repeated = Vec::new();
        for member in &self.members {
            if !seen.insert(member.id) && !repeated.contains(&member.id) {
                repeated.push(member.id);
            }
        }
        repeated
    }

    /// Program options whose ids are currently allowed, in checklist order.
    /// Allowed ids with no matching option are kept with the id as label.
    pub fn initial_programs(&self) -> Vec<ProgramOption> {
        self.allowed_programs
            .iter()
            .map(|id| {
                self.programs
                    .iter()
                    .find(|p| &p.id == id)
                    .cloned()
                    .unwrap_or_else(|| ProgramOption { id: id.clone(), label: id.clone() })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn parses_full_config() {
        let raw = r#"{
            "csrf_token": "tok",
            "organization": {"name": "Chess Club", "description": "We play.", "adviser": "Dr. Reyes", "is_public": true, "profile_picture": "/media/chess.png"},
            "programs": [{"id": "1", "label": "BSCS"}, {"id": "2", "label": "BSIT"}],
            "allowed_programs": ["2"],
            "members": [{"id": 10, "name": "Ana Cruz", "role": "Officer", "status": "pending"}]
        }"#;
        let config = PageConfig::from_json(raw).unwrap();
        assert_eq!(config.csrf_token.as_deref(), Some("tok"));
        assert_eq!(config.organization.name, "Chess Club");
        assert!(config.organization.is_public);
        assert_eq!(config.organization.image_url.as_deref(), Some("/media/chess.png"));
        assert_eq!(config.members[0].role, Role::Officer);
        assert_eq!(config.initial_programs(), vec![ProgramOption { id: "2".into(), label: "BSIT".into() }]);
    }

    #[test]
    fn repeated_member_ids_are_reported() {
        let raw = r#"{"members": [
            {"id": 7, "name": "Ana Cruz", "role": "member"},
            {"id": 7, "name": "Ben Diaz", "role": "member"},
            {"id": 2, "name": "Cy Lim", "role": "officer"},
            {"id": 7, "name": "Dee Ong", "role": "admin"}
        ]}"#;
        let config = PageConfig::from_json(raw).unwrap();
        assert_eq!(config.duplicate_member_ids(), vec![7]);
        assert!(PageConfig::default().duplicate_member_ids().is_empty());
    }

    #[test]
    fn everything_is_optional() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn unknown_allowed_id_keeps_id_as_label() {
        let config = PageConfig { allowed_programs: vec!["9".into()], ..Default::default() };
        assert_eq!(config.initial_programs(), vec![ProgramOption { id: "9".into(), label: "9".into() }]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(PageConfig::from_json("{"), Err(ConfigError::Json(_))));
        assert!(matches!(
            PageConfig::from_json(r#"{"members": [{"id": 1, "name": "X", "role": "leader"}]}"#),
            Err(ConfigError::Json(_))
        ));
    }
}
