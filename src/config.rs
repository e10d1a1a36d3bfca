//! Board Configuration
//!
//! Where the REST API lives and how long the notes field must be quiet
//! before it is saved.

use std::time::Duration;

use wasm_bindgen::JsCast;

/// Quiescence before a note edit is persisted
pub const NOTES_DEBOUNCE: Duration = Duration::from_millis(500);

/// `<meta name="vibe-board-api" content="https://host:port">` overrides the API origin
pub const API_BASE_META: &str = "vibe-board-api";

#[derive(Clone, Debug, PartialEq)]
pub struct BoardConfig {
    /// Origin the `/api/...` paths are joined onto, without trailing slash
    pub api_base: String,
    pub notes_debounce: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new("")
    }
}

impl BoardConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        Self {
            api_base: api_base.trim().trim_end_matches('/').to_string(),
            notes_debounce: NOTES_DEBOUNCE,
        }
    }

    /// Resolve from the page: the meta override if present, else the page origin.
    pub fn from_document() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let meta_base = window
            .document()
            .and_then(|doc| doc.query_selector(&format!("meta[name=\"{}\"]", API_BASE_META)).ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
            .map(|meta| meta.content())
            .filter(|content| !content.trim().is_empty());

        match meta_base {
            Some(base) => Self::new(base),
            None => Self::new(window.location().origin().unwrap_or_default()),
        }
    }

    /// Absolute URL for an API path such as `/api/tasks`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_ignored() {
        let config = BoardConfig::new("http://localhost:8000/");
        assert_eq!(config.api_base, "http://localhost:8000");
        assert_eq!(config.url("/api/tasks"), "http://localhost:8000/api/tasks");
        assert_eq!(config.url("api/note"), "http://localhost:8000/api/note");
    }

    #[test]
    fn test_default_debounce() {
        assert_eq!(BoardConfig::default().notes_debounce, Duration::from_millis(500));
        assert_eq!(BoardConfig::default().url("/api/tasks"), "/api/tasks");
    }
}
