// Author: Dustin Pilgrim
// License: MIT

use serde::Deserialize;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

const BUNDLED: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en.json")),
    ("es", include_str!("../locales/es.json")),
    ("fr", include_str!("../locales/fr.json")),
];

/// Resolved user-facing strings for one language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub unnamed_task: String,
    pub elapsed_time: String,
    pub laps: String,
    pub task: String,
    pub total_time: String,
    pub error_writing_history: String,
    pub history: String,
    pub error_reading_history: String,
    pub show_all_history: String,
    pub yes: String,
    pub delete_history: String,
    pub error_deleting_history: String,
    pub history_deleted: String,
    pub operation_cancelled: String,
    pub timer_started: String,
    pub tracking_task: String,
    pub available_commands: String,
    pub type_lap: String,
    pub type_stop: String,
    pub press_ctrl_c: String,
    pub history_end: String,
    pub unknown_command: String,
}

#[derive(Debug)]
pub enum CatalogError {
    /// No override file and no bundled catalog for this language.
    Unsupported(String),
    Io { lang: String, path: PathBuf, source: io::Error },
    Parse { lang: String, source: serde_json::Error },
}

impl CatalogError {
    pub fn lang(&self) -> &str {
        match self {
            CatalogError::Unsupported(lang)
            | CatalogError::Io { lang, .. }
            | CatalogError::Parse { lang, .. } => lang,
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Unsupported(lang) => write!(
                f,
                "Unsupported language: {lang} (bundled: {})",
                Catalog::bundled_languages().collect::<Vec<_>>().join(", ")
            ),
            CatalogError::Io { lang, path, source } =>
                write!(f, "Error loading language file for {lang} ({}): {source}", path.display()),
            CatalogError::Parse { lang, source } =>
                write!(f, "Error loading language file for {lang}: {source}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl Catalog {
    /// Loads `lang`, preferring `<override_dir>/<lang>.json` over the bundled copy.
    pub fn load(lang: &str, override_dir: Option<&Path>) -> Result<Self, CatalogError> {
        if !is_valid_lang(lang) {
            return Err(CatalogError::Unsupported(lang.to_string()));
        }

        if let Some(dir) = override_dir {
            let path = dir.join(format!("{lang}.json"));
            match std::fs::read_to_string(&path) {
                Ok(text) => return Self::from_json(lang, &text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(CatalogError::Io {
                        lang: lang.to_string(),
                        path,
                        source: e,
                    });
                }
            }
        }

        let text = BUNDLED
            .iter()
            .find(|(code, _)| *code == lang)
            .map(|(_, text)| *text)
            .ok_or_else(|| CatalogError::Unsupported(lang.to_string()))?;

        Self::from_json(lang, text)
    }

    pub fn from_json(lang: &str, text: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(text).map_err(|e| CatalogError::Parse {
            lang: lang.to_string(),
            source: e,
        })
    }

    /// Case-insensitive match against the catalog's affirmative token.
    pub fn is_yes(&self, answer: &str) -> bool {
        answer.trim().to_lowercase() == self.yes.trim().to_lowercase()
    }

    pub fn bundled_languages() -> impl Iterator<Item = &'static str> {
        BUNDLED.iter().map(|(code, _)| *code)
    }
}

fn is_valid_lang(lang: &str) -> bool {
    !lang.is_empty()
        && lang
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalogs_parse() {
        for lang in Catalog::bundled_languages() {
            let cat = Catalog::load(lang, None).unwrap();
            assert!(!cat.yes.is_empty(), "{lang} has empty yes token");
        }
    }

    #[test]
    fn test_unknown_language() {
        let err = Catalog::load("xx", None).unwrap_err();
        assert!(matches!(err, CatalogError::Unsupported(_)));
        assert_eq!(err.lang(), "xx");
        assert!(err.to_string().contains("xx"));
    }

    #[test]
    fn test_rejects_path_like_codes() {
        assert!(matches!(
            Catalog::load("../en", None),
            Err(CatalogError::Unsupported(_))
        ));
        assert!(matches!(Catalog::load("", None), Err(CatalogError::Unsupported(_))));
    }

    #[test]
    fn test_missing_key_is_parse_error() {
        let err = Catalog::from_json("en", r#"{"yes": "y"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_override_dir_wins() {
        let dir = tempfile::tempdir().unwrap();
        let mut value: serde_json::Value =
            serde_json::from_str(include_str!("../locales/en.json")).unwrap();
        value["yes"] = serde_json::Value::String("yep".into());
        std::fs::write(dir.path().join("en.json"), value.to_string()).unwrap();

        let cat = Catalog::load("en", Some(dir.path())).unwrap();
        assert_eq!(cat.yes, "yep");

        // Falls back to the bundled copy when the override dir lacks the file.
        let cat = Catalog::load("es", Some(dir.path())).unwrap();
        assert_eq!(cat, Catalog::load("es", None).unwrap());
    }

    #[test]
    fn test_override_dir_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.json"), "{ not json").unwrap();
        assert!(matches!(
            Catalog::load("en", Some(dir.path())),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn test_is_yes() {
        let cat = Catalog::load("en", None).unwrap();
        assert!(cat.is_yes("y"));
        assert!(cat.is_yes("Y"));
        assert!(cat.is_yes(" y "));
        assert!(!cat.is_yes("n"));
        assert!(!cat.is_yes(""));
    }
}
