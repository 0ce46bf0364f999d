use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A hand-written summary for one competitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeEntry {
    /// Competitor identifier, matched exactly and case-sensitively.
    pub competitor: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct NarrativesFile {
    #[serde(default)]
    pub narratives: Vec<NarrativeEntry>,
}

/// Lookup table from competitor identifier to fixed summary text.
///
/// The default table is empty, so every competitor gets the generated
/// summary.
#[derive(Debug, Clone, Default)]
pub struct NarrativeTable {
    entries: HashMap<String, String>,
}

impl NarrativeTable {
    /// Exact-match lookup. Trailing newlines from YAML block scalars are
    /// already stripped.
    #[must_use]
    pub fn get(&self, competitor: &str) -> Option<&str> {
        self.entries.get(competitor).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<NarrativesFile> for NarrativeTable {
    type Error = ConfigError;

    fn try_from(file: NarrativesFile) -> Result<Self, Self::Error> {
        validate_narratives(&file)?;
        let entries = file
            .narratives
            .into_iter()
            .map(|n| (n.competitor, n.text.trim_end_matches('\n').to_string()))
            .collect();
        Ok(Self { entries })
    }
}

/// Load and validate the narrative table from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_narratives(path: &Path) -> Result<NarrativeTable, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::NarrativesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let table = parse_narratives(&content)?;
    tracing::debug!(
        path = %path.display(),
        narratives = table.len(),
        "loaded narrative table"
    );
    Ok(table)
}

/// Parse and validate narrative YAML already held in memory.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_narratives(content: &str) -> Result<NarrativeTable, ConfigError> {
    let file: NarrativesFile =
        serde_yaml::from_str(content).map_err(ConfigError::NarrativesFileParse)?;
    NarrativeTable::try_from(file)
}

fn validate_narratives(file: &NarrativesFile) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for entry in &file.narratives {
        if entry.competitor.trim().is_empty() {
            return Err(ConfigError::Validation(
                "narrative competitor must be non-empty".to_string(),
            ));
        }

        if entry.text.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "narrative for '{}' has empty text",
                entry.competitor
            )));
        }

        // Keys are case-sensitive, so `Cursor` and `cursor` may coexist.
        if !seen.insert(entry.competitor.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate narrative competitor: '{}'",
                entry.competitor
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(competitor: &str, text: &str) -> NarrativeEntry {
        NarrativeEntry {
            competitor: competitor.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn validate_rejects_empty_competitor() {
        let file = NarrativesFile {
            narratives: vec![entry("  ", "text")],
        };
        let err = validate_narratives(&file).unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn validate_rejects_empty_text() {
        let file = NarrativesFile {
            narratives: vec![entry("cursor_ai", "\n  \n")],
        };
        let err = validate_narratives(&file).unwrap_err();
        assert!(err.to_string().contains("empty text"));
    }

    #[test]
    fn validate_rejects_duplicate_competitor() {
        let file = NarrativesFile {
            narratives: vec![entry("cursor_ai", "a"), entry("cursor_ai", "b")],
        };
        let err = validate_narratives(&file).unwrap_err();
        assert!(err.to_string().contains("duplicate narrative competitor"));
    }

    #[test]
    fn validate_allows_keys_differing_only_in_case() {
        let file = NarrativesFile {
            narratives: vec![entry("cursor_ai", "a"), entry("Cursor_AI", "b")],
        };
        assert!(validate_narratives(&file).is_ok());
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let table = parse_narratives(
            "narratives:\n  - competitor: cursor_ai\n    text: |\n      Cursor:\n      fine\n",
        )
        .unwrap();
        assert_eq!(table.get("cursor_ai"), Some("Cursor:\nfine"));
        assert_eq!(table.get("Cursor_AI"), None);
        assert_eq!(table.get("cursor"), None);
    }

    #[test]
    fn empty_document_yields_empty_table() {
        let table = parse_narratives("narratives: []\n").unwrap();
        assert!(table.is_empty());
        assert!(NarrativeTable::default().get("anything").is_none());
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let err = parse_narratives("narratives: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::NarrativesFileParse(_)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_narratives(Path::new("/no/such/narratives.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::NarrativesFileIo { .. }));
    }

    #[test]
    fn load_narratives_from_real_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("narratives.yaml");
        assert!(
            path.exists(),
            "narratives.yaml missing at {path:?}; required for this test"
        );
        let result = load_narratives(&path);
        assert!(result.is_ok(), "failed to load narratives.yaml: {result:?}");
        let table = result.unwrap();
        assert!(table.get("cursor_ai").is_some_and(|t| t.starts_with("Cursor:")));
        assert!(table.get("codeiumdev").is_some_and(|t| t.starts_with("Codeium:")));
    }
}
