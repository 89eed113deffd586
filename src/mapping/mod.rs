//! Major to occupation mapping.
//!
//! [`MajorMapping`] is an ordered table from a major name to the occupation
//! names it leads to. It is passed into the aggregator explicitly, so tests
//! and hosts can substitute their own table. [`MajorMapping::builtin`] gives
//! the curated default, [`MajorMapping::load`] reads one from JSON:
//!
//! ```json
//! [
//!   { "major": "Physics", "occupations": ["Physicists", "Materials scientists"] }
//! ]
//! ```

mod builtin;

pub use builtin::DEFAULT_TOP_MAJORS;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum MappingError {
    #[error("Failed to read mapping file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid mapping JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One major and the occupations it maps to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MajorEntry {
    pub major: String,
    pub occupations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MajorMapping {
    entries: Vec<MajorEntry>,
}

impl MajorMapping {
    /// Builds a mapping from `(major, occupations)` pairs, keeping their order.
    ///
    /// Major names are unique; when one repeats, the first entry is kept.
    pub fn new<I, M, O, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (M, O)>,
        M: Into<String>,
        O: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut mapping = MajorMapping::default();
        for (major, occupations) in pairs {
            mapping.push(MajorEntry {
                major: major.into(),
                occupations: occupations.into_iter().map(Into::into).collect(),
            });
        }
        mapping
    }

    /// The curated table shipped with the application.
    pub fn builtin() -> Self {
        Self::new(
            builtin::BUILTIN_MAJORS
                .iter()
                .map(|(major, occupations)| (*major, occupations.iter().copied())),
        )
    }

    /// Loads a mapping from a JSON file holding an array of [`MajorEntry`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MappingError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| MappingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mapping = Self::from_json(&content)?;
        debug!(path = %path.display(), majors = mapping.len(), "Major mapping loaded");
        Ok(mapping)
    }

    pub fn from_json(json: &str) -> Result<Self, MappingError> {
        let entries: Vec<MajorEntry> = serde_json::from_str(json)?;
        let mut mapping = MajorMapping::default();
        for entry in entries {
            mapping.push(entry);
        }
        Ok(mapping)
    }

    fn push(&mut self, entry: MajorEntry) {
        if self.contains(&entry.major) {
            warn!(major = %entry.major, "Duplicate major in mapping, keeping the first entry");
            return;
        }
        self.entries.push(entry);
    }

    /// Iterates over `(major, occupations)` in mapping order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|e| (e.major.as_str(), e.occupations.as_slice()))
    }

    pub fn majors(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.major.as_str())
    }

    /// Major names sorted alphabetically, for pickers.
    pub fn sorted_majors(&self) -> Vec<&str> {
        let mut majors: Vec<&str> = self.majors().collect();
        majors.sort_unstable();
        majors
    }

    pub fn occupations_for(&self, major: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.major == major)
            .map(|e| e.occupations.as_slice())
    }

    pub fn contains(&self, major: &str) -> bool {
        self.entries.iter().any(|e| e.major == major)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_mapping() {
        let mapping = MajorMapping::builtin();

        assert_eq!(mapping.len(), 36);
        assert_eq!(mapping.majors().next(), Some("Computer Science"));
        let cs = mapping.occupations_for("Computer Science").unwrap();
        assert_eq!(cs[0], "Software developers");
    }

    #[test]
    fn test_default_top_majors_are_mapped() {
        let mapping = MajorMapping::builtin();
        for major in DEFAULT_TOP_MAJORS {
            assert!(mapping.contains(major), "{major} missing from builtin table");
        }
    }

    #[test]
    fn test_new_keeps_order_and_first_duplicate() {
        let mapping = MajorMapping::new(vec![
            ("Physics", vec!["Physicists"]),
            ("Art", vec!["Craft and fine artists"]),
            ("Physics", vec!["Astronomers"]),
        ]);

        assert_eq!(mapping.majors().collect::<Vec<_>>(), vec!["Physics", "Art"]);
        assert_eq!(
            mapping.occupations_for("Physics").unwrap(),
            &["Physicists".to_string()]
        );
        assert_eq!(mapping.sorted_majors(), vec!["Art", "Physics"]);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            { "major": "History", "occupations": ["Historians", "Archivists"] },
            { "major": "Sociology", "occupations": ["Sociologists"] }
        ]"#;
        let mapping = MajorMapping::from_json(json).unwrap();

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.occupations_for("History").unwrap().len(), 2);
        assert!(mapping.occupations_for("Law").is_none());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = MajorMapping::from_json(r#"{"History": ["Historians"]}"#).unwrap_err();
        assert!(matches!(err, MappingError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = MajorMapping::load("/no/such/mapping.json").unwrap_err();
        assert!(matches!(err, MappingError::Io { .. }));
    }
}
