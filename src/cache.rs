//! Presentation-side cache of parsed datasets.
//!
//! Entries are keyed on the dataset path and validated against the SHA-256
//! of the file contents, so an edited file is re-parsed on the next lookup.
//! There is no eviction.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::dataset::{LoadError, read_records};
use crate::record::OccupationRecord;

struct CachedDataset {
    digest: String,
    records: Vec<OccupationRecord>,
}

#[derive(Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, CachedDataset>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the parsed records for `path`, re-reading the file only when
    /// its contents changed since the last call.
    pub fn records(&mut self, path: impl AsRef<Path>) -> Result<&[OccupationRecord], LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let digest = hex::encode(Sha256::digest(&bytes));

        let fresh = self
            .entries
            .get(path)
            .is_some_and(|cached| cached.digest == digest);

        if fresh {
            debug!(path = %path.display(), "Dataset cache hit");
        } else {
            debug!(path = %path.display(), digest = %digest, "Dataset cache miss, parsing");
            let records = read_records(bytes.as_slice())?;
            self.entries
                .insert(path.to_path_buf(), CachedDataset { digest, records });
        }

        Ok(self
            .entries
            .get(path)
            .map(|cached| cached.records.as_slice())
            .unwrap_or_default())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
