//! Candidate pools
//!
//! A pool is the host's list of previously committed values for one field.
//! The engine only reads pools; the host refreshes a field by building a new
//! pool and handing it over, so snapshots can be shared across threads
//! without copying.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use crate::error::KetikError;

/// Immutable, cheaply clonable snapshot of a field's candidates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    entries: Arc<[String]>,
}

impl CandidatePool {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::<String>::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Read one candidate per line, skipping blank lines
    pub fn load(path: &Path) -> Result<Self, KetikError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => KetikError::PoolNotFound(path.to_path_buf()),
            _ => KetikError::Io(e),
        })?;

        let mut entries = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                entries.push(trimmed.to_string());
            }
        }

        log::debug!("Loaded {} candidates from {:?}", entries.len(), path);
        Ok(Self::new(entries))
    }

    /// New pool with `value` appended, unless already present
    pub fn with_value(&self, value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || self.entries.iter().any(|e| e == value) {
            return self.clone();
        }
        Self::new(self.entries.iter().cloned().chain(std::iter::once(value.to_string())))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
