//! Immutable catalog of known ingredient names.
//!
//! Loaded once at startup from a reference list and shared read-only across
//! callers; matchers never mutate it.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::normalize::normalize;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Ordered set of unique normalized ingredient names.
///
/// Entries keep first-seen order, which makes per-strategy argmax scans
/// deterministic when two entries score equally.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<String>,
}

impl Catalog {
    /// Build a catalog from raw ingredient names.
    ///
    /// Names are normalized; duplicates after normalization collapse to the
    /// first occurrence, and names that normalize to nothing are dropped.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<String> = Vec::new();
        for name in names {
            let normalized = normalize(name.as_ref());
            if normalized.is_empty() {
                continue;
            }
            if !entries.iter().any(|e| *e == normalized) {
                entries.push(normalized);
            }
        }
        Self { entries }
    }

    /// Load a catalog from a text file, one ingredient name per line.
    /// Blank lines are ignored.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_reader(BufReader::new(file)).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), entries = catalog.len(), "loaded ingredient catalog");
        Ok(catalog)
    }

    /// Load a catalog from any line-oriented reader.
    ///
    /// An empty catalog is not an error — every match attempt will simply
    /// return no match — but it is almost certainly a configuration problem,
    /// so it is logged here at the loading site.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut names = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                names.push(line);
            }
        }
        let catalog = Self::new(names);
        if catalog.is_empty() {
            warn!("ingredient catalog is empty; no label will ever match");
        }
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact membership test for an already-normalized label.
    pub fn contains(&self, normalized: &str) -> bool {
        self.entries.iter().any(|e| e == normalized)
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
