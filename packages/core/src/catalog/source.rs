//! Word sources
//!
//! A source hands out a fresh [`Catalog`] on every call; selecting a book
//! reloads it so edits to the underlying file show up without a restart.

use std::fs;
use std::path::{Path, PathBuf};

use super::{Catalog, LoadError, LoadResult};

pub trait WordSource {
    fn load(&self) -> LoadResult<Catalog>;
}

impl WordSource for Catalog {
    fn load(&self) -> LoadResult<Catalog> {
        Ok(self.clone())
    }
}

/// `words.json` on the local filesystem
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for JsonFileSource {
    fn load(&self) -> LoadResult<Catalog> {
        let text = fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        let catalog = Catalog::from_json_str(&text)?;
        tracing::info!(path = %self.path.display(), books = catalog.books().len(), "word source loaded");
        Ok(catalog)
    }
}
