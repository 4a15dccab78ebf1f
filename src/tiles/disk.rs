use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::{TileError, TileKey};

/// Downloaded tiles stored as `<root>/<namespace>/<z>/<x>/<y>.png`.
#[derive(Clone, Debug)]
pub struct TileDiskCache {
    root: PathBuf,
}

impl TileDiskCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, namespace: &str, key: TileKey) -> PathBuf {
        self.root
            .join(namespace)
            .join(key.z.to_string())
            .join(key.x.to_string())
            .join(format!("{}.png", key.y))
    }

    /// Cached bytes for a tile, if present and readable.
    pub fn load(&self, namespace: &str, key: TileKey) -> Option<Vec<u8>> {
        std::fs::read(self.path_for(namespace, key)).ok()
    }

    /// Write a tile through a temp file in the same directory so readers
    /// never see a partial image.
    pub fn store(&self, namespace: &str, key: TileKey, bytes: &[u8]) -> Result<(), TileError> {
        let path = self.path_for(namespace, key);
        let write_error = |source| TileError::CacheWrite {
            path: path.clone(),
            source,
        };
        let dir = path.parent().unwrap_or(&self.root);
        std::fs::create_dir_all(dir).map_err(write_error)?;
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
        tmp.write_all(bytes).map_err(write_error)?;
        tmp.persist(&path)
            .map_err(|err| write_error(err.error))?;
        Ok(())
    }
}
