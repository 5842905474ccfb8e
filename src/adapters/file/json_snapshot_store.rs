// JSON file implementation of the CartSnapshotStore port.
//
// Responsibilities
// - Keep one named snapshot entry per store at `<data_dir>/<key>.json`.
// - Write to a sibling temporary file, then rename it over the entry.
// - Treat a missing or blank file as "nothing saved yet".

use crate::core::cart::state::Cart;
use crate::core::ports::{CartSnapshotStore, SnapshotError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(data_dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{key}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

fn io_error(err: std::io::Error) -> SnapshotError {
    SnapshotError::Io(err.to_string())
}

#[async_trait::async_trait]
impl CartSnapshotStore for JsonFileSnapshotStore {
    async fn load(&self) -> Result<Option<Cart>, SnapshotError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot yet");
                return Ok(None);
            }
            Err(err) => return Err(io_error(err)),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        serde_json::from_slice::<Cart>(&bytes)
            .map(Some)
            .map_err(|e| SnapshotError::Corrupt(format!("{}: {e}", self.path.display())))
    }

    async fn save(&self, cart: &Cart) -> Result<(), SnapshotError> {
        let payload = serde_json::to_vec(cart).map_err(|e| SnapshotError::Encode(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
        }
        let temp = self.temp_path();
        tokio::fs::write(&temp, payload).await.map_err(io_error)?;
        tokio::fs::rename(&temp, &self.path).await.map_err(io_error)?;
        debug!(path = %self.path.display(), lines = cart.len(), "snapshot written");
        Ok(())
    }
}
