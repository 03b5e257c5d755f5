//! Filesystem-backed JSON snapshots of accounts and operations.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use ledgerlens_core::{snapshot_warnings, AccountSource, CoreError, OperationSource};
use ledgerlens_domain::{Account, LedgerSnapshot, Operation};

const TMP_SUFFIX: &str = "tmp";

/// Reads and writes a single snapshot file.
///
/// Every read parses the whole file, so each source call observes one
/// consistent copy of the data.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_snapshot(&self) -> Result<LedgerSnapshot, CoreError> {
        if !self.path.exists() {
            return Err(CoreError::Storage(format!(
                "snapshot `{}` not found",
                self.path.display()
            )));
        }
        let data = fs::read_to_string(&self.path)?;
        let snapshot = deserialize_snapshot(&data)?;
        for warning in snapshot_warnings(&snapshot) {
            tracing::warn!(path = %self.path.display(), "{warning}");
        }
        tracing::debug!(
            accounts = snapshot.accounts.len(),
            operations = snapshot.operations.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    pub fn save_snapshot(&self, snapshot: &LedgerSnapshot) -> Result<(), CoreError> {
        let json = serialize_snapshot(snapshot)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl AccountSource for JsonSnapshotStore {
    fn list_all_accounts(&self) -> Result<Vec<Account>, CoreError> {
        Ok(self.load_snapshot()?.accounts)
    }
}

impl OperationSource for JsonSnapshotStore {
    fn list_all_operations(&self) -> Result<Vec<Operation>, CoreError> {
        Ok(self.load_snapshot()?.operations)
    }
}

pub fn serialize_snapshot(snapshot: &LedgerSnapshot) -> Result<String, CoreError> {
    serde_json::to_string_pretty(snapshot).map_err(|err| CoreError::Serde(err.to_string()))
}

pub fn deserialize_snapshot(data: &str) -> Result<LedgerSnapshot, CoreError> {
    serde_json::from_str(data).map_err(|err| CoreError::Serde(err.to_string()))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
