//! payoff-storage-json
//!
//! File-backed [`DebtRepository`] reading and writing display-unit debt records.

pub mod error;
pub mod record;

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use payoff_core::{DebtRepository, PayoffError};
use payoff_domain::DebtAccount;
use tracing::debug;

pub use error::StorageError;
pub use record::{DebtFile, DebtRecord, DEBT_FILE_SCHEMA_VERSION};

const TMP_SUFFIX: &str = "tmp";

/// JSON debts file living at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonDebtRepository {
    path: PathBuf,
}

impl JsonDebtRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<DebtAccount>, StorageError> {
        load_debts_from_path(&self.path)
    }

    pub fn save(&self, debts: &[DebtAccount]) -> Result<(), StorageError> {
        save_debts_to_path(debts, &self.path)
    }
}

impl DebtRepository for JsonDebtRepository {
    fn load_debts(&self) -> Result<Vec<DebtAccount>, PayoffError> {
        Ok(self.load()?)
    }

    fn save_debts(&self, debts: &[DebtAccount]) -> Result<(), PayoffError> {
        Ok(self.save(debts)?)
    }
}

pub fn load_debts_from_path(path: &Path) -> Result<Vec<DebtAccount>, StorageError> {
    let data = fs::read_to_string(path)?;
    let file: DebtFile = serde_json::from_str(&data)?;
    let debts = file
        .records()
        .into_iter()
        .map(DebtRecord::into_account)
        .collect::<Result<Vec<_>, _>>()?;
    debug!(path = %path.display(), count = debts.len(), "loaded debts");
    Ok(debts)
}

/// Writes the versioned envelope through a temporary file and rename.
pub fn save_debts_to_path(debts: &[DebtAccount], path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = DebtFile::Versioned {
        version: DEBT_FILE_SCHEMA_VERSION,
        debts: debts.iter().map(DebtRecord::from_account).collect(),
    };
    let json = serde_json::to_string_pretty(&file)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
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

fn write_atomic(path: &Path, data: &str) -> Result<(), StorageError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
