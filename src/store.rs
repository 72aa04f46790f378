// src/store.rs
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::report::PredictionReport;

const SLOT_FILE: &str = "predictions.json";

/// Persistence boundary for the cached report. There is exactly one slot:
/// `save` overwrites it wholesale and `load` treats a missing or unreadable
/// slot as absent, never as an error.
pub trait ReportStore {
    fn save(&self, report: &PredictionReport) -> Result<()>;
    fn load(&self) -> Option<PredictionReport>;
}

/// Slot file under the platform data directory, the desktop stand-in for
/// the web client's `localStorage` key.
#[derive(Debug)]
pub struct FileStore {
    slot_path: PathBuf,
}

impl FileStore {
    pub fn new() -> Self {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("coalwatch");
        Self {
            slot_path: dir.join(SLOT_FILE),
        }
    }

    #[cfg(test)]
    fn at(slot_path: PathBuf) -> Self {
        Self { slot_path }
    }
}

impl ReportStore for FileStore {
    fn save(&self, report: &PredictionReport) -> Result<()> {
        if let Some(dir) = self.slot_path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        let content = serde_json::to_string(report)?;
        fs::write(&self.slot_path, content)
            .with_context(|| format!("Failed to write {}", self.slot_path.display()))?;
        log::info!("cached report at {}", self.slot_path.display());
        Ok(())
    }

    fn load(&self) -> Option<PredictionReport> {
        let content = fs::read_to_string(&self.slot_path).ok()?;
        match serde_json::from_str(&content) {
            Ok(report) => Some(report),
            Err(e) => {
                log::warn!("discarding unparseable cache slot: {}", e);
                None
            }
        }
    }
}
