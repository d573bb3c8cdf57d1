//! The folder catalog: the ordered list of screenshot folders known to
//! the app. The policy store never writes here; it only resolves a
//! selected id into an add-time snapshot.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

use crate::policy::types::{AutoDestroyConfig, FolderSummary};

/// One catalog entry. `screenshot_count` and `last_updated` reflect the
/// catalog's view, not the policy store's snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderRecord {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub screenshot_count: u64,
    pub last_updated: DateTime<Utc>,
}

impl FolderRecord {
    /// The snapshot handed to the policy store when this folder is added.
    pub fn summary(&self) -> FolderSummary {
        FolderSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            icon: self.icon.clone(),
            color: self.color.clone(),
            screenshot_count: self.screenshot_count,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<FolderRecord>,
}

impl Catalog {
    /// Load the catalog from a JSON file. Absent file means an empty
    /// catalog, not an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let records: Vec<FolderRecord> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;
        Ok(Self { records })
    }

    /// Save the catalog as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create catalog dir: {}", dir.display()))?;
        }
        let json =
            serde_json::to_string_pretty(&self.records).context("Failed to serialize catalog")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write catalog: {}", path.display()))?;
        Ok(())
    }

    pub fn records(&self) -> &[FolderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&FolderRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Folders eligible for tracking: the catalog minus ids already in
    /// the policy config. A derived view, recomputed on demand — never
    /// stored.
    pub fn selectable<'a>(&'a self, config: &AutoDestroyConfig) -> Vec<&'a FolderRecord> {
        self.records
            .iter()
            .filter(|r| !config.folders.iter().any(|f| f.id == r.id))
            .collect()
    }

    /// Register a new folder with a fresh id. Returns the new record.
    pub fn register(
        &mut self,
        name: &str,
        icon: &str,
        color: &str,
        screenshot_count: u64,
    ) -> FolderRecord {
        let record = FolderRecord {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            screenshot_count,
            last_updated: Utc::now(),
        };
        self.records.push(record.clone());
        record
    }

    /// Merge records from another source, skipping ids already present.
    /// Returns how many were added.
    pub fn import(&mut self, records: Vec<FolderRecord>) -> usize {
        let mut added = 0;
        for record in records {
            if self.find(&record.id).is_none() {
                self.records.push(record);
                added += 1;
            }
        }
        added
    }

    /// A small built-in catalog for first runs and demos.
    pub fn sample() -> Self {
        let now = Utc::now();
        let record = |id: &str, name: &str, icon: &str, color: &str, count: u64| FolderRecord {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            screenshot_count: count,
            last_updated: now,
        };
        Self {
            records: vec![
                record("f1", "Work", "💼", "#6366f1", 48),
                record("f2", "Personal", "🏠", "#22c55e", 31),
                record("f3", "Projects", "🚀", "#f59e0b", 112),
                record("f4", "Receipts", "🧾", "#ef4444", 19),
                record("f5", "Inspiration", "✨", "#a855f7", 64),
            ],
        }
    }
}
