use serde_json::Value;
use tracing::warn;

use crate::common::errors::PolicyError;
use crate::policy::kv::KvBackend;
use crate::policy::types::{
    clamp_retention, retention_in_range, AutoDestroyConfig, FolderRef, FolderSummary,
};

/// Key under which the aggregate is persisted. Kept stable so settings
/// written by older builds keep loading.
pub const SETTINGS_KEY: &str = "autoDestroySettings";

/// Owns the auto-destroy configuration and mediates every read and write
/// to the persistence backend. Each mutation serializes the whole
/// aggregate and writes it back before the in-memory state is updated,
/// so a failed write never leaves memory ahead of disk.
pub struct AutoDestroyStore<B: KvBackend> {
    backend: B,
    config: AutoDestroyConfig,
}

impl<B: KvBackend> AutoDestroyStore<B> {
    /// Open the store, rehydrating persisted state. An absent entry
    /// yields the default config; a malformed entry is salvaged field by
    /// field rather than discarded wholesale.
    pub fn open(backend: B) -> Result<Self, PolicyError> {
        let raw = backend.get(SETTINGS_KEY)?;
        let config = rehydrate(raw.as_deref());
        Ok(Self { backend, config })
    }

    pub fn config(&self) -> &AutoDestroyConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn folders(&self) -> &[FolderRef] {
        &self.config.folders
    }

    /// Flip the master switch. Tracked folders are untouched.
    pub fn set_enabled(&mut self, enabled: bool) -> Result<(), PolicyError> {
        let mut next = self.config.clone();
        next.enabled = enabled;
        self.commit(next)
    }

    /// Start tracking a folder. Validation order matches the original
    /// form: selection first, then the retention window, then uniqueness.
    pub fn add_folder(
        &mut self,
        candidate: &FolderSummary,
        days: i64,
    ) -> Result<&[FolderRef], PolicyError> {
        if candidate.id.is_empty() {
            return Err(PolicyError::MissingSelection);
        }
        if !retention_in_range(days) {
            return Err(PolicyError::OutOfRange { days });
        }
        if self.config.folders.iter().any(|f| f.id == candidate.id) {
            return Err(PolicyError::AlreadyTracked {
                id: candidate.id.clone(),
            });
        }

        let mut next = self.config.clone();
        next.folders
            .push(FolderRef::from_summary(candidate, days as u32));
        self.commit(next)?;
        Ok(&self.config.folders)
    }

    /// Stop tracking a folder. A no-op when the id is absent, so removal
    /// stays idempotent.
    pub fn remove_folder(&mut self, id: &str) -> Result<&[FolderRef], PolicyError> {
        if !self.config.folders.iter().any(|f| f.id == id) {
            return Ok(&self.config.folders);
        }
        let mut next = self.config.clone();
        next.folders.retain(|f| f.id != id);
        self.commit(next)?;
        Ok(&self.config.folders)
    }

    /// Change the retention period of a tracked folder, clamping into the
    /// allowed window. Returns the value actually stored.
    pub fn update_retention(&mut self, id: &str, days: i64) -> Result<u32, PolicyError> {
        let mut next = self.config.clone();
        let folder = next
            .folders
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| PolicyError::NotFound { id: id.to_string() })?;
        let stored = clamp_retention(days);
        folder.retention_days = stored;
        self.commit(next)?;
        Ok(stored)
    }

    fn commit(&mut self, next: AutoDestroyConfig) -> Result<(), PolicyError> {
        let json = serde_json::to_string_pretty(&next)
            .map_err(crate::common::errors::KvError::from)?;
        self.backend.set(SETTINGS_KEY, &json)?;
        self.config = next;
        Ok(())
    }
}

/// Turn the raw persisted value (if any) into a valid config.
fn rehydrate(raw: Option<&str>) -> AutoDestroyConfig {
    let Some(raw) = raw else {
        return AutoDestroyConfig::default();
    };
    match serde_json::from_str::<AutoDestroyConfig>(raw) {
        Ok(config) => sanitize(config),
        Err(err) => {
            warn!(%err, "auto-destroy settings are malformed, salvaging what parses");
            sanitize(salvage(raw))
        }
    }
}

/// Best-effort recovery of a partially corrupt record: `enabled` and each
/// folder entry are recovered independently instead of discarding the
/// whole structure on any parse failure.
fn salvage(raw: &str) -> AutoDestroyConfig {
    let Ok(value) = serde_json::from_str::<Value>(raw) else {
        return AutoDestroyConfig::default();
    };

    let enabled = value
        .get("enabled")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let mut folders = Vec::new();
    if let Some(entries) = value.get("folders").and_then(Value::as_array) {
        for entry in entries {
            match serde_json::from_value::<FolderRef>(entry.clone()) {
                Ok(folder) => folders.push(folder),
                Err(err) => warn!(%err, "dropping unparseable tracked-folder entry"),
            }
        }
    }

    AutoDestroyConfig { enabled, folders }
}

/// Re-establish the invariants on rehydrated data: unique ids (first
/// occurrence wins) and retention within the allowed window. Guards
/// against hand-edited store files.
fn sanitize(mut config: AutoDestroyConfig) -> AutoDestroyConfig {
    let mut seen = std::collections::HashSet::new();
    config.folders.retain(|f| {
        let fresh = seen.insert(f.id.clone());
        if !fresh {
            warn!(id = %f.id, "dropping duplicate tracked-folder entry");
        }
        fresh
    });
    for folder in &mut config.folders {
        let clamped = clamp_retention(folder.retention_days as i64);
        if clamped != folder.retention_days {
            warn!(
                id = %folder.id,
                from = folder.retention_days,
                to = clamped,
                "clamping out-of-range retention"
            );
            folder.retention_days = clamped;
        }
    }
    config
}
