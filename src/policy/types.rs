use serde::{Deserialize, Serialize};

/// Shortest allowed retention period
pub const MIN_RETENTION_DAYS: u32 = 1;
/// Longest allowed retention period (one year)
pub const MAX_RETENTION_DAYS: u32 = 365;

/// Clamp a requested retention period into the allowed window.
pub fn clamp_retention(days: i64) -> u32 {
    days.clamp(MIN_RETENTION_DAYS as i64, MAX_RETENTION_DAYS as i64) as u32
}

/// Check whether a requested retention period is within the allowed window.
pub fn retention_in_range(days: i64) -> bool {
    days >= MIN_RETENTION_DAYS as i64 && days <= MAX_RETENTION_DAYS as i64
}

/// A folder as offered for tracking: everything in a catalog record
/// except the catalog-only `lastUpdated` timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSummary {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub screenshot_count: u64,
}

/// A tracked folder: a snapshot of the catalog record taken when it was
/// added, plus the retention period. `screenshot_count` is not live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderRef {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub screenshot_count: u64,
    pub retention_days: u32,
}

impl FolderRef {
    pub fn from_summary(summary: &FolderSummary, retention_days: u32) -> Self {
        Self {
            id: summary.id.clone(),
            name: summary.name.clone(),
            icon: summary.icon.clone(),
            color: summary.color.clone(),
            screenshot_count: summary.screenshot_count,
            retention_days,
        }
    }
}

/// The persisted aggregate: the master switch plus the ordered list of
/// tracked folders, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoDestroyConfig {
    pub enabled: bool,
    pub folders: Vec<FolderRef>,
}
