use crate::scan::PageAnalysis;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What happened to one platform during a refresh pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlatformOutcome {
    Scanned {
        analysis: PageAnalysis,
        /// Model density exceeded the configured threshold
        depth_confirmed: bool,
    },
    Failed {
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformResult {
    pub platform: String,
    pub url: String,
    pub outcome: PlatformOutcome,
}

impl PlatformResult {
    #[cfg(test)]
    pub(crate) fn analysis(&self) -> Option<&PageAnalysis> {
        match &self.outcome {
            PlatformOutcome::Scanned { analysis, .. } => Some(analysis),
            PlatformOutcome::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, PlatformOutcome::Failed { .. })
    }
}

/// Result of one complete refresh pass, in platform scan order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshReport {
    pub data_path: PathBuf,
    pub started_at: String,
    pub finished_at: String,
    /// Value written to the catalog's `last_update` field
    pub last_update: String,
    pub results: Vec<PlatformResult>,
}

impl RefreshReport {
    pub fn total_count(&self) -> usize {
        self.results.len()
    }

    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failed()).count()
    }

    pub fn scanned_count(&self) -> usize {
        self.total_count() - self.failed_count()
    }

    #[cfg(test)]
    pub(crate) fn result_for(&self, platform: &str) -> Option<&PlatformResult> {
        self.results.iter().find(|r| r.platform == platform)
    }
}
