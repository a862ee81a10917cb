//! Per-armor-class, per-loader-length leaderboard of best shells.
//!
//! Only kinetic DPS drives comparisons; chemical stats ride along in the
//! stored snapshot. The leaderboard is the single piece of long-lived
//! mutable state in a search run: it is created before the enumeration,
//! updated in place, and read out once the enumeration completes.

use serde::Serialize;

use crate::shell::ShellReport;

/// Loader length ceilings used to bucket leaderboard bests, in mm.
pub const LENGTH_BUCKETS: [u32; 6] = [1000, 2000, 4000, 6000, 8000, 10_000];

/// Best candidate seen so far for one loader length ceiling.
#[derive(Debug, Clone, Serialize)]
pub struct BucketBest {
    pub ceiling: u32,
    /// Sentinel 0.0 until a candidate with positive DPS qualifies.
    pub kinetic_dps: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best: Option<ShellReport>,
}

/// Leaderboard slice for one target armor class.
#[derive(Debug, Clone, Serialize)]
pub struct AcTable {
    pub target_ac: f64,
    pub buckets: Vec<BucketBest>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Leaderboard {
    targets: Vec<AcTable>,
}

impl Leaderboard {
    /// Initialize sentinel entries for every (armor class, bucket) pair.
    pub fn new(target_acs: &[f64]) -> Self {
        let targets = target_acs
            .iter()
            .map(|&target_ac| AcTable {
                target_ac,
                buckets: LENGTH_BUCKETS
                    .iter()
                    .map(|&ceiling| BucketBest {
                        ceiling,
                        kinetic_dps: 0.0,
                        best: None,
                    })
                    .collect(),
            })
            .collect();
        Self { targets }
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Whether a candidate would replace at least one incumbent.
    ///
    /// Cheap pre-check so the search can skip building a report for the
    /// overwhelming majority of candidates.
    pub fn improves(&self, ac_index: usize, total_length: u32, kinetic_dps: f64) -> bool {
        self.targets[ac_index]
            .buckets
            .iter()
            .any(|bucket| total_length <= bucket.ceiling && kinetic_dps > bucket.kinetic_dps)
    }

    /// Offer a candidate to every bucket it qualifies for.
    ///
    /// A bucket is replaced only on strictly greater kinetic DPS, so ties
    /// keep the earliest-enumerated entry. Returns whether any bucket was
    /// updated.
    pub fn offer(&mut self, ac_index: usize, candidate: &ShellReport) -> bool {
        let mut updated = false;
        for bucket in &mut self.targets[ac_index].buckets {
            if candidate.total_length <= bucket.ceiling
                && candidate.kinetic_dps > bucket.kinetic_dps
            {
                bucket.kinetic_dps = candidate.kinetic_dps;
                bucket.best = Some(candidate.clone());
                updated = true;
            }
        }
        updated
    }

    /// The full table for reporting, one entry per target armor class.
    pub fn tables(&self) -> &[AcTable] {
        &self.targets
    }
}
