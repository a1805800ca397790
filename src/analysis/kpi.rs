//! Schedule compression indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Days saved | standard - optimized |
//! | Compression ratio | optimized / standard |
//! | Max parallelism | Size of the largest wave |
//! | Critical path duration | Σ duration along the reported path |

use crate::models::{Timeline, TimelineSummary};

impl TimelineSummary {
    /// Computes the summary for an analysed timeline.
    ///
    /// # Arguments
    /// * `timeline` - Timeline with durations and waves filled in.
    /// * `task_count` - Number of tasks analysed.
    /// * `critical_path_duration` - Σ duration along `timeline.critical_path`.
    pub fn calculate(timeline: &Timeline, task_count: usize, critical_path_duration: u32) -> Self {
        let max_parallelism = timeline.levels.iter().map(Vec::len).max().unwrap_or(0);

        let compression_ratio = if timeline.standard_duration == 0 {
            1.0
        } else {
            timeline.optimized_duration as f64 / timeline.standard_duration as f64
        };

        Self {
            task_count,
            wave_count: timeline.levels.len(),
            max_parallelism,
            days_saved: timeline.days_saved(),
            compression_ratio,
            critical_path_duration,
        }
    }

    /// Percentage of the sequential duration removed by parallel waves.
    pub fn percent_saved(&self) -> f64 {
        (1.0 - self.compression_ratio) * 100.0
    }
}
