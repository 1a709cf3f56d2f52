//! Per-task results and the accumulated run summary

use crate::task::ConversionTask;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(String),
}

/// Produced once per task, never mutated afterwards. A failed source
/// deletion does not downgrade a successful conversion; it only leaves
/// `deleted_source` false.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub task: ConversionTask,
    pub outcome: Outcome,
    pub deleted_source: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub deleted: usize,
    pub errors: Vec<(PathBuf, String)>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &ConversionResult) {
        self.total += 1;
        match &result.outcome {
            Outcome::Success => self.succeeded += 1,
            Outcome::Failure(reason) => {
                self.failed += 1;
                self.errors.push((result.task.source.clone(), reason.clone()));
            }
        }
        if result.deleted_source {
            self.deleted += 1;
        }
    }

    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.succeeded as f64 / self.total as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, outcome: Outcome, deleted: bool) -> ConversionResult {
        ConversionResult {
            task: ConversionTask::for_source(PathBuf::from(name)),
            outcome,
            deleted_source: deleted,
        }
    }

    #[test]
    fn test_summary_starts_empty() {
        let summary = RunSummary::new();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.succeeded, 0);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.deleted, 0);
        assert!(summary.errors.is_empty());
    }

    #[test]
    fn test_record_success() {
        let mut summary = RunSummary::new();
        summary.record(&result("a.heic", Outcome::Success, false));

        assert_eq!(summary.total, 1);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 0);
    }

    #[test]
    fn test_record_failure_keeps_reason() {
        let mut summary = RunSummary::new();
        summary.record(&result(
            "bad.heic",
            Outcome::Failure("decode failed".to_string()),
            false,
        ));

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.errors[0].1, "decode failed");
    }

    #[test]
    fn test_record_deleted_source() {
        let mut summary = RunSummary::new();
        summary.record(&result("a.heic", Outcome::Success, true));
        summary.record(&result("b.heic", Outcome::Success, false));

        assert_eq!(summary.deleted, 1);
        assert_eq!(summary.succeeded, 2);
    }

    #[test]
    fn test_mixed_batch_arithmetic() {
        let mut summary = RunSummary::new();
        summary.record(&result("a.heic", Outcome::Success, true));
        summary.record(&result("b.heic", Outcome::Failure("E".to_string()), false));
        summary.record(&result("c.heic", Outcome::Success, true));

        assert_eq!(summary.total, 3);
        assert_eq!(summary.total, summary.succeeded + summary.failed);
        assert_eq!(summary.deleted, 2);
    }

    #[test]
    fn test_success_rate_empty_batch_is_full() {
        assert!((RunSummary::new().success_rate() - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_success_rate_half() {
        let mut summary = RunSummary::new();
        summary.record(&result("a.heic", Outcome::Success, false));
        summary.record(&result("b.heic", Outcome::Failure("E".to_string()), false));
        assert!((summary.success_rate() - 50.0).abs() < 0.01);
    }
}
