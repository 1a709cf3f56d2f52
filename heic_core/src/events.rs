//! Lifecycle events emitted by the conversion loop
//!
//! The executor pushes these through a sink instead of touching any
//! presentation state directly. The CLI turns them into progress-bar
//! updates and log lines; the GUI forwards them over a channel to the
//! event loop. Sinks get exactly one event per lifecycle point and must
//! not deduplicate.

use crate::summary::RunSummary;

#[derive(Debug, Clone)]
pub enum ConvertEvent {
    /// Emitted once before the first task, even for an empty batch.
    BatchStarted { total: usize },
    /// A task is about to be processed. `index` is the 1-based position.
    Converting { index: usize, file_name: String },
    /// The task's target was written.
    Converted { index: usize, file_name: String },
    /// The source file was removed after a successful conversion.
    SourceDeleted { file_name: String },
    /// Deleting the source failed; the conversion itself still succeeded.
    DeleteFailed { file_name: String, reason: String },
    /// Decode or encode failed; the loop moves on to the next task.
    ConvertFailed {
        index: usize,
        file_name: String,
        reason: String,
    },
    /// Emitted once after the last task.
    BatchFinished { summary: RunSummary },
}
