//! Conversion executor
//!
//! Runs the scanned task list sequentially. A single task's decode or
//! encode failure is recorded and the loop continues; only exhaustion of
//! the list (or the cancellation flag) ends the run. The source file is
//! deleted only after a successful encode, and a failed delete is reported
//! without downgrading the conversion outcome. Targets are overwritten
//! unconditionally; that matches the original tool and is intentional.

use crate::codec::ImageCodec;
use crate::events::ConvertEvent;
use crate::summary::{ConversionResult, Outcome, RunSummary};
use crate::task::ConversionTask;
use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub delete_original: bool,
}

/// Processes every task in order, emitting one event per lifecycle point.
/// The cancellation flag is polled between tasks only; an in-flight
/// decode/encode always completes.
pub fn run_batch<C: ImageCodec>(
    tasks: &[ConversionTask],
    codec: &C,
    options: &ConvertOptions,
    sink: &mut dyn FnMut(ConvertEvent),
    cancel: &AtomicBool,
) -> RunSummary {
    let mut summary = RunSummary::new();
    sink(ConvertEvent::BatchStarted { total: tasks.len() });

    for (i, task) in tasks.iter().enumerate() {
        if cancel.load(Ordering::Relaxed) {
            warn!(completed = summary.total, "Run cancelled, stopping before next task");
            break;
        }

        let index = i + 1;
        let file_name = task.file_name();
        sink(ConvertEvent::Converting {
            index,
            file_name: file_name.clone(),
        });

        let result = convert_one(task, codec, options, sink);
        match &result.outcome {
            Outcome::Success => {
                debug!(source = %task.source.display(), target = %task.target.display(), "Converted");
                sink(ConvertEvent::Converted { index, file_name });
            }
            Outcome::Failure(reason) => {
                warn!(source = %task.source.display(), reason = %reason, "Conversion failed");
                sink(ConvertEvent::ConvertFailed {
                    index,
                    file_name,
                    reason: reason.clone(),
                });
            }
        }
        summary.record(&result);
    }

    sink(ConvertEvent::BatchFinished {
        summary: summary.clone(),
    });
    summary
}

fn convert_one<C: ImageCodec>(
    task: &ConversionTask,
    codec: &C,
    options: &ConvertOptions,
    sink: &mut dyn FnMut(ConvertEvent),
) -> ConversionResult {
    let failure = |reason: String| ConversionResult {
        task: task.clone(),
        outcome: Outcome::Failure(reason),
        deleted_source: false,
    };

    let image = match codec.decode(&task.source) {
        Ok(image) => image,
        Err(e) => return failure(e.to_string()),
    };

    if let Err(e) = codec.encode(&image, &task.target) {
        return failure(e.to_string());
    }

    let mut deleted_source = false;
    if options.delete_original {
        match fs::remove_file(&task.source) {
            Ok(()) => {
                deleted_source = true;
                sink(ConvertEvent::SourceDeleted {
                    file_name: task.file_name(),
                });
            }
            Err(e) => {
                sink(ConvertEvent::DeleteFailed {
                    file_name: task.file_name(),
                    reason: e.to_string(),
                });
            }
        }
    }

    ConversionResult {
        task: task.clone(),
        outcome: Outcome::Success,
        deleted_source,
    }
}
