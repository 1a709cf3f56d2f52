//! Shared core for the heic2png tools
//!
//! This crate owns everything both variants (CLI batch and desktop GUI) have
//! in common:
//! - Directory scanning for HEIC sources
//! - The sequential conversion loop with per-file error isolation
//! - Lifecycle events consumed by progress/log sinks
//! - Run summary accumulation and reporting
//! - Logging setup, destructive-operation safety checks
//! - The single-instance guard used by the GUI variant
//!
//! The pixel work itself (HEIC decode, PNG encode) is delegated to libheif
//! and the `image` crate behind the [`ImageCodec`] trait.

pub mod codec;
pub mod errors;
pub mod events;
pub mod executor;
pub mod instance;
pub mod logging;
pub mod report;
pub mod safety;
pub mod scanner;
pub mod summary;
pub mod task;

pub use codec::{HeifCodec, ImageCodec};
pub use errors::ConvertError;
pub use events::ConvertEvent;
pub use executor::{run_batch, ConvertOptions};
pub use instance::InstanceGuard;
pub use report::{print_simple_summary, print_summary_report};
pub use safety::check_delete_safety;
pub use scanner::scan_directory;
pub use summary::{ConversionResult, Outcome, RunSummary};
pub use task::ConversionTask;
