//! Run controller
//!
//! Headless state machine behind the window: Idle or Running, with the
//! convert action guarded by "a directory is selected" and "no run is in
//! flight". Counters are advanced only by applying executor events, so the
//! UI layer stays a pure consumer.

use heic_core::ConvertEvent;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct RunState {
    pub selected_dir: Option<PathBuf>,
    pub delete_originals: bool,
    pub running: bool,
    pub completed: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartError {
    NoDirectorySelected,
    AlreadyRunning,
}

impl fmt::Display for StartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartError::NoDirectorySelected => write!(f, "Please select a folder"),
            StartError::AlreadyRunning => write!(f, "A conversion is already running"),
        }
    }
}

#[derive(Debug, Default)]
pub struct RunController {
    state: RunState,
}

impl RunController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn select_directory(&mut self, dir: PathBuf) {
        self.state.selected_dir = Some(dir);
    }

    /// Drops the remembered selection. Used when the folder field is
    /// cleared so a stale pick cannot drive the next run.
    pub fn clear_directory(&mut self) {
        self.state.selected_dir = None;
    }

    pub fn set_delete_originals(&mut self, value: bool) {
        self.state.delete_originals = value;
    }

    /// Validates the convert action without transitioning. Returns the
    /// directory to scan so the caller can surface scan errors before
    /// anything starts.
    pub fn try_start(&self) -> Result<PathBuf, StartError> {
        if self.state.running {
            return Err(StartError::AlreadyRunning);
        }
        self.state
            .selected_dir
            .clone()
            .ok_or(StartError::NoDirectorySelected)
    }

    /// Idle → Running. Counters reset; the total arrives with
    /// `BatchStarted`.
    pub fn begin_run(&mut self) {
        self.state.running = true;
        self.state.completed = 0;
        self.state.total = 0;
    }

    /// Advances counters from executor events. `BatchFinished` is the only
    /// transition back to Idle; individual failures never end the run.
    pub fn apply(&mut self, event: &ConvertEvent) {
        match event {
            ConvertEvent::BatchStarted { total } => {
                self.state.total = *total;
            }
            ConvertEvent::Converted { index, .. } | ConvertEvent::ConvertFailed { index, .. } => {
                self.state.completed = *index;
            }
            ConvertEvent::BatchFinished { .. } => {
                self.state.running = false;
            }
            ConvertEvent::Converting { .. }
            | ConvertEvent::SourceDeleted { .. }
            | ConvertEvent::DeleteFailed { .. } => {}
        }
    }

    pub fn progress_fraction(&self) -> f32 {
        if self.state.total == 0 {
            0.0
        } else {
            self.state.completed as f32 / self.state.total as f32
        }
    }
}
