//! egui application for the interactive converter
//!
//! The window owns a [`RunController`] and a channel receiver. The
//! conversion loop runs on a worker thread and emits [`ConvertEvent`]s;
//! every frame drains the channel, applies the events to the controller,
//! and appends log lines. Widget state is never touched from the worker.

use crate::controller::{RunController, StartError};
use eframe::egui;
use heic_core::{
    run_batch, scan_directory, ConvertEvent, ConvertOptions, HeifCodec, RunSummary,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

pub struct ConverterApp {
    controller: RunController,
    folder_path: String,
    delete_originals: bool,

    status: String,
    log: Vec<String>,
    last_summary: Option<RunSummary>,

    receiver: Option<mpsc::Receiver<ConvertEvent>>,
    cancel: Arc<AtomicBool>,

    error_message: Option<String>,
    info_message: Option<String>,
    show_quit_dialog: bool,
    quit_confirmed: bool,
}

impl Default for ConverterApp {
    fn default() -> Self {
        Self {
            controller: RunController::new(),
            folder_path: String::new(),
            delete_originals: false,
            status: "Ready".to_string(),
            log: Vec::new(),
            last_summary: None,
            receiver: None,
            cancel: Arc::new(AtomicBool::new(false)),
            error_message: None,
            info_message: None,
            show_quit_dialog: false,
            quit_confirmed: false,
        }
    }
}

impl eframe::App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();
        self.handle_close_request(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("HEIC to PNG Converter");
            ui.add_space(8.0);

            // Folder selection row
            ui.horizontal(|ui| {
                ui.label("Select Folder:");
                ui.add_sized(
                    [360.0, 22.0],
                    egui::TextEdit::singleline(&mut self.folder_path),
                );
                if ui.button("Browse").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .set_title("Select folder with HEIC files")
                        .pick_folder()
                    {
                        self.folder_path = path.display().to_string();
                    }
                }
            });

            ui.add_space(6.0);
            ui.checkbox(
                &mut self.delete_originals,
                "Delete original HEIC files after conversion",
            );

            ui.add_space(10.0);
            let state = self.controller.state();
            ui.add(
                egui::ProgressBar::new(self.controller.progress_fraction()).text(format!(
                    "{}/{}",
                    state.completed, state.total
                )),
            );

            ui.add_space(4.0);
            ui.label(&self.status);

            ui.add_space(10.0);
            let convert = ui.add_enabled(
                !self.controller.is_running(),
                egui::Button::new("Convert").min_size(egui::vec2(120.0, 28.0)),
            );
            if convert.clicked() {
                self.start_run();
            }

            ui.add_space(10.0);
            ui.group(|ui| {
                egui::ScrollArea::vertical()
                    .max_height(220.0)
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in &self.log {
                            ui.label(line);
                        }
                    });
            });
        });

        self.show_error_modal(ctx);
        self.show_info_modal(ctx);
        self.show_quit_modal(ctx);

        if self.controller.is_running() {
            ctx.request_repaint();
        }
    }
}

impl ConverterApp {
    fn drain_events(&mut self) {
        let Some(receiver) = &self.receiver else {
            return;
        };

        let mut pending = Vec::new();
        for event in receiver.try_iter() {
            pending.push(event);
        }

        for event in pending {
            self.controller.apply(&event);
            match &event {
                ConvertEvent::BatchStarted { total } => {
                    self.log.push(format!("Found {} HEIC files", total));
                }
                ConvertEvent::Converting { file_name, .. } => {
                    self.status = format!("Converting {}", file_name);
                    self.log.push(format!("Converting {}", file_name));
                }
                ConvertEvent::Converted { .. } => {}
                ConvertEvent::SourceDeleted { file_name } => {
                    self.log.push(format!("Deleted {}", file_name));
                }
                ConvertEvent::DeleteFailed { file_name, reason } => {
                    self.log
                        .push(format!("Could not delete {}: {}", file_name, reason));
                }
                ConvertEvent::ConvertFailed {
                    file_name, reason, ..
                } => {
                    self.log
                        .push(format!("Error converting {}: {}", file_name, reason));
                }
                ConvertEvent::BatchFinished { summary } => {
                    self.status = "Conversion completed!".to_string();
                    self.log.push(format!(
                        "Done: {} succeeded, {} failed",
                        summary.succeeded, summary.failed
                    ));
                    self.last_summary = Some(summary.clone());
                    self.receiver = None;
                    if !self.cancel.load(Ordering::Relaxed) {
                        self.info_message = Some(format!(
                            "Conversion completed!\n{} succeeded, {} failed",
                            summary.succeeded, summary.failed
                        ));
                    }
                    break;
                }
            }
        }
    }

    fn start_run(&mut self) {
        // The text field is the source of truth; clearing it drops any
        // previously picked folder instead of silently reusing it.
        let trimmed = self.folder_path.trim();
        if trimmed.is_empty() {
            self.controller.clear_directory();
        } else {
            self.controller.select_directory(PathBuf::from(trimmed));
        }
        self.controller.set_delete_originals(self.delete_originals);

        let dir = match self.controller.try_start() {
            Ok(dir) => dir,
            Err(e @ StartError::NoDirectorySelected) => {
                self.error_message = Some(e.to_string());
                return;
            }
            Err(StartError::AlreadyRunning) => return,
        };

        if self.delete_originals {
            if let Err(msg) = heic_core::check_delete_safety(&dir) {
                self.error_message = Some(msg);
                return;
            }
        }

        // Scan up front so a bad directory is reported before anything runs.
        let tasks = match scan_directory(&dir) {
            Ok(tasks) => tasks,
            Err(e) => {
                self.error_message = Some(e.to_string());
                return;
            }
        };

        if tasks.is_empty() {
            self.info_message =
                Some("No HEIC files found in the selected folder".to_string());
            self.log.push("Found 0 HEIC files".to_string());
            return;
        }

        self.controller.begin_run();
        self.status = "Starting...".to_string();
        self.cancel = Arc::new(AtomicBool::new(false));

        let (tx, rx) = mpsc::channel();
        self.receiver = Some(rx);
        let cancel = Arc::clone(&self.cancel);
        let options = ConvertOptions {
            delete_original: self.delete_originals,
        };

        thread::spawn(move || {
            tracing::info!(dir = %dir.display(), total = tasks.len(), "Run started");
            run_batch(
                &tasks,
                &HeifCodec,
                &options,
                &mut |event| {
                    // The window may already be gone on quit; drop silently.
                    let _ = tx.send(event);
                },
                &cancel,
            );
        });
    }

    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.viewport().close_requested()) {
            return;
        }
        if self.controller.is_running() && !self.quit_confirmed {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.show_quit_dialog = true;
        }
    }

    fn show_error_modal(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error_message.clone() else {
            return;
        };
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    self.error_message = None;
                }
            });
    }

    fn show_info_modal(&mut self, ctx: &egui::Context) {
        let Some(message) = self.info_message.clone() else {
            return;
        };
        egui::Window::new("Info")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    self.info_message = None;
                }
            });
    }

    fn show_quit_modal(&mut self, ctx: &egui::Context) {
        if !self.show_quit_dialog {
            return;
        }
        egui::Window::new("Quit")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Conversion is in progress. Do you want to quit?");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Quit").clicked() {
                        // Stops the worker after its in-flight task; there is
                        // no mid-file interrupt.
                        self.cancel.store(true, Ordering::Relaxed);
                        self.quit_confirmed = true;
                        self.show_quit_dialog = false;
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    if ui.button("Cancel").clicked() {
                        self.show_quit_dialog = false;
                    }
                });
            });
    }
}
