use clap::{Parser, ValueEnum};
use console::style;
use heic_core::{
    print_summary_report, run_batch, scan_directory, ConvertEvent, ConvertOptions, HeifCodec,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "heic2png")]
#[command(version, about = "Batch HEIC → PNG converter", long_about = None)]
struct Cli {
    /// Directory containing HEIC files (scanned non-recursively).
    #[arg(value_name = "INPUT", default_value = "heic_img")]
    input: PathBuf,

    /// Delete source files after a successful conversion.
    #[arg(long)]
    delete_original: bool,

    /// Summary output format.
    #[arg(short, long, value_enum, default_value = "human")]
    output: OutputFormat,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

fn failure_line(event: &ConvertEvent) -> Option<String> {
    match event {
        ConvertEvent::ConvertFailed {
            file_name, reason, ..
        } => Some(format!("Error converting {}: {}", file_name, reason)),
        ConvertEvent::DeleteFailed { file_name, reason } => {
            Some(format!("Could not delete {}: {}", file_name, reason))
        }
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    let _ = heic_core::logging::init_logging("heic2png", heic_core::logging::LogConfig::default());

    let cli = Cli::parse();

    if cli.delete_original {
        if let Err(msg) = heic_core::check_delete_safety(&cli.input) {
            eprintln!("{}", style(msg).red());
            std::process::exit(1);
        }
    }

    let start = Instant::now();
    let tasks = scan_directory(&cli.input)?;
    tracing::info!(dir = %cli.input.display(), count = tasks.len(), "Scan complete");

    let bar = ProgressBar::new(tasks.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.green} {pos}/{len} {msg}")?.progress_chars("█▓░"),
    );

    let json_mode = cli.output == OutputFormat::Json;
    let mut sink = |event: ConvertEvent| {
        if json_mode {
            // stdout is reserved for the JSON document; failures still
            // surface on stderr as they happen.
            if let Some(line) = failure_line(&event) {
                eprintln!("{}", line);
            }
            return;
        }
        match event {
            ConvertEvent::BatchStarted { total } => {
                if total == 0 {
                    bar.println(format!(
                        "No HEIC files found in {}",
                        cli.input.display()
                    ));
                } else {
                    bar.println(format!("Found {} HEIC files", total));
                }
            }
            ConvertEvent::Converting { file_name, .. } => {
                bar.set_message(file_name.clone());
                bar.println(format!("Converting {}", file_name));
            }
            ConvertEvent::Converted { .. } => {
                bar.inc(1);
            }
            ConvertEvent::SourceDeleted { file_name } => {
                bar.println(format!("Deleted {}", file_name));
            }
            ConvertEvent::DeleteFailed { file_name, reason } => {
                bar.println(format!(
                    "{}",
                    style(format!("⚠️  Could not delete {}: {}", file_name, reason)).yellow()
                ));
            }
            ConvertEvent::ConvertFailed {
                file_name, reason, ..
            } => {
                bar.println(format!(
                    "{}",
                    style(format!("Error converting {}: {}", file_name, reason)).red()
                ));
                bar.inc(1);
            }
            ConvertEvent::BatchFinished { .. } => {
                bar.finish_and_clear();
            }
        }
    };

    let options = ConvertOptions {
        delete_original: cli.delete_original,
    };
    let cancel = AtomicBool::new(false);
    let summary = run_batch(&tasks, &HeifCodec, &options, &mut sink, &cancel);

    match cli.output {
        OutputFormat::Human => print_summary_report(&summary, start.elapsed()),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "directory": cli.input,
                "summary": summary,
                "duration_secs": start.elapsed().as_secs_f64(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    if summary.failed > 0 {
        tracing::warn!(failed = summary.failed, "Run finished with failures");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_line_for_failed_conversion() {
        let event = ConvertEvent::ConvertFailed {
            index: 1,
            file_name: "a.heic".to_string(),
            reason: "corrupt container".to_string(),
        };
        assert_eq!(
            failure_line(&event).as_deref(),
            Some("Error converting a.heic: corrupt container")
        );
    }

    #[test]
    fn test_failure_line_for_failed_delete() {
        let event = ConvertEvent::DeleteFailed {
            file_name: "a.heic".to_string(),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            failure_line(&event).as_deref(),
            Some("Could not delete a.heic: permission denied")
        );
    }

    #[test]
    fn test_no_failure_line_for_success_events() {
        assert!(failure_line(&ConvertEvent::BatchStarted { total: 3 }).is_none());
        assert!(failure_line(&ConvertEvent::Converted {
            index: 1,
            file_name: "a.heic".to_string(),
        })
        .is_none());
    }
}
