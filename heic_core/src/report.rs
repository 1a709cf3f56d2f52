//! Summary reporting for the CLI variant

use crate::summary::RunSummary;
use console::style;
use std::time::Duration;

pub fn print_summary_report(summary: &RunSummary, duration: Duration) {
    println!();
    println!("╔══════════════════════════════════════════════════╗");
    println!("║           📊 HEIC → PNG Summary Report           ║");
    println!("╠══════════════════════════════════════════════════╣");
    println!("║  📁 Files Processed:    {:>10}               ║", summary.total);
    println!(
        "║  ✅ Succeeded:          {:>10}               ║",
        style(summary.succeeded).green()
    );
    println!(
        "║  ❌ Failed:             {:>10}               ║",
        if summary.failed > 0 {
            style(summary.failed).red()
        } else {
            style(summary.failed).dim()
        }
    );
    println!("║  🗑️  Sources Deleted:    {:>10}               ║", summary.deleted);
    println!(
        "║  📈 Success Rate:       {:>9.1}%               ║",
        summary.success_rate()
    );
    println!(
        "║  ⏱️  Total Time:         {:>9.1}s               ║",
        duration.as_secs_f64()
    );
    println!("╚══════════════════════════════════════════════════╝");

    if !summary.errors.is_empty() {
        println!();
        println!("❌ Errors encountered:");
        for (path, reason) in &summary.errors {
            println!("   {} → {}", path.display(), reason);
        }
    }
}

pub fn print_simple_summary(summary: &RunSummary) {
    println!(
        "\n✅ Complete: {} succeeded, {} failed (total: {})",
        summary.succeeded, summary.failed, summary.total
    );
}
