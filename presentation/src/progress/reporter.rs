//! Progress reporting for batch execution

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use quiz_application::BatchProgressNotifier;
use quiz_domain::{BatchItemResult, BatchSummary};
use std::sync::Mutex;

/// Reports progress with a single progress bar across all questions
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn result_line(result: &BatchItemResult) -> String {
        match result.selection() {
            Some(letter) if result.consensus_reached() => {
                format!("{} {} -> {}", "v".green(), result.id, letter)
            }
            Some(letter) => format!("{} {} -> {} (forced)", "~".yellow(), result.id, letter),
            None => format!("{} {} (failed)", "x".red(), result.id),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProgressNotifier for ProgressReporter {
    fn on_batch_start(&self, total_questions: usize) {
        let pb = ProgressBar::new(total_questions as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Answering");
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_question_complete(&self, result: &BatchItemResult) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.set_message(Self::result_line(result));
            pb.inc(1);
        }
    }

    fn on_batch_complete(&self, summary: &BatchSummary) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            let message = if summary.all_succeeded() {
                "done!".green().to_string()
            } else {
                format!("done, {} failed", summary.failed).yellow().to_string()
            };
            pb.finish_with_message(message);
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl BatchProgressNotifier for SimpleProgress {
    fn on_batch_start(&self, total_questions: usize) {
        eprintln!(
            "{} {} ({} questions)",
            "->".cyan(),
            "Answering".bold(),
            total_questions
        );
    }

    fn on_question_complete(&self, result: &BatchItemResult) {
        eprintln!("  {}", ProgressReporter::result_line(result));
    }

    fn on_batch_complete(&self, _summary: &BatchSummary) {
        eprintln!();
    }
}
