//! Console output formatter for batch results

use super::records::{AnnotatedQuestion, AnswerRecord, SimpleAnswerRecord};
use colored::Colorize;
use quiz_domain::{BatchItemResult, BatchSummary, OutputFormat, Question};
use serde::Serialize;

/// Formats batch results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render results in `format`.
    ///
    /// `questions` and `results` are parallel (same length, same order).
    pub fn render(
        format: OutputFormat,
        questions: &[Question],
        results: &[BatchItemResult],
        summary: &BatchSummary,
    ) -> String {
        match format {
            OutputFormat::Table => Self::format_table(results, summary),
            OutputFormat::Json => Self::format_json(results),
            OutputFormat::Simple => Self::format_simple(results),
            OutputFormat::Annotated => Self::format_annotated(questions, results),
        }
    }

    /// One line per question plus a summary
    pub fn format_table(results: &[BatchItemResult], summary: &BatchSummary) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Quiz Quorum Results"));
        output.push('\n');

        let id_width = results
            .iter()
            .map(|r| r.id.chars().count())
            .max()
            .unwrap_or(0)
            .max(2);

        for result in results {
            let id = format!("{:<width$}", result.id, width = id_width);
            let line = match result.selection() {
                Some(letter) => {
                    let status = if result.consensus_reached() {
                        "agreed".green()
                    } else {
                        "forced".yellow()
                    };
                    format!(
                        "{}  {}  {:<6}  {} iteration(s)  {} ms",
                        id.bold(),
                        letter.to_string().cyan().bold(),
                        status,
                        result.iterations(),
                        result.elapsed_ms
                    )
                }
                None => format!(
                    "{}  {}  {}",
                    id.bold(),
                    "-".red().bold(),
                    result.error().unwrap_or("unknown error").red()
                ),
            };
            output.push_str(&line);
            output.push('\n');
        }

        output.push_str(&Self::footer());
        output.push_str(&Self::format_summary(summary));
        output.push('\n');

        output
    }

    /// Full result records as pretty JSON
    pub fn format_json(results: &[BatchItemResult]) -> String {
        let records: Vec<AnswerRecord<'_>> = results.iter().map(AnswerRecord::from).collect();
        Self::to_json(&records)
    }

    /// `[{questionNumber, selectedAnswer}]` as pretty JSON
    pub fn format_simple(results: &[BatchItemResult]) -> String {
        let records: Vec<SimpleAnswerRecord<'_>> =
            results.iter().map(SimpleAnswerRecord::from).collect();
        Self::to_json(&records)
    }

    /// Questions echoed back with the selected answer flagged
    pub fn format_annotated(questions: &[Question], results: &[BatchItemResult]) -> String {
        let records: Vec<AnnotatedQuestion<'_>> = questions
            .iter()
            .zip(results)
            .map(|(q, r)| AnnotatedQuestion::new(q, r))
            .collect();
        Self::to_json(&records)
    }

    /// `5 questions: 3 agreed, 1 forced, 1 failed (4210 ms)`
    pub fn format_summary(summary: &BatchSummary) -> String {
        let failed = if summary.failed > 0 {
            format!("{} failed", summary.failed).red().to_string()
        } else {
            format!("{} failed", summary.failed)
        };
        format!(
            "{} questions: {}, {}, {} ({} ms)",
            summary.total,
            format!("{} agreed", summary.agreed).green(),
            format!("{} forced", summary.forced).yellow(),
            failed,
            summary.elapsed_ms
        )
    }

    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "[]".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}
