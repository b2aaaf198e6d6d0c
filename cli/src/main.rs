//! CLI entrypoint for Quiz Quorum
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod logging;

use anyhow::{Context, Result, bail};
use clap::Parser;
use quiz_application::{
    BatchProgressNotifier, NoBatchProgress, ProcessBatchUseCase, ResilientClient,
    RunConsensusUseCase,
};
use quiz_infrastructure::{
    ConfigLoader, FileConfig, GeminiGateway, JsonlConversationLogger, QuestionFileLoader,
};
use quiz_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let loaded = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    };
    let mut config =
        loaded.map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?;
    apply_overrides(&mut config, &cli);

    let (level, _) = config.logging.parse_level();
    let _log_guard = logging::init(cli.verbose, level, cli.log_file.as_deref())?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            error!("{}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration; see errors above");
    }

    let Some(questions_path) = cli.questions.as_deref() else {
        bail!("A questions file is required");
    };
    let questions = QuestionFileLoader::load(questions_path)
        .with_context(|| format!("Failed to load questions from {}", questions_path.display()))?;

    let params = config.to_execution_params();
    info!(
        questions = questions.len(),
        max_concurrent = params.max_concurrent_workers,
        max_iterations = params.max_iterations,
        max_attempts = params.retry.max_attempts,
        worst_case_backoff_ms = u64::try_from(params.retry.total_backoff().as_millis())
            .unwrap_or(u64::MAX),
        model = %config.provider.model,
        "Starting Quiz Quorum"
    );

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiGateway::new(config.provider.to_gemini_config()?)?);
    let client = Arc::new(ResilientClient::new(gateway, params.retry));
    let mut consensus = RunConsensusUseCase::new(client, params.max_iterations);

    if let Some(path) = &config.logging.conversation_log {
        match JsonlConversationLogger::open(path) {
            Ok(logger) => {
                info!(path = %logger.path().display(), "Writing conversation log");
                consensus = consensus.with_conversation_logger(Arc::new(logger));
            }
            Err(e) => warn!(path = %path.display(), error = %e, "Could not open conversation log"),
        }
    }

    let batch = ProcessBatchUseCase::new(Arc::new(consensus), params.max_concurrent_workers);

    let progress: Arc<dyn BatchProgressNotifier> = if cli.quiet {
        Arc::new(NoBatchProgress)
    } else if std::io::stderr().is_terminal() {
        Arc::new(ProgressReporter::new())
    } else {
        Arc::new(SimpleProgress)
    };

    let (results, summary) = batch
        .process_with_progress(questions.clone(), progress)
        .await;

    let format = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    println!(
        "{}",
        ConsoleFormatter::render(format, &questions, &results, &summary)
    );

    if cli.strict && !summary.all_succeeded() {
        error!(failed = summary.failed, "Some questions could not be answered");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

/// Command-line flags take precedence over every config source
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(n) = cli.concurrency {
        config.workers.max_concurrent = n;
    }
    if let Some(n) = cli.max_iterations {
        config.consensus.max_iterations = n;
    }
    if let Some(model) = &cli.model {
        config.provider.model = model.clone();
    }
    if let Some(path) = &cli.conversation_log {
        config.logging.conversation_log = Some(path.clone());
    }
}
