//! travel-type - score stored test sessions and resolve share links.
//!
//! ```text
//! travel-type submit <SESSION_ID>   Score a stored session and print the result as JSON
//! travel-type resolve <SHARE_URL>   Print the profile a share link points to
//! ```
//!
//! Configuration comes from `TRAVEL_TYPE__*` environment variables (see
//! `travel_type::config`). Logs go to stderr; stdout carries only JSON.

use std::process::ExitCode;
use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use travel_type::adapters::FileSessionStore;
use travel_type::application::{
    ResolveSharedResultHandler, ResolveSharedResultQuery, SubmitTestCommand, SubmitTestHandler,
};
use travel_type::config::{
    AppConfig, ConfigError, QuizConfig, ValidationError as ConfigValidationError,
};
use travel_type::domain::foundation::SessionId;
use travel_type::domain::personality::PersonalityCatalog;
use travel_type::domain::quiz::{CatalogError, QuestionCatalog, QuizError};

const USAGE: &str = "usage: travel-type submit <SESSION_ID> | travel-type resolve <SHARE_URL>";

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigValidationError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid session id '{0}'")]
    InvalidSessionId(String),

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Usage(_) => ExitCode::from(2),
            CliError::Quiz(err) if err.is_incomplete() => ExitCode::from(3),
            _ => ExitCode::FAILURE,
        }
    }
}

enum Command {
    Submit(SessionId),
    Resolve(String),
}

impl Command {
    fn parse(args: &[String]) -> Result<Self, CliError> {
        match args {
            [cmd, id] if cmd == "submit" => id
                .parse()
                .map(Command::Submit)
                .map_err(|_| CliError::InvalidSessionId(id.clone())),
            [cmd, url] if cmd == "resolve" => Ok(Command::Resolve(url.clone())),
            _ => Err(CliError::Usage(USAGE.to_string())),
        }
    }
}

fn load_catalogs(quiz: &QuizConfig) -> Result<(QuestionCatalog, PersonalityCatalog), CliError> {
    let questions = match &quiz.questions_path {
        Some(path) => {
            info!(path = %path.display(), "Loading question catalog");
            QuestionCatalog::from_path(path)?
        }
        None => QuestionCatalog::builtin().clone(),
    };
    let profiles = match &quiz.personality_types_path {
        Some(path) => {
            info!(path = %path.display(), "Loading personality catalog");
            PersonalityCatalog::from_path(path)?
        }
        None => PersonalityCatalog::builtin().clone(),
    };
    Ok((questions, profiles))
}

async fn execute(config: AppConfig, args: &[String]) -> Result<String, CliError> {
    config.validate()?;
    let command = Command::parse(args)?;
    run(config, command).await
}

async fn run(config: AppConfig, command: Command) -> Result<String, CliError> {
    let (questions, profiles) = load_catalogs(&config.quiz)?;
    let profiles = Arc::new(profiles);

    match command {
        Command::Submit(session_id) => {
            let handler = SubmitTestHandler::new(
                Arc::new(FileSessionStore::new(&config.storage.data_dir)),
                Arc::new(questions),
                profiles,
                config.quiz.scoring_engine()?,
                config.share.base_url.clone(),
            );
            let submitted = handler.handle(SubmitTestCommand { session_id }).await?;
            Ok(serde_json::to_string_pretty(&submitted)?)
        }
        Command::Resolve(url) => {
            let handler = ResolveSharedResultHandler::new(profiles, config.share.base_url.clone());
            let resolved = handler.handle(ResolveSharedResultQuery { url })?;
            Ok(serde_json::to_string_pretty(&resolved.profile)?)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    config.logging.init_tracing();

    match execute(config, &args).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("{}", err);
            err.exit_code()
        }
    }
}
