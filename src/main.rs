use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use studyline::infrastructure::{
    ApiClient, AppConfig, CliArgs, ConfigStore, KeyringTokenStorage, resolve_catalog,
};
use studyline::presentation::{App, AppSettings};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn create_app() -> Result<(App, Option<String>)> {
    let args = CliArgs::parse();
    let mut config = ConfigStore::locate(args.config.as_deref())?.load()?;
    config.merge_with_args(args);
    let cli_token = config.token.clone();

    init_logging(&config)?;

    info!(version = studyline::VERSION, api = %config.api.base_url, "Starting Studyline");

    let catalog = resolve_catalog(config.content_path.as_deref())?;
    info!(
        lessons = catalog.lessons.len(),
        quizzes = catalog.quizzes.len(),
        exams = catalog.exams.len(),
        "Catalog ready"
    );

    let api_client = Arc::new(ApiClient::new(&config.api.base_url, config.api.timeout())?);
    let token_storage = Arc::new(KeyringTokenStorage::new());

    let app = App::new(
        api_client.clone(),
        api_client,
        token_storage,
        catalog,
        AppSettings::from(&config),
    );

    Ok((app, cli_token))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let (app, cli_token) = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal, cli_token).await;

    ratatui::restore();

    result
}
