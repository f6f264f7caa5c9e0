use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use clip_avatar::application::services::{ContentResolver, ImageNormalizer, SizeGuard};
use clip_avatar::application::{ClearAvatarUseCase, SetAvatarOutcome, SetAvatarUseCase};
use clip_avatar::infrastructure::{
    AppConfig, CliArgs, HttpUrlFetcher, PreviewSession, SystemClipboard, prepare_data_dir,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.log_path.clone() {
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
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let client_id = args.client_id;
    let clear = args.clear;

    let mut config = AppConfig::load(args.config.as_deref());
    config.merge_with_args(args);

    init_logging(&config)?;
    info!(version = clip_avatar::VERSION, "Starting clip-avatar");

    let session = Arc::new(PreviewSession::new(client_id));

    if clear {
        ClearAvatarUseCase::new(session).execute()?;
        return Ok(());
    }

    let data_dir = prepare_data_dir(config.data_dir.clone())?;
    let fetcher = Arc::new(HttpUrlFetcher::new(config.http_timeout_secs)?);

    let use_case = SetAvatarUseCase::new(
        session,
        Arc::new(SystemClipboard::new()),
        ContentResolver::new(fetcher),
        ImageNormalizer::new(config.resize_bound),
        SizeGuard::new(config.max_avatar_bytes),
        data_dir,
    );

    match use_case.execute()? {
        SetAvatarOutcome::Uploaded(digest) => info!(%digest, "Avatar uploaded"),
        SetAvatarOutcome::DuplicateSkipped(digest) => info!(%digest, "Avatar unchanged"),
    }

    Ok(())
}
