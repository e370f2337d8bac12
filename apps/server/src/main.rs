use anyhow::Context;
use gnomix::domain::config::{ApiConfig, LoggingConfig};
use gnomix::kernel::config::load_config;
use gnomix_logger::Logger;
use gnomix_server::Server;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let cfg: ApiConfig =
        load_config(path.as_deref()).context("Critical: Configuration is malformed")?;

    let _log = init_logger(&cfg.logging)?;
    tracing::info!(
        path = %path.as_deref().map_or_else(|| "<default>".into(), |p| p.display().to_string()),
        "Configuration loaded"
    );

    Server::builder().config(cfg).build()?.run().await
}

fn init_logger(cfg: &LoggingConfig) -> anyhow::Result<Logger> {
    let mut builder = Logger::builder(env!("CARGO_PKG_NAME"))
        .level_name(&cfg.level)?
        .json(cfg.json)
        .max_files(cfg.max_files);

    if let Some(filter) = &cfg.filter {
        builder = builder.env_filter(filter);
    }
    if let Some(directory) = &cfg.directory {
        builder = builder.directory(directory);
    }

    Ok(builder.init()?)
}
