mod config;
mod db;
mod error;
mod kafka;
mod models;
mod processor;

use config::AppConfig;
use db::{PgActivityStore, PgIdentityResolver};
use processor::gate::SerializationGate;
use processor::registrar::ActivityRegistrar;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load config
    let config = AppConfig::load()?;

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .init();

    info!("Starting Line Activity Tracker...");

    // Init DB
    let pool = db::init_pool(&config.database_url, config.db_max_connections).await?;
    db::run_migrations(&pool).await?;
    info!("Connected to database");

    let registrar = ActivityRegistrar::new(
        SerializationGate::spawn(),
        Arc::new(PgIdentityResolver::new(pool.clone())),
        Arc::new(PgActivityStore::new(pool)),
    );

    kafka::start_kafka_consumer(&config, registrar).await?;

    Ok(())
}
