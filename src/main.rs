//! Smart CRM entry point.
//!
//! Loads configuration, opens the data directory and reports the current
//! state of the pipeline.

use std::error::Error;
use std::sync::Arc;

use smart_crm::adapters::FileRecordStorage;
use smart_crm::application::{build_advisor, Workspace};
use smart_crm::config::{AppConfig, AppSettings, LogFormat, StorageConfig};
use smart_crm::domain::catalog::{agency_catalog, Catalog};
use smart_crm::ports::SuggestionAdvisor;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.app);
    tracing::info!(environment = ?config.app.environment, "starting smart-crm");

    let catalog = load_catalog(&config.storage).await?;
    let storage = Arc::new(FileRecordStorage::new(&config.storage.data_dir));
    let workspace = Workspace::load(storage, catalog, config.storage.seed_demo_data).await?;

    match build_advisor(&config.ai)?.provider_info() {
        Some(info) => tracing::info!(provider = %info.name, model = %info.model, "suggestion advisor ready"),
        None => tracing::info!("suggestion advisor disabled"),
    }

    let summary = workspace.summary();
    tracing::info!(
        total = %summary.total_value,
        hot = %summary.hot_value,
        warm = %summary.warm_value,
        won = summary.won_deals,
        deals = summary.total_deals,
        contacts = summary.contact_count,
        "pipeline summary"
    );
    for stage in &summary.value_by_stage {
        tracing::info!(stage = stage.label, deals = stage.deal_count, value = %stage.value, "stage");
    }

    Ok(())
}

fn init_tracing(settings: &AppSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    match settings.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
}

async fn load_catalog(storage: &StorageConfig) -> Result<Catalog, Box<dyn Error>> {
    match &storage.catalog_path {
        Some(path) => {
            let json = tokio::fs::read_to_string(path).await?;
            let catalog = Catalog::from_json(&json)?;
            tracing::info!(path = %path.display(), items = catalog.len(), "catalog loaded from file");
            Ok(catalog)
        }
        None => Ok(agency_catalog()?),
    }
}
