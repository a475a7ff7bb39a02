use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use zookeepr::service::{self, AnimalService};
use zookeepr::{Config, JsonFileStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let store = JsonFileStore::new(&config.data_path);
    let service = AnimalService::load(store).map_err(|e| {
        tracing::error!(path = %config.data_path.display(), error = %e, "failed to load animals");
        e
    })?;

    service::serve(Arc::new(service), &config.bind_addr()).await?;
    Ok(())
}
