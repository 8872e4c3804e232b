use dunes_config::Config;
use dunes_di::Provide;
use dunes_persistence_contracts::Database as _;
use tracing::info;

use crate::environment::{
    types::{Database, RestServer},
    ConfigProvider, Provider,
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Opening in-memory contact message store");
    let database = Database::new();
    database.ping().await?;

    let config_provider = ConfigProvider::new(&config);
    let mut provider = Provider::new(config_provider, database);
    let server: RestServer = provider.provide();

    server.serve(config.http.host, config.http.port).await
}
