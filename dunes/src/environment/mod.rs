use std::time::Duration;

use dunes_config::Config;
use dunes_core_health_impl::HealthFeatureConfig;
use dunes_di::provider;
use types::Database;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        database: Database,
        ..config: ConfigProvider {
            HealthFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, database: Database) -> Self {
        Self {
            _cache: Default::default(),
            database,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        health_feature_config: HealthFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> Self {
        let health_feature_config = HealthFeatureConfig {
            cache_ttl: Duration::from(config.health.cache_ttl),
        };

        Self {
            _cache: Default::default(),
            health_feature_config,
        }
    }
}
