use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use dunes_core_health_contracts::{HealthFeatureService, HealthStatus};
use dunes_di::Build;
use dunes_persistence_contracts::Database;
use dunes_shared_contracts::time::TimeService;
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone, Build)]
pub struct HealthFeatureServiceImpl<Time, Db> {
    time: Time,
    db: Db,
    config: HealthFeatureConfig,
    #[state]
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: DateTime<Utc>,
}

impl CachedStatus {
    fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now < self.timestamp + ttl
    }
}

impl<Time, Db> HealthFeatureService for HealthFeatureServiceImpl<Time, Db>
where
    Time: TimeService,
    Db: Database,
{
    async fn get_status(&self) -> HealthStatus {
        let now = self.time.now();
        let ttl = self.config.cache_ttl;

        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard.as_ref().filter(|c| c.is_fresh(now, ttl)) {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard.as_ref().filter(|c| c.is_fresh(now, ttl)) {
            return cached.status;
        }

        let database = self
            .db
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping database: {err}"))
            .is_ok();

        cache_guard
            .insert(CachedStatus {
                status: HealthStatus { database },
                timestamp: now,
            })
            .status
    }
}
