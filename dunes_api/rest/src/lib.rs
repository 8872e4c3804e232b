use std::net::IpAddr;

use anyhow::Context;
use axum::Router;
use dunes_core_contact_contracts::ContactFeatureService;
use dunes_core_health_contracts::HealthFeatureService;
use dunes_di::Build;
use tokio::net::TcpListener;
use tracing::info;

mod errors;
mod middlewares;
pub mod models;
mod routes;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Health, Contact> {
    health: Health,
    contact: Contact,
}

impl<Health, Contact> RestServer<Health, Contact>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
{
    pub fn new(health: Health, contact: Contact) -> Self {
        Self { health, contact }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let listener = TcpListener::bind((host, port))
            .await
            .with_context(|| format!("Failed to bind to {host}:{port}"))?;
        info!("Starting REST API server on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .await
            .map_err(Into::into)
    }

    /// Returns the fully layered router without binding a socket.
    pub fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
