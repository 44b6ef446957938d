mod config;
mod content;
mod db;
mod health;
mod i18n;
mod routes;
mod services;
mod state;
mod store;

use std::sync::Arc;

use config::{AppConfig, StoreConfig};
use store::{HealthStore, PgStore, RestStore};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().expect("invalid configuration");

    let store: Option<Arc<dyn HealthStore>> = match &config.store {
        StoreConfig::Postgres { url, max_connections } => {
            let pool = db::init_pool(url, *max_connections)
                .await
                .expect("database init failed");
            Some(Arc::new(PgStore::new(pool)))
        }
        StoreConfig::Rest { url, api_key, timeout_secs } => Some(Arc::new(
            RestStore::new(url, api_key.clone(), *timeout_secs).expect("rest store init failed"),
        )),
        StoreConfig::Disabled => {
            tracing::warn!("no DATABASE_URL or SUPABASE_URL configured; submissions will not be stored");
            None
        }
    };

    if let Some(store) = store.as_deref() {
        tracing::info!(backend = store.backend(), "submission store configured");
        if config.seed_catalog {
            // Non-fatal: the site still serves the built-in catalog.
            if let Err(e) = services::catalog::seed(store).await {
                tracing::error!(error = %e, "catalog seed failed");
            }
        }
    }

    if config.admin_password.is_none() {
        tracing::warn!("ADMIN_PASSWORD not set; admin dashboard disabled");
    }

    let state = state::AppState::new(&config, store);
    let _purge = services::admin::spawn_session_purge_task(state.sessions.clone());

    let app = routes::app(state, &config.website_dir);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, website_dir = %config.website_dir.display(), "swasthya listening");
    axum::serve(listener, app).await.expect("server failed");
}
