//! Backend entry point: loads settings, prepares the database and serves HTTP.

use std::io;

use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use till::inbound::http::health::HealthState;
use till::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use till::server::{ServerConfig, ServerSettings, create_server};

#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;
    let key = load_session_key(&settings)?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;

    let mut config = ServerConfig::new(key, settings.cookie_secure(), SameSite::Lax, bind_addr);
    if let Some(database_url) = settings.database_url.clone() {
        config = config.with_db_pool(prepare_database(database_url, settings.db_pool_size()).await?);
    } else {
        warn!("TILL_DATABASE_URL not set; serving fixture data");
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "listening");
    server.await
}

fn load_session_key(settings: &ServerSettings) -> io::Result<Key> {
    let key_path = settings.session_key_file();
    match std::fs::read(&key_path) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(e) if cfg!(debug_assertions) || settings.session_allow_ephemeral() => {
            warn!(path = %key_path.display(), error = %e, "using temporary session key (dev only)");
            Ok(Key::generate())
        }
        Err(e) => Err(io::Error::other(format!(
            "failed to read session key at {}: {e}",
            key_path.display()
        ))),
    }
}

async fn prepare_database(database_url: String, pool_size: u32) -> io::Result<DbPool> {
    let migration_url = database_url.clone();
    tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
        .await
        .map_err(|e| io::Error::other(format!("migration task failed: {e}")))?
        .map_err(io::Error::other)?;

    DbPool::new(PoolConfig::new(database_url).with_max_size(pool_size))
        .await
        .map_err(|e| io::Error::other(e.into_message()))
}
