//! Builders wiring ports to Diesel adapters or fixtures.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::persistence::{
    DbPool, DieselAnalyticsQuery, DieselCategoryRepository, DieselDiscountRepository,
    DieselLoginService, DieselOrderRepository, DieselSupplierRepository,
};

use super::ServerConfig;

fn diesel_ports(pool: &DbPool) -> HttpStatePorts {
    HttpStatePorts {
        login: Arc::new(DieselLoginService::new(pool.clone())),
        categories: Arc::new(DieselCategoryRepository::new(pool.clone())),
        suppliers: Arc::new(DieselSupplierRepository::new(pool.clone())),
        orders: Arc::new(DieselOrderRepository::new(pool.clone())),
        discounts: Arc::new(DieselDiscountRepository::new(pool.clone())),
        analytics: Arc::new(DieselAnalyticsQuery::new(pool.clone())),
    }
}

/// HTTP state backed by PostgreSQL when a pool is configured, fixtures otherwise.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let ports = match &config.db_pool {
        Some(pool) => diesel_ports(pool),
        None => {
            info!("no database configured; serving fixture ports");
            HttpStatePorts::default()
        }
    };
    web::Data::new(HttpState::new(ports))
}
