//! HTTP inbound adapter exposing the page-data REST endpoints.
//!
//! Handlers authenticate through the session, build a tenant filter, call a
//! port and render the result through a page view.

pub mod analytics;
pub mod catalogue;
pub mod discounts;
pub mod error;
pub mod fetcher;
pub mod health;
pub mod orders;
pub mod schemas;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;
pub mod views;

pub use error::ApiResult;
