//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel.
//!
//! Adapters convert between domain types and storage representations and
//! contain no business logic.

pub mod persistence;
