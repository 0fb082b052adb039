//! # WPS Infrastructure
//!
//! Backend adapters for the repository traits: PostgreSQL through `sqlx`,
//! and an in-process store used for local runs and tests.

pub mod database;

pub use database::{
    connect, create_pool, run_migrations, InfrastructureError, MemoryStore, Table,
};
pub use database::postgres;
