//! Database module (PostgreSQL and in-memory adapters)

pub mod connection;
pub mod postgres;
pub mod memory;

pub use connection::{connect, create_pool, run_migrations, InfrastructureError};
pub use memory::{MemoryStore, Table};
