//! inkform-records
//!
//! Postgres persistence for accepted waivers: connection pooling, embedded
//! migrations, and inserts into the append-only `waivers` table.

pub mod error;
pub mod pool;
pub mod waivers;
