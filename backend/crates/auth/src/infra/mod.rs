//! Infrastructure Layer
//!
//! Database implementations.

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryAuthRepository;
pub use sqlite::SqliteAuthRepository;
