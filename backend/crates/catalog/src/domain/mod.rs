//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Problem, ProgressRecord)
//! - Domain value objects (Difficulty, RecencyWindow)
//! - The typed filter predicates behind problem queries
//! - Repository traits (interfaces)

pub mod entities;
pub mod filter;
pub mod repository;
pub mod value_objects;
