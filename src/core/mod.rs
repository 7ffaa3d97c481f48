//! Core domain logic (protocol-agnostic)
//!
//! Everything here is independent of the transport that exposes it;
//! operations return JSON strings or typed errors.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Catalog records and response structures
//! - **logging**: Tracing subscriber setup
//! - **cache**: TTL memory cache and async memoization
//! - **catalog**: Recipe sources and the cached repository
//! - **query**: Recipe lookups, shopping lists, nutrition
//! - **planner**: Meal plans and dish recommendations
//! - **monitoring**: Operation timings and health checks
//! - **resources** / **prompts**: Resource documents and prompt text
//! - **services**: Unified service container

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod monitoring;
pub mod planner;
pub mod prompts;
pub mod query;
pub mod resources;
pub mod services;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{RecipeError, Result};
pub use services::Services;
