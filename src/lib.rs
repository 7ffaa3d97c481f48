//! HowToCook - Recipe Assistant Service
//!
//! Answers recipe questions over the HowToCook catalog: lookups by
//! category, ingredient, difficulty, time, cuisine, tag and season,
//! plus weekly meal plans, "what to eat" combinations, shopping lists
//! and nutrition estimates.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, logging
//!   - cache (TTL store, memoization)
//!   - catalog (remote JSON source, cached repository)
//!   - query, planner (the operations)
//!   - monitoring (timings, health)
//!   - services (unified service container)
//!
//! The catalog is fetched once per cache lifetime and every operation
//! answers from that shared snapshot.

// Core domain logic (protocol-agnostic)
pub mod core;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{RecipeError, Result};
pub use core::services::Services;
pub use core::types::*;
