//! Unified service container for the recipe assistant
//!
//! Provides shared access to all core services.

use crate::core::cache::MemoryCache;
use crate::core::catalog::{HttpRecipeSource, RecipeRepository, RecipeSource};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::monitoring::{HealthChecker, PerformanceMonitor};
use crate::core::planner::{MealService, RecommendationService};
use crate::core::query::RecipeService;
use crate::core::resources;
use std::sync::Arc;
use std::time::Duration;

/// Unified services container
///
/// Every service shares one cache, one repository and one monitor.
#[derive(Clone)]
pub struct Services {
    /// Application configuration
    pub config: Arc<Config>,

    /// TTL cache backing the catalog snapshot
    pub cache: Arc<MemoryCache>,

    /// Memoized catalog access
    pub repository: Arc<RecipeRepository>,

    /// Per-operation timings
    pub monitor: Arc<PerformanceMonitor>,

    pub health: Arc<HealthChecker>,

    /// Catalog queries, shopping lists and nutrition
    pub recipes: Arc<RecipeService>,

    /// Weekly meal plans
    pub meals: Arc<MealService>,

    /// "What to eat" recommendations
    pub recommendations: Arc<RecommendationService>,
}

impl Services {
    /// Create services backed by the configured HTTP catalog
    pub fn new(config: Config) -> Result<Self> {
        let source = Arc::new(HttpRecipeSource::from_config(&config)?);
        Ok(Self::with_source(config, source))
    }

    /// Create services over any recipe source
    pub fn with_source(config: Config, source: Arc<dyn RecipeSource>) -> Self {
        let config = Arc::new(config);
        let cache = Arc::new(MemoryCache::from_config(&config.cache));
        let repository = Arc::new(RecipeRepository::new(
            source,
            Arc::clone(&cache),
            Duration::from_secs(config.cache.catalog_ttl_secs),
        ));
        let monitor = Arc::new(PerformanceMonitor::new(config.performance.max_history));

        let health = Arc::new(HealthChecker::new(
            Arc::clone(&config),
            Arc::clone(&repository),
            Arc::clone(&cache),
            Arc::clone(&monitor),
        ));
        let recipes = Arc::new(RecipeService::new(
            Arc::clone(&repository),
            Arc::clone(&monitor),
            Arc::clone(&config),
        ));
        let meals = Arc::new(MealService::new(
            Arc::clone(&repository),
            Arc::clone(&monitor),
            Arc::clone(&config),
        ));
        let recommendations = Arc::new(RecommendationService::new(
            Arc::clone(&repository),
            Arc::clone(&monitor),
            Arc::clone(&config),
        ));

        tracing::debug!("Services initialized over {}", repository.source().describe());

        Self {
            config,
            cache,
            repository,
            monitor,
            health,
            recipes,
            meals,
            recommendations,
        }
    }

    /// Content of a `howtocook://` resource, `None` for unknown URIs
    pub async fn read_resource(&self, uri: &str) -> Option<Result<String>> {
        match uri {
            resources::CATEGORIES_URI => Some(resources::categories_resource(&self.repository).await),
            resources::STATS_URI => Some(resources::stats_resource(&self.repository).await),
            resources::HEALTH_URI => Some(resources::health_resource(&self.health).await),
            _ => None,
        }
    }

    /// Drop expired cache entries, returning how many were removed
    pub async fn cleanup_cache(&self) -> usize {
        let removed = self.cache.cleanup_expired().await;
        if removed > 0 {
            tracing::debug!("Removed {} expired cache entries", removed);
        }
        removed
    }
}
