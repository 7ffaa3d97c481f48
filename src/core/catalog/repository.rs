//! Cached catalog repository.

use super::source::RecipeSource;
use crate::core::cache::{cache_key, cached, MemoryCache};
use crate::core::types::Recipe;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Catalog access with memoized fetches
///
/// The cache entry owns freshness. The decoded catalog is kept as a
/// shared snapshot and handed out while that entry is live, so hits
/// skip deserializing the whole recipe array.
pub struct RecipeRepository {
    source: Arc<dyn RecipeSource>,
    cache: Arc<MemoryCache>,
    catalog_ttl: Duration,
    key: String,
    snapshot: RwLock<Option<Arc<Vec<Recipe>>>>,
}

impl RecipeRepository {
    pub fn new(source: Arc<dyn RecipeSource>, cache: Arc<MemoryCache>, catalog_ttl: Duration) -> Self {
        let key = cache_key("recipes", "fetch_all_recipes", &source.describe());
        Self {
            source,
            cache,
            catalog_ttl,
            key,
            snapshot: RwLock::new(None),
        }
    }

    pub fn source(&self) -> &Arc<dyn RecipeSource> {
        &self.source
    }

    /// Fetch the whole catalog, served from cache while fresh
    ///
    /// Upstream failures are logged and yield an empty list; they are
    /// not cached, so the next call retries the source.
    pub async fn fetch_all_recipes(&self) -> Arc<Vec<Recipe>> {
        if self.cache.contains(&self.key).await {
            if let Some(recipes) = self.snapshot.read().await.as_ref() {
                return Arc::clone(recipes);
            }
        }

        let fetched = cached(&self.cache, &self.key, Some(self.catalog_ttl), async {
            let recipes = self.source.fetch_recipes().await?;
            tracing::info!(
                "Loaded {} recipes from {}",
                recipes.len(),
                self.source.describe()
            );
            Ok::<_, crate::core::error::RecipeError>(recipes)
        })
        .await;

        match fetched {
            Ok(recipes) => {
                let recipes = Arc::new(recipes);
                *self.snapshot.write().await = Some(Arc::clone(&recipes));
                recipes
            }
            Err(e) => {
                tracing::warn!("获取远程菜谱数据失败: {}", e);
                Arc::new(Vec::new())
            }
        }
    }

    /// Unique non-empty categories, sorted
    pub fn all_categories(recipes: &[Recipe]) -> Vec<String> {
        recipes
            .iter()
            .filter(|recipe| !recipe.category.is_empty())
            .map(|recipe| recipe.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Recipes whose category equals `category` exactly
    pub fn recipes_by_category<'a>(recipes: &'a [Recipe], category: &str) -> Vec<&'a Recipe> {
        recipes
            .iter()
            .filter(|recipe| recipe.category == category)
            .collect()
    }
}
