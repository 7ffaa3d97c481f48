//! Recipe sources: where the raw catalog comes from.

use crate::core::config::Config;
use crate::core::error::{RecipeError, Result};
use crate::core::types::Recipe;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

/// Anything able to produce the full recipe list
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn fetch_recipes(&self) -> Result<Vec<Recipe>>;

    /// Short label for logs and health output
    fn describe(&self) -> String;
}

/// Fetches the catalog with a single GET against a JSON endpoint
pub struct HttpRecipeSource {
    client: reqwest::Client,
    url: String,
}

impl HttpRecipeSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.data_source.recipes_url.clone(),
            Duration::from_secs(config.performance.request_timeout_secs),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    async fn fetch_recipes(&self) -> Result<Vec<Recipe>> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(RecipeError::CatalogFetch(format!(
                "HTTP 请求失败! 状态码: {}",
                status.as_u16()
            )));
        }

        let body = response.bytes().await?;
        let recipes: Vec<Recipe> = serde_json::from_slice(&body)?;
        Ok(recipes)
    }

    fn describe(&self) -> String {
        format!("http:{}", self.url)
    }
}

/// Serves a fixed, in-memory recipe list
#[derive(Debug, Clone, Default)]
pub struct StaticRecipeSource {
    recipes: Vec<Recipe>,
}

impl StaticRecipeSource {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }
}

#[async_trait]
impl RecipeSource for StaticRecipeSource {
    async fn fetch_recipes(&self) -> Result<Vec<Recipe>> {
        Ok(self.recipes.clone())
    }

    fn describe(&self) -> String {
        format!("static:{} recipes", self.recipes.len())
    }
}
