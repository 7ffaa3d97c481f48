//! Configuration management for the HowToCook recipe service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{RecipeError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerInfo,
    #[serde(default)]
    pub data_source: DataSourceConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub performance: PerformanceConfig,
    #[serde(default)]
    pub recommendation: RecommendationConfig,
    #[serde(default)]
    pub meal_plan: MealPlanConfig,
}

/// Service identity reported by health checks
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerInfo {
    #[serde(default = "default_server_name")]
    pub name: String,

    #[serde(default = "default_server_version")]
    pub version: String,

    #[serde(default = "default_server_description")]
    pub description: String,
}

/// Remote catalog location
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataSourceConfig {
    /// JSON endpoint returning the full recipe array
    #[serde(default = "default_recipes_url")]
    pub recipes_url: String,
}

/// Cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Default entry lifetime in seconds
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,

    /// Lifetime of the memoized catalog snapshot
    #[serde(default = "default_cache_ttl")]
    pub catalog_ttl_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter directive when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub json: bool,
}

/// Performance limits and monitoring history
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PerformanceConfig {
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,

    /// Outbound HTTP timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Samples kept per monitored operation
    #[serde(default = "default_max_history")]
    pub max_history: usize,
}

/// Recommendation algorithm tuning
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendationConfig {
    #[serde(default = "default_min_people")]
    pub min_people: u32,

    #[serde(default = "default_max_people")]
    pub max_people: u32,

    #[serde(default = "default_meat_types_priority")]
    pub meat_types_priority: Vec<String>,

    #[serde(default = "default_categories")]
    pub default_categories: Vec<String>,

    /// Above this many diners an aquatic dish is added
    #[serde(default = "default_fish_threshold")]
    pub fish_threshold_people: u32,

    #[serde(default = "default_max_seasonal_results")]
    pub max_seasonal_results: usize,
}

/// Weekly meal plan shape
///
/// Only `weekdays` drives planning. The weekend and per-meal ratio
/// fields are reported by [`Config::log_config`] and reserved, like
/// `MealPlan::weekend`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MealPlanConfig {
    #[serde(default = "default_weekdays")]
    pub weekdays: usize,

    /// Reserved; weekend days are not planned
    #[serde(default = "default_weekend_days")]
    pub weekend_days: usize,

    #[serde(default = "default_breakfast_ratio")]
    pub breakfast_ratio: f64,

    #[serde(default = "default_meal_ratio")]
    pub lunch_ratio: f64,

    #[serde(default = "default_meal_ratio")]
    pub dinner_ratio: f64,
}

// Default value functions
fn default_server_name() -> String {
    "howtocook-mcp".to_string()
}

fn default_server_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_server_description() -> String {
    "菜谱助手 MCP 服务 - 提供菜谱查询、推荐和膳食计划功能".to_string()
}

fn default_recipes_url() -> String {
    "https://mp-bc8d1f0a-3356-4a4e-8592-f73a3371baa2.cdn.bspapp.com/all_recipes.json".to_string()
}

fn default_true() -> bool {
    true
}

fn default_cache_ttl() -> u64 {
    3600
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_concurrent_requests() -> usize {
    10
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_history() -> usize {
    1000
}

fn default_min_people() -> u32 {
    1
}

fn default_max_people() -> u32 {
    10
}

fn default_meat_types_priority() -> Vec<String> {
    ["猪肉", "鸡肉", "牛肉", "羊肉", "鸭肉", "鱼肉"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_categories() -> Vec<String> {
    ["水产", "早餐", "荤菜", "主食", "素菜", "甜品", "汤羹"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_fish_threshold() -> u32 {
    8
}

fn default_max_seasonal_results() -> usize {
    20
}

fn default_weekdays() -> usize {
    5
}

fn default_weekend_days() -> usize {
    2
}

fn default_breakfast_ratio() -> f64 {
    0.2
}

fn default_meal_ratio() -> f64 {
    0.4
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            version: default_server_version(),
            description: default_server_description(),
        }
    }
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            recipes_url: default_recipes_url(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            ttl_secs: default_cache_ttl(),
            catalog_ttl_secs: default_cache_ttl(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            max_concurrent_requests: default_max_concurrent_requests(),
            request_timeout_secs: default_request_timeout(),
            max_history: default_max_history(),
        }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            min_people: default_min_people(),
            max_people: default_max_people(),
            meat_types_priority: default_meat_types_priority(),
            default_categories: default_categories(),
            fish_threshold_people: default_fish_threshold(),
            max_seasonal_results: default_max_seasonal_results(),
        }
    }
}

impl Default for MealPlanConfig {
    fn default() -> Self {
        Self {
            weekdays: default_weekdays(),
            weekend_days: default_weekend_days(),
            breakfast_ratio: default_breakfast_ratio(),
            lunch_ratio: default_meal_ratio(),
            dinner_ratio: default_meal_ratio(),
        }
    }
}

/// Parse a boolean env value ("true", "1", "yes", "on" and their negatives)
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| RecipeError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Default location of the user config file
    ///
    /// `$XDG_CONFIG_HOME/howtocook/config.toml`, falling back to
    /// the platform config directory.
    pub fn default_config_file() -> PathBuf {
        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("howtocook").join("config.toml");
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("howtocook")
            .join("config.toml")
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File lookup order:
    /// 1. HOWTOCOOK_CONFIG env var
    /// 2. XDG config file (~/.config/howtocook/config.toml)
    /// 3. ./howtocook.toml
    /// 4. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("HOWTOCOOK_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = Self::default_config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("howtocook.toml").exists() {
                Self::from_file("howtocook.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(url) = env::var("HOWTOCOOK_RECIPES_URL") {
            self.data_source.recipes_url = url;
        }

        // Cache configuration
        if let Ok(enabled) = env::var("HOWTOCOOK_CACHE_ENABLED") {
            if let Some(e) = parse_bool(&enabled) {
                self.cache.enabled = e;
            }
        }
        if let Ok(ttl) = env::var("HOWTOCOOK_CACHE_TTL") {
            if let Ok(t) = ttl.parse() {
                self.cache.ttl_secs = t;
                self.cache.catalog_ttl_secs = t;
            }
        }

        // Logging configuration
        if let Ok(level) = env::var("HOWTOCOOK_LOG_LEVEL") {
            self.logging.level = level.to_lowercase();
        }
        if let Ok(json) = env::var("HOWTOCOOK_LOG_JSON") {
            if let Some(j) = parse_bool(&json) {
                self.logging.json = j;
            }
        }

        // Performance configuration
        if let Ok(max_concurrent) = env::var("HOWTOCOOK_MAX_CONCURRENT_REQUESTS") {
            if let Ok(max) = max_concurrent.parse() {
                self.performance.max_concurrent_requests = max;
            }
        }
        if let Ok(timeout) = env::var("HOWTOCOOK_REQUEST_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.performance.request_timeout_secs = t;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.data_source.recipes_url.trim().is_empty() {
            return Err(RecipeError::ConfigError(
                "Recipes URL must not be empty".to_string(),
            ));
        }

        if self.cache.ttl_secs == 0 || self.cache.catalog_ttl_secs == 0 {
            return Err(RecipeError::ConfigError(
                "Cache TTL must be non-zero".to_string(),
            ));
        }

        if self.performance.request_timeout_secs == 0 {
            return Err(RecipeError::ConfigError(
                "Request timeout must be non-zero".to_string(),
            ));
        }

        if self.recommendation.min_people == 0 {
            return Err(RecipeError::ConfigError(
                "Minimum people count must be non-zero".to_string(),
            ));
        }

        if self.recommendation.min_people > self.recommendation.max_people {
            return Err(RecipeError::ConfigError(
                "Minimum people count cannot exceed maximum".to_string(),
            ));
        }

        if self.meal_plan.weekdays == 0 || self.meal_plan.weekdays > 5 {
            return Err(RecipeError::ConfigError(
                "Weekdays must be between 1 and 5".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Server: {} v{}", self.server.name, self.server.version);
        tracing::info!("  Recipes URL: {}", self.data_source.recipes_url);
        tracing::info!(
            "  Cache: enabled={}, ttl={}s, catalog ttl={}s",
            self.cache.enabled,
            self.cache.ttl_secs,
            self.cache.catalog_ttl_secs
        );
        tracing::info!("  Log level: {}", self.logging.level);
        tracing::info!(
            "  Max concurrent requests: {}",
            self.performance.max_concurrent_requests
        );
        tracing::info!("  Request timeout: {}s", self.performance.request_timeout_secs);
        tracing::info!(
            "  People range: {}-{}",
            self.recommendation.min_people,
            self.recommendation.max_people
        );
        tracing::info!(
            "  Meal plan: weekdays={}, weekend days={} (reserved), ratios={}/{}/{}",
            self.meal_plan.weekdays,
            self.meal_plan.weekend_days,
            self.meal_plan.breakfast_ratio,
            self.meal_plan.lunch_ratio,
            self.meal_plan.dinner_ratio
        );
    }
}
