//! Error types and error handling for the HowToCook recipe service.
//!
//! This module defines the error types used throughout the
//! application. The `Display` text of each variant is the message
//! handed back to callers in place of a JSON payload, so the
//! user-facing variants carry the service's Chinese wording.

use thiserror::Error;

/// Result type alias for recipe operations
pub type Result<T> = std::result::Result<T, RecipeError>;

/// Main error type for the recipe service
#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("未能获取菜谱数据")]
    CatalogUnavailable,

    #[error("获取远程菜谱数据失败: {0}")]
    CatalogFetch(String),

    #[error("未找到分类为 '{0}' 的菜谱")]
    CategoryEmpty(String),

    #[error("未找到名为 '{0}' 的菜谱")]
    RecipeNotFound(String),

    #[error("用餐人数必须在{min}-{max}之间")]
    InvalidPeopleCount { min: u32, max: u32 },

    #[error("难度等级必须在1-5之间 (收到 {0})")]
    InvalidDifficulty(u8),

    #[error("烹饪时间必须大于0分钟")]
    InvalidTime,

    #[error("无法识别的季节: '{0}'")]
    InvalidSeason(String),

    #[error("暂未找到 '{0}' 的替代食材")]
    NoSubstitutes(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RecipeError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RecipeError::CategoryEmpty(_)
                | RecipeError::RecipeNotFound(_)
                | RecipeError::NoSubstitutes(_)
        )
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            RecipeError::InvalidPeopleCount { .. }
                | RecipeError::InvalidDifficulty(_)
                | RecipeError::InvalidTime
                | RecipeError::InvalidSeason(_)
                | RecipeError::ConfigError(_)
        )
    }
}
