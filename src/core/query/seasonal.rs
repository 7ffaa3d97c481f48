//! Seasons and their produce.

use crate::core::error::{RecipeError, Result};
use chrono::Datelike;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Meteorological season of a month (1-12)
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Autumn,
            _ => Self::Winter,
        }
    }

    /// Season of the local calendar date
    pub fn current() -> Self {
        Self::from_month(chrono::Local::now().month())
    }

    /// Accepts `current`, English names and Chinese names
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_lowercase().as_str() {
            "" | "current" | "当前" | "现在" => Ok(Self::current()),
            "spring" | "春" | "春季" | "春天" => Ok(Self::Spring),
            "summer" | "夏" | "夏季" | "夏天" => Ok(Self::Summer),
            "autumn" | "fall" | "秋" | "秋季" | "秋天" => Ok(Self::Autumn),
            "winter" | "冬" | "冬季" | "冬天" => Ok(Self::Winter),
            _ => Err(RecipeError::InvalidSeason(input.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Spring => "春季",
            Self::Summer => "夏季",
            Self::Autumn => "秋季",
            Self::Winter => "冬季",
        }
    }

    pub fn ingredients(self) -> &'static [&'static str] {
        match self {
            Self::Spring => &[
                "春笋", "韭菜", "菠菜", "荠菜", "豌豆", "香椿", "莴笋", "蚕豆", "芦笋",
            ],
            Self::Summer => &[
                "黄瓜", "西红柿", "番茄", "茄子", "苦瓜", "冬瓜", "丝瓜", "豆角", "西瓜", "毛豆",
            ],
            Self::Autumn => &[
                "南瓜", "莲藕", "山药", "芋头", "板栗", "螃蟹", "红薯", "秋葵", "梨",
            ],
            Self::Winter => &[
                "白菜", "萝卜", "羊肉", "牛肉", "土豆", "大葱", "菜花", "胡萝卜",
            ],
        }
    }
}
