//! Service health checks.

use super::performance::{OperationStats, PerformanceMonitor};
use crate::core::cache::MemoryCache;
use crate::core::catalog::RecipeRepository;
use crate::core::config::Config;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSourceHealth {
    pub status: HealthStatus,
    pub recipe_count: usize,
    /// Seconds
    pub response_time: f64,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheHealth {
    pub status: HealthStatus,
    pub enabled: bool,
    pub total_items: usize,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub total_requests: usize,
    pub avg_success_rate: f64,
    pub monitored_functions: Vec<String>,
    pub detailed_stats: BTreeMap<String, OperationStats>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfiguration {
    pub cache_enabled: bool,
    pub max_concurrent_requests: usize,
    pub request_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub server_name: String,
    pub server_version: String,
    pub uptime_seconds: f64,
    pub uptime_formatted: String,
    pub configuration: SystemConfiguration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// Unix seconds
    pub timestamp: f64,
    pub overall_status: HealthStatus,
    pub system_info: SystemInfo,
    pub data_source: DataSourceHealth,
    pub cache_system: CacheHealth,
    pub performance: PerformanceSummary,
}

const PROBE_KEY: &str = "health_check_test";

pub struct HealthChecker {
    started: Instant,
    config: Arc<Config>,
    repository: Arc<RecipeRepository>,
    cache: Arc<MemoryCache>,
    monitor: Arc<PerformanceMonitor>,
}

impl HealthChecker {
    pub fn new(
        config: Arc<Config>,
        repository: Arc<RecipeRepository>,
        cache: Arc<MemoryCache>,
        monitor: Arc<PerformanceMonitor>,
    ) -> Self {
        Self {
            started: Instant::now(),
            config,
            repository,
            cache,
            monitor,
        }
    }

    pub async fn check_data_source(&self) -> DataSourceHealth {
        let started = Instant::now();
        let recipes = self.repository.fetch_all_recipes().await;
        let response_time = started.elapsed().as_secs_f64();

        DataSourceHealth {
            status: if recipes.is_empty() {
                HealthStatus::Unhealthy
            } else {
                HealthStatus::Healthy
            },
            recipe_count: recipes.len(),
            response_time,
            error: recipes
                .is_empty()
                .then(|| "未能获取菜谱数据".to_string()),
        }
    }

    /// Write, read back and delete a probe entry
    pub async fn check_cache_system(&self) -> CacheHealth {
        let probe = format!("test_{}", chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default());

        let round_trip = match self
            .cache
            .set(PROBE_KEY, &probe, Some(Duration::from_secs(60)))
            .await
        {
            Ok(()) => {
                let read: Option<String> = self.cache.get(PROBE_KEY).await;
                self.cache.delete(PROBE_KEY).await;
                Ok(read)
            }
            Err(e) => Err(e.to_string()),
        };

        let stats = self.cache.stats().await;
        match round_trip {
            Ok(read) => CacheHealth {
                status: if read.as_deref() == Some(probe.as_str()) {
                    HealthStatus::Healthy
                } else {
                    HealthStatus::Unhealthy
                },
                enabled: stats.enabled,
                total_items: stats.total_items.unwrap_or(0),
                error: None,
            },
            Err(e) => CacheHealth {
                status: HealthStatus::Unhealthy,
                enabled: false,
                total_items: 0,
                error: Some(e),
            },
        }
    }

    pub async fn performance_summary(&self) -> PerformanceSummary {
        let stats = self.monitor.all_stats().await;

        let total_requests = stats.values().map(|s| s.count).sum();
        let avg_success_rate = if stats.is_empty() {
            0.0
        } else {
            stats.values().map(|s| s.success_rate).sum::<f64>() / stats.len() as f64
        };

        PerformanceSummary {
            total_requests,
            avg_success_rate,
            monitored_functions: stats.keys().cloned().collect(),
            detailed_stats: stats,
        }
    }

    pub async fn system_info(&self) -> SystemInfo {
        let uptime = self.started.elapsed();

        SystemInfo {
            server_name: self.config.server.name.clone(),
            server_version: self.config.server.version.clone(),
            uptime_seconds: uptime.as_secs_f64(),
            uptime_formatted: format_uptime(uptime),
            configuration: SystemConfiguration {
                cache_enabled: self.config.cache.enabled,
                max_concurrent_requests: self.config.performance.max_concurrent_requests,
                request_timeout: self.config.performance.request_timeout_secs,
            },
        }
    }

    /// Run every check concurrently and derive the overall status
    pub async fn full_health_check(&self) -> HealthReport {
        let (data_source, cache_system, performance, system_info) = tokio::join!(
            self.check_data_source(),
            self.check_cache_system(),
            self.performance_summary(),
            self.system_info(),
        );

        let overall_status = if data_source.status != HealthStatus::Healthy
            || cache_system.status != HealthStatus::Healthy
        {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        };

        HealthReport {
            timestamp: chrono::Utc::now().timestamp_millis() as f64 / 1000.0,
            overall_status,
            system_info,
            data_source,
            cache_system,
            performance,
        }
    }
}

/// "{h}小时 {m}分钟 {s}秒"
pub fn format_uptime(uptime: Duration) -> String {
    let total = uptime.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours}小时 {minutes}分钟 {seconds}秒")
}
