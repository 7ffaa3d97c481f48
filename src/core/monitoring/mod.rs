//! Runtime monitoring: operation timings and health checks.

mod health;
mod performance;

pub use health::{
    format_uptime, CacheHealth, DataSourceHealth, HealthChecker, HealthReport, HealthStatus,
    PerformanceSummary, SystemInfo,
};
pub use performance::{OperationStats, PerformanceMonitor};
