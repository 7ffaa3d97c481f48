//! Per-operation timing and success tracking.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::Display;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Errors kept in `recent_errors` are taken from this many newest samples
const RECENT_WINDOW: usize = 10;

#[derive(Debug, Clone)]
struct Sample {
    duration: Duration,
    success: bool,
    error: Option<String>,
}

/// Aggregated statistics for one operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationStats {
    pub name: String,
    pub count: usize,
    /// Percentage, 0-100
    pub success_rate: f64,
    pub avg_duration: f64,
    pub min_duration: f64,
    pub max_duration: f64,
    pub recent_errors: Vec<String>,
}

impl OperationStats {
    fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            count: 0,
            success_rate: 0.0,
            avg_duration: 0.0,
            min_duration: 0.0,
            max_duration: 0.0,
            recent_errors: Vec::new(),
        }
    }

    fn from_samples(name: &str, samples: &VecDeque<Sample>) -> Self {
        if samples.is_empty() {
            return Self::empty(name);
        }

        let count = samples.len();
        let secs: Vec<f64> = samples.iter().map(|s| s.duration.as_secs_f64()).collect();
        let successes = samples.iter().filter(|s| s.success).count();

        Self {
            name: name.to_string(),
            count,
            success_rate: successes as f64 / count as f64 * 100.0,
            avg_duration: secs.iter().sum::<f64>() / count as f64,
            min_duration: secs.iter().copied().fold(f64::INFINITY, f64::min),
            max_duration: secs.iter().copied().fold(0.0, f64::max),
            recent_errors: samples
                .iter()
                .skip(count.saturating_sub(RECENT_WINDOW))
                .filter(|s| !s.success)
                .filter_map(|s| s.error.clone())
                .collect(),
        }
    }
}

/// Bounded history of operation timings
pub struct PerformanceMonitor {
    max_history: usize,
    metrics: Mutex<HashMap<String, VecDeque<Sample>>>,
}

impl PerformanceMonitor {
    pub fn new(max_history: usize) -> Self {
        Self {
            max_history: max_history.max(1),
            metrics: Mutex::new(HashMap::new()),
        }
    }

    pub async fn record(
        &self,
        name: &str,
        duration: Duration,
        success: bool,
        error: Option<String>,
    ) {
        let mut metrics = self.metrics.lock().await;
        let history = metrics.entry(name.to_string()).or_default();
        if history.len() == self.max_history {
            history.pop_front();
        }
        history.push_back(Sample {
            duration,
            success,
            error,
        });
    }

    /// Time `operation` and record its outcome under `name`
    pub async fn track<T, E, F>(&self, name: &str, operation: F) -> Result<T, E>
    where
        E: Display,
        F: Future<Output = Result<T, E>>,
    {
        let started = Instant::now();
        let result = operation.await;
        let elapsed = started.elapsed();

        match &result {
            Ok(_) => self.record(name, elapsed, true, None).await,
            Err(e) => {
                tracing::debug!("Operation '{}' failed after {:?}: {}", name, elapsed, e);
                self.record(name, elapsed, false, Some(e.to_string())).await
            }
        }
        result
    }

    pub async fn stats(&self, name: &str) -> OperationStats {
        let metrics = self.metrics.lock().await;
        metrics
            .get(name)
            .map(|samples| OperationStats::from_samples(name, samples))
            .unwrap_or_else(|| OperationStats::empty(name))
    }

    /// Stats for every operation seen so far, keyed by name
    pub async fn all_stats(&self) -> BTreeMap<String, OperationStats> {
        let metrics = self.metrics.lock().await;
        metrics
            .iter()
            .map(|(name, samples)| (name.clone(), OperationStats::from_samples(name, samples)))
            .collect()
    }

    /// Drop history for one operation, or for all when `name` is `None`
    pub async fn clear(&self, name: Option<&str>) {
        let mut metrics = self.metrics.lock().await;
        match name {
            Some(name) => {
                metrics.remove(name);
            }
            None => metrics.clear(),
        }
    }
}
