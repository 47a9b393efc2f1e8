//! In-memory caching using moka
//!
//! Holds recent pricing calculations so staff can review them. Nothing here
//! survives a restart; entries expire by TTL or are evicted at capacity.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use crate::pricing::models::CalculationRecord;

/// Application cache holding calculation history
#[derive(Clone)]
pub struct AppCache {
    /// Calculations (id -> record)
    pub calculations: Cache<Uuid, Arc<CalculationRecord>>,
}

impl AppCache {
    /// Create a new cache instance with the given capacity and TTL
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        Self {
            calculations: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Store a finished calculation
    pub async fn record_calculation(&self, record: Arc<CalculationRecord>) {
        debug!("Caching calculation {}", record.id);
        self.calculations.insert(record.id, record).await;
    }

    /// Recent calculations, newest first, optionally for one caller only
    pub fn recent_calculations(
        &self,
        calculated_by: Option<&str>,
        limit: usize,
    ) -> Vec<Arc<CalculationRecord>> {
        let mut records: Vec<Arc<CalculationRecord>> = self
            .calculations
            .iter()
            .map(|(_, record)| record)
            .filter(|record| calculated_by.map_or(true, |who| record.calculated_by == who))
            .collect();

        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records.truncate(limit);
        records
    }

    /// Get cache statistics for monitoring.
    ///
    /// Pending maintenance is flushed first so the count includes inserts
    /// made just before the call.
    pub async fn stats(&self) -> CacheStats {
        self.calculations.run_pending_tasks().await;
        CacheStats {
            entries: self.calculations.entry_count(),
        }
    }
}

/// Cache statistics for the health endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub entries: u64,
}
