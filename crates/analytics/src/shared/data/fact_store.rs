use chrono::{DateTime, Utc};
use contracts::domain::a001_market_fact::MarketFact;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use uuid::Uuid;

use super::generator::FactGenerator;

/// One generation of the fact table
#[derive(Debug, Clone)]
pub struct FactSnapshot {
    /// New for every generation; callers may memoize derived views on it
    pub generation: Uuid,
    pub generated_at: DateTime<Utc>,
    pub facts: Vec<MarketFact>,
}

/// Process-scoped fact cache (in-memory).
///
/// Generates on first access and keeps the snapshot until `invalidate`.
#[derive(Clone)]
pub struct FactStore {
    generator: Arc<dyn FactGenerator>,
    cache: Arc<RwLock<Option<Arc<FactSnapshot>>>>,
}

impl FactStore {
    pub fn new(generator: impl FactGenerator + 'static) -> Self {
        Self {
            generator: Arc::new(generator),
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Cached snapshot, generated on first access.
    ///
    /// A failing generator yields an empty snapshot instead of an error.
    pub fn facts(&self) -> Arc<FactSnapshot> {
        if let Some(snapshot) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Arc::clone(snapshot);
        }

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(snapshot) = cache.as_ref() {
            return Arc::clone(snapshot);
        }

        let started = std::time::Instant::now();
        let facts = match self.generator.generate() {
            Ok(facts) => facts,
            Err(e) => {
                tracing::warn!("fact generation failed, using empty dataset: {e}");
                Vec::new()
            }
        };
        let snapshot = Arc::new(FactSnapshot {
            generation: Uuid::new_v4(),
            generated_at: Utc::now(),
            facts,
        });
        tracing::info!(
            "Generated {} facts in {} ms (generation {})",
            snapshot.facts.len(),
            started.elapsed().as_millis(),
            snapshot.generation
        );

        *cache = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// First load as seen by the dashboard: wait `delay`, then read the cache.
    ///
    /// The delay only applies while nothing is cached.
    pub async fn load(&self, delay: Duration) -> Arc<FactSnapshot> {
        if !delay.is_zero() && !self.is_loaded() {
            tokio::time::sleep(delay).await;
        }
        self.facts()
    }

    /// Drop the cached snapshot; the next access regenerates
    pub fn invalidate(&self) {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        if cache.take().is_some() {
            tracing::debug!("fact cache invalidated");
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
