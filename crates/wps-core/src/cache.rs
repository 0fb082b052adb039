// ============================================================================
// WPS Core - Query Cache
// File: crates/wps-core/src/cache.rs
// ============================================================================
//! Application-level query cache keyed by entity collection.
//!
//! Reads go through [`QueryCache::get_or_fetch`]. Mutations call
//! [`QueryCache::invalidate`] after the backend confirms the write, so the
//! next read refetches. A failed mutation leaves the cache as it was.
//!
//! Each key carries a generation bumped by every invalidation. A fetch that
//! was in flight across an invalidation returns its value but does not
//! store it.

use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;
use wps_shared::EntityId;

use crate::domain::Industry;
use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    CompanyProfile,
    WorkspaceAttributes,
    CompanyGoals,
    IndustryWeightings(Industry),
    LinesOfBusiness,
    Spaces,
    Scenarios,
    Scenario(EntityId),
}

impl QueryKey {
    /// Name of the collection the key belongs to.
    pub fn collection(&self) -> &'static str {
        match self {
            QueryKey::CompanyProfile => "companyProfile",
            QueryKey::WorkspaceAttributes => "workspaceAttributes",
            QueryKey::CompanyGoals => "companyGoals",
            QueryKey::IndustryWeightings(_) => "industryWeightings",
            QueryKey::LinesOfBusiness => "lobs",
            QueryKey::Spaces => "spaces",
            QueryKey::Scenarios => "scenarios",
            QueryKey::Scenario(_) => "scenario",
        }
    }
}

type CachedValue = Arc<dyn Any + Send + Sync>;

/// Thread-safe cache of query results.
#[derive(Default)]
pub struct QueryCache {
    entries: DashMap<QueryKey, CachedValue>,
    generations: DashMap<QueryKey, u64>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `key`, if present and of type `T`.
    pub fn get<T>(&self, key: &QueryKey) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        self.entries
            .get(key)
            .and_then(|entry| entry.value().downcast_ref::<T>().cloned())
    }

    pub fn insert<T>(&self, key: QueryKey, value: T)
    where
        T: Send + Sync + 'static,
    {
        self.entries.insert(key, Arc::new(value));
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Drops the cached result for `key`. Returns whether anything was cached.
    pub fn invalidate(&self, key: &QueryKey) -> bool {
        *self.generations.entry(*key).or_insert(0) += 1;
        let removed = self.entries.remove(key).is_some();
        debug!(collection = key.collection(), removed, "Invalidated query");
        removed
    }

    /// Drops every key matching `predicate`. Returns the number removed.
    pub fn invalidate_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&QueryKey) -> bool,
    {
        for mut generation in self.generations.iter_mut() {
            if predicate(generation.key()) {
                *generation += 1;
            }
        }
        let before = self.entries.len();
        self.entries.retain(|key, _| !predicate(key));
        before.saturating_sub(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the cached value or runs `fetch`, caching its result on
    /// success. Errors are not cached.
    pub async fn get_or_fetch<T, F, Fut>(&self, key: QueryKey, fetch: F) -> Result<T, DomainError>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, DomainError>>,
    {
        if let Some(value) = self.get::<T>(&key) {
            debug!(collection = key.collection(), "Query cache hit");
            return Ok(value);
        }

        let started = *self.generations.entry(key).or_insert(0);
        let value = fetch().await?;

        // The generation guard is held until the insert lands, so an
        // invalidation either sees the new entry or bumps the generation first.
        match self.generations.get(&key) {
            Some(current) if *current == started => self.insert(key, value.clone()),
            _ => debug!(collection = key.collection(), "Discarded fetch raced by invalidation"),
        }
        Ok(value)
    }
}
