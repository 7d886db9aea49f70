use moka::future::{Cache, CacheBuilder};
use std::sync::Arc;
use std::time::Duration;

use crate::core::CatalogStore;
use crate::models::{Certification, Toy, ToyFilter};

/// Catalog store with an in-process certification cache
///
/// Certifications are reference data whose ids survive reseeding, so
/// they are served from memory for `ttl_secs`. Toy queries always go to
/// the wrapped store.
pub struct CachedStore<S> {
    inner: Arc<S>,
    certifications: Cache<usize, Arc<Vec<Certification>>>,
}

impl<S: CatalogStore> CachedStore<S> {
    pub fn new(inner: Arc<S>, capacity: u64, ttl_secs: u64) -> Self {
        let certifications = CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            inner,
            certifications,
        }
    }

    /// Drop every cached certification list
    pub fn invalidate(&self) {
        self.certifications.invalidate_all();
    }
}

impl<S: CatalogStore> CatalogStore for CachedStore<S> {
    type Error = S::Error;

    async fn find_toys(&self, filter: &ToyFilter, limit: usize) -> Result<Vec<Toy>, S::Error> {
        self.inner.find_toys(filter, limit).await
    }

    async fn find_toy(&self, toy_id: &str) -> Result<Option<Toy>, S::Error> {
        self.inner.find_toy(toy_id).await
    }

    async fn list_certifications(&self, limit: usize) -> Result<Vec<Certification>, S::Error> {
        if let Some(cached) = self.certifications.get(&limit).await {
            tracing::trace!("Certification cache hit (limit {})", limit);
            return Ok(cached.as_ref().clone());
        }

        let fetched = self.inner.list_certifications(limit).await?;
        self.certifications
            .insert(limit, Arc::new(fetched.clone()))
            .await;

        tracing::trace!("Certification cache set ({} entries)", fetched.len());
        Ok(fetched)
    }
}
