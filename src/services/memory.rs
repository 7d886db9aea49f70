use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::core::{matches_filter, CatalogStore};
use crate::models::{Certification, NewCertification, NewToy, Toy, ToyFilter};
use crate::services::DatabaseError;

/// In-memory catalog store
///
/// Returns toys in insertion order. Used by tests, benchmarks and local
/// experimentation without a database.
#[derive(Debug, Default)]
pub struct MemoryStore {
    toys: RwLock<Vec<Toy>>,
    certifications: RwLock<Vec<Certification>>,
    unavailable: bool,
    certification_fetches: AtomicUsize,
}

impl MemoryStore {
    pub fn new(toys: Vec<Toy>, certifications: Vec<Certification>) -> Self {
        Self {
            toys: RwLock::new(toys),
            certifications: RwLock::new(certifications),
            ..Default::default()
        }
    }

    /// A store whose every fetch fails
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    /// Number of certification fetches served so far
    pub fn certification_fetches(&self) -> usize {
        self.certification_fetches.load(Ordering::Relaxed)
    }

    /// Replace the certification set, keeping the id of every known slug
    pub async fn replace_certifications(&self, certifications: &[NewCertification]) -> Vec<Certification> {
        let mut current = self.certifications.write().await;

        let stored: Vec<Certification> = certifications
            .iter()
            .map(|cert| {
                let id = current
                    .iter()
                    .find(|existing| existing.slug == cert.slug)
                    .map(|existing| existing.id.clone())
                    .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
                cert.to_certification(id)
            })
            .collect();

        *current = stored.clone();
        stored
    }

    /// Replace the toy set; every toy gets a fresh id
    pub async fn replace_toys(&self, toys: &[(NewToy, Vec<String>)]) -> usize {
        let fresh: Vec<Toy> = toys
            .iter()
            .map(|(toy, certification_ids)| {
                toy.to_toy(uuid::Uuid::new_v4().to_string(), certification_ids.clone())
            })
            .collect();

        let count = fresh.len();
        *self.toys.write().await = fresh;
        count
    }

    fn check_available(&self) -> Result<(), DatabaseError> {
        if self.unavailable {
            return Err(DatabaseError::Unavailable("memory store offline".to_string()));
        }
        Ok(())
    }
}

impl CatalogStore for MemoryStore {
    type Error = DatabaseError;

    async fn find_toys(&self, filter: &ToyFilter, limit: usize) -> Result<Vec<Toy>, DatabaseError> {
        self.check_available()?;

        Ok(self
            .toys
            .read()
            .await
            .iter()
            .filter(|toy| matches_filter(toy, filter))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_toy(&self, toy_id: &str) -> Result<Option<Toy>, DatabaseError> {
        self.check_available()?;

        Ok(self.toys.read().await.iter().find(|toy| toy.id == toy_id).cloned())
    }

    async fn list_certifications(&self, limit: usize) -> Result<Vec<Certification>, DatabaseError> {
        self.check_available()?;
        self.certification_fetches.fetch_add(1, Ordering::Relaxed);

        Ok(self.certifications.read().await.iter().take(limit).cloned().collect())
    }
}
