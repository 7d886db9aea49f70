use std::future::Future;
use thiserror::Error;

use crate::core::scoring::calculate_match_score;
use crate::models::{Certification, CertificationMap, ScoredToy, Toy, ToyFilter, User};

/// Hard cap on toys returned by a single listing
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Hard cap on certifications fetched for a recommendation
pub const DEFAULT_MAX_CERTIFICATIONS: usize = 100;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by catalog queries
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog query failed: {0}")]
    QueryFailed(#[source] BoxError),

    #[error("Toy not found: {0}")]
    NotFound(String),
}

impl CatalogError {
    fn query<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CatalogError::QueryFailed(Box::new(err))
    }
}

/// Toy and certification record store consumed by the catalog
///
/// Implementations apply `ToyFilter` as a query predicate and return at
/// most `limit` records, in a stable store-defined order.
pub trait CatalogStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn find_toys(
        &self,
        filter: &ToyFilter,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Toy>, Self::Error>> + Send;

    fn find_toy(&self, toy_id: &str) -> impl Future<Output = Result<Option<Toy>, Self::Error>> + Send;

    fn list_certifications(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Certification>, Self::Error>> + Send;
}

/// Build the certification id -> certification lookup
pub fn build_certification_map(certifications: Vec<Certification>) -> CertificationMap {
    certifications
        .into_iter()
        .map(|cert| (cert.id.clone(), cert))
        .collect()
}

/// Score every toy for a user and order by descending score
///
/// The sort is stable: toys with equal scores keep their input order.
pub fn rank_toys(toys: Vec<Toy>, user: &User, certifications: &CertificationMap) -> Vec<ScoredToy> {
    let mut scored: Vec<ScoredToy> = toys
        .into_iter()
        .map(|toy| {
            let (score, reason) = calculate_match_score(&toy, user, certifications);
            ScoredToy {
                toy,
                match_score: Some(score),
                match_reason: Some(reason),
            }
        })
        .collect();

    sort_by_score(&mut scored);
    scored
}

/// Stable descending sort; unevaluated toys compare as score 0
pub fn sort_by_score(toys: &mut [ScoredToy]) {
    toys.sort_by(|a, b| b.sort_score().cmp(&a.sort_score()));
}

/// Catalog query orchestrator
///
/// # Pipeline
/// 1. Fetch up to `max_results` toys matching the filter
/// 2. If a recommendation is requested for a known user, fetch the
///    certification set and build the lookup
/// 3. Score each toy and stable-sort by descending score
#[derive(Debug, Clone, Copy)]
pub struct CatalogQuery {
    max_results: usize,
    max_certifications: usize,
}

impl CatalogQuery {
    pub fn new(max_results: usize, max_certifications: usize) -> Self {
        Self {
            max_results,
            max_certifications,
        }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// List toys matching `filter`, optionally scored for `user`
    ///
    /// Scoring only happens when `recommend` is set and a user is present;
    /// otherwise toys come back in fetch order with no score or reason.
    pub async fn list_toys<S: CatalogStore>(
        &self,
        store: &S,
        filter: &ToyFilter,
        user: Option<&User>,
        recommend: bool,
    ) -> Result<Vec<ScoredToy>, CatalogError> {
        let user = match user {
            Some(user) if recommend => user,
            _ => {
                let toys = store
                    .find_toys(filter, self.max_results)
                    .await
                    .map_err(CatalogError::query)?;

                tracing::debug!("Listing {} toys without recommendation", toys.len());

                return Ok(toys.into_iter().map(ScoredToy::unscored).collect());
            }
        };

        let (toys, certifications) = tokio::try_join!(
            async {
                store
                    .find_toys(filter, self.max_results)
                    .await
                    .map_err(CatalogError::query)
            },
            async {
                store
                    .list_certifications(self.max_certifications)
                    .await
                    .map_err(CatalogError::query)
            },
        )?;

        let certifications = build_certification_map(certifications);
        let ranked = rank_toys(toys, user, &certifications);

        tracing::debug!(
            "Ranked {} toys for user {} using {} certifications",
            ranked.len(),
            user.id,
            certifications.len()
        );

        Ok(ranked)
    }

    /// Fetch a single toy by id
    pub async fn get_toy<S: CatalogStore>(&self, store: &S, toy_id: &str) -> Result<Toy, CatalogError> {
        store
            .find_toy(toy_id)
            .await
            .map_err(CatalogError::query)?
            .ok_or_else(|| CatalogError::NotFound(toy_id.to_string()))
    }
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESULTS, DEFAULT_MAX_CERTIFICATIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn create_toy(id: &str, age_range: &str) -> Toy {
        Toy {
            id: id.to_string(),
            name: format!("Toy {}", id),
            description: String::new(),
            brand: "EcoTots".to_string(),
            price: 10.0,
            currency: "USD".to_string(),
            buy_link: String::new(),
            materials: vec![],
            age_range: age_range.to_string(),
            category: "Puzzles".to_string(),
            image_url: "/placeholder.svg".to_string(),
            certification_ids: vec![],
            created_at: Utc::now(),
        }
    }

    fn create_user(child_age_range: &str) -> User {
        User {
            id: "u1".to_string(),
            email: "parent@example.com".to_string(),
            created_at: Utc::now(),
            saved_toy_ids: vec![],
            child_age_range: Some(child_age_range.to_string()),
            eco_goals: vec![],
            interests: vec![],
        }
    }

    #[test]
    fn test_rank_toys_stable() {
        let toys = vec![
            create_toy("a", "0+ years"),
            create_toy("b", "1-3 years"),
            create_toy("c", "0+ years"),
            create_toy("d", "1-3 years"),
        ];
        let user = create_user("1-3 years");

        let ranked = rank_toys(toys, &user, &CertificationMap::new());
        let ids: Vec<&str> = ranked.iter().map(|t| t.toy.id.as_str()).collect();

        assert_eq!(ids, vec!["b", "d", "a", "c"]);
        assert_eq!(ranked[2].match_score, Some(0));
        assert_eq!(ranked[2].match_reason.as_deref(), Some(""));
    }

    #[test]
    fn test_unscored_sorts_as_zero() {
        let mut toys = vec![
            ScoredToy::unscored(create_toy("a", "x")),
            ScoredToy {
                toy: create_toy("b", "x"),
                match_score: Some(20),
                match_reason: Some(String::new()),
            },
            ScoredToy {
                toy: create_toy("c", "x"),
                match_score: Some(0),
                match_reason: Some(String::new()),
            },
        ];

        sort_by_score(&mut toys);

        let ids: Vec<&str> = toys.iter().map(|t| t.toy.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(toys[1].match_score, None);
    }

    #[test]
    fn test_build_certification_map() {
        let cert = Certification {
            id: "c1".to_string(),
            slug: "fsc".to_string(),
            name: "FSC".to_string(),
            logo: String::new(),
            description: String::new(),
            meaning: String::new(),
            impact: String::new(),
        };

        let map = build_certification_map(vec![cert.clone()]);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("c1"), Some(&cert));
    }
}
