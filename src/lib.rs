//! Eco Toy Guide - toy catalog and preference matching service
//!
//! This library provides the catalog query pipeline and the match scoring
//! rules that rank eco-certified toys against a parent's stated preferences.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, CatalogError, CatalogQuery, CatalogStore};
pub use models::{Certification, CertificationMap, ScoredToy, Toy, ToyFilter, User};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let query = CatalogQuery::default();
        assert_eq!(query.max_results(), 100);
        assert!(ToyFilter::default().is_empty());
    }
}
