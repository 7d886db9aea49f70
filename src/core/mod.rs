// Core algorithm exports
pub mod catalog;
pub mod filters;
pub mod scoring;

pub use catalog::{
    build_certification_map, rank_toys, sort_by_score, CatalogError, CatalogQuery, CatalogStore,
};
pub use filters::{matches_filter, matches_price};
pub use scoring::{calculate_match_score, goals_for_slug, GOAL_MAPPINGS};
