use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Toy catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toy {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub brand: String,
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub buy_link: String,
    #[serde(default)]
    pub materials: Vec<String>,
    pub age_range: String,
    pub category: String,
    #[serde(default = "default_image_url")]
    pub image_url: String,
    #[serde(default)]
    pub certification_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

pub fn default_currency() -> String { "USD".to_string() }
pub fn default_image_url() -> String { "/placeholder.svg".to_string() }

/// Eco certification scheme (immutable reference data)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    #[serde(rename = "_id")]
    pub id: String,
    pub slug: String,
    pub name: String,
    pub logo: String,
    pub description: String,
    pub meaning: String,
    pub impact: String,
}

/// Certification id -> certification, materialized once per request
pub type CertificationMap = HashMap<String, Certification>;

/// User profile as exposed to clients and consumed by scoring
///
/// Scoring only reads `child_age_range` and `eco_goals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub saved_toy_ids: Vec<String>,
    #[serde(default)]
    pub child_age_range: Option<String>,
    #[serde(default)]
    pub eco_goals: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Stored account: profile plus credentials. Never serialized to clients.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub user: User,
    pub hashed_password: String,
}

/// Toy annotated with an optional match evaluation
///
/// `None` means "not evaluated", which is distinct from a score of 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredToy {
    #[serde(flatten)]
    pub toy: Toy,
    pub match_score: Option<u8>,
    pub match_reason: Option<String>,
}

impl ScoredToy {
    pub fn unscored(toy: Toy) -> Self {
        Self {
            toy,
            match_score: None,
            match_reason: None,
        }
    }

    /// Score used for ordering; unevaluated toys compare as 0
    pub fn sort_score(&self) -> u8 {
        self.match_score.unwrap_or(0)
    }
}

/// Optional catalog filters. Every field is applied only when present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToyFilter {
    pub age_range: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Profile fields a user may change
///
/// The outer `Option` is "was the field sent", the inner one is its value,
/// so `{"child_age_range": null}` clears the age range while an absent key
/// leaves it untouched. A null list clears it to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, deserialize_with = "supplied", skip_serializing_if = "Option::is_none")]
    pub child_age_range: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied", skip_serializing_if = "Option::is_none")]
    pub eco_goals: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "supplied", skip_serializing_if = "Option::is_none")]
    pub interests: Option<Option<Vec<String>>>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.child_age_range.is_none() && self.eco_goals.is_none() && self.interests.is_none()
    }
}

/// Marks a present key as supplied, whether its value is null or not
fn supplied<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// New certification to insert (seeding)
#[derive(Debug, Clone)]
pub struct NewCertification {
    pub slug: &'static str,
    pub name: &'static str,
    pub logo: &'static str,
    pub description: &'static str,
    pub meaning: &'static str,
    pub impact: &'static str,
}

/// New toy to insert (seeding)
#[derive(Debug, Clone)]
pub struct NewToy {
    pub name: &'static str,
    pub description: &'static str,
    pub brand: &'static str,
    pub price: f64,
    pub buy_link: &'static str,
    pub materials: &'static [&'static str],
    pub age_range: &'static str,
    pub category: &'static str,
    pub image_url: &'static str,
}

impl NewCertification {
    pub fn to_certification(&self, id: String) -> Certification {
        Certification {
            id,
            slug: self.slug.to_string(),
            name: self.name.to_string(),
            logo: self.logo.to_string(),
            description: self.description.to_string(),
            meaning: self.meaning.to_string(),
            impact: self.impact.to_string(),
        }
    }
}

impl NewToy {
    pub fn to_toy(&self, id: String, certification_ids: Vec<String>) -> Toy {
        Toy {
            id,
            name: self.name.to_string(),
            description: self.description.to_string(),
            brand: self.brand.to_string(),
            price: self.price,
            currency: default_currency(),
            buy_link: self.buy_link.to_string(),
            materials: self.materials.iter().map(|m| m.to_string()).collect(),
            age_range: self.age_range.to_string(),
            category: self.category.to_string(),
            image_url: self.image_url.to_string(),
            certification_ids,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_update_absent_fields_untouched() {
        let update: ProfileUpdate = serde_json::from_str(r#"{"eco_goals": ["Toxin-Free"]}"#).unwrap();

        assert_eq!(update.child_age_range, None);
        assert_eq!(update.eco_goals, Some(Some(vec!["Toxin-Free".to_string()])));
        assert_eq!(update.interests, None);
        assert!(!update.is_empty());
    }

    #[test]
    fn test_profile_update_null_clears() {
        let update: ProfileUpdate =
            serde_json::from_str(r#"{"child_age_range": null, "interests": null}"#).unwrap();

        assert_eq!(update.child_age_range, Some(None));
        assert_eq!(update.interests, Some(None));
        assert_eq!(update.eco_goals, None);
    }

    #[test]
    fn test_profile_update_empty_body() {
        let update: ProfileUpdate = serde_json::from_str("{}").unwrap();

        assert!(update.is_empty());
    }

    #[test]
    fn test_unscored_toy_serializes_null_match_fields() {
        let toy = NewToy {
            name: "Bamboo Blocks",
            description: "",
            brand: "EcoTots",
            price: 19.5,
            buy_link: "",
            materials: &["Bamboo"],
            age_range: "1-3 years",
            category: "Building",
            image_url: "/placeholder.svg",
        }
        .to_toy("toy-1".to_string(), vec![]);

        let json = serde_json::to_value(ScoredToy::unscored(toy)).unwrap();

        assert_eq!(json["_id"], "toy-1");
        assert_eq!(json["currency"], "USD");
        assert!(json["match_score"].is_null());
        assert!(json["match_reason"].is_null());
    }
}
