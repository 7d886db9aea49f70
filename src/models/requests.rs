use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};
use crate::models::domain::ToyFilter;

/// Query string for the toy listing endpoint
///
/// GET /api/v1/toys?age_range=..&category=..&min_price=..&max_price=..&recommend=true
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToyListQuery {
    pub age_range: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    #[serde(default)]
    pub recommend: bool,
}

impl ToyListQuery {
    /// Empty strings are treated as "no filter"
    pub fn filter(&self) -> ToyFilter {
        ToyFilter {
            age_range: self.age_range.clone().filter(|v| !v.is_empty()),
            category: self.category.clone().filter(|v| !v.is_empty()),
            min_price: self.min_price,
            max_price: self.max_price,
        }
    }
}

impl Validate for ToyListQuery {
    /// Price bounds must be finite; `NaN` or `inf` would compare
    /// differently in memory and in SQL.
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for (field, value) in [("min_price", self.min_price), ("max_price", self.max_price)] {
            if value.is_some_and(|price| !price.is_finite()) {
                let mut error = ValidationError::new("finite");
                error.message = Some("must be a finite number".into());
                errors.add(field, error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Request to create an account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
}

/// Request to exchange credentials for a bearer token
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_strings_are_not_filters() {
        let query = ToyListQuery {
            age_range: Some(String::new()),
            category: Some("Puzzles".to_string()),
            min_price: Some(5.0),
            ..Default::default()
        };

        let filter = query.filter();

        assert_eq!(filter.age_range, None);
        assert_eq!(filter.category.as_deref(), Some("Puzzles"));
        assert_eq!(filter.min_price, Some(5.0));
        assert_eq!(filter.max_price, None);
    }

    #[test]
    fn test_default_query_is_unfiltered() {
        let query = ToyListQuery::default();

        assert!(query.filter().is_empty());
        assert!(!query.recommend);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_non_finite_prices_rejected() {
        let nan = ToyListQuery {
            min_price: Some(f64::NAN),
            ..Default::default()
        };
        let inf = ToyListQuery {
            max_price: Some(f64::INFINITY),
            ..Default::default()
        };
        let finite = ToyListQuery {
            min_price: Some(0.0),
            max_price: Some(99.99),
            ..Default::default()
        };

        assert!(nan.validate().unwrap_err().field_errors().contains_key("min_price"));
        assert!(inf.validate().unwrap_err().field_errors().contains_key("max_price"));
        assert!(finite.validate().is_ok());
    }
}
