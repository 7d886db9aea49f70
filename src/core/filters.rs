use crate::models::{Toy, ToyFilter};

impl ToyFilter {
    /// True when no filter field is set
    pub fn is_empty(&self) -> bool {
        self.age_range.is_none()
            && self.category.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }
}

/// Check if a toy passes the catalog filters
///
/// Age range and category are exact matches; price bounds are inclusive
/// and each one applies only when supplied.
#[inline]
pub fn matches_filter(toy: &Toy, filter: &ToyFilter) -> bool {
    if let Some(age_range) = &filter.age_range {
        if &toy.age_range != age_range {
            return false;
        }
    }

    if let Some(category) = &filter.category {
        if &toy.category != category {
            return false;
        }
    }

    matches_price(toy.price, filter.min_price, filter.max_price)
}

/// Inclusive price range check
#[inline]
pub fn matches_price(price: f64, min_price: Option<f64>, max_price: Option<f64>) -> bool {
    if let Some(min) = min_price {
        if price < min {
            return false;
        }
    }

    if let Some(max) = max_price {
        if price > max {
            return false;
        }
    }

    true
}
