use crate::models::{BodyType, FuelType, Listing};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// New/used selector
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    #[default]
    #[serde(alias = "all")]
    Any,
    #[serde(alias = "novo")]
    New,
    #[serde(alias = "usado")]
    Used,
}

impl Condition {
    pub fn accepts(self, is_new: bool) -> bool {
        match self {
            Condition::Any => true,
            Condition::New => is_new,
            Condition::Used => !is_new,
        }
    }
}

/// Filter criteria for catalog searches
///
/// Empty selections place no constraint on their category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilterCriteria {
    /// Inclusive price range (EUR)
    pub price_range: RangeInclusive<u32>,
    /// Inclusive model year range
    pub year_range: RangeInclusive<i32>,
    pub body_types: Vec<BodyType>,
    pub brand_ids: Vec<u32>,
    /// Brand names picked in the brand selector, matched as substrings
    pub brand_names: Vec<String>,
    pub fuels: Vec<FuelType>,
    pub condition: Condition,
    /// Reference city to measure distances from
    pub origin: Option<String>,
    /// Radius around `origin`, in kilometres
    pub max_distance_km: Option<u32>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            price_range: 0..=100_000,
            year_range: 2010..=2025,
            body_types: Vec::new(),
            brand_ids: Vec::new(),
            brand_names: Vec::new(),
            fuels: Vec::new(),
            condition: Condition::Any,
            origin: None,
            max_distance_km: Some(50),
        }
    }
}

fn toggle<T: PartialEq>(items: &mut Vec<T>, value: T) {
    if let Some(pos) = items.iter().position(|v| *v == value) {
        items.remove(pos);
    } else {
        items.push(value);
    }
}

impl FilterCriteria {
    pub fn toggle_body_type(&mut self, body: BodyType) {
        toggle(&mut self.body_types, body);
    }

    pub fn toggle_brand(&mut self, brand_id: u32) {
        toggle(&mut self.brand_ids, brand_id);
    }

    pub fn toggle_brand_name(&mut self, name: &str) {
        toggle(&mut self.brand_names, name.to_string());
    }

    pub fn toggle_fuel(&mut self, fuel: FuelType) {
        toggle(&mut self.fuels, fuel);
    }

    /// Restore every criterion to its initial value
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// All non-geographic predicates
    pub(crate) fn matches_attributes(&self, listing: &Listing) -> bool {
        self.price_range.contains(&listing.price)
            && self.year_range.contains(&listing.year)
            && (self.body_types.is_empty() || self.body_types.contains(&listing.body))
            && (self.brand_ids.is_empty() || self.brand_ids.contains(&listing.brand.id))
            && (self.fuels.is_empty() || self.fuels.contains(&listing.fuel))
            && self.condition.accepts(listing.is_new)
            && self.matches_brand_name(listing)
    }

    fn matches_brand_name(&self, listing: &Listing) -> bool {
        if self.brand_names.is_empty() {
            return true;
        }
        let brand = listing.brand.name.to_lowercase();
        self.brand_names
            .iter()
            .any(|name| brand.contains(&name.to_lowercase()))
    }
}

/// A listing that passed the filter, with its distance from the origin when known
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchHit {
    pub listing: Listing,
    pub distance_km: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_removes_the_selection() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_fuel(FuelType::Diesel);
        criteria.toggle_fuel(FuelType::Hybrid);
        assert_eq!(criteria.fuels, vec![FuelType::Diesel, FuelType::Hybrid]);

        criteria.toggle_fuel(FuelType::Diesel);
        assert_eq!(criteria.fuels, vec![FuelType::Hybrid]);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut criteria = FilterCriteria {
            origin: Some("Faro".to_string()),
            condition: Condition::New,
            ..Default::default()
        };
        criteria.toggle_brand(3);
        criteria.reset();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn condition_accepts_portuguese_tags() {
        let parsed: FilterCriteria = serde_json::from_str(
            r#"{ "price_range": { "start": 0, "end": 40000 }, "condition": "usado" }"#,
        )
        .unwrap();
        assert_eq!(parsed.condition, Condition::Used);
        assert_eq!(parsed.price_range, 0..=40_000);
        assert_eq!(parsed.year_range, 2010..=2025);
    }
}
