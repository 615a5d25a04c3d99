use super::category::{Category, UnitGroup};
use super::standard::STANDARD_REGISTRY;
use crate::domain::a002_conversion::ConversionError;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// Reasons a set of categories cannot form a registry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("registry has no categories")]
    Empty,

    #[error("duplicate category '{0}'")]
    DuplicateCategory(String),

    #[error("category '{0}' has no units")]
    EmptyCategory(String),

    #[error("duplicate unit '{unit}' in category '{category}'")]
    DuplicateUnit { category: String, unit: String },

    #[error("factor {factor} of unit '{unit}' in category '{category}' must be finite and positive")]
    InvalidFactor {
        category: String,
        unit: String,
        factor: f64,
    },

    #[error("category '{0}' has no base unit (factor 1)")]
    MissingBaseUnit(String),

    #[error("invalid registry document: {0}")]
    Parse(String),
}

/// TOML layout accepted by [`UnitRegistry::from_toml`]
#[derive(Debug, Deserialize)]
struct RegistryDocument {
    #[serde(rename = "category", default)]
    categories: Vec<Category>,
}

/// Immutable set of categories in declared order
///
/// Unit names are unique inside a category but may repeat across
/// categories; every lookup by bare name takes the first category in
/// declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitRegistry {
    categories: Vec<Category>,
}

impl UnitRegistry {
    /// Build a registry, checking every category and factor
    pub fn new(categories: Vec<Category>) -> Result<Self, RegistryError> {
        if categories.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen_categories = HashSet::new();
        for category in &categories {
            if !seen_categories.insert(category.id.as_str()) {
                return Err(RegistryError::DuplicateCategory(category.id.clone()));
            }
            if category.units.is_empty() {
                return Err(RegistryError::EmptyCategory(category.id.clone()));
            }

            let mut seen_units = HashSet::new();
            for unit in &category.units {
                if !seen_units.insert(unit.name.as_str()) {
                    return Err(RegistryError::DuplicateUnit {
                        category: category.id.clone(),
                        unit: unit.name.clone(),
                    });
                }
                if !unit.factor.is_finite() || unit.factor <= 0.0 {
                    return Err(RegistryError::InvalidFactor {
                        category: category.id.clone(),
                        unit: unit.name.clone(),
                        factor: unit.factor,
                    });
                }
            }

            if category.base_unit().is_none() {
                return Err(RegistryError::MissingBaseUnit(category.id.clone()));
            }
        }

        Ok(Self { categories })
    }

    /// Build a registry from a TOML document:
    ///
    /// ```toml
    /// [[category]]
    /// id = "length"
    /// units = [{ name = "Meters (m)", factor = 1.0 }]
    /// ```
    pub fn from_toml(text: &str) -> Result<Self, RegistryError> {
        let document: RegistryDocument =
            toml::from_str(text).map_err(|e| RegistryError::Parse(e.to_string()))?;
        Self::new(document.categories)
    }

    /// Built-in length / weight / volume registry, constructed once per process
    pub fn standard() -> &'static UnitRegistry {
        &STANDARD_REGISTRY
    }

    /// Wrap data that is already known to be valid (built-in tables only)
    pub(super) fn from_trusted(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Units of a category in display order; empty for an unknown id
    pub fn units_in_category(&self, id: &str) -> Vec<&str> {
        self.category(id)
            .map(|c| c.unit_names().collect())
            .unwrap_or_default()
    }

    pub fn factor_of(&self, category_id: &str, unit: &str) -> Result<f64, ConversionError> {
        self.category(category_id)
            .and_then(|c| c.factor_of(unit))
            .ok_or_else(|| ConversionError::UnknownUnit {
                category: category_id.to_string(),
                unit: unit.to_string(),
            })
    }

    /// First category in declared order that lists `unit`
    pub fn category_containing(&self, unit: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.contains(unit))
    }

    /// Grouped unit lists for the "From" / "To" selection controls
    pub fn unit_groups(&self) -> Vec<UnitGroup> {
        self.categories.iter().map(UnitGroup::from).collect()
    }
}
