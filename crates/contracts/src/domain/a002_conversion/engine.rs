use super::error::ConversionError;
use crate::domain::a001_unit_registry::{Category, UnitRegistry};
use serde::{Deserialize, Serialize};

/// Value plus the pair of unit names to convert between
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub value: f64,
    pub from: String,
    pub to: String,
}

impl ConversionRequest {
    pub fn new(value: f64, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            value,
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Successful conversion: computed value, resolved category and target unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionOutcome {
    pub value: f64,
    pub category: String,
    pub unit: String,
}

/// Stateless converter over an injected registry
#[derive(Debug, Clone, Copy)]
pub struct ConversionEngine<'a> {
    registry: &'a UnitRegistry,
}

impl<'a> ConversionEngine<'a> {
    pub fn new(registry: &'a UnitRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'a UnitRegistry {
        self.registry
    }

    /// First category in declared order whose unit list has both units
    pub fn resolve_category(&self, from: &str, to: &str) -> Result<&'a Category, ConversionError> {
        self.registry
            .categories()
            .iter()
            .find(|c| c.contains(from) && c.contains(to))
            .ok_or_else(|| ConversionError::IncompatibleUnits {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// `value * factor(from) / factor(to)`; same-unit conversion returns `value` as is
    pub fn convert(
        &self,
        value: f64,
        category_id: &str,
        from: &str,
        to: &str,
    ) -> Result<f64, ConversionError> {
        let from_factor = self.registry.factor_of(category_id, from)?;
        if from == to {
            return Ok(value);
        }
        let to_factor = self.registry.factor_of(category_id, to)?;

        let result = value * from_factor / to_factor;
        log::debug!(
            "convert [{}]: {} {} -> {} {}",
            category_id,
            value,
            from,
            result,
            to
        );
        Ok(result)
    }

    /// Resolve the category and convert in one step
    pub fn convert_request(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionOutcome, ConversionError> {
        let category = self.resolve_category(&request.from, &request.to)?;
        let value = self.convert(request.value, &category.id, &request.from, &request.to)?;
        Ok(ConversionOutcome {
            value,
            category: category.id.clone(),
            unit: request.to.clone(),
        })
    }
}
