use serde::{Deserialize, Serialize};

/// Unit inside a category with its multiplier to the category base unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDef {
    pub name: String,
    pub factor: f64,
}

impl UnitDef {
    pub fn new(name: impl Into<String>, factor: f64) -> Self {
        Self {
            name: name.into(),
            factor,
        }
    }
}

/// Group of mutually convertible units ("length", "weight", ...)
///
/// Units are kept in display order. Each unit carries its own factor, so a
/// display name can never exist without exactly one factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub units: Vec<UnitDef>,
}

impl Category {
    pub fn new<S, I>(id: impl Into<String>, units: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, f64)>,
    {
        Self {
            id: id.into(),
            units: units
                .into_iter()
                .map(|(name, factor)| UnitDef::new(name, factor))
                .collect(),
        }
    }

    /// Display label: identifier with the first letter upper-cased
    pub fn label(&self) -> String {
        let mut chars = self.id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn unit_names(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(|u| u.name.as_str())
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.units.iter().any(|u| u.name == unit)
    }

    pub fn factor_of(&self, unit: &str) -> Option<f64> {
        self.units.iter().find(|u| u.name == unit).map(|u| u.factor)
    }

    /// The unit whose factor is exactly 1, if the data declares one
    pub fn base_unit(&self) -> Option<&str> {
        self.units
            .iter()
            .find(|u| u.factor == 1.0)
            .map(|u| u.name.as_str())
    }
}

/// One group of a selectable-list control: category label plus its units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitGroup {
    pub label: String,
    pub units: Vec<String>,
}

impl From<&Category> for UnitGroup {
    fn from(category: &Category) -> Self {
        Self {
            label: category.label(),
            units: category.unit_names().map(str::to_string).collect(),
        }
    }
}
