//! Built-in categories: length (base mm), weight (base g), volume (base ml)

use super::category::Category;
use super::registry::UnitRegistry;
use once_cell::sync::Lazy;

pub const LENGTH: &str = "length";
pub const WEIGHT: &str = "weight";
pub const VOLUME: &str = "volume";

const LENGTH_UNITS: [(&str, f64); 8] = [
    ("Millimeters (mm)", 1.0),
    ("Centimeters (cm)", 10.0),
    ("Meters (m)", 1_000.0),
    ("Kilometers (km)", 1_000_000.0),
    ("Inches (in)", 25.4),
    ("Feet (ft)", 304.8),
    ("Yards (yd)", 914.4),
    ("Miles (mi)", 1_609_344.0),
];

const WEIGHT_UNITS: [(&str, f64); 4] = [
    ("Grams (g)", 1.0),
    ("Kilograms (kg)", 1_000.0),
    ("Ounces (oz)", 28.3495),
    ("Pounds (lb)", 453.592),
];

const VOLUME_UNITS: [(&str, f64); 7] = [
    ("Milliliters (ml)", 1.0),
    ("Liters (l)", 1_000.0),
    ("Fluid Ounces (fl oz)", 29.5735),
    ("Cups (cup)", 240.0),
    ("Pints (pt)", 473.176),
    ("Quarts (qt)", 946.353),
    ("Gallons (gal)", 3785.41),
];

pub(super) static STANDARD_REGISTRY: Lazy<UnitRegistry> =
    Lazy::new(|| UnitRegistry::from_trusted(standard_categories()));

/// Categories in display order
pub fn standard_categories() -> Vec<Category> {
    vec![
        Category::new(LENGTH, LENGTH_UNITS),
        Category::new(WEIGHT, WEIGHT_UNITS),
        Category::new(VOLUME, VOLUME_UNITS),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_data_passes_validation() {
        let validated = UnitRegistry::new(standard_categories()).unwrap();
        assert_eq!(&validated, UnitRegistry::standard());
    }

    #[test]
    fn test_every_category_has_a_base_unit() {
        let registry = UnitRegistry::standard();
        let bases: Vec<Option<&str>> = registry.categories().iter().map(|c| c.base_unit()).collect();
        assert_eq!(
            bases,
            vec![Some("Millimeters (mm)"), Some("Grams (g)"), Some("Milliliters (ml)")]
        );
    }

    #[test]
    fn test_no_label_collides_across_categories() {
        let registry = UnitRegistry::standard();
        for category in registry.categories() {
            for unit in category.unit_names() {
                assert_eq!(
                    registry.category_containing(unit).map(|c| c.id.as_str()),
                    Some(category.id.as_str()),
                    "{unit} resolved outside {}",
                    category.id
                );
            }
        }
    }

    #[test]
    fn test_group_labels() {
        let labels: Vec<String> = UnitRegistry::standard()
            .unit_groups()
            .into_iter()
            .map(|g| g.label)
            .collect();
        assert_eq!(labels, vec!["Length", "Weight", "Volume"]);
    }
}
