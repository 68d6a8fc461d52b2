use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SPECIES_MAX: u32 = 1000;
pub const GENERA_MAX: u32 = 500;
pub const FAMILIES_MAX: u32 = 150;
pub const ORDERS_MAX: u32 = 75;
pub const CLASSES_MAX: u32 = 5;

/// One level of the Linnean hierarchy, ordered from the bottom (species) up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Species,
    Genera,
    Families,
    Orders,
    Classes,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Species,
        Field::Genera,
        Field::Families,
        Field::Orders,
        Field::Classes,
    ];

    pub fn max(self) -> u32 {
        match self {
            Field::Species => SPECIES_MAX,
            Field::Genera => GENERA_MAX,
            Field::Families => FAMILIES_MAX,
            Field::Orders => ORDERS_MAX,
            Field::Classes => CLASSES_MAX,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Species => "species",
            Field::Genera => "genera",
            Field::Families => "families",
            Field::Orders => "orders",
            Field::Classes => "classes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Species => "Species",
            Field::Genera => "Genera",
            Field::Families => "Families",
            Field::Orders => "Orders",
            Field::Classes => "Classes",
        }
    }

    /// Maps any integer into `[1, max]`.
    pub fn clamp(self, raw: i64) -> u32 {
        raw.clamp(1, i64::from(self.max())) as u32
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "species" | "s" => Ok(Field::Species),
            "genera" | "genus" | "g" => Ok(Field::Genera),
            "families" | "family" | "f" => Ok(Field::Families),
            "orders" | "order" | "o" => Ok(Field::Orders),
            "classes" | "class" | "c" => Ok(Field::Classes),
            other => Err(format!("unknown field '{}'", other)),
        }
    }
}

/// Host counts at each taxonomic level. Serialized as the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificityInput {
    pub species: u32,
    pub genera: u32,
    pub families: u32,
    pub orders: u32,
    pub classes: u32,
}

impl SpecificityInput {
    pub fn new(species: u32, genera: u32, families: u32, orders: u32, classes: u32) -> Self {
        Self {
            species,
            genera,
            families,
            orders,
            classes,
        }
    }

    /// Builds an input from raw user values, clamping each into its field's range.
    pub fn clamped(species: i64, genera: i64, families: i64, orders: i64, classes: i64) -> Self {
        Self {
            species: Field::Species.clamp(species),
            genera: Field::Genera.clamp(genera),
            families: Field::Families.clamp(families),
            orders: Field::Orders.clamp(orders),
            classes: Field::Classes.clamp(classes),
        }
    }

    pub fn get(&self, field: Field) -> u32 {
        match field {
            Field::Species => self.species,
            Field::Genera => self.genera,
            Field::Families => self.families,
            Field::Orders => self.orders,
            Field::Classes => self.classes,
        }
    }

    /// Clamps `raw` and stores it, returning the value actually kept.
    pub fn set(&mut self, field: Field, raw: i64) -> u32 {
        let value = field.clamp(raw);
        match field {
            Field::Species => self.species = value,
            Field::Genera => self.genera = value,
            Field::Families => self.families = value,
            Field::Orders => self.orders = value,
            Field::Classes => self.classes = value,
        }
        value
    }
}

impl Default for SpecificityInput {
    fn default() -> Self {
        Self::new(1, 1, 1, 1, 1)
    }
}

/// Produced by the calculation service; passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecificityOutput {
    pub host_rank: u64,
    pub host_index: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecificityResult {
    #[serde(flatten)]
    pub input: SpecificityInput,
    #[serde(flatten)]
    pub output: SpecificityOutput,
}

impl SpecificityResult {
    pub fn merge(input: SpecificityInput, output: SpecificityOutput) -> Self {
        Self { input, output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_bounds_each_field() {
        assert_eq!(Field::Species.clamp(0), 1);
        assert_eq!(Field::Species.clamp(-40), 1);
        assert_eq!(Field::Species.clamp(1001), 1000);
        assert_eq!(Field::Genera.clamp(999), 500);
        assert_eq!(Field::Families.clamp(151), 150);
        assert_eq!(Field::Orders.clamp(76), 75);
        assert_eq!(Field::Classes.clamp(6), 5);
        assert_eq!(Field::Classes.clamp(3), 3);
    }

    #[test]
    fn test_set_returns_stored_value() {
        let mut input = SpecificityInput::default();
        assert_eq!(input.set(Field::Orders, 80), 75);
        assert_eq!(input.get(Field::Orders), 75);
        assert_eq!(input.set(Field::Species, 12), 12);
        assert_eq!(input.species, 12);
    }

    #[test]
    fn test_field_parsing_accepts_abbreviations() {
        assert_eq!("s".parse::<Field>().unwrap(), Field::Species);
        assert_eq!("Genera".parse::<Field>().unwrap(), Field::Genera);
        assert_eq!("family".parse::<Field>().unwrap(), Field::Families);
        assert_eq!(" o ".parse::<Field>().unwrap(), Field::Orders);
        assert_eq!("c".parse::<Field>().unwrap(), Field::Classes);
        assert!("phylum".parse::<Field>().is_err());
    }

    #[test]
    fn test_input_wire_shape() {
        let input = SpecificityInput::new(10, 5, 2, 1, 1);
        let value = serde_json::to_value(input).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "species": 10, "genera": 5, "families": 2, "orders": 1, "classes": 1
            })
        );
    }

    #[test]
    fn test_output_parses_service_payload() {
        let output: SpecificityOutput =
            serde_json::from_str(r#"{"host_rank": 3, "host_index": 0.12345678}"#).unwrap();
        assert_eq!(output.host_rank, 3);
        assert!((output.host_index - 0.12345678).abs() < f64::EPSILON);
    }

    #[test]
    fn test_result_serializes_flat() {
        let result = SpecificityResult::merge(
            SpecificityInput::new(4, 4, 3, 1, 1),
            SpecificityOutput {
                host_rank: 750499,
                host_index: 5.8753,
            },
        );
        let value = serde_json::to_value(result).unwrap();
        assert_eq!(value["species"], 4);
        assert_eq!(value["classes"], 1);
        assert_eq!(value["host_rank"], 750499);
        assert_eq!(value.as_object().unwrap().len(), 7);
    }
}
