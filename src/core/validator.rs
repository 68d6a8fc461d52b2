use crate::domain::model::{Field, SpecificityInput};

/// Adjacent levels checked by the validator, bottom-up.
const ORDERED_PAIRS: [(Field, Field); 4] = [
    (Field::Species, Field::Genera),
    (Field::Genera, Field::Families),
    (Field::Families, Field::Orders),
    (Field::Orders, Field::Classes),
];

/// An upper level holding more distinct taxa than the level below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub lower: Field,
    pub upper: Field,
    pub lower_count: u32,
    pub upper_count: u32,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) cannot exceed {} ({})",
            self.upper, self.upper_count, self.lower, self.lower_count
        )
    }
}

pub fn first_violation(input: &SpecificityInput) -> Option<Violation> {
    ORDERED_PAIRS.iter().find_map(|&(lower, upper)| {
        let lower_count = input.get(lower);
        let upper_count = input.get(upper);
        (upper_count > lower_count).then_some(Violation {
            lower,
            upper,
            lower_count,
            upper_count,
        })
    })
}

/// True when counts never increase moving up the hierarchy. Equal counts are fine.
pub fn validate(input: &SpecificityInput) -> bool {
    first_violation(input).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CLASSES_MAX, FAMILIES_MAX, GENERA_MAX, ORDERS_MAX, SPECIES_MAX};

    #[test]
    fn test_all_minimum_is_valid() {
        assert!(validate(&SpecificityInput::new(1, 1, 1, 1, 1)));
    }

    #[test]
    fn test_all_maximum_is_valid() {
        let input = SpecificityInput::new(
            SPECIES_MAX,
            GENERA_MAX,
            FAMILIES_MAX,
            ORDERS_MAX,
            CLASSES_MAX,
        );
        assert!(validate(&input));
    }

    #[test]
    fn test_genera_above_species_is_invalid() {
        let input = SpecificityInput::new(5, 10, 1, 1, 1);
        assert!(!validate(&input));
        let violation = first_violation(&input).unwrap();
        assert_eq!(violation.lower, Field::Species);
        assert_eq!(violation.upper, Field::Genera);
        assert_eq!(violation.to_string(), "genera (10) cannot exceed species (5)");
    }

    #[test]
    fn test_each_adjacent_pair_is_checked() {
        assert!(!validate(&SpecificityInput::new(10, 4, 5, 1, 1)));
        assert!(!validate(&SpecificityInput::new(10, 5, 4, 5, 1)));
        assert!(!validate(&SpecificityInput::new(10, 5, 4, 3, 4)));
    }

    #[test]
    fn test_equal_adjacent_counts_are_valid() {
        assert!(validate(&SpecificityInput::new(4, 4, 4, 3, 1)));
        assert!(validate(&SpecificityInput::new(2, 2, 2, 2, 1)));
        assert!(validate(&SpecificityInput::new(5, 5, 5, 5, 5)));
    }

    #[test]
    fn test_non_adjacent_gaps_do_not_matter() {
        // Only neighbouring levels are compared.
        assert!(validate(&SpecificityInput::new(1000, 1, 1, 1, 1)));
        assert!(validate(&SpecificityInput::new(906, 96, 20, 8, 1)));
    }

    #[test]
    fn test_first_violation_reports_lowest_pair() {
        let input = SpecificityInput::new(1, 2, 3, 4, 5);
        let violation = first_violation(&input).unwrap();
        assert_eq!(violation.lower, Field::Species);
    }

    #[test]
    fn test_validate_matches_ordering_over_grid() {
        let values = [1u32, 2, 3, 5];
        for &s in &values {
            for &g in &values {
                for &f in &values {
                    for &o in &values {
                        for &c in &values {
                            let input = SpecificityInput::new(s, g, f, o, c);
                            let expected = c <= o && o <= f && f <= g && g <= s;
                            assert_eq!(validate(&input), expected, "{:?}", input);
                        }
                    }
                }
            }
        }
    }
}
