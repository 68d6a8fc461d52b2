use crate::core::validator::{self, Violation};
use crate::domain::model::{Field, SpecificityInput};

pub const INVALID_INPUT_MESSAGE: &str = "Invalid Input Values!";

/// Form state: the five counts plus validity, recomputed after every edit.
#[derive(Debug, Clone)]
pub struct SpecificityForm {
    input: SpecificityInput,
    violation: Option<Violation>,
}

impl SpecificityForm {
    pub fn new() -> Self {
        Self::from_input(SpecificityInput::default())
    }

    pub fn from_input(input: SpecificityInput) -> Self {
        let mut form = Self {
            input,
            violation: None,
        };
        form.revalidate();
        form
    }

    /// Clamps and stores a value, then recomputes validity. Returns the stored value.
    pub fn set(&mut self, field: Field, raw: i64) -> u32 {
        let stored = self.input.set(field, raw);
        self.revalidate();
        stored
    }

    /// Parses text from an input box. Non-numeric text leaves the field unchanged.
    pub fn set_text(&mut self, field: Field, text: &str) -> Result<u32, String> {
        let raw: i64 = text
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a whole number", text.trim()))?;
        Ok(self.set(field, raw))
    }

    pub fn reset(&mut self) {
        self.input = SpecificityInput::default();
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.violation = validator::first_violation(&self.input);
        if let Some(violation) = &self.violation {
            tracing::debug!("Form input invalid: {}", violation);
        }
    }

    pub fn input(&self) -> SpecificityInput {
        self.input
    }

    pub fn is_valid(&self) -> bool {
        self.violation.is_none()
    }

    pub fn violation(&self) -> Option<&Violation> {
        self.violation.as_ref()
    }

    /// Text for the validity indicator; `None` while the input is valid.
    pub fn indicator(&self) -> Option<String> {
        self.violation
            .as_ref()
            .map(|v| format!("{} ({})", INVALID_INPUT_MESSAGE, v))
    }
}

impl Default for SpecificityForm {
    fn default() -> Self {
        Self::new()
    }
}
