use crate::config::{Overrides, Settings, TomlConfig};
use crate::core::{Field, OutputFormat, SpecificityInput};
use crate::utils::error::{Result, SpecificityError};
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "specificity")]
#[command(about = "Calculate the index and rank of host specificity")]
#[command(
    long_about = "Calculate the index and rank of host specificity.\n\n\
    Pass all five host counts for a single calculation, or none to open an interactive form."
)]
pub struct CliConfig {
    #[arg(long, short = 's', allow_negative_numbers = true, help = "Number of host species")]
    pub species: Option<i64>,

    #[arg(long, short = 'g', allow_negative_numbers = true, help = "Number of host genera")]
    pub genera: Option<i64>,

    #[arg(long, short = 'f', allow_negative_numbers = true, help = "Number of host families")]
    pub families: Option<i64>,

    #[arg(long, short = 'o', allow_negative_numbers = true, help = "Number of host orders")]
    pub orders: Option<i64>,

    #[arg(long, short = 'c', allow_negative_numbers = true, help = "Number of host classes")]
    pub classes: Option<i64>,

    #[arg(long, help = "Calculation service URL")]
    pub endpoint: Option<String>,

    #[arg(long, value_name = "SECS", help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, value_name = "FILE", help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Output format: table, csv or json")]
    pub format: Option<OutputFormat>,

    #[arg(long, short = 'v', help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    fn raw_counts(&self) -> [(Field, Option<i64>); 5] {
        [
            (Field::Species, self.species),
            (Field::Genera, self.genera),
            (Field::Families, self.families),
            (Field::Orders, self.orders),
            (Field::Classes, self.classes),
        ]
    }

    /// `None` when no counts were given; an error when only some were.
    pub fn counts(&self) -> Result<Option<SpecificityInput>> {
        let raw = self.raw_counts();
        if raw.iter().all(|(_, value)| value.is_none()) {
            return Ok(None);
        }

        let missing: Vec<String> = raw
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(field, _)| format!("--{}", field))
            .collect();
        if !missing.is_empty() {
            return Err(SpecificityError::InvalidInput {
                message: format!("Missing required arguments: {}", missing.join(", ")),
            });
        }

        let mut input = SpecificityInput::default();
        for (field, value) in raw {
            if let Some(value) = value {
                input.set(field, value);
            }
        }
        Ok(Some(input))
    }

    pub fn settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        Ok(Settings::layered(
            file.as_ref(),
            Overrides {
                endpoint: self.endpoint.clone(),
                timeout_seconds: self.timeout,
                format: self.format,
            },
        ))
    }
}
