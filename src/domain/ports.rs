use crate::domain::model::{SpecificityInput, SpecificityOutput};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// The external service that turns host counts into a rank and index.
#[async_trait]
pub trait Calculator: Send + Sync {
    async fn calculate(&self, input: &SpecificityInput) -> Result<SpecificityOutput>;
}

#[async_trait]
impl<C: Calculator + ?Sized> Calculator for std::sync::Arc<C> {
    async fn calculate(&self, input: &SpecificityInput) -> Result<SpecificityOutput> {
        (**self).calculate(input).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unsupported format '{}'; valid formats: table, csv, json",
                other
            )),
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
    fn headers(&self) -> HashMap<String, String>;
    fn output_format(&self) -> OutputFormat;
}
