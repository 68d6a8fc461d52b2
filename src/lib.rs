pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpCalculator, DEFAULT_ENDPOINT};
pub use app::FormSession;
pub use config::{Settings, TomlConfig};
pub use crate::core::coordinator::{RequestCoordinator, SubmitOutcome};
pub use crate::core::form::SpecificityForm;
pub use crate::core::history::{ResultHistory, HISTORY_CAPACITY};
pub use crate::core::validator::validate;
pub use domain::model::{Field, SpecificityInput, SpecificityOutput, SpecificityResult};
pub use domain::ports::{Calculator, ConfigProvider, OutputFormat};
pub use utils::error::{Result, SpecificityError};
