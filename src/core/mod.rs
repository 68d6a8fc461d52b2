pub mod coordinator;
pub mod form;
pub mod history;
pub mod validator;

pub use crate::domain::model::{
    Field, SpecificityInput, SpecificityOutput, SpecificityResult,
};
pub use crate::domain::ports::{Calculator, ConfigProvider, OutputFormat};
pub use crate::utils::error::Result;
