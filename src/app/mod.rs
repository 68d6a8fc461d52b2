pub mod render;
pub mod session;

pub use session::{Command, FormSession};
