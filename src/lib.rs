// Public exports for the CLI, integration tests and benches
pub mod core;

pub use crate::core::budget::Budget;
pub use crate::core::engine::{MangleConfig, Mangler, MangleStream};
pub use crate::core::vocab::Vocabulary;
