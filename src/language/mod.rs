// Types representing weighted prompts and the settings used to highlight them

mod config;
mod error;
mod types;

// Re-export all public symbols
pub use config::*;
pub use error::*;
pub use types::*;
