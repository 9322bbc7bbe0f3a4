//! Command handlers for the papers CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod generate;
pub mod options;

// Re-export command types for convenience
pub use generate::GenerateCommand;
pub use options::OptionsCommand;
