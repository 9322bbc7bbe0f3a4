//! Prompt system for Prompt My Papers.
//!
//! This crate turns a set of essay parameters into a ready-to-paste prompt
//! for a text-generation assistant:
//! - Typed essay parameters (`EssayRequest`) and their closed option sets
//! - Validation (`validate`), which only rejects blank topics
//! - Rendering (`render`) into numbered instructions plus a dated file name
//! - Config-driven defaults and saving the result as a `.txt` file

pub mod builder;
pub mod defaults;
pub mod output;
pub mod types;
pub mod validator;

// Re-export main types
pub use builder::{prompt_file_name, render, OptionalSection, FILE_NAME_PREFIX};
pub use defaults::RequestDefaults;
pub use output::save_prompt;
pub use papers_core::ValidationError;
pub use types::{
    check_urgency_days, check_word_count, AcademicLevel, Choice, EssayRequest, EssayType,
    RenderedPrompt, UnknownChoice, ValidRequest, WritingStyle, URGENCY_DAYS_MAX,
    URGENCY_DAYS_MIN, WORD_COUNT_MAX, WORD_COUNT_MIN, WORD_COUNT_STEP,
};
pub use validator::validate;
