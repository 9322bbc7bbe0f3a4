//! Default essay settings.
//!
//! Built-in defaults mirror the initial state of the essay form. A workspace
//! can replace any of them through the `defaults:` section of its config.

use papers_core::config::EssayDefaultsConfig;
use papers_core::{AppError, AppResult};

use crate::types::{
    check_urgency_days, check_word_count, parse_choice, AcademicLevel, Choice, EssayRequest,
    EssayType, WritingStyle,
};

/// Typed defaults applied to every field the user leaves unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestDefaults {
    pub essay_type: EssayType,
    pub word_count: u32,
    pub academic_level: AcademicLevel,
    pub writing_style: WritingStyle,
    pub urgency_days: u32,
    pub include_introduction: bool,
    pub include_sources: bool,
    pub include_citations: bool,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            essay_type: EssayType::Analytical,
            word_count: 1000,
            academic_level: AcademicLevel::HighSchool,
            writing_style: WritingStyle::FormalAcademic,
            urgency_days: 7,
            include_introduction: true,
            include_sources: true,
            include_citations: true,
        }
    }
}

impl RequestDefaults {
    /// Resolve the raw `defaults:` config section on top of the built-ins.
    ///
    /// Unknown labels and out-of-range numbers are configuration errors.
    pub fn from_config(raw: &EssayDefaultsConfig) -> AppResult<Self> {
        let builtin = Self::default();

        let defaults = Self {
            essay_type: choice_or(raw.essay_type.as_deref(), builtin.essay_type)?,
            word_count: number_or(raw.word_count, builtin.word_count, check_word_count)?,
            academic_level: choice_or(raw.academic_level.as_deref(), builtin.academic_level)?,
            writing_style: choice_or(raw.writing_style.as_deref(), builtin.writing_style)?,
            urgency_days: number_or(raw.urgency_days, builtin.urgency_days, check_urgency_days)?,
            include_introduction: raw
                .include_introduction
                .unwrap_or(builtin.include_introduction),
            include_sources: raw.include_sources.unwrap_or(builtin.include_sources),
            include_citations: raw.include_citations.unwrap_or(builtin.include_citations),
        };

        tracing::debug!("Resolved essay defaults: {:?}", defaults);

        Ok(defaults)
    }

    /// Build a request for `topic` using these defaults.
    pub fn request(&self, topic: impl Into<String>) -> EssayRequest {
        EssayRequest {
            topic: topic.into(),
            essay_type: self.essay_type,
            word_count: self.word_count,
            academic_level: self.academic_level,
            writing_style: self.writing_style,
            urgency_days: self.urgency_days,
            include_introduction: self.include_introduction,
            include_sources: self.include_sources,
            include_citations: self.include_citations,
        }
    }
}

fn choice_or<T: Choice>(raw: Option<&str>, fallback: T) -> AppResult<T> {
    match raw {
        Some(label) => parse_choice(label)
            .map_err(|e| AppError::Config(format!("Invalid default: {}", e))),
        None => Ok(fallback),
    }
}

fn number_or(
    raw: Option<u32>,
    fallback: u32,
    check: fn(u32) -> Result<u32, String>,
) -> AppResult<u32> {
    match raw {
        Some(value) => check(value).map_err(|e| AppError::Config(format!("Invalid default: {}", e))),
        None => Ok(fallback),
    }
}
