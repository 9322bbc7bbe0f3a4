//! Essay request types for Prompt My Papers.
//!
//! The selectable parameters are closed enums with a display label that is
//! rendered verbatim into the prompt. Labels parse back case-insensitively,
//! and kebab-case slugs (`compare-and-contrast`) are accepted as well.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::defaults::RequestDefaults;

/// Smallest word count the form offers.
pub const WORD_COUNT_MIN: u32 = 250;
/// Largest word count the form offers.
pub const WORD_COUNT_MAX: u32 = 5000;
/// Word counts move in steps of this size.
pub const WORD_COUNT_STEP: u32 = 50;
/// Shortest deadline, in days.
pub const URGENCY_DAYS_MIN: u32 = 1;
/// Longest deadline, in days.
pub const URGENCY_DAYS_MAX: u32 = 30;

/// A value that did not match any allowed label.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{value}' (expected one of: {allowed})")]
pub struct UnknownChoice {
    pub kind: &'static str,
    pub value: String,
    pub allowed: String,
}

/// A closed set of labelled options, as offered by a select box.
pub trait Choice: Copy + Sized + 'static {
    /// Human-readable name of the option set, used in error messages.
    const KIND: &'static str;

    /// Every option in form order.
    const ALL: &'static [Self];

    /// Display label, rendered verbatim.
    fn label(&self) -> &'static str;

    /// Kebab-case identifier, handy on the command line.
    fn slug(&self) -> String {
        slugify(self.label())
    }
}

fn slugify(label: &str) -> String {
    label
        .to_lowercase()
        .replace('&', "and")
        .replace(['\'', '’'], "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Parse a label or slug into one of `T::ALL`.
pub fn parse_choice<T: Choice>(input: &str) -> Result<T, UnknownChoice> {
    let needle = input.trim().to_lowercase().replace('’', "'");

    T::ALL
        .iter()
        .copied()
        .find(|choice| needle == choice.label().to_lowercase() || needle == choice.slug())
        .ok_or_else(|| UnknownChoice {
            kind: T::KIND,
            value: input.to_string(),
            allowed: T::ALL
                .iter()
                .map(|c| c.label())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Kind of essay being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EssayType {
    Analytical,
    Argumentative,
    Persuasive,
    Narrative,
    #[serde(rename = "Compare & Contrast")]
    CompareAndContrast,
    #[serde(rename = "Cause & Effect")]
    CauseAndEffect,
    Expository,
}

impl Choice for EssayType {
    const KIND: &'static str = "essay type";
    const ALL: &'static [Self] = &[
        EssayType::Analytical,
        EssayType::Argumentative,
        EssayType::Persuasive,
        EssayType::Narrative,
        EssayType::CompareAndContrast,
        EssayType::CauseAndEffect,
        EssayType::Expository,
    ];

    fn label(&self) -> &'static str {
        match self {
            EssayType::Analytical => "Analytical",
            EssayType::Argumentative => "Argumentative",
            EssayType::Persuasive => "Persuasive",
            EssayType::Narrative => "Narrative",
            EssayType::CompareAndContrast => "Compare & Contrast",
            EssayType::CauseAndEffect => "Cause & Effect",
            EssayType::Expository => "Expository",
        }
    }
}

/// Level of study the essay is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcademicLevel {
    #[serde(rename = "High School")]
    HighSchool,
    Undergraduate,
    #[serde(rename = "Master's", alias = "Master’s")]
    Masters,
    #[serde(rename = "PhD")]
    Phd,
}

impl Choice for AcademicLevel {
    const KIND: &'static str = "academic level";
    const ALL: &'static [Self] = &[
        AcademicLevel::HighSchool,
        AcademicLevel::Undergraduate,
        AcademicLevel::Masters,
        AcademicLevel::Phd,
    ];

    fn label(&self) -> &'static str {
        match self {
            AcademicLevel::HighSchool => "High School",
            AcademicLevel::Undergraduate => "Undergraduate",
            AcademicLevel::Masters => "Master's",
            AcademicLevel::Phd => "PhD",
        }
    }
}

/// Tone the essay should be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WritingStyle {
    #[serde(rename = "Formal Academic")]
    FormalAcademic,
    #[serde(rename = "Conversational Academic")]
    ConversationalAcademic,
    Creative,
    Technical,
}

impl Choice for WritingStyle {
    const KIND: &'static str = "writing style";
    const ALL: &'static [Self] = &[
        WritingStyle::FormalAcademic,
        WritingStyle::ConversationalAcademic,
        WritingStyle::Creative,
        WritingStyle::Technical,
    ];

    fn label(&self) -> &'static str {
        match self {
            WritingStyle::FormalAcademic => "Formal Academic",
            WritingStyle::ConversationalAcademic => "Conversational Academic",
            WritingStyle::Creative => "Creative",
            WritingStyle::Technical => "Technical",
        }
    }
}

macro_rules! impl_choice_traits {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl FromStr for $ty {
                type Err = UnknownChoice;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_choice(s)
                }
            }
        )+
    };
}

impl_choice_traits!(EssayType, AcademicLevel, WritingStyle);

/// Check a word count against the form's bounds and step.
pub fn check_word_count(words: u32) -> Result<u32, String> {
    if !(WORD_COUNT_MIN..=WORD_COUNT_MAX).contains(&words) {
        return Err(format!(
            "word count must be between {} and {}, got {}",
            WORD_COUNT_MIN, WORD_COUNT_MAX, words
        ));
    }
    if words % WORD_COUNT_STEP != 0 {
        return Err(format!(
            "word count must be a multiple of {}, got {}",
            WORD_COUNT_STEP, words
        ));
    }
    Ok(words)
}

/// Check a deadline against the form's bounds.
pub fn check_urgency_days(days: u32) -> Result<u32, String> {
    if !(URGENCY_DAYS_MIN..=URGENCY_DAYS_MAX).contains(&days) {
        return Err(format!(
            "days until deadline must be between {} and {}, got {}",
            URGENCY_DAYS_MIN, URGENCY_DAYS_MAX, days
        ));
    }
    Ok(days)
}

/// The full set of user-chosen essay parameters.
///
/// The topic is free text and may still be blank; pass the request through
/// [`crate::validate`] to obtain a [`ValidRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EssayRequest {
    pub topic: String,
    pub essay_type: EssayType,
    pub word_count: u32,
    pub academic_level: AcademicLevel,
    pub writing_style: WritingStyle,
    pub urgency_days: u32,
    pub include_introduction: bool,
    pub include_sources: bool,
    pub include_citations: bool,
}

impl EssayRequest {
    /// Create a request for `topic` with the form's default settings.
    pub fn new(topic: impl Into<String>) -> Self {
        RequestDefaults::default().request(topic)
    }

    pub fn with_essay_type(mut self, essay_type: EssayType) -> Self {
        self.essay_type = essay_type;
        self
    }

    pub fn with_word_count(mut self, word_count: u32) -> Self {
        self.word_count = word_count;
        self
    }

    pub fn with_academic_level(mut self, academic_level: AcademicLevel) -> Self {
        self.academic_level = academic_level;
        self
    }

    pub fn with_writing_style(mut self, writing_style: WritingStyle) -> Self {
        self.writing_style = writing_style;
        self
    }

    pub fn with_urgency_days(mut self, urgency_days: u32) -> Self {
        self.urgency_days = urgency_days;
        self
    }

    /// Toggle the three optional sections at once.
    pub fn with_sections(mut self, introduction: bool, sources: bool, citations: bool) -> Self {
        self.include_introduction = introduction;
        self.include_sources = sources;
        self.include_citations = citations;
        self
    }
}

/// An [`EssayRequest`] whose topic is known to be non-blank.
///
/// Only [`crate::validate`] constructs this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidRequest(EssayRequest);

impl ValidRequest {
    pub(crate) fn new_unchecked(request: EssayRequest) -> Self {
        Self(request)
    }

    pub fn request(&self) -> &EssayRequest {
        &self.0
    }

    pub fn into_inner(self) -> EssayRequest {
        self.0
    }
}

/// Rendered prompt text plus the file name to save it under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPrompt {
    #[serde(skip)]
    lines: Vec<String>,
    text: String,
    file_name: String,
    #[serde(skip)]
    instruction_count: usize,
}

impl RenderedPrompt {
    pub(crate) fn new(lines: Vec<String>, file_name: String, instruction_count: usize) -> Self {
        let text = lines.join("\n");
        Self {
            lines,
            text,
            file_name,
            instruction_count,
        }
    }

    /// The prompt, one entry per line, in output order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The lines joined with `\n`.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Suggested download name, `PromptMyPapers_YYYY-MM-DD.txt`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Number of numbered items under "Please provide:".
    pub fn instruction_count(&self) -> usize {
        self.instruction_count
    }
}
