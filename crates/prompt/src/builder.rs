//! Prompt renderer: turns a validated essay request into the prompt text.

use chrono::NaiveDate;

use crate::types::{Choice, EssayRequest, RenderedPrompt, ValidRequest};

/// Prefix of every suggested file name.
pub const FILE_NAME_PREFIX: &str = "PromptMyPapers_";

const PREAMBLE: &str = "Act as an academic writing coach.";
const INSTRUCTION_HEADER: &str = "Please provide:";
const CLOSING: &str = "Keep the tone and vocabulary appropriate for the stated academic level.";

/// Items that are always requested, in order.
const REQUIRED_INSTRUCTIONS: [&str; 2] = [
    "A detailed essay outline with 3–5 main sections and bullet\u{2011}point sub\u{2011}arguments.",
    "A clear thesis statement.",
];

/// A toggle-controlled instruction item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalSection {
    Introduction,
    Sources,
    Citations,
}

impl OptionalSection {
    /// Sections in the order they are listed in the prompt.
    pub const ALL: [OptionalSection; 3] = [
        OptionalSection::Introduction,
        OptionalSection::Sources,
        OptionalSection::Citations,
    ];

    pub fn instruction(self) -> &'static str {
        match self {
            OptionalSection::Introduction => "A sample introduction paragraph (100–150 words).",
            OptionalSection::Sources => {
                "Suggestions for reputable sources or study types to reference."
            }
            OptionalSection::Citations => {
                "The appropriate citation style (explain why it suits this assignment)."
            }
        }
    }

    pub fn is_enabled(self, request: &EssayRequest) -> bool {
        match self {
            OptionalSection::Introduction => request.include_introduction,
            OptionalSection::Sources => request.include_sources,
            OptionalSection::Citations => request.include_citations,
        }
    }
}

/// Render a validated request into prompt text and a file name.
///
/// Rendering cannot fail. Output depends only on `request` and `today`.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use papers_prompt::{render, validate, EssayRequest};
///
/// let request = validate(EssayRequest::new("AI in education")).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// let prompt = render(&request, today);
///
/// assert!(prompt.text().contains("\"AI in education\""));
/// assert_eq!(prompt.file_name(), "PromptMyPapers_2024-03-05.txt");
/// ```
pub fn render(request: &ValidRequest, today: NaiveDate) -> RenderedPrompt {
    let request = request.request();

    let mut lines = vec![
        PREAMBLE.to_string(),
        format!(
            "I’m writing a **{}-word {} essay** at **{}** level.",
            request.word_count,
            request.essay_type.label().to_lowercase(),
            request.academic_level.label()
        ),
        format!("**Topic:** \"{}\"", request.topic),
        format!("**Writing style:** {}", request.writing_style.label()),
        format!("My deadline is in **{} days**.", request.urgency_days),
        String::new(),
        INSTRUCTION_HEADER.to_string(),
    ];

    let instructions = numbered_instructions(request);
    let instruction_count = instructions.len();
    lines.extend(instructions);

    lines.push(String::new());
    lines.push(CLOSING.to_string());

    tracing::debug!(
        "Rendered prompt with {} instructions ({} lines)",
        instruction_count,
        lines.len()
    );

    RenderedPrompt::new(lines, prompt_file_name(today), instruction_count)
}

/// Number the required items followed by every enabled optional section.
///
/// Numbers are assigned after filtering, so they stay contiguous whichever
/// sections are switched off.
fn numbered_instructions(request: &EssayRequest) -> Vec<String> {
    let optional = OptionalSection::ALL
        .into_iter()
        .filter(|section| section.is_enabled(request))
        .map(OptionalSection::instruction);

    REQUIRED_INSTRUCTIONS
        .into_iter()
        .chain(optional)
        .enumerate()
        .map(|(index, text)| format!("{}. {}", index + 1, text))
        .collect()
}

/// `PromptMyPapers_YYYY-MM-DD.txt` for the given date.
pub fn prompt_file_name(today: NaiveDate) -> String {
    format!("{}{}.txt", FILE_NAME_PREFIX, today.format("%Y-%m-%d"))
}
