//! Options command handler.
//!
//! Lists the values each essay parameter accepts.

use clap::Args;
use papers_core::AppResult;
use papers_prompt::{
    AcademicLevel, Choice, EssayType, WritingStyle, URGENCY_DAYS_MAX, URGENCY_DAYS_MIN,
    WORD_COUNT_MAX, WORD_COUNT_MIN, WORD_COUNT_STEP,
};
use serde_json::{json, Value};

/// List accepted essay types, levels, styles and numeric bounds
#[derive(Args, Debug)]
pub struct OptionsCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl OptionsCommand {
    pub fn execute(&self) -> AppResult<()> {
        tracing::info!("Executing options command");

        if self.json {
            println!("{}", serde_json::to_string_pretty(&options_json())?);
        } else {
            print!("{}", options_text());
        }

        Ok(())
    }
}

fn labels<T: Choice>() -> Vec<&'static str> {
    T::ALL.iter().map(|c| c.label()).collect()
}

fn options_json() -> Value {
    json!({
        "essayTypes": labels::<EssayType>(),
        "academicLevels": labels::<AcademicLevel>(),
        "writingStyles": labels::<WritingStyle>(),
        "wordCount": {
            "min": WORD_COUNT_MIN,
            "max": WORD_COUNT_MAX,
            "step": WORD_COUNT_STEP,
        },
        "urgencyDays": {
            "min": URGENCY_DAYS_MIN,
            "max": URGENCY_DAYS_MAX,
        },
    })
}

fn choice_section<T: Choice>(title: &str) -> String {
    let mut section = format!("{}:\n", title);
    for choice in T::ALL {
        section.push_str(&format!("  {:<26} ({})\n", choice.label(), choice.slug()));
    }
    section
}

fn options_text() -> String {
    let mut text = String::new();
    text.push_str(&choice_section::<EssayType>("Essay types"));
    text.push_str(&choice_section::<AcademicLevel>("Academic levels"));
    text.push_str(&choice_section::<WritingStyle>("Writing styles"));
    text.push_str(&format!(
        "Word count: {}-{} in steps of {}\n",
        WORD_COUNT_MIN, WORD_COUNT_MAX, WORD_COUNT_STEP
    ));
    text.push_str(&format!(
        "Days until deadline: {}-{}\n",
        URGENCY_DAYS_MIN, URGENCY_DAYS_MAX
    ));
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_json_lists_all_choices() {
        let value = options_json();
        assert_eq!(value["essayTypes"].as_array().unwrap().len(), 7);
        assert_eq!(value["essayTypes"][4], "Compare & Contrast");
        assert_eq!(value["academicLevels"][2], "Master's");
        assert_eq!(value["writingStyles"][0], "Formal Academic");
        assert_eq!(value["wordCount"]["step"], 50);
        assert_eq!(value["urgencyDays"]["max"], 30);
    }

    #[test]
    fn test_options_text_shows_slugs() {
        let text = options_text();
        assert!(text.contains("compare-and-contrast"));
        assert!(text.contains("high-school"));
        assert!(text.contains("Word count: 250-5000 in steps of 50"));
    }
}
