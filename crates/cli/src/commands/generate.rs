//! Generate command handler.
//!
//! Collects essay parameters from flags (falling back to config defaults),
//! validates them, renders the prompt and optionally saves it.

use chrono::{Local, NaiveDate};
use clap::Args;
use papers_core::{config::AppConfig, AppError, AppResult};
use papers_prompt::{
    check_urgency_days, check_word_count, render, save_prompt, validate, AcademicLevel,
    EssayRequest, EssayType, RenderedPrompt, RequestDefaults, WritingStyle,
};
use std::path::PathBuf;

/// Generate an essay prompt
#[derive(Args, Debug)]
pub struct GenerateCommand {
    /// Essay topic (e.g. "Impact of social media on teenagers")
    pub topic: Option<String>,

    /// Read the topic from a file
    #[arg(short, long, conflicts_with = "topic")]
    pub file: Option<PathBuf>,

    /// Essay type (e.g. argumentative, "Compare & Contrast")
    #[arg(short = 't', long)]
    pub essay_type: Option<EssayType>,

    /// Desired word count (250-5000, in steps of 50)
    #[arg(short = 'n', long, value_parser = parse_word_count)]
    pub word_count: Option<u32>,

    /// Academic level (high-school, undergraduate, masters, phd)
    #[arg(short, long)]
    pub level: Option<AcademicLevel>,

    /// Writing style / tone (e.g. formal-academic, creative)
    #[arg(short, long)]
    pub style: Option<WritingStyle>,

    /// Days until deadline (1-30)
    #[arg(short, long, value_parser = parse_urgency_days)]
    pub days: Option<u32>,

    /// Include a sample introduction paragraph
    #[arg(long, conflicts_with = "no_introduction")]
    pub introduction: bool,

    /// Leave out the sample introduction paragraph
    #[arg(long)]
    pub no_introduction: bool,

    /// Include suggested source types
    #[arg(long, conflicts_with = "no_sources")]
    pub sources: bool,

    /// Leave out suggested source types
    #[arg(long)]
    pub no_sources: bool,

    /// Recommend a citation style
    #[arg(long, conflicts_with = "no_citations")]
    pub citations: bool,

    /// Leave out the citation style recommendation
    #[arg(long)]
    pub no_citations: bool,

    /// Date used for the file name (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Save the prompt as a .txt file in the output directory
    #[arg(long)]
    pub save: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a successful generate run.
#[derive(Debug)]
pub struct GenerateOutput {
    pub prompt: RenderedPrompt,
    pub saved_to: Option<PathBuf>,
}

impl GenerateCommand {
    /// Execute the generate command.
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing generate command");
        tracing::debug!("Generate options: {:?}", self);

        let output = self.generate(config)?;

        if self.json {
            let mut json = serde_json::json!({
                "text": output.prompt.text(),
                "fileName": output.prompt.file_name(),
            });
            if let Some(ref path) = output.saved_to {
                json["savedTo"] = serde_json::json!(path);
            }
            println!("{}", serde_json::to_string_pretty(&json)?);
        } else {
            println!("{}", output.prompt.text());
            if let Some(ref path) = output.saved_to {
                eprintln!("Prompt saved to {}", path.display());
            }
        }

        Ok(())
    }

    /// Validate, render and (if requested) save, without printing.
    pub fn generate(&self, config: &AppConfig) -> AppResult<GenerateOutput> {
        let defaults = RequestDefaults::from_config(&config.defaults)?;
        let request = self.build_request(&defaults)?;

        let valid = validate(request).map_err(|e| {
            tracing::warn!("Essay request rejected: {}", e);
            AppError::from(e)
        })?;

        let today = self.date.unwrap_or_else(|| Local::now().date_naive());
        let prompt = render(&valid, today);

        tracing::info!(
            "Generated prompt with {} instructions ({})",
            prompt.instruction_count(),
            prompt.file_name()
        );

        let saved_to = if self.save {
            Some(save_prompt(&prompt, &config.resolved_output_dir())?)
        } else {
            None
        };

        Ok(GenerateOutput { prompt, saved_to })
    }

    /// Merge flags over the resolved defaults.
    fn build_request(&self, defaults: &RequestDefaults) -> AppResult<EssayRequest> {
        let topic = self.get_topic()?;

        Ok(defaults
            .request(topic)
            .with_essay_type(self.essay_type.unwrap_or(defaults.essay_type))
            .with_word_count(self.word_count.unwrap_or(defaults.word_count))
            .with_academic_level(self.level.unwrap_or(defaults.academic_level))
            .with_writing_style(self.style.unwrap_or(defaults.writing_style))
            .with_urgency_days(self.days.unwrap_or(defaults.urgency_days))
            .with_sections(
                toggle(
                    self.introduction,
                    self.no_introduction,
                    defaults.include_introduction,
                ),
                toggle(self.sources, self.no_sources, defaults.include_sources),
                toggle(self.citations, self.no_citations, defaults.include_citations),
            ))
    }

    /// Topic from the positional argument or `--file`; empty when neither is given.
    fn get_topic(&self) -> AppResult<String> {
        if let Some(ref topic) = self.topic {
            return Ok(topic.clone());
        }

        match self.file {
            Some(ref path) => {
                let contents = std::fs::read_to_string(path).map_err(|e| {
                    AppError::Io(std::io::Error::new(
                        e.kind(),
                        format!("Failed to read topic file {:?}: {}", path, e),
                    ))
                })?;
                Ok(contents.trim_end_matches(['\r', '\n']).to_string())
            }
            None => Ok(String::new()),
        }
    }
}

fn toggle(on: bool, off: bool, default: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => default,
    }
}

fn parse_word_count(s: &str) -> Result<u32, String> {
    let words: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a whole number", s))?;
    check_word_count(words)
}

fn parse_urgency_days(s: &str) -> Result<u32, String> {
    let days: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a whole number", s))?;
    check_urgency_days(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cli;
    use clap::Parser;
    use papers_core::config::EssayDefaultsConfig;
    use papers_core::ValidationError;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> GenerateCommand {
        let mut argv = vec!["papers", "generate"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            crate::Commands::Generate(cmd) => cmd,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    fn config_in(dir: &TempDir) -> AppConfig {
        AppConfig {
            workspace: dir.path().to_path_buf(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_generate_with_flags() {
        let temp_dir = TempDir::new().unwrap();
        let cmd = parse(&[
            "AI in education",
            "--essay-type",
            "argumentative",
            "--word-count",
            "800",
            "--level",
            "undergraduate",
            "--style",
            "Formal Academic",
            "--days",
            "5",
            "--date",
            "2024-03-05",
        ]);

        let output = cmd.generate(&config_in(&temp_dir)).unwrap();
        let text = output.prompt.text();

        assert!(text.contains("**800-word argumentative essay** at **Undergraduate** level."));
        assert!(text.contains("**Topic:** \"AI in education\""));
        assert!(text.contains("5. The appropriate citation style"));
        assert_eq!(output.prompt.file_name(), "PromptMyPapers_2024-03-05.txt");
        assert!(output.saved_to.is_none());
    }

    #[test]
    fn test_generate_empty_topic_fails() {
        let temp_dir = TempDir::new().unwrap();
        let cmd = parse(&["   ", "--save"]);

        let result = cmd.generate(&config_in(&temp_dir));
        assert!(matches!(
            result,
            Err(AppError::Validation(ValidationError::EmptyTopic))
        ));
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_generate_without_topic_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = parse(&[]).generate(&config_in(&temp_dir));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_generate_saves_to_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = config_in(&temp_dir);
        config.output_dir = Some(PathBuf::from("prompts"));

        let cmd = parse(&["Urban heat islands", "--save", "--date", "2024-03-05"]);
        let output = cmd.generate(&config).unwrap();

        let expected = temp_dir
            .path()
            .join("prompts")
            .join("PromptMyPapers_2024-03-05.txt");
        assert_eq!(output.saved_to.as_deref(), Some(expected.as_path()));
        assert_eq!(
            fs::read_to_string(expected).unwrap(),
            output.prompt.text()
        );
    }

    #[test]
    fn test_config_defaults_apply_when_flags_missing() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = config_in(&temp_dir);
        config.defaults = EssayDefaultsConfig {
            essay_type: Some("Narrative".to_string()),
            urgency_days: Some(12),
            include_introduction: Some(false),
            ..EssayDefaultsConfig::default()
        };

        let output = parse(&["A summer abroad", "--date", "2024-03-05"])
            .generate(&config)
            .unwrap();
        let text = output.prompt.text();

        assert!(text.contains("narrative essay"));
        assert!(text.contains("My deadline is in **12 days**."));
        assert!(!text.contains("sample introduction"));
        assert!(text.contains("3. Suggestions for reputable sources"));
    }

    #[test]
    fn test_flags_override_config_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = config_in(&temp_dir);
        config.defaults = EssayDefaultsConfig {
            include_introduction: Some(false),
            ..EssayDefaultsConfig::default()
        };

        let output = parse(&[
            "Topic",
            "--introduction",
            "--no-sources",
            "--no-citations",
            "--date",
            "2024-03-05",
        ])
        .generate(&config)
        .unwrap();

        assert_eq!(output.prompt.instruction_count(), 3);
        assert!(output
            .prompt
            .text()
            .contains("3. A sample introduction paragraph"));
    }

    #[test]
    fn test_invalid_config_default_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = config_in(&temp_dir);
        config.defaults.academic_level = Some("Kindergarten".to_string());

        let result = parse(&["Topic"]).generate(&config);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_missing_topic_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.txt");

        let cmd = parse(&["--file", missing.to_str().unwrap()]);
        let result = cmd.generate(&config_in(&temp_dir));

        match result {
            Err(AppError::Io(e)) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
                assert!(e.to_string().contains("missing.txt"));
            }
            other => panic!("expected I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_topic_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let topic_file = temp_dir.path().join("topic.txt");
        fs::write(&topic_file, "Ocean acidification\n").unwrap();

        let cmd = parse(&["--file", topic_file.to_str().unwrap(), "--date", "2024-03-05"]);
        let output = cmd.generate(&config_in(&temp_dir)).unwrap();

        assert!(output
            .prompt
            .text()
            .contains("**Topic:** \"Ocean acidification\""));
    }

    #[test]
    fn test_bounds_rejected_at_parse_time() {
        for args in [
            ["Topic", "--word-count", "200"],
            ["Topic", "--word-count", "5001"],
            ["Topic", "--word-count", "825"],
            ["Topic", "--days", "0"],
            ["Topic", "--days", "31"],
            ["Topic", "--essay-type", "limerick"],
        ] {
            let mut argv = vec!["papers", "generate"];
            argv.extend_from_slice(&args);
            assert!(Cli::try_parse_from(argv).is_err(), "args {:?}", args);
        }
    }

    #[test]
    fn test_conflicting_toggles_rejected() {
        let argv = ["papers", "generate", "Topic", "--sources", "--no-sources"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_toggle() {
        assert!(toggle(true, false, false));
        assert!(!toggle(false, true, true));
        assert!(toggle(false, false, true));
        assert!(!toggle(false, false, false));
    }
}
