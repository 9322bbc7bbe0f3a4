//! Saving rendered prompts to disk.

use crate::types::RenderedPrompt;
use papers_core::{AppError, AppResult};
use std::path::{Path, PathBuf};

/// Write the prompt text to `dir/<file name>` as UTF-8 plain text.
///
/// The directory is created if missing. An existing file with the same name
/// (a prompt saved earlier the same day) is overwritten.
///
/// # Returns
/// The path of the written file.
pub fn save_prompt(prompt: &RenderedPrompt, dir: &Path) -> AppResult<PathBuf> {
    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|e| {
            AppError::Prompt(format!("Failed to create output directory {:?}: {}", dir, e))
        })?;
    }

    let path = dir.join(prompt.file_name());

    std::fs::write(&path, prompt.text()).map_err(|e| {
        AppError::Prompt(format!("Failed to write prompt file {:?}: {}", path, e))
    })?;

    tracing::info!("Saved prompt to {:?}", path);

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::render;
    use crate::types::EssayRequest;
    use crate::validator::validate;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn sample_prompt() -> RenderedPrompt {
        let request = validate(EssayRequest::new("Urban gardening")).unwrap();
        render(&request, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
    }

    #[test]
    fn test_save_prompt_writes_text() {
        let temp_dir = TempDir::new().unwrap();
        let prompt = sample_prompt();

        let path = save_prompt(&prompt, temp_dir.path()).unwrap();

        assert_eq!(path, temp_dir.path().join("PromptMyPapers_2024-03-05.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), prompt.text());
    }

    #[test]
    fn test_save_prompt_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("prompts/2024");

        let path = save_prompt(&sample_prompt(), &nested).unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }

    #[test]
    fn test_save_prompt_overwrites_same_day() {
        let temp_dir = TempDir::new().unwrap();
        let first = sample_prompt();
        save_prompt(&first, temp_dir.path()).unwrap();

        let second = render(
            &validate(EssayRequest::new("Desert ecology")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        );
        let path = save_prompt(&second, temp_dir.path()).unwrap();

        let saved = fs::read_to_string(path).unwrap();
        assert!(saved.contains("\"Desert ecology\""));
        assert!(!saved.contains("Urban gardening"));
    }

    #[test]
    fn test_save_prompt_into_file_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, "x").unwrap();

        let result = save_prompt(&sample_prompt(), &blocker.join("inner"));
        assert!(matches!(result, Err(AppError::Prompt(_))));
    }
}
