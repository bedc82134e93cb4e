use crate::error::{AppError, AppResult};
use crate::models::question::Question;
use std::fs;
use std::path::Path;

/// Loads the question records from a JSON array file.
///
/// The records come back in file order; every later stage preserves that
/// order. A missing file and an unparsable file are reported as distinct
/// error variants so callers can tell them apart.
pub fn load_questions(path: &Path) -> AppResult<Vec<Question>> {
    if !path.exists() {
        return Err(AppError::file_not_found(path.display().to_string()));
    }

    tracing::info!("Loading questions from: {}", path.display());

    let content = fs::read_to_string(path)
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    let questions: Vec<Question> = serde_json::from_str(&content)
        .map_err(|e| AppError::json_parse_failed(path.display().to_string(), e))?;

    tracing::info!("Loaded {} questions", questions.len());

    Ok(questions)
}
