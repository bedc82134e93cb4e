//! Application orchestration
//!
//! Runs the two generation passes in order: student copy first, then the
//! answer key. Each pass loads the records and builds its file on its own,
//! so a failed pass is logged and the other pass still runs.

use crate::config::Config;
use crate::error::AppResult;
use crate::models::loaders::load_questions;
use crate::services::paper_service::generate_paper;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Output file left behind by earlier versions of this tool. Removed on
/// startup so a stale paper is not mistaken for fresh output.
const LEGACY_ARTIFACT: &str = "Generated_Paper_Correct_Header.docx";

/// Application main structure
pub struct App {
    config: Config,
}

/// Pass statistics
#[derive(Debug, Default)]
struct GenerationStats {
    success: usize,
    failed: usize,
    total: usize,
}

impl App {
    /// Creates the application
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs both generation passes.
    ///
    /// Always returns normally: per-pass failures are reported in the logs
    /// and the final statistics, not propagated.
    pub fn run(&self) -> Result<()> {
        log_startup(&self.config);

        self.remove_legacy_artifact();

        let passes: [(&str, &str, bool); 2] = [
            ("student copy", self.config.student_filename.as_str(), false),
            ("answer key", self.config.teacher_filename.as_str(), true),
        ];

        let mut stats = GenerationStats {
            total: passes.len(),
            ..Default::default()
        };

        for (label, filename, reveal_answers) in passes {
            log_pass_start(label);

            match self.generate_variant(filename, reveal_answers) {
                Ok(()) => {
                    stats.success += 1;
                }
                Err(e) => {
                    error!("[{}] ❌ generation failed: {}", label, e);
                    stats.failed += 1;
                }
            }
        }

        print_final_stats(&stats, &self.config);

        Ok(())
    }

    /// One full pass: load the records, build the paper, save it.
    fn generate_variant(&self, filename: &str, reveal_answers: bool) -> AppResult<()> {
        let questions = load_questions(Path::new(&self.config.questions_file))?;
        if questions.is_empty() {
            warn!(
                "⚠️ no questions in {}, the paper will be empty",
                self.config.questions_file
            );
        }

        let output_path = self.output_path(filename);
        generate_paper(&questions, &output_path, reveal_answers)
    }

    fn output_path(&self, filename: &str) -> PathBuf {
        Path::new(&self.config.output_dir).join(filename)
    }

    /// Clears the output file of earlier tool versions, if present.
    fn remove_legacy_artifact(&self) {
        let path = self.output_path(LEGACY_ARTIFACT);
        if path.exists() {
            match fs::remove_file(&path) {
                Ok(()) => info!("🗑️ removed stale output: {}", path.display()),
                Err(e) => warn!(
                    "⚠️ could not remove stale output {}: {}",
                    path.display(),
                    e
                ),
            }
        }
    }
}

// ========== Log helper functions ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 MCQ paper generation");
    info!("📄 questions file: {}", config.questions_file);
    info!("📁 output directory: {}", config.output_dir);
    info!("{}", "=".repeat(60));
}

fn log_pass_start(label: &str) {
    info!("\n{}", "─".repeat(60));
    info!("📋 generating {}...", label);
}

fn print_final_stats(stats: &GenerationStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 generation finished");
    info!("✅ succeeded: {}/{}", stats.success, stats.total);
    info!("❌ failed: {}", stats.failed);
    info!("{}", "=".repeat(60));
    info!("\noutput directory: {}", config.output_dir);
}
