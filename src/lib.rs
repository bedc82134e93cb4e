//! # MCQ Paper Generator
//!
//! Turns a JSON list of multiple-choice questions into two print-ready
//! DOCX exam papers: a student copy with blank answer bubbles and an
//! answer key with the correct options marked.
//!
//! ## Architecture
//!
//! The system is layered; each layer only calls downwards:
//!
//! ### 1. Data layer
//! - `models/` - question records and their JSON loader
//! - `Question` - one record; `load_questions` - file to `Vec<Question>`
//!
//! ### 2. Business capability layer
//! - `services/question_renderer` - one record to document elements
//! - `services/paper_service` - one variant to one saved .docx file
//! - `services/layout` - page geometry and the two-region section setup
//!
//! ### 3. Orchestration layer
//! - `app` - runs the student-copy pass and the answer-key pass in order,
//!   keeping the two independent
//!
//! Shared foundations: `config` (env-driven settings), `error` (typed
//! failure taxonomy), `numerals` (Bengali digit localization), `utils`
//! (logging setup).

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod numerals;
pub mod services;
pub mod utils;

// Re-export the common types
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult, DocumentError, FileError};
pub use models::loaders::load_questions;
pub use models::question::{Question, QuestionKind};
pub use services::paper_service::generate_paper;
