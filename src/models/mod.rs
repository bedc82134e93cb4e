pub mod loaders;
pub mod question;

pub use loaders::load_questions;
pub use question::{Question, QuestionKind};
