/// Program configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Path to the question records (JSON array)
    pub questions_file: String,
    /// Directory receiving the generated papers
    pub output_dir: String,
    /// Filename of the student copy (answers hidden)
    pub student_filename: String,
    /// Filename of the answer key (correct options marked)
    pub teacher_filename: String,
    /// Whether to show verbose logs
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_file: "questions.json".to_string(),
            output_dir: "output".to_string(),
            student_filename: "Question_Paper.docx".to_string(),
            teacher_filename: "Question_Paper_With_Answers.docx".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            questions_file: std::env::var("QUESTIONS_FILE").unwrap_or(default.questions_file),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            student_filename: default.student_filename,
            teacher_filename: default.teacher_filename,
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
