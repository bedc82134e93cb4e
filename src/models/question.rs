use serde::{Deserialize, Serialize};

/// Closing prompt used when a complex question does not bring its own
pub const DEFAULT_FINAL_PROMPT: &str = "নিচের কোনটি সঠিক?";

/// Structural kind of a question record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Stem followed directly by the answer options
    #[default]
    Simple,
    /// Stem, bulleted sub-statements, then a closing prompt
    Complex,
}

/// One multiple-choice question record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Display number, printed verbatim before the stem
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub question_text: String,
    #[serde(rename = "type", default)]
    pub kind: QuestionKind,
    /// Sub-statements of a complex question (e.g. i, ii, iii claims)
    #[serde(default)]
    pub sub_options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_prompt: Option<String>,
    #[serde(default)]
    pub answer_options: Vec<String>,
    #[serde(default)]
    pub correct_answer: String,
}

impl Question {
    /// Index of the option the answer key should mark.
    ///
    /// An option matches when its trimmed text equals the trimmed
    /// `correct_answer` exactly. No case folding, no partial matching; with
    /// duplicate options only the first match is marked.
    pub fn correct_option_index(&self) -> Option<usize> {
        let wanted = self.correct_answer.trim();
        self.answer_options
            .iter()
            .position(|option| option.trim() == wanted)
    }

    /// Closing prompt text for complex questions
    pub fn prompt_text(&self) -> &str {
        self.final_prompt.as_deref().unwrap_or(DEFAULT_FINAL_PROMPT)
    }
}

// Helper function to deserialize the id as either string or integer
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer question id")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_with_options(options: &[&str], correct: &str) -> Question {
        Question {
            id: "1".to_string(),
            question_text: "প্রশ্ন".to_string(),
            kind: QuestionKind::Simple,
            sub_options: Vec::new(),
            final_prompt: None,
            answer_options: options.iter().map(|s| s.to_string()).collect(),
            correct_answer: correct.to_string(),
        }
    }

    #[test]
    fn test_correct_index_matches_after_trim() {
        let q = question_with_options(&["ঢাকা", " চট্টগ্রাম ", "খুলনা"], "চট্টগ্রাম");
        assert_eq!(q.correct_option_index(), Some(1));

        let q = question_with_options(&["a", "b"], "  b  ");
        assert_eq!(q.correct_option_index(), Some(1));
    }

    #[test]
    fn test_correct_index_is_exact() {
        // No case folding and no substring matching
        let q = question_with_options(&["Dhaka", "Khulna"], "dhaka");
        assert_eq!(q.correct_option_index(), None);

        let q = question_with_options(&["Dhaka city", "Khulna"], "Dhaka");
        assert_eq!(q.correct_option_index(), None);
    }

    #[test]
    fn test_correct_index_unmatched_answer() {
        let q = question_with_options(&["ক", "খ", "গ", "ঘ"], "ঙ");
        assert_eq!(q.correct_option_index(), None);
    }

    #[test]
    fn test_duplicate_options_mark_first() {
        let q = question_with_options(&["x", "y", "y"], "y");
        assert_eq!(q.correct_option_index(), Some(1));
    }

    #[test]
    fn test_kind_defaults_to_simple() {
        let json = r#"{"id": 1, "question_text": "q", "answer_options": ["a"], "correct_answer": "a"}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.kind, QuestionKind::Simple);
        assert!(q.sub_options.is_empty());
    }

    #[test]
    fn test_complex_record_parses() {
        let json = r#"{
            "id": "১২",
            "question_text": "stem",
            "type": "complex",
            "sub_options": ["i. first", "ii. second"],
            "final_prompt": "নিচের কোনটি ঠিক?",
            "answer_options": ["i", "ii", "i ও ii"],
            "correct_answer": "i ও ii"
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.kind, QuestionKind::Complex);
        assert_eq!(q.id, "১২");
        assert_eq!(q.sub_options.len(), 2);
        assert_eq!(q.prompt_text(), "নিচের কোনটি ঠিক?");
        assert_eq!(q.correct_option_index(), Some(2));
    }

    #[test]
    fn test_id_accepts_integer_or_string() {
        let q: Question =
            serde_json::from_str(r#"{"id": 7, "question_text": "q"}"#).unwrap();
        assert_eq!(q.id, "7");

        let q: Question =
            serde_json::from_str(r#"{"id": "07", "question_text": "q"}"#).unwrap();
        assert_eq!(q.id, "07");
    }

    #[test]
    fn test_default_prompt_when_absent() {
        let q: Question =
            serde_json::from_str(r#"{"id": 1, "question_text": "q", "type": "complex"}"#).unwrap();
        assert_eq!(q.prompt_text(), DEFAULT_FINAL_PROMPT);
    }
}
