//! Single-question rendering - business capability layer
//!
//! Only responsible for turning one question record into document elements.
//! No document state, no file paths, no `Vec<Question>`.

use crate::models::question::{Question, QuestionKind};
use crate::services::layout::{self, BULLET_NUMBERING_ID, GRID_COLUMN_WIDTH};
use docx_rs::{
    IndentLevel, NumberingId, Paragraph, Run, Table, TableBorders, TableCell, TableRow,
};

/// Unmarked answer bubble
const BUBBLE_OUTLINE: &str = "◯";
/// Filled answer bubble marking the correct option
const BUBBLE_FILLED: &str = "●";
/// Positional option labels, assigned by index
const OPTION_LABELS: [&str; 4] = ["ক)", "খ)", "গ)", "ঘ)"];
/// Suffix appended to the revealed correct option in the vertical list
const CORRECT_SUFFIX: &str = " (সঠিক উত্তর)";
/// Option count at which the 2x2 bubble grid is used
const GRID_OPTION_COUNT: usize = 4;
/// Question text size in half-points (8 pt keeps two columns readable)
const QUESTION_SIZE: usize = 16;

/// One rendered piece of a question block.
///
/// Questions mix flowing paragraphs with the option grid table, and the
/// document builder takes the two through different methods.
#[derive(Debug)]
pub enum QuestionElement {
    Paragraph(Paragraph),
    Table(Table),
}

/// Renders a question record into document elements, in reading order.
///
/// Rules:
/// - stem line `{id}. {text}` in bold
/// - complex questions add their bulleted sub-statements and a bold
///   closing prompt between stem and options
/// - four or more options: 2x2 bubble grid, row-major, extras dropped
/// - fewer than four: one labelled line per option
/// - `reveal_answers` marks the matched option (filled bubble or suffix);
///   without it the output carries no answer information at all
pub fn render_question(question: &Question, reveal_answers: bool) -> Vec<QuestionElement> {
    let mut elements = Vec::new();

    elements.push(QuestionElement::Paragraph(stem_line(question)));

    if question.kind == QuestionKind::Complex {
        for sub in &question.sub_options {
            elements.push(QuestionElement::Paragraph(sub_statement_line(sub)));
        }
        elements.push(QuestionElement::Paragraph(prompt_line(question.prompt_text())));
    }

    let correct = if reveal_answers {
        question.correct_option_index()
    } else {
        None
    };

    if question.answer_options.len() >= GRID_OPTION_COUNT {
        elements.push(QuestionElement::Table(option_grid(
            &question.answer_options,
            correct,
        )));
    } else {
        for (index, option) in question.answer_options.iter().enumerate() {
            elements.push(QuestionElement::Paragraph(option_line(
                index,
                option,
                correct == Some(index),
            )));
        }
    }

    elements
}

/// Base run: paper typeface at question size.
fn question_run(text: &str) -> Run {
    Run::new()
        .add_text(text)
        .size(QUESTION_SIZE)
        .fonts(layout::paper_fonts())
}

fn stem_line(question: &Question) -> Paragraph {
    let text = format!("{}. {}", question.id, question.question_text);
    Paragraph::new().add_run(question_run(&text).bold())
}

fn sub_statement_line(text: &str) -> Paragraph {
    Paragraph::new()
        .add_run(question_run(text))
        .numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0))
}

fn prompt_line(text: &str) -> Paragraph {
    Paragraph::new().add_run(question_run(text).bold())
}

/// One line of the vertical option list (fewer than four options).
fn option_line(index: usize, option: &str, marked: bool) -> Paragraph {
    let text = format!("{} {}", OPTION_LABELS[index], option);
    let mut run = question_run(&text);
    if marked {
        run = run.bold();
    }

    let mut paragraph = Paragraph::new().add_run(run);
    if marked {
        paragraph = paragraph.add_run(question_run(CORRECT_SUFFIX).bold());
    }
    paragraph
}

/// 2x2 option grid: cell (0,0) holds option 0, (0,1) option 1,
/// (1,0) option 2, (1,1) option 3. Options past the fourth are dropped.
fn option_grid(options: &[String], correct: Option<usize>) -> Table {
    let rows = vec![
        TableRow::new(vec![
            option_cell(0, &options[0], correct),
            option_cell(1, &options[1], correct),
        ]),
        TableRow::new(vec![
            option_cell(2, &options[2], correct),
            option_cell(3, &options[3], correct),
        ]),
    ];

    Table::new(rows)
        .set_grid(vec![GRID_COLUMN_WIDTH, GRID_COLUMN_WIDTH])
        .set_borders(TableBorders::new().clear_all())
}

fn option_cell(index: usize, option: &str, correct: Option<usize>) -> TableCell {
    let marked = correct == Some(index);
    let bubble = if marked { BUBBLE_FILLED } else { BUBBLE_OUTLINE };

    let mut bubble_run = question_run(bubble);
    let mut text_run = question_run(&format!(" {} {}", OPTION_LABELS[index], option));
    if marked {
        bubble_run = bubble_run.bold();
        text_run = text_run.bold();
    }

    TableCell::new().add_paragraph(Paragraph::new().add_run(bubble_run).add_run(text_run))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple_question(options: &[&str], correct: &str) -> Question {
        Question {
            id: "5".to_string(),
            question_text: "বাংলাদেশের রাজধানী কোনটি?".to_string(),
            kind: QuestionKind::Simple,
            sub_options: Vec::new(),
            final_prompt: None,
            answer_options: options.iter().map(|s| s.to_string()).collect(),
            correct_answer: correct.to_string(),
        }
    }

    fn complex_question() -> Question {
        Question {
            id: "9".to_string(),
            question_text: "নিচের তথ্যগুলো লক্ষ কর:".to_string(),
            kind: QuestionKind::Complex,
            sub_options: vec!["i. পানি একটি যৌগ".to_string(), "ii. লোহা একটি মৌল".to_string()],
            final_prompt: None,
            answer_options: vec![
                "i".to_string(),
                "ii".to_string(),
                "i ও ii".to_string(),
                "কোনোটিই নয়".to_string(),
            ],
            correct_answer: "i ও ii".to_string(),
        }
    }

    fn to_json(element: &QuestionElement) -> String {
        match element {
            QuestionElement::Paragraph(p) => serde_json::to_string(p).unwrap(),
            QuestionElement::Table(t) => serde_json::to_string(t).unwrap(),
        }
    }

    #[test]
    fn test_stem_line_is_bold_and_numbered() {
        let q = simple_question(&["ঢাকা", "খুলনা", "সিলেট", "বরিশাল"], "ঢাকা");
        let elements = render_question(&q, false);
        let stem = to_json(&elements[0]);
        assert!(stem.contains("5. বাংলাদেশের রাজধানী কোনটি?"));
        assert!(stem.contains("bold"));
    }

    #[test]
    fn test_four_options_build_a_grid() {
        let q = simple_question(&["ঢাকা", "খুলনা", "সিলেট", "বরিশাল"], "ঢাকা");
        let elements = render_question(&q, false);
        assert_eq!(elements.len(), 2);
        assert!(matches!(elements[1], QuestionElement::Table(_)));

        let grid = to_json(&elements[1]);
        for label in OPTION_LABELS {
            assert!(grid.contains(label), "missing label {}", label);
        }
    }

    #[test]
    fn test_student_grid_has_only_empty_bubbles() {
        let q = simple_question(&["ঢাকা", "খুলনা", "সিলেট", "বরিশাল"], "খুলনা");
        let elements = render_question(&q, false);
        let grid = to_json(&elements[1]);
        assert_eq!(grid.matches(BUBBLE_OUTLINE).count(), 4);
        assert_eq!(grid.matches(BUBBLE_FILLED).count(), 0);
        // No bold runs in a student grid either
        assert!(!grid.contains("bold"));
    }

    #[test]
    fn test_answer_key_fills_exactly_one_bubble() {
        let q = simple_question(&["ঢাকা", "খুলনা", "সিলেট", "বরিশাল"], "সিলেট");
        let elements = render_question(&q, true);
        let grid = to_json(&elements[1]);
        assert_eq!(grid.matches(BUBBLE_FILLED).count(), 1);
        assert_eq!(grid.matches(BUBBLE_OUTLINE).count(), 3);
        assert!(grid.contains("bold"));
    }

    #[test]
    fn test_unmatched_answer_marks_nothing() {
        let q = simple_question(&["ঢাকা", "খুলনা", "সিলেট", "বরিশাল"], "রাজশাহী");
        let elements = render_question(&q, true);
        let grid = to_json(&elements[1]);
        assert_eq!(grid.matches(BUBBLE_FILLED).count(), 0);
        assert_eq!(grid.matches(BUBBLE_OUTLINE).count(), 4);
    }

    #[test]
    fn test_three_options_fall_back_to_lines() {
        let q = simple_question(&["সত্য", "মিথ্যা", "বলা যায় না"], "মিথ্যা");
        let elements = render_question(&q, false);
        // stem + three option lines, no table
        assert_eq!(elements.len(), 4);
        assert!(elements
            .iter()
            .all(|e| matches!(e, QuestionElement::Paragraph(_))));

        let second = to_json(&elements[2]);
        assert!(second.contains("খ) মিথ্যা"));
        assert!(!second.contains(BUBBLE_OUTLINE));

        // Only as many labels as options: no fourth label anywhere
        let all: String = elements.iter().map(|e| to_json(e)).collect();
        assert!(!all.contains("ঘ)"));
    }

    #[test]
    fn test_vertical_list_marks_with_suffix() {
        let q = simple_question(&["সত্য", "মিথ্যা"], "সত্য");

        let elements = render_question(&q, true);
        let marked = to_json(&elements[1]);
        assert!(marked.contains("(সঠিক উত্তর)"));
        assert!(marked.contains("bold"));

        let other = to_json(&elements[2]);
        assert!(!other.contains("(সঠিক উত্তর)"));
        assert!(!other.contains("bold"));

        // The student copy never carries the suffix
        let student = render_question(&q, false);
        assert!(!to_json(&student[1]).contains("(সঠিক উত্তর)"));
    }

    #[test]
    fn test_complex_question_orders_subs_then_prompt() {
        let q = complex_question();
        let elements = render_question(&q, false);
        // stem, two sub-statements, prompt, grid
        assert_eq!(elements.len(), 5);
        assert!(to_json(&elements[1]).contains("i. পানি একটি যৌগ"));
        assert!(to_json(&elements[2]).contains("ii. লোহা একটি মৌল"));

        let prompt = to_json(&elements[3]);
        assert!(prompt.contains("নিচের কোনটি সঠিক?"));
        assert!(prompt.contains("bold"));
        assert!(matches!(elements[4], QuestionElement::Table(_)));
    }

    #[test]
    fn test_extra_options_are_dropped_from_grid() {
        let q = simple_question(&["ক", "খ", "গ", "ঘ", "ঙ-extra"], "ক");
        let elements = render_question(&q, false);
        assert_eq!(elements.len(), 2);
        let grid = to_json(&elements[1]);
        assert!(!grid.contains("ঙ-extra"));
    }

    #[test]
    fn test_no_options_renders_stem_only() {
        let q = simple_question(&[], "");
        let elements = render_question(&q, true);
        assert_eq!(elements.len(), 1);
    }
}
