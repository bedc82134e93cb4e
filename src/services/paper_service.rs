//! Paper generation service
//!
//! ## Responsibilities
//!
//! This module owns the build of one paper variant from loaded records:
//!
//! 1. **Header region**: title block, class line, time and marks line
//! 2. **Question loop**: delegates each record to the question renderer
//! 3. **Section layout**: emits the region boundary and applies the
//!    two-column patch before packing
//! 4. **Save**: creates the output directory and writes the .docx file
//!
//! One call builds one file; the student copy and the answer key are two
//! independent calls.

use crate::error::{AppError, AppResult};
use crate::models::question::Question;
use crate::numerals;
use crate::services::layout;
use crate::services::question_renderer::{render_question, QuestionElement};
use crate::utils::logging::truncate_text;
use docx_rs::{
    AlignmentType, Docx, Numbering, Paragraph, Run, Style, StyleType, Tab, TabValueType,
};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Title printed at the top of every paper
const PAPER_TITLE: &str = "Home Test";
/// Class and year line under the title
const CLASS_LINE: &str = "অষ্টম শ্রেণি (মাধ্যমিক) - ২০২৫";
/// Subject line, left blank for hand-filling
const SUBJECT_LINE: &str = "বিষয়: ";
/// Style id of the title paragraph
const TITLE_STYLE_ID: &str = "Heading1";
/// Header text size in half-points (10 pt)
const HEADER_SIZE: usize = 20;
/// Title size in half-points (16 pt)
const TITLE_SIZE: usize = 32;

/// Render statistics of one variant
#[derive(Debug, Default)]
pub struct RenderStats {
    pub rendered: usize,
    pub on_grid: usize,
}

/// Builds one paper variant and writes it to `output_path`.
///
/// # Arguments
/// - `questions`: records in print order
/// - `output_path`: full path of the .docx file to write
/// - `reveal_answers`: answer key when true, student copy when false
pub fn generate_paper(
    questions: &[Question],
    output_path: &Path,
    reveal_answers: bool,
) -> AppResult<()> {
    let variant = if reveal_answers {
        "answer key"
    } else {
        "student copy"
    };

    log_generation_start(variant, questions.len(), output_path);

    let mut docx = paper_shell(questions.len());
    let mut stats = RenderStats::default();

    // ========== Question loop (Region B content) ==========
    for (index, question) in questions.iter().enumerate() {
        debug!(
            "[{}] rendering question {}/{}: {}",
            variant,
            index + 1,
            questions.len(),
            truncate_text(&question.question_text, 40)
        );

        let elements = render_question(question, reveal_answers);
        if elements
            .iter()
            .any(|e| matches!(e, QuestionElement::Table(_)))
        {
            stats.on_grid += 1;
        }

        for element in elements {
            docx = match element {
                QuestionElement::Paragraph(p) => docx.add_paragraph(p),
                QuestionElement::Table(t) => docx.add_table(t),
            };
        }
        stats.rendered += 1;
    }

    save_document(docx, output_path)?;
    log_generation_complete(variant, &stats, output_path);

    Ok(())
}

/// Document shell: styles, numbering, the header region and the region
/// boundary. Question content is appended behind it.
fn paper_shell(question_count: usize) -> Docx {
    Docx::new()
        .add_style(title_style())
        .add_abstract_numbering(layout::bullet_numbering())
        .add_numbering(Numbering::new(
            layout::BULLET_NUMBERING_ID,
            layout::BULLET_NUMBERING_ID,
        ))
        .add_paragraph(title_line())
        .add_paragraph(centered_line(CLASS_LINE))
        .add_paragraph(centered_line(SUBJECT_LINE))
        .add_paragraph(time_marks_line(question_count))
        .add_paragraph(layout::section_boundary_paragraph())
}

fn title_style() -> Style {
    Style::new(TITLE_STYLE_ID, StyleType::Paragraph)
        .name("Heading 1")
        .bold()
        .size(TITLE_SIZE)
}

/// Header-sized run in the paper typeface.
fn header_run(text: &str) -> Run {
    Run::new()
        .add_text(text)
        .size(HEADER_SIZE)
        .fonts(layout::paper_fonts())
}

fn title_line() -> Paragraph {
    Paragraph::new()
        .style(TITLE_STYLE_ID)
        .align(AlignmentType::Center)
        .add_run(
            Run::new()
                .add_text(PAPER_TITLE)
                .size(TITLE_SIZE)
                .bold()
                .fonts(layout::paper_fonts()),
        )
}

fn centered_line(text: &str) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Center)
        .add_run(header_run(text))
}

/// Time on the left edge, full marks flush against the right margin.
/// Both values derive from the record count: one minute and one mark per
/// question, shown in Bengali digits.
fn time_marks_line(question_count: usize) -> Paragraph {
    let count = numerals::localize(question_count);
    Paragraph::new()
        .add_tab(
            Tab::new()
                .val(TabValueType::Right)
                .pos(layout::CONTENT_WIDTH),
        )
        .add_run(header_run(&format!("সময়— {} মিনিট", count)))
        .add_run(Run::new().add_tab())
        .add_run(header_run(&format!("পূর্ণমান— {}", count)))
}

/// Patches the built document into the two-region layout and packs it.
fn save_document(docx: Docx, output_path: &Path) -> AppResult<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::create_dir_failed(parent.display().to_string(), e))?;
        }
    }

    let mut built = docx.build();
    built.document = layout::apply_two_region_layout(built.document)?;

    let file = fs::File::create(output_path)
        .map_err(|e| AppError::file_write_failed(output_path.display().to_string(), e))?;
    built
        .pack(file)
        .map_err(|e| AppError::document_save_failed(output_path.display().to_string(), e))?;

    Ok(())
}

// ========== Log helper functions ==========

fn log_generation_start(variant: &str, total: usize, output_path: &Path) {
    info!(
        "[{}] building paper with {} questions -> {}",
        variant,
        total,
        output_path.display()
    );
}

fn log_generation_complete(variant: &str, stats: &RenderStats, output_path: &Path) {
    info!(
        "[{}] rendered {} questions ({} on the option grid)",
        variant, stats.rendered, stats.on_grid
    );
    info!("[{}] ✅ saved: {}", variant, output_path.display());
}
