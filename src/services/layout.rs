//! Page geometry and the two-region section layout.
//!
//! The paper body is one Word document with two sections:
//!
//! - Region A: full page width, holds the exam header block
//! - Region B: continuous section break, two snaking columns, holds every
//!   question block
//!
//! The document builder emits a single-section body, so the build goes
//! through a marker paragraph: `section_boundary_paragraph()` closes
//! Region A, and [`apply_two_region_layout`] rewrites the generated
//! document.xml afterwards, turning the marker into the Region A section
//! properties and swapping the trailing section properties for the
//! two-column Region B configuration. All section geometry lives in this
//! module; nothing else touches page setup.

use crate::error::{AppError, AppResult};
use docx_rs::{
    AbstractNumbering, Level, LevelJc, LevelText, NumberFormat, Paragraph, Run, RunFonts,
    SpecialIndentType, Start,
};

/// Page width in twips (US Letter)
pub const PAGE_WIDTH: usize = 12240;
/// Page height in twips (US Letter)
pub const PAGE_HEIGHT: usize = 15840;
/// Top and bottom page margin in twips (0.5 inch)
pub const MARGIN_VERTICAL: usize = 720;
/// Left and right page margin in twips (0.75 inch)
pub const MARGIN_HORIZONTAL: usize = 1080;
/// Gap between the two question columns in twips (0.5 inch)
pub const COLUMN_GAP: usize = 720;

/// Usable width between the margins
pub const CONTENT_WIDTH: usize = PAGE_WIDTH - 2 * MARGIN_HORIZONTAL;
/// Width of one question column
pub const COLUMN_WIDTH: usize = (CONTENT_WIDTH - COLUMN_GAP) / 2;
/// Width of one cell of the 2x2 option grid (half a column)
pub const GRID_COLUMN_WIDTH: usize = COLUMN_WIDTH / 2;

/// Numbering id of the bullet list used for complex-question sub-statements
pub const BULLET_NUMBERING_ID: usize = 1;

/// Bengali-capable typeface used for every run in the paper
pub const PAPER_FONT: &str = "Nirmala UI";

/// Run fonts shared by all text: ascii, high ANSI and complex script
/// ranges all point at the paper typeface, so Bengali and Latin runs
/// render in the same face.
pub fn paper_fonts() -> RunFonts {
    RunFonts::new()
        .ascii(PAPER_FONT)
        .hi_ansi(PAPER_FONT)
        .cs(PAPER_FONT)
}

/// Placeholder text of the paragraph standing in for the Region A/B break.
/// Never appears in output: the layout patch consumes it.
const SECTION_MARKER: &str = "[[column-section-boundary]]";

/// Paragraph that marks where Region A ends and Region B begins.
pub fn section_boundary_paragraph() -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(SECTION_MARKER))
}

/// Bullet list definition for complex-question sub-statements.
pub fn bullet_numbering() -> AbstractNumbering {
    AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
        Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("•"),
            LevelJc::new("left"),
        )
        .indent(Some(540), Some(SpecialIndentType::Hanging(270)), None, None),
    )
}

/// Rewrites a built document.xml into the two-region section layout.
///
/// Expects exactly one marker paragraph and the builder's trailing section
/// properties; returns `LayoutPatchFailed` when either is missing rather
/// than emitting a half-patched document.
pub fn apply_two_region_layout(document_xml: Vec<u8>) -> AppResult<Vec<u8>> {
    let xml = String::from_utf8(document_xml)
        .map_err(|e| AppError::layout_patch_failed(format!("document.xml is not UTF-8: {}", e)))?;

    // The trailing section properties must be swapped first: afterwards the
    // marker splice introduces a second w:sectPr for Region A.
    let xml = replace_body_section(&xml)?;
    let xml = replace_marker_paragraph(&xml)?;

    Ok(xml.into_bytes())
}

fn page_size_xml() -> String {
    format!(r#"<w:pgSz w:w="{}" w:h="{}"/>"#, PAGE_WIDTH, PAGE_HEIGHT)
}

fn page_margin_xml() -> String {
    format!(
        r#"<w:pgMar w:top="{top}" w:right="{side}" w:bottom="{top}" w:left="{side}" w:header="720" w:footer="720" w:gutter="0"/>"#,
        top = MARGIN_VERTICAL,
        side = MARGIN_HORIZONTAL,
    )
}

/// Section properties closing Region A: full width, no column setup.
fn header_section_xml() -> String {
    format!(
        "<w:p><w:pPr><w:sectPr>{}{}</w:sectPr></w:pPr></w:p>",
        page_size_xml(),
        page_margin_xml(),
    )
}

/// Section properties closing Region B: continuous break, two columns.
fn body_section_xml() -> String {
    format!(
        r#"<w:sectPr><w:type w:val="continuous"/>{}{}<w:cols w:num="2" w:space="{}"/></w:sectPr>"#,
        page_size_xml(),
        page_margin_xml(),
        COLUMN_GAP,
    )
}

/// Swaps the builder's trailing section properties for the Region B setup.
fn replace_body_section(xml: &str) -> AppResult<String> {
    let open = xml
        .find("<w:sectPr")
        .ok_or_else(|| AppError::layout_patch_failed("document has no section properties"))?;
    let close_tag = "</w:sectPr>";
    let close = xml[open..]
        .find(close_tag)
        .map(|rel| open + rel + close_tag.len())
        .ok_or_else(|| AppError::layout_patch_failed("section properties are not closed"))?;

    Ok(format!(
        "{}{}{}",
        &xml[..open],
        body_section_xml(),
        &xml[close..]
    ))
}

/// Replaces the whole marker paragraph with the Region A section break.
fn replace_marker_paragraph(xml: &str) -> AppResult<String> {
    let marker_at = xml
        .find(SECTION_MARKER)
        .ok_or_else(|| AppError::layout_patch_failed("section boundary marker not found"))?;

    // Walk back to the opening tag of the paragraph carrying the marker.
    // "<w:p>" and "<w:p ...>" both occur; "<w:pPr" must not match.
    let head = &xml[..marker_at];
    let open = match (head.rfind("<w:p>"), head.rfind("<w:p ")) {
        (Some(a), Some(b)) => a.max(b),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => {
            return Err(AppError::layout_patch_failed(
                "no paragraph open tag before the boundary marker",
            ))
        }
    };

    let close_tag = "</w:p>";
    let close = xml[marker_at..]
        .find(close_tag)
        .map(|rel| marker_at + rel + close_tag.len())
        .ok_or_else(|| {
            AppError::layout_patch_failed("marker paragraph is not closed")
        })?;

    Ok(format!(
        "{}{}{}",
        &xml[..open],
        header_section_xml(),
        &xml[close..]
    ))
}
