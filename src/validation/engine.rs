//! Validation Engine
//!
//! Rule checks and orchestration over a loaded board, separated from
//! parsing and CLI concerns.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::board::{self, Board, interior_span};
use crate::config::Markers;
use crate::validation::visibility::left_to_right_check;

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A diagnostic message for a validation issue.
///
/// `line` is the 1-based row number on the board the check ran over; for
/// the column checks that board is the transposed one, so `line` is the
/// 1-based column number of the original board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
    pub severity: Severity,
}

/// Result of validating a board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add_error(&mut self, line: usize, message: String) {
        self.diagnostics.push(Diagnostic {
            line,
            message,
            severity: Severity::Error,
        });
    }

    pub fn add_warning(&mut self, line: usize, message: String) {
        self.diagnostics.push(Diagnostic {
            line,
            message,
            severity: Severity::Warning,
        });
    }

    pub fn is_valid(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

/// Which direction of the board a check is running over.
///
/// The column checks reuse the row checks on the transposed board, so the
/// axis only affects how diagnostics are worded.
#[derive(Debug, Clone, Copy)]
enum Axis {
    Row,
    Column,
}

impl Axis {
    fn label(self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "column",
        }
    }

    fn edges(self) -> (&'static str, &'static str) {
        match self {
            Axis::Row => ("left", "right"),
            Axis::Column => ("top", "bottom"),
        }
    }
}

/// Run the full validation pipeline over a loaded board.
///
/// Stages run in order, stopping at the first stage that reports an
/// error: well-formedness, completeness, row uniqueness, horizontal
/// visibility, then column uniqueness and vertical visibility on the
/// transposed board.
pub fn validate_board(board: &Board, markers: &Markers) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_well_formed(board, markers, &mut result);
    if !result.is_valid() {
        return result;
    }

    check_finished(board, markers, &mut result);
    if !result.is_valid() {
        return result;
    }

    log::debug!("board is well-formed and complete, checking rows");
    check_uniqueness(board, Axis::Row, &mut result);
    if !result.is_valid() {
        return result;
    }

    check_line_visibility(board, markers, Axis::Row, &mut result);
    if !result.is_valid() {
        return result;
    }

    log::debug!("rows comply, checking columns");
    let columns = board.transpose();
    check_uniqueness(&columns, Axis::Column, &mut result);
    if !result.is_valid() {
        return result;
    }

    check_line_visibility(&columns, markers, Axis::Column, &mut result);
    result
}

/// Load a board file and return the overall verdict.
///
/// `true` iff the board complies with every placement and visibility
/// rule. I/O failures propagate as errors instead of a verdict.
pub fn check_skyscrapers(path: impl AsRef<Path>, markers: &Markers) -> Result<bool> {
    let board = board::load_board(path)?;
    Ok(validate_board(&board, markers).is_valid())
}

/// True iff no unresolved marker remains anywhere on the board
pub fn is_finished(board: &Board, markers: &Markers) -> bool {
    board
        .rows()
        .iter()
        .all(|row| !row.contains(markers.unresolved))
}

/// Verify the board is a square grid over the allowed character set.
///
/// Malformed boards fail fast here with descriptive diagnostics instead
/// of feeding undefined content into the rule checks. Passing this stage
/// also pins the content to ASCII, which the byte-wise transpose relies
/// on.
fn check_well_formed(board: &Board, markers: &Markers, result: &mut ValidationResult) {
    let size = board.size();

    for (idx, row) in board.rows().iter().enumerate() {
        let line = idx + 1;
        let width = row.chars().count();
        if width != size {
            result.add_error(
                line,
                format!("row is {width} characters long on a {size}-row board"),
            );
            continue;
        }
        if let Some(cell) = row
            .chars()
            .find(|&c| !is_height_digit(c) && c != markers.filler && c != markers.unresolved)
        {
            result.add_error(line, format!("invalid character '{cell}'"));
        }
    }

    if size < 3 {
        result.add_warning(1, format!("board has {size} rows and no interior to check"));
    }
}

/// Report the first unresolved cell: an unfinished board cannot comply.
fn check_finished(board: &Board, markers: &Markers, result: &mut ValidationResult) {
    for (idx, row) in board.rows().iter().enumerate() {
        if row.contains(markers.unresolved) {
            result.add_error(
                idx + 1,
                format!("unresolved cell '{}' present", markers.unresolved),
            );
            return;
        }
    }
}

/// No height digit may repeat within an interior span.
fn check_uniqueness(board: &Board, axis: Axis, result: &mut ValidationResult) {
    for (line, row) in board.interior_rows() {
        let mut seen = [false; 10];
        for cell in interior_span(row).chars() {
            let Some(height) = cell.to_digit(10) else {
                continue;
            };
            if seen[height as usize] {
                result.add_error(
                    line,
                    format!("duplicate height {} in {} {}", height, axis.label(), line),
                );
                return;
            }
            seen[height as usize] = true;
        }
    }
}

/// Every present edge hint must match its visible-building count exactly.
fn check_line_visibility(
    board: &Board,
    markers: &Markers,
    axis: Axis,
    result: &mut ValidationResult,
) {
    let (front_label, back_label) = axis.edges();

    for (line, row) in board.interior_rows() {
        let mut edges = row.chars();
        let front = edges.next();
        let back = edges.next_back();

        if let Some(hint) = hint_value(front, markers) {
            if !left_to_right_check(row, hint) {
                result.add_error(
                    line,
                    format!(
                        "{} hint {} is not satisfied by {} {}",
                        front_label,
                        hint,
                        axis.label(),
                        line
                    ),
                );
                return;
            }
        }

        if let Some(hint) = hint_value(back, markers) {
            let reversed: String = row.chars().rev().collect();
            if !left_to_right_check(&reversed, hint) {
                result.add_error(
                    line,
                    format!(
                        "{} hint {} is not satisfied by {} {}",
                        back_label,
                        hint,
                        axis.label(),
                        line
                    ),
                );
                return;
            }
        }
    }
}

/// Numeric value of an edge character, or None for the filler marker
fn hint_value(edge: Option<char>, markers: &Markers) -> Option<u32> {
    edge.filter(|&c| c != markers.filler)?.to_digit(10)
}

fn is_height_digit(c: char) -> bool {
    c.is_ascii_digit() && c != '0'
}
