#![cfg(feature = "std")]

//! Console helpers: coordinate parsing and board rendering.

use std::fmt;
use std::string::String;

use crate::common::{Cell, ShotOutcome};
use crate::grid::Grid;

/// Why a typed coordinate was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    Empty,
    InvalidColumn(char),
    InvalidRow(String),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::Empty => write!(f, "empty input"),
            CoordError::InvalidColumn(c) => write!(f, "invalid column '{}'", c),
            CoordError::InvalidRow(r) => write!(f, "invalid row '{}'", r),
        }
    }
}

impl std::error::Error for CoordError {}

/// Letter labelling column `col` (0 -> 'A').
pub fn column_label(col: usize) -> char {
    (b'A' + col as u8) as char
}

pub fn coord_to_string(row: usize, col: usize) -> String {
    format!("{}{}", column_label(col), row + 1)
}

/// Parse `A5`-style input into zero-based `(row, col)` for a `size` board.
///
/// The column is a single letter, case-insensitive. The row is a number in
/// `1..=size` written without leading zeros, so on the standard board the
/// only accepted shape is one letter followed by one digit. Surrounding
/// whitespace is not stripped; callers remove the line terminator.
pub fn parse_coord(input: &str, size: usize) -> Result<(usize, usize), CoordError> {
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or(CoordError::Empty)?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return Err(CoordError::InvalidColumn(col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= size {
        return Err(CoordError::InvalidColumn(col_ch));
    }
    let row_str = chars.as_str();
    let well_formed = !row_str.is_empty()
        && row_str.bytes().all(|b| b.is_ascii_digit())
        && !row_str.starts_with('0');
    if !well_formed {
        return Err(CoordError::InvalidRow(row_str.to_string()));
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| CoordError::InvalidRow(row_str.to_string()))?;
    if row > size {
        return Err(CoordError::InvalidRow(row_str.to_string()));
    }
    Ok((row - 1, col))
}

/// Re-prompt text shown for malformed coordinates.
pub fn invalid_input_message(size: usize) -> String {
    format!(
        "Invalid input. Please enter a letter (A-{}) followed by a number (1-{}).",
        column_label(size.saturating_sub(1)),
        size
    )
}

/// Draw a grid with column letters across the top and 1-based row labels.
pub fn render_board(grid: &Grid<Cell>) -> String {
    let size = grid.size();
    let mut out = String::from("  ");
    for c in 0..size {
        out.push(' ');
        out.push(column_label(c));
    }
    out.push('\n');
    for r in 0..size {
        let symbols: Vec<String> = (0..size)
            .map(|c| grid.get(r, c).map(Cell::symbol).unwrap_or('?').to_string())
            .collect();
        out.push_str(&format!("{:2} {}\n", r + 1, symbols.join(" ")));
    }
    out
}

/// Status lines printed after a shot is resolved.
pub fn outcome_message(outcome: ShotOutcome) -> &'static [&'static str] {
    match outcome {
        ShotOutcome::Hit => &["Hit!"],
        ShotOutcome::Sunk { .. } => &["Hit!", "You sunk a ship!"],
        ShotOutcome::Miss => &["Miss!"],
        ShotOutcome::Repeat => &["You've already shot at this location. Try again."],
    }
}
