//! Board Grid
//!
//! Clean, minimal types representing a loaded Skyscrapers board.
//! No validation logic or I/O concerns - pure data representation.

/// A loaded Skyscrapers board.
///
/// Rows are stored verbatim as read from the layout file: the first and
/// last rows carry column hints, the first and last characters of each
/// interior row carry row hints, and the cells in between are building
/// heights. The board is never mutated after construction - every check
/// is a pure read.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: Vec<String>,
}

impl Board {
    /// Create a board from pre-split rows
    pub fn from_rows(rows: Vec<String>) -> Self {
        Self { rows }
    }

    /// All rows, hint rows included
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of rows (equals the row length on a well-formed board)
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Interior rows with their 1-based line numbers.
    ///
    /// Skips the two hint rows; a board with fewer than three rows has no
    /// interior.
    pub fn interior_rows(&self) -> impl Iterator<Item = (usize, &str)> {
        let interior = if self.rows.len() < 3 {
            &[][..]
        } else {
            &self.rows[1..self.rows.len() - 1]
        };
        interior
            .iter()
            .enumerate()
            .map(|(i, row)| (i + 2, row.as_str()))
    }

    /// Build the column view: row c of the result is column c of this board.
    ///
    /// The transpose reframes columns as rows, so the row-wise checks apply
    /// unchanged to the result. Transposing twice returns the original
    /// board. Columns are byte-indexed; the validation pipeline only
    /// transposes boards it has already verified to be ASCII.
    pub fn transpose(&self) -> Board {
        let width = self.rows.first().map_or(0, |row| row.len());
        let rows = (0..width)
            .map(|col| {
                self.rows
                    .iter()
                    .filter_map(|row| row.as_bytes().get(col).copied())
                    .map(char::from)
                    .collect()
            })
            .collect();
        Board { rows }
    }
}

/// The interior span of a line: everything between the two edge positions.
///
/// Returns the empty string for lines shorter than two characters.
pub fn interior_span(line: &str) -> &str {
    let mut chars = line.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return "";
    }
    chars.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows.iter().map(|r| r.to_string()).collect())
    }

    #[test]
    fn test_interior_rows_skip_hint_rows() {
        let b = board(&["*12*", "3454", "2313", "*21*"]);

        let interior: Vec<(usize, &str)> = b.interior_rows().collect();
        assert_eq!(interior, vec![(2, "3454"), (3, "2313")]);
    }

    #[test]
    fn test_tiny_board_has_no_interior() {
        assert_eq!(board(&[]).interior_rows().count(), 0);
        assert_eq!(board(&["*"]).interior_rows().count(), 0);
        assert_eq!(board(&["*1", "1*"]).interior_rows().count(), 0);
    }

    #[test]
    fn test_transpose_reframes_columns_as_rows() {
        let b = board(&["abc", "def", "ghi"]);

        let t = b.transpose();
        assert_eq!(t.rows(), &["adg", "beh", "cfi"]);
    }

    #[test]
    fn test_transpose_round_trip() {
        let b = board(&[
            "***21**", "412453*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***",
        ]);

        assert_eq!(b.transpose().transpose(), b);
    }

    #[test]
    fn test_interior_span() {
        assert_eq!(interior_span("412453*"), "12453");
        assert_eq!(interior_span("ab"), "");
        assert_eq!(interior_span("a"), "");
        assert_eq!(interior_span(""), "");
    }
}
