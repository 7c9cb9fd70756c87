//! Board Loader
//!
//! One-time read of a board layout file into rows.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::grid::Board;

/// Read a board layout file into a [`Board`].
///
/// One row per line. The empty artifact a final line terminator would
/// produce is discarded; every other row is kept verbatim, hint characters
/// and markers included. I/O failures propagate to the caller with the
/// offending path attached.
pub fn load_board(path: impl AsRef<Path>) -> Result<Board> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read board file: {}", path.display()))?;

    let rows: Vec<String> = content.lines().map(str::to_string).collect();
    log::debug!("loaded {} rows from '{}'", rows.len(), path.display());

    Ok(Board::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_board(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write board");
        file
    }

    #[test]
    fn test_load_board_drops_trailing_terminator_artifact() {
        let file = write_board("***21**\n412453*\n423145*\n*543215\n*35214*\n*41532*\n*2*1***\n");

        let board = load_board(file.path()).expect("load board");

        assert_eq!(board.size(), 7);
        assert_eq!(board.rows()[0], "***21**");
        assert_eq!(board.rows()[6], "*2*1***");
    }

    #[test]
    fn test_load_board_without_final_terminator() {
        let file = write_board("*12*\n3454\n2313\n*21*");

        let board = load_board(file.path()).expect("load board");
        assert_eq!(board.size(), 4);
        assert_eq!(board.rows()[3], "*21*");
    }

    #[test]
    fn test_load_board_keeps_rows_verbatim() {
        let file = write_board("*?5*\n");

        let board = load_board(file.path()).expect("load board");
        assert_eq!(board.rows(), &["*?5*"]);
    }

    #[test]
    fn test_load_board_missing_file_is_an_error() {
        let result = load_board("no/such/board.txt");

        let err = result.expect_err("missing file should fail");
        assert!(err.to_string().contains("no/such/board.txt"));
    }
}
