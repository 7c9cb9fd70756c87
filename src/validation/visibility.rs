//! Visibility Counter
//!
//! The one genuinely algorithmic piece of the checker: counting how many
//! buildings can be seen from one end of a line of sight, accounting for
//! occlusion by taller buildings.

use crate::board::interior_span;

/// Count the buildings visible from the front of `heights`.
///
/// A building is visible iff no earlier building is at least as tall -
/// a tie blocks the line of sight just like a strictly taller building.
pub fn visible_count(heights: &[u32]) -> usize {
    heights
        .iter()
        .enumerate()
        .filter(|&(i, &height)| heights[..i].iter().all(|&front| front < height))
        .count()
}

/// Check a full board line against its left-edge hint.
///
/// `line` includes both edge characters; only the interior span is
/// counted. The hint is satisfied by an exact match of the visible count,
/// nothing else. Heights are compared numerically after parsing, never by
/// character order. A non-digit interior cell fails the check outright;
/// the validation engine reports malformed boards before this runs.
///
/// Checking from the right edge is the same procedure on the reversed
/// line.
pub fn left_to_right_check(line: &str, hint: u32) -> bool {
    let interior = interior_span(line);

    let mut heights = Vec::with_capacity(interior.len());
    for cell in interior.chars() {
        match cell.to_digit(10) {
            Some(height) => heights.push(height),
            None => return false,
        }
    }

    visible_count(&heights) as u32 == hint
}
