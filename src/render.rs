//! Text rendering of an assignment onto the grid.

use crate::{
    puzzle::Puzzle,
    solver::engine::Assignment,
};

/// Renders the grid with the assignment's letters placed along each
/// variable's cells. Blocked cells render as `█`, unfilled fillable cells as
/// a space, so partial assignments render too.
pub fn render(puzzle: &Puzzle, assignment: &Assignment) -> String {
    let mut letters = vec![vec![None; puzzle.width()]; puzzle.height()];
    for (var, word) in assignment {
        for ((row, col), letter) in var.cells().zip(word.chars()) {
            letters[row][col] = Some(letter);
        }
    }

    let mut out = String::new();
    for row in 0..puzzle.height() {
        for col in 0..puzzle.width() {
            if puzzle.is_fillable(row, col) {
                out.push(letters[row][col].unwrap_or(' '));
            } else {
                out.push('█');
            }
        }
        out.push('\n');
    }
    out
}
