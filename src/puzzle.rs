//! The puzzle model: grid geometry, variables, and the overlap relation.
//!
//! A [`Puzzle`] is built once from a matrix of fillable/blocked cells and is
//! never mutated afterwards. Variables are the maximal runs of fillable cells
//! (length ≥ 2) in each direction; two variables are neighbors iff they share
//! a grid cell, and the overlap records at which intra-word offsets the
//! shared cell sits.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Direction {
    Across,
    Down,
}

/// A slot in the grid to which a word is assigned: a maximal run of fillable
/// cells in one direction.
///
/// Two variables are equal iff all four fields match. The derived `Ord` over
/// `(row, col, direction, length)` is the fixed enumeration order used for
/// every deterministic tie-break in the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Variable {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Variable {
    pub fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self {
            row,
            col,
            direction,
            length,
        }
    }

    /// The grid cells covered by this variable, in word order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (row, col) = (self.row, self.col);
        let direction = self.direction;
        (0..self.length).map(move |k| match direction {
            Direction::Across => (row, col + k),
            Direction::Down => (row + k, col),
        })
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dir = match self.direction {
            Direction::Across => "across",
            Direction::Down => "down",
        };
        write!(f, "({}, {}) {} [{}]", self.row, self.col, dir, self.length)
    }
}

/// An immutable description of the grid: dimensions, fillable cells, the
/// derived variables, and the overlap/neighbor relations between them.
#[derive(Debug, Clone)]
pub struct Puzzle {
    height: usize,
    width: usize,
    fillable: Vec<Vec<bool>>,
    variables: Vec<Variable>,
    overlaps: HashMap<(Variable, Variable), (usize, usize)>,
    neighbors: HashMap<Variable, Vec<Variable>>,
}

impl Puzzle {
    /// Builds a puzzle from a matrix of fillable (`true`) and blocked
    /// (`false`) cells.
    ///
    /// Fails with [`Error::MalformedStructure`] if the matrix is empty,
    /// ragged, or contains no fillable cell. A structure that yields zero
    /// variables (every run has length 1) is still a valid puzzle; its
    /// solution is the empty assignment.
    pub fn new(fillable: Vec<Vec<bool>>) -> Result<Self> {
        let height = fillable.len();
        if height == 0 {
            return Err(Error::MalformedStructure("structure is empty".into()));
        }
        let width = fillable[0].len();
        if width == 0 {
            return Err(Error::MalformedStructure("structure has empty rows".into()));
        }
        if let Some(i) = fillable.iter().position(|row| row.len() != width) {
            return Err(Error::MalformedStructure(format!(
                "row {} has {} cells, expected {}",
                i,
                fillable[i].len(),
                width
            )));
        }
        if !fillable.iter().flatten().any(|&cell| cell) {
            return Err(Error::MalformedStructure(
                "structure has no fillable cells".into(),
            ));
        }

        let mut variables = scan_runs(&fillable, Direction::Across);
        variables.extend(scan_runs(&fillable, Direction::Down));
        variables.sort();

        // Cross-direction variables share at most one cell (runs are
        // maximal, so same-direction variables never touch).
        let mut overlaps = HashMap::new();
        let mut neighbors: HashMap<Variable, Vec<Variable>> = HashMap::new();
        for &x in &variables {
            neighbors.entry(x).or_default();
            let x_cells: HashMap<(usize, usize), usize> =
                x.cells().enumerate().map(|(k, cell)| (cell, k)).collect();
            for &y in &variables {
                if x == y {
                    continue;
                }
                if let Some((j, &i)) = y
                    .cells()
                    .enumerate()
                    .find_map(|(j, cell)| x_cells.get(&cell).map(|i| (j, i)))
                {
                    overlaps.insert((x, y), (i, j));
                    neighbors.entry(x).or_default().push(y);
                }
            }
        }
        for list in neighbors.values_mut() {
            list.sort();
        }

        Ok(Self {
            height,
            width,
            fillable,
            variables,
            overlaps,
            neighbors,
        })
    }

    /// Parses the textual structure format: one line per row, `_` marking a
    /// fillable cell and any other character a blocked one. Short lines are
    /// padded with blocked cells.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let fillable = lines
            .iter()
            .map(|line| {
                let mut row: Vec<bool> = line.chars().map(|c| c == '_').collect();
                row.resize(width, false);
                row
            })
            .collect();
        Self::new(fillable)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        self.fillable[row][col]
    }

    /// All variables, in the fixed enumeration order (sorted by
    /// `(row, col, direction, length)`).
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The intra-word offsets `(i, j)` at which `x` and `y` cross:
    /// `x`'s `i`-th character shares a cell with `y`'s `j`-th character.
    /// `None` if the variables do not cross.
    pub fn overlap(&self, x: Variable, y: Variable) -> Option<(usize, usize)> {
        self.overlaps.get(&(x, y)).copied()
    }

    /// All variables crossing `x`, sorted.
    pub fn neighbors(&self, x: Variable) -> &[Variable] {
        self.neighbors.get(&x).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The number of variables crossing `x`.
    pub fn degree(&self, x: Variable) -> usize {
        self.neighbors(x).len()
    }
}

/// Scans the matrix for maximal runs of fillable cells in one direction.
/// Runs of length 1 are not variables.
fn scan_runs(fillable: &[Vec<bool>], direction: Direction) -> Vec<Variable> {
    let height = fillable.len();
    let width = fillable[0].len();
    let (outer, inner) = match direction {
        Direction::Across => (height, width),
        Direction::Down => (width, height),
    };

    let mut variables = Vec::new();
    for a in 0..outer {
        let mut start = None;
        let mut length = 0;
        for b in 0..=inner {
            let cell = if b < inner {
                match direction {
                    Direction::Across => fillable[a][b],
                    Direction::Down => fillable[b][a],
                }
            } else {
                false // sentinel to flush a run ending at the edge
            };
            if cell {
                if start.is_none() {
                    start = Some(b);
                }
                length += 1;
            } else {
                if let Some(s) = start {
                    if length >= 2 {
                        let (row, col) = match direction {
                            Direction::Across => (a, s),
                            Direction::Down => (s, a),
                        };
                        variables.push(Variable::new(row, col, direction, length));
                    }
                }
                start = None;
                length = 0;
            }
        }
    }
    variables
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Direction, Puzzle, Variable};
    use crate::error::Error;

    #[test]
    fn parse_derives_maximal_runs_in_both_directions() {
        let puzzle = Puzzle::parse("#_#\n#_#\n___\n#_#").unwrap();

        assert_eq!(puzzle.height(), 4);
        assert_eq!(puzzle.width(), 3);
        assert_eq!(
            puzzle.variables(),
            &[
                Variable::new(0, 1, Direction::Down, 4),
                Variable::new(2, 0, Direction::Across, 3),
            ]
        );
    }

    #[test]
    fn single_cell_runs_are_not_variables() {
        let puzzle = Puzzle::parse("_").unwrap();
        assert!(puzzle.variables().is_empty());

        // A plus-shape whose arms are all single cells: only the full
        // row/column runs survive.
        let puzzle = Puzzle::parse("#_#\n___\n#_#").unwrap();
        assert_eq!(
            puzzle.variables(),
            &[
                Variable::new(0, 1, Direction::Down, 3),
                Variable::new(1, 0, Direction::Across, 3),
            ]
        );
    }

    #[test]
    fn overlap_offsets_locate_the_shared_cell_in_each_word() {
        let puzzle = Puzzle::parse("#_#\n#_#\n___\n#_#").unwrap();
        let down = Variable::new(0, 1, Direction::Down, 4);
        let across = Variable::new(2, 0, Direction::Across, 3);

        assert_eq!(puzzle.overlap(across, down), Some((1, 2)));
        assert_eq!(puzzle.overlap(down, across), Some((2, 1)));
        assert_eq!(puzzle.neighbors(across), &[down]);
        assert_eq!(puzzle.neighbors(down), &[across]);
        assert_eq!(puzzle.degree(across), 1);
    }

    #[test]
    fn parallel_variables_do_not_overlap() {
        let puzzle = Puzzle::parse("___\n###\n___").unwrap();
        let top = Variable::new(0, 0, Direction::Across, 3);
        let bottom = Variable::new(2, 0, Direction::Across, 3);

        assert_eq!(puzzle.overlap(top, bottom), None);
        assert!(puzzle.neighbors(top).is_empty());
    }

    #[test]
    fn ragged_matrix_is_malformed() {
        let result = Puzzle::new(vec![vec![true, true], vec![true]]);
        assert!(matches!(result, Err(Error::MalformedStructure(_))));
    }

    #[test]
    fn empty_or_fully_blocked_structures_are_malformed() {
        assert!(matches!(
            Puzzle::new(vec![]),
            Err(Error::MalformedStructure(_))
        ));
        assert!(matches!(
            Puzzle::parse("###\n###"),
            Err(Error::MalformedStructure(_))
        ));
    }

    #[test]
    fn parse_pads_short_lines_with_blocked_cells() {
        let puzzle = Puzzle::parse("___\n_").unwrap();
        assert_eq!(puzzle.width(), 3);
        assert!(!puzzle.is_fillable(1, 2));
        assert_eq!(
            puzzle.variables(),
            &[
                Variable::new(0, 0, Direction::Across, 3),
                Variable::new(0, 0, Direction::Down, 2),
            ]
        );
    }
}
