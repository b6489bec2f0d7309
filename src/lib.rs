//! Crossfill fills crossword grids from a vocabulary by solving a constraint
//! satisfaction problem.
//!
//! Each maximal run of fillable cells is a [`Variable`]; its domain is the
//! set of vocabulary words not yet ruled out; crossing variables must agree
//! on the shared letter. The solver enforces node consistency (word length),
//! establishes arc consistency with AC-3, then runs backtracking search with
//! minimum-remaining-values/degree variable selection and
//! least-constraining-value ordering, re-propagating after every tentative
//! assignment.
//!
//! # Core concepts
//!
//! - **[`Puzzle`]**: the immutable grid geometry — fillable cells, derived
//!   variables, and the overlap/neighbor relations between them.
//! - **[`Domains`]**: the per-variable candidate sets, backed by persistent
//!   `im` maps so search branches snapshot and restore in O(1).
//! - **[`Solver`]**: propagation plus backtracking search, returning either a
//!   complete [`Assignment`] or a definitive no-solution report.
//!
//! The solver is fully deterministic: every heuristic tie breaks on the fixed
//! variable enumeration order or on lexicographic word order.
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use crossfill::puzzle::Puzzle;
//! use crossfill::solver::engine::Solver;
//!
//! // A length-3 across slot crossing a length-4 down slot.
//! let puzzle = Puzzle::parse("#_#\n#_#\n___\n#_#").unwrap();
//! let vocabulary: HashSet<String> = ["rat", "dog", "goat", "dogs"]
//!     .iter()
//!     .map(|w| w.to_string())
//!     .collect();
//!
//! let (assignment, _stats) = Solver::new().solve(&puzzle, &vocabulary).unwrap();
//! let assignment = assignment.expect("this puzzle is solvable");
//!
//! // Only "rat"/"goat" agree on the shared letter.
//! let filled = crossfill::render::render(&puzzle, &assignment);
//! assert_eq!(filled, "█g█\n█o█\nrat\n█t█\n");
//! ```
//!
//! [`Variable`]: puzzle::Variable
//! [`Puzzle`]: puzzle::Puzzle
//! [`Domains`]: solver::domains::Domains
//! [`Solver`]: solver::engine::Solver
//! [`Assignment`]: solver::engine::Assignment

pub mod error;
pub mod puzzle;
pub mod render;
pub mod solver;
