//! The search engine: backtracking over partial assignments.
//!
//! Variables are chosen by minimum remaining values, then highest degree;
//! candidate words are tried least-constraining first. After every tentative
//! assignment the chosen variable's domain is narrowed to the chosen word and
//! full arc consistency re-runs, pruning the subtree before recursion. Every
//! failing branch restores the domain snapshot and removes its assignment
//! entry before control returns to the parent.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    puzzle::{Puzzle, Variable},
    solver::{
        consistency::{ac3, enforce_node_consistency, supports},
        domains::Domains,
        stats::SearchStats,
    },
};

/// A partial mapping from variables to chosen words. Complete when every
/// variable of the puzzle has an entry.
pub type Assignment = HashMap<Variable, String>;

/// Whether an assignment is consistent: all words pairwise distinct, each
/// word's length matching its variable, and characters agreeing at every
/// crossing between assigned variables.
pub fn consistent(assignment: &Assignment, puzzle: &Puzzle) -> bool {
    let mut seen = HashSet::new();
    for (&var, word) in assignment {
        if !seen.insert(word.as_str()) {
            return false;
        }
        if word.len() != var.length {
            return false;
        }
        for &neighbor in puzzle.neighbors(var) {
            if let Some(other) = assignment.get(&neighbor) {
                let (i, j) = puzzle
                    .overlap(var, neighbor)
                    .expect("neighboring variables cross");
                if !supports(word, i, other, j) {
                    return false;
                }
            }
        }
    }
    true
}

/// A backtracking solver with an optional cooperative step budget.
pub struct Solver {
    step_limit: Option<u64>,
}

impl Solver {
    pub fn new() -> Self {
        Self { step_limit: None }
    }

    /// Bounds the search at `limit` search-tree nodes; exceeding the bound
    /// surfaces as [`Error::StepLimitExceeded`]. Worst-case search is
    /// exponential in the number of variables, so long-running callers
    /// should set this.
    pub fn with_step_limit(limit: u64) -> Self {
        Self {
            step_limit: Some(limit),
        }
    }

    /// Fills the puzzle from the vocabulary.
    ///
    /// Enforces node consistency, establishes arc consistency over the full
    /// arc set, then searches. `Ok((None, _))` is the definitive no-solution
    /// outcome; errors are reserved for budget exhaustion.
    pub fn solve(
        &self,
        puzzle: &Puzzle,
        vocabulary: &HashSet<String>,
    ) -> Result<(Option<Assignment>, SearchStats)> {
        let mut stats = SearchStats::default();
        let mut domains = Domains::init(puzzle, vocabulary);

        debug!(
            variables = puzzle.variables().len(),
            words = vocabulary.len(),
            "starting solve"
        );

        enforce_node_consistency(&mut domains, puzzle);
        if !ac3(&mut domains, puzzle, None, &mut stats) {
            return Ok((None, stats));
        }

        let mut assignment = Assignment::new();
        let found = self.backtrack(&mut assignment, &mut domains, puzzle, &mut stats)?;
        Ok((found, stats))
    }

    /// Picks the unassigned variable with the fewest remaining candidates;
    /// ties go to the variable with the most neighbors, then to the smallest
    /// variable in the fixed enumeration order.
    pub fn select_unassigned_variable(
        &self,
        domains: &Domains,
        assignment: &Assignment,
        puzzle: &Puzzle,
    ) -> Option<Variable> {
        puzzle
            .variables()
            .iter()
            .copied()
            .filter(|var| !assignment.contains_key(var))
            .min_by_key(|&var| (domains.len(var), std::cmp::Reverse(puzzle.degree(var))))
    }

    /// Orders the candidates of `var` least-constraining first.
    ///
    /// A candidate's cost is the number of options it would rule out: one
    /// for each other unassigned variable whose domain contains the same
    /// word (assigning it reserves the word), plus one for each candidate of
    /// each unassigned neighbor that disagrees at the crossing. Cost ties
    /// break lexicographically.
    pub fn order_domain_values(
        &self,
        var: Variable,
        domains: &Domains,
        assignment: &Assignment,
        puzzle: &Puzzle,
    ) -> Vec<String> {
        let unassigned_neighbors: Vec<Variable> = puzzle
            .neighbors(var)
            .iter()
            .copied()
            .filter(|neighbor| !assignment.contains_key(neighbor))
            .collect();

        let mut scored: Vec<(usize, String)> = domains
            .candidates(var)
            .iter()
            .map(|word| {
                let mut cost = 0;
                for &other in puzzle.variables() {
                    if other == var || assignment.contains_key(&other) {
                        continue;
                    }
                    if domains.candidates(other).contains(word) {
                        cost += 1;
                    }
                }
                for &neighbor in &unassigned_neighbors {
                    let (i, j) = puzzle
                        .overlap(var, neighbor)
                        .expect("neighboring variables cross");
                    cost += domains
                        .candidates(neighbor)
                        .iter()
                        .filter(|other| !supports(word, i, other, j))
                        .count();
                }
                (cost, word.clone())
            })
            .collect();

        scored.sort();
        scored.into_iter().map(|(_, word)| word).collect()
    }

    /// Depth-first search for a complete consistent assignment.
    ///
    /// Returns `Ok(None)` when no candidate of the selected variable leads
    /// to a solution (a dead end for the caller's own loop to handle).
    pub fn backtrack(
        &self,
        assignment: &mut Assignment,
        domains: &mut Domains,
        puzzle: &Puzzle,
        stats: &mut SearchStats,
    ) -> Result<Option<Assignment>> {
        if assignment.len() == puzzle.variables().len() {
            return Ok(Some(assignment.clone()));
        }

        stats.nodes_visited += 1;
        if let Some(limit) = self.step_limit {
            if stats.nodes_visited > limit {
                return Err(Error::StepLimitExceeded(limit));
            }
        }

        let Some(var) = self.select_unassigned_variable(domains, assignment, puzzle) else {
            return Ok(Some(assignment.clone()));
        };

        for word in self.order_domain_values(var, domains, assignment, puzzle) {
            trace!(%var, %word, "trying candidate");
            assignment.insert(var, word.clone());
            if !consistent(assignment, puzzle) {
                assignment.remove(&var);
                continue;
            }

            let snapshot = domains.snapshot();
            domains.assign(var, &word);
            if ac3(domains, puzzle, None, stats) {
                if let Some(found) = self.backtrack(assignment, domains, puzzle, stats)? {
                    return Ok(Some(found));
                }
            }
            domains.restore(snapshot);
            assignment.remove(&var);
            stats.backtracks += 1;
        }

        Ok(None)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
