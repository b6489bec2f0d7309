//! The consistency engine: node consistency and AC-3 arc consistency.
//!
//! Node consistency enforces the unary length constraint; [`ac3`] drives
//! [`revise`] to a fixpoint over a worklist of arcs, so that every remaining
//! candidate of a variable has a supporting candidate in every crossing
//! variable's domain. An emptied domain here is a signal (no solution down
//! this branch), never a fault.

use tracing::{debug, trace};

use crate::{
    puzzle::{Puzzle, Variable},
    solver::{domains::Domains, stats::SearchStats, work_list::WorkList},
};

/// Removes from every variable's domain the words whose length differs from
/// the variable's length. In-place and idempotent.
pub fn enforce_node_consistency(domains: &mut Domains, puzzle: &Puzzle) {
    for &var in puzzle.variables() {
        let candidates = domains.candidates(var);
        if candidates.iter().any(|w| w.len() != var.length) {
            let kept = candidates
                .iter()
                .filter(|w| w.len() == var.length)
                .cloned()
                .collect();
            domains.set(var, kept);
        }
    }
}

/// True if `x_word` and `y_word` agree at the crossing offsets. Offsets past
/// the end of a word (possible before node consistency has run) never match.
pub(crate) fn supports(x_word: &str, i: usize, y_word: &str, j: usize) -> bool {
    match (x_word.as_bytes().get(i), y_word.as_bytes().get(j)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Makes `x` arc-consistent with `y`: removes from `domains[x]` every word
/// with no supporting word in `domains[y]` at the crossing offsets.
///
/// Returns whether anything was removed. A no-op (returning `false`) when
/// `x` and `y` do not cross.
pub fn revise(domains: &mut Domains, x: Variable, y: Variable, puzzle: &Puzzle) -> bool {
    let Some((i, j)) = puzzle.overlap(x, y) else {
        return false;
    };

    let x_words = domains.candidates(x);
    let y_words = domains.candidates(y);
    let kept: im::HashSet<String> = x_words
        .iter()
        .filter(|x_word| y_words.iter().any(|y_word| supports(x_word, i, y_word, j)))
        .cloned()
        .collect();

    if kept.len() == x_words.len() {
        return false;
    }
    trace!(%x, %y, removed = x_words.len() - kept.len(), "revised domain");
    domains.set(x, kept);
    true
}

/// Enforces arc consistency with the AC-3 worklist algorithm.
///
/// If `arcs` is `None`, the worklist starts with every ordered pair `(x, y)`
/// where `y` crosses `x`; otherwise it starts with the given arcs. Whenever a
/// revision shrinks `domains[x]`, the arcs `(z, x)` for every other neighbor
/// `z` of `x` are re-enqueued.
///
/// Returns `false` as soon as any domain is empty — including one already
/// empty on entry, which mid-search callers rely on — and `true` once the
/// worklist drains with all domains non-empty.
pub fn ac3(
    domains: &mut Domains,
    puzzle: &Puzzle,
    arcs: Option<&[(Variable, Variable)]>,
    stats: &mut SearchStats,
) -> bool {
    if domains.any_empty() {
        return false;
    }

    let mut worklist = WorkList::new();
    match arcs {
        Some(arcs) => {
            for &(x, y) in arcs {
                worklist.push_back(x, y);
            }
        }
        None => {
            for &x in puzzle.variables() {
                for &y in puzzle.neighbors(x) {
                    worklist.push_back(x, y);
                }
            }
        }
    }

    while let Some((x, y)) = worklist.pop_front() {
        stats.revise_calls += 1;
        let before = domains.len(x);
        if revise(domains, x, y, puzzle) {
            stats.prunings += 1;
            stats.words_pruned += (before - domains.len(x)) as u64;
            if domains.is_empty(x) {
                debug!(%x, "domain emptied, arc consistency failed");
                return false;
            }
            for &z in puzzle.neighbors(x) {
                if z != y {
                    worklist.push_back(z, x);
                }
            }
        }
    }

    debug!("arc consistency fixpoint reached");
    true
}
