//! The domain store: per-variable candidate word sets with cheap
//! snapshot/restore.
//!
//! Domains are held in persistent (structurally shared) `im` collections, so
//! a [`DomainSnapshot`] is an O(1) clone of the map root and restoring one is
//! a pointer swap. The search engine takes a snapshot before propagating each
//! tentative assignment and restores it when the branch fails; pruning during
//! propagation is not otherwise reversible, since a word removed by AC-3 may
//! legitimately belong to the domain once the assignment is retracted.

use std::collections::HashSet;

use crate::puzzle::{Puzzle, Variable};

/// The mutable set of still-candidate words for every variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domains {
    words: im::HashMap<Variable, im::HashSet<String>>,
}

/// A point-in-time capture of the full domain state.
#[derive(Debug, Clone)]
pub struct DomainSnapshot(im::HashMap<Variable, im::HashSet<String>>);

impl Domains {
    /// Seeds every variable's domain with the entire vocabulary. Length
    /// filtering is left to node consistency.
    pub fn init(puzzle: &Puzzle, vocabulary: &HashSet<String>) -> Self {
        let all: im::HashSet<String> = vocabulary.iter().cloned().collect();
        let words = puzzle
            .variables()
            .iter()
            .map(|&var| (var, all.clone()))
            .collect();
        Self { words }
    }

    /// The candidate words still possible for `var`.
    ///
    /// Panics if `var` does not belong to the puzzle this store was
    /// initialized from.
    pub fn candidates(&self, var: Variable) -> &im::HashSet<String> {
        self.words
            .get(&var)
            .unwrap_or_else(|| panic!("unknown variable {var}"))
    }

    /// Replaces the domain of `var` wholesale.
    pub fn set(&mut self, var: Variable, candidates: im::HashSet<String>) {
        self.words.insert(var, candidates);
    }

    /// Narrows the domain of `var` to the single chosen word.
    pub fn assign(&mut self, var: Variable, word: &str) {
        self.words.insert(var, im::hashset! {word.to_string()});
    }

    pub fn len(&self, var: Variable) -> usize {
        self.candidates(var).len()
    }

    pub fn is_empty(&self, var: Variable) -> bool {
        self.candidates(var).is_empty()
    }

    /// True if some variable has no candidates left.
    pub fn any_empty(&self) -> bool {
        self.words.values().any(|candidates| candidates.is_empty())
    }

    pub fn snapshot(&self) -> DomainSnapshot {
        DomainSnapshot(self.words.clone())
    }

    pub fn restore(&mut self, snapshot: DomainSnapshot) {
        self.words = snapshot.0;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Domains;
    use crate::puzzle::{Direction, Puzzle, Variable};

    fn vocab(words: &[&str]) -> std::collections::HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn init_seeds_every_variable_with_the_full_vocabulary() {
        let puzzle = Puzzle::parse("___\n###\n___").unwrap();
        let domains = Domains::init(&puzzle, &vocab(&["cat", "dogs"]));

        for &var in puzzle.variables() {
            assert_eq!(domains.len(var), 2);
        }
    }

    #[test]
    fn restore_reverts_pruning_and_assignment() {
        let puzzle = Puzzle::parse("___").unwrap();
        let var = Variable::new(0, 0, Direction::Across, 3);
        let mut domains = Domains::init(&puzzle, &vocab(&["cat", "dog", "ant"]));

        let snapshot = domains.snapshot();
        domains.assign(var, "cat");
        assert_eq!(domains.len(var), 1);

        domains.restore(snapshot);
        assert_eq!(domains.len(var), 3);
    }

    #[test]
    fn any_empty_flags_an_emptied_domain() {
        let puzzle = Puzzle::parse("___").unwrap();
        let var = Variable::new(0, 0, Direction::Across, 3);
        let mut domains = Domains::init(&puzzle, &vocab(&["cat"]));

        assert!(!domains.any_empty());
        domains.set(var, im::HashSet::new());
        assert!(domains.any_empty());
        assert!(domains.is_empty(var));
    }
}
