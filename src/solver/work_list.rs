use std::collections::{HashSet, VecDeque};

use crate::puzzle::Variable;

/// A FIFO queue of arcs `(x, y)` awaiting revision.
///
/// An arc already queued is not enqueued again; revising the same arc twice
/// before anything changed is redundant, and the fixpoint reached is the same
/// either way.
pub struct WorkList {
    queue: VecDeque<(Variable, Variable)>,
    queue_members: HashSet<(Variable, Variable)>,
}

impl WorkList {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queue_members: HashSet::new(),
        }
    }

    pub fn push_back(&mut self, x: Variable, y: Variable) {
        if self.queue_members.insert((x, y)) {
            self.queue.push_back((x, y));
        }
    }

    pub fn pop_front(&mut self) -> Option<(Variable, Variable)> {
        let arc = self.queue.pop_front()?;
        self.queue_members.remove(&arc);
        Some(arc)
    }
}

impl Default for WorkList {
    fn default() -> Self {
        Self::new()
    }
}
