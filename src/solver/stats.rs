use prettytable::{Cell, Row, Table};

/// Counters accumulated over one call to [`Solver::solve`].
///
/// [`Solver::solve`]: crate::solver::engine::Solver::solve
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Search-tree nodes entered by `backtrack`.
    pub nodes_visited: u64,
    /// Candidate values abandoned after a failed branch.
    pub backtracks: u64,
    /// Arcs popped off the AC-3 worklist and revised.
    pub revise_calls: u64,
    /// Revisions that removed at least one word.
    pub prunings: u64,
    /// Total words removed from domains by revisions.
    pub words_pruned: u64,
}

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Count")]));

    let rows: [(&str, u64); 5] = [
        ("Nodes visited", stats.nodes_visited),
        ("Backtracks", stats.backtracks),
        ("Revise calls", stats.revise_calls),
        ("Prunings", stats.prunings),
        ("Words pruned", stats.words_pruned),
    ];
    for (name, count) in rows {
        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(&count.to_string()),
        ]));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::{render_stats_table, SearchStats};

    #[test]
    fn table_lists_every_counter() {
        let stats = SearchStats {
            nodes_visited: 7,
            backtracks: 2,
            revise_calls: 41,
            prunings: 9,
            words_pruned: 13,
        };

        let rendered = render_stats_table(&stats);
        assert!(rendered.contains("Nodes visited"));
        assert!(rendered.contains("41"));
        assert!(rendered.contains("13"));
    }
}
