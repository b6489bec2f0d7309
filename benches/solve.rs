use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use crossfill::{puzzle::Puzzle, solver::engine::Solver};

// A 5x6 grid with four interlocking slots.
const STRUCTURE: &str = "#___#_\n#_##_#\n#_##_#\n#_##_#\n#____#";

const WORDS: &[&str] = &[
    "ONE", "TWO", "SIX", "TEN", "FOUR", "FIVE", "NINE", "THREE", "SEVEN", "EIGHT", "TWELVE",
    "TWENTY", "THIRTY", "FORTY", "FIFTY", "SIXTY",
];

fn vocabulary() -> HashSet<String> {
    WORDS.iter().map(|w| w.to_string()).collect()
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("puzzle_build", |b| {
        b.iter(|| Puzzle::parse(black_box(STRUCTURE)).unwrap())
    });
}

fn bench_solve(c: &mut Criterion) {
    let puzzle = Puzzle::parse(STRUCTURE).unwrap();
    let vocabulary = vocabulary();
    let solver = Solver::new();

    c.bench_function("solve", |b| {
        b.iter(|| {
            let (assignment, _stats) = solver
                .solve(black_box(&puzzle), black_box(&vocabulary))
                .unwrap();
            assignment
        })
    });
}

criterion_group!(benches, bench_build, bench_solve);
criterion_main!(benches);
