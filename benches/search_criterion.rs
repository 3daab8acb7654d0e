use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use grid_chess::{
    iterative_deepening_search, Board, Color, GameState, SearchAlgorithm, SearchConfig,
    SearchContext, StandardScorer,
};

#[derive(Clone, Copy)]
struct SearchCase {
    name: &'static str,
    rows: [&'static str; 8],
    state: fn() -> GameState,
}

const CASES: &[SearchCase] = &[
    SearchCase {
        name: "startpos",
        rows: [
            "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
            "RNBQKBNR",
        ],
        state: GameState::new_game,
    },
    SearchCase {
        name: "tactical",
        rows: [
            "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
            "R...K..R",
        ],
        state: GameState::new_game,
    },
    SearchCase {
        name: "end_kpk",
        rows: [
            "........", "........", "........", "........", "........", "....k...", "....P...",
            "....K...",
        ],
        state: white_bare,
    },
];

fn white_bare() -> GameState {
    GameState::bare(Color::White)
}

fn bench_search(c: &mut Criterion) {
    let depth = std::env::var("GRID_SEARCH_DEPTH")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(3)
        .max(1);

    let mut group = c.benchmark_group("fixed_depth_search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in CASES {
        let board = Board::from_rows(&case.rows).expect("benchmark board should parse");
        let state = (case.state)();

        for algorithm in [SearchAlgorithm::AlphaBeta, SearchAlgorithm::PrincipalVariation] {
            let config = SearchConfig {
                algorithm,
                hash_mb: 8,
                ..SearchConfig::with_depth(depth)
            };
            let id = format!("{}_{:?}_d{}", case.name, algorithm, depth);

            group.bench_function(BenchmarkId::from_parameter(id), |b| {
                b.iter(|| {
                    let mut ctx = SearchContext::with_hash_mb(config.hash_mb);
                    let result = iterative_deepening_search(
                        black_box(&board),
                        black_box(&state),
                        &StandardScorer,
                        config,
                        &mut ctx,
                    );
                    black_box(result.best_move)
                });
            });
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
