use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use grid_chess::move_generation::perft::perft;
use grid_chess::{Board, Color, GameState, Position};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    rows: [&'static str; 8],
    white_castling: bool,
    expected_nodes: &'static [u64],
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        rows: [
            "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
            "RNBQKBNR",
        ],
        white_castling: true,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "position_2",
        rows: [
            "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
            "R...K..R",
        ],
        white_castling: true,
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "position_3",
        rows: [
            "........", "..p.....", "...p....", "KP.....r", ".R...p.k", "........", "....P.P.",
            "........",
        ],
        white_castling: false,
        expected_nodes: &[14, 191, 2812],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        rows: [
            "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
            "RNBQKBNR",
        ],
        white_castling: true,
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "position_2",
        rows: [
            "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
            "R...K..R",
        ],
        white_castling: true,
        expected_nodes: &[48, 2039, 97_862],
    },
    BenchCase {
        name: "position_3",
        rows: [
            "........", "..p.....", "...p....", "KP.....r", ".R...p.k", "........", "....P.P.",
            "........",
        ],
        white_castling: false,
        expected_nodes: &[14, 191, 2812, 43_238],
    },
];

fn selected_cases() -> &'static [BenchCase] {
    match std::env::var("GRID_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn case_position(case: &BenchCase) -> Position {
    let board = Board::from_rows(&case.rows).expect("benchmark board should parse");
    let state = if case.white_castling {
        GameState::new_game()
    } else {
        GameState::bare(Color::White)
    };
    Position::new(board, state)
}

fn bench_perft(c: &mut Criterion) {
    let suite_name = match std::env::var("GRID_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    };

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let position = case_position(case);

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            assert_eq!(
                perft(&position, depth),
                *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name,
                depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let nodes = perft(black_box(&position), black_box(depth));
                        assert_eq!(nodes, *expected);
                        black_box(nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
