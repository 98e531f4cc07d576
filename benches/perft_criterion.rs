use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_checkers::game_state::checkers_rules::STARTING_POSITION;
use plum_checkers::game_state::game_state::GameState;
use plum_checkers::move_generation::legal_move_generator::LegalMoveGenerator;
use plum_checkers::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    position: &'static str,
    max_depth: u8,
    expected_nodes: &'static [u64],
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "start",
        position: STARTING_POSITION,
        max_depth: 4,
        expected_nodes: &[7, 49],
    },
    BenchCase {
        name: "chain",
        position: "7n/8/3n4/8/1n6/r7/8/8 r",
        max_depth: 3,
        expected_nodes: &[1, 1],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "start",
        position: STARTING_POSITION,
        max_depth: 7,
        expected_nodes: &[7, 49],
    },
    BenchCase {
        name: "kings_open_board",
        position: "8/8/1N6/8/8/4R3/8/8 r",
        max_depth: 5,
        expected_nodes: &[],
    },
];

fn selected_cases() -> &'static [BenchCase] {
    match std::env::var("PLUM_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_perft(c: &mut Criterion) {
    let suite_name = match std::env::var("PLUM_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    };

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let game = GameState::from_position(case.position).expect("benchmark position should parse");

        for depth in 1..=case.max_depth {
            let warmup = perft(&LegalMoveGenerator, &game, depth).expect("perft should run");

            // Correctness guard before benchmarking.
            if let Some(expected) = case.expected_nodes.get(usize::from(depth) - 1) {
                assert_eq!(
                    warmup.nodes as u64, *expected,
                    "node mismatch in warmup for {} depth {}",
                    case.name, depth
                );
            }

            let nodes = warmup.nodes as u64;
            group.throughput(Throughput::Elements(nodes));
            let bench_name = format!("{}_d{}", case.name, depth);
            let bench_game = game.clone();

            group.bench_with_input(BenchmarkId::from_parameter(bench_name), &nodes, |b, expected| {
                b.iter(|| {
                    let count = perft(&LegalMoveGenerator, black_box(&bench_game), black_box(depth))
                        .expect("perft benchmark run should succeed");
                    assert_eq!(count.nodes as u64, *expected);
                    black_box(count.nodes)
                });
            });
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
