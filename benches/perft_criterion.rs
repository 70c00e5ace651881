use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use arcade_chess::move_generation::perft::{perft_legal, perft_multi_threaded};
use arcade_chess::{Board, CastleSide, CastlingRights, Color, GameState, Piece, Position};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    placement: &'static str,
    side_to_move: Color,
    castling: &'static str,
    expected_nodes: &'static [u64],
}

const STARTPOS_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        placement: STARTPOS_PLACEMENT,
        side_to_move: Color::White,
        castling: "KQkq",
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "position_2",
        placement: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        side_to_move: Color::White,
        castling: "KQkq",
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "position_3",
        placement: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        side_to_move: Color::White,
        castling: "-",
        expected_nodes: &[14, 191, 2812],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        placement: STARTPOS_PLACEMENT,
        side_to_move: Color::White,
        castling: "KQkq",
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "position_2",
        placement: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        side_to_move: Color::White,
        castling: "KQkq",
        expected_nodes: &[48, 2039, 97_862],
    },
    BenchCase {
        name: "position_3",
        placement: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        side_to_move: Color::White,
        castling: "-",
        expected_nodes: &[14, 191, 2812, 43_238],
    },
    BenchCase {
        name: "position_4",
        placement: "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R",
        side_to_move: Color::Black,
        castling: "KQ",
        expected_nodes: &[6, 264, 9467, 422_333],
    },
];

fn suite_name() -> &'static str {
    match std::env::var("ARCADE_CHESS_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [BenchCase] {
    match suite_name() {
        "standard" => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

/// Builds a position from the placement field of a FEN record.
fn game_from_case(case: &BenchCase) -> GameState {
    let mut board = Board::empty();
    for (i, rank) in case.placement.split('/').enumerate() {
        let row = 7 - i as u8;
        let mut col = 0u8;
        for ch in rank.chars() {
            if let Some(skip) = ch.to_digit(10) {
                col += skip as u8;
                continue;
            }
            let piece = Piece::from_symbol(ch).expect("benchmark placement should use piece letters");
            board.set(Position::new(row, col), Some(piece));
            col += 1;
        }
    }

    let mut rights = CastlingRights::full();
    for (letter, color, side) in [
        ('K', Color::White, CastleSide::King),
        ('Q', Color::White, CastleSide::Queen),
        ('k', Color::Black, CastleSide::King),
        ('q', Color::Black, CastleSide::Queen),
    ] {
        if !case.castling.contains(letter) {
            rights = rights.without(color, side);
        }
    }

    GameState::from_board(board, case.side_to_move).with_castling_rights(rights)
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("perft_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let game = game_from_case(case);

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft_legal(&game, depth);
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft_legal(black_box(&game), black_box(depth));
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_perft_threaded(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("perft_threaded_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let game = game_from_case(case);
        let Some((&expected_nodes, _)) = case.expected_nodes.split_last() else {
            continue;
        };
        let depth = case.expected_nodes.len() as u8;

        group.throughput(Throughput::Elements(expected_nodes));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
            &expected_nodes,
            |b, expected| {
                b.iter(|| {
                    let count = perft_multi_threaded(black_box(&game), black_box(depth));
                    assert_eq!(count.nodes as u64, *expected);
                    black_box(count.nodes)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft, bench_perft_threaded);
criterion_main!(perft_benches);
