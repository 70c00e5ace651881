//! Move-path enumeration for validating the generator.
//!
//! Counts leaf nodes of the legal move tree to a fixed depth, along with the
//! kinds of moves that reach them. Promotions are expanded into all four
//! promotion pieces so totals line up with published perft tables.

use std::thread;

use log::debug;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move, is_promotion};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::game_status::has_any_legal_move;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Legal moves with every promotion spelled out as four distinct moves.
fn expanded_moves<G: MoveGenerator + ?Sized>(generator: &G, game_state: &GameState) -> Vec<Move> {
    let mut out = Vec::new();
    for mv in generator.all_legal_moves(game_state) {
        if is_promotion(game_state, mv) {
            out.extend(PROMOTION_KINDS.iter().map(|&kind| mv.with_promotion(kind)));
        } else {
            out.push(mv);
        }
    }
    out
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();
    perft_recurse(generator, game_state, None, depth, &mut total);
    total
}

/// Perft with the default two-phase generator.
pub fn perft_legal(game_state: &GameState, depth: u8) -> PerftCounts {
    perft(&LegalMoveGenerator, game_state, depth)
}

/// Same totals as [`perft_legal`], with one worker thread per root move.
/// Subtree counts are summed, so the order workers finish in does not matter.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth <= 1 {
        return perft_legal(game_state, depth);
    }

    let root_moves = expanded_moves(&LegalMoveGenerator, game_state);
    debug!("perft depth {depth}: spawning {} workers", root_moves.len());

    let total = thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|&mv| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    let next = apply_move(game_state, mv);
                    perft_recurse(&LegalMoveGenerator, &next, Some((game_state, mv)), depth - 1, &mut local);
                    local
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        total
    });

    debug!("perft depth {depth}: {} nodes", total.nodes);
    total
}

/// Node count below each root move, in generation order.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(Move, usize)> {
    if depth == 0 {
        return Vec::new();
    }
    expanded_moves(&LegalMoveGenerator, game_state)
        .into_iter()
        .map(|mv| {
            let next = apply_move(game_state, mv);
            (mv, perft_legal(&next, depth - 1).nodes)
        })
        .collect()
}

/// `reached_by` is the parent position and the move that led here; leaves
/// are classified by it.
fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    reached_by: Option<(&GameState, Move)>,
    depth: u8,
    counts: &mut PerftCounts,
) {
    if depth == 0 {
        counts.nodes += 1;
        if let Some((parent, mv)) = reached_by {
            classify_leaf(parent, mv, game_state, counts);
        }
        return;
    }

    for mv in expanded_moves(generator, game_state) {
        let next = apply_move(game_state, mv);
        perft_recurse(generator, &next, Some((game_state, mv)), depth - 1, counts);
    }
}

fn classify_leaf(parent: &GameState, mv: Move, leaf: &GameState, counts: &mut PerftCounts) {
    if mv.is_capture {
        counts.captures += 1;
    }
    if mv.is_en_passant {
        counts.en_passant += 1;
    }
    if mv.is_castle() {
        counts.castles += 1;
    }
    if is_promotion(parent, mv) {
        counts.promotions += 1;
    }
    if is_in_check(leaf) {
        counts.checks += 1;
        if !has_any_legal_move(leaf) {
            counts.checkmates += 1;
        }
    }
}
