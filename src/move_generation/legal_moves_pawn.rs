//! Pawn move generation.
//!
//! Single and double pushes, diagonal captures, and en-passant captures.
//! A push or capture onto the last rank is emitted once with no promotion
//! piece; the caller picks one with [`Move::with_promotion`] and the applier
//! falls back to a queen.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::{pawn_attack_targets, pawn_push_target};

pub fn generate_pawn_moves(game_state: &GameState, from: Position, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let board = &game_state.board;

    if let Some(one_step) = pawn_push_target(side, from) {
        if board.is_empty_at(one_step) {
            out.push(Move::quiet(from, one_step));

            if from.row == side.pawn_start_row() {
                if let Some(two_step) = pawn_push_target(side, one_step) {
                    if board.is_empty_at(two_step) {
                        out.push(Move::quiet(from, two_step));
                    }
                }
            }
        }
    }

    for to in pawn_attack_targets(side, from) {
        if let Some(target) = board.piece_at(to) {
            if target.color != side {
                out.push(Move::capture(from, to));
            }
        }
    }

    if let Some(ep) = en_passant_capture(game_state, from) {
        out.push(ep);
    }
}

/// En-passant capture available to the pawn on `from`, if any.
///
/// The target square must be exactly one step diagonally forward of the
/// capturing pawn and empty, and the double-stepped enemy pawn must stand
/// beside it on the capturer's rank. Any other stored target is stale and
/// yields nothing.
fn en_passant_capture(game_state: &GameState, from: Position) -> Option<Move> {
    let side = game_state.side_to_move;
    let target = game_state.en_passant_target?;

    let forward_row = from.row as i8 + side.pawn_direction();
    if target.row as i8 != forward_row || target.col.abs_diff(from.col) != 1 {
        return None;
    }
    if !game_state.board.is_empty_at(target) {
        return None;
    }

    let victim = Position::new(from.row, target.col);
    if game_state.board.piece_at(victim) != Some(Piece::new(side.opposite(), PieceKind::Pawn)) {
        return None;
    }

    Some(Move::en_passant(from, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_positions::{sq, state_from_placement};

    fn moves_from(state: &GameState, from: &str) -> Vec<Move> {
        let mut out = Vec::new();
        generate_pawn_moves(state, sq(from), &mut out);
        out
    }

    #[test]
    fn starting_pawn_has_single_and_double_push() {
        let moves = moves_from(&GameState::initial(), "e2");
        assert_eq!(
            moves,
            vec![Move::quiet(sq("e2"), sq("e3")), Move::quiet(sq("e2"), sq("e4"))]
        );
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let state = state_from_placement("8/8/8/8/8/4n3/4P3/8", Color::White);
        let moves = moves_from(&state, "e2");
        assert!(moves.is_empty());

        let state = state_from_placement("8/8/8/8/4n3/8/4P3/8", Color::White);
        assert_eq!(moves_from(&state, "e2"), vec![Move::quiet(sq("e2"), sq("e3"))]);
    }

    #[test]
    fn black_pawns_capture_downward() {
        let state = state_from_placement("8/8/8/4p3/3P1N2/8/8/8", Color::Black);
        let moves = moves_from(&state, "e5");
        assert!(moves.contains(&Move::capture(sq("e5"), sq("d4"))));
        assert!(moves.contains(&Move::capture(sq("e5"), sq("f4"))));
        assert!(moves.contains(&Move::quiet(sq("e5"), sq("e4"))));
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn en_passant_needs_an_adjacent_forward_target() {
        let placement = "8/8/8/3pP3/8/8/8/8";
        let live = state_from_placement(placement, Color::White).with_en_passant_target(Some(sq("d6")));
        assert!(moves_from(&live, "e5").contains(&Move::en_passant(sq("e5"), sq("d6"))));

        let stale = state_from_placement(placement, Color::White).with_en_passant_target(Some(sq("d3")));
        assert!(moves_from(&stale, "e5").iter().all(|m| !m.is_en_passant));
    }

    #[test]
    fn promotion_push_is_emitted_once_without_a_piece() {
        let state = state_from_placement("8/P7/8/8/8/8/8/8", Color::White);
        let moves = moves_from(&state, "a7");
        assert_eq!(moves, vec![Move::quiet(sq("a7"), sq("a8"))]);
        assert_eq!(moves[0].promotion, None);
    }
}
