//! State transition for a single move.
//!
//! `apply_move` trusts its input: the move must come from the legal (or, for
//! internal simulation, pseudo-legal) set of this exact state. Nothing is
//! re-validated here.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::Move;

/// Returns the position after `mv`. The input state is not modified.
pub fn apply_move(game_state: &GameState, mv: Move) -> GameState {
    let mut next = *game_state;
    let moving_color = game_state.side_to_move;
    let enemy_color = moving_color.opposite();

    // An empty origin means the move was not drawn from this state.
    let Some(moved_piece) = game_state.board.piece_at(mv.from) else {
        return next;
    };

    let captured = if mv.is_en_passant {
        next.board.take(Position::new(mv.from.row, mv.to.col))
    } else {
        next.board.piece_at(mv.to)
    };

    next.board.set(mv.from, None);
    next.board.set(mv.to, Some(placed_piece(moved_piece, mv)));

    next.en_passant_target = if moved_piece.kind == PieceKind::Pawn && mv.is_double_step() {
        mv.to.offset(-moving_color.pawn_direction(), 0)
    } else {
        None
    };

    if let Some(side) = mv.castling_side {
        let row = mv.from.row;
        let rook = next.board.take(Position::new(row, side.rook_home_col()));
        next.board.set(Position::new(row, side.rook_destination_col()), rook);
    }

    update_castling_rights(&mut next.castling_rights, moving_color, moved_piece, mv);

    if moved_piece.kind == PieceKind::Pawn || captured.is_some() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }

    next.side_to_move = enemy_color;
    if next.side_to_move == Color::White {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next
}

/// Whether `mv` moves a pawn onto its last rank in `game_state`.
pub fn is_promotion(game_state: &GameState, mv: Move) -> bool {
    game_state
        .board
        .piece_at(mv.from)
        .is_some_and(|piece| piece.kind == PieceKind::Pawn && mv.to.row == piece.color.promotion_row())
}

/// Piece that ends up on the destination square; pawns reaching the last
/// rank become the chosen promotion piece, a queen by default.
fn placed_piece(moved_piece: Piece, mv: Move) -> Piece {
    if moved_piece.kind == PieceKind::Pawn && mv.to.row == moved_piece.color.promotion_row() {
        Piece::new(moved_piece.color, mv.promotion.unwrap_or(PieceKind::Queen))
    } else {
        moved_piece
    }
}

fn update_castling_rights(rights: &mut CastlingRights, moving_color: Color, moved_piece: Piece, mv: Move) {
    match moved_piece.kind {
        PieceKind::King => rights.revoke_all(moving_color),
        PieceKind::Rook => revoke_if_rook_home(rights, moving_color, mv.from),
        _ => {}
    }

    // Anything landing on a rook's home square has captured it or finds it
    // already gone.
    revoke_if_rook_home(rights, moving_color.opposite(), mv.to);
}

fn revoke_if_rook_home(rights: &mut CastlingRights, color: Color, square: Position) {
    if square.row != color.home_row() {
        return;
    }
    if let Some(side) = CastleSide::from_rook_home_col(square.col) {
        rights.revoke(color, side);
    }
}
