use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_step;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::Move;

pub fn generate_king_moves(game_state: &GameState, from: Position, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    for to in king_targets(from) {
        push_step(&game_state.board, side, from, to, out);
    }

    generate_castling_moves(game_state, from, out);
}

/// Castling candidates. Attacked squares are not considered here; the
/// legality filter rejects castles through or out of check.
fn generate_castling_moves(game_state: &GameState, king_from: Position, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let home_row = side.home_row();
    if king_from != Position::new(home_row, KING_HOME_COL) {
        return;
    }

    let board = &game_state.board;
    let own_rook = Some(Piece::new(side, PieceKind::Rook));

    for castle_side in CastleSide::BOTH {
        if !game_state.castling_rights.allows(side, castle_side) {
            continue;
        }
        if board.piece_at(Position::new(home_row, castle_side.rook_home_col())) != own_rook {
            continue;
        }
        let path_clear = castle_side
            .between_cols()
            .iter()
            .all(|&col| board.is_empty_at(Position::new(home_row, col)));
        if path_clear {
            let to = Position::new(home_row, castle_side.king_destination_col());
            out.push(Move::castle(king_from, to, castle_side));
        }
    }
}
