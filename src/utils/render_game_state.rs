//! Terminal-oriented Unicode board renderer.
//!
//! Debug and log output only; rank 8 is printed first.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board, side to move and castling rights as a multi-line string.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (0..BOARD_SIZE).rev() {
        let rank_char = char::from(b'1' + row);
        out.push(rank_char);
        out.push(' ');

        for col in 0..BOARD_SIZE {
            match game_state.board.piece_at(Position::new(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");
    out.push_str(&format!(
        "{} to move, castling {}",
        game_state.side_to_move, game_state.castling_rights
    ));
    if let Some(target) = game_state.en_passant_target {
        out.push_str(&format!(", en passant {target}"));
    }

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
