//! Canonical chess-rule constants.
//!
//! Static layout data for the standard starting position.

use crate::game_state::chess_types::PieceKind;

/// Back-rank piece order from the a-file to the h-file, identical for both colours.
pub const STARTING_BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Side length of the board.
pub const BOARD_SIZE: u8 = 8;
