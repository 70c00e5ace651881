//! Fixture helpers for unit tests.
//!
//! Reads only the piece-placement field of a FEN record (ranks 8 to 1,
//! separated by `/`). Side to move, rights and clocks are set through the
//! `GameState` builders instead.

use crate::game_state::chess_types::*;

pub fn board_from_placement(placement: &str) -> Board {
    let mut board = Board::empty();
    let ranks: Vec<&str> = placement.split('/').collect();
    assert_eq!(ranks.len(), 8, "placement needs eight ranks: {placement}");

    for (i, rank) in ranks.iter().enumerate() {
        let row = 7 - i as u8;
        let mut col = 0u8;
        for ch in rank.chars() {
            if let Some(skip) = ch.to_digit(10) {
                col += skip as u8;
                continue;
            }
            let piece = Piece::from_symbol(ch)
                .unwrap_or_else(|| panic!("bad piece symbol {ch:?} in {placement}"));
            board.set(Position::new(row, col), Some(piece));
            col += 1;
        }
        assert_eq!(col, 8, "rank {rank:?} does not cover eight files");
    }

    board
}

pub fn state_from_placement(placement: &str, side_to_move: Color) -> GameState {
    GameState::from_board(board_from_placement(placement), side_to_move)
}

pub fn sq(name: &str) -> Position {
    name.parse().expect("fixture square should parse")
}

/// Installs a test logger once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
