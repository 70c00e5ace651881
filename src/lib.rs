//! Crate root module declarations for the Arcade Chess rules engine.
//!
//! Exposes the position model, pseudo-legal generation, the legality filter,
//! move application, and terminal-state evaluation. The most common entry
//! points are re-exported at the crate root.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rays;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod long_algebraic;
    pub mod render_game_state;
    #[cfg(test)]
    pub mod test_positions;
}

pub use chess_errors::ChessErrors;
pub use game_state::chess_types::{CastleSide, CastlingRights, Color, Piece, PieceKind, Position};
pub use game_state::{board::Board, game_state::initial_state, game_state::GameState};
pub use move_generation::game_status::{game_status, has_any_legal_move, GameStatus};
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_checks::{is_in_check, is_square_attacked};
pub use move_generation::legal_move_generator::{all_legal_moves, legal_moves, LegalMoveGenerator};
pub use move_generation::move_generator::{pseudo_legal_moves, MoveGenerator};
pub use moves::move_descriptions::Move;
