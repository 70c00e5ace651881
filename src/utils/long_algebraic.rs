//! Checked move selection from coordinates or move text.
//!
//! `apply_move` trusts its input, so anything coming from outside the engine
//! (a UI click, a typed `e7e8n`) is resolved here against the legal move list
//! first.

use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::is_promotion;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::algebraic_to_position;

/// Find the legal move from `from` to `to`.
///
/// Promotions take the requested piece, or a queen when `promotion` is
/// `None`. Asking for a promotion on a move that does not reach the last
/// rank is an illegal move.
pub fn select_move(
    game_state: &GameState,
    from: Position,
    to: Position,
    promotion: Option<PieceKind>,
) -> Result<Move, ChessErrors> {
    if let Some(kind) = promotion {
        if !kind.is_promotion_target() {
            return Err(ChessErrors::InvalidPromotion(kind));
        }
    }

    let mv = legal_moves(game_state, from)
        .into_iter()
        .find(|mv| mv.to == to)
        .ok_or(ChessErrors::IllegalMove { from, to })?;

    match (is_promotion(game_state, mv), promotion) {
        (true, kind) => Ok(mv.with_promotion(kind.unwrap_or(PieceKind::Queen))),
        (false, None) => Ok(mv),
        (false, Some(_)) => Err(ChessErrors::IllegalMove { from, to }),
    }
}

/// Parse long algebraic text such as `e2e4` or `e7e8n` into a legal move.
pub fn parse_legal_move(game_state: &GameState, text: &str) -> Result<Move, ChessErrors> {
    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessErrors::InvalidLongAlgebraic(text.to_owned()));
    }

    let from = algebraic_to_position(&text[0..2])?;
    let to = algebraic_to_position(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        Some(letter) => Some(
            PieceKind::from_letter(letter).ok_or_else(|| ChessErrors::InvalidLongAlgebraic(text.to_owned()))?,
        ),
        None => None,
    };

    select_move(game_state, from, to, promotion)
}
