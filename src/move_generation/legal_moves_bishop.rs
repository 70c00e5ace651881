use crate::game_state::game_state::GameState;
use crate::game_state::chess_types::Position;
use crate::move_generation::legal_move_shared::push_rays;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(game_state: &GameState, from: Position, out: &mut Vec<Move>) {
    push_rays(
        &game_state.board,
        game_state.side_to_move,
        from,
        &BISHOP_DIRECTIONS,
        out,
    );
}
