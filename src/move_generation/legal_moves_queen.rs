use crate::game_state::game_state::GameState;
use crate::game_state::chess_types::Position;
use crate::move_generation::legal_move_shared::push_rays;
use crate::moves::move_descriptions::Move;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;

pub fn generate_queen_moves(game_state: &GameState, from: Position, out: &mut Vec<Move>) {
    push_rays(
        &game_state.board,
        game_state.side_to_move,
        from,
        &QUEEN_DIRECTIONS,
        out,
    );
}
