use crate::game_state::game_state::GameState;
use crate::game_state::chess_types::Position;
use crate::move_generation::legal_move_shared::push_step;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(game_state: &GameState, from: Position, out: &mut Vec<Move>) {
    for to in knight_targets(from) {
        push_step(&game_state.board, game_state.side_to_move, from, to, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_positions::sq;

    #[test]
    fn starting_knight_has_two_jumps() {
        let mut moves = Vec::new();
        generate_knight_moves(&GameState::initial(), sq("g1"), &mut moves);
        let mut targets: Vec<String> = moves.iter().map(|m| m.to.to_string()).collect();
        targets.sort();
        assert_eq!(targets, vec!["f3", "h3"]);
    }
}
