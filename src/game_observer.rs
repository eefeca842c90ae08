use crate::game_state::GameState;
use crate::maze::Maze;
use crate::types::{Action, Vertex};

/// Trait for observing match events during execution
pub trait GameObserver {
    /// Called when the match starts, after agent setup
    fn on_game_start(&mut self, maze: &Maze, state: &GameState);

    /// Called after every turn, once the action has been applied
    fn on_turn(&mut self, state: &GameState, action: Action);

    /// Called when the player consumes a cheese
    fn on_cheese_taken(&mut self, vertex: Vertex, remaining: usize);

    /// Called when the match finishes
    fn on_game_finished(&mut self, state: &GameState);
}
