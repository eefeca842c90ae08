use tracing::{debug, info};

use crate::game_observer::GameObserver;
use crate::game_state::GameState;
use crate::maze::Maze;
use crate::types::{Action, Vertex};

pub struct DefaultObserver;

impl GameObserver for DefaultObserver {
    fn on_game_start(&mut self, maze: &Maze, state: &GameState) {
        info!("Match started");
        info!("- maze size: {}x{}", maze.width, maze.height);
        info!("- vertices: {}", maze.vertex_count());
        info!("- cheese: {}", state.cheese.len());
        info!("- start: ({}, {})", state.player_pos.x, state.player_pos.y);
    }

    fn on_turn(&mut self, state: &GameState, action: Action) {
        debug!(
            "turn: {}, pos: ({}, {}), action: {:?}",
            state.turn, state.player_pos.x, state.player_pos.y, action
        );
    }

    fn on_cheese_taken(&mut self, vertex: Vertex, remaining: usize) {
        info!(
            "Cheese taken at ({}, {}), {} remaining",
            vertex.x, vertex.y, remaining
        );
    }

    fn on_game_finished(&mut self, state: &GameState) {
        info!(
            "Match finished: {} cheese collected in {} turns",
            state.score, state.turn
        );
    }
}
