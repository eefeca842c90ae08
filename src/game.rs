use crate::agent::Agent;
use crate::game_observer::GameObserver;
use crate::game_state::GameState;
use crate::maze::Maze;

/// Host turn loop. Owns the raw maze and the live game state; the agent only
/// ever sees them by reference and keeps its own simplified working copy.
pub struct Game {
    maze: Maze,
    state: GameState,
    observer: Box<dyn GameObserver>,
    max_turns: i32,
}

impl Game {
    pub fn new(
        maze: Maze,
        state: GameState,
        observer: impl GameObserver + 'static,
        max_turns: i32,
    ) -> Self {
        Self {
            maze,
            state,
            observer: Box::new(observer),
            max_turns,
        }
    }

    /// Run a match to completion: all cheese collected or the turn cap hit.
    pub fn run(&mut self, agent: &mut dyn Agent) -> &GameState {
        agent.setup(&self.maze, &self.state);
        self.observer.on_game_start(&self.maze, &self.state);

        while !self.state.cheese.is_empty() && self.state.turn < self.max_turns {
            let action = agent.decide(&self.state);

            self.state.turn += 1;
            if let Some(next) = self.maze.step(self.state.player_pos, action) {
                self.state.player_pos = next;
            }
            self.observer.on_turn(&self.state, action);

            if self.state.take_cheese(self.state.player_pos) {
                self.observer
                    .on_cheese_taken(self.state.player_pos, self.state.cheese.len());
            }
        }

        self.observer.on_game_finished(&self.state);
        &self.state
    }
}
