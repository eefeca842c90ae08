use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use thiserror::Error;
use tracing::{debug, warn};

use crate::exploration::ExplorationState;
use crate::game_state::GameState;
use crate::maze::Maze;
use crate::simplifier::simplify;
use crate::types::{Action, Vertex};

/// Recoverable decision failures. Neither aborts the match; the agent falls
/// back to a safe default move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("backtracking requested with fewer than two trajectory entries")]
    ExhaustedTrajectory,
    #[error("exploring with no targets left to steer by")]
    NoTargets,
}

pub trait Agent {
    /// Called once per match, before the first turn.
    fn setup(&mut self, maze: &Maze, state: &GameState);

    /// Called once per turn; returns exactly one action.
    fn decide(&mut self, state: &GameState) -> Action;
}

/// Agent that greedily advances toward the nearest cheese through unexplored
/// territory and backtracks along its own trajectory when the local
/// neighborhood is exhausted. Operates on a dead-end-pruned copy of the maze
/// built once at setup.
pub struct GreedyExplorer {
    exploration: ExplorationState,
    simplified: Option<Maze>,
    rng: StdRng,
}

impl GreedyExplorer {
    pub fn new(seed: u64) -> Self {
        Self {
            exploration: ExplorationState::new(),
            simplified: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for GreedyExplorer {
    #[tracing::instrument(level = "debug", skip_all)]
    fn setup(&mut self, maze: &Maze, state: &GameState) {
        // Cheese and the start vertex must survive the pruning
        let mut protected: HashSet<Vertex> = state.cheese.iter().copied().collect();
        protected.insert(state.player_pos);

        let simplified = simplify(maze, &protected);
        debug!(
            "Setup complete: {} of {} vertices kept, start {:?}",
            simplified.vertex_count(),
            maze.vertex_count(),
            state.player_pos
        );
        self.simplified = Some(simplified);
        self.exploration.record_visit(state.player_pos);
    }

    fn decide(&mut self, state: &GameState) -> Action {
        let current = state.player_pos;
        let Some(simplified) = self.simplified.as_ref() else {
            warn!("Decide called before setup; staying put");
            return Action::Stay;
        };

        self.exploration.record_visit(current);

        let destination = match next_destination(
            simplified,
            current,
            state.remaining_cheese(),
            &mut self.exploration,
        ) {
            Ok(destination) => destination,
            Err(PolicyError::NoTargets) => {
                // Nothing to steer by; wander into any unexplored neighbor
                let unvisited = unvisited_neighbors(simplified, current, &self.exploration);
                match unvisited.choose(&mut self.rng) {
                    Some(&vertex) => {
                        warn!("No cheese left to steer by; wandering to {:?}", vertex);
                        vertex
                    }
                    None => return Action::Stay,
                }
            }
            Err(err @ PolicyError::ExhaustedTrajectory) => {
                warn!("Decision failed ({err}); staying put");
                return Action::Stay;
            }
        };

        match simplified.locations_to_action(current, destination) {
            Some(action) => action,
            None => {
                warn!(
                    "No passage from {:?} to {:?}; staying put",
                    current, destination
                );
                Action::Stay
            }
        }
    }
}

fn unvisited_neighbors(
    simplified: &Maze,
    current: Vertex,
    exploration: &ExplorationState,
) -> Vec<Vertex> {
    simplified
        .neighbors(&current)
        .iter()
        .copied()
        .filter(|n| !exploration.is_visited(n))
        .collect()
}

/// Pick the next vertex to move to. With unexplored neighbors available,
/// take the (target, neighbor) pair with the globally smallest Euclidean
/// distance; the first pair reaching the minimum wins, targets iterated in
/// the outer loop. Otherwise backtrack: drop the just-recorded current vertex
/// from the trajectory and return the one walked from, which is guaranteed
/// adjacent to the current vertex.
fn next_destination(
    simplified: &Maze,
    current: Vertex,
    targets: &[Vertex],
    exploration: &mut ExplorationState,
) -> Result<Vertex, PolicyError> {
    let unvisited = unvisited_neighbors(simplified, current, exploration);

    if !unvisited.is_empty() {
        let first_target = targets.first().ok_or(PolicyError::NoTargets)?;
        let mut best = unvisited[0];
        let mut best_dist = unvisited[0].distance(first_target);
        for target in targets {
            for neighbor in &unvisited {
                let dist = neighbor.distance(target);
                if dist < best_dist {
                    best = *neighbor;
                    best_dist = dist;
                }
            }
        }
        debug!(
            "Exploring: {} unexplored neighbors, moving to {:?} ({:.2} from nearest cheese)",
            unvisited.len(),
            best,
            best_dist
        );
        return Ok(best);
    }

    exploration
        .trajectory
        .pop()
        .ok_or(PolicyError::ExhaustedTrajectory)?;
    let destination = exploration
        .trajectory
        .pop()
        .ok_or(PolicyError::ExhaustedTrajectory)?;
    debug!("Neighborhood exhausted, backtracking to {:?}", destination);
    Ok(destination)
}
