use std::collections::HashSet;

use tracing::debug;

use crate::maze::Maze;
use crate::types::Vertex;

/// Strip prunable dead ends from a maze: repeatedly remove every
/// non-protected vertex with at most one remaining neighbor until a full pass
/// removes nothing. Removing a leaf can turn its neighbor into a leaf, so
/// whole dead-end corridors cascade away down to their branch point.
///
/// The caller must include every live target and the agent's start vertex in
/// `protected`; protected vertices are never removed regardless of degree.
/// The input maze is left untouched.
#[tracing::instrument(level = "debug", skip_all, fields(vertices = maze.vertex_count()))]
pub fn simplify(maze: &Maze, protected: &HashSet<Vertex>) -> Maze {
    let mut simplified = maze.clone();
    let mut removed = 0usize;

    loop {
        let dead_ends: Vec<Vertex> = simplified
            .vertices()
            .filter(|v| simplified.degree(v) <= 1 && !protected.contains(v))
            .collect();
        if dead_ends.is_empty() {
            break;
        }
        for vertex in dead_ends {
            simplified.remove_vertex(vertex);
            removed += 1;
        }
    }

    debug!(
        "Removed {} dead-end vertices, {} remain",
        removed,
        simplified.vertex_count()
    );
    simplified
}
