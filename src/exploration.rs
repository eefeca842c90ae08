use std::collections::HashSet;

use crate::types::Vertex;

/// Per-agent exploration record. The visited set only ever grows during a
/// match; the trajectory is the exact physical path walked, repeats included,
/// so the vertex below the top is always graph-adjacent to the top.
#[derive(Debug, Clone, Default)]
pub struct ExplorationState {
    pub visited: HashSet<Vertex>,
    pub trajectory: Vec<Vertex>,
}

impl ExplorationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the vertex the agent currently occupies. Must run exactly once
    /// per turn before deciding, and once at setup for the start vertex.
    pub fn record_visit(&mut self, vertex: Vertex) {
        self.visited.insert(vertex);
        self.trajectory.push(vertex);
    }

    pub fn is_visited(&self, vertex: &Vertex) -> bool {
        self.visited.contains(vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visited_set_is_deduplicated() {
        let mut exploration = ExplorationState::new();
        exploration.record_visit(Vertex::new(0, 0));
        exploration.record_visit(Vertex::new(1, 0));
        exploration.record_visit(Vertex::new(0, 0));

        assert_eq!(exploration.visited.len(), 2);
    }

    #[test]
    fn test_trajectory_keeps_repeats() {
        let mut exploration = ExplorationState::new();
        exploration.record_visit(Vertex::new(0, 0));
        exploration.record_visit(Vertex::new(1, 0));
        exploration.record_visit(Vertex::new(0, 0));

        assert_eq!(
            exploration.trajectory,
            vec![Vertex::new(0, 0), Vertex::new(1, 0), Vertex::new(0, 0)]
        );
    }
}
