use crate::types::Vertex;

/// Live match state as seen by the agent each turn. The cheese list is
/// ordered; the decision policy's tie-break depends on iterating targets in a
/// stable order.
#[derive(Debug, Clone)]
pub struct GameState {
    pub turn: i32,
    pub player_pos: Vertex,
    pub cheese: Vec<Vertex>,
    pub score: i32,
}

impl GameState {
    pub fn new(start: Vertex, cheese: Vec<Vertex>) -> Self {
        Self {
            turn: 0,
            player_pos: start,
            cheese,
            score: 0,
        }
    }

    pub fn remaining_cheese(&self) -> &[Vertex] {
        &self.cheese
    }

    /// Consume the cheese at a vertex, if any. Returns true when one was
    /// taken.
    pub fn take_cheese(&mut self, vertex: Vertex) -> bool {
        let before = self.cheese.len();
        self.cheese.retain(|c| *c != vertex);
        if self.cheese.len() < before {
            self.score += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_cheese_updates_score_once() {
        let mut state = GameState::new(Vertex::new(0, 0), vec![Vertex::new(2, 0)]);

        assert!(!state.take_cheese(Vertex::new(1, 0)));
        assert_eq!(state.score, 0);

        assert!(state.take_cheese(Vertex::new(2, 0)));
        assert_eq!(state.score, 1);
        assert!(state.cheese.is_empty());

        assert!(!state.take_cheese(Vertex::new(2, 0)));
        assert_eq!(state.score, 1);
    }
}
