use std::collections::{HashMap, HashSet};

use rand::Rng;

use crate::types::{Action, Vertex};

/// Undirected adjacency over a fixed grid of cells. Neighbor lists keep
/// insertion order so iteration over a vertex's neighbors is stable.
#[derive(Debug, Clone)]
pub struct Maze {
    pub width: i32,
    pub height: i32,
    adjacency: HashMap<Vertex, Vec<Vertex>>,
}

impl Maze {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            adjacency: HashMap::new(),
        }
    }

    pub fn add_vertex(&mut self, vertex: Vertex) {
        self.adjacency.entry(vertex).or_default();
    }

    pub fn add_edge(&mut self, a: Vertex, b: Vertex) {
        let neighbors = self.adjacency.entry(a).or_default();
        if !neighbors.contains(&b) {
            neighbors.push(b);
        }
        let neighbors = self.adjacency.entry(b).or_default();
        if !neighbors.contains(&a) {
            neighbors.push(a);
        }
    }

    #[allow(dead_code)]
    pub fn contains(&self, vertex: &Vertex) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn neighbors(&self, vertex: &Vertex) -> &[Vertex] {
        match self.adjacency.get(vertex) {
            Some(neighbors) => neighbors,
            None => &[],
        }
    }

    pub fn degree(&self, vertex: &Vertex) -> usize {
        self.neighbors(vertex).len()
    }

    /// Remove a vertex together with its incident edges.
    pub fn remove_vertex(&mut self, vertex: Vertex) {
        let Some(neighbors) = self.adjacency.remove(&vertex) else {
            return;
        };
        for neighbor in neighbors {
            if let Some(adjacent) = self.adjacency.get_mut(&neighbor) {
                adjacent.retain(|v| *v != vertex);
            }
        }
    }

    /// Translate a move between two adjacent vertices into a directional
    /// action. Returns None when no passage connects the two cells.
    pub fn locations_to_action(&self, from: Vertex, to: Vertex) -> Option<Action> {
        if !self.neighbors(&from).contains(&to) {
            return None;
        }

        if to.y < from.y {
            Some(Action::North)
        } else if to.y > from.y {
            Some(Action::South)
        } else if to.x > from.x {
            Some(Action::East)
        } else if to.x < from.x {
            Some(Action::West)
        } else {
            None
        }
    }

    /// Resolve the cell an action leads to, if a passage exists.
    pub fn step(&self, from: Vertex, action: Action) -> Option<Vertex> {
        let to = match action {
            Action::North => Vertex::new(from.x, from.y - 1),
            Action::East => Vertex::new(from.x + 1, from.y),
            Action::South => Vertex::new(from.x, from.y + 1),
            Action::West => Vertex::new(from.x - 1, from.y),
            Action::Stay => return None,
        };
        self.neighbors(&from).contains(&to).then_some(to)
    }

    fn in_bounds(&self, vertex: &Vertex) -> bool {
        vertex.x >= 0 && vertex.x < self.width && vertex.y >= 0 && vertex.y < self.height
    }

    /// Generate a connected maze: a randomized-DFS spanning tree over the
    /// grid, then a few extra passages so the maze contains loops as well as
    /// genuine dead ends.
    pub fn generate(width: i32, height: i32, rng: &mut impl Rng) -> Maze {
        let mut maze = Maze::new(width, height);
        for x in 0..width {
            for y in 0..height {
                maze.add_vertex(Vertex::new(x, y));
            }
        }

        let start = Vertex::new(0, 0);
        let mut carved: HashSet<Vertex> = HashSet::from([start]);
        let mut stack = vec![start];
        while let Some(&current) = stack.last() {
            let candidates: Vec<Vertex> = current
                .neighbors()
                .into_iter()
                .filter(|n| maze.in_bounds(n) && !carved.contains(n))
                .collect();
            if candidates.is_empty() {
                stack.pop();
                continue;
            }
            let next = candidates[rng.random_range(0..candidates.len())];
            maze.add_edge(current, next);
            carved.insert(next);
            stack.push(next);
        }

        // Knock out ~10% of the remaining walls to create loops
        for x in 0..width {
            for y in 0..height {
                let vertex = Vertex::new(x, y);
                for other in [Vertex::new(x + 1, y), Vertex::new(x, y + 1)] {
                    if maze.in_bounds(&other)
                        && !maze.neighbors(&vertex).contains(&other)
                        && rng.random_bool(0.1)
                    {
                        maze.add_edge(vertex, other);
                    }
                }
            }
        }

        maze
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn corridor(length: i32) -> Maze {
        let mut maze = Maze::new(length, 1);
        for x in 0..length - 1 {
            maze.add_edge(Vertex::new(x, 0), Vertex::new(x + 1, 0));
        }
        maze
    }

    #[test]
    fn test_remove_vertex_drops_incident_edges() {
        let mut maze = corridor(3);
        maze.remove_vertex(Vertex::new(2, 0));

        assert!(!maze.contains(&Vertex::new(2, 0)));
        assert_eq!(maze.degree(&Vertex::new(1, 0)), 1);
        assert_eq!(maze.degree(&Vertex::new(0, 0)), 1);
    }

    #[test]
    fn test_locations_to_action_directions() {
        let mut maze = Maze::new(3, 3);
        let center = Vertex::new(1, 1);
        for neighbor in center.neighbors() {
            maze.add_edge(center, neighbor);
        }

        assert_eq!(
            maze.locations_to_action(center, Vertex::new(1, 0)),
            Some(Action::North)
        );
        assert_eq!(
            maze.locations_to_action(center, Vertex::new(2, 1)),
            Some(Action::East)
        );
        assert_eq!(
            maze.locations_to_action(center, Vertex::new(1, 2)),
            Some(Action::South)
        );
        assert_eq!(
            maze.locations_to_action(center, Vertex::new(0, 1)),
            Some(Action::West)
        );
    }

    #[test]
    fn test_locations_to_action_requires_passage() {
        let maze = corridor(3);
        // (0,0) and (2,0) are not adjacent
        assert_eq!(
            maze.locations_to_action(Vertex::new(0, 0), Vertex::new(2, 0)),
            None
        );
        assert_eq!(
            maze.locations_to_action(Vertex::new(0, 0), Vertex::new(0, 0)),
            None
        );
    }

    #[test]
    fn test_step_follows_passages_only() {
        let maze = corridor(3);
        assert_eq!(
            maze.step(Vertex::new(0, 0), Action::East),
            Some(Vertex::new(1, 0))
        );
        assert_eq!(maze.step(Vertex::new(0, 0), Action::North), None);
        assert_eq!(maze.step(Vertex::new(0, 0), Action::Stay), None);
    }

    #[test]
    fn test_generate_is_connected() {
        let mut rng = StdRng::seed_from_u64(7);
        let maze = Maze::generate(9, 7, &mut rng);
        assert_eq!(maze.vertex_count(), 63);

        let start = Vertex::new(0, 0);
        let mut reached: HashSet<Vertex> = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            for &neighbor in maze.neighbors(&current) {
                if reached.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        assert_eq!(reached.len(), maze.vertex_count(), "maze must be connected");
    }
}
