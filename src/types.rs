#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

impl Vertex {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between the cells carrying the two vertices.
    pub fn distance(&self, other: &Vertex) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }

    pub fn neighbors(&self) -> [Vertex; 4] {
        [
            Vertex::new(self.x, self.y - 1), // North
            Vertex::new(self.x + 1, self.y), // East
            Vertex::new(self.x, self.y + 1), // South
            Vertex::new(self.x - 1, self.y), // West
        ]
    }

    #[allow(dead_code)]
    pub fn is_adjacent(&self, other: &Vertex) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    North,
    East,
    South,
    West,
    Stay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_euclidean() {
        let a = Vertex::new(0, 0);
        let b = Vertex::new(3, 4);
        assert!((a.distance(&b) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_adjacency_is_cardinal_only() {
        let a = Vertex::new(2, 2);
        assert!(a.is_adjacent(&Vertex::new(2, 1)));
        assert!(a.is_adjacent(&Vertex::new(3, 2)));
        assert!(!a.is_adjacent(&Vertex::new(3, 3)));
        assert!(!a.is_adjacent(&a));
    }
}
