#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

/// A cell coordinate, `x` to the right and `y` downwards from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The adjacent position in `dir`, if it stays inside a `width` x `height` grid.
    pub fn step(self, dir: Direction, width: usize, height: usize) -> Option<Pos> {
        let (dx, dy) = dir.delta();
        let nx = self.x as isize + dx;
        let ny = self.y as isize + dy;
        if nx < 0 || ny < 0 {
            return None;
        }
        let nx = nx as usize;
        let ny = ny as usize;
        if nx >= width || ny >= height {
            return None;
        }
        Some(Pos { x: nx, y: ny })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(-dir, dir.opposite());
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn step_stops_at_the_edges() {
        let corner = Pos::new(0, 0);
        assert_eq!(corner.step(Direction::Up, 3, 3), None);
        assert_eq!(corner.step(Direction::Left, 3, 3), None);
        assert_eq!(corner.step(Direction::Right, 3, 3), Some(Pos::new(1, 0)));
        assert_eq!(corner.step(Direction::Down, 3, 3), Some(Pos::new(0, 1)));

        let far = Pos::new(2, 2);
        assert_eq!(far.step(Direction::Right, 3, 3), None);
        assert_eq!(far.step(Direction::Down, 3, 3), None);
    }

    #[test]
    fn single_cell_grid_has_no_steps() {
        for dir in Direction::ALL {
            assert_eq!(Pos::new(0, 0).step(dir, 1, 1), None);
        }
    }
}
