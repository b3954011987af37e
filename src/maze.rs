//! Perfect maze on a rectangular grid, carved with a randomized backtracker.

use std::fmt;

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::direction::{Direction, Pos};
use crate::error::MazeError;

/// The four walls of one cell packed into the low nibble of a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Walls(u8);

impl Walls {
    pub const TOP: u8 = 0b0001;
    pub const BOTTOM: u8 = 0b0010;
    pub const LEFT: u8 = 0b0100;
    pub const RIGHT: u8 = 0b1000;

    pub const CLOSED: Walls = Walls(Self::TOP | Self::BOTTOM | Self::LEFT | Self::RIGHT);

    fn bit(dir: Direction) -> u8 {
        match dir {
            Direction::Up => Self::TOP,
            Direction::Down => Self::BOTTOM,
            Direction::Left => Self::LEFT,
            Direction::Right => Self::RIGHT,
        }
    }

    pub fn has(self, dir: Direction) -> bool {
        self.0 & Self::bit(dir) != 0
    }

    pub fn remove(&mut self, dir: Direction) {
        self.0 &= !Self::bit(dir);
    }

    pub fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::CLOSED
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMaze {
    width: usize,
    height: usize,
    cells: Vec<Walls>,
}

impl GridMaze {
    /// Builds a fresh `width` x `height` maze.
    ///
    /// Every cell starts fully walled, the top wall of `(0, 0)` is opened as
    /// the entrance and the rest is carved from `rng`. Zero in either
    /// dimension is rejected.
    pub fn generate<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        let mut maze = Self::closed(width, height)?;
        maze.carve(rng);
        Ok(maze)
    }

    /// Discards the current layout and carves a new one, possibly at a new size.
    pub fn reset<R: Rng + ?Sized>(
        &mut self,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<(), MazeError> {
        *self = Self::generate(width, height, rng)?;
        Ok(())
    }

    /// Same as [`GridMaze::reset`] with the current dimensions.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells.fill(Walls::CLOSED);
        self.carve(rng);
    }

    fn closed(width: usize, height: usize) -> Result<Self, MazeError> {
        let invalid = MazeError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        // The lattice view needs 2n + 1 points along each axis.
        let lattice = |n: usize| n.checked_mul(2).and_then(|v| v.checked_add(1));
        if lattice(width).is_none() || lattice(height).is_none() {
            return Err(invalid);
        }
        let count = width.checked_mul(height).ok_or(invalid)?;
        Ok(Self {
            width,
            height,
            cells: vec![Walls::CLOSED; count],
        })
    }

    fn carve<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let start = self.start();
        let start_idx = self.index_of(start);
        self.cells[start_idx].remove(Direction::Up);

        let mut visited = vec![false; self.cells.len()];
        visited[start_idx] = true;
        let mut stack = vec![start];
        let mut neighbors: Vec<(Direction, Pos)> = Vec::with_capacity(4);

        while let Some(&current) = stack.last() {
            neighbors.clear();
            neighbors.extend(Direction::ALL.iter().filter_map(|&dir| {
                current
                    .step(dir, self.width, self.height)
                    .map(|next| (dir, next))
            }));
            neighbors.shuffle(rng);

            let unvisited = neighbors
                .iter()
                .copied()
                .find(|(_, next)| !visited[self.index_of(*next)]);

            match unvisited {
                Some((dir, next)) => {
                    visited[self.index_of(next)] = true;
                    self.open_between(current, dir);
                    stack.push(next);
                }
                None => {
                    stack.pop();
                }
            }
        }

        debug!(
            "generated {}x{} maze with {} passages",
            self.width,
            self.height,
            self.passage_count()
        );
        trace!("maze layout:\n{}", self);
    }

    // Both sides of a shared wall go in one step so neighbours never disagree.
    fn open_between(&mut self, pos: Pos, dir: Direction) {
        if let Some(next) = pos.step(dir, self.width, self.height) {
            let idx = self.index_of(pos);
            let next_idx = self.index_of(next);
            self.cells[idx].remove(dir);
            self.cells[next_idx].remove(dir.opposite());
        }
    }

    #[inline]
    fn index_of(&self, pos: Pos) -> usize {
        (self.width * pos.y) + pos.x
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Pos {
        Pos::new(0, 0)
    }

    pub fn goal(&self) -> Pos {
        Pos::new(self.width - 1, self.height - 1)
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn walls(&self, pos: Pos) -> Option<Walls> {
        if self.contains(pos) {
            Some(self.cells[self.index_of(pos)])
        } else {
            None
        }
    }

    /// Whether cell `(x, y)` has a wall on its `dir` side.
    pub fn has_wall(&self, x: usize, y: usize, dir: Direction) -> Result<bool, MazeError> {
        self.walls(Pos::new(x, y))
            .map(|walls| walls.has(dir))
            .ok_or(MazeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
    }

    pub fn neighbor(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        if !self.contains(pos) {
            return None;
        }
        pos.step(dir, self.width, self.height)
    }

    /// Number of interior walls that have been knocked down.
    pub fn passage_count(&self) -> usize {
        let mut count = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                let walls = self.cells[self.index_of(Pos::new(x, y))];
                if x + 1 < self.width && !walls.has(Direction::Right) {
                    count += 1;
                }
                if y + 1 < self.height && !walls.has(Direction::Down) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Size of the character lattice: one point per cell, one per wall, one per corner.
    pub fn lattice_size(&self) -> (usize, usize) {
        (self.width * 2 + 1, self.height * 2 + 1)
    }

    /// Whether lattice point `(lx, ly)` is solid. Cells sit on odd/odd points,
    /// walls between them, and corners on even/even points are always solid.
    pub fn lattice_is_wall(&self, lx: usize, ly: usize) -> bool {
        let (lw, lh) = self.lattice_size();
        if lx >= lw || ly >= lh {
            return true;
        }
        match (lx % 2, ly % 2) {
            (0, 0) => true,
            (1, 1) => false,
            (1, 0) => {
                let x = lx / 2;
                if ly == 0 {
                    self.cells[self.index_of(Pos::new(x, 0))].has(Direction::Up)
                } else {
                    self.cells[self.index_of(Pos::new(x, ly / 2 - 1))].has(Direction::Down)
                }
            }
            _ => {
                let y = ly / 2;
                if lx == 0 {
                    self.cells[self.index_of(Pos::new(0, y))].has(Direction::Left)
                } else {
                    self.cells[self.index_of(Pos::new(lx / 2 - 1, y))].has(Direction::Right)
                }
            }
        }
    }
}

impl fmt::Display for GridMaze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lw, lh) = self.lattice_size();
        for ly in 0..lh {
            for lx in 0..lw {
                let c = if self.lattice_is_wall(lx, ly) { '#' } else { ' ' };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
