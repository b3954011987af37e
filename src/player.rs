use crate::direction::{Direction, Pos};
use crate::maze::GridMaze;

/// Where a step from `pos` towards `dir` lands, or `None` when the grid edge
/// or a wall is in the way.
pub fn try_move(maze: &GridMaze, pos: Pos, dir: Direction) -> Option<Pos> {
    let next = maze.neighbor(pos, dir)?;
    match maze.has_wall(pos.x, pos.y, dir) {
        Ok(false) => Some(next),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub pos: Pos,
}

impl Player {
    pub fn new(pos: Pos) -> Self {
        Self { pos }
    }

    /// Moves one cell if the maze allows it. Returns whether the player moved.
    pub fn step(&mut self, maze: &GridMaze, dir: Direction) -> bool {
        match try_move(maze, self.pos, dir) {
            Some(next) => {
                self.pos = next;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn known_maze() -> GridMaze {
        // See maze::tests::fixed_rng_carves_known_layout for the picture.
        GridMaze::generate(3, 3, &mut StepRng::new(0, 0)).unwrap()
    }

    #[test]
    fn walls_block_movement() {
        let maze = known_maze();
        assert_eq!(try_move(&maze, Pos::new(1, 1), Direction::Right), None);
        assert_eq!(try_move(&maze, Pos::new(1, 1), Direction::Up), None);
        assert_eq!(
            try_move(&maze, Pos::new(1, 1), Direction::Left),
            Some(Pos::new(0, 1))
        );
    }

    #[test]
    fn entrance_does_not_lead_off_the_grid() {
        let maze = known_maze();
        assert!(!maze.has_wall(0, 0, Direction::Up).unwrap());
        assert_eq!(try_move(&maze, Pos::new(0, 0), Direction::Up), None);
    }

    #[test]
    fn blocked_step_leaves_player_in_place() {
        let maze = known_maze();
        let mut player = Player::new(Pos::new(0, 0));
        assert!(!player.step(&maze, Direction::Down));
        assert_eq!(player.pos, Pos::new(0, 0));
        assert!(player.step(&maze, Direction::Right));
        assert_eq!(player.pos, Pos::new(1, 0));
    }

    #[test]
    fn moves_follow_wall_flags_everywhere() {
        let maze = GridMaze::generate(7, 5, &mut StdRng::seed_from_u64(42)).unwrap();
        for y in 0..maze.height() {
            for x in 0..maze.width() {
                let pos = Pos::new(x, y);
                for dir in Direction::ALL {
                    let expected = match maze.neighbor(pos, dir) {
                        Some(next) if !maze.has_wall(x, y, dir).unwrap() => Some(next),
                        _ => None,
                    };
                    assert_eq!(try_move(&maze, pos, dir), expected);
                }
            }
        }
    }

    #[test]
    fn out_of_grid_position_cannot_move() {
        let maze = known_maze();
        for dir in Direction::ALL {
            assert_eq!(try_move(&maze, Pos::new(9, 9), dir), None);
        }
    }
}
