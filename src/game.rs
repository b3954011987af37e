use log::{debug, info};
use rand::Rng;

use crate::direction::{Direction, Pos};
use crate::error::MazeError;
use crate::maze::GridMaze;
use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Shuffle,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Moved,
    Blocked,
    /// The goal was reached; a new maze is already in place.
    Solved,
    Shuffled,
    Quit,
}

impl Outcome {
    /// Whether the maze itself changed, not just the player.
    pub fn regenerated(self) -> bool {
        matches!(self, Outcome::Solved | Outcome::Shuffled)
    }
}

pub struct Game<R: Rng> {
    maze: GridMaze,
    player: Player,
    rng: R,
    moves: u32,
    solved: u32,
}

impl<R: Rng> Game<R> {
    pub fn new(width: usize, height: usize, mut rng: R) -> Result<Self, MazeError> {
        let maze = GridMaze::generate(width, height, &mut rng)?;
        let player = Player::new(maze.start());
        Ok(Self {
            maze,
            player,
            rng,
            moves: 0,
            solved: 0,
        })
    }

    pub fn apply(&mut self, action: Action) -> Outcome {
        match action {
            Action::Move(dir) => self.move_player(dir),
            Action::Shuffle => {
                info!("shuffle requested after {} moves", self.moves);
                self.new_maze();
                Outcome::Shuffled
            }
            Action::Quit => Outcome::Quit,
        }
    }

    fn move_player(&mut self, dir: Direction) -> Outcome {
        if !self.player.step(&self.maze, dir) {
            debug!("blocked moving {:?} from {:?}", dir, self.player.pos);
            return Outcome::Blocked;
        }
        self.moves += 1;
        if self.player.pos == self.maze.goal() {
            self.solved += 1;
            info!("goal reached in {} moves ({} solved)", self.moves, self.solved);
            self.new_maze();
            return Outcome::Solved;
        }
        Outcome::Moved
    }

    fn new_maze(&mut self) {
        self.maze.regenerate(&mut self.rng);
        self.player = Player::new(self.maze.start());
        self.moves = 0;
    }

    pub fn maze(&self) -> &GridMaze {
        &self.maze
    }

    pub fn player(&self) -> Pos {
        self.player.pos
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn solved(&self) -> u32 {
        self.solved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn starts_at_the_entrance() {
        let game = Game::new(4, 4, StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(game.player(), Pos::new(0, 0));
        assert_eq!(game.moves(), 0);
        assert_eq!(game.solved(), 0);
    }

    #[test]
    fn invalid_dimensions_fail_fast() {
        assert!(matches!(
            Game::new(0, 0, StepRng::new(0, 0)),
            Err(MazeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn blocked_move_is_a_no_op() {
        // Known 3x3 layout: (0,0) is walled below.
        let mut game = Game::new(3, 3, StepRng::new(0, 0)).unwrap();
        assert_eq!(game.apply(Action::Move(Direction::Down)), Outcome::Blocked);
        assert_eq!(game.apply(Action::Move(Direction::Up)), Outcome::Blocked);
        assert_eq!(game.apply(Action::Move(Direction::Left)), Outcome::Blocked);
        assert_eq!(game.player(), Pos::new(0, 0));
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn walking_the_known_layout_reaches_the_goal() {
        let mut game = Game::new(3, 3, StepRng::new(0, 0)).unwrap();
        let route = [Direction::Right, Direction::Right, Direction::Down];
        for dir in route {
            assert_eq!(game.apply(Action::Move(dir)), Outcome::Moved);
        }
        assert_eq!(game.player(), Pos::new(2, 1));
        assert_eq!(game.moves(), 3);

        assert_eq!(game.apply(Action::Move(Direction::Down)), Outcome::Solved);
        assert_eq!(game.player(), Pos::new(0, 0));
        assert_eq!(game.moves(), 0);
        assert_eq!(game.solved(), 1);
        assert_eq!(game.maze().passage_count(), 8);
    }

    #[test]
    fn two_cell_corridor_resets_on_goal() {
        let mut game = Game::new(2, 1, StdRng::seed_from_u64(9)).unwrap();
        let outcome = game.apply(Action::Move(Direction::Right));
        assert_eq!(outcome, Outcome::Solved);
        assert!(outcome.regenerated());
        assert_eq!(game.player(), Pos::new(0, 0));
        assert!(!game.maze().has_wall(0, 0, Direction::Up).unwrap());
        assert_eq!(game.maze().passage_count(), 1);
    }

    #[test]
    fn shuffle_resets_player_and_moves() {
        let mut game = Game::new(3, 3, StepRng::new(0, 0)).unwrap();
        game.apply(Action::Move(Direction::Right));
        assert_eq!(game.player(), Pos::new(1, 0));

        let outcome = game.apply(Action::Shuffle);
        assert_eq!(outcome, Outcome::Shuffled);
        assert!(outcome.regenerated());
        assert_eq!(game.player(), Pos::new(0, 0));
        assert_eq!(game.moves(), 0);
        assert_eq!(game.solved(), 0);
    }

    #[test]
    fn quit_leaves_state_alone() {
        let mut game = Game::new(3, 3, StepRng::new(0, 0)).unwrap();
        game.apply(Action::Move(Direction::Right));
        let before = game.maze().clone();
        assert_eq!(game.apply(Action::Quit), Outcome::Quit);
        assert_eq!(game.maze(), &before);
        assert_eq!(game.player(), Pos::new(1, 0));
        assert!(!Outcome::Quit.regenerated());
    }
}
