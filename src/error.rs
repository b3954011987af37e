use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("invalid maze dimensions {width}x{height}: both must be at least 1")]
    InvalidDimensions { width: usize, height: usize },
    #[error("cell ({x}, {y}) is outside the {width}x{height} maze")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("invalid value {value:?} for {name}: expected a positive integer in range")]
    InvalidSetting { name: &'static str, value: String },
}
