use crate::error::MazeError;
use crate::render::CELL_W;

pub const DEFAULT_WIDTH: usize = 15;
pub const DEFAULT_HEIGHT: usize = 10;
pub const DEFAULT_RENDER_FPS: u64 = 60;

/// Widest maze whose lattice, `CELL_W` columns per point, fits a terminal row.
pub const MAX_WIDTH: usize = (u16::MAX as usize / CELL_W - 1) / 2;
/// Tallest maze whose lattice plus HUD and button rows fits a terminal.
pub const MAX_HEIGHT: usize = (u16::MAX as usize - 2 - 1) / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub width: usize,
    pub height: usize,
    pub seed: Option<u64>,
    pub render_fps: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
            render_fps: DEFAULT_RENDER_FPS,
        }
    }
}

impl Settings {
    /// Reads `MAZE_WIDTH`, `MAZE_HEIGHT`, `MAZE_SEED` and `MAZE_FPS`.
    pub fn from_env() -> Result<Self, MazeError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, MazeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        Ok(Self {
            width: dimension(&lookup, "MAZE_WIDTH", MAX_WIDTH)?.unwrap_or(defaults.width),
            height: dimension(&lookup, "MAZE_HEIGHT", MAX_HEIGHT)?.unwrap_or(defaults.height),
            seed: seed(&lookup)?,
            render_fps: positive(&lookup, "MAZE_FPS")?.unwrap_or(defaults.render_fps),
        })
    }
}

fn positive<F>(lookup: &F, name: &'static str) -> Result<Option<u64>, MazeError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|v| *v > 0)
            .map(Some)
            .ok_or(MazeError::InvalidSetting { name, value: raw }),
    }
}

fn dimension<F>(lookup: &F, name: &'static str, max: usize) -> Result<Option<usize>, MazeError>
where
    F: Fn(&str) -> Option<String>,
{
    match positive(lookup, name)? {
        None => Ok(None),
        Some(v) if v <= max as u64 => Ok(Some(v as usize)),
        Some(v) => Err(MazeError::InvalidSetting {
            name,
            value: v.to_string(),
        }),
    }
}

// Zero is a perfectly good seed, so this one skips the positivity check.
fn seed<F>(lookup: &F) -> Result<Option<u64>, MazeError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup("MAZE_SEED") {
        None => Ok(None),
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(v) => Ok(Some(v)),
            Err(_) => Err(MazeError::InvalidSetting {
                name: "MAZE_SEED",
                value: raw,
            }),
        },
    }
}
