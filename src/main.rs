use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use maze_runner::config::Settings;
use maze_runner::input::action_for;
use maze_runner::render::Renderer;
use maze_runner::terminal::TerminalGuard;
use maze_runner::{Game, Outcome};

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::from_env().context("reading MAZE_* settings")?;
    info!("starting with {:?}", settings);
    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let game = Game::new(settings.width, settings.height, rng)
        .context("building the first maze")?;

    let mut screen = TerminalGuard::enter(io::stdout()).context("preparing the terminal")?;
    let result = run(screen.writer(), game, &settings);
    drop(screen);
    result
}

fn run<W: Write>(out: &mut W, mut game: Game<StdRng>, settings: &Settings) -> Result<()> {
    let mut renderer = Renderer::new();
    let frame_time = Duration::from_micros(1_000_000 / settings.render_fps.max(1));

    loop {
        let frame_start = Instant::now();
        while event::poll(Duration::from_millis(0))? {
            let event = event::read()?;
            if let Event::Resize(..) = event {
                renderer.invalidate();
                continue;
            }
            let Some(action) = action_for(&event, renderer.shuffle_button()) else {
                continue;
            };
            match game.apply(action) {
                Outcome::Quit => {
                    info!("quit after solving {} mazes", game.solved());
                    return Ok(());
                }
                outcome if outcome.regenerated() => renderer.invalidate(),
                _ => {}
            }
        }

        let term = terminal::size().context("querying terminal size")?;
        renderer.render(out, &game, term)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}
