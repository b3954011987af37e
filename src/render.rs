use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use rand::Rng;
use unicode_width::UnicodeWidthStr;

use crate::direction::Pos;
use crate::game::Game;
use crate::maze::GridMaze;

/// Terminal columns per lattice point.
pub const CELL_W: usize = 2;
pub const SHUFFLE_LABEL: &str = "[ Shuffle ]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && column - self.x < self.width
            && row - self.y < self.height
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Glyph {
    Player,
    Goal,
    Wall,
    Empty,
}

/// Screen placement of the HUD, the maze lattice and the shuffle button,
/// centred in the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub origin_x: u16,
    pub origin_y: u16,
    pub button: Rect,
}

impl Layout {
    /// Terminal size needed for a maze: HUD row, lattice rows, button row.
    pub fn required(maze: &GridMaze) -> (usize, usize) {
        let (lw, lh) = maze.lattice_size();
        let needed_w = lw.saturating_mul(CELL_W).max(SHUFFLE_LABEL.len());
        let needed_h = lh.saturating_add(2);
        (needed_w, needed_h)
    }

    /// `None` when the maze does not fit, including mazes wider or taller
    /// than any terminal can address.
    pub fn compute(maze: &GridMaze, term: (u16, u16)) -> Option<Layout> {
        let (needed_w, needed_h) = Layout::required(maze);
        let needed_w = u16::try_from(needed_w).ok()?;
        let needed_h = u16::try_from(needed_h).ok()?;
        let (term_w, term_h) = term;
        if term_w < needed_w || term_h < needed_h {
            return None;
        }
        let origin_x = (term_w - needed_w) / 2;
        let origin_y = (term_h - needed_h) / 2 + 1;
        let button = Rect {
            x: origin_x,
            y: origin_y + (needed_h - 2),
            width: SHUFFLE_LABEL.len() as u16,
            height: 1,
        };
        Some(Layout {
            origin_x,
            origin_y,
            button,
        })
    }
}

pub struct Renderer {
    last: Vec<Glyph>,
    last_hud: String,
    needs_full: bool,
    layout: Option<Layout>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            last: Vec::new(),
            last_hud: String::new(),
            needs_full: true,
            layout: None,
        }
    }

    /// Forces the next frame to repaint everything.
    pub fn invalidate(&mut self) {
        self.needs_full = true;
    }

    /// The button rectangle from the last frame, or an empty one if the
    /// terminal was too small to draw it.
    pub fn shuffle_button(&self) -> Rect {
        self.layout.map(|l| l.button).unwrap_or_default()
    }

    pub fn render<W: Write, R: Rng>(
        &mut self,
        out: &mut W,
        game: &Game<R>,
        term: (u16, u16),
    ) -> io::Result<()> {
        let maze = game.maze();
        out.queue(MoveTo(0, 0))?;

        let layout = match Layout::compute(maze, term) {
            Some(layout) => layout,
            None => {
                let (needed_w, needed_h) = Layout::required(maze);
                out.queue(Clear(ClearType::All))?;
                out.queue(Print(format!(
                    "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
                    needed_w, needed_h, term.0, term.1
                )))?;
                out.flush()?;
                self.layout = None;
                self.needs_full = true;
                return Ok(());
            }
        };

        let (lw, lh) = maze.lattice_size();
        if self.layout != Some(layout) || self.last.len() != lw * lh {
            self.layout = Some(layout);
            self.last = vec![Glyph::Empty; lw * lh];
            self.needs_full = true;
        }
        if self.needs_full {
            out.queue(Clear(ClearType::All))?;
        }

        let hud = format!(
            "Moves: {}  Solved: {}  (arrows/hjkl move, s shuffle, q quit)",
            game.moves(),
            game.solved()
        );
        if self.needs_full || hud != self.last_hud {
            out.queue(MoveTo(layout.origin_x, layout.origin_y - 1))?;
            out.queue(SetForegroundColor(Color::White))?;
            out.queue(Clear(ClearType::CurrentLine))?;
            out.queue(Print(&hud))?;
            out.queue(ResetColor)?;
            self.last_hud = hud;
        }

        for ly in 0..lh {
            for lx in 0..lw {
                let glyph = glyph_at(maze, game.player(), lx, ly);
                let idx = ly * lw + lx;
                if self.needs_full || glyph != self.last[idx] {
                    self.last[idx] = glyph;
                    draw_glyph(out, &layout, lx, ly, glyph)?;
                }
            }
        }

        if self.needs_full {
            draw_button(out, layout.button)?;
        }
        self.needs_full = false;

        out.flush()?;
        Ok(())
    }
}

fn glyph_at(maze: &GridMaze, player: Pos, lx: usize, ly: usize) -> Glyph {
    if lx % 2 == 1 && ly % 2 == 1 {
        let cell = Pos::new(lx / 2, ly / 2);
        if cell == player {
            return Glyph::Player;
        }
        if cell == maze.goal() {
            return Glyph::Goal;
        }
    }
    if maze.lattice_is_wall(lx, ly) {
        Glyph::Wall
    } else {
        Glyph::Empty
    }
}

fn draw_glyph<W: Write>(
    out: &mut W,
    layout: &Layout,
    lx: usize,
    ly: usize,
    glyph: Glyph,
) -> io::Result<()> {
    let (text, color) = match glyph {
        Glyph::Player => ("●", Color::Blue),
        Glyph::Goal => ("⚑", Color::Green),
        Glyph::Wall => ("██", Color::White),
        Glyph::Empty => ("  ", Color::Reset),
    };
    // The layout only exists when the whole lattice fits on screen.
    let x_pos = layout.origin_x + (lx * CELL_W) as u16;
    let y_pos = layout.origin_y + ly as u16;
    out.queue(MoveTo(x_pos, y_pos))?;
    out.queue(SetForegroundColor(color))?;
    out.queue(Print(text))?;
    let w = UnicodeWidthStr::width(text);
    if w < CELL_W {
        for _ in 0..(CELL_W - w) {
            out.queue(Print(' '))?;
        }
    }
    out.queue(ResetColor)?;
    Ok(())
}

fn draw_button<W: Write>(out: &mut W, button: Rect) -> io::Result<()> {
    out.queue(MoveTo(button.x, button.y))?;
    out.queue(SetBackgroundColor(Color::DarkGreen))?;
    out.queue(SetForegroundColor(Color::White))?;
    out.queue(Print(SHUFFLE_LABEL))?;
    out.queue(ResetColor)?;
    Ok(())
}
