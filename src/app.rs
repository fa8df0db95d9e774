use std::{
    io::{Stdout, Write},
    time::Duration,
};

use crossterm::{
    cursor,
    event::{self, KeyCode},
    execute, queue,
    style::{self, Attribute, Color, StyledContent, Stylize},
    terminal::{self, ClearType},
};

use crate::maze::{Maze, Side};
use crate::render::{CellBounds, Point, Renderer};

/// Width of one character-grid slot when rendered, in terminal columns.
const SLOT_WIDTH: u16 = 2;

const WALL_GLYPH: &str = "██";
const BLANK_GLYPH: &str = "  ";
const MOVE_GLYPH: &str = "••";

/// Terminal renderer. The wall-flag grid maps onto a
/// `(2*columns + 1) x (2*rows + 1)` character grid: cell interiors at
/// odd/odd slots, walls between them, pillars at even/even slots.
///
/// Wall and move events arrive in drawable coordinates; the renderer
/// recovers cell indices from them using the same geometry the grid was
/// built with.
pub struct TermRenderer {
    stdout: Stdout,
    num_columns: u16,
    num_rows: u16,
    origin: Point,
    cell_width: f64,
    cell_height: f64,
    /// Visual pacing only; correctness never depends on it.
    frame_delay: Duration,
}

impl TermRenderer {
    pub fn new(
        num_columns: u16,
        num_rows: u16,
        origin: Point,
        cell_width: f64,
        cell_height: f64,
        frame_delay: Duration,
    ) -> Self {
        TermRenderer {
            stdout: std::io::stdout(),
            num_columns,
            num_rows,
            origin,
            cell_width,
            cell_height,
            frame_delay,
        }
    }

    /// Character-grid height, in terminal rows. Saturates so oversized
    /// dimensions fail the terminal-size check instead of wrapping.
    pub fn grid_rows(num_rows: u16) -> u16 {
        num_rows.saturating_mul(2).saturating_add(1)
    }

    /// Character-grid width, in terminal columns.
    pub fn grid_columns(num_columns: u16) -> u16 {
        num_columns
            .saturating_mul(2)
            .saturating_add(1)
            .saturating_mul(SLOT_WIDTH)
    }

    /// Paints the empty character grid: pillars at even/even slots,
    /// everything else blank. Walls appear cell by cell afterwards.
    pub fn prepare(&mut self) -> std::io::Result<()> {
        queue!(self.stdout, cursor::MoveTo(0, 0))?;
        for y in 0..Self::grid_rows(self.num_rows) {
            for x in 0..self.num_columns * 2 + 1 {
                let glyph = if x % 2 == 0 && y % 2 == 0 {
                    WALL_GLYPH.with(Color::White)
                } else {
                    BLANK_GLYPH.with(Color::Reset)
                };
                self.stdout.queue_glyph(x, y, glyph)?;
            }
        }
        self.stdout.flush()
    }

    fn cell_of(&self, point: Point) -> (u16, u16) {
        let column = ((point.x - self.origin.x) / self.cell_width).floor() as u16;
        let row = ((point.y - self.origin.y) / self.cell_height).floor() as u16;
        (
            column.min(self.num_columns - 1),
            row.min(self.num_rows - 1),
        )
    }
}

trait QueueGlyph {
    fn queue_glyph(
        &mut self,
        x: u16,
        y: u16,
        glyph: StyledContent<&'static str>,
    ) -> std::io::Result<()>;
}

impl QueueGlyph for Stdout {
    /// Queues one styled glyph at a character-grid slot.
    fn queue_glyph(
        &mut self,
        x: u16,
        y: u16,
        glyph: StyledContent<&'static str>,
    ) -> std::io::Result<()> {
        queue!(
            self,
            cursor::MoveTo(x * SLOT_WIDTH, y),
            style::PrintStyledContent(glyph)
        )
    }
}

impl Renderer for TermRenderer {
    fn draw_wall(&mut self, bounds: CellBounds, side: Side, present: bool) -> std::io::Result<()> {
        let (column, row) = self.cell_of(bounds.center());
        let (x, y) = match side {
            Side::Left => (column * 2, row * 2 + 1),
            Side::Right => (column * 2 + 2, row * 2 + 1),
            Side::Top => (column * 2 + 1, row * 2),
            Side::Bottom => (column * 2 + 1, row * 2 + 2),
        };
        let glyph = if present {
            WALL_GLYPH.with(Color::White)
        } else {
            BLANK_GLYPH.with(Color::Reset)
        };
        self.stdout.queue_glyph(x, y, glyph)
    }

    fn draw_move(&mut self, from: Point, to: Point, backtrack: bool) -> std::io::Result<()> {
        let (from_column, from_row) = self.cell_of(from);
        let (to_column, to_row) = self.cell_of(to);
        // Passage slot between the two cell slots
        let mid = (from_column + to_column + 1, from_row + to_row + 1);
        // Forward moves paint the cell being entered, backtracks repaint
        // the dead end being left
        let tip = if backtrack {
            (from_column * 2 + 1, from_row * 2 + 1)
        } else {
            (to_column * 2 + 1, to_row * 2 + 1)
        };
        let color = if backtrack { Color::DarkGrey } else { Color::Red };
        self.stdout.queue_glyph(mid.0, mid.1, MOVE_GLYPH.with(color))?;
        self.stdout.queue_glyph(tip.0, tip.1, MOVE_GLYPH.with(color))
    }

    fn refresh(&mut self) -> std::io::Result<()> {
        self.stdout.flush()?;
        std::thread::sleep(self.frame_delay);
        Ok(())
    }
}

/// What to build and animate, before any terminal state is touched.
#[derive(Debug, Clone)]
pub struct Settings {
    pub num_columns: u16,
    pub num_rows: u16,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            num_columns: 16,
            num_rows: 12,
            seed: None,
        }
    }
}

impl Settings {
    /// Nominal canvas the drawable coordinates live on. Purely a
    /// coordinate system; the terminal renderer maps it back to slots.
    const SCREEN: (f64, f64) = (800.0, 600.0);
    const MARGIN: f64 = 50.0;

    pub fn origin(&self) -> Point {
        Point {
            x: Self::MARGIN,
            y: Self::MARGIN,
        }
    }

    pub fn cell_width(&self) -> f64 {
        (Self::SCREEN.0 - 2.0 * Self::MARGIN) / self.num_columns as f64
    }

    pub fn cell_height(&self) -> f64 {
        (Self::SCREEN.1 - 2.0 * Self::MARGIN) / self.num_rows as f64
    }
}

/// Interactive shell: raw mode, alternate screen, the generate/solve
/// animation, and a blocking wait for Esc before teardown.
pub struct App {
    frame_delay: Duration,
}

impl Default for App {
    fn default() -> Self {
        App {
            frame_delay: Duration::from_millis(15),
        }
    }
}

impl App {
    /// Set a panic hook to restore terminal state on panic, so a crash
    /// never leaves the terminal in raw mode or the alternate screen.
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout());
            hook(panic_info);
        }));
    }

    fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }

    fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        execute!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Block until the user presses Esc.
    fn wait_for_esc() -> std::io::Result<()> {
        loop {
            if let event::Event::Key(event::KeyEvent { code, kind, .. }) = event::read()? {
                if code == KeyCode::Esc && kind == event::KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }

    /// Runs the full animation: generate, solve, report, wait for Esc.
    pub fn run(&self, settings: &Settings) -> std::io::Result<()> {
        let mut stdout = std::io::stdout();

        let needed_columns = TermRenderer::grid_columns(settings.num_columns);
        // Two extra rows for the result messages below the maze
        let needed_rows = TermRenderer::grid_rows(settings.num_rows) + 2;
        let (term_columns, term_rows) = terminal::size()?;
        if term_columns < needed_columns || term_rows < needed_rows {
            eprintln!(
                "Terminal is too small for a {}x{} maze: need {}x{}, have {}x{}.",
                settings.num_columns,
                settings.num_rows,
                needed_columns,
                needed_rows,
                term_columns,
                term_rows
            );
            return Ok(());
        }

        App::setup_terminal(&mut stdout)?;
        let result = self.animate(&mut stdout, settings);
        App::restore_terminal(&mut stdout)?;
        result
    }

    fn animate(&self, stdout: &mut Stdout, settings: &Settings) -> std::io::Result<()> {
        let mut renderer = TermRenderer::new(
            settings.num_columns,
            settings.num_rows,
            settings.origin(),
            settings.cell_width(),
            settings.cell_height(),
            self.frame_delay,
        );
        renderer.prepare()?;

        let mut maze = Maze::new(
            settings.origin(),
            settings.num_columns,
            settings.num_rows,
            settings.cell_width(),
            settings.cell_height(),
            Box::new(renderer),
            settings.seed,
        )
        .map_err(std::io::Error::other)?;

        maze.generate()?;
        let message_row = TermRenderer::grid_rows(settings.num_rows);
        execute!(
            stdout,
            cursor::MoveTo(0, message_row),
            style::PrintStyledContent("Maze created.\r\n".with(Color::Green))
        )?;

        let solved = maze.solve()?;
        let message = if solved {
            "Maze solved!\r\n".with(Color::Green).attribute(Attribute::Bold)
        } else {
            "Couldn't solve this maze.\r\n"
                .with(Color::Yellow)
                .attribute(Attribute::Bold)
        };
        execute!(
            stdout,
            style::PrintStyledContent(message),
            style::PrintStyledContent("Press Esc to exit...".with(Color::Blue))
        )?;

        App::wait_for_esc()
    }
}
