use crate::maze::cell::Side;

/// A position in drawable coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Drawable rectangle of one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBounds {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CellBounds {
    pub fn center(&self) -> Point {
        Point {
            x: (self.x1 + self.x2) / 2.0,
            y: (self.y1 + self.y2) / 2.0,
        }
    }
}

/// Display capability consumed by the generator and solver. Push-only:
/// the core emits wall and move events and never reads anything back.
///
/// Passed explicitly at the call site; headless callers hand over a
/// [`NoopRenderer`] instead of an absent reference, so the core never
/// branches on renderer presence.
pub trait Renderer {
    /// Draws or erases one of a cell's four edges.
    fn draw_wall(&mut self, bounds: CellBounds, side: Side, present: bool) -> std::io::Result<()>;

    /// Draws a path segment between two cell centers. Backtracking
    /// segments are distinguished visually from forward movement.
    fn draw_move(&mut self, from: Point, to: Point, backtrack: bool) -> std::io::Result<()>;

    /// Flushes pending draw calls to the display. Implementations may
    /// also pause here as a visual pacing hint.
    fn refresh(&mut self) -> std::io::Result<()>;
}

/// Renderer that draws nothing, for headless generation and solving.
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn draw_wall(&mut self, _bounds: CellBounds, _side: Side, _present: bool) -> std::io::Result<()> {
        Ok(())
    }

    fn draw_move(&mut self, _from: Point, _to: Point, _backtrack: bool) -> std::io::Result<()> {
        Ok(())
    }

    fn refresh(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
