/// One of the four edges of a cell.
///
/// `ALL` doubles as the fixed candidate order (left, right, up, down)
/// fed to the random choice during generation and scanned during
/// solving, so a fixed seed always replays the same maze and path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    /// The matching side on the adjacent cell across this edge.
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }
}

/// One grid unit. Walls default to present; the two visitation flags are
/// independent: `carved` belongs to the generation phase, `traversed` to
/// the solving phase, so a maze can be re-solved without touching
/// generation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub has_left_wall: bool,
    pub has_right_wall: bool,
    pub has_top_wall: bool,
    pub has_bottom_wall: bool,
    pub carved: bool,
    pub traversed: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            has_left_wall: true,
            has_right_wall: true,
            has_top_wall: true,
            has_bottom_wall: true,
            carved: false,
            traversed: false,
        }
    }
}

impl Cell {
    pub fn has_wall(&self, side: Side) -> bool {
        match side {
            Side::Left => self.has_left_wall,
            Side::Right => self.has_right_wall,
            Side::Top => self.has_top_wall,
            Side::Bottom => self.has_bottom_wall,
        }
    }

    pub fn set_wall(&mut self, side: Side, present: bool) {
        match side {
            Side::Left => self.has_left_wall = present,
            Side::Right => self.has_right_wall = present,
            Side::Top => self.has_top_wall = present,
            Side::Bottom => self.has_bottom_wall = present,
        }
    }
}
