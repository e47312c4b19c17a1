//! World-space rectangles, vectors, and the mapping between world units and
//! terminal cells.

/// Axis-aligned rectangle in world units (top-left origin, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Move the rectangle so its center sits at `center`.
    pub fn centered_at(mut self, center: Vec2) -> Self {
        self.x = center.x - self.width / 2.0;
        self.y = center.y - self.height / 2.0;
        self
    }

    /// True if the two rectangles overlap. Touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}

/// 2D vector in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction, or `None` for a zero-length vector.
    pub fn normalized(&self) -> Option<Vec2> {
        let len = self.length();
        if len <= f64::EPSILON {
            return None;
        }
        Some(Vec2::new(self.x / len, self.y / len))
    }

    pub fn scale(&self, factor: f64) -> Vec2 {
        Vec2::new(self.x * factor, self.y * factor)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Maps a terminal area (in cells) onto a fixed-size world.
///
/// Scenes use the scales to project world rectangles; the input layer uses
/// `to_world` to turn mouse clicks into world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub column: u16,
    pub row: u16,
    pub columns: u16,
    pub rows: u16,
    pub world_width: f64,
    pub world_height: f64,
}

impl Viewport {
    pub fn new(
        column: u16,
        row: u16,
        columns: u16,
        rows: u16,
        world_width: f64,
        world_height: f64,
    ) -> Self {
        Self {
            column,
            row,
            columns,
            rows,
            world_width,
            world_height,
        }
    }

    /// Cells per world unit, horizontally.
    pub fn x_scale(&self) -> f64 {
        self.columns as f64 / self.world_width
    }

    /// Cells per world unit, vertically.
    pub fn y_scale(&self) -> f64 {
        self.rows as f64 / self.world_height
    }

    /// World coordinates at the center of the given terminal cell.
    pub fn to_world(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        if self.columns == 0 || self.rows == 0 {
            return None;
        }
        if column < self.column
            || row < self.row
            || column >= self.column + self.columns
            || row >= self.row + self.rows
        {
            return None;
        }
        let local_x = (column - self.column) as f64 + 0.5;
        let local_y = (row - self.row) as f64 + 0.5;
        Some((local_x / self.x_scale(), local_y / self.y_scale()))
    }

    /// Terminal column of a world x coordinate, relative to the viewport.
    pub fn column_of(&self, x: f64) -> i32 {
        (x * self.x_scale()).floor() as i32
    }

    /// Terminal row of a world y coordinate, relative to the viewport.
    pub fn row_of(&self, y: f64) -> i32 {
        (y * self.y_scale()).floor() as i32
    }
}
