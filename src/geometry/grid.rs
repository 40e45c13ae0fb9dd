//! Grid coordinate system over the board container.
//!
//! The container is divided into `n + 1` equal units per axis, and the
//! margin before the first cell is `unit / (n + 1)`:
//!
//! ```text
//! unit   = 100% / (n + 1)
//! margin = unit / (n + 1)
//! step   = margin + unit
//! first  = margin + unit / 2
//! ```
//!
//! ## Orientation of Axes
//!
//! - `row` increases downward: `center_y_of(row) = first_y + step_y × row`
//! - `col` increases leftward from the right edge (col 0 is rightmost):
//!   `center_x_of(col) = 100% − (first_x + step_x × col)`
//!
//! All outputs are `Length` expressions, valid for any container size.

use serde::{Deserialize, Serialize};

use super::length::Length;

/// A cell coordinate on the board grid.
///
/// `row` grows downward, `col` grows leftward (col 0 is the rightmost column).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPoint {
    pub row: u32,
    pub col: u32,
}

impl GridPoint {
    /// The top-right cell.
    pub const ORIGIN: GridPoint = GridPoint::new(0, 0);

    /// Create a grid point.
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: u32,
    pub cols: u32,
}

impl GridSpec {
    /// Create a grid spec.
    #[must_use]
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }
}

impl Default for GridSpec {
    /// The standard board: 4 rows, 5 columns.
    fn default() -> Self {
        Self::new(4, 5)
    }
}

/// Center and step accessors consumed by the rect builders.
///
/// `Grid` is the standard implementation; anything that can place a cell
/// center and report the distance between neighbouring cells can stand in.
pub trait GridMetrics {
    /// Horizontal center of a column.
    fn center_x_of(&self, col: u32) -> Length;

    /// Vertical center of a row.
    fn center_y_of(&self, row: u32) -> Length;

    /// Distance between neighbouring column centers.
    fn step_x(&self) -> Length;

    /// Distance between neighbouring row centers.
    fn step_y(&self) -> Length;
}

/// Axis metrics derived from one dimension's cell count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct AxisMetrics {
    unit: Length,
    margin: Length,
    step: Length,
    first: Length,
}

impl AxisMetrics {
    fn new(count: u32) -> Self {
        let divisions = f64::from(count) + 1.0;
        let unit = Length::percent(100.0) / divisions;
        let margin = unit.clone() / divisions;
        let step = margin.clone() + unit.clone();
        let first = margin.clone() + unit.clone() / 2.0;

        Self {
            unit,
            margin,
            step,
            first,
        }
    }
}

/// Grid over the board container.
///
/// ## Example
///
/// ```
/// use rust_board::geometry::{Grid, GridSpec};
///
/// let grid = Grid::new(GridSpec::new(4, 5));
///
/// // 4 rows: unit = 20%, margin = 4%, first center = 14%, step = 24%
/// assert!((grid.center_y_of(0).linear().percent - 14.0).abs() < 1e-9);
/// assert!((grid.center_y_of(1).linear().percent - 38.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    spec: GridSpec,
    x: AxisMetrics,
    y: AxisMetrics,
}

impl Grid {
    /// Build the grid for the given dimensions.
    ///
    /// A zero row or column count is well defined (the divisors are `n + 1`)
    /// but leaves no cell on that axis for `contains` to accept.
    #[must_use]
    pub fn new(spec: GridSpec) -> Self {
        Self {
            spec,
            x: AxisMetrics::new(spec.cols),
            y: AxisMetrics::new(spec.rows),
        }
    }

    /// Get the grid dimensions.
    #[must_use]
    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.spec.rows
    }

    #[must_use]
    pub fn cols(&self) -> u32 {
        self.spec.cols
    }

    #[must_use]
    pub fn unit_x(&self) -> &Length {
        &self.x.unit
    }

    #[must_use]
    pub fn unit_y(&self) -> &Length {
        &self.y.unit
    }

    #[must_use]
    pub fn margin_x(&self) -> &Length {
        &self.x.margin
    }

    #[must_use]
    pub fn margin_y(&self) -> &Length {
        &self.y.margin
    }

    #[must_use]
    pub fn step_x(&self) -> &Length {
        &self.x.step
    }

    #[must_use]
    pub fn step_y(&self) -> &Length {
        &self.y.step
    }

    /// Vertical center of `row`, measured from the top edge.
    #[must_use]
    pub fn center_y_of(&self, row: u32) -> Length {
        self.y.first.clone() + self.y.step.clone() * f64::from(row)
    }

    /// Horizontal center of `col`, measured from the left edge.
    ///
    /// Columns count from the right, so the offset is mirrored.
    #[must_use]
    pub fn center_x_of(&self, col: u32) -> Length {
        Length::percent(100.0) - (self.x.first.clone() + self.x.step.clone() * f64::from(col))
    }

    /// Check if a point addresses a cell of this grid.
    #[must_use]
    pub fn contains(&self, point: GridPoint) -> bool {
        point.row < self.spec.rows && point.col < self.spec.cols
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GridSpec::default())
    }
}

impl GridMetrics for Grid {
    fn center_x_of(&self, col: u32) -> Length {
        Grid::center_x_of(self, col)
    }

    fn center_y_of(&self, row: u32) -> Length {
        Grid::center_y_of(self, row)
    }

    fn step_x(&self) -> Length {
        self.x.step.clone()
    }

    fn step_y(&self) -> Length {
        self.y.step.clone()
    }
}
