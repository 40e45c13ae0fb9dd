//! Rectangles from grid anchors.
//!
//! Zones, buttons, and labels are all placed by a list of anchor cells.
//! `compute_span` reduces the anchors to their bounding box and returns the
//! shared primitive (`SpanRect`); the element-specific builders turn that into
//! a `Rect`.
//!
//! ## Centering
//!
//! The center is the midpoint of the two *extreme* anchors' centers, not the
//! mean of all anchors: interior anchors never move the rectangle.
//!
//! ## Zone Size
//!
//! ```text
//! width  = card_w + step_x × col_span
//! height = card_h + step_y × row_span
//! ```

use serde::{Deserialize, Serialize};

use super::card_size::{CardMetrics, Orientation};
use super::grid::{GridMetrics, GridPoint};
use super::length::{Length, LengthContext};

/// A rectangle described by its center and extent.
///
/// Consumers pivot placement around the card midpoint, so the center is the
/// primary coordinate; `left`/`top` are derived.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center_x: Length,
    pub center_y: Length,
    pub width: Length,
    pub height: Length,
}

impl Rect {
    /// Left edge: `center_x − width / 2`.
    #[must_use]
    pub fn left(&self) -> Length {
        self.center_x.clone() - self.width.clone() / 2.0
    }

    /// Top edge: `center_y − height / 2`.
    #[must_use]
    pub fn top(&self) -> Length {
        self.center_y.clone() - self.height.clone() / 2.0
    }

    /// Resolve against a concrete container.
    ///
    /// Follows CSS: horizontal properties take `%` from the container width,
    /// vertical properties from its height.
    #[must_use]
    pub fn resolve(&self, viewport: &Viewport) -> ResolvedRect {
        let horizontal = viewport.horizontal();
        let vertical = viewport.vertical();

        ResolvedRect {
            center_x: self.center_x.resolve(&horizontal),
            center_y: self.center_y.resolve(&vertical),
            width: self.width.resolve(&horizontal),
            height: self.height.resolve(&vertical),
        }
    }
}

/// Concrete sizes a `Rect` is resolved against.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Board container width (px).
    pub container_width: f64,
    /// Board container height (px).
    pub container_height: f64,
    /// Window viewport height (px), the base of `vh`.
    pub viewport_height: f64,
}

impl Viewport {
    /// Create a viewport description.
    #[must_use]
    pub const fn new(container_width: f64, container_height: f64, viewport_height: f64) -> Self {
        Self {
            container_width,
            container_height,
            viewport_height,
        }
    }

    /// Context for horizontal lengths.
    #[must_use]
    pub const fn horizontal(&self) -> LengthContext {
        LengthContext::new(self.container_width, self.viewport_height)
    }

    /// Context for vertical lengths.
    #[must_use]
    pub const fn vertical(&self) -> LengthContext {
        LengthContext::new(self.container_height, self.viewport_height)
    }
}

/// A rectangle in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRect {
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ResolvedRect {
    #[must_use]
    pub fn left(&self) -> f64 {
        self.center_x - self.width / 2.0
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.center_y - self.height / 2.0
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.center_x + self.width / 2.0
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.center_y + self.height / 2.0
    }
}

/// Bounding box of an anchor list, in grid cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnchorBounds {
    pub min_row: u32,
    pub max_row: u32,
    pub min_col: u32,
    pub max_col: u32,
}

impl AnchorBounds {
    /// Bounding box of `anchors`.
    ///
    /// An empty list is treated as a single anchor at the origin.
    #[must_use]
    pub fn of(anchors: &[GridPoint]) -> Self {
        let fallback = [GridPoint::ORIGIN];
        let anchors = if anchors.is_empty() { &fallback[..] } else { anchors };

        let rows = anchors.iter().map(|p| p.row);
        let cols = anchors.iter().map(|p| p.col);

        Self {
            min_row: rows.clone().min().unwrap_or(0),
            max_row: rows.max().unwrap_or(0),
            min_col: cols.clone().min().unwrap_or(0),
            max_col: cols.max().unwrap_or(0),
        }
    }

    #[must_use]
    pub const fn row_span(&self) -> u32 {
        self.max_row - self.min_row
    }

    #[must_use]
    pub const fn col_span(&self) -> u32 {
        self.max_col - self.min_col
    }
}

/// Shared result of anchor reduction: center, card size, and span.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpanRect {
    pub center_x: Length,
    pub center_y: Length,
    pub card_w: Length,
    pub card_h: Length,
    pub col_span: u32,
    pub row_span: u32,
}

impl SpanRect {
    /// Width of the spanned cell block: `card_w + step_x × col_span`.
    #[must_use]
    pub fn block_width(&self, step_x: Length) -> Length {
        extend(&self.card_w, step_x, self.col_span)
    }

    /// Height of the spanned cell block: `card_h + step_y × row_span`.
    #[must_use]
    pub fn block_height(&self, step_y: Length) -> Length {
        extend(&self.card_h, step_y, self.row_span)
    }
}

/// `card + step × span`, or just `card` for a single cell.
fn extend(card: &Length, step: Length, span: u32) -> Length {
    match span {
        0 => card.clone(),
        _ => card.clone() + step * f64::from(span),
    }
}

/// Midpoint of two centers; a degenerate pair yields the center itself.
fn midpoint(a: Length, b: Length) -> Length {
    if a == b {
        a
    } else {
        (a + b) / 2.0
    }
}

/// Reduce anchors to center, card size, and span.
pub fn compute_span<G, C>(orientation: Orientation, anchors: &[GridPoint], grid: &G, cards: &C) -> SpanRect
where
    G: GridMetrics + ?Sized,
    C: CardMetrics + ?Sized,
{
    let bounds = AnchorBounds::of(anchors);

    let center_x = midpoint(grid.center_x_of(bounds.min_col), grid.center_x_of(bounds.max_col));
    let center_y = midpoint(grid.center_y_of(bounds.min_row), grid.center_y_of(bounds.max_row));

    let dims = cards.size_by_orientation(orientation);

    SpanRect {
        center_x,
        center_y,
        card_w: dims.w,
        card_h: dims.h,
        col_span: bounds.col_span(),
        row_span: bounds.row_span(),
    }
}

/// Rectangle of a zone covering all of its anchors.
pub fn zone_rect<G, C>(orientation: Orientation, anchors: &[GridPoint], grid: &G, cards: &C) -> Rect
where
    G: GridMetrics + ?Sized,
    C: CardMetrics + ?Sized,
{
    let span = compute_span(orientation, anchors, grid, cards);
    let width = span.block_width(grid.step_x());
    let height = span.block_height(grid.step_y());

    Rect {
        center_x: span.center_x,
        center_y: span.center_y,
        width,
        height,
    }
}
