//! Board geometry: pure functions from grid anchors to rectangles.
//!
//! Everything in this module is referentially transparent. Outputs are
//! symbolic `Length` expressions, so the same results stay valid when the
//! board container is resized.
//!
//! ## Key Types
//!
//! - `Length`: Deferred length expression (`%`, `vh`, `px`)
//! - `Grid` / `GridMetrics`: Cell centers and steps
//! - `CardSize` / `CardMetrics`: Card width and height per orientation
//! - `Rect`: Center + extent rectangle handed to the view layer
//! - `Lane`: Top/middle/bottom sub-position for buttons and labels

pub mod card_size;
pub mod grid;
pub mod length;
pub mod rect;
pub mod slot;

pub use card_size::{CardDimensions, CardMetrics, CardSize, Orientation, CARD_ASPECT_RATIO, CARD_HEIGHT_VH};
pub use grid::{Grid, GridMetrics, GridPoint, GridSpec};
pub use length::{Length, LengthContext, LinearLength, LENGTH_EPSILON};
pub use rect::{compute_span, zone_rect, AnchorBounds, Rect, ResolvedRect, SpanRect, Viewport};
pub use slot::{
    button_rect, label_rect, lane_top, ButtonRectOptions, ButtonSlot, LabelRectOptions, LabelSlot,
    LabelWidthMode, Lane,
};
