//! Sub-positioning of buttons and labels inside one card cell.
//!
//! A cell holds up to three stacked lanes (top, middle, bottom). Each lane is
//! `lane_h` tall and neighbouring lanes are separated by `lane_h / 3`:
//!
//! ```text
//! top    → cell_top
//! middle → cell_top + lane_h + lane_h / 3
//! bottom → cell_top + 2·lane_h + 2·(lane_h / 3)
//! ```
//!
//! The element drawn in a lane may be shorter than the lane itself (labels
//! reserve a button-sized lane but render a shorter box), so the final center
//! is `lane_top + element_h / 2`. Buttons and labels sharing a lane therefore
//! stay top-aligned.
//!
//! Controls are narrow strips running the height of the card cell, so their
//! width is taken from the cell's *height*.

use serde::{Deserialize, Serialize};

use super::card_size::{CardMetrics, Orientation};
use super::grid::{GridMetrics, GridPoint};
use super::length::Length;
use super::rect::{compute_span, Rect};

/// Vertical lane inside a card cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl Lane {
    /// All lanes, top to bottom.
    pub const ALL: [Lane; 3] = [Lane::Top, Lane::Middle, Lane::Bottom];

    /// Zero-based lane index (top = 0).
    #[must_use]
    pub const fn index(self) -> u32 {
        match self {
            Lane::Top => 0,
            Lane::Middle => 1,
            Lane::Bottom => 2,
        }
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lane::Top => f.write_str("top"),
            Lane::Middle => f.write_str("middle"),
            Lane::Bottom => f.write_str("bottom"),
        }
    }
}

/// Lane a button occupies.
pub type ButtonSlot = Lane;

/// Lane a label occupies.
pub type LabelSlot = Lane;

/// Top edge of `lane` within a cell whose top edge is `cell_top`.
pub fn lane_top(cell_top: Length, lane: Lane, lane_height: &Length) -> Length {
    let gap = lane_height.clone() / 3.0;
    match lane {
        Lane::Top => cell_top,
        Lane::Middle => cell_top + lane_height.clone() + gap,
        Lane::Bottom => cell_top + lane_height.clone() * 2.0 + gap * 2.0,
    }
}

/// Options for `button_rect`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ButtonRectOptions {
    /// Button height as a fraction of the card height.
    pub height_ratio: f64,
    pub slot: ButtonSlot,
}

impl Default for ButtonRectOptions {
    fn default() -> Self {
        Self {
            height_ratio: 0.25,
            slot: Lane::Top,
        }
    }
}

impl ButtonRectOptions {
    #[must_use]
    pub fn with_slot(mut self, slot: ButtonSlot) -> Self {
        self.slot = slot;
        self
    }

    #[must_use]
    pub fn with_height_ratio(mut self, ratio: f64) -> Self {
        self.height_ratio = ratio;
        self
    }
}

/// Which extent a label's width follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelWidthMode {
    /// The card height (same strip width as buttons in a single cell).
    #[default]
    CardHeight,
    /// The full width of the spanned cell block.
    CardRectWidth,
}

/// Options for `label_rect`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelRectOptions {
    /// Visual label height as a fraction of the card height.
    pub height_ratio: f64,
    /// Reserved lane height as a fraction of the card height.
    pub lane_height_ratio: f64,
    pub width_mode: LabelWidthMode,
    pub slot: LabelSlot,
}

impl Default for LabelRectOptions {
    fn default() -> Self {
        Self {
            height_ratio: 1.0 / 6.0,
            lane_height_ratio: 0.25,
            width_mode: LabelWidthMode::CardHeight,
            slot: Lane::Top,
        }
    }
}

impl LabelRectOptions {
    #[must_use]
    pub fn with_slot(mut self, slot: LabelSlot) -> Self {
        self.slot = slot;
        self
    }

    #[must_use]
    pub fn with_width_mode(mut self, mode: LabelWidthMode) -> Self {
        self.width_mode = mode;
        self
    }
}

/// Rectangle of a button in one lane of its anchor cell.
pub fn button_rect<G, C>(
    orientation: Orientation,
    anchors: &[GridPoint],
    grid: &G,
    cards: &C,
    options: ButtonRectOptions,
) -> Rect
where
    G: GridMetrics + ?Sized,
    C: CardMetrics + ?Sized,
{
    let span = compute_span(orientation, anchors, grid, cards);
    let cell_h = span.block_height(grid.step_y());
    let button_h = span.card_h.clone() * options.height_ratio;

    let cell_top = span.center_y.clone() - cell_h.clone() / 2.0;
    let top = lane_top(cell_top, options.slot, &button_h);

    Rect {
        center_x: span.center_x,
        center_y: top + button_h.clone() / 2.0,
        width: cell_h,
        height: button_h,
    }
}

/// Rectangle of a label in one lane of its anchor cell.
///
/// Lane positions use `lane_height_ratio`; the label itself is
/// `height_ratio` tall.
pub fn label_rect<G, C>(
    orientation: Orientation,
    anchors: &[GridPoint],
    grid: &G,
    cards: &C,
    options: LabelRectOptions,
) -> Rect
where
    G: GridMetrics + ?Sized,
    C: CardMetrics + ?Sized,
{
    let span = compute_span(orientation, anchors, grid, cards);
    let cell_h = span.block_height(grid.step_y());
    let label_h = span.card_h.clone() * options.height_ratio;
    let lane_h = span.card_h.clone() * options.lane_height_ratio;

    let cell_top = span.center_y.clone() - cell_h / 2.0;
    let top = lane_top(cell_top, options.slot, &lane_h);

    let width = match options.width_mode {
        LabelWidthMode::CardHeight => span.card_h.clone(),
        LabelWidthMode::CardRectWidth => span.block_width(grid.step_x()),
    };

    Rect {
        center_x: span.center_x,
        center_y: top + label_h.clone() / 2.0,
        width,
        height: label_h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::card_size::CardSize;
    use crate::geometry::grid::{Grid, GridSpec};
    use crate::geometry::length::LENGTH_EPSILON;

    fn setup() -> (Grid, CardSize) {
        (Grid::new(GridSpec::new(4, 5)), CardSize::new())
    }

    #[test]
    fn test_lane_offsets() {
        let lane_h = Length::px(30.0);
        let top = |lane| lane_top(Length::px(100.0), lane, &lane_h).linear().px;

        assert!((top(Lane::Top) - 100.0).abs() < LENGTH_EPSILON);
        assert!((top(Lane::Middle) - 140.0).abs() < LENGTH_EPSILON);
        assert!((top(Lane::Bottom) - 180.0).abs() < LENGTH_EPSILON);
    }

    #[test]
    fn test_lanes_are_evenly_spaced() {
        let lane_h = Length::vh(5.0);
        let tops: Vec<f64> = Lane::ALL
            .iter()
            .map(|&lane| lane_top(Length::zero(), lane, &lane_h).linear().vh)
            .collect();

        assert!(((tops[1] - tops[0]) - (tops[2] - tops[1])).abs() < LENGTH_EPSILON);
    }

    #[test]
    fn test_button_top_lane_touches_cell_top() {
        let (grid, cards) = setup();
        let anchors = [GridPoint::new(2, 4)];
        let button = button_rect(Orientation::Portrait, &anchors, &grid, &cards, ButtonRectOptions::default());

        let cell_top = grid.center_y_of(2) - cards.portrait().h / 2.0;
        assert!(button.top().approx_eq(&cell_top));
    }

    #[test]
    fn test_button_dimensions() {
        let (grid, cards) = setup();
        let anchors = [GridPoint::new(2, 4)];
        let button = button_rect(
            Orientation::Portrait,
            &anchors,
            &grid,
            &cards,
            ButtonRectOptions::default().with_slot(Lane::Bottom),
        );

        // Width runs the full height of the card cell.
        assert!(button.width.approx_eq(&cards.portrait().h));
        assert!(button.height.approx_eq(&(cards.portrait().h * 0.25)));
        assert_eq!(button.center_x, grid.center_x_of(4));
    }

    #[test]
    fn test_three_buttons_fit_in_cell() {
        let (grid, cards) = setup();
        let anchors = [GridPoint::new(2, 4)];
        let bottom = button_rect(
            Orientation::Portrait,
            &anchors,
            &grid,
            &cards,
            ButtonRectOptions::default().with_slot(Lane::Bottom),
        );

        let bottom_edge = bottom.center_y.clone() + bottom.height.clone() / 2.0;
        let cell_bottom = grid.center_y_of(2) + cards.portrait().h / 2.0;

        // 3 lanes + 2 gaps of a third = 3.666.. lanes of 0.25 card height < 1 card height.
        assert!(bottom_edge.linear().vh < cell_bottom.linear().vh + LENGTH_EPSILON);
    }

    #[test]
    fn test_label_aligns_with_button_in_same_lane() {
        let (grid, cards) = setup();
        let anchors = [GridPoint::new(3, 4)];

        for lane in Lane::ALL {
            let button = button_rect(
                Orientation::Portrait,
                &anchors,
                &grid,
                &cards,
                ButtonRectOptions::default().with_slot(lane),
            );
            let label = label_rect(
                Orientation::Portrait,
                &anchors,
                &grid,
                &cards,
                LabelRectOptions::default().with_slot(lane),
            );

            assert!(label.top().approx_eq(&button.top()), "lane {lane}");
            assert!(label.height.linear().vh < button.height.linear().vh);
        }
    }

    #[test]
    fn test_label_width_modes() {
        let (grid, cards) = setup();
        let anchors = [GridPoint::new(3, 0), GridPoint::new(3, 3)];

        let narrow = label_rect(Orientation::Portrait, &anchors, &grid, &cards, LabelRectOptions::default());
        let wide = label_rect(
            Orientation::Portrait,
            &anchors,
            &grid,
            &cards,
            LabelRectOptions::default().with_width_mode(LabelWidthMode::CardRectWidth),
        );

        assert!(narrow.width.approx_eq(&cards.portrait().h));
        assert!(wide.width.approx_eq(&(cards.portrait().w + grid.step_x().clone() * 3.0)));
    }

    #[test]
    fn test_lane_display_and_index() {
        assert_eq!(Lane::Middle.to_string(), "middle");
        assert_eq!(Lane::Bottom.index(), 2);
        assert_eq!(Lane::default(), Lane::Top);
    }
}
