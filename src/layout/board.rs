//! Whole-board placement.
//!
//! `BoardLayout::compute` runs every zone, button, and label layout record
//! through the rect builders for one `BoardConfig`. The result is what a view
//! layer positions its elements from.
//!
//! ## Example
//!
//! ```
//! use rust_board::config::BoardConfig;
//! use rust_board::layout::BoardLayout;
//! use rust_board::registry::{ZoneKey, ZoneKind};
//!
//! let board = BoardLayout::compute(&BoardConfig::default());
//! let deck = board.zone(ZoneKey::single(ZoneKind::Deck)).unwrap();
//!
//! assert_eq!(deck.label, "deck");
//! assert_eq!(deck.rect.width.to_css(), "calc(20vh * 0.7165850244926522)");
//! ```

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::config::BoardConfig;
use crate::geometry::{button_rect, label_rect, zone_rect, Lane, Rect, ResolvedRect, Viewport};
use crate::registry::{
    standard_button_layouts, standard_label_layouts, standard_zone_layouts, ButtonKey, ButtonLayout, FrameVariant,
    LabelKey, LabelLayout, ZoneKey, ZoneLayout,
};

/// A zone and its rectangle.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedZone {
    pub key: ZoneKey,
    pub label: String,
    pub variant: FrameVariant,
    pub rect: Rect,
}

/// A button and its rectangle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlacedButton {
    pub key: ButtonKey,
    pub slot: Lane,
    pub rect: Rect,
}

/// A label and its rectangle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlacedLabel {
    pub key: LabelKey,
    pub slot: Lane,
    pub rect: Rect,
}

/// Rectangles for every element on the board.
#[derive(Clone, Debug, Serialize)]
pub struct BoardLayout {
    pub zones: Vec<PlacedZone>,
    pub buttons: Vec<PlacedButton>,
    pub labels: Vec<PlacedLabel>,
    #[serde(skip)]
    zone_index: FxHashMap<ZoneKey, usize>,
}

impl BoardLayout {
    /// Place the standard tables.
    #[must_use]
    pub fn compute(config: &BoardConfig) -> Self {
        Self::from_layouts(
            config,
            &standard_zone_layouts(),
            &standard_button_layouts(),
            &standard_label_layouts(),
        )
    }

    /// Place arbitrary tables.
    #[must_use]
    pub fn from_layouts(
        config: &BoardConfig,
        zones: &[ZoneLayout],
        buttons: &[ButtonLayout],
        labels: &[LabelLayout],
    ) -> Self {
        let grid = config.grid();
        let cards = config.card_size();

        let zones: Vec<PlacedZone> = zones
            .iter()
            .map(|layout| {
                let key = layout.key();
                PlacedZone {
                    key,
                    label: key.label(),
                    variant: layout.variant,
                    rect: zone_rect(layout.orientation, &layout.anchors, &grid, &cards),
                }
            })
            .collect();

        let buttons = buttons
            .iter()
            .map(|layout| PlacedButton {
                key: layout.key,
                slot: layout.slot,
                rect: button_rect(
                    layout.orientation,
                    &layout.anchors,
                    &grid,
                    &cards,
                    config.button_options(layout.slot),
                ),
            })
            .collect();

        let labels = labels
            .iter()
            .map(|layout| PlacedLabel {
                key: layout.key,
                slot: layout.slot,
                rect: label_rect(
                    layout.orientation,
                    &layout.anchors,
                    &grid,
                    &cards,
                    config.label_options(layout.slot),
                ),
            })
            .collect();

        let zone_index = zones.iter().enumerate().map(|(i, zone)| (zone.key, i)).collect();

        Self {
            zones,
            buttons,
            labels,
            zone_index,
        }
    }

    #[must_use]
    pub fn zone(&self, key: ZoneKey) -> Option<&PlacedZone> {
        self.zone_index.get(&key).map(|&i| &self.zones[i])
    }

    #[must_use]
    pub fn button(&self, key: ButtonKey) -> Option<&PlacedButton> {
        self.buttons.iter().find(|button| button.key == key)
    }

    #[must_use]
    pub fn label(&self, key: LabelKey) -> Option<&PlacedLabel> {
        self.labels.iter().find(|label| label.key == key)
    }

    /// Resolve every zone rectangle against a concrete viewport.
    #[must_use]
    pub fn resolve_zones(&self, viewport: &Viewport) -> Vec<(ZoneKey, ResolvedRect)> {
        self.zones
            .iter()
            .map(|zone| (zone.key, zone.rect.resolve(viewport)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{GridMetrics, LENGTH_EPSILON};
    use crate::registry::{zone_keys, ZoneKind, ZoneSlot};

    #[test]
    fn test_every_element_is_placed() {
        let board = BoardLayout::compute(&BoardConfig::default());

        assert_eq!(board.zones.len(), zone_keys().len());
        assert_eq!(board.buttons.len(), 5);
        assert_eq!(board.labels.len(), 1);
        for key in zone_keys() {
            assert!(board.zone(key).is_some(), "{key}");
        }
    }

    #[test]
    fn test_live_zones_are_landscape() {
        let board = BoardLayout::compute(&BoardConfig::default());
        let live = board.zone(ZoneKey::new(ZoneKind::Live, Some(ZoneSlot::Center))).unwrap();
        let member = board.zone(ZoneKey::new(ZoneKind::Member, Some(ZoneSlot::Center))).unwrap();

        assert!(live.rect.width.approx_eq(&member.rect.height));
        assert!(live.rect.height.approx_eq(&member.rect.width));
        assert_eq!(live.rect.center_x, member.rect.center_x);
    }

    #[test]
    fn test_hand_spans_four_columns() {
        let config = BoardConfig::default();
        let board = BoardLayout::compute(&config);
        let grid = config.grid();
        let hand = board.zone(ZoneKey::single(ZoneKind::Hand)).unwrap();

        let expected = config.card_size().portrait().w + GridMetrics::step_x(&grid) * 3.0;
        assert!(hand.rect.width.approx_eq(&expected));
        assert_eq!(hand.variant, FrameVariant::Dashed);
    }

    #[test]
    fn test_phase_label_below_import_button() {
        let board = BoardLayout::compute(&BoardConfig::default());
        let import = board.button(ButtonKey::Import).unwrap();
        let label = board.label(LabelKey::PhaseLabel).unwrap();

        assert_eq!(import.rect.center_x, label.rect.center_x);
        assert!(label.rect.top().linear().vh > import.rect.top().linear().vh);
    }

    #[test]
    fn test_resolved_zones_stay_inside_container() {
        let board = BoardLayout::compute(&BoardConfig::default());
        let viewport = Viewport::new(1600.0, 900.0, 900.0);

        for (key, rect) in board.resolve_zones(&viewport) {
            assert!(rect.left() > -LENGTH_EPSILON, "{key}: {rect:?}");
            assert!(rect.right() < 1600.0 + LENGTH_EPSILON, "{key}: {rect:?}");
            assert!(rect.top() > -LENGTH_EPSILON, "{key}: {rect:?}");
        }
    }

    #[test]
    fn test_serializes_without_index() {
        let board = BoardLayout::compute(&BoardConfig::default());
        let json = serde_json::to_value(&board).unwrap();

        assert_eq!(json["zones"][0]["key"], "deck:single");
        assert!(json.get("zone_index").is_none());
    }
}
