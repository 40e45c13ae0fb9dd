//! Consistency checks over layout tables.
//!
//! Tables are plain data, so nothing stops a hand edit from reusing a zone key
//! or anchoring outside the grid. `validate_layouts` reports every such issue
//! at once instead of failing on the first one.

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use super::buttons::ButtonLayout;
use super::labels::LabelLayout;
use super::zones::{ZoneKey, ZoneLayout};
use crate::geometry::{AnchorBounds, GridPoint, GridSpec, Lane};

/// A problem found in the layout tables.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutIssue {
    #[error("zone key {0} is used by more than one layout")]
    DuplicateZoneKey(ZoneKey),

    #[error("{element} has no anchors")]
    NoAnchors { element: String },

    #[error("{element} is anchored at {point}, outside the {rows}x{cols} grid")]
    AnchorOutsideGrid {
        element: String,
        point: GridPoint,
        rows: u32,
        cols: u32,
    },

    #[error("{first} and {second} both occupy the {slot} lane of the same cell")]
    LaneConflict { first: String, second: String, slot: Lane },
}

fn check_anchors(element: &str, anchors: &[GridPoint], grid: GridSpec, issues: &mut Vec<LayoutIssue>) {
    if anchors.is_empty() {
        issues.push(LayoutIssue::NoAnchors {
            element: element.to_string(),
        });
    }

    for &point in anchors {
        if point.row >= grid.rows || point.col >= grid.cols {
            issues.push(LayoutIssue::AnchorOutsideGrid {
                element: element.to_string(),
                point,
                rows: grid.rows,
                cols: grid.cols,
            });
        }
    }
}

/// Check zone, button, and label tables against a grid.
///
/// Buttons and labels share lanes, so two controls in the same lane of the
/// same cell block are reported as a conflict.
#[must_use]
pub fn validate_layouts(
    grid: GridSpec,
    zones: &[ZoneLayout],
    buttons: &[ButtonLayout],
    labels: &[LabelLayout],
) -> Vec<LayoutIssue> {
    let mut issues = Vec::new();

    let mut seen_keys = FxHashSet::default();
    for zone in zones {
        let key = zone.key();
        if !seen_keys.insert(key) {
            issues.push(LayoutIssue::DuplicateZoneKey(key));
        }
        check_anchors(&key.label(), &zone.anchors, grid, &mut issues);
    }

    let controls = buttons
        .iter()
        .map(|b| (b.key.to_string(), b.anchors.as_slice(), b.slot))
        .chain(labels.iter().map(|l| (l.key.to_string(), l.anchors.as_slice(), l.slot)));

    let mut lanes: FxHashMap<(AnchorBounds, Lane), String> = FxHashMap::default();
    for (element, anchors, slot) in controls {
        check_anchors(&element, anchors, grid, &mut issues);

        match lanes.get(&(AnchorBounds::of(anchors), slot)) {
            Some(first) => issues.push(LayoutIssue::LaneConflict {
                first: first.clone(),
                second: element,
                slot,
            }),
            None => {
                lanes.insert((AnchorBounds::of(anchors), slot), element);
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;
    use crate::geometry::Orientation;
    use crate::registry::{
        standard_button_layouts, standard_label_layouts, standard_zone_layouts, ButtonKey, FrameVariant, LabelKey,
        ZoneKind,
    };

    #[test]
    fn test_standard_tables_are_clean() {
        let issues = validate_layouts(
            GridSpec::default(),
            &standard_zone_layouts(),
            &standard_button_layouts(),
            &standard_label_layouts(),
        );
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn test_standard_tables_do_not_fit_smaller_grid() {
        let issues = validate_layouts(GridSpec::new(4, 4), &standard_zone_layouts(), &[], &[]);

        // successLive is the only zone in column 4, with two anchors.
        assert_eq!(issues.len(), 2);
        assert!(issues
            .iter()
            .all(|i| matches!(i, LayoutIssue::AnchorOutsideGrid { element, .. } if element == "successLive")));
    }

    #[test]
    fn test_duplicate_zone_key() {
        let deck = ZoneLayout::new(
            ZoneKind::Deck,
            Orientation::Portrait,
            smallvec![GridPoint::ORIGIN],
            FrameVariant::Dashed,
        );
        let issues = validate_layouts(GridSpec::default(), &[deck.clone(), deck], &[], &[]);

        assert_eq!(issues, vec![LayoutIssue::DuplicateZoneKey(ZoneKey::single(ZoneKind::Deck))]);
    }

    #[test]
    fn test_lane_conflict_between_button_and_label() {
        let mut buttons = standard_button_layouts();
        let import = buttons.iter_mut().find(|b| b.key == ButtonKey::Import).unwrap();
        import.slot = Lane::Bottom;

        let issues = validate_layouts(
            GridSpec::default(),
            &standard_zone_layouts(),
            &buttons,
            &standard_label_layouts(),
        );

        assert_eq!(
            issues,
            vec![LayoutIssue::LaneConflict {
                first: "import".to_string(),
                second: LabelKey::PhaseLabel.to_string(),
                slot: Lane::Bottom,
            }]
        );
    }

    #[test]
    fn test_empty_anchors_reported() {
        let zone = ZoneLayout::new(ZoneKind::Hand, Orientation::Portrait, smallvec![], FrameVariant::Dashed);
        let issues = validate_layouts(GridSpec::default(), &[zone], &[], &[]);

        assert_eq!(
            issues,
            vec![LayoutIssue::NoAnchors {
                element: "hand".to_string()
            }]
        );
    }
}
