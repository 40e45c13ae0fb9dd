//! Label registry.

use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use super::kind_map::{Kind, KindMap};
use super::Anchors;
use crate::geometry::{GridPoint, LabelSlot, Lane, Orientation};

/// Identifier of a board label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelKey {
    /// Shows the current phase under the session buttons.
    PhaseLabel,
}

impl LabelKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LabelKey::PhaseLabel => "phaseLabel",
        }
    }
}

impl Kind for LabelKey {
    const ALL: &'static [Self] = &[LabelKey::PhaseLabel];

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for LabelKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement of one label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelLayout {
    pub key: LabelKey,
    pub orientation: Orientation,
    pub anchors: Anchors,
    pub slot: LabelSlot,
}

/// The standard board's labels.
#[must_use]
pub fn standard_label_layouts() -> Vec<LabelLayout> {
    vec![LabelLayout {
        key: LabelKey::PhaseLabel,
        orientation: Orientation::Portrait,
        anchors: smallvec![GridPoint::new(3, 4)],
        slot: Lane::Bottom,
    }]
}

pub type LabelRenderer<C> = Box<dyn Fn(LabelKey) -> C>;

pub type LabelRenderers<C> = KindMap<LabelKey, LabelRenderer<C>>;

/// A fully described label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelDef<C> {
    pub key: LabelKey,
    pub label: String,
    pub orientation: Orientation,
    pub anchors: Anchors,
    pub slot: LabelSlot,
    pub content: C,
}

pub fn materialize_label<C>(layout: &LabelLayout, renderers: &LabelRenderers<C>) -> LabelDef<C> {
    LabelDef {
        key: layout.key,
        label: layout.key.to_string(),
        orientation: layout.orientation,
        anchors: layout.anchors.clone(),
        slot: layout.slot,
        content: renderers[layout.key](layout.key),
    }
}

pub fn materialize_labels<C>(layouts: &[LabelLayout], renderers: &LabelRenderers<C>) -> Vec<LabelDef<C>> {
    layouts
        .iter()
        .map(|layout| materialize_label(layout, renderers))
        .collect()
}
