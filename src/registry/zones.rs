//! Zone registry: what zones exist and where they sit on the grid.
//!
//! A zone is identified by `ZoneKey = kind:slot`. The same key is used for
//! layout lookup and for card storage in `GameState`, so every key derived
//! from the layout table is also a key of the state's zone map.
//!
//! ## Standard Board (row, col; col 0 is rightmost)
//!
//! ```text
//!          col 4         col 3        col 2         col 1        col 0
//! row 0  successLive ┐  live-left    live-center   live-right   deck
//! row 1  successLive ┘  member-left  member-center member-right discard
//! row 2  (buttons)      energy ───────────────────── energy     energyDeck
//! row 3  (buttons)      hand ────────────────────────────────── hand
//! ```

use serde::{Deserialize, Serialize};
use smallvec::smallvec;
use thiserror::Error;

use super::kind_map::{Kind, KindMap};
use super::Anchors;
use crate::geometry::{GridPoint, Orientation};

/// Kind of zone. Zones of the same kind look and behave alike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZoneKind {
    Deck,
    Discard,
    EnergyDeck,
    SuccessLive,
    Energy,
    Hand,
    Live,
    Member,
}

impl ZoneKind {
    /// Stable string form (`energyDeck`, `successLive`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ZoneKind::Deck => "deck",
            ZoneKind::Discard => "discard",
            ZoneKind::EnergyDeck => "energyDeck",
            ZoneKind::SuccessLive => "successLive",
            ZoneKind::Energy => "energy",
            ZoneKind::Hand => "hand",
            ZoneKind::Live => "live",
            ZoneKind::Member => "member",
        }
    }
}

impl Kind for ZoneKind {
    const ALL: &'static [Self] = &[
        ZoneKind::Deck,
        ZoneKind::Discard,
        ZoneKind::EnergyDeck,
        ZoneKind::SuccessLive,
        ZoneKind::Energy,
        ZoneKind::Hand,
        ZoneKind::Live,
        ZoneKind::Member,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ZoneKind {
    type Err = ZoneKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZoneKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ZoneKeyParseError::UnknownKind(s.to_string()))
    }
}

/// Which instance of a kind a zone is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneSlot {
    Left,
    Center,
    Right,
    /// The only zone of its kind.
    #[default]
    Single,
}

impl ZoneSlot {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ZoneSlot::Left => "left",
            ZoneSlot::Center => "center",
            ZoneSlot::Right => "right",
            ZoneSlot::Single => "single",
        }
    }
}

impl std::fmt::Display for ZoneSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ZoneSlot {
    type Err = ZoneKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(ZoneSlot::Left),
            "center" => Ok(ZoneSlot::Center),
            "right" => Ok(ZoneSlot::Right),
            "single" => Ok(ZoneSlot::Single),
            other => Err(ZoneKeyParseError::UnknownSlot(other.to_string())),
        }
    }
}

/// Error parsing a `kind:slot` string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ZoneKeyParseError {
    #[error("zone key must have the form kind:slot, got {0:?}")]
    Malformed(String),
    #[error("unknown zone kind {0:?}")]
    UnknownKind(String),
    #[error("unknown zone slot {0:?}")]
    UnknownSlot(String),
}

/// Fill in the slot of a kind that has a single zone.
#[must_use]
pub const fn normalize_slot(slot: Option<ZoneSlot>) -> ZoneSlot {
    match slot {
        Some(slot) => slot,
        None => ZoneSlot::Single,
    }
}

/// Display label: `kind` for single zones, `kind-slot` otherwise.
#[must_use]
pub fn zone_label(kind: ZoneKind, slot: ZoneSlot) -> String {
    match slot {
        ZoneSlot::Single => kind.to_string(),
        _ => format!("{kind}-{slot}"),
    }
}

/// Canonical zone identifier, `kind:slot`.
///
/// ```
/// use rust_board::registry::{ZoneKey, ZoneKind, ZoneSlot};
///
/// let deck = ZoneKey::new(ZoneKind::Deck, None);
/// assert_eq!(deck, ZoneKey::new(ZoneKind::Deck, Some(ZoneSlot::Single)));
/// assert_eq!(deck.to_string(), "deck:single");
/// assert_eq!("member:left".parse::<ZoneKey>().unwrap().slot, ZoneSlot::Left);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZoneKey {
    pub kind: ZoneKind,
    pub slot: ZoneSlot,
}

impl ZoneKey {
    /// Key for `kind`, with a missing slot normalized to `single`.
    #[must_use]
    pub const fn new(kind: ZoneKind, slot: Option<ZoneSlot>) -> Self {
        Self {
            kind,
            slot: normalize_slot(slot),
        }
    }

    /// Key of the only zone of `kind`.
    #[must_use]
    pub const fn single(kind: ZoneKind) -> Self {
        Self::new(kind, None)
    }

    /// Display label for this zone.
    #[must_use]
    pub fn label(&self) -> String {
        zone_label(self.kind, self.slot)
    }
}

impl std::fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.slot)
    }
}

impl std::str::FromStr for ZoneKey {
    type Err = ZoneKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, slot) = s
            .split_once(':')
            .ok_or_else(|| ZoneKeyParseError::Malformed(s.to_string()))?;
        Ok(Self {
            kind: kind.parse()?,
            slot: slot.parse()?,
        })
    }
}

impl TryFrom<String> for ZoneKey {
    type Error = ZoneKeyParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ZoneKey> for String {
    fn from(key: ZoneKey) -> Self {
        key.to_string()
    }
}

/// Frame style of a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameVariant {
    Dashed,
    Solid,
}

/// Placement of one zone (layout data only, no content).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneLayout {
    pub kind: ZoneKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<ZoneSlot>,
    pub orientation: Orientation,
    pub anchors: Anchors,
    pub variant: FrameVariant,
}

impl ZoneLayout {
    /// Layout for the only zone of a kind.
    #[must_use]
    pub fn new(kind: ZoneKind, orientation: Orientation, anchors: Anchors, variant: FrameVariant) -> Self {
        Self {
            kind,
            slot: None,
            orientation,
            anchors,
            variant,
        }
    }

    /// Set the slot.
    #[must_use]
    pub fn with_slot(mut self, slot: ZoneSlot) -> Self {
        self.slot = Some(slot);
        self
    }

    /// The zone key this layout produces.
    #[must_use]
    pub fn key(&self) -> ZoneKey {
        ZoneKey::new(self.kind, self.slot)
    }
}

/// The standard board's zone table.
#[must_use]
pub fn standard_zone_layouts() -> Vec<ZoneLayout> {
    use FrameVariant::{Dashed, Solid};
    use Orientation::{Landscape, Portrait};

    let p = GridPoint::new;

    vec![
        ZoneLayout::new(ZoneKind::Deck, Portrait, smallvec![p(0, 0)], Dashed),
        ZoneLayout::new(ZoneKind::Discard, Portrait, smallvec![p(1, 0)], Solid),
        ZoneLayout::new(ZoneKind::EnergyDeck, Portrait, smallvec![p(2, 0)], Solid),
        ZoneLayout::new(ZoneKind::Live, Landscape, smallvec![p(0, 1)], Solid).with_slot(ZoneSlot::Right),
        ZoneLayout::new(ZoneKind::Live, Landscape, smallvec![p(0, 2)], Solid).with_slot(ZoneSlot::Center),
        ZoneLayout::new(ZoneKind::Live, Landscape, smallvec![p(0, 3)], Solid).with_slot(ZoneSlot::Left),
        ZoneLayout::new(ZoneKind::Member, Portrait, smallvec![p(1, 1)], Solid).with_slot(ZoneSlot::Right),
        ZoneLayout::new(ZoneKind::Member, Portrait, smallvec![p(1, 2)], Solid).with_slot(ZoneSlot::Center),
        ZoneLayout::new(ZoneKind::Member, Portrait, smallvec![p(1, 3)], Solid).with_slot(ZoneSlot::Left),
        ZoneLayout::new(ZoneKind::SuccessLive, Landscape, smallvec![p(0, 4), p(1, 4)], Solid),
        ZoneLayout::new(ZoneKind::Energy, Portrait, smallvec![p(2, 1), p(2, 3)], Solid),
        ZoneLayout::new(ZoneKind::Hand, Portrait, smallvec![p(3, 0), p(3, 3)], Dashed),
    ]
}

/// Every zone key of the standard board, in table order.
///
/// This is the key set a fresh `GameState` is initialized with.
#[must_use]
pub fn zone_keys() -> Vec<ZoneKey> {
    standard_zone_layouts().iter().map(ZoneLayout::key).collect()
}

/// Produces the content of a zone from its key.
pub type ZoneRenderer<C> = Box<dyn Fn(ZoneKey) -> C>;

/// One renderer per zone kind.
pub type ZoneRenderers<C> = KindMap<ZoneKind, ZoneRenderer<C>>;

/// A fully described zone, ready for the view layer.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneDef<C> {
    pub key: ZoneKey,
    pub kind: ZoneKind,
    pub slot: ZoneSlot,
    pub label: String,
    pub orientation: Orientation,
    pub anchors: Anchors,
    pub variant: FrameVariant,
    pub content: C,
}

/// Derive key, label, and content for one layout entry.
pub fn materialize_zone<C>(layout: &ZoneLayout, renderers: &ZoneRenderers<C>) -> ZoneDef<C> {
    let key = layout.key();

    ZoneDef {
        key,
        kind: layout.kind,
        slot: key.slot,
        label: key.label(),
        orientation: layout.orientation,
        anchors: layout.anchors.clone(),
        variant: layout.variant,
        content: renderers[layout.kind](key),
    }
}

/// Materialize every entry of a zone table.
pub fn materialize_zones<C>(layouts: &[ZoneLayout], renderers: &ZoneRenderers<C>) -> Vec<ZoneDef<C>> {
    layouts
        .iter()
        .map(|layout| materialize_zone(layout, renderers))
        .collect()
}
