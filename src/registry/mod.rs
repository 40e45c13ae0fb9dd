//! Static registries of board elements.
//!
//! Zones, buttons, and labels are declared as plain layout tables. A
//! "materialize" step turns a table entry into a fully described element,
//! taking content from an exhaustive `KindMap` of renderers rather than from
//! per-kind branching.
//!
//! ## Key Types
//!
//! - `ZoneKey`: `kind:slot`, shared by layout lookup and state storage
//! - `ZoneLayout` / `ButtonLayout` / `LabelLayout`: Placement records
//! - `ButtonDefinition`: Layout plus a click-handler factory
//! - `KindMap`: One value per enum variant

pub mod buttons;
pub mod kind_map;
pub mod labels;
pub mod validate;
pub mod zones;

use smallvec::SmallVec;

use crate::geometry::GridPoint;

/// Anchor list of a placed element. Most elements have one or two anchors.
pub type Anchors = SmallVec<[GridPoint; 2]>;

pub use buttons::{
    create_buttons, materialize_button, standard_button_definitions, standard_button_layouts, ButtonActionDeps,
    ButtonActionFactory, ButtonDef, ButtonDefinition, ButtonHandler, ButtonKey, ButtonLayout, ButtonOutcome,
    ButtonRenderer, ButtonRenderers, DeckParser, TextFileSource, DECK_FILE_ACCEPT,
};
pub use kind_map::{Kind, KindMap};
pub use labels::{
    materialize_label, materialize_labels, standard_label_layouts, LabelDef, LabelKey, LabelLayout, LabelRenderer,
    LabelRenderers,
};
pub use validate::{validate_layouts, LayoutIssue};
pub use zones::{
    materialize_zone, materialize_zones, normalize_slot, standard_zone_layouts, zone_keys, zone_label, FrameVariant,
    ZoneDef, ZoneKey, ZoneKeyParseError, ZoneKind, ZoneLayout, ZoneRenderer, ZoneRenderers, ZoneSlot,
};
