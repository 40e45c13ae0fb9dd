//! Button registry: layout table plus click-handler factories.
//!
//! Buttons are where the UI touches the state core. Each `ButtonDefinition`
//! carries a factory that receives the runtime collaborators
//! (`ButtonActionDeps`) and returns the click handler. Nothing here reaches
//! for global state; the store is passed in explicitly.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use rust_board::deck::parse_deck_json;
//! use rust_board::registry::{
//!     create_buttons, standard_button_definitions, ButtonActionDeps, ButtonKey, ButtonOutcome,
//!     ButtonRenderers, KindMap,
//! };
//! use rust_board::state::GameStore;
//!
//! let store = RefCell::new(GameStore::with_seed(7));
//! let file = Some(r#"[{"name":"Starter","cards":{"A001":"2"}}]"#.to_string());
//! let deps = ButtonActionDeps::new(&store, &file, parse_deck_json);
//! let renderers: ButtonRenderers<String> =
//!     KindMap::from_fn(|_| Box::new(|key: ButtonKey| key.to_string()) as Box<dyn Fn(ButtonKey) -> String>);
//!
//! let buttons = create_buttons(&standard_button_definitions(), deps, &renderers);
//! let import = buttons.iter().find(|b| b.key == ButtonKey::Import).unwrap();
//!
//! assert_eq!(
//!     import.click(),
//!     ButtonOutcome::Imported { deck_name: "Starter".to_string(), total: 2 }
//! );
//! assert_eq!(store.borrow().deck_count(), 2);
//! ```

use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use smallvec::smallvec;
use tracing::{info, warn};

use super::kind_map::{Kind, KindMap};
use super::Anchors;
use crate::deck::{DeckParseError, ImportedDeck};
use crate::geometry::{ButtonSlot, GridPoint, Lane, Orientation};
use crate::state::GameStore;

/// File types offered by the import dialog.
pub const DECK_FILE_ACCEPT: &str = ".json,application/json";

/// Identifier of a board button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonKey {
    Back,
    Phase,
    Statistics,
    Initialize,
    Import,
}

impl ButtonKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ButtonKey::Back => "back",
            ButtonKey::Phase => "phase",
            ButtonKey::Statistics => "statistics",
            ButtonKey::Initialize => "initialize",
            ButtonKey::Import => "import",
        }
    }
}

impl Kind for ButtonKey {
    const ALL: &'static [Self] = &[
        ButtonKey::Back,
        ButtonKey::Phase,
        ButtonKey::Statistics,
        ButtonKey::Initialize,
        ButtonKey::Import,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for ButtonKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ButtonKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ButtonKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown button key {s:?}"))
    }
}

/// Placement of one button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonLayout {
    pub key: ButtonKey,
    pub orientation: Orientation,
    pub anchors: Anchors,
    pub slot: ButtonSlot,
}

/// Source of user-selected text files.
///
/// Returns `None` when the user cancels the dialog or the file cannot be read.
pub trait TextFileSource {
    fn open_text(&self, accept: &str) -> Option<String>;
}

/// A fixed file: `Some(text)` is always selected, `None` is always a cancel.
impl TextFileSource for Option<String> {
    fn open_text(&self, _accept: &str) -> Option<String> {
        self.clone()
    }
}

/// Parser used by the import button.
pub type DeckParser = fn(&str) -> Result<ImportedDeck, DeckParseError>;

/// Runtime collaborators injected into every button action.
#[derive(Clone, Copy)]
pub struct ButtonActionDeps<'a> {
    pub store: &'a RefCell<GameStore>,
    pub files: &'a dyn TextFileSource,
    pub parse_deck: DeckParser,
}

impl<'a> ButtonActionDeps<'a> {
    #[must_use]
    pub fn new(store: &'a RefCell<GameStore>, files: &'a dyn TextFileSource, parse_deck: DeckParser) -> Self {
        Self {
            store,
            files,
            parse_deck,
        }
    }
}

impl std::fmt::Debug for ButtonActionDeps<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonActionDeps").finish_non_exhaustive()
    }
}

/// What a click did, for the view to present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum ButtonOutcome {
    /// Action ran with no further effect.
    Acknowledged { key: ButtonKey },
    /// The file dialog was dismissed.
    ImportCancelled,
    /// Another import is still waiting on its file.
    ImportBusy,
    Imported { deck_name: String, total: u64 },
    /// Parsing failed; state is unchanged.
    ImportFailed { message: String },
    Statistics { deck_name: Option<String>, deck_count: usize },
}

/// Click handler bound to its dependencies.
pub type ButtonHandler<'a> = Box<dyn Fn() -> ButtonOutcome + 'a>;

/// Builds a click handler from injected dependencies.
pub type ButtonActionFactory = for<'a> fn(ButtonActionDeps<'a>) -> ButtonHandler<'a>;

/// Layout plus behavior of one button.
#[derive(Clone)]
pub struct ButtonDefinition {
    pub layout: ButtonLayout,
    pub create_action: ButtonActionFactory,
}

impl std::fmt::Debug for ButtonDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonDefinition")
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl ButtonDefinition {
    fn new(key: ButtonKey, anchor: GridPoint, slot: ButtonSlot, create_action: ButtonActionFactory) -> Self {
        Self {
            layout: ButtonLayout {
                key,
                orientation: Orientation::Portrait,
                anchors: smallvec![anchor],
                slot,
            },
            create_action,
        }
    }
}

/// The standard board's buttons.
#[must_use]
pub fn standard_button_definitions() -> Vec<ButtonDefinition> {
    let controls = GridPoint::new(2, 4);
    let session = GridPoint::new(3, 4);

    vec![
        ButtonDefinition::new(ButtonKey::Back, controls, Lane::Top, back_action),
        ButtonDefinition::new(ButtonKey::Phase, controls, Lane::Middle, phase_action),
        ButtonDefinition::new(ButtonKey::Statistics, controls, Lane::Bottom, statistics_action),
        ButtonDefinition::new(ButtonKey::Initialize, session, Lane::Top, initialize_action),
        ButtonDefinition::new(ButtonKey::Import, session, Lane::Middle, import_action),
    ]
}

/// Layout part of the standard button table.
#[must_use]
pub fn standard_button_layouts() -> Vec<ButtonLayout> {
    standard_button_definitions()
        .into_iter()
        .map(|definition| definition.layout)
        .collect()
}

fn acknowledge<'a>(key: ButtonKey) -> ButtonHandler<'a> {
    Box::new(move || {
        info!(button = %key, "action");
        ButtonOutcome::Acknowledged { key }
    })
}

fn back_action<'a>(_deps: ButtonActionDeps<'a>) -> ButtonHandler<'a> {
    acknowledge(ButtonKey::Back)
}

fn phase_action<'a>(_deps: ButtonActionDeps<'a>) -> ButtonHandler<'a> {
    acknowledge(ButtonKey::Phase)
}

fn initialize_action<'a>(_deps: ButtonActionDeps<'a>) -> ButtonHandler<'a> {
    acknowledge(ButtonKey::Initialize)
}

fn statistics_action<'a>(deps: ButtonActionDeps<'a>) -> ButtonHandler<'a> {
    Box::new(move || {
        let store = deps.store.borrow();
        let deck_name = store.state().deck_name().map(str::to_string);
        let deck_count = store.deck_count();

        info!(button = %ButtonKey::Statistics, ?deck_name, deck_count, "action");
        ButtonOutcome::Statistics { deck_name, deck_count }
    })
}

/// Open a deck file, parse it, and replace the game state.
///
/// The store's import slot is held while the file is being chosen, so a
/// second click in that window is rejected instead of racing the first.
fn import_action<'a>(deps: ButtonActionDeps<'a>) -> ButtonHandler<'a> {
    Box::new(move || {
        let ticket = match deps.store.borrow_mut().begin_import() {
            Ok(ticket) => ticket,
            Err(err) => {
                warn!(error = %err, "import: busy");
                return ButtonOutcome::ImportBusy;
            }
        };

        let text = match deps.files.open_text(DECK_FILE_ACCEPT) {
            Some(text) if !text.is_empty() => text,
            _ => {
                deps.store.borrow_mut().cancel_import(ticket);
                info!("import: cancelled");
                return ButtonOutcome::ImportCancelled;
            }
        };

        let deck = match (deps.parse_deck)(&text) {
            Ok(deck) => deck,
            Err(err) => {
                deps.store.borrow_mut().cancel_import(ticket);
                warn!(error = %err, "import: failed");
                return ButtonOutcome::ImportFailed {
                    message: err.to_string(),
                };
            }
        };

        let deck_name = deck.deck_name.clone();
        let total = deck.counts_by_card_number.total();

        if let Err(err) = deps.store.borrow_mut().finish_import(ticket, deck) {
            warn!(error = %err, "import: failed");
            return ButtonOutcome::ImportFailed {
                message: err.to_string(),
            };
        }

        info!(%deck_name, total, "import: ok");
        ButtonOutcome::Imported { deck_name, total }
    })
}

/// Produces the content of a button from its key.
pub type ButtonRenderer<C> = Box<dyn Fn(ButtonKey) -> C>;

/// One renderer per button.
pub type ButtonRenderers<C> = KindMap<ButtonKey, ButtonRenderer<C>>;

/// A fully assembled button: placement, content, and bound click handler.
pub struct ButtonDef<'a, C> {
    pub key: ButtonKey,
    pub label: String,
    pub orientation: Orientation,
    pub anchors: Anchors,
    pub slot: ButtonSlot,
    pub content: C,
    on_click: ButtonHandler<'a>,
}

impl<C> ButtonDef<'_, C> {
    /// Run the click handler.
    pub fn click(&self) -> ButtonOutcome {
        (self.on_click)()
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for ButtonDef<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonDef")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("orientation", &self.orientation)
            .field("anchors", &self.anchors)
            .field("slot", &self.slot)
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}

/// Bind one definition to its dependencies and renderer.
pub fn materialize_button<'a, C>(
    definition: &ButtonDefinition,
    deps: ButtonActionDeps<'a>,
    renderers: &ButtonRenderers<C>,
) -> ButtonDef<'a, C> {
    let layout = &definition.layout;

    ButtonDef {
        key: layout.key,
        label: layout.key.to_string(),
        orientation: layout.orientation,
        anchors: layout.anchors.clone(),
        slot: layout.slot,
        content: renderers[layout.key](layout.key),
        on_click: (definition.create_action)(deps),
    }
}

/// Invoke every factory with the same dependencies.
pub fn create_buttons<'a, C>(
    definitions: &[ButtonDefinition],
    deps: ButtonActionDeps<'a>,
    renderers: &ButtonRenderers<C>,
) -> Vec<ButtonDef<'a, C>> {
    definitions
        .iter()
        .map(|definition| materialize_button(definition, deps, renderers))
        .collect()
}
