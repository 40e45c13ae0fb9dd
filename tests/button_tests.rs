//! Button wiring tests.
//!
//! These drive the assembled buttons the way a view layer would:
//! - Dependencies are injected once, handlers run many times
//! - The import button asks for JSON files only
//! - Outcomes carry what the view needs for notices

use std::cell::{Cell, RefCell};

use rust_board::deck::{parse_deck_from_json_text, parse_deck_json, DeckCounts, DeckParseError, ImportedDeck};
use rust_board::registry::{
    create_buttons, standard_button_definitions, ButtonActionDeps, ButtonDef, ButtonKey, ButtonOutcome,
    ButtonRenderer, ButtonRenderers, KindMap, TextFileSource, DECK_FILE_ACCEPT,
};
use rust_board::state::GameStore;

/// File dialog stand-in that serves queued files and records requests.
#[derive(Default)]
struct QueuedFiles {
    files: RefCell<Vec<Option<String>>>,
    requests: Cell<usize>,
    last_accept: RefCell<String>,
}

impl QueuedFiles {
    fn push(&self, file: Option<&str>) {
        self.files.borrow_mut().insert(0, file.map(str::to_string));
    }
}

impl TextFileSource for QueuedFiles {
    fn open_text(&self, accept: &str) -> Option<String> {
        self.requests.set(self.requests.get() + 1);
        *self.last_accept.borrow_mut() = accept.to_string();
        self.files.borrow_mut().pop().flatten()
    }
}

fn renderers() -> ButtonRenderers<String> {
    KindMap::from_fn(|_| Box::new(|key: ButtonKey| format!("[{key}]")) as ButtonRenderer<String>)
}

fn find<'a, 'b>(buttons: &'b [ButtonDef<'a, String>], key: ButtonKey) -> &'b ButtonDef<'a, String> {
    buttons.iter().find(|b| b.key == key).expect("button should exist")
}

/// Handlers are built once and reused for every click.
#[test]
fn test_session_flow() {
    let store = RefCell::new(GameStore::with_seed(5));
    let files = QueuedFiles::default();
    let buttons = create_buttons(
        &standard_button_definitions(),
        ButtonActionDeps::new(&store, &files, parse_deck_json),
        &renderers(),
    );

    let import = find(&buttons, ButtonKey::Import);
    let statistics = find(&buttons, ButtonKey::Statistics);

    files.push(None);
    assert_eq!(import.click(), ButtonOutcome::ImportCancelled);

    files.push(Some("not json"));
    assert!(matches!(import.click(), ButtonOutcome::ImportFailed { .. }));

    files.push(Some(r#"[{"name":"Starter","cards":{"A001":"4","A002":"3"}}]"#));
    assert_eq!(
        import.click(),
        ButtonOutcome::Imported {
            deck_name: "Starter".to_string(),
            total: 7
        }
    );

    assert_eq!(
        statistics.click(),
        ButtonOutcome::Statistics {
            deck_name: Some("Starter".to_string()),
            deck_count: 7
        }
    );
    assert_eq!(files.requests.get(), 3);
    assert_eq!(*files.last_accept.borrow(), DECK_FILE_ACCEPT);
}

/// Every button gets its rendered content and key label.
#[test]
fn test_every_button_is_materialized() {
    let store = RefCell::new(GameStore::with_seed(5));
    let files = QueuedFiles::default();
    let buttons = create_buttons(
        &standard_button_definitions(),
        ButtonActionDeps::new(&store, &files, parse_deck_json),
        &renderers(),
    );

    let keys: Vec<_> = buttons.iter().map(|b| b.key).collect();
    assert_eq!(
        keys,
        vec![
            ButtonKey::Back,
            ButtonKey::Phase,
            ButtonKey::Statistics,
            ButtonKey::Initialize,
            ButtonKey::Import
        ]
    );
    for button in &buttons {
        assert_eq!(button.content, format!("[{}]", button.key));
        assert_eq!(button.label, button.key.to_string());
    }
}

/// Any parser with the right signature can be injected.
#[test]
fn test_injected_parser_is_used() {
    fn strict_counts(text: &str) -> Result<ImportedDeck, DeckParseError> {
        let cards = parse_deck_from_json_text(text).map_err(|_| DeckParseError::EmptyDeck)?;
        let mut counts = DeckCounts::new();
        for card in cards {
            let so_far = counts.get(&card.card_id).unwrap_or(0);
            counts.insert(card.card_id, so_far + 1);
        }
        Ok(ImportedDeck::new("strict", counts))
    }

    let store = RefCell::new(GameStore::with_seed(5));
    let files = QueuedFiles::default();
    let buttons = create_buttons(
        &standard_button_definitions(),
        ButtonActionDeps::new(&store, &files, strict_counts),
        &renderers(),
    );
    let import = find(&buttons, ButtonKey::Import);

    files.push(Some(r#"[{"name":"X","cards":{"A":"9"}}]"#));
    assert!(matches!(import.click(), ButtonOutcome::ImportFailed { .. }));
    assert_eq!(store.borrow().deck_count(), 0);

    files.push(Some(r#"[{"name":"X","cards":{"A":"2"}},{"name":"Y","cards":{"A":"1"}}]"#));
    assert_eq!(
        import.click(),
        ButtonOutcome::Imported {
            deck_name: "strict".to_string(),
            total: 3
        }
    );
}

/// A pending import blocks the button without asking for a file.
#[test]
fn test_busy_import_does_not_open_dialog() {
    let store = RefCell::new(GameStore::with_seed(5));
    let files = QueuedFiles::default();
    let buttons = create_buttons(
        &standard_button_definitions(),
        ButtonActionDeps::new(&store, &files, parse_deck_json),
        &renderers(),
    );

    let ticket = store.borrow_mut().begin_import().unwrap();
    assert_eq!(find(&buttons, ButtonKey::Import).click(), ButtonOutcome::ImportBusy);
    assert_eq!(files.requests.get(), 0);

    store.borrow_mut().cancel_import(ticket);
    files.push(None);
    assert_eq!(find(&buttons, ButtonKey::Import).click(), ButtonOutcome::ImportCancelled);
}

/// Outcomes serialize with a tag the view can switch on.
#[test]
fn test_outcome_serialization() {
    let json = serde_json::to_value(ButtonOutcome::Imported {
        deck_name: "D".to_string(),
        total: 2,
    })
    .unwrap();

    assert_eq!(json["outcome"], "imported");
    assert_eq!(json["total"], 2);
}
