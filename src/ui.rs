//! DOM presentation shell (web only)
//!
//! Thin wrapper over the engine: renders the game grid and wires the
//! add/edit modal and delete buttons. No ranking logic lives here; all
//! writes go through `Arcade`, and every render reads a fresh snapshot.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement};

use crate::app::Arcade;
use crate::board::{Entry, EntryDraft, Game};
use crate::format_score;
use crate::store::LocalStorageStore;

pub type SharedArcade = Rc<RefCell<Arcade<LocalStorageStore>>>;

/// Query suffix for avatar URLs (square face crop)
const PHOTO_CROP: &str = "?w=100&h=100&fit=crop&crop=faces";

/// First-place glyph shown instead of a rank number
const TROPHY: &str = "\u{1F3C6}";

const STYLE: &str = "
body { font-family: sans-serif; background: linear-gradient(135deg, #e0e7ff, #fce7f3); margin: 0; padding: 2rem; }
.page-header { text-align: center; margin-bottom: 2rem; }
.boards { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2rem; max-width: 72rem; margin: 0 auto; }
.game-section { background: rgba(255, 255, 255, 0.8); border-radius: 12px; padding: 1.5rem; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1); }
.game-header { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 1rem; }
.game-header h2 { margin: 0; }
.score-row { display: flex; align-items: center; gap: 1rem; padding: 0.5rem; border-radius: 8px; background: rgba(255, 255, 255, 0.6); margin-bottom: 0.5rem; }
.rank { width: 2rem; font-weight: bold; }
.avatar { width: 2.5rem; height: 2.5rem; border-radius: 50%; object-fit: cover; }
.name { flex-grow: 1; }
.score { font-weight: 600; }
.modal { position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.4); }
.modal.hidden { display: none; }
.modal-card { background: white; border-radius: 12px; padding: 1.5rem; display: flex; flex-direction: column; gap: 0.75rem; min-width: 20rem; }
";

/// Build the page skeleton, wire events, do the first render
pub fn mount(arcade: SharedArcade) {
    let document = web_sys::window()
        .expect("no window")
        .document()
        .expect("no document");
    let body = document.body().expect("no body");

    let style = document.create_element("style").expect("create style");
    style.set_text_content(Some(STYLE));
    let _ = body.append_child(&style);

    let header = create(&document, "div", "page-header");
    let title = document.create_element("h1").expect("create h1");
    title.set_text_content(Some("Game Leaderboards"));
    let tagline = document.create_element("p").expect("create p");
    tagline.set_text_content(Some("Top players across all our games"));
    let _ = header.append_child(&title);
    let _ = header.append_child(&tagline);
    let _ = body.append_child(&header);

    let grid = create(&document, "div", "boards");
    grid.set_id("boards");
    let _ = body.append_child(&grid);

    build_modal(&document, &body, arcade.clone());
    wire_board_clicks(&grid, arcade.clone());
    render_boards(&arcade);
}

/// Re-render the whole grid from a fresh snapshot
fn render_boards(arcade: &SharedArcade) {
    let document = web_sys::window().unwrap().document().unwrap();
    let grid = match document.get_element_by_id("boards") {
        Some(grid) => grid,
        None => return,
    };
    grid.set_inner_html("");

    let snapshot = arcade.borrow().snapshot();
    for game in &snapshot {
        let _ = grid.append_child(&game_section(&document, game));
    }
}

fn game_section(document: &Document, game: &Game) -> Element {
    let section = create(document, "div", "game-section");

    let header = create(document, "div", "game-header");
    let glyph = document.create_element("span").unwrap();
    glyph.set_text_content(Some(game.icon.glyph()));
    let title = document.create_element("h2").unwrap();
    title.set_text_content(Some(&game.title));
    let _ = header.append_child(&glyph);
    let _ = header.append_child(&title);
    let _ = section.append_child(&header);

    for (rank, entry) in game.entries.iter().enumerate() {
        let _ = section.append_child(&entry_row(document, &game.title, entry, rank));
    }

    let add = document.create_element("button").unwrap();
    add.set_text_content(Some("Add Score"));
    let _ = add.set_attribute("data-action", "add");
    let _ = add.set_attribute("data-game", &game.title);
    let _ = section.append_child(&add);

    section
}

fn entry_row(document: &Document, title: &str, entry: &Entry, rank: usize) -> Element {
    let row = create(document, "div", "score-row");

    let rank_cell = create(document, "div", "rank");
    let label = if rank == 0 {
        TROPHY.to_string()
    } else {
        format!("#{}", rank + 1)
    };
    rank_cell.set_text_content(Some(&label));
    let _ = row.append_child(&rank_cell);

    let avatar = create(document, "img", "avatar");
    let _ = avatar.set_attribute("src", &format!("{}{}", entry.photo, PHOTO_CROP));
    let _ = avatar.set_attribute("alt", &entry.name);
    let _ = row.append_child(&avatar);

    let name = create(document, "div", "name");
    name.set_text_content(Some(&entry.name));
    let _ = row.append_child(&name);

    let score = create(document, "div", "score");
    score.set_text_content(Some(&format_score(entry.score)));
    let _ = row.append_child(&score);

    for (action, label) in [("edit", "Edit"), ("delete", "Delete")] {
        let btn = document.create_element("button").unwrap();
        btn.set_text_content(Some(label));
        let _ = btn.set_attribute("data-action", action);
        let _ = btn.set_attribute("data-game", title);
        let _ = btn.set_attribute("data-entry", &entry.id);
        let _ = row.append_child(&btn);
    }

    row
}

/// One delegated listener on the grid handles every add/edit/delete button,
/// surviving re-renders without re-wiring
fn wire_board_clicks(grid: &Element, arcade: SharedArcade) {
    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
        let target = match event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
            Some(target) => target,
            None => return,
        };
        let button = match target.closest("[data-action]").ok().flatten() {
            Some(button) => button,
            None => return,
        };
        let action = button.get_attribute("data-action").unwrap_or_default();
        let title = button.get_attribute("data-game").unwrap_or_default();
        let entry_id = button.get_attribute("data-entry").unwrap_or_default();

        match action.as_str() {
            "add" => open_modal(&title, None),
            "edit" => {
                let entry = arcade
                    .borrow()
                    .games()
                    .iter()
                    .find(|g| g.title == title)
                    .and_then(|g| g.entries.iter().find(|e| e.id == entry_id).cloned());
                if let Some(entry) = entry {
                    open_modal(&title, Some(&entry));
                }
            }
            "delete" => {
                arcade.borrow_mut().delete_entry(&title, &entry_id);
                render_boards(&arcade);
            }
            _ => {}
        }
    });
    let _ = grid.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn build_modal(document: &Document, body: &web_sys::HtmlElement, arcade: SharedArcade) {
    let modal = create(document, "div", "modal hidden");
    modal.set_id("entry-modal");
    let card = create(document, "div", "modal-card");

    let heading = document.create_element("h3").unwrap();
    heading.set_id("modal-title");
    let _ = card.append_child(&heading);

    for (id, kind, placeholder) in [
        ("entry-name", "text", "Player name"),
        ("entry-photo", "url", "Photo URL"),
        ("entry-score", "number", "Score"),
    ] {
        let input = document.create_element("input").unwrap();
        input.set_id(id);
        let _ = input.set_attribute("type", kind);
        let _ = input.set_attribute("placeholder", placeholder);
        let _ = input.set_attribute("required", "");
        let _ = card.append_child(&input);
    }

    let save = document.create_element("button").unwrap();
    save.set_text_content(Some("Save"));
    let cancel = document.create_element("button").unwrap();
    cancel.set_text_content(Some("Cancel"));
    let _ = card.append_child(&save);
    let _ = card.append_child(&cancel);
    let _ = modal.append_child(&card);
    let _ = body.append_child(&modal);

    let submit = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
        submit_modal(&arcade);
    });
    let _ = save.add_event_listener_with_callback("click", submit.as_ref().unchecked_ref());
    submit.forget();

    let dismiss = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
        close_modal();
    });
    let _ = cancel.add_event_listener_with_callback("click", dismiss.as_ref().unchecked_ref());
    dismiss.forget();
}

/// Show the modal for adding (entry = None) or editing an entry
fn open_modal(title: &str, entry: Option<&Entry>) {
    let document = web_sys::window().unwrap().document().unwrap();
    let modal = match document.get_element_by_id("entry-modal") {
        Some(modal) => modal,
        None => return,
    };

    let _ = modal.set_attribute("data-game", title);
    let _ = modal.set_attribute("data-entry", entry.map(|e| e.id.as_str()).unwrap_or(""));

    if let Some(heading) = document.get_element_by_id("modal-title") {
        let verb = if entry.is_some() { "Edit" } else { "Add" };
        heading.set_text_content(Some(&format!("{verb} Score \u{2014} {title}")));
    }

    set_input(&document, "entry-name", entry.map(|e| e.name.as_str()).unwrap_or(""));
    set_input(&document, "entry-photo", entry.map(|e| e.photo.as_str()).unwrap_or(""));
    let score = entry.map(|e| e.score.to_string()).unwrap_or_default();
    set_input(&document, "entry-score", &score);

    let _ = modal.set_attribute("class", "modal");
}

/// Read the form, refuse incomplete drafts, route to add or update
fn submit_modal(arcade: &SharedArcade) {
    let document = web_sys::window().unwrap().document().unwrap();
    let modal = match document.get_element_by_id("entry-modal") {
        Some(modal) => modal,
        None => return,
    };
    let title = modal.get_attribute("data-game").unwrap_or_default();
    let entry_id = modal.get_attribute("data-entry").unwrap_or_default();

    let name = input_value(&document, "entry-name");
    let photo = input_value(&document, "entry-photo");
    let score = input_value(&document, "entry-score");

    // Required field missing: refuse submission, leave the modal open
    let draft = match EntryDraft::from_form(&name, &photo, &score) {
        Some(draft) => draft,
        None => return,
    };

    if entry_id.is_empty() {
        arcade.borrow_mut().add_entry(&title, draft);
    } else {
        arcade.borrow_mut().update_entry(&title, &entry_id, draft);
    }

    close_modal();
    render_boards(arcade);
}

fn close_modal() {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(modal) = document.get_element_by_id("entry-modal") {
        let _ = modal.set_attribute("class", "modal hidden");
    }
}

fn create(document: &Document, tag: &str, class: &str) -> Element {
    let el = document.create_element(tag).expect("create element");
    let _ = el.set_attribute("class", class);
    el
}

fn input_value(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

fn set_input(document: &Document, id: &str, value: &str) {
    if let Some(input) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    {
        input.set_value(value);
    }
}
