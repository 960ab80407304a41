//! Arcade Boards entry point
//!
//! On the web: restore (or seed) the boards from LocalStorage and mount the
//! DOM shell. Natively: run a small demo against the in-memory store.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    use std::cell::RefCell;
    use std::rc::Rc;

    use arcade_boards::app::Arcade;
    use arcade_boards::store::LocalStorageStore;
    use arcade_boards::ui;

    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

    log::info!("Arcade Boards starting...");

    let arcade = Rc::new(RefCell::new(Arcade::load_or_seed(LocalStorageStore::new())));
    ui::mount(arcade);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use arcade_boards::app::Arcade;
    use arcade_boards::board::EntryDraft;
    use arcade_boards::store::MemoryStore;
    use arcade_boards::format_score;

    env_logger::init();
    log::info!("Arcade Boards (native) starting...");
    log::info!("Boards render in the browser - run with `trunk serve` for the web version");

    // Demo run against the in-memory store
    let mut arcade = Arcade::load_or_seed(MemoryStore::new());
    for (game, name, photo, score) in [
        ("Flappy Bird", "Sarah Chen", "https://images.unsplash.com/photo-1494790108377", "156"),
        ("Flappy Bird", "Mike Ross", "https://images.unsplash.com/photo-1500648767791", "143"),
        ("Lane Racer", "John Doe", "https://images.unsplash.com/photo-1472099645785", "2345"),
        ("Tetris", "Alex Kim", "https://images.unsplash.com/photo-1539571696357", "45670"),
        ("Tetris", "Rachel Green", "https://images.unsplash.com/photo-1517841905240", "42350"),
        ("Tetris", "David Zhang", "https://images.unsplash.com/photo-1506794778202", "39980"),
    ] {
        let draft = EntryDraft::from_form(name, photo, score).expect("demo draft is valid");
        arcade.add_entry(game, draft);
    }

    for game in arcade.games() {
        println!("\n{} {}", game.icon.glyph(), game.title);
        for (rank, entry) in game.entries.iter().enumerate() {
            println!("  #{} {:<14} {:>8}", rank + 1, entry.name, format_score(entry.score));
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
