//! Snapshot persistence
//!
//! One JSON value under one storage key: LocalStorage in the browser, an
//! in-memory slot natively and in tests. Stored data is untrusted; anything
//! that fails to parse is treated as absent rather than an error.

use crate::board::Snapshot;

/// Storage key for the persisted snapshot (shared by every backend)
pub const STORAGE_KEY: &str = "arcade_boards_games";

/// Durable single-slot snapshot storage
pub trait SnapshotStore {
    /// The most recently saved snapshot, or None on first run and on
    /// unreadable data
    fn load(&self) -> Option<Snapshot>;

    /// Overwrite the stored value, synchronously and unconditionally.
    /// Single-key whole-value semantics; not a crash-safe durability
    /// guarantee.
    fn save(&mut self, snapshot: &Snapshot);
}

fn decode(json: &str) -> Option<Snapshot> {
    match serde_json::from_str(json) {
        Ok(snapshot) => Some(snapshot),
        Err(err) => {
            log::warn!("Discarding unreadable snapshot: {err}");
            None
        }
    }
}

/// In-memory single-slot store, used on native targets and as the test
/// double. Holds the serialized JSON so load/save exercise the same
/// serialization path as the browser store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with raw text, bypassing serialization
    #[cfg(test)]
    pub fn with_raw(raw: &str) -> Self {
        Self {
            slot: Some(raw.to_string()),
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Option<Snapshot> {
        decode(self.slot.as_deref()?)
    }

    fn save(&mut self, snapshot: &Snapshot) {
        if let Ok(json) = serde_json::to_string(snapshot) {
            self.slot = Some(json);
        }
    }
}

/// Browser LocalStorage store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl SnapshotStore for LocalStorageStore {
    fn load(&self) -> Option<Snapshot> {
        let json = Self::storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        let snapshot = decode(&json)?;
        log::info!("Loaded {} boards from LocalStorage", snapshot.len());
        Some(snapshot)
    }

    fn save(&mut self, snapshot: &Snapshot) {
        if let Some(storage) = Self::storage() {
            if let Ok(json) = serde_json::to_string(snapshot) {
                let _ = storage.set_item(STORAGE_KEY, &json);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{EntryDraft, Leaderboards};

    fn populated_snapshot() -> Snapshot {
        let mut boards = Leaderboards::seeded();
        for (name, score) in [("Sarah Chen", 156), ("Mike Ross", 143), ("Emma Wilson", 128)] {
            boards
                .add_entry(
                    "Flappy Bird",
                    EntryDraft {
                        name: name.to_string(),
                        photo: format!("https://example.com/{score}.jpg"),
                        score,
                    },
                )
                .unwrap();
        }
        boards.snapshot()
    }

    #[test]
    fn test_first_run_loads_none() {
        assert!(MemoryStore::new().load().is_none());
    }

    #[test]
    fn test_save_then_load_roundtrips() {
        let snapshot = populated_snapshot();
        let mut store = MemoryStore::new();
        store.save(&snapshot);
        assert_eq!(store.load().unwrap(), snapshot);
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let mut store = MemoryStore::new();
        store.save(&populated_snapshot());
        let empty = Leaderboards::seeded().snapshot();
        store.save(&empty);
        assert_eq!(store.load().unwrap(), empty);
    }

    #[test]
    fn test_corrupt_data_loads_none() {
        assert!(MemoryStore::with_raw("not json").load().is_none());
        assert!(MemoryStore::with_raw("{\"games\": 3}").load().is_none());
        // Right shape, wrong field types
        assert!(
            MemoryStore::with_raw("[{\"title\": 1, \"icon\": \"bird\", \"scores\": []}]")
                .load()
                .is_none()
        );
    }

    #[test]
    fn test_wire_layout_is_a_game_array_with_scores_key() {
        let mut store = MemoryStore::new();
        store.save(&populated_snapshot());
        let raw = store.slot.unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains("\"scores\""));
        assert!(raw.contains("\"icon\":\"bird\""));
    }

    #[test]
    fn test_unknown_icon_does_not_fail_the_snapshot() {
        let raw = "[{\"title\": \"Tetris\", \"icon\": \"joystick\", \"scores\": []}]";
        let snapshot = MemoryStore::with_raw(raw).load().unwrap();
        assert_eq!(snapshot[0].icon, crate::board::GameIcon::Trophy);
    }
}
