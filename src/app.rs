//! Binds the leaderboard engine to a snapshot store
//!
//! Every mutation is one unit of work: run the engine operation, take a
//! fresh snapshot, hand it to the store. In-memory state and storage never
//! drift, in either direction: no save happens without a mutation, and no
//! mutation completes without a save.

use crate::board::{EntryDraft, Game, Leaderboards, Snapshot};
use crate::store::SnapshotStore;

/// The application state container: engine plus its persistence backend
pub struct Arcade<S: SnapshotStore> {
    boards: Leaderboards,
    store: S,
}

impl<S: SnapshotStore> Arcade<S> {
    /// Restore from the store's snapshot, or seed the fixed roster on first
    /// run and when stored data is unreadable
    pub fn load_or_seed(store: S) -> Self {
        let boards = match store.load() {
            Some(snapshot) => Leaderboards::from_snapshot(snapshot),
            None => {
                log::info!("No saved boards, seeding fresh roster");
                Leaderboards::seeded()
            }
        };
        Self { boards, store }
    }

    /// Read-only view of all games in display order
    pub fn games(&self) -> &[Game] {
        self.boards.games()
    }

    /// Full value-copy of the current state
    pub fn snapshot(&self) -> Snapshot {
        self.boards.snapshot()
    }

    /// Add an entry and persist. None on a routing miss; nothing is written.
    pub fn add_entry(&mut self, title: &str, draft: EntryDraft) -> Option<Snapshot> {
        self.boards.add_entry(title, draft)?;
        Some(self.persist())
    }

    /// Replace an entry's fields under its existing id and persist.
    /// None on a routing miss; nothing is written.
    pub fn update_entry(&mut self, title: &str, id: &str, draft: EntryDraft) -> Option<Snapshot> {
        self.boards.update_entry(title, id, draft)?;
        Some(self.persist())
    }

    /// Delete an entry and persist. None on a routing miss; nothing is
    /// written.
    pub fn delete_entry(&mut self, title: &str, id: &str) -> Option<Snapshot> {
        self.boards.delete_entry(title, id)?;
        Some(self.persist())
    }

    fn persist(&mut self) -> Snapshot {
        let snapshot = self.boards.snapshot();
        self.store.save(&snapshot);
        snapshot
    }
}
