//! Leaderboard state container and mutation rules

use super::entry::{Entry, EntryDraft};
use super::game::{Game, seeded_games};

/// Maximum entries retained per game; lower-ranked excess is dropped on
/// insert, not archived and not recoverable
pub const MAX_ENTRIES: usize = 3;

/// Full value-copy of all games at a point in time
pub type Snapshot = Vec<Game>;

/// The in-memory collection of games and their ranked entries.
///
/// All writes funnel through [`add_entry`](Self::add_entry),
/// [`update_entry`](Self::update_entry) and
/// [`delete_entry`](Self::delete_entry); readers get [`games`](Self::games)
/// or a value-copy via [`snapshot`](Self::snapshot). Each operation returns
/// `Some` exactly when state changed, so callers know when to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboards {
    games: Vec<Game>,
}

impl Default for Leaderboards {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Leaderboards {
    /// The fixed three-game roster with empty entry lists
    pub fn seeded() -> Self {
        Self {
            games: seeded_games(),
        }
    }

    /// Restore from a persisted snapshot. The snapshot is authoritative for
    /// both structure and content; the seed roster is not consulted.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self { games: snapshot }
    }

    /// Read-only view of all games in display order
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Full value-copy for persistence and rendering
    pub fn snapshot(&self) -> Snapshot {
        self.games.clone()
    }

    /// Insert a new entry with a fresh id, re-rank, cap. Returns the game's
    /// new entry list, or None when the title matches no game.
    pub fn add_entry(&mut self, title: &str, draft: EntryDraft) -> Option<&[Entry]> {
        let game = self.game_mut(title)?;
        game.entries.push(Entry::new(draft));
        rank(&mut game.entries);
        Some(&game.entries)
    }

    /// Replace the entry matching `id` with the draft's fields under the
    /// same id (full replacement, not a patch), then re-rank and cap.
    /// None when the title or id matches nothing.
    pub fn update_entry(&mut self, title: &str, id: &str, draft: EntryDraft) -> Option<&[Entry]> {
        let game = self.game_mut(title)?;
        let entry = match game.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => entry,
            None => {
                log::debug!("update for unknown entry {id} in {title:?}");
                return None;
            }
        };
        *entry = Entry::with_id(id.to_string(), draft);
        rank(&mut game.entries);
        Some(&game.entries)
    }

    /// Remove the entry matching `id`. Removal preserves the relative order
    /// of the remaining entries; the list only shrinks, so no re-rank.
    /// None when the title or id matches nothing.
    pub fn delete_entry(&mut self, title: &str, id: &str) -> Option<&[Entry]> {
        let game = self.game_mut(title)?;
        let pos = match game.entries.iter().position(|e| e.id == id) {
            Some(pos) => pos,
            None => {
                log::debug!("delete for unknown entry {id} in {title:?}");
                return None;
            }
        };
        game.entries.remove(pos);
        Some(&game.entries)
    }

    fn game_mut(&mut self, title: &str) -> Option<&mut Game> {
        let game = self.games.iter_mut().find(|g| g.title == title);
        if game.is_none() {
            log::debug!("no game titled {title:?}");
        }
        game
    }
}

/// Stable descending sort by score, then cap. Stability means equal scores
/// keep their pre-sort order: a tying newcomer (appended before sorting)
/// ranks below the incumbent.
fn rank(entries: &mut Vec<Entry>) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(MAX_ENTRIES);
}
