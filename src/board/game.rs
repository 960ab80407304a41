//! Game definitions and icon glyphs

use serde::{Deserialize, Serialize};

use super::entry::Entry;

/// Glyph identifier for a game section header.
///
/// Stored as a lowercase symbolic name. Resolution is total: any name that
/// is not recognized deserializes to [`GameIcon::Trophy`] rather than
/// failing the snapshot parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameIcon {
    Bird,
    Car,
    Gamepad,
    /// Fallback for unrecognized stored names
    #[default]
    Trophy,
}

impl GameIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameIcon::Bird => "bird",
            GameIcon::Car => "car",
            GameIcon::Gamepad => "gamepad",
            GameIcon::Trophy => "trophy",
        }
    }

    /// Resolve a stored symbolic name
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "bird" => GameIcon::Bird,
            "car" => GameIcon::Car,
            "gamepad" => GameIcon::Gamepad,
            _ => GameIcon::Trophy,
        }
    }

    /// Display glyph for section headers and rank cells
    pub fn glyph(&self) -> &'static str {
        match self {
            GameIcon::Bird => "\u{1F426}",    // 🐦
            GameIcon::Car => "\u{1F697}",     // 🚗
            GameIcon::Gamepad => "\u{1F3AE}", // 🎮
            GameIcon::Trophy => "\u{1F3C6}",  // 🏆
        }
    }
}

impl From<String> for GameIcon {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<GameIcon> for String {
    fn from(icon: GameIcon) -> Self {
        icon.as_str().to_string()
    }
}

/// A named leaderboard with a capped, ranked entry list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Stable identity key; the routing key for all operations
    pub title: String,
    /// Section header glyph
    pub icon: GameIcon,
    /// Ranked entries, sorted descending by score, at most `MAX_ENTRIES`
    #[serde(rename = "scores")]
    pub entries: Vec<Entry>,
}

impl Game {
    /// New game with an empty entry list
    pub fn new(title: &str, icon: GameIcon) -> Self {
        Self {
            title: title.to_string(),
            icon,
            entries: Vec::new(),
        }
    }
}

/// The fixed game roster, seeded on first run (display order).
/// The set never grows or shrinks at runtime.
pub fn seeded_games() -> Vec<Game> {
    vec![
        Game::new("Flappy Bird", GameIcon::Bird),
        Game::new("Lane Racer", GameIcon::Car),
        Game::new("Tetris", GameIcon::Gamepad),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_name_roundtrip() {
        for icon in [
            GameIcon::Bird,
            GameIcon::Car,
            GameIcon::Gamepad,
            GameIcon::Trophy,
        ] {
            assert_eq!(GameIcon::from_name(icon.as_str()), icon);
        }
    }

    #[test]
    fn test_unrecognized_icon_falls_back_to_trophy() {
        assert_eq!(GameIcon::from_name("rocket"), GameIcon::Trophy);
        assert_eq!(GameIcon::from_name(""), GameIcon::Trophy);

        // Through serde as well: a stored name from some future revision
        // must not fail the whole snapshot parse.
        let icon: GameIcon = serde_json::from_str("\"rocket\"").unwrap();
        assert_eq!(icon, GameIcon::Trophy);
    }

    #[test]
    fn test_icon_serializes_as_lowercase_name() {
        assert_eq!(serde_json::to_string(&GameIcon::Bird).unwrap(), "\"bird\"");
        let back: GameIcon = serde_json::from_str("\"BIRD\"").unwrap();
        assert_eq!(back, GameIcon::Bird);
    }

    #[test]
    fn test_game_serializes_entries_as_scores() {
        let game = Game::new("Tetris", GameIcon::Gamepad);
        let json = serde_json::to_string(&game).unwrap();
        assert!(json.contains("\"scores\":[]"));
        assert!(!json.contains("\"entries\""));
    }

    #[test]
    fn test_seeded_roster() {
        let games = seeded_games();
        let titles: Vec<_> = games.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, ["Flappy Bird", "Lane Racer", "Tetris"]);
        assert!(games.iter().all(|g| g.entries.is_empty()));
    }
}
