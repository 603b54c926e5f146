//! Persistence interface
//!
//! The core never touches storage on its own: commands receive a [`Storage`]
//! implementation and pass plain snapshot/stats records through it. The
//! shipped implementation keeps one JSON file per key under a data
//! directory. Unreadable or corrupt files degrade to "nothing stored" so a
//! damaged cache can never block play.

use crate::game::snapshot::GameSnapshot;
use crate::game::stats::Stats;
use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage collaborator for game snapshots and stats
pub trait Storage {
    /// Load the snapshot filed under a key, if any
    fn load_game(&self, key: &str) -> Option<GameSnapshot>;

    /// Persist a snapshot under a key
    ///
    /// # Errors
    /// Returns an error if the record cannot be written.
    fn save_game(&self, key: &str, snapshot: &GameSnapshot) -> Result<()>;

    /// Load the lifetime stats record; defaults when absent
    fn load_stats(&self) -> Stats;

    /// Persist the lifetime stats record
    ///
    /// # Errors
    /// Returns an error if the record cannot be written.
    fn save_stats(&self, stats: &Stats) -> Result<()>;
}

const STATS_KEY: &str = "stats";

/// One JSON file per key under a root directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Store rooted at a directory; created lazily on first write
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory this store writes under
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys contain ':' separators; keep filenames portable.
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.root.join(format!("{name}.json"))
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = fs::read_to_string(self.path_for(key)).ok()?;
        serde_json::from_str(&raw).ok()
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("creating data directory {}", self.root.display()))?;
        let path = self.path_for(key);
        let raw = serde_json::to_string_pretty(value)?;
        fs::write(&path, raw).with_context(|| format!("writing {}", path.display()))
    }
}

impl Storage for JsonFileStore {
    fn load_game(&self, key: &str) -> Option<GameSnapshot> {
        self.read_json(key)
    }

    fn save_game(&self, key: &str, snapshot: &GameSnapshot) -> Result<()> {
        self.write_json(key, snapshot)
    }

    fn load_stats(&self) -> Stats {
        self.read_json(STATS_KEY).unwrap_or_default()
    }

    fn save_stats(&self, stats: &Stats) -> Result<()> {
        self.write_json(STATS_KEY, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::GameStatus;
    use crate::game::stats::{PuzzleOutcome, apply_outcome};

    fn temp_store(label: &str) -> JsonFileStore {
        let root = std::env::temp_dir().join(format!(
            "lexigap-store-test-{label}-{}",
            std::process::id()
        ));
        fs::remove_dir_all(&root).ok();
        JsonFileStore::new(root)
    }

    fn snapshot() -> GameSnapshot {
        GameSnapshot {
            puzzle_number: 55,
            calendar_date: "2026-02-25".to_string(),
            required_length: 5,
            target_word: "berry".to_string(),
            seed_key: "lexigap|2026-02-25|v2".to_string(),
            is_practice: false,
            practice_seed: None,
            max_guesses: 10,
            attempts: Vec::new(),
            status: GameStatus::Playing,
        }
    }

    #[test]
    fn game_round_trip() {
        let store = temp_store("game");
        let snap = snapshot();

        assert!(store.load_game("game:daily:2026-02-25").is_none());
        store.save_game("game:daily:2026-02-25", &snap).unwrap();
        assert_eq!(store.load_game("game:daily:2026-02-25"), Some(snap));

        fs::remove_dir_all(store.root()).ok();
    }

    #[test]
    fn stats_round_trip_and_default() {
        let store = temp_store("stats");
        assert_eq!(store.load_stats(), Stats::default());

        let stats = apply_outcome(
            &Stats::default(),
            &PuzzleOutcome {
                puzzle_number: 55,
                date: "2026-02-25".to_string(),
                won: true,
                guess_count: 4,
                emoji_row: "\u{1F7E9}".to_string(),
            },
        );
        store.save_stats(&stats).unwrap();
        assert_eq!(store.load_stats(), stats);

        fs::remove_dir_all(store.root()).ok();
    }

    #[test]
    fn corrupt_file_degrades_to_none() {
        let store = temp_store("corrupt");
        fs::create_dir_all(store.root()).unwrap();
        fs::write(store.root().join("game_daily_2026-02-25.json"), "{not json").unwrap();

        assert!(store.load_game("game:daily:2026-02-25").is_none());

        fs::remove_dir_all(store.root()).ok();
    }

    #[test]
    fn keys_map_to_distinct_files() {
        let store = temp_store("keys");
        store.save_game("game:daily:2026-02-25", &snapshot()).unwrap();

        let mut practice = snapshot();
        practice.is_practice = true;
        practice.practice_seed = Some("warmup".to_string());
        store.save_game("game:practice:warmup", &practice).unwrap();

        assert_ne!(
            store.load_game("game:daily:2026-02-25"),
            store.load_game("game:practice:warmup")
        );

        fs::remove_dir_all(store.root()).ok();
    }
}
