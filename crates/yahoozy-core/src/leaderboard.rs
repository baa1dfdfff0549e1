//! All-time leaderboard: in-memory merge plus the on-disk history store.
//!
//! The persisted format is one entry per line, `<score><US><name>`,
//! where `<US>` is the ASCII unit separator (0x1F). The file is kept
//! fully sorted by `(score descending, name ascending)`.

use crate::error::{YahoozyError, YhResult};
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use std::cmp::Reverse;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Field separator of the history file.
const UNIT_SEPARATOR: u8 = 0x1f;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub score: u32,
    pub name: String,
}

impl LeaderboardEntry {
    pub fn new(score: u32, name: impl Into<String>) -> Self {
        Self {
            score,
            name: name.into(),
        }
    }

    fn sort_key(&self) -> (Reverse<u32>, &str) {
        (Reverse(self.score), self.name.as_str())
    }
}

/// Insert each final into the history, keeping it sorted by
/// `(score desc, name asc)`. Insertions land after existing entries of
/// equal key, and nothing is deduplicated: the same name may appear once
/// per finished game.
pub fn merge(history: &mut Vec<LeaderboardEntry>, finals: impl IntoIterator<Item = LeaderboardEntry>) {
    for entry in finals {
        let at = history.partition_point(|e| e.sort_key() <= entry.sort_key());
        history.insert(at, entry);
    }
}

/// The persisted, unbounded score history.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Open the store inside `dir`, creating the directory and an empty
    /// history file if they don't exist yet. An existing file is never
    /// touched here.
    pub fn open(dir: impl AsRef<Path>) -> YhResult<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join("history");
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)?;
        debug!(path = %path.display(), "history store opened");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All persisted entries, file order. A malformed line fails the
    /// whole load; there is no partial recovery.
    pub fn load(&self) -> YhResult<Vec<LeaderboardEntry>> {
        self.read_entries(usize::MAX)
    }

    /// The first `n` entries — the display prefix, which the maintained
    /// sort order makes the top scores.
    pub fn load_top(&self, n: usize) -> YhResult<Vec<LeaderboardEntry>> {
        self.read_entries(n)
    }

    /// Merge a finished game's finals into the history and persist.
    ///
    /// The whole updated history is rewritten in one pass; a crash
    /// mid-write can corrupt the file. Accepted for a single local user,
    /// no mitigation here.
    pub fn record_game(
        &self,
        finals: impl IntoIterator<Item = LeaderboardEntry>,
    ) -> YhResult<Vec<LeaderboardEntry>> {
        let mut history = self.load()?;
        let before = history.len();
        merge(&mut history, finals);

        let mut writer = WriterBuilder::new()
            .delimiter(UNIT_SEPARATOR)
            .quote_style(QuoteStyle::Never)
            .has_headers(false)
            .from_path(&self.path)?;
        for entry in &history {
            writer.write_record([entry.score.to_string().as_str(), entry.name.as_str()])?;
        }
        writer.flush()?;

        info!(
            merged = history.len() - before,
            total = history.len(),
            "game recorded"
        );
        Ok(history)
    }

    fn read_entries(&self, limit: usize) -> YhResult<Vec<LeaderboardEntry>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(UNIT_SEPARATOR)
            .quoting(false)
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut entries = Vec::new();
        for (line, record) in reader.records().enumerate() {
            if entries.len() == limit {
                break;
            }
            let record = record?;
            if record.len() != 2 {
                return Err(YahoozyError::History(format!(
                    "line {}: expected 2 fields, found {}",
                    line + 1,
                    record.len()
                )));
            }
            let score = record[0].parse::<u32>().map_err(|e| {
                YahoozyError::History(format!("line {}: bad score: {}", line + 1, e))
            })?;
            entries.push(LeaderboardEntry::new(score, &record[1]));
        }
        Ok(entries)
    }
}
