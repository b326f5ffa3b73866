use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
struct ScoreFile {
    score: usize,
}

/// File-backed store for the best score across sessions.
///
/// The file holds a single JSON object `{ "score": <int> }` and is rewritten
/// whole on save.
#[derive(Debug)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the persisted best score.
    ///
    /// A missing or unparseable file reads as 0; load failures are never
    /// surfaced.
    #[must_use]
    pub fn load(&self) -> usize {
        self.try_load().unwrap_or_default()
    }

    fn try_load(&self) -> Option<usize> {
        let file = File::open(&self.path).ok()?;
        let record: ScoreFile = serde_json::from_reader(BufReader::new(file)).ok()?;
        Some(record.score)
    }

    /// Overwrites the score file with the given value.
    pub fn save(&self, score: usize) -> anyhow::Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Failed to create score file: {}", self.path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &ScoreFile { score })
            .with_context(|| format!("Failed to write score file: {}", self.path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush score file: {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("quadrix-store-{}-{name}.json", process::id()))
    }

    #[test]
    fn test_missing_file_reads_as_zero() {
        let store = HighScoreStore::new(temp_path("missing"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let path = temp_path("round-trip");
        let store = HighScoreStore::new(path.clone());
        store.save(1230).unwrap();
        assert_eq!(store.load(), 1230);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_corrupt_file_reads_as_zero() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json at all").unwrap();
        let store = HighScoreStore::new(path.clone());
        assert_eq!(store.load(), 0);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_save_overwrites_prior_content() {
        let path = temp_path("overwrite");
        let store = HighScoreStore::new(path.clone());
        store.save(50).unwrap();
        store.save(40).unwrap();
        assert_eq!(store.load(), 40);
        fs::remove_file(path).unwrap();
    }
}
