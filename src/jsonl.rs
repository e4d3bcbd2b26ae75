//! Append-only JSON Lines event logger.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::event::{EventSink, GameEvent};
use crate::sync::Mutex;

#[derive(Serialize)]
struct Line<'a> {
    t: String,
    #[serde(flatten)]
    event: &'a GameEvent,
}

/// Writes each event as one JSON object per line.
///
/// Every line carries a `"t"` field with an RFC 3339 UTC timestamp, followed
/// by the event's own fields. Lines are flushed as they are written so the
/// file stays readable if the process is killed between turns.
#[derive(Debug)]
pub struct JsonLinesLogger {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl JsonLinesLogger {
    /// Opens `path` for appending, creating it and its parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Opens a fresh `game-<timestamp>.jsonl` file inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created.
    pub fn in_dir(dir: impl AsRef<Path>) -> io::Result<Self> {
        let stamp = Utc::now().format("%Y-%m-%dT%H-%M-%S%.3fZ");
        Self::create(dir.as_ref().join(format!("game-{stamp}.jsonl")))
    }

    /// Returns the path being written.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&self, event: &GameEvent) -> io::Result<()> {
        let line = Line {
            t: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            event,
        };
        let mut writer = self.writer.lock();
        serde_json::to_writer(&mut *writer, &line)?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

impl EventSink for JsonLinesLogger {
    fn record(&self, event: &GameEvent) {
        if let Err(err) = self.write_line(event) {
            tracing::warn!(
                path = %self.path.display(),
                kind = event.kind(),
                "Failed to write game event: {err}"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;
    use crate::event::SeatedPlayer;
    use crate::hand::Hand;

    #[test]
    fn writes_one_parseable_object_per_line() {
        let dir = tempfile::tempdir().expect("tempdir");
        let logger = JsonLinesLogger::create(dir.path().join("logs/game.jsonl")).expect("logger");

        logger.record(&GameEvent::RoundStart {
            round: 1,
            players: vec![SeatedPlayer {
                id: 0,
                name: "Ada".to_string(),
            }],
        });
        let mut hand = Hand::new();
        hand.add_card(Card::number(8));
        logger.record(&GameEvent::Stop {
            round: 1,
            player_id: 0,
            player_name: "Ada".to_string(),
            hand,
            round_points: 8,
        });

        let text = fs::read_to_string(logger.path()).expect("read log");
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).expect("valid json"))
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "round_start");
        assert_eq!(lines[0]["players"][0]["name"], "Ada");
        assert!(lines[0]["t"].is_string());
        assert_eq!(lines[1]["type"], "stop");
        assert_eq!(lines[1]["hand"], serde_json::json!([8]));
        assert_eq!(lines[1]["roundPoints"], 8);
    }

    #[test]
    fn in_dir_names_file_after_game() {
        let dir = tempfile::tempdir().expect("tempdir");
        let logger = JsonLinesLogger::in_dir(dir.path()).expect("logger");
        let name = logger
            .path()
            .file_name()
            .and_then(|n| n.to_str())
            .expect("file name");
        assert!(name.starts_with("game-"));
        assert!(name.ends_with(".jsonl"));
    }
}
