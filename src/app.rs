//! Application context for the command-line front end.
//! Opens storage, sets up the clock and loads the built-in content.

use crate::config::Config;
use crate::database::app_state;
use crate::database::{KeyValueStorage, MemoryStorage, SqliteStorage};
use crate::error::{Result, SrsError};
use crate::models::ContentDeck;
use crate::srs::{ReviewStore, SrsService, SystemClock};
use chrono::{DateTime, FixedOffset, Utc};
use std::path::PathBuf;
use tracing::warn;

pub struct AppContext {
    pub service: SrsService,
    pub content: ContentDeck,
    pub config: Config,
    /// False when running on in-memory storage.
    pub persistent: bool,
}

impl AppContext {
    /// Falls back to in-memory storage if the database cannot be opened.
    pub fn new(config: Config, db_path: Option<PathBuf>) -> Result<Self> {
        let offset = config
            .utc_offset()
            .map_err(|e| SrsError::Config(e.to_string()))?;
        let db_path = db_path.or_else(|| config.database_path());

        let (storage, persistent) = open_storage(db_path);
        let day_offset = app_state::day_offset(storage.as_ref()).unwrap_or_else(|e| {
            warn!(error = %e, "failed to read simulated day offset");
            0
        });

        let service = SrsService::new(
            ReviewStore::new(storage),
            Box::new(SystemClock::with_offset_days(day_offset)),
            offset,
        );

        Ok(Self {
            service,
            content: ContentDeck::builtin()?,
            config,
            persistent,
        })
    }

    pub fn storage(&self) -> &dyn KeyValueStorage {
        self.service.store().storage()
    }

    /// Note shown after commands whose changes will not outlive the process.
    pub fn unsaved_note(&self, saved: bool) -> Option<&'static str> {
        (!saved || !self.persistent).then_some("(progress is not being saved)")
    }

    /// Formats a timestamp as YYYY-MM-DD in the configured timezone.
    pub fn format_date(&self, time: DateTime<Utc>) -> String {
        format_date(time, self.service.offset())
    }
}

pub fn format_date(time: DateTime<Utc>, offset: FixedOffset) -> String {
    time.with_timezone(&offset).format("%Y-%m-%d").to_string()
}

fn open_storage(db_path: Option<PathBuf>) -> (Box<dyn KeyValueStorage>, bool) {
    let Some(path) = db_path else {
        warn!("no data directory available, progress will not be saved");
        return (Box::new(MemoryStorage::new()), false);
    };

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            warn!(path = %parent.display(), error = %e, "failed to create data directory");
        }
    }

    match SqliteStorage::open(&path) {
        Ok(storage) => (Box::new(storage), true),
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "failed to open database, progress will not be saved"
            );
            (Box::new(MemoryStorage::new()), false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_opens_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("lingo.db");

        let ctx = AppContext::new(Config::default(), Some(path.clone())).unwrap();
        assert!(ctx.persistent);
        assert!(path.exists());
    }

    #[test]
    fn test_unopenable_database_falls_back_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a database file
        let ctx = AppContext::new(Config::default(), Some(dir.path().to_path_buf())).unwrap();
        assert!(!ctx.persistent);

        ctx.service.initialize_deck(&ctx.content.words, &ctx.content.sentences);
        assert!(ctx.service.due_count() > 0);
        assert_eq!(ctx.unsaved_note(true), Some("(progress is not being saved)"));
    }

    #[test]
    fn test_unsaved_note() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::new(Config::default(), Some(dir.path().join("lingo.db"))).unwrap();
        assert_eq!(ctx.unsaved_note(true), None);
        assert_eq!(ctx.unsaved_note(false), Some("(progress is not being saved)"));
    }

    #[test]
    fn test_format_date_uses_offset() {
        let time = Utc.with_ymd_and_hms(2024, 12, 31, 23, 30, 0).unwrap();
        let plus_one = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(format_date(time, plus_one), "2025-01-01");
    }
}
