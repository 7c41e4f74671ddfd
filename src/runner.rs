// src/runner.rs
//! Actions shared by the GUI and the CLI.
//!
//! Each action runs to completion and hands back a `Notice`; errors are
//! logged here and turned into an error-level notice, never propagated.

use std::path::Path;

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::config::options::SyncConfig;
use crate::file::write_export;
use crate::notice::Notice;
use crate::page::html::HtmlPage;
use crate::page::PageAdapter;
use crate::scrape::collect_records;
use crate::store::{clear_collection, load_collection, save_new, KvStore, SaveOutcome};
use crate::sync::{sync_with_config, SyncOutcome};

/// What the stats header shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub count: usize,
    /// Capture time of the last record in the collection.
    pub last_update: Option<DateTime<Utc>>,
}

impl Stats {
    /// "01.03.2024 11:15:00" in local time, or "-".
    pub fn last_update_display(&self) -> String {
        match self.last_update {
            Some(t) => t.with_timezone(&Local).format("%d.%m.%Y %H:%M:%S").to_string(),
            None => s!("-"),
        }
    }
}

/// Read a saved page from disk and capture it.
pub fn capture_page(store: &mut dyn KvStore, path: &Path) -> Notice {
    match HtmlPage::load(path) {
        Ok(page) => capture(store, &page, Utc::now()),
        Err(e) => {
            loge!("Capture: cannot read {}: {e}", path.display());
            notice!(Error, "Could not read page: {e}")
        }
    }
}

/// Extract every prospect on `page` and save the ones not seen in the last day.
pub fn capture<P: PageAdapter>(store: &mut dyn KvStore, page: &P, now: DateTime<Utc>) -> Notice {
    let records = collect_records(page, now);

    match save_new(store, &records) {
        Ok(SaveOutcome::Empty) => notice!(Warning, "No players found on this page"),
        Ok(SaveOutcome::NothingNew { .. }) => notice!(Warning, "Players were already saved previously"),
        Ok(SaveOutcome::Saved { added, .. }) => notice!(Success, "Saved {added} new players from scouting"),
        Err(e) => {
            loge!("Capture: save failed: {e}");
            notice!(Error, "Error saving data")
        }
    }
}

/// Write the whole collection to `<dir>/hattrick_scouts_<day>.csv`.
pub fn export(store: &dyn KvStore, dir: &Path, day: NaiveDate) -> Notice {
    let records = match load_collection(store) {
        Ok(r) => r,
        Err(e) => {
            loge!("Export: cannot load collection: {e}");
            return notice!(Error, "Export error");
        }
    };
    if records.is_empty() {
        return notice!(Warning, "No data to export");
    }

    match write_export(dir, &records, day) {
        Ok(path) => {
            logf!("Export: {} records → {}", records.len(), path.display());
            notice!(Success, "Exported {} records", records.len())
        }
        Err(e) => {
            loge!("Export: write failed: {e}");
            notice!(Error, "Export error")
        }
    }
}

pub fn sync(cfg: &SyncConfig, store: &dyn KvStore) -> Notice {
    match sync_with_config(cfg, store) {
        Ok(SyncOutcome::Disabled) => notice!(Warning, "Cloud sync is disabled"),
        Ok(SyncOutcome::NothingToSync) => notice!(Warning, "No data to sync"),
        Ok(SyncOutcome::Uploaded { remote_rows, local_rows }) => {
            notice!(Success, "Synced {local_rows} records ({remote_rows} already in cloud)")
        }
        Err(e) => {
            loge!("Sync: {e}");
            notice!(Error, "Sync failed: {e}")
        }
    }
}

pub fn stats(store: &dyn KvStore) -> crate::error::Result<Stats> {
    let records = load_collection(store)?;
    Ok(Stats {
        count: records.len(),
        last_update: records.last().map(|r| r.timestamp),
    })
}

pub fn clear(store: &mut dyn KvStore) -> Notice {
    match clear_collection(store) {
        Ok(()) => {
            logf!("Clear: collection removed");
            notice!(Success, "Data cleared")
        }
        Err(e) => {
            loge!("Clear: {e}");
            notice!(Error, "Error deleting data")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::Level;
    use crate::page::fixture::{FixtureCard, FixturePage};
    use crate::error::{Result, ScoutError};
    use crate::store::MemoryStore;
    use chrono::{Duration, TimeZone};
    use serde_json::Value;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
    }

    /// Memory store whose reads or writes can be switched off.
    #[derive(Default)]
    struct Flaky {
        inner: MemoryStore,
        fail_get: bool,
        fail_write: bool,
    }

    impl KvStore for Flaky {
        fn get(&self, key: &str) -> Result<Option<Value>> {
            if self.fail_get {
                return Err(ScoutError::Io(std::io::Error::other("read denied")));
            }
            self.inner.get(key)
        }
        fn set(&mut self, key: &str, value: Value) -> Result<()> {
            if self.fail_write {
                return Err(ScoutError::Io(std::io::Error::other("disk full")));
            }
            self.inner.set(key, value)
        }
        fn remove(&mut self, key: &str) -> Result<()> {
            if self.fail_write {
                return Err(ScoutError::Io(std::io::Error::other("disk full")));
            }
            self.inner.remove(key)
        }
    }

    fn names(store: &MemoryStore) -> Vec<String> {
        load_collection(store)
            .unwrap()
            .into_iter()
            .filter_map(|r| r.name)
            .collect()
    }

    fn page(names: &[&str]) -> FixturePage {
        FixturePage {
            prospects: names.iter().map(|n| FixtureCard::named(&[*n])).collect(),
            ..FixturePage::default()
        }
    }

    #[test]
    fn capture_notices() {
        let mut store = MemoryStore::default();

        let n = capture(&mut store, &page(&[]), now());
        assert_eq!(n, notice!(Warning, "No players found on this page"));

        let n = capture(&mut store, &page(&["A", "B"]), now());
        assert_eq!(n, notice!(Success, "Saved 2 new players from scouting"));

        // Same DOM, re-saved within the day: nothing new.
        let n = capture(&mut store, &page(&["A", "B"]), now() + Duration::hours(3));
        assert_eq!(n, notice!(Warning, "Players were already saved previously"));

        let s = stats(&store).unwrap();
        assert_eq!(s.count, 2);
        assert_eq!(s.last_update, Some(now()));
    }

    #[test]
    fn missing_page_file_is_an_error_notice() {
        let mut store = MemoryStore::default();
        let n = capture_page(&mut store, Path::new("/definitely/not/here.html"));
        assert_eq!(n.level, Level::Error);
    }

    #[test]
    fn export_empty_and_full() {
        let tmp = tempfile::tempdir().unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut store = MemoryStore::default();

        assert_eq!(export(&store, tmp.path(), day), notice!(Warning, "No data to export"));
        assert!(!tmp.path().join("hattrick_scouts_2024-03-01.csv").exists());

        capture(&mut store, &page(&["A", "B", "C"]), now());
        assert_eq!(export(&store, tmp.path(), day), notice!(Success, "Exported 3 records"));
        assert!(tmp.path().join("hattrick_scouts_2024-03-01.csv").is_file());
    }

    #[test]
    fn sync_disabled_and_nothing_to_sync() {
        let store = MemoryStore::default();
        let off = SyncConfig::default();
        assert_eq!(sync(&off, &store), notice!(Warning, "Cloud sync is disabled"));

        let on = SyncConfig { enabled: true, blob_url: Some(s!("https://blob.example/x.csv")) };
        assert_eq!(sync(&on, &store), notice!(Warning, "No data to sync"));
    }

    #[test]
    fn clear_then_stats_is_empty() {
        let mut store = MemoryStore::default();
        capture(&mut store, &page(&["A"]), now());
        assert_eq!(clear(&mut store), notice!(Success, "Data cleared"));
        assert_eq!(stats(&store).unwrap(), Stats::default());
        assert_eq!(Stats::default().last_update_display(), "-");
    }

    #[test]
    fn failed_save_keeps_collection() {
        let mut store = Flaky::default();
        capture(&mut store, &page(&["A"]), now());
        store.fail_write = true;

        let n = capture(&mut store, &page(&["B"]), now());
        assert_eq!(n, notice!(Error, "Error saving data"));
        assert_eq!(names(&store.inner), vec![s!("A")]);
    }

    #[test]
    fn unreadable_store_or_target_is_an_export_error() {
        let tmp = tempfile::tempdir().unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut store = Flaky::default();
        capture(&mut store, &page(&["A"]), now());

        store.fail_get = true;
        assert_eq!(export(&store, tmp.path(), day), notice!(Error, "Export error"));
        assert!(!tmp.path().join("hattrick_scouts_2024-03-01.csv").exists());

        // Target "directory" is a plain file.
        store.fail_get = false;
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        assert_eq!(export(&store, &blocker, day), notice!(Error, "Export error"));
        assert_eq!(names(&store.inner), vec![s!("A")]);
    }

    #[test]
    fn failed_clear_keeps_collection() {
        let mut store = Flaky::default();
        capture(&mut store, &page(&["A", "B"]), now());
        store.fail_write = true;

        assert_eq!(clear(&mut store), notice!(Error, "Error deleting data"));
        assert_eq!(names(&store.inner), vec![s!("A"), s!("B")]);
    }

    #[test]
    fn sync_error_hides_the_signature() {
        let mut store = MemoryStore::default();
        capture(&mut store, &page(&["A"]), now());
        // Nothing listens on the discard port.
        let cfg = SyncConfig {
            enabled: true,
            blob_url: Some(s!("https://127.0.0.1:9/c/s.csv?sig=TOPSECRET")),
        };

        let n = sync(&cfg, &store);
        assert_eq!(n.level, Level::Error);
        assert!(n.message.starts_with("Sync failed"), "{}", n.message);
        assert!(!n.message.contains("TOPSECRET"), "{}", n.message);
        assert!(!n.message.contains("sig="), "{}", n.message);
    }
}
