// src/sync.rs
//! # Cloud sync
//!
//! Pushes the local collection to a single CSV blob addressed by a
//! pre-signed URL. The blob is always rewritten whole:
//!
//! 1. GET the current snapshot (any failure there reads as "empty").
//! 2. Parse it, append the local records, renumber ids 1..=N.
//! 3. PUT the combined snapshot back.
//!
//! Nothing is deduplicated across syncs. A record still held locally is
//! uploaded again on every sync.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::config::consts::{BLOB_TYPE, BLOB_TYPE_HEADER, CSV_CONTENT_TYPE};
use crate::config::options::SyncConfig;
use crate::csv::{self, CsvRow};
use crate::error::{Result, ScoutError};
use crate::model::ScoutRecord;
use crate::store::{load_collection, KvStore};

/// Where the shared snapshot lives.
pub trait BlobRemote {
    /// Body of the current snapshot. Non-success statuses are errors.
    fn fetch(&self) -> Result<String>;
    /// Replace the snapshot with `body`.
    fn put(&self, body: String) -> Result<()>;
}

/// A blob reached over HTTPS with a pre-signed (SAS) URL.
pub struct HttpBlob {
    url: String,
    client: Client,
}

impl HttpBlob {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("ht_scout/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { url: url.into(), client })
    }
}

fn check_status(resp: reqwest::blocking::Response) -> Result<reqwest::blocking::Response> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(ScoutError::Status {
            status: status.as_u16(),
            reason: s!(status.canonical_reason().unwrap_or("")),
        })
    }
}

/// reqwest errors carry the request URL, and with it the SAS signature.
fn transport(e: reqwest::Error) -> ScoutError {
    ScoutError::Http(e.without_url())
}

impl BlobRemote for HttpBlob {
    fn fetch(&self) -> Result<String> {
        let resp = self.client.get(&self.url).send().map_err(transport)?;
        check_status(resp)?.text().map_err(transport)
    }

    fn put(&self, body: String) -> Result<()> {
        let resp = self
            .client
            .put(&self.url)
            .header(BLOB_TYPE_HEADER, BLOB_TYPE)
            .header(CONTENT_TYPE, CSV_CONTENT_TYPE)
            .body(body)
            .send()
            .map_err(transport)?;
        check_status(resp)?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    Disabled,
    NothingToSync,
    /// Snapshot now holds `remote_rows` old rows followed by `local_rows` new ones.
    Uploaded { remote_rows: usize, local_rows: usize },
}

/// Remote rows as found, then the local records; ids renumbered over the lot.
pub fn merge_snapshot(remote_text: Option<&str>, local: &[ScoutRecord]) -> Vec<CsvRow> {
    let mut rows = match remote_text {
        Some(t) if !t.trim().is_empty() => csv::parse_snapshot(t),
        _ => Vec::new(),
    };
    rows.extend(local.iter().map(CsvRow::from_record));
    csv::renumber(&mut rows);
    rows
}

/// One full sync round against `remote`.
///
/// A disabled config or an empty collection returns before any network
/// call. A failed GET is logged and treated as an empty remote; a failed
/// PUT is returned to the caller. The local store is only read.
pub fn sync(cfg: &SyncConfig, store: &dyn KvStore, remote: &dyn BlobRemote) -> Result<SyncOutcome> {
    if !cfg.enabled {
        return Ok(SyncOutcome::Disabled);
    }

    let local = load_collection(store)?;
    if local.is_empty() {
        return Ok(SyncOutcome::NothingToSync);
    }

    let remote_text = match remote.fetch() {
        Ok(t) => Some(t),
        Err(e) => {
            logw!("Sync: could not read remote snapshot ({e}), starting fresh");
            None
        }
    };

    let rows = merge_snapshot(remote_text.as_deref(), &local);
    let remote_rows = rows.len() - local.len();
    logf!("Sync: {} remote + {} local rows → {}", remote_rows, local.len(), cfg.redacted_url());

    remote.put(csv::rows_to_string(&rows))?;
    Ok(SyncOutcome::Uploaded { remote_rows, local_rows: local.len() })
}

/// `sync` against the configured blob URL.
pub fn sync_with_config(cfg: &SyncConfig, store: &dyn KvStore) -> Result<SyncOutcome> {
    if !cfg.enabled {
        return Ok(SyncOutcome::Disabled);
    }
    let url = cfg
        .endpoint()
        .ok_or_else(|| ScoutError::InvalidConfig(s!("sync is enabled but no blob_url is set")))?;
    let remote = HttpBlob::new(url)?;
    sync(cfg, store, &remote)
}
