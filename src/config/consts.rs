// src/config/consts.rs

// Local store
pub const STORE_DIR: &str = ".store";
pub const STORAGE_KEY: &str = "scoutData";
pub const LOG_FILE: &str = "debug.log";
pub const CONFIG_FILE: &str = "ht_scout.toml";

// Capture
pub const DUPLICATE_WINDOW_HOURS: i64 = 24;
pub const UNKNOWN: &str = "unknown";

// Export
pub const DEFAULT_EXPORT_DIR: &str = "out";
pub const EXPORT_FILE_PREFIX: &str = "hattrick_scouts_";

// Remote blob
pub const BLOB_TYPE_HEADER: &str = "x-ms-blob-type";
pub const BLOB_TYPE: &str = "BlockBlob";
pub const CSV_CONTENT_TYPE: &str = "text/csv";

// Environment overrides
pub const ENV_SYNC_ENABLED: &str = "HT_SCOUT_SYNC_ENABLED";
pub const ENV_BLOB_URL: &str = "HT_SCOUT_BLOB_URL";
