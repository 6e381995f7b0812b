//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose stable, sync journal operations to the UI layer.
//! - Own the UI-side concerns the core refuses: id generation and display
//!   ordering.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Display order is date descending, ties broken by id descending.

use shotlog_core::db::open_db;
use shotlog_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ShotEntry,
    ShotJournal, SqliteKvStore,
};
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

const SHOT_DB_FILE_NAME: &str = "shotlog.sqlite3";
static SHOT_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generates a fresh shot id for the UI to attach to a new entry.
///
/// Random UUID when the platform provides entropy; epoch-millisecond
/// fallback otherwise. Uniqueness remains the caller's responsibility
/// either way; the core never enforces it.
///
/// # FFI contract
/// - Sync call, non-blocking, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn new_shot_id() -> String {
    new_shot_id_inner()
}

/// One shot row shaped for list display.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotView {
    pub id: String,
    pub date: String,
    pub time: Option<String>,
    pub dose_amount: Option<f64>,
    pub site: Option<String>,
    pub pain_score: Option<f64>,
    pub mood: Option<String>,
    pub notes: Option<String>,
}

/// Generic action response envelope for journal mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotActionResponse {
    /// Whether the operation reached the journal.
    pub ok: bool,
    /// Id of the affected entry, when one exists.
    pub shot_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ShotActionResponse {
    fn success(message: impl Into<String>, shot_id: String) -> Self {
        Self {
            ok: true,
            shot_id: Some(shot_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            shot_id: None,
            message: message.into(),
        }
    }
}

/// Lists all logged shots in display order (newest first).
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; unreadable storage degrades to an empty list.
#[flutter_rust_bridge::frb(sync)]
pub fn shot_list() -> Vec<ShotView> {
    let mut entries = with_journal(|journal| journal.entries().to_vec()).unwrap_or_default();
    sort_shots_for_display(&mut entries);
    entries.into_iter().map(to_shot_view).collect()
}

/// Appends one shot entry to the journal.
///
/// The UI supplies field values as entered; empty optional fields arrive
/// as `None`. Range checks (pain score bounds etc.) are the UI's job.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; returns the stored entry id on success.
#[flutter_rust_bridge::frb(sync)]
pub fn shot_add(
    id: String,
    date: String,
    time: Option<String>,
    dose_amount: Option<f64>,
    site: Option<String>,
    pain_score: Option<f64>,
    mood: Option<String>,
    notes: Option<String>,
) -> ShotActionResponse {
    let mut entry = ShotEntry::new(id, date);
    entry.time = time;
    entry.dose_amount = dose_amount;
    entry.site = site;
    entry.pain_score = pain_score;
    entry.mood = mood;
    entry.notes = notes;
    let shot_id = entry.id.clone();

    match with_journal(move |journal| journal.append(entry)) {
        Ok(()) => ShotActionResponse::success("Shot logged.", shot_id),
        Err(err) => ShotActionResponse::failure(format!("shot_add failed: {err}")),
    }
}

/// Deletes every shot sharing the given id.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Deleting an unknown id succeeds (journal no-op semantics).
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn shot_delete(id: String) -> ShotActionResponse {
    match with_journal(|journal| journal.remove(&id)) {
        Ok(()) => ShotActionResponse::success("Shot deleted.", id),
        Err(err) => ShotActionResponse::failure(format!("shot_delete failed: {err}")),
    }
}

/// Orders shots for display: `date` descending, ties by `id` descending.
///
/// Presentation-only; the stored collection keeps append order.
pub fn sort_shots_for_display(shots: &mut [ShotEntry]) {
    shots.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
}

fn new_shot_id_inner() -> String {
    // Uuid::new_v4 panics only when OS entropy is unavailable; keep the
    // deterministic epoch fallback for that degenerate path.
    match std::panic::catch_unwind(uuid::Uuid::new_v4) {
        Ok(uuid) => uuid.to_string(),
        Err(_) => {
            let epoch_ms = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_millis())
                .unwrap_or(0);
            format!("shot-{epoch_ms}")
        }
    }
}

fn resolve_shot_db_path() -> PathBuf {
    SHOT_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("SHOTLOG_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(SHOT_DB_FILE_NAME)
        })
        .clone()
}

fn with_journal<T>(f: impl FnOnce(&mut ShotJournal<SqliteKvStore<'_>>) -> T) -> Result<T, String> {
    let db_path = resolve_shot_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("shot DB open failed: {err}"))?;
    let mut journal = ShotJournal::open(SqliteKvStore::new(&conn));
    Ok(f(&mut journal))
}

fn to_shot_view(entry: ShotEntry) -> ShotView {
    ShotView {
        id: entry.id,
        date: entry.date,
        time: entry.time,
        dose_amount: entry.dose_amount,
        site: entry.site,
        pain_score: entry.pain_score,
        mood: entry.mood,
        notes: entry.notes,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, new_shot_id, shot_add, shot_delete, shot_list,
        sort_shots_for_display,
    };
    use shotlog_core::ShotEntry;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn new_shot_ids_are_distinct() {
        let first = new_shot_id();
        let second = new_shot_id();
        assert!(!first.is_empty());
        assert_ne!(first, second);
    }

    #[test]
    fn display_order_is_date_desc_with_id_desc_ties() {
        let mut shots = vec![
            ShotEntry::new("a", "2024-01-15"),
            ShotEntry::new("b", "2024-01-22"),
            ShotEntry::new("c", "2024-01-22"),
        ];
        sort_shots_for_display(&mut shots);

        let ids: Vec<&str> = shots.iter().map(|shot| shot.id.as_str()).collect();
        assert_eq!(ids, ["c", "b", "a"]);
    }

    #[test]
    fn add_list_delete_round_trip() {
        // One shared DB file per test process; ids are unique per call so
        // tests do not observe each other's rows.
        let id = new_shot_id();
        let added = shot_add(
            id.clone(),
            "2024-04-01".to_string(),
            Some("08:30".to_string()),
            Some(50.0),
            Some("thigh".to_string()),
            Some(3.0),
            None,
            None,
        );
        assert!(added.ok, "{}", added.message);

        let listed = shot_list();
        assert!(listed.iter().any(|shot| shot.id == id));

        let deleted = shot_delete(id.clone());
        assert!(deleted.ok, "{}", deleted.message);

        let listed = shot_list();
        assert!(listed.iter().all(|shot| shot.id != id));
    }
}
