use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::SidebarError;

/// Key under which the sidebar open preference is stored.
pub const DEFAULT_PREFERENCE_KEY: &str = "sidebar_state";
/// Scope path of the preference entry.
pub const PREFERENCE_PATH: &str = "/";
/// Lifetime of a written preference (7 days).
pub const DEFAULT_PREFERENCE_MAX_AGE: Duration =
    Duration::from_secs(60 * 60 * 24 * 7);

/// A single string-valued preference write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceEntry {
    pub key: String,
    pub value: String,
    pub path: String,
    pub max_age_secs: u64,
}

impl PreferenceEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            path: String::from(PREFERENCE_PATH),
            max_age_secs: DEFAULT_PREFERENCE_MAX_AGE.as_secs(),
        }
    }

    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age_secs = max_age.as_secs();
        self
    }
}

/// Key-value store holding scoped, expiring string preferences.
pub trait PreferenceStore {
    /// Store `entry`, replacing any entry with the same key and path.
    fn write(&mut self, entry: PreferenceEntry) -> Result<(), SidebarError>;

    /// Return the live value stored under `key` and `path`.
    fn read(
        &self,
        key: &str,
        path: &str,
    ) -> Result<Option<String>, SidebarError>;
}

#[derive(Debug, Clone)]
struct StoredEntry {
    entry: PreferenceEntry,
    written_at: SystemTime,
}

impl StoredEntry {
    fn is_live(&self, now: SystemTime) -> bool {
        let max_age = Duration::from_secs(self.entry.max_age_secs);
        match now.duration_since(self.written_at) {
            Ok(elapsed) => elapsed < max_age,
            Err(_) => true,
        }
    }
}

/// In-memory store holding one live entry per key and path.
///
/// Clones share the same storage, so a caller can keep a handle after
/// passing the store to a provider. Only the write count and the most
/// recent write are kept alongside the entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    jar: Rc<RefCell<MemoryJar>>,
}

#[derive(Debug, Default)]
struct MemoryJar {
    entries: Vec<StoredEntry>,
    write_count: usize,
    last_write: Option<PreferenceEntry>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries currently held, one per key and path.
    pub fn entries(&self) -> Vec<PreferenceEntry> {
        self.jar
            .borrow()
            .entries
            .iter()
            .map(|stored| stored.entry.clone())
            .collect()
    }

    /// Number of writes received since creation.
    pub fn write_count(&self) -> usize {
        self.jar.borrow().write_count
    }

    /// Most recent write, if any.
    pub fn last_write(&self) -> Option<PreferenceEntry> {
        self.jar.borrow().last_write.clone()
    }

    /// Record a write with an explicit timestamp.
    pub fn write_at(&mut self, entry: PreferenceEntry, written_at: SystemTime) {
        let mut jar = self.jar.borrow_mut();
        jar.entries.retain(|stored| {
            !(stored.entry.key == entry.key && stored.entry.path == entry.path)
        });
        jar.write_count += 1;
        jar.last_write = Some(entry.clone());
        jar.entries.push(StoredEntry { entry, written_at });
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn write(&mut self, entry: PreferenceEntry) -> Result<(), SidebarError> {
        self.write_at(entry, SystemTime::now());
        Ok(())
    }

    fn read(
        &self,
        key: &str,
        path: &str,
    ) -> Result<Option<String>, SidebarError> {
        let now = SystemTime::now();
        let jar = self.jar.borrow();

        Ok(jar
            .entries
            .iter()
            .find(|stored| {
                stored.entry.key == key && stored.entry.path == path
            })
            .filter(|stored| stored.is_live(now))
            .map(|stored| stored.entry.value.clone()))
    }
}

/// On-disk JSON jar of preference entries.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceJar {
    entries: Vec<JarEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JarEntry {
    key: String,
    value: String,
    path: String,
    expires_at: u64,
}

impl JarEntry {
    fn is_live(&self, now: u64) -> bool {
        self.expires_at > now
    }
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store located in the per-user config directory.
    pub fn in_config_dir(app_name: &str) -> Self {
        Self::new(preferences_path(app_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_jar(&self) -> Result<PreferenceJar, SidebarError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(PreferenceJar::default());
            },
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str::<PreferenceJar>(&data) {
            Ok(jar) => Ok(jar),
            Err(err) => {
                log::warn!(
                    "discarding unreadable preferences at {}: {err}",
                    self.path.display()
                );
                Ok(PreferenceJar::default())
            },
        }
    }

    fn save_jar(&self, jar: &PreferenceJar) -> Result<(), SidebarError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let payload = serde_json::to_string_pretty(jar)?;
        write_atomic(&self.path, payload.as_bytes())?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn write(&mut self, entry: PreferenceEntry) -> Result<(), SidebarError> {
        let now = unix_now();
        let mut jar = self.load_jar()?;
        jar.entries.retain(|stored| {
            stored.is_live(now)
                && !(stored.key == entry.key && stored.path == entry.path)
        });

        if entry.max_age_secs > 0 {
            jar.entries.push(JarEntry {
                expires_at: now.saturating_add(entry.max_age_secs),
                key: entry.key,
                value: entry.value,
                path: entry.path,
            });
        }

        self.save_jar(&jar)
    }

    fn read(
        &self,
        key: &str,
        path: &str,
    ) -> Result<Option<String>, SidebarError> {
        let now = unix_now();
        let jar = self.load_jar()?;

        Ok(jar
            .entries
            .into_iter()
            .find(|stored| stored.key == key && stored.path == path)
            .filter(|stored| stored.is_live(now))
            .map(|stored| stored.value))
    }
}

/// Writes and reads the sidebar open preference.
///
/// Store failures are logged and never surface to the caller.
pub struct PersistenceAdapter {
    store: Box<dyn PreferenceStore>,
    key: String,
    max_age: Duration,
}

impl PersistenceAdapter {
    pub fn new(
        store: impl PreferenceStore + 'static,
        key: impl Into<String>,
        max_age: Duration,
    ) -> Self {
        Self {
            store: Box::new(store),
            key: key.into(),
            max_age,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persist `open` as `"true"` or `"false"`.
    pub fn write(&mut self, open: bool) {
        let entry = PreferenceEntry::new(self.key.clone(), open.to_string())
            .with_max_age(self.max_age);
        if let Err(err) = self.store.write(entry) {
            log::warn!("failed to persist sidebar preference: {err}");
        }
    }

    /// Read the persisted preference, if a valid live one exists.
    pub fn read(&self) -> Option<bool> {
        match self.store.read(&self.key, PREFERENCE_PATH) {
            Ok(Some(value)) => match value.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                other => {
                    log::warn!("ignoring invalid sidebar preference {other:?}");
                    None
                },
            },
            Ok(None) => None,
            Err(err) => {
                log::warn!("failed to read sidebar preference: {err}");
                None
            },
        }
    }
}

impl std::fmt::Debug for PersistenceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceAdapter")
            .field("key", &self.key)
            .field("max_age", &self.max_age)
            .finish_non_exhaustive()
    }
}

fn preferences_path(app_name: &str) -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join(app_name)
            .join("preferences.json");
    }

    std::env::temp_dir().join(app_name).join("preferences.json")
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::{
        DEFAULT_PREFERENCE_KEY, DEFAULT_PREFERENCE_MAX_AGE, FilePreferenceStore,
        MemoryPreferenceStore, PREFERENCE_PATH, PersistenceAdapter,
        PreferenceEntry, PreferenceStore,
    };

    #[test]
    fn given_adapter_when_writing_then_entry_uses_fixed_scope_and_age() {
        let store = MemoryPreferenceStore::new();
        let mut adapter = PersistenceAdapter::new(
            store.clone(),
            DEFAULT_PREFERENCE_KEY,
            DEFAULT_PREFERENCE_MAX_AGE,
        );

        adapter.write(false);

        assert_eq!(store.write_count(), 1);
        let written = store.last_write().expect("one write is recorded");
        assert_eq!(written.key, "sidebar_state");
        assert_eq!(written.value, "false");
        assert_eq!(written.path, PREFERENCE_PATH);
        assert_eq!(written.max_age_secs, 604_800);
    }

    #[test]
    fn given_many_writes_to_one_key_when_stored_then_single_entry_is_kept() {
        let mut store = MemoryPreferenceStore::new();

        for n in 0..10_000 {
            let value = if n % 2 == 0 { "false" } else { "true" };
            store
                .write(PreferenceEntry::new(DEFAULT_PREFERENCE_KEY, value))
                .expect("write succeeds");
        }
        store
            .write(PreferenceEntry::new("other", "true"))
            .expect("write succeeds");

        assert_eq!(store.write_count(), 10_001);
        assert_eq!(store.entries().len(), 2);
        let value = store
            .read(DEFAULT_PREFERENCE_KEY, PREFERENCE_PATH)
            .expect("read succeeds");
        assert_eq!(value.as_deref(), Some("true"));
    }

    #[test]
    fn given_same_key_on_other_path_when_written_then_both_entries_are_kept() {
        let mut store = MemoryPreferenceStore::new();
        let mut scoped = PreferenceEntry::new(DEFAULT_PREFERENCE_KEY, "false");
        scoped.path = String::from("/docs");

        store
            .write(PreferenceEntry::new(DEFAULT_PREFERENCE_KEY, "true"))
            .expect("write succeeds");
        store.write(scoped).expect("write succeeds");

        assert_eq!(store.entries().len(), 2);
        let root = store
            .read(DEFAULT_PREFERENCE_KEY, PREFERENCE_PATH)
            .expect("read succeeds");
        assert_eq!(root.as_deref(), Some("true"));
    }

    #[test]
    fn given_memory_store_when_entry_expired_then_read_returns_none() {
        let mut store = MemoryPreferenceStore::new();
        let long_ago = SystemTime::now() - Duration::from_secs(8 * 24 * 3600);
        store.write_at(PreferenceEntry::new("k", "true"), long_ago);

        let value = store.read("k", PREFERENCE_PATH).expect("read succeeds");

        assert_eq!(value, None);
    }

    #[test]
    fn given_invalid_stored_value_when_adapter_reads_then_none_is_returned() {
        let mut store = MemoryPreferenceStore::new();
        store
            .write(PreferenceEntry::new(DEFAULT_PREFERENCE_KEY, "maybe"))
            .expect("write succeeds");
        let adapter = PersistenceAdapter::new(
            store,
            DEFAULT_PREFERENCE_KEY,
            DEFAULT_PREFERENCE_MAX_AGE,
        );

        assert_eq!(adapter.read(), None);
    }

    #[test]
    fn given_file_store_when_written_and_read_then_value_round_trips() {
        let root = test_temp_dir("round_trip");
        let mut store = FilePreferenceStore::new(root.join("preferences.json"));

        store
            .write(PreferenceEntry::new("sidebar_state", "true"))
            .expect("first write succeeds");
        store
            .write(PreferenceEntry::new("sidebar_state", "false"))
            .expect("second write succeeds");

        let value = store
            .read("sidebar_state", PREFERENCE_PATH)
            .expect("read succeeds");
        assert_eq!(value.as_deref(), Some("false"));
        assert_eq!(store.read("sidebar_state", "/docs").ok().flatten(), None);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_zero_max_age_when_written_then_entry_is_removed() {
        let root = test_temp_dir("zero_age");
        let mut store = FilePreferenceStore::new(root.join("preferences.json"));

        store
            .write(PreferenceEntry::new("k", "true"))
            .expect("write succeeds");
        store
            .write(
                PreferenceEntry::new("k", "true").with_max_age(Duration::ZERO),
            )
            .expect("delete succeeds");

        assert_eq!(store.read("k", PREFERENCE_PATH).ok().flatten(), None);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_read_then_store_reads_empty() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("preferences.json");
        fs::write(&path, "{ not json").expect("payload should be written");
        let store = FilePreferenceStore::new(path);

        let value = store
            .read("sidebar_state", PREFERENCE_PATH)
            .expect("invalid json is not an io error");
        assert_eq!(value, None);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "tessel-preferences-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
