//! Persisted key space and the key-value backend abstraction.

use core::{convert::Infallible, fmt::Debug, str::FromStr};
use std::collections::BTreeMap;

use log::warn;
use serde::{Serialize, de::DeserializeOwned};

/// Every key the app writes. Values are plain strings, JSON for structured data.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum StoreKey {
    Count,
    CurrentCycle,
    ActivePackageId,
    CustomCycles,
    HapticSettings,
    DailyTotals,
    DailyDhikrStats,
    UserPackages,
    DarkMode,
    Language,
    LastNotifiedDate,
}

impl StoreKey {
    pub const ALL: [Self; 11] = [
        Self::Count,
        Self::CurrentCycle,
        Self::ActivePackageId,
        Self::CustomCycles,
        Self::HapticSettings,
        Self::DailyTotals,
        Self::DailyDhikrStats,
        Self::UserPackages,
        Self::DarkMode,
        Self::Language,
        Self::LastNotifiedDate,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::CurrentCycle => "current_cycle",
            Self::ActivePackageId => "active_package_id",
            Self::CustomCycles => "custom_cycles",
            Self::HapticSettings => "haptic_settings",
            Self::DailyTotals => "daily_totals",
            Self::DailyDhikrStats => "daily_dhikr_stats",
            Self::UserPackages => "user_packages",
            Self::DarkMode => "dark_mode",
            Self::Language => "language",
            Self::LastNotifiedDate => "last_notified_date",
        }
    }
}

/// Abstract synchronous string store.
pub trait KeyValueStore {
    type Error: Debug;

    fn get(&self, key: StoreKey) -> Result<Option<String>, Self::Error>;
    fn set(&mut self, key: StoreKey, value: &str) -> Result<(), Self::Error>;
    fn remove(&mut self, key: StoreKey) -> Result<(), Self::Error>;

    fn clear(&mut self) -> Result<(), Self::Error> {
        for key in StoreKey::ALL {
            self.remove(key)?;
        }
        Ok(())
    }
}

/// In-memory store used by tests and bring-up.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MemoryStore {
    values: BTreeMap<StoreKey, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: StoreKey, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    type Error = Infallible;

    fn get(&self, key: StoreKey) -> Result<Option<String>, Self::Error> {
        Ok(self.values.get(&key).cloned())
    }

    fn set(&mut self, key: StoreKey, value: &str) -> Result<(), Self::Error> {
        self.values.insert(key, value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: StoreKey) -> Result<(), Self::Error> {
        self.values.remove(&key);
        Ok(())
    }
}

fn read_raw<S: KeyValueStore>(store: &S, key: StoreKey) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            warn!("store read of {} failed: {:?}", key.as_str(), err);
            None
        }
    }
}

/// Read and decode a JSON value. Missing and malformed values both yield `None`.
pub fn read_json<S, T>(store: &S, key: StoreKey) -> Option<T>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    let raw = read_raw(store, key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("ignoring malformed {}: {}", key.as_str(), err);
            None
        }
    }
}

/// Read a scalar stored as its plain string form.
pub fn read_parsed<S, T>(store: &S, key: StoreKey) -> Option<T>
where
    S: KeyValueStore,
    T: FromStr,
{
    let raw = read_raw(store, key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring malformed {}: {:?}", key.as_str(), raw);
            None
        }
    }
}

pub fn read_string<S: KeyValueStore>(store: &S, key: StoreKey) -> Option<String> {
    read_raw(store, key)
}

/// Encode `value` as JSON and write it. Failures are logged, never raised.
pub fn write_json<S, T>(store: &mut S, key: StoreKey, value: &T) -> bool
where
    S: KeyValueStore,
    T: Serialize + ?Sized,
{
    match serde_json::to_string(value) {
        Ok(raw) => write_string(store, key, &raw),
        Err(err) => {
            warn!("could not encode {}: {}", key.as_str(), err);
            false
        }
    }
}

pub fn write_string<S: KeyValueStore>(store: &mut S, key: StoreKey, value: &str) -> bool {
    match store.set(key, value) {
        Ok(()) => true,
        Err(err) => {
            warn!("store write of {} failed: {:?}", key.as_str(), err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_are_unique() {
        let mut names: Vec<&str> = StoreKey::ALL.iter().map(|key| key.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), StoreKey::ALL.len());
    }

    #[test]
    fn malformed_values_read_as_missing() {
        let store = MemoryStore::new()
            .with_value(StoreKey::Count, "seven")
            .with_value(StoreKey::UserPackages, "{not json");

        assert_eq!(read_parsed::<_, u32>(&store, StoreKey::Count), None);
        assert_eq!(read_json::<_, Vec<u32>>(&store, StoreKey::UserPackages), None);
        assert_eq!(read_parsed::<_, u32>(&store, StoreKey::CurrentCycle), None);
    }

    #[test]
    fn json_values_survive_a_write() {
        let mut store = MemoryStore::new();
        assert!(write_json(&mut store, StoreKey::CustomCycles, &[1u32, 2, 3]));
        assert_eq!(
            read_json::<_, Vec<u32>>(&store, StoreKey::CustomCycles),
            Some(vec![1, 2, 3])
        );
    }

    #[test]
    fn clear_drops_every_key() {
        let mut store = MemoryStore::new()
            .with_value(StoreKey::Count, "3")
            .with_value(StoreKey::Language, "en");
        store.clear().unwrap();
        assert!(store.is_empty());
    }
}
