//! Persisted user settings and counter progress.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    language::Language,
    model::{CycleStep, Package, cycles_are_valid},
    store::{KeyValueStore, StoreKey, read_json, read_parsed, read_string, write_json, write_string},
};

/// Vibration durations in milliseconds; zero disables the cue.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HapticProfile {
    pub tap: u32,
    pub undo: u32,
    pub complete: u32,
    pub voice: u32,
}

impl Default for HapticProfile {
    fn default() -> Self {
        Self {
            tap: 25,
            undo: 15,
            complete: 150,
            voice: 40,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HapticKind {
    Tap,
    Undo,
    Complete,
    Voice,
}

impl HapticKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "tap" => Some(Self::Tap),
            "undo" => Some(Self::Undo),
            "complete" => Some(Self::Complete),
            "voice" => Some(Self::Voice),
            _ => None,
        }
    }
}

impl HapticProfile {
    pub const fn duration(&self, kind: HapticKind) -> u32 {
        match kind {
            HapticKind::Tap => self.tap,
            HapticKind::Undo => self.undo,
            HapticKind::Complete => self.complete,
            HapticKind::Voice => self.voice,
        }
    }

    pub fn set(&mut self, kind: HapticKind, duration_ms: u32) {
        match kind {
            HapticKind::Tap => self.tap = duration_ms,
            HapticKind::Undo => self.undo = duration_ms,
            HapticKind::Complete => self.complete = duration_ms,
            HapticKind::Voice => self.voice = duration_ms,
        }
    }

    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        read_json(store, StoreKey::HapticSettings).unwrap_or_default()
    }

    pub fn save<S: KeyValueStore>(&self, store: &mut S) -> bool {
        write_json(store, StoreKey::HapticSettings, self)
    }
}

/// Process-wide presentation settings.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AppSettings {
    pub language: Language,
    pub dark_mode: bool,
}

impl AppSettings {
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        let language = match read_string(store, StoreKey::Language) {
            Some(raw) => Language::parse(&raw).unwrap_or_else(|| {
                warn!("ignoring unknown language {raw:?}");
                Language::default()
            }),
            None => Language::default(),
        };
        let dark_mode = read_parsed(store, StoreKey::DarkMode).unwrap_or(false);

        Self {
            language,
            dark_mode,
        }
    }

    pub fn save<S: KeyValueStore>(&self, store: &mut S) -> bool {
        let language = self.save_language(store);
        let dark_mode = self.save_dark_mode(store);
        language && dark_mode
    }

    pub fn save_language<S: KeyValueStore>(&self, store: &mut S) -> bool {
        write_string(store, StoreKey::Language, self.language.as_str())
    }

    pub fn save_dark_mode<S: KeyValueStore>(&self, store: &mut S) -> bool {
        write_string(
            store,
            StoreKey::DarkMode,
            if self.dark_mode { "true" } else { "false" },
        )
    }
}

/// Raw counter progress as found in the store, before it is resolved
/// against the package catalog.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PersistedProgress {
    pub count: u32,
    pub current_cycle: usize,
    pub active_package_id: Option<String>,
    pub custom_cycles: Option<Vec<CycleStep>>,
}

impl PersistedProgress {
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        let custom_cycles = read_json::<_, Vec<CycleStep>>(store, StoreKey::CustomCycles)
            .filter(|cycles| {
                let valid = cycles_are_valid(cycles);
                if !valid {
                    warn!("ignoring stored cycles with a non-positive target");
                }
                valid
            });

        Self {
            count: read_parsed(store, StoreKey::Count).unwrap_or(0),
            current_cycle: read_parsed(store, StoreKey::CurrentCycle).unwrap_or(0),
            active_package_id: read_string(store, StoreKey::ActivePackageId)
                .filter(|id| !id.trim().is_empty()),
            custom_cycles,
        }
    }
}

/// User-created packages; entries that fail validation are skipped.
pub fn load_user_packages<S: KeyValueStore>(store: &S) -> Vec<Package> {
    let mut packages: Vec<Package> = read_json(store, StoreKey::UserPackages).unwrap_or_default();
    packages.retain(|package| {
        let valid = cycles_are_valid(&package.cycles);
        if !valid {
            warn!("dropping stored package {} with invalid cycles", package.id);
        }
        valid
    });
    packages
}

pub fn save_user_packages<S: KeyValueStore>(store: &mut S, packages: &[Package]) -> bool {
    write_json(store, StoreKey::UserPackages, packages)
}
