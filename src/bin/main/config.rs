use std::path::PathBuf;

use log::warn;
use tasbih_core::{capability::Permission, stats::RetentionPolicy};

const DEFAULT_TICK_MS: u64 = 50;
const MIN_TICK_MS: u64 = 10;
const DEFAULT_STORE_FILE: &str = "tasbih-store.json";
const STORE_DIR: &str = ".tasbih";

/// Host settings read once at startup from `TASBIH_*` variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct HostConfig {
    pub(super) store_path: PathBuf,
    pub(super) tick_ms: u64,
    pub(super) notifications: Permission,
    pub(super) retention: RetentionPolicy,
    pub(super) bell: bool,
}

impl HostConfig {
    pub(super) fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Invalid values are logged and replaced by their defaults.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let store_path = match lookup("TASBIH_STORE_PATH").filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => PathBuf::from(raw.trim()),
            None => default_store_path(lookup("HOME")),
        };

        let tick_ms = parse_or(&lookup, "TASBIH_TICK_MS", DEFAULT_TICK_MS, |raw| {
            raw.parse::<u64>().ok().filter(|ms| *ms >= MIN_TICK_MS)
        });
        let notifications = parse_or(
            &lookup,
            "TASBIH_NOTIFICATIONS",
            Permission::Undetermined,
            Permission::parse,
        );
        let retention = parse_or(
            &lookup,
            "TASBIH_RETENTION_DAYS",
            RetentionPolicy::Unbounded,
            |raw| match raw.parse::<u32>().ok()? {
                0 => None,
                days => Some(RetentionPolicy::KeepDays(days)),
            },
        );
        let bell = parse_or(&lookup, "TASBIH_BELL", false, |raw| match raw {
            "1" | "true" | "on" => Some(true),
            "0" | "false" | "off" => Some(false),
            _ => None,
        });

        Self {
            store_path,
            tick_ms,
            notifications,
            retention,
            bell,
        }
    }
}

fn default_store_path(home: Option<String>) -> PathBuf {
    match home.filter(|home| !home.is_empty()) {
        Some(home) => PathBuf::from(home).join(STORE_DIR).join(DEFAULT_STORE_FILE),
        None => PathBuf::from(DEFAULT_STORE_FILE),
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match parse(raw.trim()) {
        Some(value) => value,
        None => {
            warn!("ignoring invalid {key}={raw:?}");
            default
        }
    }
}
