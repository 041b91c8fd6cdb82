//! Per-day tap aggregation.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use log::{debug, warn};

use crate::store::{KeyValueStore, StoreKey, read_json, write_json};

/// Day key format, local calendar date.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

pub type DayTotals = BTreeMap<String, u64>;

pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// How long daily entries are kept.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RetentionPolicy {
    #[default]
    Unbounded,
    /// Keep today plus the previous `n - 1` days.
    KeepDays(u32),
}

/// Tap totals keyed by day, then by package id or step name.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DailyStats {
    per_package: BTreeMap<String, DayTotals>,
    per_step: BTreeMap<String, DayTotals>,
}

impl DailyStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        Self {
            per_package: read_json(store, StoreKey::DailyTotals).unwrap_or_default(),
            per_step: read_json(store, StoreKey::DailyDhikrStats).unwrap_or_default(),
        }
    }

    pub fn save_package_totals<S: KeyValueStore>(&self, store: &mut S) -> bool {
        write_json(store, StoreKey::DailyTotals, &self.per_package)
    }

    pub fn save_step_totals<S: KeyValueStore>(&self, store: &mut S) -> bool {
        write_json(store, StoreKey::DailyDhikrStats, &self.per_step)
    }

    /// Add `delta` to both tallies for `day`, clamping each entry at zero.
    /// Day entries are created lazily.
    pub fn record(&mut self, day: &str, package_id: &str, step_name: &str, delta: i64) {
        bump(&mut self.per_package, day, package_id, delta);
        bump(&mut self.per_step, day, step_name, delta);
    }

    pub fn package_total(&self, day: &str, package_id: &str) -> u64 {
        self.per_package
            .get(day)
            .and_then(|totals| totals.get(package_id))
            .copied()
            .unwrap_or(0)
    }

    /// Step name to count for `day`; empty when nothing was recorded.
    pub fn step_totals(&self, day: &str) -> DayTotals {
        self.per_step.get(day).cloned().unwrap_or_default()
    }

    /// Sum across every package for `day`.
    pub fn day_total(&self, day: &str) -> u64 {
        self.per_package
            .get(day)
            .map(|totals| totals.values().sum())
            .unwrap_or(0)
    }

    /// Recorded days, newest first, with their overall total.
    pub fn history(&self) -> Vec<(String, u64)> {
        self.per_package
            .iter()
            .rev()
            .map(|(day, totals)| (day.clone(), totals.values().sum()))
            .collect()
    }

    pub fn contains_day(&self, day: &str) -> bool {
        self.per_package.contains_key(day) || self.per_step.contains_key(day)
    }

    /// Drop days outside the retention window. Returns `true` if anything was removed.
    pub fn prune(&mut self, policy: RetentionPolicy, today: NaiveDate) -> bool {
        let RetentionPolicy::KeepDays(days) = policy else {
            return false;
        };
        let keep = u64::from(days.max(1) - 1);
        let Some(cutoff) = today.checked_sub_days(Days::new(keep)) else {
            return false;
        };

        let before = self.per_package.len() + self.per_step.len();
        self.per_package.retain(|day, _| keep_day(day, cutoff));
        self.per_step.retain(|day, _| keep_day(day, cutoff));
        let removed = before - (self.per_package.len() + self.per_step.len());
        if removed > 0 {
            debug!("pruned {removed} daily entries older than {cutoff}");
        }
        removed > 0
    }
}

fn keep_day(day: &str, cutoff: NaiveDate) -> bool {
    match NaiveDate::parse_from_str(day, DAY_KEY_FORMAT) {
        Ok(date) => date >= cutoff,
        Err(_) => {
            warn!("keeping unparseable day key {day:?}");
            true
        }
    }
}

fn bump(table: &mut BTreeMap<String, DayTotals>, day: &str, key: &str, delta: i64) {
    let totals = table.entry(day.to_owned()).or_default();
    let slot = totals.entry(key.to_owned()).or_insert(0);
    *slot = if delta >= 0 {
        slot.saturating_add(delta as u64)
    } else {
        slot.saturating_sub(delta.unsigned_abs())
    };
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::store::MemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn record_tracks_package_and_step_separately() {
        let mut stats = DailyStats::new();
        stats.record("2024-05-01", "salah_post", "SubhanAllah", 1);
        stats.record("2024-05-01", "salah_post", "Alhamdulillah", 1);
        stats.record("2024-05-01", "durood_100", "SubhanAllah", 1);

        assert_eq!(stats.package_total("2024-05-01", "salah_post"), 2);
        assert_eq!(stats.day_total("2024-05-01"), 3);
        assert_eq!(stats.step_totals("2024-05-01").get("SubhanAllah"), Some(&2));
        assert_eq!(stats.package_total("2024-05-02", "salah_post"), 0);
        assert!(stats.step_totals("2024-05-02").is_empty());
    }

    #[test]
    fn negative_deltas_clamp_at_zero() {
        let mut stats = DailyStats::new();
        stats.record("2024-05-01", "p", "s", 2);
        stats.record("2024-05-01", "p", "s", -5);
        assert_eq!(stats.package_total("2024-05-01", "p"), 0);
    }

    #[test]
    fn day_key_is_iso_date() {
        assert_eq!(day_key(date(2024, 3, 9)), "2024-03-09");
    }

    #[test]
    fn unbounded_policy_never_prunes() {
        let mut stats = DailyStats::new();
        stats.record("2001-01-01", "p", "s", 1);
        assert!(!stats.prune(RetentionPolicy::Unbounded, date(2024, 1, 1)));
        assert!(stats.contains_day("2001-01-01"));
    }

    #[test]
    fn keep_days_prunes_older_entries() {
        let mut stats = DailyStats::new();
        stats.record("2024-01-01", "p", "s", 1);
        stats.record("2024-01-08", "p", "s", 1);
        stats.record("2024-01-10", "p", "s", 1);

        assert!(stats.prune(RetentionPolicy::KeepDays(3), date(2024, 1, 10)));
        assert!(!stats.contains_day("2024-01-01"));
        assert!(stats.contains_day("2024-01-08"));
        assert!(stats.contains_day("2024-01-10"));
        assert_eq!(stats.history().first().map(|(day, _)| day.as_str()), Some("2024-01-10"));
    }

    #[test]
    fn persistence_round_trip() {
        let mut store = MemoryStore::new();
        let mut stats = DailyStats::new();
        stats.record("2024-05-01", "salah_post", "Allahu Akbar", 34);
        assert!(stats.save_package_totals(&mut store));
        assert!(stats.save_step_totals(&mut store));
        assert_eq!(DailyStats::load(&store), stats);
    }

    proptest! {
        #[test]
        fn totals_equal_the_sum_of_positive_increments(taps in proptest::collection::vec(0u8..4, 0..200)) {
            let mut stats = DailyStats::new();
            let steps = ["a", "b", "c", "d"];
            for &idx in &taps {
                stats.record("2024-05-01", "pkg", steps[idx as usize], 1);
            }
            prop_assert_eq!(stats.package_total("2024-05-01", "pkg"), taps.len() as u64);
            let step_sum: u64 = stats.step_totals("2024-05-01").values().sum();
            prop_assert_eq!(step_sum, taps.len() as u64);
        }

        #[test]
        fn totals_never_underflow(deltas in proptest::collection::vec(-5i64..5, 0..100)) {
            let mut stats = DailyStats::new();
            let mut expected: u64 = 0;
            for delta in deltas {
                stats.record("d", "p", "s", delta);
                expected = if delta >= 0 {
                    expected + delta as u64
                } else {
                    expected.saturating_sub(delta.unsigned_abs())
                };
                prop_assert_eq!(stats.package_total("d", "p"), expected);
            }
        }
    }
}
