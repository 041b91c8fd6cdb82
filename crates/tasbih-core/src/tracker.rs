//! Counter progression state machine.
//!
//! The tracker owns the active package, the step cursor, the tap count and the
//! daily statistics. Every transition returns the [`Effect`]s the caller has to
//! run (store writes, haptic cues, the completion message); the tracker itself
//! never touches the store or a capability.

use log::{debug, info};

use crate::{
    capability::Moment,
    content::presets,
    language::Language,
    model::{CycleStep, FALLBACK_TARGET, Package, cycles_are_valid, is_user_package_id, parse_goal},
    settings::{HapticProfile, PersistedProgress},
    stats::{DailyStats, DayTotals, RetentionPolicy, day_key},
    store::{KeyValueStore, StoreKey, write_json, write_string},
};

/// Delay before moving to the next step once a non-final target is reached.
pub const AUTO_ADVANCE_DELAY_MS: u64 = 300;
/// Delay before a completed package rewinds to its first step.
pub const COMPLETION_RESET_DELAY_MS: u64 = 3_000;
const COMPLETE_PATTERN_GAP_MS: u32 = 100;
const ADVANCE_PATTERN_GAP_MS: u32 = 40;
const MAX_EFFECTS: usize = 8;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Counting,
    /// Target reached on a non-final step; moves on at `due_ms`.
    Advancing { due_ms: u64 },
    /// Final target reached; rewinds to the first step at `due_ms`.
    Completing { due_ms: u64 },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HapticCue {
    Tap,
    Undo,
    StepComplete,
    PackageComplete,
    Advance,
}

impl HapticCue {
    /// Vibration pattern for this cue. Empty when the base duration is zero.
    pub fn pattern(self, profile: &HapticProfile) -> heapless::Vec<u32, 3> {
        let mut pattern = heapless::Vec::new();
        let (base, gap, repeat) = match self {
            Self::Tap => (profile.tap, 0, false),
            Self::Undo => (profile.undo, 0, false),
            Self::StepComplete => (profile.complete, 0, false),
            Self::PackageComplete => (profile.complete, COMPLETE_PATTERN_GAP_MS, true),
            Self::Advance => (profile.voice, ADVANCE_PATTERN_GAP_MS, true),
        };
        if base == 0 {
            return pattern;
        }

        let _ = pattern.push(base);
        if repeat {
            let _ = pattern.push(gap);
            let _ = pattern.push(base);
        }
        pattern
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Effect {
    Persist(StoreKey),
    Vibrate(HapticCue),
    /// The package was completed; show one completion message.
    Celebrate,
}

pub type Effects = heapless::Vec<Effect, MAX_EFFECTS>;

fn effects(items: &[Effect]) -> Effects {
    let mut out = Effects::new();
    for &item in items {
        let _ = out.push(item);
    }
    out
}

pub struct Tracker {
    package_id: String,
    cycles: Vec<CycleStep>,
    index: usize,
    count: u32,
    phase: Phase,
    stats: DailyStats,
    retention: RetentionPolicy,
    last_tap_day: Option<String>,
}

impl Tracker {
    /// Fresh tracker on the first built-in package.
    pub fn new(language: Language, stats: DailyStats) -> Self {
        let package = presets::default_package(language);
        Self {
            package_id: package.id,
            cycles: package.cycles,
            index: 0,
            count: 0,
            phase: Phase::Counting,
            stats,
            retention: RetentionPolicy::default(),
            last_tap_day: None,
        }
    }

    /// Resolve stored progress against the catalog.
    ///
    /// Unknown package ids fall back to the first built-in package with a
    /// zeroed cursor. An out-of-range step index is clamped to 0. A count at
    /// or above target is kept; the next [`Tracker::poll`] settles it.
    pub fn restore(
        progress: PersistedProgress,
        stats: DailyStats,
        language: Language,
        user_packages: &[Package],
    ) -> Self {
        let mut tracker = Self::new(language, stats);

        let resolved = match progress.active_package_id.as_deref() {
            None => Some(presets::default_package(language)),
            Some(id) => resolve_package(language, user_packages, id),
        };
        let Some(package) = resolved else {
            info!(
                "stored package {:?} no longer exists, using default",
                progress.active_package_id
            );
            return tracker;
        };

        tracker.package_id = package.id;
        tracker.cycles = match progress.custom_cycles {
            Some(cycles) if cycles_are_valid(&cycles) => cycles,
            _ => package.cycles,
        };
        tracker.index = if progress.current_cycle < tracker.cycles.len() {
            progress.current_cycle
        } else {
            0
        };
        tracker.count = progress.count;
        tracker.relabel(language);
        tracker
    }

    pub fn with_retention(mut self, retention: RetentionPolicy) -> Self {
        self.retention = retention;
        self
    }

    pub fn package_id(&self) -> &str {
        &self.package_id
    }

    pub fn cycles(&self) -> &[CycleStep] {
        &self.cycles
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_completing(&self) -> bool {
        matches!(self.phase, Phase::Completing { .. })
    }

    pub fn stats(&self) -> &DailyStats {
        &self.stats
    }

    pub fn current_step(&self) -> Option<&CycleStep> {
        self.cycles.get(self.index)
    }

    pub fn target(&self) -> u32 {
        self.current_step()
            .map(|step| step.target)
            .filter(|&target| target > 0)
            .unwrap_or(FALLBACK_TARGET)
    }

    fn is_final_step(&self) -> bool {
        self.index + 1 >= self.cycles.len()
    }

    /// `count / target`, clamped to `[0, 1]`.
    pub fn progress_ratio(&self) -> f32 {
        (self.count as f32 / self.target() as f32).clamp(0.0, 1.0)
    }

    pub fn remaining(&self) -> u32 {
        self.target().saturating_sub(self.count)
    }

    pub fn today_total(&self, today: &str) -> u64 {
        self.stats.package_total(today, &self.package_id)
    }

    pub fn today_step_totals(&self, today: &str) -> DayTotals {
        self.stats.step_totals(today)
    }

    pub fn tap(&mut self, now: &Moment) -> Effects {
        if self.phase != Phase::Counting {
            debug!("tap ignored while {:?}", self.phase);
            return Effects::new();
        }

        self.count = self.count.saturating_add(1);
        let day = day_key(now.today());
        if self.last_tap_day.as_deref() != Some(day.as_str()) {
            self.stats.prune(self.retention, now.today());
            self.last_tap_day = Some(day.clone());
        }
        let step_name = self
            .current_step()
            .map(|step| step.name.clone())
            .unwrap_or_default();
        self.stats.record(&day, &self.package_id, &step_name, 1);

        let mut out = effects(&[
            Effect::Persist(StoreKey::Count),
            Effect::Persist(StoreKey::DailyTotals),
            Effect::Persist(StoreKey::DailyDhikrStats),
            Effect::Vibrate(HapticCue::Tap),
        ]);
        for effect in self.settle(now.monotonic_ms) {
            let _ = out.push(effect);
        }
        out
    }

    /// Schedule the follow-up transition once the count reaches its target.
    fn settle(&mut self, now_ms: u64) -> Effects {
        if self.phase != Phase::Counting || self.count < self.target() {
            return Effects::new();
        }

        if self.is_final_step() {
            self.phase = Phase::Completing {
                due_ms: now_ms + COMPLETION_RESET_DELAY_MS,
            };
            info!("package {} completed", self.package_id);
            effects(&[Effect::Vibrate(HapticCue::PackageComplete), Effect::Celebrate])
        } else {
            self.phase = Phase::Advancing {
                due_ms: now_ms + AUTO_ADVANCE_DELAY_MS,
            };
            effects(&[Effect::Vibrate(HapticCue::StepComplete)])
        }
    }

    /// Run due timers. Also settles a count restored at or above its target.
    pub fn poll(&mut self, now_ms: u64) -> Effects {
        match self.phase {
            Phase::Counting => self.settle(now_ms),
            Phase::Advancing { due_ms } if now_ms >= due_ms => {
                self.count = 0;
                self.index = (self.index + 1) % self.cycles.len().max(1);
                self.phase = Phase::Counting;
                effects(&[
                    Effect::Persist(StoreKey::Count),
                    Effect::Persist(StoreKey::CurrentCycle),
                ])
            }
            Phase::Completing { due_ms } if now_ms >= due_ms => {
                self.count = 0;
                self.index = 0;
                self.phase = Phase::Counting;
                effects(&[
                    Effect::Persist(StoreKey::Count),
                    Effect::Persist(StoreKey::CurrentCycle),
                ])
            }
            Phase::Advancing { .. } | Phase::Completing { .. } => Effects::new(),
        }
    }

    /// Manual "next": moves to the following step, wrapping at the end.
    pub fn advance(&mut self) -> Effects {
        self.count = 0;
        self.index = (self.index + 1) % self.cycles.len().max(1);
        self.phase = Phase::Counting;
        effects(&[
            Effect::Persist(StoreKey::Count),
            Effect::Persist(StoreKey::CurrentCycle),
            Effect::Vibrate(HapticCue::Advance),
        ])
    }

    /// Zero the current step. Daily statistics are left alone.
    pub fn reset(&mut self) -> Effects {
        self.count = 0;
        self.phase = Phase::Counting;
        effects(&[
            Effect::Persist(StoreKey::Count),
            Effect::Vibrate(HapticCue::Undo),
        ])
    }

    pub fn select_step(&mut self, index: usize) -> Effects {
        if self.is_completing() || index >= self.cycles.len() {
            return Effects::new();
        }
        self.index = index;
        self.count = 0;
        self.phase = Phase::Counting;
        effects(&[
            Effect::Persist(StoreKey::Count),
            Effect::Persist(StoreKey::CurrentCycle),
            Effect::Vibrate(HapticCue::Undo),
        ])
    }

    pub fn switch_package(&mut self, package: &Package) -> Effects {
        if !cycles_are_valid(&package.cycles) {
            return Effects::new();
        }
        info!("switching to package {}", package.id);
        self.package_id = package.id.clone();
        self.cycles = package.cycles.clone();
        self.index = 0;
        self.count = 0;
        self.phase = Phase::Counting;
        effects(&[
            Effect::Persist(StoreKey::ActivePackageId),
            Effect::Persist(StoreKey::CustomCycles),
            Effect::Persist(StoreKey::Count),
            Effect::Persist(StoreKey::CurrentCycle),
            Effect::Vibrate(HapticCue::Undo),
        ])
    }

    /// Overwrite every step target with the parsed goal. Invalid input and
    /// edits during completion are ignored.
    pub fn edit_goal(&mut self, raw: &str) -> Effects {
        if self.is_completing() {
            return Effects::new();
        }
        let Some(goal) = parse_goal(raw) else {
            debug!("discarding goal edit {raw:?}");
            return Effects::new();
        };

        for step in &mut self.cycles {
            step.target = goal;
        }
        effects(&[
            Effect::Persist(StoreKey::CustomCycles),
            Effect::Vibrate(HapticCue::Undo),
        ])
    }

    /// Re-derive built-in step labels for `language`. Count, cursor and
    /// statistics are untouched and edited targets are kept by position.
    pub fn relabel(&mut self, language: Language) -> Effects {
        if is_user_package_id(&self.package_id) {
            return Effects::new();
        }
        let Some(package) = presets::find_package(language, &self.package_id) else {
            return Effects::new();
        };

        if package.cycles.len() == self.cycles.len() {
            for (step, fresh) in self.cycles.iter_mut().zip(package.cycles) {
                step.name = fresh.name;
            }
        } else {
            self.cycles = package.cycles;
            if self.index >= self.cycles.len() {
                self.index = 0;
            }
        }
        effects(&[Effect::Persist(StoreKey::CustomCycles)])
    }

    /// Write the tracker-owned value behind `key`.
    pub fn persist<S: KeyValueStore>(&self, key: StoreKey, store: &mut S) -> bool {
        match key {
            StoreKey::Count => write_string(store, key, &self.count.to_string()),
            StoreKey::CurrentCycle => write_string(store, key, &self.index.to_string()),
            StoreKey::ActivePackageId => write_string(store, key, &self.package_id),
            StoreKey::CustomCycles => write_json(store, key, &self.cycles),
            StoreKey::DailyTotals => self.stats.save_package_totals(store),
            StoreKey::DailyDhikrStats => self.stats.save_step_totals(store),
            _ => false,
        }
    }
}

fn resolve_package(language: Language, user_packages: &[Package], id: &str) -> Option<Package> {
    if is_user_package_id(id) {
        user_packages.iter().find(|package| package.id == id).cloned()
    } else {
        presets::find_package(language, id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use proptest::prelude::*;

    use super::*;
    use crate::{
        model::PackageDraft,
        settings::PersistedProgress,
        store::{KeyValueStore, MemoryStore},
    };

    const DAY: &str = "2024-05-01";

    fn at(ms: u64) -> Moment {
        let local = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Moment::new(ms, local)
    }

    fn salah() -> Tracker {
        Tracker::new(Language::En, DailyStats::new())
    }

    fn tap_n(tracker: &mut Tracker, n: u32, now_ms: u64) -> Vec<Effect> {
        let mut all = Vec::new();
        for _ in 0..n {
            all.extend(tracker.tap(&at(now_ms)));
        }
        all
    }

    #[test]
    fn non_final_target_auto_advances_after_delay() {
        let mut tracker = salah();
        tap_n(&mut tracker, 33, 1_000);
        assert_eq!(tracker.count(), 33);
        assert_eq!(tracker.phase(), Phase::Advancing { due_ms: 1_300 });

        assert!(tracker.poll(1_299).is_empty());
        assert_eq!(tracker.index(), 0);

        let out = tracker.poll(1_300);
        assert!(out.contains(&Effect::Persist(StoreKey::CurrentCycle)));
        assert_eq!((tracker.count(), tracker.index()), (0, 1));
        assert_eq!(tracker.phase(), Phase::Counting);
    }

    #[test]
    fn taps_during_advance_are_dropped() {
        let mut tracker = salah();
        tap_n(&mut tracker, 33, 0);
        assert!(tracker.tap(&at(10)).is_empty());
        assert_eq!(tracker.count(), 33);
        assert_eq!(tracker.today_total(DAY), 33);
    }

    #[test]
    fn post_salah_scenario() {
        let mut tracker = salah();
        let mut now = 0;

        for expected_index in [1, 2] {
            tap_n(&mut tracker, 33, now);
            now += AUTO_ADVANCE_DELAY_MS;
            tracker.poll(now);
            assert_eq!(tracker.index(), expected_index);
        }

        let out = tap_n(&mut tracker, 34, now);
        let celebrations = out.iter().filter(|e| **e == Effect::Celebrate).count();
        assert_eq!(celebrations, 1);
        assert!(tracker.is_completing());
        assert_eq!(tracker.today_total(DAY), 100);

        assert!(tracker.tap(&at(now)).is_empty());
        now += COMPLETION_RESET_DELAY_MS;
        tracker.poll(now);
        assert_eq!((tracker.count(), tracker.index()), (0, 0));
        assert!(!tracker.is_completing());
    }

    #[test]
    fn completion_latches_once() {
        let package = PackageDraft::new("One")
            .with_step("A", 2)
            .build("user_1".into())
            .unwrap();
        let mut tracker = salah();
        tracker.switch_package(&package);

        let out = tap_n(&mut tracker, 2, 0);
        assert_eq!(out.iter().filter(|e| **e == Effect::Celebrate).count(), 1);
        for ms in [10, 100, 2_999] {
            assert!(!tracker.poll(ms).contains(&Effect::Celebrate));
            assert!(tracker.tap(&at(ms)).is_empty());
        }
        tracker.poll(3_000);
        assert_eq!(tracker.phase(), Phase::Counting);
    }

    #[test]
    fn reset_never_touches_stats() {
        let mut tracker = salah();
        tap_n(&mut tracker, 5, 0);
        let out = tracker.reset();
        assert!(!out.contains(&Effect::Persist(StoreKey::DailyTotals)));
        assert_eq!(tracker.count(), 0);
        assert_eq!(tracker.today_total(DAY), 5);
    }

    #[test]
    fn manual_advance_wraps_and_cancels_completion() {
        let mut tracker = salah();
        tracker.select_step(2);
        tap_n(&mut tracker, 34, 0);
        assert!(tracker.is_completing());

        tracker.advance();
        assert_eq!((tracker.count(), tracker.index()), (0, 0));
        assert_eq!(tracker.phase(), Phase::Counting);
    }

    #[test]
    fn goal_edit_overwrites_every_target() {
        let mut tracker = salah();
        tracker.edit_goal("100");
        assert!(tracker.cycles().iter().all(|step| step.target == 100));

        for bad in ["0", "1000000", "-1", "12abc", ""] {
            assert!(tracker.edit_goal(bad).is_empty());
            assert!(tracker.cycles().iter().all(|step| step.target == 100));
        }
    }

    #[test]
    fn goal_edit_blocked_while_completing() {
        let mut tracker = salah();
        tracker.select_step(2);
        tap_n(&mut tracker, 34, 0);
        assert!(tracker.edit_goal("7").is_empty());
        assert_eq!(tracker.cycles()[2].target, 34);
    }

    #[test]
    fn language_switch_keeps_progress() {
        let mut tracker = Tracker::new(Language::Bn, DailyStats::new());
        tap_n(&mut tracker, 33, 0);
        tracker.poll(AUTO_ADVANCE_DELAY_MS);
        tap_n(&mut tracker, 4, 1_000);
        tracker.edit_goal("50");
        let stats_before = tracker.stats().clone();
        let bn_name = tracker.current_step().unwrap().name.clone();

        tracker.relabel(Language::En);
        assert_eq!((tracker.count(), tracker.index()), (4, 1));
        assert_eq!(tracker.stats(), &stats_before);
        assert_ne!(tracker.current_step().unwrap().name, bn_name);
        assert!(tracker.cycles().iter().all(|step| step.target == 50));
    }

    #[test]
    fn user_packages_are_not_relabelled() {
        let package = PackageDraft::new("Mine")
            .with_step("Custom", 5)
            .build("user_9".into())
            .unwrap();
        let mut tracker = salah();
        tracker.switch_package(&package);
        assert!(tracker.relabel(Language::Bn).is_empty());
        assert_eq!(tracker.cycles()[0].name, "Custom");
    }

    #[test]
    fn persist_and_restore_round_trip() {
        let mut store = MemoryStore::new();
        let mut tracker = salah();
        tracker.switch_package(&presets::find_package(Language::En, "heavy_scales").unwrap());
        tracker.edit_goal("20");
        tracker.select_step(1);
        tap_n(&mut tracker, 7, 0);
        for key in StoreKey::ALL {
            tracker.persist(key, &mut store);
        }

        let restored = Tracker::restore(
            PersistedProgress::load(&store),
            DailyStats::load(&store),
            Language::En,
            &[],
        );
        assert_eq!(restored.package_id(), "heavy_scales");
        assert_eq!(restored.index(), 1);
        assert_eq!(restored.count(), 7);
        assert_eq!(restored.cycles(), tracker.cycles());
        assert_eq!(restored.today_total(DAY), 7);
    }

    #[test]
    fn restore_clamps_out_of_range_cycle() {
        let store = MemoryStore::new()
            .with_value(StoreKey::ActivePackageId, "salah_post")
            .with_value(StoreKey::CurrentCycle, "9")
            .with_value(StoreKey::Count, "2");
        let tracker = Tracker::restore(
            PersistedProgress::load(&store),
            DailyStats::new(),
            Language::En,
            &[],
        );
        assert_eq!((tracker.index(), tracker.count()), (0, 2));
    }

    #[test]
    fn restore_unknown_package_falls_back_to_default() {
        let store = MemoryStore::new()
            .with_value(StoreKey::ActivePackageId, "user_404")
            .with_value(StoreKey::Count, "5");
        let tracker = Tracker::restore(
            PersistedProgress::load(&store),
            DailyStats::new(),
            Language::En,
            &[],
        );
        assert_eq!(tracker.package_id(), presets::default_package_id());
        assert_eq!(tracker.count(), 0);
    }

    #[test]
    fn restored_count_at_target_settles_on_poll() {
        let mut store = MemoryStore::new();
        store.set(StoreKey::Count, "33").unwrap();
        let mut tracker = Tracker::restore(
            PersistedProgress::load(&store),
            DailyStats::new(),
            Language::En,
            &[],
        );
        tracker.poll(0);
        assert_eq!(tracker.phase(), Phase::Advancing { due_ms: AUTO_ADVANCE_DELAY_MS });
    }

    #[test]
    fn derived_progress_values() {
        let mut tracker = salah();
        tap_n(&mut tracker, 11, 0);
        assert_eq!(tracker.remaining(), 22);
        assert!((tracker.progress_ratio() - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn haptic_patterns_follow_profile() {
        let profile = HapticProfile::default();
        assert_eq!(HapticCue::Tap.pattern(&profile).as_slice(), &[25]);
        assert_eq!(HapticCue::PackageComplete.pattern(&profile).as_slice(), &[150, 100, 150]);
        assert_eq!(HapticCue::Advance.pattern(&profile).as_slice(), &[40, 40, 40]);

        let silent = HapticProfile {
            complete: 0,
            ..profile
        };
        assert!(HapticCue::PackageComplete.pattern(&silent).is_empty());
    }

    #[test]
    fn retention_prunes_on_first_tap_of_a_day() {
        let mut stats = DailyStats::new();
        stats.record("2024-01-01", "salah_post", "SubhanAllah", 9);
        let mut tracker =
            Tracker::new(Language::En, stats).with_retention(RetentionPolicy::KeepDays(30));
        tracker.tap(&at(0));
        assert!(!tracker.stats().contains_day("2024-01-01"));
        assert_eq!(tracker.today_total(DAY), 1);
    }

    #[derive(Clone, Debug)]
    enum Op {
        Tap,
        Reset,
        Next,
        Poll(u64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => Just(Op::Tap),
            1 => Just(Op::Reset),
            1 => Just(Op::Next),
            2 => (0u64..4_000).prop_map(Op::Poll),
        ]
    }

    proptest! {
        #[test]
        fn stats_only_grow_by_taps(ops in proptest::collection::vec(op(), 0..300)) {
            let mut tracker = salah();
            let mut now = 0u64;
            let mut accepted = 0u64;
            for op in ops {
                let before = tracker.stats().day_total(DAY);
                match op {
                    Op::Tap => {
                        if !tracker.tap(&at(now)).is_empty() {
                            accepted += 1;
                        }
                    }
                    Op::Reset => { tracker.reset(); }
                    Op::Next => { tracker.advance(); }
                    Op::Poll(step) => {
                        now += step;
                        tracker.poll(now);
                    }
                }
                prop_assert!(tracker.stats().day_total(DAY) >= before);
                prop_assert!(tracker.index() < tracker.cycles().len());
                prop_assert!(tracker.count() <= tracker.target());
            }
            prop_assert_eq!(tracker.stats().day_total(DAY), accepted);
        }
    }
}
