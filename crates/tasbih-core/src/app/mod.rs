//! Application shell: routes intents into the tracker, runs the effects it
//! returns and builds the screen view model.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use log::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    calendar::{self, MonthGrid},
    capability::{Capabilities, Moment},
    content::{self, DuaPart, Quote, find_dua, list_duas, random_motivation, random_quote},
    input::{InputEvent, InputProvider},
    language::Language,
    model::{Package, PackageDraft, is_user_package_id, user_package_id},
    reminder::{ReminderOutcome, ReminderScheduler},
    render::{CounterPhase, CounterView, Overlay, Screen, VisualStyle},
    settings::{AppSettings, HapticKind, HapticProfile, PersistedProgress, load_user_packages, save_user_packages},
    stats::{DailyStats, RetentionPolicy, day_key},
    store::KeyValueStore,
    tracker::{Effect, Effects, HapticCue, Phase, Tracker},
};

/// How long the completion message stays up.
pub const BANNER_VISIBLE_MS: u64 = 5_000;
const STATUS_VISIBLE_MS: u64 = 2_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AppConfig {
    pub retention: RetentionPolicy,
    /// Fixed seed for quote and message selection; entropy when `None`.
    pub rng_seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Banner {
    text: &'static str,
    until_ms: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct StatusLine {
    text: &'static str,
    until_ms: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct CalendarCursor {
    year: i32,
    month: u32,
}

impl CalendarCursor {
    fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

pub struct TasbihApp<S, IN>
where
    S: KeyValueStore,
    IN: InputProvider,
{
    store: S,
    input: IN,
    caps: Capabilities,
    config: AppConfig,
    settings: AppSettings,
    haptics: HapticProfile,
    tracker: Tracker,
    user_packages: Vec<Package>,
    reminder: ReminderScheduler,
    rng: StdRng,
    quote: Quote,
    overlay: Option<Overlay>,
    banner: Option<Banner>,
    status: Option<StatusLine>,
    calendar: Option<CalendarCursor>,
    today: Option<NaiveDate>,
    refresh_at: Option<NaiveDateTime>,
    started: bool,
    pending_redraw: bool,
    quit_requested: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
