//! Once-a-day evening reminder.

use log::{debug, info};

use crate::{
    capability::{Moment, Notifier, Permission},
    stats::day_key,
    store::{KeyValueStore, StoreKey, read_string, write_string},
};

/// Local hour from which the reminder may fire.
pub const REMINDER_HOUR: u32 = 19;
pub const REMINDER_INTERVAL_MS: u64 = 15 * 60 * 1_000;

pub const REMINDER_TITLE: &str = "Reminder";
pub const REMINDER_BODY: &str = "Ghumanor age Surah Mulk tilwat korte and tasbih porte!";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReminderOutcome {
    /// Not started, cancelled or between checks.
    Idle,
    NoPermission,
    TooEarly,
    AlreadySentToday,
    Delivered,
    DeliveryFailed,
}

#[derive(Debug, Default)]
pub struct ReminderScheduler {
    next_check_ms: Option<u64>,
    cancelled: bool,
}

impl ReminderScheduler {
    pub const fn new() -> Self {
        Self {
            next_check_ms: None,
            cancelled: false,
        }
    }

    /// Ask for permission if it is still undetermined and schedule an
    /// immediate first check.
    pub fn start(&mut self, now_ms: u64, notifier: &mut dyn Notifier) {
        if self.cancelled {
            return;
        }
        if notifier.permission() == Permission::Undetermined {
            let granted = notifier.request_permission();
            info!("notification permission: {granted:?}");
        }
        self.next_check_ms = Some(now_ms);
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.next_check_ms = None;
    }

    pub fn is_active(&self) -> bool {
        !self.cancelled && self.next_check_ms.is_some()
    }

    pub fn poll<S: KeyValueStore>(
        &mut self,
        now: &Moment,
        store: &mut S,
        notifier: &mut dyn Notifier,
    ) -> ReminderOutcome {
        let Some(due_ms) = self.next_check_ms else {
            return ReminderOutcome::Idle;
        };
        if self.cancelled || now.monotonic_ms < due_ms {
            return ReminderOutcome::Idle;
        }
        self.next_check_ms = Some(now.monotonic_ms + REMINDER_INTERVAL_MS);

        let outcome = check(now, store, notifier);
        debug!("reminder check: {outcome:?}");
        outcome
    }
}

fn check<S: KeyValueStore>(now: &Moment, store: &mut S, notifier: &mut dyn Notifier) -> ReminderOutcome {
    if notifier.permission() != Permission::Granted {
        return ReminderOutcome::NoPermission;
    }
    if now.hour() < REMINDER_HOUR {
        return ReminderOutcome::TooEarly;
    }

    let today = day_key(now.today());
    if read_string(store, StoreKey::LastNotifiedDate).as_deref() == Some(today.as_str()) {
        return ReminderOutcome::AlreadySentToday;
    }

    if notifier.notify(REMINDER_TITLE, REMINDER_BODY) {
        write_string(store, StoreKey::LastNotifiedDate, &today);
        ReminderOutcome::Delivered
    } else {
        ReminderOutcome::DeliveryFailed
    }
}
