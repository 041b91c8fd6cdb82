//! Optional platform capabilities and the injected clock.
//!
//! Each capability has a no-op implementation so a board can leave it out.
//! Failures are reported as `false` and never reach counter state.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Vibration output. `pattern` alternates on/off durations in milliseconds,
/// starting with an on phase.
pub trait Haptics {
    fn vibrate(&mut self, pattern: &[u32]);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn vibrate(&mut self, _pattern: &[u32]) {}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Permission {
    Granted,
    Denied,
    Undetermined,
}

impl Permission {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "granted" => Some(Self::Granted),
            "denied" => Some(Self::Denied),
            "default" | "undetermined" => Some(Self::Undetermined),
            _ => None,
        }
    }
}

/// User-visible notifications.
pub trait Notifier {
    fn permission(&self) -> Permission;
    fn request_permission(&mut self) -> Permission;
    /// Returns `true` when the notification was delivered.
    fn notify(&mut self, title: &str, body: &str) -> bool;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoNotifier;

impl Notifier for NoNotifier {
    fn permission(&self) -> Permission {
        Permission::Denied
    }

    fn request_permission(&mut self) -> Permission {
        Permission::Denied
    }

    fn notify(&mut self, _title: &str, _body: &str) -> bool {
        false
    }
}

pub trait Clipboard {
    /// Returns `true` when the text was placed on the clipboard.
    fn copy(&mut self, text: &str) -> bool;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn copy(&mut self, _text: &str) -> bool {
        false
    }
}

/// Bundle of optional capabilities handed to the app.
pub struct Capabilities {
    pub haptics: Box<dyn Haptics>,
    pub notifier: Box<dyn Notifier>,
    pub clipboard: Box<dyn Clipboard>,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            haptics: Box::new(NoHaptics),
            notifier: Box::new(NoNotifier),
            clipboard: Box::new(NoClipboard),
        }
    }
}

impl Capabilities {
    pub fn with_haptics(mut self, haptics: impl Haptics + 'static) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }
}

/// A point in time as seen by the app: a monotonic tick for timers and the
/// local wall clock for day keys and the reminder window.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Moment {
    pub monotonic_ms: u64,
    pub local: NaiveDateTime,
}

impl Moment {
    pub const fn new(monotonic_ms: u64, local: NaiveDateTime) -> Self {
        Self {
            monotonic_ms,
            local,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.local.date()
    }

    pub fn hour(&self) -> u32 {
        self.local.hour()
    }
}

pub trait Clock {
    fn now(&self) -> Moment;
}
