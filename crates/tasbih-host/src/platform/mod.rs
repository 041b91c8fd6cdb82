//! System-backed capabilities.

pub mod clipboard;
pub mod clock;
pub mod haptics;
pub mod notify;

pub use clipboard::LogClipboard;
pub use clock::SystemClock;
pub use haptics::LogHaptics;
pub use notify::TerminalNotifier;
