use log::debug;
use tasbih_core::capability::Haptics;

/// Terminal stand-in for a vibration motor: logs the pattern and rings the
/// bell when enabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHaptics {
    bell: bool,
}

impl LogHaptics {
    pub const fn new(bell: bool) -> Self {
        Self { bell }
    }
}

impl Haptics for LogHaptics {
    fn vibrate(&mut self, pattern: &[u32]) {
        debug!("vibrate {pattern:?}");
        if self.bell {
            eprint!("\x07");
        }
    }
}
