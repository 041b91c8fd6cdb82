use log::info;
use tasbih_core::capability::{Notifier, Permission};

/// Prints reminders to stderr. An undetermined permission is granted on
/// request, mirroring a user accepting the prompt.
#[derive(Debug, Clone, Copy)]
pub struct TerminalNotifier {
    permission: Permission,
}

impl TerminalNotifier {
    pub const fn new(permission: Permission) -> Self {
        Self { permission }
    }
}

impl Notifier for TerminalNotifier {
    fn permission(&self) -> Permission {
        self.permission
    }

    fn request_permission(&mut self) -> Permission {
        if self.permission == Permission::Undetermined {
            self.permission = Permission::Granted;
        }
        self.permission
    }

    fn notify(&mut self, title: &str, body: &str) -> bool {
        if self.permission != Permission::Granted {
            return false;
        }
        info!("notification delivered: {title}");
        eprintln!("\n[{title}] {body}");
        true
    }
}
