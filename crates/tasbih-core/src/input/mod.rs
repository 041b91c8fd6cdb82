//! Input abstraction layer.

pub mod mock;

use crate::{
    content::DuaPart,
    model::PackageDraft,
    render::Overlay,
    settings::HapticKind,
};

/// Logical user intents consumed by the tasbih app.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Tap,
    Reset,
    Next,
    SelectStep(usize),
    SelectPackage(String),
    /// Raw goal text; parsed and validated by the tracker.
    EditGoal(String),
    CreatePackage(PackageDraft),
    ClearUserPackages,
    ToggleLanguage,
    ToggleDarkMode,
    SetHaptic(HapticKind, u32),
    Open(Overlay),
    Close,
    CalendarShift(i32),
    CalendarToday,
    CopyDua(u16, DuaPart),
    ResetAppData,
    Quit,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
