use std::{
    io::{self, BufRead},
    sync::mpsc::{self, Receiver, TryRecvError},
    thread,
};

use log::{debug, warn};
use tasbih_core::{
    content::DuaPart,
    input::{InputEvent, InputProvider},
    model::{FALLBACK_TARGET, PackageDraft},
    render::Overlay,
    settings::HapticKind,
};

#[derive(Debug, thiserror::Error)]
pub enum TerminalInputError {
    #[error("terminal reader thread stopped")]
    Disconnected,
}

/// Line-oriented stdin reader. Lines are parsed on a background thread and
/// handed over through a channel; [`InputProvider::poll_event`] never blocks.
pub struct TerminalInput {
    events: Receiver<InputEvent>,
    disconnected: bool,
}

impl TerminalInput {
    pub fn spawn() -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("terminal-input".into())
            .spawn(move || {
                let stdin = io::stdin();
                for line in stdin.lock().lines() {
                    let line = match line {
                        Ok(line) => line,
                        Err(err) => {
                            warn!("stdin read failed: {err}");
                            break;
                        }
                    };
                    match parse_command(&line) {
                        Some(event) => {
                            if tx.send(event).is_err() {
                                return;
                            }
                        }
                        None => warn!("unknown command {line:?}"),
                    }
                }
                debug!("stdin closed");
                let _ = tx.send(InputEvent::Quit);
            })?;

        Ok(Self {
            events: rx,
            disconnected: false,
        })
    }
}

impl InputProvider for TerminalInput {
    type Error = TerminalInputError;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        match self.events.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) if self.disconnected => Ok(None),
            Err(TryRecvError::Disconnected) => {
                self.disconnected = true;
                Err(TerminalInputError::Disconnected)
            }
        }
    }
}

/// Help text listing every command understood by [`parse_command`].
pub const HELP: &str = "\
enter/t tap | r reset | n next | s <step> jump to step
p list packages | p <id> pick package | g edit goal | g <n> set goal
c <title>|<name>:<target>|... create package | clear-user drop user packages
l language | d dark mode | v <tap|undo|complete|voice> <ms> haptics
h history | u duas | k <id> a|t copy dua | a calendar | < > . month nav
x close | reset-all wipe data | q quit";

/// Map one terminal line to an intent. `None` for anything unrecognised.
pub fn parse_command(line: &str) -> Option<InputEvent> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let event = match (command, rest) {
        ("" | "t", "") => InputEvent::Tap,
        ("r", "") => InputEvent::Reset,
        ("n", "") => InputEvent::Next,
        ("s", step) => {
            let step: usize = step.parse().ok()?;
            InputEvent::SelectStep(step.checked_sub(1)?)
        }
        ("p", "") => InputEvent::Open(Overlay::Packages),
        ("p", id) => InputEvent::SelectPackage(id.to_owned()),
        ("g", "") => InputEvent::Open(Overlay::GoalEditor),
        ("g", goal) => InputEvent::EditGoal(goal.to_owned()),
        ("c", layout) => InputEvent::CreatePackage(parse_draft(layout)),
        ("clear-user", "") => InputEvent::ClearUserPackages,
        ("l", "") => InputEvent::ToggleLanguage,
        ("d", "") => InputEvent::ToggleDarkMode,
        ("v", args) => {
            let (kind, duration) = args.split_once(char::is_whitespace)?;
            InputEvent::SetHaptic(HapticKind::parse(kind)?, duration.trim().parse().ok()?)
        }
        ("h", "") => InputEvent::Open(Overlay::History),
        ("u", "") => InputEvent::Open(Overlay::Duas),
        ("a", "") => InputEvent::Open(Overlay::Calendar),
        ("<", "") => InputEvent::CalendarShift(-1),
        (">", "") => InputEvent::CalendarShift(1),
        (".", "") => InputEvent::CalendarToday,
        ("k", args) => {
            let (id, part) = args.split_once(char::is_whitespace)?;
            let part = match part.trim() {
                "a" => DuaPart::Arabic,
                "t" => DuaPart::Translation,
                _ => return None,
            };
            InputEvent::CopyDua(id.parse().ok()?, part)
        }
        ("x", "") => InputEvent::Close,
        ("reset-all", "") => InputEvent::ResetAppData,
        ("q", "") => InputEvent::Quit,
        _ => return None,
    };
    Some(event)
}

/// `Title|Name:33|Other:100`. A step without a parsable target gets the
/// fallback target; validation happens in the core.
fn parse_draft(layout: &str) -> PackageDraft {
    let mut parts = layout.split('|');
    let mut draft = PackageDraft::new(parts.next().unwrap_or_default());
    for part in parts {
        let (name, target) = match part.rsplit_once(':') {
            Some((name, target)) => (
                name,
                target.trim().parse().unwrap_or(i64::from(FALLBACK_TARGET)),
            ),
            None => (part, i64::from(FALLBACK_TARGET)),
        };
        draft = draft.with_step(name, target);
    }
    draft
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_commands() {
        assert_eq!(parse_command(""), Some(InputEvent::Tap));
        assert_eq!(parse_command("  t "), Some(InputEvent::Tap));
        assert_eq!(parse_command("r"), Some(InputEvent::Reset));
        assert_eq!(parse_command("n"), Some(InputEvent::Next));
        assert_eq!(parse_command("s 2"), Some(InputEvent::SelectStep(1)));
        assert_eq!(parse_command("s 0"), None);
        assert_eq!(parse_command("q"), Some(InputEvent::Quit));
        assert_eq!(parse_command("zz"), None);
    }

    #[test]
    fn package_and_goal_commands() {
        assert_eq!(parse_command("p"), Some(InputEvent::Open(Overlay::Packages)));
        assert_eq!(
            parse_command("p heavy_scales"),
            Some(InputEvent::SelectPackage("heavy_scales".into()))
        );
        assert_eq!(parse_command("g 100"), Some(InputEvent::EditGoal("100".into())));
        assert_eq!(parse_command("g"), Some(InputEvent::Open(Overlay::GoalEditor)));
    }

    #[test]
    fn create_command_builds_a_draft() {
        let Some(InputEvent::CreatePackage(draft)) =
            parse_command("c  My Dhikr  |A:10|:5|Tasbih")
        else {
            panic!("expected a draft");
        };
        assert_eq!(draft.title, "My Dhikr  ");
        assert_eq!(draft.steps.len(), 3);
        assert_eq!((draft.steps[0].name.as_str(), draft.steps[0].target), ("A", 10));
        assert_eq!(draft.steps[1].name, "");
        assert_eq!(draft.steps[2].target, i64::from(FALLBACK_TARGET));

        let package = draft.build("user_1".into()).unwrap();
        assert_eq!(package.title, "My Dhikr");
        assert_eq!(package.cycles.len(), 2);
    }

    #[test]
    fn dua_and_haptic_commands() {
        assert_eq!(
            parse_command("k 17 t"),
            Some(InputEvent::CopyDua(17, DuaPart::Translation))
        );
        assert_eq!(parse_command("k 17 z"), None);
        assert_eq!(
            parse_command("v tap 0"),
            Some(InputEvent::SetHaptic(HapticKind::Tap, 0))
        );
        assert_eq!(parse_command("v buzz 10"), None);
    }
}
