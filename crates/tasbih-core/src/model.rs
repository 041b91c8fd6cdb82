//! Counting packages and the steps they are made of.

use serde::{Deserialize, Serialize};

use crate::text_policy::normalized_label;

/// Id prefix reserved for packages built by the user.
pub const USER_PACKAGE_PREFIX: &str = "user_";
pub const USER_PACKAGE_DESCRIPTION: &str = "Custom package";
pub const MAX_USER_STEPS: usize = 10;
pub const MAX_USER_TARGET: u32 = 99_999;
/// Goal edits must stay strictly below this value.
pub const GOAL_LIMIT_EXCLUSIVE: u32 = 1_000_000;
/// Target used when a step cannot be resolved.
pub const FALLBACK_TARGET: u32 = 33;

/// One countable phrase within a package.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CycleStep {
    pub name: String,
    pub target: u32,
}

impl CycleStep {
    pub fn new(name: impl Into<String>, target: u32) -> Self {
        Self {
            name: name.into(),
            target,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.target >= 1
    }
}

/// `true` when `cycles` can back the counter: non-empty and every target positive.
pub fn cycles_are_valid(cycles: &[CycleStep]) -> bool {
    !cycles.is_empty() && cycles.iter().all(CycleStep::is_valid)
}

/// Ordered set of steps representing one devotional routine.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub cycles: Vec<CycleStep>,
}

impl Package {
    pub fn is_user_created(&self) -> bool {
        is_user_package_id(&self.id)
    }

    pub fn total_target(&self) -> u64 {
        self.cycles.iter().map(|step| step.target as u64).sum()
    }
}

pub fn is_user_package_id(id: &str) -> bool {
    id.starts_with(USER_PACKAGE_PREFIX)
}

/// Unvalidated step as typed into the package builder.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DraftStep {
    pub name: String,
    pub target: i64,
}

/// Package builder input. Nothing is checked until [`PackageDraft::build`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PackageDraft {
    pub title: String,
    pub steps: Vec<DraftStep>,
}

impl PackageDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            steps: Vec::new(),
        }
    }

    pub fn with_step(mut self, name: impl Into<String>, target: i64) -> Self {
        self.steps.push(DraftStep {
            name: name.into(),
            target,
        });
        self
    }

    /// Validate the draft into a user package.
    ///
    /// The title and step names are trimmed and clamped, steps without a name
    /// are dropped, targets are clamped to `1..=MAX_USER_TARGET` and at most
    /// [`MAX_USER_STEPS`] steps are kept. Returns `None` when the title is
    /// empty or no step survives.
    pub fn build(&self, id: String) -> Option<Package> {
        let title = normalized_label(&self.title)?;

        let cycles: Vec<CycleStep> = self
            .steps
            .iter()
            .filter_map(|step| {
                let name = normalized_label(&step.name)?;
                let target = step.target.clamp(1, MAX_USER_TARGET as i64) as u32;
                Some(CycleStep { name, target })
            })
            .take(MAX_USER_STEPS)
            .collect();

        if cycles.is_empty() {
            return None;
        }

        Some(Package {
            id,
            title,
            description: USER_PACKAGE_DESCRIPTION.to_owned(),
            reference: None,
            cycles,
        })
    }
}

/// Id for a package created at `created_at_ms`.
pub fn user_package_id(created_at_ms: i64) -> String {
    format!("{USER_PACKAGE_PREFIX}{created_at_ms}")
}

/// Parse a goal edit. Accepts integers in `(0, GOAL_LIMIT_EXCLUSIVE)` only.
pub fn parse_goal(raw: &str) -> Option<u32> {
    let value = raw.trim().parse::<i64>().ok()?;
    if value > 0 && value < GOAL_LIMIT_EXCLUSIVE as i64 {
        Some(value as u32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_is_trimmed_and_empty_steps_dropped() {
        let draft = PackageDraft::new("  My Dhikr  ")
            .with_step("A", 10)
            .with_step("", 5);

        let package = draft.build(user_package_id(42)).unwrap();
        assert_eq!(package.id, "user_42");
        assert_eq!(package.title, "My Dhikr");
        assert_eq!(package.description, USER_PACKAGE_DESCRIPTION);
        assert_eq!(package.cycles, vec![CycleStep::new("A", 10)]);
        assert!(package.is_user_created());
    }

    #[test]
    fn draft_without_title_or_steps_is_rejected() {
        assert!(PackageDraft::new("   ").with_step("A", 1).build("user_1".into()).is_none());
        assert!(PackageDraft::new("Title").with_step("  ", 3).build("user_1".into()).is_none());
        assert!(PackageDraft::new("Title").build("user_1".into()).is_none());
    }

    #[test]
    fn draft_targets_are_clamped() {
        let package = PackageDraft::new("Clamp")
            .with_step("low", -4)
            .with_step("zero", 0)
            .with_step("high", 1_000_000)
            .build("user_7".into())
            .unwrap();

        let targets: Vec<u32> = package.cycles.iter().map(|step| step.target).collect();
        assert_eq!(targets, vec![1, 1, MAX_USER_TARGET]);
    }

    #[test]
    fn draft_keeps_at_most_ten_steps() {
        let mut draft = PackageDraft::new("Many");
        for idx in 0..14 {
            draft = draft.with_step(format!("step {idx}"), 3);
        }
        let package = draft.build("user_9".into()).unwrap();
        assert_eq!(package.cycles.len(), MAX_USER_STEPS);
        assert_eq!(package.cycles[9].name, "step 9");
    }

    #[test]
    fn goal_parsing_bounds() {
        assert_eq!(parse_goal("100"), Some(100));
        assert_eq!(parse_goal(" 999999 "), Some(999_999));
        assert_eq!(parse_goal("1000000"), None);
        assert_eq!(parse_goal("0"), None);
        assert_eq!(parse_goal("-3"), None);
        assert_eq!(parse_goal("abc"), None);
        assert_eq!(parse_goal(""), None);
    }

    #[test]
    fn cycle_validation() {
        assert!(cycles_are_valid(&[CycleStep::new("A", 1)]));
        assert!(!cycles_are_valid(&[]));
        assert!(!cycles_are_valid(&[CycleStep::new("A", 3), CycleStep::new("B", 0)]));
    }

    #[test]
    fn package_reference_is_optional_in_json() {
        let raw = r#"{"id":"user_1","title":"T","description":"d","cycles":[{"name":"A","target":3,"isCustom":true}]}"#;
        let package: Package = serde_json::from_str(raw).unwrap();
        assert_eq!(package.reference, None);
        assert_eq!(package.total_target(), 3);
    }
}
