//! App-level view models consumed by the host renderer.

use crate::{
    calendar::MonthGrid,
    content::{DuaItem, Quote},
    language::Language,
    model::{CycleStep, Package},
    stats::DayTotals,
};

/// Panels drawn over the counter. While one is open taps are ignored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Overlay {
    Packages,
    GoalEditor,
    History,
    Duas,
    Calendar,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VisualStyle {
    pub language: Language,
    pub dark_mode: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CounterPhase {
    Counting,
    Advancing,
    Completed,
}

/// Everything the counter face shows.
#[derive(Clone, Copy, Debug)]
pub struct CounterView<'a> {
    pub package_title: &'a str,
    pub steps: &'a [CycleStep],
    pub step_index: usize,
    pub count: u32,
    pub target: u32,
    /// 0.0..=1.0
    pub progress: f32,
    pub remaining: u32,
    pub today_total: u64,
    pub phase: CounterPhase,
    pub quote: Quote,
    pub banner: Option<&'a str>,
    pub status: Option<&'a str>,
}

pub enum Screen<'a> {
    Counter {
        counter: CounterView<'a>,
        style: VisualStyle,
    },
    Packages {
        packages: &'a [Package],
        active_id: &'a str,
        style: VisualStyle,
    },
    GoalEditor {
        counter: CounterView<'a>,
        style: VisualStyle,
    },
    History {
        today: &'a str,
        today_total: u64,
        step_totals: &'a DayTotals,
        days: &'a [(String, u64)],
        style: VisualStyle,
    },
    Duas {
        duas: &'a [DuaItem],
        status: Option<&'a str>,
        style: VisualStyle,
    },
    Calendar {
        gregorian: &'a str,
        hijri: &'a str,
        grid: Option<&'a MonthGrid>,
        weekdays: &'a [&'a str; 7],
        style: VisualStyle,
    },
}

impl Screen<'_> {
    pub fn style(&self) -> VisualStyle {
        match self {
            Self::Counter { style, .. }
            | Self::Packages { style, .. }
            | Self::GoalEditor { style, .. }
            | Self::History { style, .. }
            | Self::Duas { style, .. }
            | Self::Calendar { style, .. } => *style,
        }
    }
}
