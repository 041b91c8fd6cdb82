use std::{
    fmt::Write as _,
    io::{self, Write},
};

use tasbih_core::{
    language::Language,
    render::{CounterPhase, CounterView, Screen, VisualStyle},
    text_policy::localized_number,
};

const BAR_WIDTH: usize = 30;
const MAX_HISTORY_DAYS: usize = 7;
const DARK_ON: &str = "\x1b[7m";
const DARK_OFF: &str = "\x1b[0m";

/// Plain-text renderer for the screen view model.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn render(&mut self, screen: Screen<'_>) -> io::Result<()> {
        let style = screen.style();
        let text = format_screen(&screen);
        if style.dark_mode {
            writeln!(self.out, "{DARK_ON}{text}{DARK_OFF}")?;
        } else {
            writeln!(self.out, "{text}")?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn label(style: VisualStyle, en: &'static str, bn: &'static str) -> &'static str {
    style.language.pick(en, bn)
}

fn progress_bar(progress: f32) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * BAR_WIDTH as f32).round() as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Render `screen` as text. Writing into a `String` cannot fail, so
/// `fmt::Write` results are ignored.
pub fn format_screen(screen: &Screen<'_>) -> String {
    let mut out = String::new();
    match screen {
        Screen::Counter { counter, style } => format_counter(&mut out, counter, *style, false),
        Screen::GoalEditor { counter, style } => format_counter(&mut out, counter, *style, true),
        Screen::Packages {
            packages,
            active_id,
            style,
        } => {
            let _ = writeln!(out, "== {} ==", label(*style, "Packages", "প্যাকেজসমূহ"));
            for package in packages.iter() {
                let marker = if package.id == *active_id { '*' } else { ' ' };
                let steps: Vec<String> = package
                    .cycles
                    .iter()
                    .map(|step| format!("{} x{}", step.name, localized_number(step.target, style.language)))
                    .collect();
                let _ = writeln!(out, "{marker} {:<22} {}", package.id, package.title);
                let _ = writeln!(out, "    {}", steps.join(" / "));
            }
            let _ = writeln!(out, "p <id> | x");
        }
        Screen::History {
            today,
            today_total,
            step_totals,
            days,
            style,
        } => {
            let lang = style.language;
            let _ = writeln!(out, "== {} ==", label(*style, "History", "ইতিহাস"));
            let _ = writeln!(
                out,
                "{} ({today}): {}",
                label(*style, "Today", "আজ"),
                localized_number(today_total, lang)
            );
            for (name, total) in step_totals.iter() {
                let _ = writeln!(out, "  {name}: {}", localized_number(total, lang));
            }
            for (day, total) in days.iter().take(MAX_HISTORY_DAYS) {
                let _ = writeln!(out, "  {day}  {}", localized_number(total, lang));
            }
        }
        Screen::Duas {
            duas,
            status,
            style,
        } => {
            let _ = writeln!(out, "== {} ==", label(*style, "Duas", "দোয়া"));
            for dua in duas.iter() {
                let _ = writeln!(out, "[{}] {}", dua.id, dua.benefit);
                let _ = writeln!(out, "    {}", dua.arabic);
                let _ = writeln!(out, "    {}", dua.translation);
                let _ = writeln!(out, "    ({})", dua.reference);
            }
            if let Some(status) = status {
                let _ = writeln!(out, "{status}");
            }
        }
        Screen::Calendar {
            gregorian,
            hijri,
            grid,
            weekdays,
            style,
        } => {
            let lang = style.language;
            let _ = writeln!(out, "{hijri}");
            let _ = writeln!(out, "{gregorian}");
            if let Some(grid) = grid {
                let _ = writeln!(out, "-- {} / {} --", grid.gregorian_title, grid.hijri_title);
                let header: Vec<String> = weekdays.iter().map(|day| format!("{day:^9}")).collect();
                let _ = writeln!(out, "{}", header.concat());
                let mut column = grid.leading_blanks;
                let _ = write!(out, "{}", " ".repeat(9 * column));
                for day in &grid.days {
                    let cell = format!(
                        "{}/{}",
                        localized_number(day.day, lang),
                        localized_number(day.hijri_day, lang)
                    );
                    let cell = if day.is_today { format!("[{cell}]") } else { cell };
                    let _ = write!(out, "{cell:^9}");
                    column += 1;
                    if column == 7 {
                        column = 0;
                        let _ = writeln!(out);
                    }
                }
                if column != 0 {
                    let _ = writeln!(out);
                }
            }
            let _ = writeln!(out, "< > . | x");
        }
    }
    out
}

fn format_counter(out: &mut String, counter: &CounterView<'_>, style: VisualStyle, editing: bool) {
    let lang: Language = style.language;
    let _ = writeln!(out, "\"{}\" - {}", counter.quote.display_text(), counter.quote.reference);
    let _ = writeln!(out, "== {} ==", counter.package_title);

    for (index, step) in counter.steps.iter().enumerate() {
        let marker = if index == counter.step_index { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {}. {} ({})",
            localized_number(index + 1, lang),
            step.name,
            localized_number(step.target, lang)
        );
    }

    let _ = writeln!(
        out,
        "{} {} / {}",
        progress_bar(counter.progress),
        localized_number(counter.count, lang),
        localized_number(counter.target, lang)
    );
    let _ = writeln!(
        out,
        "{}: {}   {}: {}",
        label(style, "Remaining", "বাকি"),
        localized_number(counter.remaining, lang),
        label(style, "Today", "আজ"),
        localized_number(counter.today_total, lang)
    );

    match counter.phase {
        CounterPhase::Counting => {}
        CounterPhase::Advancing => {
            let _ = writeln!(out, "{}", label(style, "Next step...", "পরবর্তী ধাপ..."));
        }
        CounterPhase::Completed => {
            let _ = writeln!(out, "{}", label(style, "Package complete!", "প্যাকেজ সম্পন্ন!"));
        }
    }
    if let Some(banner) = counter.banner {
        let _ = writeln!(out, "*** {banner} ***");
    }
    if let Some(status) = counter.status {
        let _ = writeln!(out, "({status})");
    }
    if editing {
        let _ = writeln!(out, "{}", label(style, "New goal: g <n>", "নতুন লক্ষ্য: g <n>"));
    }
}

#[cfg(test)]
mod tests {
    use tasbih_core::{
        content::{Quote, find_package, quotes::quotes},
        model::CycleStep,
    };

    use super::*;

    fn counter<'a>(steps: &'a [CycleStep], quote: Quote) -> CounterView<'a> {
        CounterView {
            package_title: "Post-Salah Tasbih",
            steps,
            step_index: 1,
            count: 11,
            target: 33,
            progress: 1.0 / 3.0,
            remaining: 22,
            today_total: 44,
            phase: CounterPhase::Counting,
            quote,
            banner: Some("MashaAllah!"),
            status: None,
        }
    }

    #[test]
    fn counter_shows_progress_and_banner() {
        let package = find_package(Language::En, "salah_post").unwrap();
        let quote = quotes(Language::En)[0];
        let style = VisualStyle {
            language: Language::En,
            dark_mode: false,
        };
        let text = format_screen(&Screen::Counter {
            counter: counter(&package.cycles, quote),
            style,
        });

        assert!(text.contains("11 / 33"));
        assert!(text.contains("Remaining: 22"));
        assert!(text.contains("*** MashaAllah! ***"));
        assert!(text.lines().any(|line| line.starts_with("> 2.")));
    }

    #[test]
    fn bangla_uses_bangla_digits() {
        let package = find_package(Language::Bn, "salah_post").unwrap();
        let quote = quotes(Language::Bn)[0];
        let style = VisualStyle {
            language: Language::Bn,
            dark_mode: true,
        };
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer
            .render(Screen::Counter {
                counter: counter(&package.cycles, quote),
                style,
            })
            .unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.contains("১১ / ৩৩"));
        assert!(text.starts_with(DARK_ON));
    }

    #[test]
    fn progress_bar_is_clamped() {
        assert_eq!(progress_bar(2.0), format!("[{}]", "#".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(0.0), format!("[{}]", "-".repeat(BAR_WIDTH)));
    }
}
