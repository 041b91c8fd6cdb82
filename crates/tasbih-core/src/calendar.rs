//! Gregorian and Hijri date labels plus the month grid.
//!
//! Hijri dates use the arithmetic (tabular) Islamic calendar with the civil
//! epoch. It agrees with sighting-based calendars to within a day.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};

use crate::{language::Language, text_policy::localized_number};

/// Julian day number of 0000-12-31 in the proleptic Gregorian calendar.
const CE_TO_JDN: i64 = 1_721_425;
/// Julian day number of 1 Muharram 1 AH, civil epoch.
const HIJRI_EPOCH_JDN: i64 = 1_948_440;

static WEEKDAYS_SHORT: [[&str; 7]; 2] = [
    ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    ["রবি", "সোম", "মঙ্গল", "বুধ", "বৃহঃ", "শুক্র", "শনি"],
];

static WEEKDAYS_LONG: [[&str; 7]; 2] = [
    [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    [
        "রবিবার",
        "সোমবার",
        "মঙ্গলবার",
        "বুধবার",
        "বৃহস্পতিবার",
        "শুক্রবার",
        "শনিবার",
    ],
];

static GREGORIAN_MONTHS: [[&str; 12]; 2] = [
    [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    [
        "জানুয়ারী",
        "ফেব্রুয়ারী",
        "মার্চ",
        "এপ্রিল",
        "মে",
        "জুন",
        "জুলাই",
        "আগস্ট",
        "সেপ্টেম্বর",
        "অক্টোবর",
        "নভেম্বর",
        "ডিসেম্বর",
    ],
];

static HIJRI_MONTHS: [[&str; 12]; 2] = [
    [
        "Muharram",
        "Safar",
        "Rabi al-Awwal",
        "Rabi al-Thani",
        "Jumada al-Awwal",
        "Jumada al-Thani",
        "Rajab",
        "Shaban",
        "Ramadan",
        "Shawwal",
        "Dhul-Qadah",
        "Dhul-Hijjah",
    ],
    [
        "মুহাররম",
        "সফর",
        "রবিউল আউয়াল",
        "রবিউস সানি",
        "জমাদিউল আউয়াল",
        "জমাদিউস সানি",
        "রজব",
        "শাবান",
        "রমজান",
        "শাওয়াল",
        "জিলকদ",
        "জিলহজ",
    ],
];

static HIJRI_ERA: [&str; 2] = ["AH", "হিজরি"];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HijriDate {
    pub year: i64,
    /// 1-based.
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    pub fn from_gregorian(date: NaiveDate) -> Self {
        let jdn = i64::from(date.num_days_from_ce()) + CE_TO_JDN;

        let mut l = jdn - HIJRI_EPOCH_JDN + 10_632;
        let n = (l - 1).div_euclid(10_631);
        l = l - 10_631 * n + 354;
        let j = ((10_985 - l) / 5_316) * ((50 * l) / 17_719) + (l / 5_670) * ((43 * l) / 15_238);
        l = l - ((30 - j) / 15) * ((17_719 * j) / 50) - (j / 16) * ((15_238 * j) / 43) + 29;
        let month = (24 * l) / 709;
        let day = l - (709 * month) / 24;
        let year = 30 * n + j - 30;

        Self {
            year,
            month: month as u32,
            day: day as u32,
        }
    }

    pub fn month_name(&self, language: Language) -> &'static str {
        HIJRI_MONTHS[language.index()][(self.month.clamp(1, 12) - 1) as usize]
    }
}

pub fn weekday_index(weekday: Weekday) -> usize {
    weekday.num_days_from_sunday() as usize
}

pub fn weekday_short_names(language: Language) -> &'static [&'static str; 7] {
    &WEEKDAYS_SHORT[language.index()]
}

pub fn gregorian_month_name(month: u32, language: Language) -> &'static str {
    GREGORIAN_MONTHS[language.index()][(month.clamp(1, 12) - 1) as usize]
}

/// "Monday, March 11, 2024" / "সোমবার, ১১ মার্চ, ২০২৪".
pub fn gregorian_long(date: NaiveDate, language: Language) -> String {
    let weekday = WEEKDAYS_LONG[language.index()][weekday_index(date.weekday())];
    let month = gregorian_month_name(date.month(), language);
    let day = localized_number(date.day(), language);
    let year = localized_number(date.year(), language);
    match language {
        Language::En => format!("{weekday}, {month} {day}, {year}"),
        Language::Bn => format!("{weekday}, {day} {month}, {year}"),
    }
}

/// "Monday, Ramadan 1, 1445 AH" / "সোমবার, ১ রমজান, ১৪৪৫ হিজরি".
pub fn hijri_long(date: NaiveDate, language: Language) -> String {
    let hijri = HijriDate::from_gregorian(date);
    let weekday = WEEKDAYS_LONG[language.index()][weekday_index(date.weekday())];
    let month = hijri.month_name(language);
    let day = localized_number(hijri.day, language);
    let year = localized_number(hijri.year, language);
    let era = HIJRI_ERA[language.index()];
    match language {
        Language::En => format!("{weekday}, {month} {day}, {year} {era}"),
        Language::Bn => format!("{weekday}, {day} {month}, {year} {era}"),
    }
}

pub fn gregorian_month_title(year: i32, month: u32, language: Language) -> String {
    format!(
        "{} {}",
        gregorian_month_name(month, language),
        localized_number(year, language)
    )
}

pub fn hijri_month_title(date: NaiveDate, language: Language) -> String {
    let hijri = HijriDate::from_gregorian(date);
    format!(
        "{} {} {}",
        hijri.month_name(language),
        localized_number(hijri.year, language),
        HIJRI_ERA[language.index()]
    )
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GridDay {
    pub day: u32,
    pub hijri_day: u32,
    pub is_today: bool,
}

/// One Gregorian month laid out for a Sunday-first week grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Weekday of the first day, Sunday = 0; number of blank leading cells.
    pub leading_blanks: usize,
    pub days: Vec<GridDay>,
    pub gregorian_title: String,
    pub hijri_title: String,
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = shift_month(year, month, 1);
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 0,
    }
}

/// Move `offset` months from `(year, month)`; `month` is 1-based.
pub fn shift_month(year: i32, month: u32, offset: i32) -> (i32, u32) {
    let zero_based = year * 12 + month.clamp(1, 12) as i32 - 1 + offset;
    (zero_based.div_euclid(12), zero_based.rem_euclid(12) as u32 + 1)
}

/// `None` when the month is outside chrono's supported range.
pub fn month_grid(year: i32, month: u32, today: NaiveDate, language: Language) -> Option<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let days = (0..days_in_month(year, month))
        .filter_map(|offset| first.checked_add_days(Days::new(u64::from(offset))))
        .map(|date| GridDay {
            day: date.day(),
            hijri_day: HijriDate::from_gregorian(date).day,
            is_today: date == today,
        })
        .collect();

    Some(MonthGrid {
        year,
        month,
        leading_blanks: weekday_index(first.weekday()),
        days,
        gregorian_title: gregorian_month_title(year, month, language),
        hijri_title: hijri_month_title(first, language),
    })
}

/// Start of the following local day; date labels refresh there.
pub fn next_midnight(now: NaiveDateTime) -> Option<NaiveDateTime> {
    now.date().succ_opt()?.and_hms_opt(0, 0, 0)
}

pub fn ms_until_next_midnight(now: NaiveDateTime) -> u64 {
    next_midnight(now)
        .map(|midnight| (midnight - now).num_milliseconds().max(0) as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn hijri_conversion_known_dates() {
        assert_eq!(
            HijriDate::from_gregorian(date(2024, 3, 11)),
            HijriDate { year: 1445, month: 9, day: 1 }
        );
        assert_eq!(
            HijriDate::from_gregorian(date(622, 7, 19)),
            HijriDate { year: 1, month: 1, day: 1 }
        );
    }

    #[test]
    fn hijri_days_advance_one_at_a_time() {
        let mut day = date(2023, 1, 1);
        let mut prev = HijriDate::from_gregorian(day);
        for _ in 0..800 {
            day = day.succ_opt().unwrap();
            let next = HijriDate::from_gregorian(day);
            if next.day != 1 {
                assert_eq!(next.day, prev.day + 1);
                assert_eq!(next.month, prev.month);
            } else {
                assert!(prev.day == 29 || prev.day == 30);
            }
            prev = next;
        }
    }

    #[test]
    fn long_dates_per_language() {
        let day = date(2024, 3, 11);
        assert_eq!(gregorian_long(day, Language::En), "Monday, March 11, 2024");
        assert_eq!(gregorian_long(day, Language::Bn), "সোমবার, ১১ মার্চ, ২০২৪");
        assert_eq!(hijri_long(day, Language::En), "Monday, Ramadan 1, 1445 AH");
    }

    #[test]
    fn grid_layout_for_march_2024() {
        let grid = month_grid(2024, 3, date(2024, 3, 11), Language::En).unwrap();
        assert_eq!(grid.leading_blanks, 5);
        assert_eq!(grid.days.len(), 31);
        assert_eq!(grid.gregorian_title, "March 2024");
        let today: Vec<u32> = grid.days.iter().filter(|d| d.is_today).map(|d| d.day).collect();
        assert_eq!(today, vec![11]);
        assert_eq!(grid.days[10].hijri_day, 1);
    }

    #[test]
    fn month_shifting_wraps_years() {
        assert_eq!(shift_month(2024, 12, 1), (2025, 1));
        assert_eq!(shift_month(2024, 1, -1), (2023, 12));
        assert_eq!(shift_month(2024, 5, -17), (2022, 12));
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
    }

    #[test]
    fn midnight_refresh() {
        let now = date(2024, 3, 11).and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(next_midnight(now), Some(date(2024, 3, 12).and_hms_opt(0, 0, 0).unwrap()));
        assert_eq!(ms_until_next_midnight(now), 1_000);
    }
}
