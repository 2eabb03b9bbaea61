//! Publication date discovery and normalisation.
//!
//! Machine-readable sources (`<time datetime>`, publication meta tags) are
//! parsed and rendered as a long-form date. Free-text sources found through
//! date-ish class names are only accepted when they look like a date and are
//! returned as written.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use regex::RegexSet;
use serde::{Deserialize, Serialize};

use crate::locator::{Locator, Tier};
use crate::parse::Document;

/// Texts at or above this many characters are never dates.
const MAX_DATE_TEXT_CHARS: usize = 50;

static DATE_SHAPES: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"[0-9]{1,2}[/\-.][0-9]{1,2}[/\-.][0-9]{2,4}",
        r"[0-9]{4}[/\-.][0-9]{1,2}[/\-.][0-9]{1,2}",
        r"\w+\s+[0-9]{1,2},?\s+[0-9]{4}",
        r"[0-9]{1,2}\s+\w+\s+[0-9]{4}",
    ])
    .expect("date shape patterns are valid")
});

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S%:z",
    "%Y-%m-%d %H:%M:%S %z",
];

const NAIVE_DATETIME_FORMATS: [&str; 10] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%B %d, %Y %I:%M %p",
    "%d %B %Y %H:%M",
    "%a %b %d %Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: [&str; 11] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%A, %B %d, %Y",
    "%a, %d %b %Y",
    "%a %b %d %Y",
    "%d %b %Y",
];

const RU_MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Language used when rendering parsed dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateLocale {
    /// `1 марта 2024 г.`
    #[default]
    Ru,
    /// `1 March 2024`
    En,
}

impl DateLocale {
    /// Long form: day, month name, year. No time of day.
    pub fn format(self, date: NaiveDate) -> String {
        match self {
            DateLocale::Ru => {
                let month = RU_MONTHS_GENITIVE[date.month0() as usize];
                format!("{} {} {} г.", date.day(), month, date.year())
            }
            DateLocale::En => date.format("%-d %B %Y").to_string(),
        }
    }
}

impl FromStr for DateLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ru" | "ru-ru" => Ok(Self::Ru),
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            _ => Err(format!("Invalid locale: {}. Valid options: ru, en", s)),
        }
    }
}

impl fmt::Display for DateLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateLocale::Ru => f.write_str("ru"),
            DateLocale::En => f.write_str("en"),
        }
    }
}

/// Parse a date or date-time string into the calendar date it names.
///
/// Offsets are honoured as written: `2024-03-01T23:30:00-05:00` is the
/// first of March, not the second.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.date_naive());
    }

    for fmt in &OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.date_naive());
        }
    }

    for fmt in &NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| parse_partial_iso(s))
}

/// `2024` and `2024-03` name the first day of the year or month.
fn parse_partial_iso(s: &str) -> Option<NaiveDate> {
    let all_digits = |part: &str, len: usize| part.len() == len && part.bytes().all(|b| b.is_ascii_digit());

    let (year, month) = match s.split_once('-') {
        Some((year, month)) if all_digits(year, 4) && all_digits(month, 2) => (year, month.parse().ok()?),
        None if all_digits(s, 4) => (s, 1),
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
}

/// Render `raw` as a long-form date in the default locale.
///
/// Unparseable input is returned unchanged.
pub fn format_date(raw: &str) -> String {
    format_date_in(raw, DateLocale::default())
}

/// Render `raw` as a long-form date in `locale`, or return it unchanged.
pub fn format_date_in(raw: &str, locale: DateLocale) -> String {
    match parse_date(raw) {
        Some(date) => locale.format(date),
        None => raw.to_string(),
    }
}

/// Whether free text plausibly is a date, e.g. `03/01/2024` or `March 3, 2024`.
pub fn looks_like_date(text: &str) -> bool {
    text.chars().count() < MAX_DATE_TEXT_CHARS && DATE_SHAPES.is_match(text)
}

/// A date candidate and how its value must be treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTier {
    /// Structured value, parsed and reformatted.
    Machine(Tier),
    /// Visible text, accepted only if it looks like a date.
    Text(Tier),
}

/// Date candidates in priority order. `class_hints` are the substrings
/// matched against class names after the exact date classes.
pub fn date_tiers<S: AsRef<str>>(class_hints: &[S]) -> Vec<DateTier> {
    let mut tiers = vec![
        DateTier::Machine(Tier::attr(Locator::tag_with_attr("time", "datetime"), "datetime")),
        DateTier::Machine(Tier::attr(Locator::meta("property", "article:published_time"), "content")),
        DateTier::Machine(Tier::attr(Locator::meta("name", "date"), "content")),
        DateTier::Machine(Tier::attr(Locator::meta("name", "pubdate"), "content")),
    ];

    for class in ["post-date", "article-date", "entry-date", "published", "date"] {
        tiers.push(DateTier::Text(Tier::text(Locator::class(class))));
    }

    for hint in class_hints {
        tiers.push(DateTier::Text(Tier::text(Locator::class_contains(hint.as_ref()))));
    }

    tiers
}

/// Find the publication date with default hints and locale.
pub fn resolve_date(doc: &Document) -> Option<String> {
    resolve_date_with(doc, &date_tiers(&["date", "time"]), DateLocale::default())
}

/// Find the publication date over a caller-supplied tier table.
///
/// Returns `None` when no tier produces an acceptable value; never an
/// empty string.
pub fn resolve_date_with(doc: &Document, tiers: &[DateTier], locale: DateLocale) -> Option<String> {
    tiers.iter().enumerate().find_map(|(index, tier)| {
        let resolved = match tier {
            DateTier::Machine(tier) => tier
                .resolve(doc)
                .map(|raw| format_date_in(&raw, locale))
                .or_else(|| tier.resolve_text(doc).filter(|text| looks_like_date(text))),
            DateTier::Text(tier) => tier.resolve(doc).filter(|text| looks_like_date(text)),
        };

        if resolved.is_some() {
            tracing::debug!(tier = index, "date resolved");
        }
        resolved
    })
}
