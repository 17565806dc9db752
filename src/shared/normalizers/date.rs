use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::ops::Range;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

static US_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").expect("Failed to compile US date regex.")
});

static WEEKDAY_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b[a-z]{3,9}\.?,\s*([a-z]{3,9})\.?\s+(\d{1,2}),\s*(\d{4})\b")
        .expect("Failed to compile weekday date regex.")
});

const EASTERN_STANDARD_HOURS: i8 = -5;
const EASTERN_DAYLIGHT_HOURS: i8 = -4;
/// Local hour at which daylight saving time starts and ends.
const DST_SWITCH_HOUR: u8 = 2;

/// Parses the first `MM/DD/YYYY` date in `text` as local midnight, US Eastern.
pub fn parse_us_date(text: &str) -> Option<OffsetDateTime> {
    let captures = US_DATE_REGEX.captures(text)?;
    let month = captures[1].parse::<u8>().ok()?;
    let day = captures[2].parse::<u8>().ok()?;
    let year = captures[3].parse::<i32>().ok()?;
    let date = Date::from_calendar_date(year, Month::try_from(month).ok()?, day).ok()?;
    eastern_instant(date, Time::MIDNIGHT)
}

/// Byte span of the first `MM/DD/YYYY`-shaped token in `text`.
pub fn us_date_span(text: &str) -> Option<Range<usize>> {
    US_DATE_REGEX.find(text).map(|found| found.range())
}

/// Parses a phrase such as `Sat, Jan 31, 2026` as local midnight, US Eastern.
///
/// The weekday is only used to recognize the phrase; the calendar date wins.
pub fn parse_weekday_date(text: &str) -> Option<OffsetDateTime> {
    weekday_date(&WEEKDAY_DATE_REGEX.captures(text)?)
}

/// Like [`parse_weekday_date`], but takes the last phrase in `text`.
pub fn parse_last_weekday_date(text: &str) -> Option<OffsetDateTime> {
    weekday_date(&WEEKDAY_DATE_REGEX.captures_iter(text).last()?)
}

fn weekday_date(captures: &Captures) -> Option<OffsetDateTime> {
    let month = month_from_name(&captures[1])?;
    let day = captures[2].parse::<u8>().ok()?;
    let year = captures[3].parse::<i32>().ok()?;
    let date = Date::from_calendar_date(year, month, day).ok()?;
    eastern_instant(date, Time::MIDNIGHT)
}

/// Tries every supported date shape in turn.
pub fn normalize_date(text: &str) -> Option<OffsetDateTime> {
    parse_us_date(text).or_else(|| parse_weekday_date(text))
}

/// Converts a US Eastern wall-clock time into a UTC instant.
///
/// During the repeated hour in November the earlier (daylight) reading is used,
/// and a time skipped in March is read as standard time.
pub fn eastern_instant(date: Date, time: Time) -> Option<OffsetDateTime> {
    let offset = UtcOffset::from_hms(eastern_offset_hours(date, time), 0, 0).ok()?;
    Some(
        PrimitiveDateTime::new(date, time)
            .assume_offset(offset)
            .to_offset(UtcOffset::UTC),
    )
}

fn eastern_offset_hours(date: Date, time: Time) -> i8 {
    let year = date.year();
    let (Some(dst_start), Some(dst_end)) = (
        nth_sunday(year, Month::March, 2),
        nth_sunday(year, Month::November, 1),
    ) else {
        return EASTERN_STANDARD_HOURS;
    };

    let in_daylight_time = if date == dst_start {
        time.hour() >= DST_SWITCH_HOUR
    } else if date == dst_end {
        time.hour() < DST_SWITCH_HOUR
    } else {
        date > dst_start && date < dst_end
    };

    if in_daylight_time {
        EASTERN_DAYLIGHT_HOURS
    } else {
        EASTERN_STANDARD_HOURS
    }
}

fn nth_sunday(year: i32, month: Month, nth: u8) -> Option<Date> {
    let first = Date::from_calendar_date(year, month, 1).ok()?;
    let days_until_sunday = (7 - first.weekday().number_days_from_sunday()) % 7;
    Date::from_calendar_date(year, month, 1 + days_until_sunday + 7 * (nth - 1)).ok()
}

fn month_from_name(name: &str) -> Option<Month> {
    let prefix = name.get(..3)?.to_ascii_lowercase();
    let month = match prefix.as_str() {
        "jan" => Month::January,
        "feb" => Month::February,
        "mar" => Month::March,
        "apr" => Month::April,
        "may" => Month::May,
        "jun" => Month::June,
        "jul" => Month::July,
        "aug" => Month::August,
        "sep" => Month::September,
        "oct" => Month::October,
        "nov" => Month::November,
        "dec" => Month::December,
        _ => return None,
    };
    Some(month)
}
