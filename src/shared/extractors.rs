//! Best-effort field extraction over page text.
//!
//! Every extractor locates a label ("anchor") and only looks at a bounded
//! window of text next to it, usually after. A miss is `None`, never an error.

use crate::model::game::Arity;
use crate::shared::normalizers::date::{
    normalize_date, parse_last_weekday_date, parse_us_date, us_date_span,
};
use crate::shared::normalizers::money::parse_money;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use std::ops::Range;
use time::OffsetDateTime;

static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s\x{200B}\x{200C}\x{200D}\x{2060}\x{FEFF}]+")
        .expect("Failed to compile whitespace regex.")
});
static DATE_LIKE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b\d{1,2}/\d{1,2}(?:/\d{2,4})?\b|\b[a-z]{3,9}\.?\s+\d{1,2},\s*\d{4}\b")
        .expect("Failed to compile date-like regex.")
});
static BALL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,2}\b").expect("Failed to compile ball regex."));
static DIGIT_RUN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d[\d\s]*").expect("Failed to compile digit run regex."));
static MULTIPLIER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\D{0,16}?(\d{1,2})\s*x\b").expect("Failed to compile multiplier regex.")
});
static NEXT_DRAW_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[a-z]{3}\.,\s*\d{1,2}/\d{1,2}\s*@\s*\d{1,2}(?::\d{2})?\s*[ap]\.?m\.?")
        .expect("Failed to compile next draw regex.")
});

/// Elements whose text is never rendered.
const INVISIBLE_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// A label to look for and how much text after it belongs to the field.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Anchor {
    pub label: &'static str,
    pub window: usize,
}

impl Anchor {
    pub const fn new(label: &'static str, window: usize) -> Self {
        Anchor { label, window }
    }
}

/// Main numbers and bonus ball found in a window.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Balls {
    pub main: Option<Vec<String>>,
    pub special: Option<String>,
}

/// Reduces an HTML page to its visible text on a single line.
///
/// Entities are decoded by the HTML parser; zero-width characters count as
/// whitespace.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let text = document
        .tree
        .root()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|element| INVISIBLE_ELEMENTS.contains(&element.name()))
            });
            (!hidden).then_some(&**text)
        })
        .collect::<Vec<_>>()
        .join(" ");
    WHITESPACE_REGEX.replace_all(&text, " ").trim().to_string()
}

fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .to_ascii_lowercase()
        .find(&needle.to_ascii_lowercase())
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(text: &str, mut index: usize) -> usize {
    while !text.is_char_boundary(index) {
        index += 1;
    }
    index
}

/// Span of the first whole-word occurrence of `word`, ignoring case.
fn find_word(haystack: &str, word: &str) -> Option<Range<usize>> {
    let pattern = format!(r"(?i)\b{}\b", regex::escape(word));
    let regex = Regex::new(&pattern).ok()?;
    regex.find(haystack).map(|found| found.range())
}

/// Windows following every occurrence of the anchor, in document order.
pub fn anchor_windows<'a>(text: &'a str, anchor: &Anchor) -> Vec<&'a str> {
    let lowered_text = text.to_ascii_lowercase();
    let lowered_label = anchor.label.to_ascii_lowercase();
    lowered_text
        .match_indices(&lowered_label)
        .map(|(position, _)| {
            let start = position + anchor.label.len();
            let end = floor_char_boundary(text, start + anchor.window);
            &text[start..end]
        })
        .collect()
}

/// Window following the first occurrence of the anchor.
pub fn window_after<'a>(text: &'a str, anchor: &Anchor) -> Option<&'a str> {
    anchor_windows(text, anchor).into_iter().next()
}

/// Windows preceding every occurrence of the anchor, in document order.
pub fn anchor_windows_before<'a>(text: &'a str, anchor: &Anchor) -> Vec<&'a str> {
    let lowered_text = text.to_ascii_lowercase();
    let lowered_label = anchor.label.to_ascii_lowercase();
    lowered_text
        .match_indices(&lowered_label)
        .map(|(position, _)| {
            let start = ceil_char_boundary(text, position.saturating_sub(anchor.window));
            &text[start..position]
        })
        .collect()
}

/// Text from `start` up to the first of `end_markers`, or to the end of the text.
pub fn section<'a>(text: &'a str, start: &str, end_markers: &[&str]) -> Option<&'a str> {
    let begin = find_ignore_case(text, start)? + start.len();
    let rest = &text[begin..];
    let end = end_markers
        .iter()
        .filter_map(|marker| find_ignore_case(rest, marker))
        .min()
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Splits `text` into the blocks introduced by each label.
///
/// Labels only match as whole words. A block runs from its label to the next
/// found label. The result is in `labels` order; a label that does not occur
/// yields `None`.
pub fn labeled_blocks<'a>(text: &'a str, labels: &[&str]) -> Vec<Option<&'a str>> {
    let spans = labels
        .iter()
        .map(|label| find_word(text, label))
        .collect::<Vec<_>>();

    spans
        .iter()
        .map(|span| {
            let span = span.as_ref()?;
            let end = spans
                .iter()
                .flatten()
                .map(|other| other.start)
                .filter(|start| *start > span.start)
                .min()
                .unwrap_or(text.len());
            Some(&text[span.end..end])
        })
        .collect()
}

fn in_range(token: &str, arity: &Arity, special: bool) -> Option<u8> {
    let value = token.parse::<u8>().ok()?;
    let range = if special {
        arity.special_range.as_ref()?
    } else {
        &arity.main_range
    };
    range.contains(&value).then_some(value)
}

fn pad(value: u8, arity: &Arity) -> String {
    format!("{:0width$}", value, width = arity.width)
}

/// Takes 1–2 digit tokens in document order: the first `main_count` are the
/// main numbers, the next one is the bonus ball when the game has one.
///
/// Dates are blanked out first so their day and month are never read as balls.
pub fn extract_balls(window: &str, arity: &Arity) -> Balls {
    let window = DATE_LIKE_REGEX.replace_all(window, " ");
    let tokens = BALL_REGEX
        .find_iter(&window)
        .map(|token| token.as_str())
        .collect::<Vec<_>>();

    if tokens.len() < arity.main_count {
        return Balls::default();
    }

    let main = tokens[..arity.main_count]
        .iter()
        .map(|token| in_range(token, arity, false).map(|value| pad(value, arity)))
        .collect::<Option<Vec<_>>>();

    let special = main.as_ref().and_then(|_| {
        tokens
            .get(arity.main_count)
            .and_then(|token| in_range(token, arity, true))
            .map(|value| pad(value, arity))
    });

    Balls { main, special }
}

/// Balls from the first anchor window that yields a complete set of main numbers.
pub fn extract_balls_after(text: &str, anchor: &Anchor, arity: &Arity) -> Balls {
    anchor_windows(text, anchor)
        .into_iter()
        .map(|window| extract_balls(window, arity))
        .find(|balls| balls.main.is_some())
        .unwrap_or_default()
}

/// Single digits of the first contiguous run of digits in `window`.
pub fn extract_digits(window: &str, arity: &Arity) -> Option<Vec<String>> {
    let run = DIGIT_RUN_REGEX.find(window)?;
    let digits = run
        .as_str()
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(arity.main_count)
        .map(|c| c.to_string())
        .collect::<Vec<_>>();

    if digits.len() < arity.main_count
        || !digits
            .iter()
            .all(|digit| in_range(digit, arity, false).is_some())
    {
        return None;
    }
    Some(digits)
}

/// Splits a window at its first `MM/DD/YYYY` date.
///
/// Returns the parsed date and the text after it. A window without such a date
/// yields `None`, so whatever follows is never read as a draw.
pub fn split_at_us_date(window: &str) -> Option<(Option<OffsetDateTime>, &str)> {
    let span = us_date_span(window)?;
    Some((parse_us_date(&window[span.clone()]), &window[span.end..]))
}

/// First date of a supported shape inside the anchor window.
pub fn extract_date_after(text: &str, anchor: &Anchor) -> Option<OffsetDateTime> {
    anchor_windows(text, anchor)
        .into_iter()
        .find_map(normalize_date)
}

/// Date phrase closest before the anchor, e.g. the heading above a results card.
pub fn extract_date_before(text: &str, anchor: &Anchor) -> Option<OffsetDateTime> {
    anchor_windows_before(text, anchor)
        .into_iter()
        .find_map(parse_last_weekday_date)
}

/// Amount following the anchor, e.g. `Estimated Jackpot: $59 Million`.
///
/// Only windows that start with an amount count, so a label mentioned in
/// running prose is skipped.
pub fn extract_money_after(text: &str, anchor: &Anchor) -> Option<u64> {
    anchor_windows(text, anchor).into_iter().find_map(|window| {
        let amount = window.trim_start_matches(|c: char| c.is_whitespace() || c == ':');
        if amount.starts_with('$') || amount.starts_with(|c: char| c.is_ascii_digit()) {
            parse_money(amount)
        } else {
            None
        }
    })
}

/// Multiplier label such as `3x` following the anchor.
pub fn extract_multiplier(text: &str, anchor: &Anchor) -> Option<String> {
    anchor_windows(text, anchor).into_iter().find_map(|window| {
        MULTIPLIER_REGEX
            .captures(window)
            .and_then(|captures| captures[1].parse::<u8>().ok())
            .map(|value| format!("{}x", value))
    })
}

/// Phrase such as `Fri., 1/30 @ 11 p.m.` following the anchor.
pub fn extract_next_draw(text: &str, anchor: &Anchor) -> Option<String> {
    anchor_windows(text, anchor).into_iter().find_map(|window| {
        NEXT_DRAW_REGEX
            .find(window)
            .map(|found| found.as_str().trim().to_string())
    })
}

/// Logs a field that could not be extracted and passes the value through.
pub fn traced<T>(game: &str, field: &str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        tracing::debug!("{}: {} not found on the upstream page", game, field);
    }
    value
}
