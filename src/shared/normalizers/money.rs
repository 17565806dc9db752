use once_cell::sync::Lazy;
use regex::Regex;

static MONEY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:(\d+)(?:\.(\d+))?|\.(\d+))\s*(?:(billion|million|thousand)s?)?\b")
        .expect("Failed to compile money regex.")
});

const MAX_FRACTION_DIGITS: usize = 18;

/// Converts an amount such as `$26.5 Million` or `$1,200,000` into whole dollars.
///
/// Returns `None` when no amount can be found, which is distinct from a
/// published amount of zero.
pub fn parse_money(text: &str) -> Option<u64> {
    let text = text.replace(',', "");
    let captures = MONEY_REGEX.captures(&text)?;

    let whole = match captures.get(1) {
        Some(whole) => whole.as_str().parse::<u128>().ok()?,
        None => 0,
    };
    let multiplier: u128 = match captures
        .get(4)
        .map(|unit| unit.as_str().to_ascii_lowercase())
        .as_deref()
    {
        Some("billion") => 1_000_000_000,
        Some("million") => 1_000_000,
        Some("thousand") => 1_000,
        _ => 1,
    };

    let mut amount = whole.checked_mul(multiplier)?;
    if let Some(fraction) = captures.get(2).or_else(|| captures.get(3)) {
        let digits = &fraction.as_str()[..fraction.len().min(MAX_FRACTION_DIGITS)];
        let numerator = digits.parse::<u128>().ok()?;
        let denominator = 10_u128.pow(digits.len() as u32);
        // Round half up.
        amount += (numerator * multiplier * 2 + denominator) / (denominator * 2);
    }

    u64::try_from(amount).ok()
}
