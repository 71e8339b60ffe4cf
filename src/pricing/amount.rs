//! Reading and rendering dollar amounts.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::CURRENCY_SYMBOL;

static LEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)").expect("valid number pattern"));

/// Read the numeric amount at the start of a price string.
///
/// A leading `$` and thousands separators are ignored; anything after the
/// number (`"/Person"`, `" per hour"`) is ignored too. `"25/Person"` is 25,
/// `"market price"` has no amount.
pub fn parse_price_value(s: &str) -> Option<f64> {
    // Unlike a bare prefix parse, "$25" reads as 25 and "1,250" as 1250, so
    // dollar-prefixed and comma-grouped item prices count toward ranges.
    let trimmed = s.trim();
    let unsigned = trimmed.strip_prefix(CURRENCY_SYMBOL).unwrap_or(trimmed);
    let cleaned = unsigned.trim_start().replace(',', "");

    let literal = LEADING_NUMBER.find(&cleaned)?.as_str();
    literal.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Render an amount as whole US dollars: `1234.5` becomes `"$1,235"`.
///
/// Halves round away from zero.
pub fn format_whole_dollars(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!(
        "{}{}{}",
        sign,
        CURRENCY_SYMBOL,
        group_thousands(&format!("{:.0}", rounded.abs()))
    )
}

/// Render an amount in dollars, keeping cents only when there are any.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount * 100.0).round();
    if cents % 100.0 == 0.0 {
        return format_whole_dollars(amount);
    }

    let sign = if cents < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", cents.abs() / 100.0);
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!(
        "{}{}{}.{}",
        sign,
        CURRENCY_SYMBOL,
        group_thousands(whole),
        fraction
    )
}

/// Insert commas every three digits of an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
