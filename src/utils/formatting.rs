//! Markup and price formatting
//!
//! Builds HTML heading tags and renders prices with a currency label or a
//! `%PRICE%` pattern. Price rounding follows JavaScript number semantics so
//! that rendered amounts match what the web front end displays.

use crate::error::UtilError;

/// Placeholder replaced by the rounded amount in a currency pattern
pub const PRICE_PLACEHOLDER: &str = "%PRICE%";

/// Currency label used when no pattern is given
pub const DEFAULT_CURRENCY: &str = "SEK";

/// An HTML heading level, `1..=6`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 6;

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for HeadingLevel {
    type Error = UtilError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        if !(Self::MIN..=Self::MAX).contains(&level) {
            return Err(UtilError::InvalidHeadingLevel(level));
        }
        Ok(HeadingLevel(level as u8))
    }
}

/// Wraps a title in an HTML heading tag
///
/// The title is inserted as-is, without escaping.
///
/// # Arguments
/// - `title` - Text content of the heading
/// - `level` - Heading level, `1` for `<h1>` up to `6` for `<h6>`
///
/// # Returns
/// The markup, e.g. `<h2>Next level</h2>`
///
/// # Errors
/// Returns [`UtilError::InvalidHeadingLevel`] if `level` is outside `1..=6`.
pub fn make_heading(title: &str, level: i64) -> Result<String, UtilError> {
    let level = HeadingLevel::try_from(level).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected heading level");
    })?;
    let n = level.get();
    Ok(format!("<h{n}>{title}</h{n}>"))
}

/// Renders prices with a currency label
///
/// Holds the label used when no pattern is given. The default formatter
/// uses [`DEFAULT_CURRENCY`]; a configured one can carry another label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormatter {
    default_currency: String,
}

impl Default for PriceFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

impl PriceFormatter {
    pub fn new(default_currency: impl Into<String>) -> Self {
        PriceFormatter {
            default_currency: default_currency.into(),
        }
    }

    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }

    /// Rounds an amount to two decimals and attaches a currency
    ///
    /// With no pattern (or an empty one) the result is `"<amount> <default>"`.
    /// A pattern containing `%PRICE%` has its first placeholder replaced by
    /// the amount. Any other pattern is used as the label, after removing a
    /// lowercase `%price%` token and its first space.
    ///
    /// Whole amounts are only padded to two decimals when they render as
    /// exactly two characters, so `14` gives `14.00` but `5` stays `5`.
    pub fn format(&self, amount: f64, pattern: Option<&str>) -> String {
        let rounded = pad_decimals(js_number_to_string(round_to_cents(amount)));

        let pattern = match pattern {
            Some(p) if !p.is_empty() => p,
            _ => return format!("{} {}", rounded, self.default_currency),
        };

        if pattern.contains(PRICE_PLACEHOLDER) {
            pattern.replacen(PRICE_PLACEHOLDER, &rounded, 1)
        } else {
            format!("{} {}", rounded, currency_label(pattern))
        }
    }
}

/// Formats a price with the `SEK` default
///
/// See [`PriceFormatter::format`] for the pattern rules.
///
/// ```
/// use verktyg::format_price;
///
/// assert_eq!(format_price(232.10542, None), "232.11 SEK");
/// assert_eq!(format_price(1024.2048, Some("USD %PRICE%")), "USD 1024.20");
/// ```
pub fn format_price(amount: f64, pattern: Option<&str>) -> String {
    PriceFormatter::default().format(amount, pattern)
}

/// Strips the first `%PRICE%` (any case) and then the first space
fn currency_label(pattern: &str) -> String {
    let upper = pattern.to_ascii_uppercase();
    let without_token = match upper.find(PRICE_PLACEHOLDER) {
        // ASCII case mapping keeps byte offsets aligned with `pattern`
        Some(idx) => format!(
            "{}{}",
            &pattern[..idx],
            &pattern[idx + PRICE_PLACEHOLDER.len()..]
        ),
        None => pattern.to_string(),
    };
    without_token.replacen(' ', "", 1)
}

/// Pads a rendered amount: one fractional digit gets a trailing `0`, and a
/// two character rendering gets `.00`
fn pad_decimals(mut rounded: String) -> String {
    if let Some(dot) = rounded.find('.') {
        if dot >= rounded.len() - 2 {
            rounded.push('0');
        }
    }
    if rounded.len() == 2 {
        rounded.push_str(".00");
    }
    rounded
}

/// `Math.round(amount * 100) / 100`
fn round_to_cents(amount: f64) -> f64 {
    js_round(amount * 100.0) / 100.0
}

/// Rounds half-way cases towards positive infinity, like `Math.round`
fn js_round(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Renders a number the way JavaScript's `String(number)` does
fn js_number_to_string(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let magnitude = x.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{:e}", x);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{mantissa}e+{power}")
            }
            _ => exp,
        };
    }

    x.to_string()
}
