//! Number formatting in the Vietnamese locale (vi-VN)

use super::display::NOT_AVAILABLE;

/// Insert `separator` every 3 digits from the right of an unsigned digit string
fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result
}

/// Formats an amount in Vietnamese dong, e.g. `1.234.567 ₫`.
///
/// VND has no minor unit, so values are rounded half away from zero.
/// A non-breaking space separates the amount from the symbol.
///
/// ```rust,ignore
/// use installment_admin::shared::number_format::format_vnd;
/// assert_eq!(format_vnd(1234567.0), "1.234.567\u{a0}₫");
/// ```
pub fn format_vnd(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}\u{a0}₫", sign, group_thousands(&digits, '.'))
}

/// Same as [`format_vnd`], with "N/A" for a missing amount
pub fn format_vnd_opt(value: Option<f64>) -> String {
    value.map(format_vnd).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
