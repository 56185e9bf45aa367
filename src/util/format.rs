//! Display helpers shared by the results page and the text report.

/// Formats an amount with a dollar sign and thousands separators.
/// Whole amounts drop the cents; anything else keeps two decimals.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$—".to_string();
    }

    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let mut out = String::new();
    if negative && cents > 0 {
        out.push('-');
    }
    out.push('$');
    out.push_str(&group_thousands(whole));
    if fraction > 0 {
        out.push_str(&format!(".{fraction:02}"));
    }
    out
}

/// Rounds to the nearest whole unit before formatting. Used for per-person
/// figures only.
pub fn format_currency_rounded(amount: f64) -> String {
    format_currency(amount.round())
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `1 day`, `3 days`.
pub fn pluralize(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_uses_thousands_separators() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(500.0), "$500");
        assert_eq!(format_currency(11150.0), "$11,150");
        assert_eq!(format_currency(1234567.0), "$1,234,567");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(-4100.0), "-$4,100");
    }

    #[test]
    fn per_person_rounds_to_nearest_unit() {
        assert_eq!(format_currency_rounded(1114.5), "$1,115");
        assert_eq!(format_currency_rounded(1114.49), "$1,114");
    }

    #[test]
    fn pluralizes() {
        assert_eq!(pluralize(1, "day", "days"), "1 day");
        assert_eq!(pluralize(3, "night", "nights"), "3 nights");
    }
}
