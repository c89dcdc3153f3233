//! en-US number formatting for counts and ratings.

/// `1234567` -> `"1,234,567"`
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Rounds to two decimals and drops trailing zeros: `4.0` -> `"4"`,
/// `3.456` -> `"3.46"`.
pub fn format_rating(value: f64) -> String {
    let rounded = format!("{:.2}", (value * 100.0).round() / 100.0);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(15_334_283), "15,334,283");
        assert_eq!(format_count(100_000), "100,000");
    }

    #[test]
    fn ratings_round_to_two_places() {
        assert_eq!(format_rating(4.27), "4.27");
        assert_eq!(format_rating(3.456), "3.46");
        assert_eq!(format_rating(4.5), "4.5");
        assert_eq!(format_rating(4.0), "4");
        assert_eq!(format_rating(0.0), "0");
    }
}
