/// Whole-dollar USD with thousands separators, e.g. `$1,234,567`.
/// Non-finite amounts render as `$0`.
pub fn format_currency(amount: f64) -> String {
    let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_currency;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1_000.0), "$1,000");
        assert_eq!(format_currency(100_800.0), "$100,800");
        assert_eq!(format_currency(2_000_000.0), "$2,000,000");
    }

    #[test]
    fn rounds_to_whole_dollars() {
        assert_eq!(format_currency(85_679.5), "$85,680");
        assert_eq!(format_currency(12.49), "$12");
        assert_eq!(format_currency(-0.4), "$0");
    }

    #[test]
    fn negative_and_non_finite_amounts() {
        assert_eq!(format_currency(-5_000.0), "-$5,000");
        assert_eq!(format_currency(f64::NAN), "$0");
        assert_eq!(format_currency(f64::INFINITY), "$0");
    }
}
