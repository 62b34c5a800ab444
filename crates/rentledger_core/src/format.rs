//! Number formatting helpers for report rendering

use rust_decimal::Decimal;

/// Format a monetary value with thousands separators and two decimal places,
/// e.g. `1234567.5` -> `1,234,567.50`.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => (text.as_str(), ""),
    };

    // Thousands separators, walking the digits in reverse
    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    let cents = format!("{frac_part:0<2}");
    if negative {
        format!("-{int_grouped}.{cents}")
    } else {
        format!("{int_grouped}.{cents}")
    }
}

/// Format a percentage with one decimal place, e.g. `12.5%`.
pub fn format_pct1(value: Decimal) -> String {
    format!("{:.1}%", value.round_dp(1))
}

/// Format a percentage with two decimal places, e.g. `12.50%`.
pub fn format_pct2(value: Decimal) -> String {
    format!("{:.2}%", value.round_dp(2))
}

/// Format a growth percentage with an explicit sign, e.g. `+12.34%`.
pub fn format_signed_pct2(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    if rounded.is_sign_negative() {
        format!("{rounded:.2}%")
    } else {
        format!("+{rounded:.2}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount_grouping() {
        assert_eq!(format_amount(dec!(0)), "0.00");
        assert_eq!(format_amount(dec!(7.5)), "7.50");
        assert_eq!(format_amount(dec!(942.5)), "942.50");
        assert_eq!(format_amount(dec!(4500)), "4,500.00");
        assert_eq!(format_amount(dec!(1234567.891)), "1,234,567.89");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(dec!(-1250.75)), "-1,250.75");
        // Negative zero after rounding stays unsigned
        assert_eq!(format_amount(dec!(-0.001)), "0.00");
    }

    #[test]
    fn test_format_percentages() {
        assert_eq!(format_pct1(dec!(50)), "50.0%");
        assert_eq!(format_pct1(dec!(33.333)), "33.3%");
        assert_eq!(format_pct2(dec!(12)), "12.00%");
        assert_eq!(format_signed_pct2(dec!(11.111)), "+11.11%");
        assert_eq!(format_signed_pct2(dec!(-5.5)), "-5.50%");
    }
}
