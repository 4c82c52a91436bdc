/// Inserts a comma every three digits of a plain digit string.
pub fn format_with_commas(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `₹1,234.50`, two decimals, sign before the symbol.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, format_with_commas(whole), cents)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_with_commas("0"), "0");
        assert_eq!(format_with_commas("999"), "999");
        assert_eq!(format_with_commas("1000"), "1,000");
        assert_eq!(format_with_commas("12345678"), "12,345,678");
    }

    #[test]
    fn currency_has_two_decimals() {
        assert_eq!(format_currency(150.0, "$"), "$150.00");
        assert_eq!(format_currency(1234.5, "₹"), "₹1,234.50");
        assert_eq!(format_currency(-12.5, "€"), "-€12.50");
        assert_eq!(format_currency(-0.001, "$"), "$0.00");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(85.0), "85.0%");
        assert_eq!(format_percent(70.04), "70.0%");
    }

    #[test]
    fn huge_amounts_keep_every_digit() {
        assert_eq!(
            format_currency(1e20, "$"),
            "$100,000,000,000,000,000,000.00"
        );
        assert!(format_currency(1e300, "₹").starts_with("₹1,000,000,"));
        assert!(format_currency(1e300, "₹").ends_with(".00"));
    }
}
