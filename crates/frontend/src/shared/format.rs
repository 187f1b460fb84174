//! Price formatting for the storefront.

/// Formats a price with a dollar sign, thousands separators and two decimals.
/// 1234.5 becomes "$1,234.50".
pub fn format_price(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());

    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1).copied().unwrap_or("00");

    // Insert a comma every 3 digits, counting from the right
    let mut grouped = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    let integer_grouped = grouped.chars().rev().collect::<String>();

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, integer_grouped, decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1234.5), "$1,234.50");
        assert_eq!(format_price(1234567.89), "$1,234,567.89");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(9.99), "$9.99");
    }

    #[test]
    fn test_format_price_rounds() {
        assert_eq!(format_price(19.996), "$20.00");
        assert_eq!(format_price(2.346), "$2.35");
    }

    #[test]
    fn test_format_price_negative() {
        assert_eq!(format_price(-1234.5), "-$1,234.50");
    }
}
