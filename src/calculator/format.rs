//! Display formatting for calculator and listing figures

/// Format a dollar amount with thousands separators and cents: `$22,196.40`
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// Format a whole-dollar price: `$2,500,000`
pub fn format_price(value: u64) -> String {
    format!("${}", group_thousands(value))
}

/// Format a rate as a percentage with one decimal: 0.08 -> `8.0%`
pub fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(22_196.4), "$22,196.40");
        assert_eq!(format_currency(-1_234_567.891), "-$1,234,567.89");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(800), "$800");
        assert_eq!(format_price(2_500_000), "$2,500,000");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(0.08), "8.0%");
        assert_eq!(format_rate(0.12), "12.0%");
    }
}
