//! US-locale currency formatting

/// Format an amount as US dollars: `$` symbol, thousands separators and
/// exactly two decimal places (`$1,234.50`, `-$75.00`).
///
/// Non-finite input formats as `$0.00`; a display helper never fails.
pub fn format_currency(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let cents = (value.abs() * 100.0).round();
    let whole = (cents / 100.0).trunc() as u64;
    let fraction = (cents % 100.0) as u64;
    let sign = if value < 0.0 && cents > 0.0 { "-" } else { "" };

    format!("{sign}${}.{fraction:02}", group_thousands(whole))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
