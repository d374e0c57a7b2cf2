//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Format a currency amount with thousands separators and two decimals.
/// The sign is kept in front of the symbol: -1234.5 → "-$1,234.50".
pub fn format_money(amount: f64, symbol: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();

    let whole = abs.trunc() as u64;
    let cents = ((abs - abs.trunc()) * 100.0).round() as u64;

    // carry when cents round up to 100
    let (whole, cents) = if cents == 100 { (whole + 1, 0) } else { (whole, cents) };

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}{}.{:02}", sign, symbol, grouped, cents)
}

/// Format a burn percentage: one decimal, trailing '%'.
pub fn format_percent(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Format raw hours with one decimal ("8.0 h").
pub fn format_hours(hours: f64) -> String {
    format!("{:.1} h", hours)
}
