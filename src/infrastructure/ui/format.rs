use crate::domain::ledger::{BudgetSnapshot, entry_percentage};

/// Shown wherever a figure cannot be displayed: a percentage with no income
/// to compare against, or an amount that is not finite.
pub const PERCENTAGE_PLACEHOLDER: &str = "---";

/// Two decimals with `,` thousands grouping: `1234.5` -> `1,234.50`.
///
/// Totals that overflowed to infinity or NaN render as the placeholder.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return PERCENTAGE_PLACEHOLDER.to_string();
    }
    let fixed = format!("{:.2}", value);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) if rest.bytes().any(|b| b.is_ascii_digit() && b != b'0') => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", fixed.as_str()),
    };
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}.{}", sign, grouped, fraction)
}

pub fn format_percentage(percentage: Option<i32>) -> String {
    match percentage {
        Some(p) => format!("{}%", p),
        None => PERCENTAGE_PLACEHOLDER.to_string(),
    }
}

/// Label for the overall spend percentage.
pub fn snapshot_percentage_label(snapshot: &BudgetSnapshot) -> String {
    format_percentage(snapshot.applicable_percentage())
}

/// Label for one expense's share of income.
pub fn entry_percentage_label(value: f64, income_total: f64) -> String {
    format_percentage(entry_percentage(value, income_total))
}
