use rust_decimal::{Decimal, RoundingStrategy};

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats an amount like `₹25,000` or `-₹1,234.5`, with at most two decimals.
pub fn format_amount(value: Decimal, currency: char) -> String {
    let rounded = value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = rounded.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };
    match fraction {
        Some(fraction) => format!("{sign}{currency}{}.{fraction}", group_thousands(whole)),
        None => format!("{sign}{currency}{}", group_thousands(whole)),
    }
}

/// Formats an amount rounded to whole units, as shown for per-person shares.
pub fn format_rounded(value: Decimal, currency: char) -> String {
    format_amount(
        value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        currency,
    )
}
