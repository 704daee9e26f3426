//! Amount parsing and display
//!
//! User-typed amounts are parsed leniently: the longest numeric prefix is
//! taken and anything after it ignored, so `"250 rs"` reads as `250`. Absent,
//! unparseable and zero amounts all collapse to `0`, the "payer enters the
//! amount" sentinel.

/// Symbol prefixed to displayed amounts
pub const RUPEE: &str = "₹";

/// What [`format_currency`] shows for NaN or infinite input
pub const ZERO_DISPLAY: &str = "₹0.00";

/// Parse the leading decimal number of `raw`
///
/// Leading whitespace is skipped. Accepts an optional sign, digits with an
/// optional fraction, an optional exponent, or the literal `Infinity`.
/// Returns `None` when no number starts the string.
pub fn parse_leading_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s.get(end..).is_some_and(|rest| rest.starts_with("Infinity")) {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    end += count_digits(bytes, end);
    let int_part = s.get(int_start..end).unwrap_or("");

    let mut frac_part = "";
    if bytes.get(end) == Some(&b'.') {
        let frac_digits = count_digits(bytes, end + 1);
        frac_part = s.get(end + 1..end + 1 + frac_digits).unwrap_or("");
        end += 1 + frac_digits;
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut exponent = String::new();
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut cursor = end + 1;
        let exp_negative = bytes.get(cursor) == Some(&b'-');
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let exp_digits = count_digits(bytes, cursor);
        if exp_digits > 0 {
            exponent = format!(
                "e{}{}",
                if exp_negative { "-" } else { "" },
                s.get(cursor..cursor + exp_digits).unwrap_or("0")
            );
        }
    }

    let normalized = format!(
        "{}{}.{}{}",
        if negative { "-" } else { "" },
        if int_part.is_empty() { "0" } else { int_part },
        if frac_part.is_empty() { "0" } else { frac_part },
        exponent
    );
    normalized.parse().ok()
}

fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map(|rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
        .unwrap_or(0)
}

/// Lenient parse of a user-typed amount
///
/// Non-numeric or non-finite input yields `0`; negative values clamp to `0`.
pub fn parse_amount(raw: &str) -> f64 {
    match parse_leading_number(raw) {
        Some(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Amount as embedded in a payload: exactly two decimal places
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Amount as shown to people: rupee symbol, Indian digit grouping, 0–2
/// fraction digits (`₹1,00,000`, `₹1,234.5`)
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return ZERO_DISPLAY.to_string();
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let rupees = cents / 100;
    let paise = cents % 100;

    let fraction = if paise == 0 {
        String::new()
    } else if paise % 10 == 0 {
        format!(".{}", paise / 10)
    } else {
        format!(".{:02}", paise)
    };

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}{RUPEE}{}{fraction}",
        group_indian(&rupees.to_string())
    )
}

/// Group digits as lakh/crore: last three together, then pairs
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
