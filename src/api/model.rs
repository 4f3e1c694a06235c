//! Wire types for the dashboard server endpoints.

use serde::{Deserialize, Serialize};

/// A single order as posted to `/order`.
///
/// Field values come from the form exactly as typed. Quantity and price are
/// parsed from free text; an unparsable value goes out as JSON `null`
/// instead of being rejected client-side. What to do with such a value is
/// the server's call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    pub customer: String,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
}

impl OrderRequest {
    /// Build a request from raw form field text.
    pub fn from_fields(customer: &str, quantity: &str, price: &str) -> Self {
        Self {
            customer: customer.to_string(),
            quantity: parse_quantity(quantity),
            price: parse_price(price),
        }
    }
}

/// Parse the quantity field: an optional sign followed by the longest run
/// of leading digits, so `"7.5"` reads as `7` and `"12abc"` as `12`.
/// `None` when no digits lead the text.
pub fn parse_quantity(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let (rest, sign) = match trimmed.as_bytes().first() {
        Some(b'-') => (&trimmed[1..], -1),
        Some(b'+') => (&trimmed[1..], 1),
        _ => (trimmed, 1),
    };
    let digits = &rest[..count_digits(rest.as_bytes())];
    digits.parse::<i64>().ok().map(|v| sign * v)
}

/// Parse the price field from the longest leading decimal prefix, so
/// `"12.5kg"` reads as `12.5`. `None` when no number leads the text.
pub fn parse_price(text: &str) -> Option<f64> {
    numeric_prefix(text.trim()).parse().ok()
}

/// Longest leading run of `text` that reads as a decimal number, with an
/// optional exponent taken only when it is complete (`"1e"` stops at `"1"`).
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos = 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    &text[..pos]
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Response body shared by `/order` and `/transfer`.
///
/// Extra fields are ignored; a missing `success` counts as failure.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ServerReply {
    #[serde(default)]
    pub success: bool,
}
