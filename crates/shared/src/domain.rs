use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// Cart total as sent by the server: either a decimal string or a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CartTotal {
    Number(f64),
    Text(String),
}

impl CartTotal {
    /// Numeric value of the total. Text is read leniently: the longest leading
    /// decimal prefix counts and trailing garbage is ignored.
    pub fn amount(&self) -> Option<f64> {
        match self {
            Self::Number(value) => value.is_finite().then_some(*value),
            Self::Text(raw) => parse_leading_decimal(raw),
        }
    }
}

fn parse_leading_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// What the mini cart preview shows after a successful add.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub items_count: u64,
    pub total: f64,
}

impl CartSummary {
    /// "N items - £T.TT". Half-cent ties round up, so `2.625` reads `2.63`.
    pub fn line(&self, currency_symbol: &str) -> String {
        format!(
            "{} items - {currency_symbol}{:.2}",
            self.items_count,
            rounded_cents(self.total)
        )
    }
}

// `{:.2}` alone rounds exact binary ties to even.
fn rounded_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
