//! Lenient parsers for free-text money and duration fields.

use super::error::ParseError;
use crate::constants::WEEKS_PER_MONTH;

const CURRENCY_SYMBOLS: [char; 4] = ['₹', '$', '€', '£'];

/// Parses `"₹2,00,000"` or a `"₹2,00,000 - ₹5,00,000"` range (averaged).
pub fn parse_amount(text: &str) -> Result<f64, ParseError> {
    let cleaned: String = text
        .chars()
        .filter(|c| *c != ',' && !CURRENCY_SYMBOLS.contains(c))
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return Err(ParseError::Empty);
    }

    match cleaned.split_once('-') {
        Some((low, high)) => {
            let low = parse_number(low).map_err(|_| ParseError::InvalidRange {
                value: text.to_string(),
            })?;
            let high = parse_number(high).map_err(|_| ParseError::InvalidRange {
                value: text.to_string(),
            })?;
            Ok((low + high) / 2.0)
        }
        None => parse_number(cleaned),
    }
}

fn parse_number(text: &str) -> Result<f64, ParseError> {
    let text = text.trim();
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber {
            value: text.to_string(),
        })
}

/// Converts `"6 months"` / `"12 weeks"` to weeks.
///
/// All digits in the text are concatenated, so `"1-2 months"` reads as 12 months.
pub fn parse_duration_weeks(text: &str) -> Result<f64, ParseError> {
    let lower = text.trim().to_lowercase();
    if lower.is_empty() {
        return Err(ParseError::Empty);
    }

    let per_unit = if lower.contains("month") {
        WEEKS_PER_MONTH
    } else if lower.contains("week") {
        1.0
    } else {
        return Err(ParseError::UnknownUnit {
            value: text.to_string(),
        });
    };

    let digits: String = lower.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(ParseError::NoDigits {
            value: text.to_string(),
        });
    }

    let count: u64 = digits.parse().map_err(|_| ParseError::InvalidNumber {
        value: text.to_string(),
    })?;

    Ok(count as f64 * per_unit)
}

/// Formats an amount with thousands separators and no decimals, e.g. `20,000`.
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if negative { format!("-{out}") } else { out }
}
