//! Display strings for the report. Every numeric field becomes a fixed
//! precision number followed by a unit or a comparison phrase.

use serde_json::Value;

pub const UNKNOWN: &str = "Unknown";

/// `value` with `decimals` places and comma thousands separators.
pub fn with_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

fn or_unknown(value: Option<f64>, render: impl FnOnce(f64) -> String) -> String {
    value.map(render).unwrap_or_else(|| UNKNOWN.to_string())
}

pub fn star_temperature(steff: Option<f64>) -> String {
    or_unknown(steff, |t| {
        format!(
            "{} Kelvin (Earth's Sun is about 5,800 Kelvin)",
            with_thousands(t, 0)
        )
    })
}

pub fn star_size(sradius: Option<f64>) -> String {
    or_unknown(sradius, |r| format!("{r:.2} times the size of Earth's Sun"))
}

pub fn star_mass(smass: Option<f64>) -> Option<String> {
    smass.map(|m| format!("{m:.2} times the mass of Earth's Sun"))
}

pub fn star_age(sage: Option<f64>) -> Option<String> {
    sage.map(|a| format!("{a:.2} billion years"))
}

pub fn ra_dec(ra: Option<f64>, dec: Option<f64>) -> String {
    format!(
        "RA: {}, Dec: {}",
        or_unknown(ra, |v| format!("{v:.4}")),
        or_unknown(dec, |v| format!("{v:.4}"))
    )
}

/// Textual epochs keep their date token, numeric ones become "Day N".
/// No calendar conversion is attempted.
pub fn discovery_date(epoch: Option<&Value>) -> String {
    match epoch {
        Some(Value::String(text)) => text
            .split_whitespace()
            .next()
            .unwrap_or(UNKNOWN)
            .to_string(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(day) => format!("Day {}", day.trunc() as i64),
            None => UNKNOWN.to_string(),
        },
        _ => UNKNOWN.to_string(),
    }
}

pub fn orbit(period: Option<f64>) -> String {
    or_unknown(period, |p| format!("Circles its star every {p:.2} days"))
}

pub fn size(prad: Option<f64>) -> String {
    or_unknown(prad, |r| format!("About {r:.1} times bigger than Earth"))
}

pub fn temperature(eqt: Option<f64>) -> String {
    or_unknown(eqt, |t| format!("Approximately {t:.0} Kelvin"))
}

pub fn sunlight_received(insol: Option<f64>) -> String {
    or_unknown(insol, |s| format!("{s:.0} times more than Earth gets"))
}

pub fn transit_duration(duration: Option<f64>) -> String {
    or_unknown(duration, |d| format!("{d:.2} hours"))
}

pub fn transit_depth(depth: Option<f64>) -> String {
    or_unknown(depth, |d| format!("{d:.2} parts per million"))
}
