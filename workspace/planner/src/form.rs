//! Raw form values and their lenient numeric coercion.
//!
//! Form inputs are free text. Numbers are read the way a browser's
//! `parseFloat`/`parseInt` read them (longest numeric prefix, leading
//! whitespace skipped) and any result that is missing, non-finite or zero is
//! replaced by the field's default.

use common::ApplianceEntry;

pub const DEFAULT_APPLIANCE_NAME: &str = "Appliance";
pub const DEFAULT_RATE: f64 = 8.0;
pub const DEFAULT_DAYS: i64 = 30;

/// Longest decimal prefix of `text`, if any.
fn float_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        // "5." and "5.e3" keep their dot, a lone "." does not
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // An exponent only counts when it has digits
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Longest signed decimal integer prefix of `text`, if any.
fn int_prefix(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    // Only overflow can fail here; clamp like a huge number would
    let saturated = if bytes[0] == b'-' { i64::MIN } else { i64::MAX };
    Some(s[..end].parse::<i64>().unwrap_or(saturated))
}

/// Parses a float field, falling back to `default` for unparseable or zero input.
pub fn parse_float_or(text: &str, default: f64) -> f64 {
    match float_prefix(text) {
        Some(value) if value.is_finite() && value != 0.0 => value,
        _ => default,
    }
}

/// Parses an integer field, falling back to `default` for unparseable or zero input.
pub fn parse_int_or(text: &str, default: i64) -> i64 {
    match int_prefix(text) {
        Some(value) if value != 0 => value,
        _ => default,
    }
}

/// The appliance fields exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplianceDraft {
    pub name: String,
    pub power_w: String,
    pub hours_per_day: String,
    pub days: String,
}

impl ApplianceDraft {
    pub fn new(
        name: impl Into<String>,
        power_w: impl Into<String>,
        hours_per_day: impl Into<String>,
        days: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            power_w: power_w.into(),
            hours_per_day: hours_per_day.into(),
            days: days.into(),
        }
    }

    /// Coerces the draft into an entry. Never fails.
    pub fn to_entry(&self) -> ApplianceEntry {
        let name = if self.name.is_empty() {
            DEFAULT_APPLIANCE_NAME.to_string()
        } else {
            self.name.clone()
        };

        ApplianceEntry {
            name,
            power_w: parse_float_or(&self.power_w, 0.0),
            hours_per_day: parse_float_or(&self.hours_per_day, 0.0),
            days: parse_int_or(&self.days, DEFAULT_DAYS),
        }
    }
}

/// The billing fields exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillingForm {
    pub existing_kwh: String,
    pub rate: String,
    pub days_in_month: String,
}

/// Billing fields after coercion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillingInputs {
    pub existing_kwh: f64,
    pub rate: f64,
    pub days_in_month: i64,
}

impl BillingForm {
    pub fn new(
        existing_kwh: impl Into<String>,
        rate: impl Into<String>,
        days_in_month: impl Into<String>,
    ) -> Self {
        Self {
            existing_kwh: existing_kwh.into(),
            rate: rate.into(),
            days_in_month: days_in_month.into(),
        }
    }

    pub fn to_inputs(&self) -> BillingInputs {
        BillingInputs {
            existing_kwh: parse_float_or(&self.existing_kwh, 0.0),
            rate: parse_float_or(&self.rate, DEFAULT_RATE),
            days_in_month: parse_int_or(&self.days_in_month, DEFAULT_DAYS),
        }
    }
}
