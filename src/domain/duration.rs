use serde::Deserialize;

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;
const DAYS_PER_YEAR: u64 = 365;

/// Upper bound for fractional second digits; milliseconds are the finest unit tracked.
pub const MAX_SECONDS_DECIMAL_DIGITS: u8 = 3;

/// Options for [`format_duration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FormatOptions {
    /// Number of fractional digits shown for seconds (clamped to 0..=3).
    #[serde(default = "default_seconds_decimal_digits")]
    pub seconds_decimal_digits: u8,
    /// Keep a fraction of all zeros (`0:05.0`) instead of stripping it (`0:05`).
    #[serde(default)]
    pub keep_decimals_on_whole_seconds: bool,
}

fn default_seconds_decimal_digits() -> u8 {
    1
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            seconds_decimal_digits: default_seconds_decimal_digits(),
            keep_decimals_on_whole_seconds: false,
        }
    }
}

/// Formats milliseconds in colon-delimited clock notation.
///
/// Units are `years:days:hours:minutes:seconds`. Leading units above minutes are
/// omitted while zero, minutes are always present, and every unit after the first
/// is zero-padded to two digits. Seconds are floored to the configured number of
/// fractional digits.
///
/// ```
/// use lapwatch::domain::duration::{format_duration, FormatOptions};
///
/// let opts = FormatOptions::default();
/// assert_eq!(format_duration(0, &opts), "0:00");
/// assert_eq!(format_duration(61_000, &opts), "1:01");
/// assert_eq!(format_duration(3_723_400, &opts), "1:02:03.4");
/// ```
pub fn format_duration(millis: u64, options: &FormatOptions) -> String {
    let days = millis / MILLIS_PER_DAY;
    let hours = (millis % MILLIS_PER_DAY) / MILLIS_PER_HOUR;
    let minutes = (millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;

    let mut parts: Vec<String> = Vec::with_capacity(5);
    push_unit(&mut parts, days / DAYS_PER_YEAR, false);
    push_unit(&mut parts, days % DAYS_PER_YEAR, false);
    push_unit(&mut parts, hours, false);
    push_unit(&mut parts, minutes, true);

    let seconds = seconds_string(millis % MILLIS_PER_MINUTE, options);
    parts.push(pad_whole_digits(seconds, 2));

    parts.join(":")
}

fn push_unit(parts: &mut Vec<String>, value: u64, always: bool) {
    if parts.is_empty() && value == 0 && !always {
        return;
    }
    let min_len = if parts.is_empty() { 1 } else { 2 };
    parts.push(pad_whole_digits(value.to_string(), min_len));
}

fn pad_whole_digits(value: String, min_len: usize) -> String {
    let whole_len = value.find('.').unwrap_or(value.len());
    if whole_len >= min_len {
        value
    } else {
        format!("{}{value}", "0".repeat(min_len - whole_len))
    }
}

/// Seconds within the current minute, floored to the requested precision.
fn seconds_string(millis_in_minute: u64, options: &FormatOptions) -> String {
    let digits = options.seconds_decimal_digits.min(MAX_SECONDS_DECIMAL_DIGITS) as u32;
    let scale = 10u64.pow(digits);
    let scaled = millis_in_minute * scale / MILLIS_PER_SECOND;
    let whole = scaled / scale;
    if digits == 0 {
        return whole.to_string();
    }

    let fraction = scaled % scale;
    if fraction == 0 && !options.keep_decimals_on_whole_seconds {
        whole.to_string()
    } else {
        format!("{whole}.{fraction:0width$}", width = digits as usize)
    }
}
