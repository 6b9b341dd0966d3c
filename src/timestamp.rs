use std::fmt;
use anyhow::{Result, Context};

// @module: SRT timestamp conversions and normalization

/// A decomposed SRT timestamp.
///
/// Hours are unbounded; minutes and seconds produced by `from_millis` are
/// always in [0, 59] and milliseconds in [0, 999].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    // @field: Hours (no upper bound)
    pub hours: u64,

    // @field: Minutes
    pub minutes: u64,

    // @field: Seconds
    pub seconds: u64,

    // @field: Milliseconds
    pub milliseconds: u64,
}

/// The zero timestamp, 00:00:00,000
pub const ZERO_TS: Timestamp = Timestamp {
    hours: 0,
    minutes: 0,
    seconds: 0,
    milliseconds: 0,
};

impl Timestamp {
    /// Decompose a millisecond value into hours/minutes/seconds/milliseconds
    pub fn from_millis(ms: u64) -> Self {
        Timestamp {
            hours: ms / 3_600_000,
            minutes: (ms % 3_600_000) / 60_000,
            seconds: (ms % 60_000) / 1_000,
            milliseconds: ms % 1_000,
        }
    }

    /// Total milliseconds represented by this timestamp
    pub fn to_millis(&self) -> u64 {
        self.hours * 3_600_000 + self.minutes * 60_000 + self.seconds * 1_000 + self.milliseconds
    }

    /// Total seconds as a decimal value, rounded to 3 decimal places to
    /// counter binary floating-point drift (00:01:20,460 yields exactly 80.46).
    pub fn to_seconds(&self) -> f64 {
        let result = self.milliseconds as f64 * 0.001
            + self.seconds as f64
            + 60.0 * self.minutes as f64
            + 3600.0 * self.hours as f64;
        (result * 1000.0).round() / 1000.0
    }

    /// Parse a lenient SRT timestamp string.
    ///
    /// Accepts `,` or `.` as the fractional separator, 1- or 2-digit
    /// hour/minute/second fields and a 1-4 digit fraction. The string is
    /// normalized with `correct_format` before the fields are read.
    pub fn parse(time: &str) -> Result<Self> {
        let canonical = correct_format(time);
        let parts: Vec<&str> = canonical.split(&[':', ','][..]).collect();

        let hours: u64 = parts.first().unwrap_or(&"0").parse()
            .with_context(|| format!("Failed to parse hours in timestamp: {}", time))?;
        let minutes: u64 = parts.get(1).unwrap_or(&"0").parse()
            .with_context(|| format!("Failed to parse minutes in timestamp: {}", time))?;
        let seconds: u64 = parts.get(2).unwrap_or(&"0").parse()
            .with_context(|| format!("Failed to parse seconds in timestamp: {}", time))?;
        let milliseconds: u64 = parts.get(3).unwrap_or(&"0").parse()
            .with_context(|| format!("Failed to parse milliseconds in timestamp: {}", time))?;

        Ok(Timestamp { hours, minutes, seconds, milliseconds })
    }

    /// Render a millisecond value as a canonical SRT timestamp
    pub fn format_millis(ms: u64) -> String {
        Self::from_millis(ms).to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02},{:03}",
            self.hours, self.minutes, self.seconds, self.milliseconds
        )
    }
}

/// Normalize an inconsistently formatted SRT timestamp to the canonical
/// `HH:MM:SS,fff` shape with 2-2-2-3 digit widths.
///
/// Examples:
///   00:00:28.9670 becomes 00:00:28,967
///   00:00:28.96   becomes 00:00:28,960
///   0:00:10,500   becomes 00:00:10,500
pub fn correct_format(time: &str) -> String {
    let normalized = time.replace('.', ",");

    // Handle milliseconds: fraction-of-a-second semantics, so a short
    // fraction pads on the right (.96 means 960ms) and a long one is
    // truncated without rounding.
    let (front, ms) = normalized.split_once(',').unwrap_or((normalized.as_str(), "0"));
    let millisecond = fixed_str_digit(3, ms, true);

    // Handle hour/minute/second: short fields pad on the left
    let fields: Vec<&str> = front.split(':').collect();
    let hour = fixed_str_digit(2, fields.first().unwrap_or(&"0"), false);
    let minute = fixed_str_digit(2, fields.get(1).unwrap_or(&"0"), false);
    let second = fixed_str_digit(2, fields.get(2).unwrap_or(&"0"), false);

    format!("{}:{}:{},{}", hour, minute, second, millisecond)
}

// Make sure a digit string is exactly `width` long: truncate from the end
// when too long, pad with '0' when too short (at the end when pad_end,
// otherwise at the start).
fn fixed_str_digit(width: usize, digits: &str, pad_end: bool) -> String {
    if digits.len() > width {
        return digits[..width].to_string();
    }
    let mut fixed = String::with_capacity(width);
    if pad_end {
        fixed.push_str(digits);
        while fixed.len() < width {
            fixed.push('0');
        }
    } else {
        for _ in 0..(width - digits.len()) {
            fixed.push('0');
        }
        fixed.push_str(digits);
    }
    fixed
}
