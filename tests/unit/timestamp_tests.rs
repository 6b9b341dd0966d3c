/*!
 * Tests for timestamp conversions and normalization
 */

use anyhow::Result;
use subedit::timestamp::{correct_format, Timestamp, ZERO_TS};

/// Test millisecond round trip through the decomposed form
#[test]
fn test_to_millis_withFromMillisValues_shouldRoundTrip() {
    for ms in [0u64, 1, 999, 1_000, 59_999, 60_000, 3_599_999, 3_600_000, 5_025_678, 359_999_999] {
        let ts = Timestamp::from_millis(ms);
        assert_eq!(ts.to_millis(), ms);
    }
}

/// Test that from_millis keeps minutes/seconds in range
#[test]
fn test_from_millis_withLargeValue_shouldDecomposeInRange() {
    let ts = Timestamp::from_millis(5_025_678);
    assert_eq!(ts.hours, 1);
    assert_eq!(ts.minutes, 23);
    assert_eq!(ts.seconds, 45);
    assert_eq!(ts.milliseconds, 678);
}

/// Test decimal seconds are rounded against floating point drift
#[test]
fn test_to_seconds_withDriftProneValue_shouldRoundToThreeDecimals() -> Result<()> {
    let ts = Timestamp::parse("00:01:20,460")?;
    assert_eq!(ts.to_seconds(), 80.46);
    Ok(())
}

/// Test parsing and formatting a canonical timestamp
#[test]
fn test_parse_withValidTimestamp_shouldParseAndFormat() -> Result<()> {
    let ts = Timestamp::parse("01:23:45,678")?;
    assert_eq!(ts.to_millis(), 5_025_678);
    assert_eq!(ts.to_string(), "01:23:45,678");
    Ok(())
}

/// Test the dot separator dialect is accepted
#[test]
fn test_parse_withDotSeparator_shouldParse() -> Result<()> {
    let ts = Timestamp::parse("00:00:28.967")?;
    assert_eq!(ts.to_millis(), 28_967);
    Ok(())
}

/// Test long fractions truncate and short fractions right-pad
#[test]
fn test_correct_format_withRaggedFractions_shouldNormalize() {
    assert_eq!(correct_format("00:00:28.9670"), "00:00:28,967");
    assert_eq!(correct_format("00:00:28.967"), "00:00:28,967");
    assert_eq!(correct_format("00:00:28.96"), "00:00:28,960");
    assert_eq!(correct_format("00:00:28.9"), "00:00:28,900");
    assert_eq!(correct_format("00:00:28,96"), "00:00:28,960");
    assert_eq!(correct_format("00:00:28,0"), "00:00:28,000");
    assert_eq!(correct_format("00:00:28,01"), "00:00:28,010");
}

/// Test short hour fields left-pad
#[test]
fn test_correct_format_withSingleDigitHour_shouldLeftPad() {
    assert_eq!(correct_format("0:00:10,500"), "00:00:10,500");
    assert_eq!(correct_format("1:2:3,4"), "01:02:03,400");
}

/// Test formatting keeps hours above 99 rather than wrapping
#[test]
fn test_format_millis_withOver99Hours_shouldNotWrap() {
    let ms = 100 * 3_600_000 + 90_000 + 1; // 100:01:30,001
    assert_eq!(Timestamp::format_millis(ms), "100:01:30,001");
}

/// Test the zero constant
#[test]
fn test_zero_ts_shouldBeAllZero() {
    assert_eq!(ZERO_TS.to_millis(), 0);
    assert_eq!(ZERO_TS.to_string(), "00:00:00,000");
}
