//! Tests for leading timestamp detection

use crate::recipe::ClockEffect;

#[test]
fn test_detect_colon_form() {
    assert_eq!(
        ClockEffect::detect("00:01:30 X=1"),
        Some(ClockEffect::SetClock(90))
    );
    assert_eq!(
        ClockEffect::detect("2:00:00"),
        Some(ClockEffect::SetClock(7200))
    );
}

#[test]
fn test_detect_bare_integer() {
    assert_eq!(
        ClockEffect::detect("45 X=1"),
        Some(ClockEffect::AdvanceClock(45))
    );
    assert_eq!(
        ClockEffect::detect("007"),
        Some(ClockEffect::AdvanceClock(7))
    );
}

#[test]
fn test_detect_requires_leading_digits() {
    assert_eq!(ClockEffect::detect("X=1 10"), None);
    assert_eq!(ClockEffect::detect(":10:00:00"), None);
    assert_eq!(ClockEffect::detect("t10"), None);
}

#[test]
fn test_digits_glued_to_letters_still_count() {
    // The token only has to start the line, not stand alone
    assert_eq!(
        ClockEffect::detect("10s X=1"),
        Some(ClockEffect::AdvanceClock(10))
    );
}

#[test]
fn test_minutes_and_seconds_are_not_range_checked() {
    assert_eq!(
        ClockEffect::detect("0:90:90"),
        Some(ClockEffect::SetClock(5490))
    );
}

#[test]
fn test_out_of_range_components_saturate() {
    assert_eq!(
        ClockEffect::detect("99999999999999999999999 X=1"),
        Some(ClockEffect::AdvanceClock(u64::MAX))
    );
    assert_eq!(
        ClockEffect::detect("1:99999999999999999999999:0"),
        Some(ClockEffect::SetClock(u64::MAX))
    );
    assert_eq!(
        ClockEffect::detect("18446744073709551616:0:0"),
        Some(ClockEffect::SetClock(u64::MAX))
    );
}

#[test]
fn test_apply_set_and_advance() {
    assert_eq!(ClockEffect::SetClock(30).apply(600), 30);
    assert_eq!(ClockEffect::AdvanceClock(30).apply(600), 630);
}

#[test]
fn test_apply_saturates() {
    assert_eq!(ClockEffect::AdvanceClock(10).apply(u64::MAX - 5), u64::MAX);
    assert_eq!(
        ClockEffect::detect("18446744073709551615:0:0"),
        Some(ClockEffect::SetClock(u64::MAX))
    );
}
