//! Tests for the line scan, clock threading and file loading

use super::{create_temp_file, create_test_recipe, triples};
use crate::error::RecipeError;
use crate::recipe::{RecipeParser, parse};
use std::path::Path;

fn t(time: u64, name: &str, value: f64) -> (u64, String, f64) {
    (time, name.to_string(), value)
}

#[test]
fn test_empty_input_yields_nothing() {
    let lines: [&str; 0] = [];
    assert!(parse(lines).is_empty());
}

#[test]
fn test_comment_and_blank_lines_yield_nothing() {
    let observations = parse(["# 00:10:00 X=1", "", "   ", "\t# note Y=2"]);
    assert!(observations.is_empty());
}

#[test]
fn test_comment_lines_do_not_touch_the_clock() {
    let observations = parse(["10 A=1", "# 500 A=2", "", "A=3"]);
    assert_eq!(triples(&observations), vec![t(10, "A", 1.0), t(10, "A", 3.0)]);
}

#[test]
fn test_colon_timestamps_are_absolute() {
    let observations = parse(["00:01:00 X=1", "00:00:30 Y=2"]);
    assert_eq!(triples(&observations), vec![t(60, "X", 1.0), t(30, "Y", 2.0)]);
}

#[test]
fn test_bare_integers_are_cumulative() {
    let observations = parse(["10 X=1", "5 X=2"]);
    assert_eq!(triples(&observations), vec![t(10, "X", 1.0), t(15, "X", 2.0)]);
}

#[test]
fn test_bare_integer_advances_from_absolute_time() {
    let observations = parse(["01:00:00 X=1", "30 X=2", "00:00:05 X=3", "5 X=4"]);
    assert_eq!(
        triples(&observations),
        vec![
            t(3600, "X", 1.0),
            t(3630, "X", 2.0),
            t(5, "X", 3.0),
            t(10, "X", 4.0)
        ]
    );
}

#[test]
fn test_line_sets_time_and_several_assignments() {
    let observations = parse(["00:00:10 A=1.5 B=2"]);
    assert_eq!(triples(&observations), vec![t(10, "A", 1.5), t(10, "B", 2.0)]);
}

#[test]
fn test_non_numeric_value_dropped_without_affecting_siblings() {
    let observations = parse(["A=foo B=3"]);
    assert_eq!(triples(&observations), vec![t(0, "B", 3.0)]);
}

#[test]
fn test_timestamp_only_line_updates_clock() {
    let observations = parse(["00:02:00", "15", "Flow=4"]);
    assert_eq!(triples(&observations), vec![t(135, "Flow", 4.0)]);
}

#[test]
fn test_clock_persists_until_next_timestamp() {
    let observations = parse(["00:00:20 A=1", "B=2", "step C=3"]);
    assert_eq!(
        triples(&observations),
        vec![t(20, "A", 1.0), t(20, "B", 2.0), t(20, "C", 3.0)]
    );
}

#[test]
fn test_timestamp_must_lead_the_line() {
    let observations = parse(["step 10 X=1"]);
    assert_eq!(triples(&observations), vec![t(0, "X", 1.0)]);
}

#[test]
fn test_leading_whitespace_is_trimmed_before_timestamp_detection() {
    let observations = parse(["   00:00:45   X = 7  "]);
    assert_eq!(triples(&observations), vec![t(45, "X", 7.0)]);
}

#[test]
fn test_two_part_colon_token_falls_back_to_bare_integer() {
    // "10:20" is not H:M:S, so only the leading "10" is a timestamp
    let observations = parse(["10:20 X=1"]);
    assert_eq!(triples(&observations), vec![t(10, "X", 1.0)]);
}

#[test]
fn test_unpadded_colon_components() {
    let observations = parse(["1:2:3 X=1"]);
    assert_eq!(triples(&observations), vec![t(3723, "X", 1.0)]);
}

#[test]
fn test_dotted_names_and_spacing_around_equals() {
    let observations = parse(["Gas.NH3.Flow =  2.5 Valve.7= 1"]);
    assert_eq!(
        triples(&observations),
        vec![t(0, "Gas.NH3.Flow", 2.5), t(0, "Valve.7", 1.0)]
    );
}

#[test]
fn test_signed_values_are_not_captured() {
    let observations = parse(["X=-5 Y=1e-5 Z=2"]);
    assert_eq!(triples(&observations), vec![t(0, "Z", 2.0)]);
}

#[test]
fn test_leading_integer_can_also_be_an_assignment_name() {
    // "10=5": the "10" advances the clock and is also captured as a name
    let observations = parse(["10=5"]);
    assert_eq!(triples(&observations), vec![t(10, "10", 5.0)]);
}

#[test]
fn test_parse_str_handles_all_line_endings() {
    let parser = RecipeParser::new();
    let result = parser.parse_str("10 A=1\r\n5 A=2\r5 A=3\n");

    assert_eq!(
        triples(&result.observations),
        vec![t(10, "A", 1.0), t(15, "A", 2.0), t(20, "A", 3.0)]
    );
    assert_eq!(result.stats.total_lines, 3);
}

#[test]
fn test_parse_str_breaks_on_form_feed_and_unicode_separators() {
    let parser = RecipeParser::new();
    let result = parser.parse_str("10 A=1\x0c5 A=2\u{2028}5 A=3\x0b\u{85}1 A=4");

    assert_eq!(
        triples(&result.observations),
        vec![t(10, "A", 1.0), t(15, "A", 2.0), t(20, "A", 3.0), t(21, "A", 4.0)]
    );
    // the empty line between vertical tab and NEL still counts
    assert_eq!(result.stats.total_lines, 5);
    assert_eq!(result.stats.lines_skipped, 1);
}

#[test]
fn test_oversized_timestamp_saturates_the_clock() {
    let observations = parse(["10 X=1", "18446744073709551616:0:0 X=2", "5 X=3"]);
    assert_eq!(
        triples(&observations),
        vec![t(10, "X", 1.0), t(u64::MAX, "X", 2.0), t(u64::MAX, "X", 3.0)]
    );

    let observations = parse(["10 X=1", "99999999999999999999999 X=2"]);
    assert_eq!(observations[1].time(), u64::MAX);
}

#[test]
fn test_each_parse_starts_with_a_fresh_clock() {
    let parser = RecipeParser::new();
    let first = parser.parse_lines(["100 X=1"]);
    let second = parser.parse_lines(["X=2"]);

    assert_eq!(first.observations[0].time(), 100);
    assert_eq!(second.observations[0].time(), 0);
}

#[test]
fn test_full_recipe() {
    let result = RecipeParser::new().parse_str(&create_test_recipe());

    assert_eq!(
        triples(&result.observations),
        vec![
            t(0, "ReactorTemp", 500.0),
            t(0, "ReactorPress", 100.0),
            t(0, "NH3.Flow", 0.0),
            t(300, "ReactorTemp", 650.0),
            t(300, "ReactorPress", 200.0),
            t(360, "ReactorTemp", 800.0),
            t(360, "TMGa.Flow", 12.5),
            t(600, "ReactorTemp", 1050.0),
            t(600, "ReactorPress", 200.0),
            t(630, "TMGa.Flow", 15.0),
            t(1200, "ReactorTemp", 500.0),
        ]
    );
    assert_eq!(
        result.variables(),
        vec!["NH3.Flow", "ReactorPress", "ReactorTemp", "TMGa.Flow"]
    );
}

#[test]
fn test_parse_file_reads_recipe() {
    let temp_file = create_temp_file(&create_test_recipe());
    let result = RecipeParser::new().parse_file(temp_file.path()).unwrap();

    assert_eq!(result.observations.len(), 11);
    let temp = result.series("ReactorTemp");
    assert_eq!(temp.times(), &[0, 300, 360, 600, 1200]);
}

#[test]
fn test_parse_file_missing() {
    let err = RecipeParser::new()
        .parse_file(Path::new("/definitely/not/here/recipe.txt"))
        .unwrap_err();
    assert!(matches!(err, RecipeError::FileNotFound { .. }));
}

#[test]
fn test_parse_file_rejects_non_utf8() {
    use std::io::Write;

    let mut temp_file = tempfile::NamedTempFile::new().unwrap();
    temp_file.write_all(b"00:00:10 X=1\n\xff\xfe Y=2\n").unwrap();

    let err = RecipeParser::new()
        .parse_file(temp_file.path())
        .unwrap_err();
    assert!(matches!(err, RecipeError::Decode { .. }));
}
