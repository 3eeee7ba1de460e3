// src/tests/framer_tests.rs

//! Tests for [`framer`] and [`datetime`].
//!
//! [`framer`]: crate::readers::framer
//! [`datetime`]: crate::data::datetime

use crate::common::ParseError;
use crate::data::datetime::{datetime_parse, DateTimeL};
use crate::readers::framer::{frame_line, FramedLine};
use crate::tests::common::ymdhms;

use ::test_case::test_case;

#[test_case(
    "08/31/2025 - 16:30:18.000: World triggered \"Round_Start\"",
    "08/31/2025 - 16:30:18.000",
    "World triggered \"Round_Start\"";
    "fractional seconds"
)]
#[test_case(
    "08/31/2025 - 16:30:18: World triggered \"Round_Start\"",
    "08/31/2025 - 16:30:18",
    "World triggered \"Round_Start\"";
    "whole seconds"
)]
#[test_case(
    "L 08/31/2025 - 16:30:18: \"ragga<6><[U:1:109933575]><CT>\" say \"glhf\"",
    "08/31/2025 - 16:30:18",
    "\"ragga<6><[U:1:109933575]><CT>\" say \"glhf\"";
    "L prefix"
)]
#[test_case(
    "08/31/2025 - 16:30:18 : Log file closed",
    "08/31/2025 - 16:30:18",
    "Log file closed";
    "blank before delimiter"
)]
#[test_case(
    "08/31/2025 - 16:30:18.000: ",
    "08/31/2025 - 16:30:18.000",
    "";
    "empty body"
)]
#[test_case(
    "08/31/2025 - 16:30:18.000: JSON_BEGIN{",
    "08/31/2025 - 16:30:18.000",
    "JSON_BEGIN{";
    "begin marker body"
)]
fn test_frame_line_ok(
    line: &str,
    timestamp: &str,
    body: &str,
) {
    assert_eq!(frame_line(line), Ok(FramedLine { timestamp, body }));
}

#[test_case(""; "empty line")]
#[test_case("World triggered \"Round_Start\""; "no timestamp")]
#[test_case("08/31/2025 16:30:18: no dash"; "missing dash separator")]
#[test_case("08/31/2025 - 16:30:18 no delimiter"; "missing colon delimiter")]
#[test_case("8/31/2025 - 16:30:18: short month"; "one digit month")]
#[test_case("log: 08/31/2025 - 16:30:18: prefixed"; "unanchored timestamp")]
fn test_frame_line_err(line: &str) {
    match frame_line(line) {
        Err(ParseError::Frame { line: line_ }) => assert_eq!(line_, line),
        result => panic!("expected ParseError::Frame, got {:?}", result),
    }
}

#[test_case("08/31/2025 - 16:30:18.000"; "fractional seconds")]
#[test_case("08/31/2025 - 16:30:18"; "whole seconds")]
fn test_datetime_parse_ok(timestamp: &str) {
    let expect: DateTimeL = ymdhms(2025, 8, 31, 16, 30, 18);
    assert_eq!(datetime_parse(timestamp), Ok(expect));
}

#[test_case("13/31/2025 - 16:30:18"; "month out of range")]
#[test_case("02/30/2025 - 16:30:18"; "day out of range")]
#[test_case("08/31/2025 - 25:30:18"; "hour out of range")]
#[test_case("08/31/2025"; "date only")]
fn test_datetime_parse_err(timestamp: &str) {
    match datetime_parse(timestamp) {
        Err(ParseError::TimestampParse { timestamp: timestamp_, .. }) => {
            assert_eq!(timestamp_, timestamp)
        }
        result => panic!("expected ParseError::TimestampParse, got {:?}", result),
    }
}

/// A framed timestamp always round-trips through [`datetime_parse`].
#[test]
fn test_frame_then_parse() {
    let framed = frame_line("08/31/2025 - 16:30:18.000: Log file closed").unwrap();
    let timestamp: DateTimeL = datetime_parse(framed.timestamp).unwrap();
    assert_eq!(timestamp, ymdhms(2025, 8, 31, 16, 30, 18));
    assert_eq!(framed.body, "Log file closed");
}
