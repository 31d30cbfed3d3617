//! # Line Parser
//!
//! `[<date-time>][<category>] <message>` 形式のログ行を LogRecord に変換

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

use super::anonymizer::anonymize;
use crate::domain::entities::log_record::LogRecord;
use crate::domain::errors::LineParseError;

/// ログ行の正規表現。初回使用時に一度だけコンパイルする。
static LOG_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(?P<date>[^\]]+)\]\[(?P<category>[^\]]+)\] (?P<text>.+)$")
        .expect("Invalid log line regex pattern")
});

/// オフセットなしで受け付ける日時の書式
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%d.%m.%Y %H:%M:%S",
];

/// ログ行をパースする
///
/// 本文中のメールアドレスはマスク済みで返す。
///
/// # Errors
///
/// 行の形式が合わない場合、または日時を解釈できない場合
pub fn parse_line(line: &str) -> Result<LogRecord, LineParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let caps = LOG_LINE_RE
        .captures(line)
        .ok_or(LineParseError::UnexpectedShape)?;

    let timestamp = parse_timestamp(&caps["date"])?;
    let text = anonymize(&caps["text"]).into_owned();

    Ok(LogRecord::new(timestamp, &caps["category"], text))
}

/// 日時文字列を解釈する
///
/// RFC 3339（オフセット付きは UTC に変換）、ISO 8601 のオフセットなし形式、
/// `DD.MM.YYYY HH:MM:SS`、日付のみ（0時扱い）を受け付ける。
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, LineParseError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc());
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| LineParseError::InvalidTimestamp(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_well_formed_line() {
        let log = parse_line("[2024-01-05T10:00:00][ERROR] contact a@b.com").unwrap();

        assert_eq!(log.timestamp, dt(2024, 1, 5, 10, 0, 0));
        assert_eq!(log.category, "ERROR");
        assert_eq!(log.text, "contact a*@b.com");
    }

    #[test]
    fn test_parse_line_masks_email() {
        let log = parse_line("[2024-01-05 10:00:00][INFO] login john.doe@example.com").unwrap();

        assert_eq!(log.text, "login j*e@example.com");
    }

    #[test]
    fn test_parse_line_keeps_brackets_in_message() {
        let log = parse_line("[2024-01-05T10:00:00][WARN] retry [3/5] ok").unwrap();

        assert_eq!(log.category, "WARN");
        assert_eq!(log.text, "retry [3/5] ok");
    }

    #[test]
    fn test_parse_line_strips_carriage_return() {
        let log = parse_line("[2024-01-05T10:00:00][INFO] done\r").unwrap();

        assert_eq!(log.text, "done");
    }

    #[test]
    fn test_parse_line_rejects_bad_shape() {
        assert_eq!(
            parse_line("2024-01-05 ERROR something"),
            Err(LineParseError::UnexpectedShape)
        );
        assert_eq!(
            parse_line("[2024-01-05T10:00:00][ERROR]no space"),
            Err(LineParseError::UnexpectedShape)
        );
        assert_eq!(
            parse_line("[2024-01-05T10:00:00][ERROR] "),
            Err(LineParseError::UnexpectedShape)
        );
    }

    #[test]
    fn test_parse_line_rejects_bad_timestamp() {
        assert_eq!(
            parse_line("[yesterday][ERROR] boom"),
            Err(LineParseError::InvalidTimestamp("yesterday".to_string()))
        );
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = dt(2024, 1, 5, 10, 0, 0);

        assert_eq!(parse_timestamp("2024-01-05T10:00:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-01-05 10:00:00").unwrap(), expected);
        assert_eq!(parse_timestamp("05.01.2024 10:00:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-01-05T10:00:00Z").unwrap(), expected);
        assert_eq!(
            parse_timestamp("2024-01-05T12:00:00+02:00").unwrap(),
            expected
        );
        assert_eq!(
            parse_timestamp("2024-01-05").unwrap(),
            dt(2024, 1, 5, 0, 0, 0)
        );
    }

    #[test]
    fn test_parse_timestamp_fractional_seconds() {
        use chrono::Timelike;

        let parsed = parse_timestamp("2024-01-05T10:00:00.250").unwrap();

        assert_eq!(parsed.nanosecond(), 250_000_000);
    }
}
