//! # Report Ordering
//!
//! レポートの並び順を決める比較関数

use std::cmp::Ordering;

use crate::domain::entities::report::ReportRecord;

/// レポートを比較する
///
/// サービス名をバイト単位で比較し、同名の場合は `first_seen` の昇順。
pub fn compare_reports(first: &ReportRecord, second: &ReportRecord) -> Ordering {
    first
        .service_name
        .as_bytes()
        .cmp(second.service_name.as_bytes())
        .then_with(|| first.first_seen.cmp(&second.first_seen))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn report(service: &str, day: u32) -> ReportRecord {
        let mut report = ReportRecord::new(service, 0);
        report.first_seen = at(day);
        report.last_seen = at(day);
        report
    }

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_orders_by_service_name() {
        assert_eq!(
            compare_reports(&report("svcA", 1), &report("svcB", 1)),
            Ordering::Less
        );
        assert_eq!(
            compare_reports(&report("svcB", 1), &report("svcA", 1)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_ordinal_comparison_puts_uppercase_first() {
        assert_eq!(
            compare_reports(&report("Zeta", 1), &report("alpha", 1)),
            Ordering::Less
        );
    }

    #[test]
    fn test_ties_broken_by_first_seen() {
        assert_eq!(
            compare_reports(&report("auth", 1), &report("auth", 2)),
            Ordering::Less
        );
        assert_eq!(
            compare_reports(&report("auth", 2), &report("auth", 2)),
            Ordering::Equal
        );
    }
}
