//! # ReportStore Aggregate
//!
//! レポート一覧とログ台帳を所有する集約

use std::collections::HashSet;

use super::log_record::LogRecord;
use super::report::ReportRecord;
use crate::domain::services::report_ordering::compare_reports;

/// レポートストア
///
/// 重複のないレポート一覧（常にソート済み）と、
/// 集計中に出現した重複のないログの台帳を保持する。
#[derive(Debug, Default)]
pub struct ReportStore {
    reports: Vec<ReportRecord>,
    logs: Vec<LogRecord>,
    seen_logs: HashSet<LogRecord>,
}

impl ReportStore {
    /// 空のストアを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// レポートを追加
    ///
    /// 構造的に等しいレポートが既に存在する場合は追加しない。
    ///
    /// # Returns
    ///
    /// 追加された場合に `true`
    pub fn insert_report(&mut self, report: ReportRecord) -> bool {
        if self.reports.contains(&report) {
            return false;
        }
        self.reports.push(report);
        self.sort();
        true
    }

    /// レポート一覧を置き換える（ログ台帳はそのまま）
    pub fn replace_reports(&mut self, reports: impl IntoIterator<Item = ReportRecord>) {
        self.reports.clear();
        for report in reports {
            if !self.reports.contains(&report) {
                self.reports.push(report);
            }
        }
        self.sort();
    }

    /// ログを台帳に登録
    ///
    /// # Returns
    ///
    /// 新規に登録された場合に `true`（構造的に等しいログが既にあれば `false`）
    pub fn register_log(&mut self, log: LogRecord) -> bool {
        if self.seen_logs.contains(&log) {
            return false;
        }
        self.seen_logs.insert(log.clone());
        self.logs.push(log);
        true
    }

    /// サービス名（バイト順）、同名なら最初の日時の昇順で並べる
    pub fn sort(&mut self) {
        self.reports.sort_by(compare_reports);
    }

    /// レポートとログ台帳を空にする
    pub fn clear(&mut self) {
        self.reports.clear();
        self.logs.clear();
        self.seen_logs.clear();
    }

    pub fn reports(&self) -> &[ReportRecord] {
        &self.reports
    }

    pub fn logs(&self) -> &[LogRecord] {
        &self.logs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
