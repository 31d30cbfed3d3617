//! # ReportRecord Entity
//!
//! サービス単位の集計レポート

use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::fmt;

use super::log_record::LogRecord;

/// 集計レポート
///
/// 1サービスの全ローテーションを通したログの集計結果。
/// 等価性は全フィールドの構造的比較（カテゴリ件数は順序に依存しない）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRecord {
    /// ファイル名の最初の `.` より前の部分
    pub service_name: String,
    /// 最も古いログの日時
    pub first_seen: NaiveDateTime,
    /// 最も新しいログの日時
    pub last_seen: NaiveDateTime,
    /// カテゴリごとの件数
    pub category_counts: BTreeMap<String, u64>,
    /// ローテーション数（ファイル数 - 1）
    pub rotation_count: u32,
}

impl ReportRecord {
    /// 空のレポートを作成
    ///
    /// ログを1件も取り込んでいない間は `first_seen` が最大値、
    /// `last_seen` が最小値の空範囲になる。
    ///
    /// # Arguments
    ///
    /// * `service_name` - サービス名
    /// * `rotation_count` - ローテーション数
    pub fn new(service_name: impl Into<String>, rotation_count: u32) -> Self {
        Self {
            service_name: service_name.into(),
            first_seen: NaiveDateTime::MAX,
            last_seen: NaiveDateTime::MIN,
            category_counts: BTreeMap::new(),
            rotation_count,
        }
    }

    /// ログを1件取り込み、日時の範囲とカテゴリ件数を更新
    pub fn record(&mut self, log: &LogRecord) {
        if log.timestamp < self.first_seen {
            self.first_seen = log.timestamp;
        }
        if log.timestamp > self.last_seen {
            self.last_seen = log.timestamp;
        }

        let count = self
            .category_counts
            .get(&log.category)
            .copied()
            .unwrap_or_default();
        self.category_counts.insert(log.category.clone(), count + 1);
    }

    /// 取り込んだログの総数
    pub fn total_logs(&self) -> u64 {
        self.category_counts.values().sum()
    }

    /// ログを1件も取り込んでいないかどうか
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.category_counts.is_empty()
    }
}

impl fmt::Display for ReportRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts = self
            .category_counts
            .iter()
            .map(|(category, count)| format!("{}={}", category, count))
            .collect::<Vec<_>>()
            .join(", ");

        write!(
            f,
            "{} {} {} {{{}}} {}",
            self.service_name,
            self.first_seen.format("%Y-%m-%dT%H:%M:%S"),
            self.last_seen.format("%Y-%m-%dT%H:%M:%S"),
            counts,
            self.rotation_count
        )
    }
}
