//! # LogRecord Entity
//!
//! ログ1行分のバリューオブジェクト

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// ログレコード
///
/// 匿名化済みのログ1行を表す。独立した識別子は持たず、
/// タイムスタンプ・カテゴリ・本文がすべて等しければ同一とみなす。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LogRecord {
    pub timestamp: NaiveDateTime,
    pub category: String,
    /// 匿名化後の本文
    pub text: String,
}

impl LogRecord {
    /// 新しいログレコードを作成
    pub fn new(
        timestamp: NaiveDateTime,
        category: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            category: category.into(),
            text: text.into(),
        }
    }
}

/// ログ行と同じ `[日時][カテゴリ] 本文` 形式で表示
impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.timestamp.format("%Y-%m-%dT%H:%M:%S%.f"),
            self.category,
            self.text
        )
    }
}
