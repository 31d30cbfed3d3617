//! # Domain Errors
//!
//! 呼び出し側が種類を判別する必要のあるエラー

use thiserror::Error;

/// ログ1行のパース失敗理由
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineParseError {
    #[error("line does not match `[<date-time>][<category>] <message>`")]
    UnexpectedShape,

    #[error("unrecognized date-time '{0}'")]
    InvalidTimestamp(String),
}

/// レポート処理のエラー
#[derive(Debug, Error)]
pub enum ReportError {
    /// ログ行が期待する形式でない
    #[error("Malformed line {line_number} in {file}")]
    MalformedLine {
        file: String,
        line_number: usize,
        #[source]
        reason: LineParseError,
    },

    /// サービス名パターンが正規表現として不正
    #[error("Invalid service name pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// 永続化されたストアが JSON として読めない
    #[error("Corrupt report store: {path}")]
    CorruptStore {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ReportError {
    /// `anyhow::Error` が破損ストアを示すかどうか
    pub fn is_corrupt_store(error: &anyhow::Error) -> bool {
        matches!(
            error.downcast_ref::<ReportError>(),
            Some(ReportError::CorruptStore { .. })
        )
    }
}
