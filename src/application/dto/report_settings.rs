//! # Report Settings DTO
//!
//! レポート処理の設定のData Transfer Object

use serde::{Deserialize, Serialize};

/// 不正なログ行の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedLinePolicy {
    /// 最初の不正な行で集計全体を中断する
    #[default]
    Abort,
    /// 不正な行を警告ログに出して読み飛ばす
    Skip,
}

/// レポート設定
#[derive(Debug, Clone)]
pub struct ReportSettings {
    /// レポートストア（JSON）のパス
    pub store_path: String,
    /// 不正なログ行の扱い
    pub malformed_lines: MalformedLinePolicy,
}

impl ReportSettings {
    /// 新しいレポート設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use logreport::application::dto::report_settings::{MalformedLinePolicy, ReportSettings};
    ///
    /// let settings = ReportSettings::new("./reports.json".to_string(), MalformedLinePolicy::Skip);
    ///
    /// assert_eq!(settings.store_path, "./reports.json");
    /// assert_eq!(settings.malformed_lines, MalformedLinePolicy::Skip);
    /// ```
    pub fn new(store_path: String, malformed_lines: MalformedLinePolicy) -> Self {
        Self {
            store_path,
            malformed_lines,
        }
    }
}
