//! # Report Repository Trait
//!
//! 発見・集計・永続化・参照をまとめた、外部（CLI 等）向けの窓口

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::log_record::LogRecord;
use crate::domain::entities::report::ReportRecord;

/// レポートリポジトリ
///
/// 返される一覧はその時点のスナップショット。
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// サービス名でログを発見・集計し、ストアを作り直してレポート一覧を返す
    ///
    /// # Arguments
    ///
    /// * `service_name` - サービス名パターン
    /// * `folder_path` - ログディレクトリ（空文字列なら既定のディレクトリ）
    ///
    /// # Errors
    ///
    /// 読み込みや不正な行での中断に失敗した場合。このときストアは変更されない
    async fn reports_by_service(
        &self,
        service_name: &str,
        folder_path: &str,
    ) -> Result<Vec<ReportRecord>>;

    /// 再集計せずに現在のレポート一覧を返す
    async fn all_reports(&self) -> Vec<ReportRecord>;

    /// 集計中に出現したログの台帳を返す
    async fn all_logs(&self) -> Vec<LogRecord>;

    /// レポートとログ台帳を空にする
    async fn clear(&self);

    /// レポート一覧を永続化する
    async fn save(&self) -> Result<()>;

    /// 永続化されたレポート一覧を読み込む
    ///
    /// ファイルがない場合や破損している場合は空のストアになる。
    async fn load(&self) -> Result<()>;
}
