//! # Store Repository Trait
//!
//! レポート一覧の永続化を抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::report::ReportRecord;

/// ストアリポジトリ
///
/// レポート一覧の読み込みと保存を担当するリポジトリ
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// レポート一覧を読み込む
    ///
    /// # Arguments
    ///
    /// * `path` - ストアファイルのパス
    ///
    /// # Returns
    ///
    /// 保存されていたレポート一覧。ファイルが存在しない場合は空
    ///
    /// # Errors
    ///
    /// 読み込みに失敗した場合、内容を解釈できない場合
    /// （`ReportError::CorruptStore`）にエラーを返す
    async fn load(&self, path: &str) -> Result<Vec<ReportRecord>>;

    /// レポート一覧を保存する
    ///
    /// # Errors
    ///
    /// ファイルの書き込みに失敗した場合にエラーを返す
    async fn save(&self, path: &str, reports: &[ReportRecord]) -> Result<()>;
}
