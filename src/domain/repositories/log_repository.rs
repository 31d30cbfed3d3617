//! # Log Repository Trait
//!
//! ログファイルの発見と読み込みを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

/// ログリポジトリ
///
/// ログファイルの発見と行単位の読み込みを担当するリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LogRepository: Send + Sync {
    /// サービス名パターンに一致するログファイルを発見する
    ///
    /// # Arguments
    ///
    /// * `folder_path` - ログディレクトリのパス（空文字列なら既定のディレクトリ）
    /// * `service_pattern` - 拡張子を除いたファイル名に対する正規表現（大文字小文字を区別しない）
    ///
    /// # Returns
    ///
    /// 発見されたログファイルのパスのリスト。ディレクトリが存在しない場合は空
    ///
    /// # Errors
    ///
    /// パターンが正規表現として不正な場合にエラーを返す
    async fn discover_log_files(
        &self,
        folder_path: &str,
        service_pattern: &str,
    ) -> Result<Vec<PathBuf>>;

    /// ログファイルの全行を読み込む
    ///
    /// # Errors
    ///
    /// ファイルを開けない場合、または UTF-8 として読めない場合にエラーを返す
    async fn read_log_lines(&self, file_path: &Path) -> Result<Vec<String>>;
}
