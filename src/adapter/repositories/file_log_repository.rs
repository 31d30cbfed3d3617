//! File Log Repository Implementation
//!
//! LogRepositoryのファイルシステム実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info, warn};
use regex::{Regex, RegexBuilder};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::errors::ReportError;
use crate::domain::repositories::log_repository::LogRepository;

/// 既定のログ拡張子
pub const DEFAULT_LOG_EXTENSION: &str = "log";

/// 実行ファイルのディレクトリからの既定のログディレクトリ
pub const DEFAULT_LOG_SUBDIR: &str = "logs";

const UTF8_BOM: char = '\u{feff}';

/// 実行ファイルの隣にある既定のログディレクトリ
pub fn default_log_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_LOG_SUBDIR)
}

/// ファイルシステムベースのログリポジトリ
pub struct FileLogRepository {
    default_dir: PathBuf,
    extension: String,
}

impl FileLogRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `default_dir` - フォルダ指定が空のときに使うディレクトリ
    /// * `extension` - 対象とするログの拡張子（`.` なし）
    pub fn new(default_dir: PathBuf, extension: impl Into<String>) -> Self {
        Self {
            default_dir,
            extension: extension.into(),
        }
    }

    /// フォルダ指定を実際のディレクトリに解決する
    fn resolve_folder(&self, folder_path: &str) -> PathBuf {
        let folder_path = folder_path.trim();
        if folder_path.is_empty() {
            return self.default_dir.clone();
        }
        let expanded = shellexpand::tilde(folder_path);
        PathBuf::from(expanded.as_ref())
    }

    /// サービス名パターンを大文字小文字を区別しない正規表現にする
    fn compile_pattern(service_pattern: &str) -> std::result::Result<Regex, ReportError> {
        RegexBuilder::new(service_pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| ReportError::InvalidPattern {
                pattern: service_pattern.to_string(),
                source,
            })
    }

    /// ログファイルを発見する（内部実装）
    ///
    /// ディレクトリが存在しない・読めない場合は警告を出して空を返す。
    fn discover_log_files_internal(
        log_dir: &Path,
        pattern: &Regex,
        extension: &str,
    ) -> Vec<PathBuf> {
        if !log_dir.is_dir() {
            warn!("Log directory does not exist: {}", log_dir.display());
            return Vec::new();
        }

        let mut log_files = Vec::new();

        for entry in WalkDir::new(log_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Failed to read entry in {}: {}", log_dir.display(), e);
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let has_extension = path
                .extension()
                .and_then(|s| s.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
            let stem_matches = path
                .file_stem()
                .and_then(|s| s.to_str())
                .is_some_and(|stem| pattern.is_match(stem));

            if has_extension && stem_matches {
                log_files.push(path.to_path_buf());
            }
        }

        log_files.sort();

        info!(
            "Found {} log files matching '{}' in {}",
            log_files.len(),
            pattern.as_str(),
            log_dir.display()
        );

        log_files
    }

    /// ログファイルを1行ずつ最後まで読み込む（同期処理）
    ///
    /// 先頭の UTF-8 BOM は取り除く。
    fn read_log_lines_sync(file_path: &Path) -> Result<Vec<String>> {
        let file = File::open(file_path)
            .with_context(|| format!("Failed to open log file: {}", file_path.display()))?;

        let mut lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .with_context(|| format!("Failed to read log file: {}", file_path.display()))?;

        if let Some(first) = lines.first_mut() {
            if let Some(stripped) = first.strip_prefix(UTF8_BOM) {
                *first = stripped.to_string();
            }
        }

        debug!("Read {} lines from {}", lines.len(), file_path.display());

        Ok(lines)
    }
}

#[async_trait]
impl LogRepository for FileLogRepository {
    async fn discover_log_files(
        &self,
        folder_path: &str,
        service_pattern: &str,
    ) -> Result<Vec<PathBuf>> {
        let pattern = Self::compile_pattern(service_pattern)?;
        let log_dir = self.resolve_folder(folder_path);
        let extension = self.extension.clone();

        tokio::task::spawn_blocking(move || {
            Self::discover_log_files_internal(&log_dir, &pattern, &extension)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))
    }

    async fn read_log_lines(&self, file_path: &Path) -> Result<Vec<String>> {
        let file_path = file_path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::read_log_lines_sync(&file_path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for FileLogRepository {
    fn default() -> Self {
        Self::new(default_log_dir(), DEFAULT_LOG_EXTENSION)
    }
}
