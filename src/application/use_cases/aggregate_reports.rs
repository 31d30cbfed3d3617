//! # Aggregate Reports Use Case
//!
//! ログのパースとレポートへの集計ユースケース

use anyhow::Result;
use log::{debug, info, warn};
use std::sync::Arc;

use crate::application::dto::report_settings::MalformedLinePolicy;
use crate::application::use_cases::discover_logs::ServiceFiles;
use crate::domain::entities::report::ReportRecord;
use crate::domain::entities::report_store::ReportStore;
use crate::domain::errors::ReportError;
use crate::domain::repositories::log_repository::LogRepository;
use crate::domain::services::line_parser::parse_line;

/// 集計結果の要約
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationSummary {
    /// 読み込んだファイル数
    pub files_read: usize,
    /// ストアに新規追加されたレポート数
    pub reports_added: usize,
    /// 台帳に新規登録されたログ数
    pub logs_registered: usize,
    /// 読み飛ばした不正な行の数
    pub skipped_lines: usize,
}

/// ログ集計ユースケース
///
/// サービスごとのログファイル群の各行をパースして
/// サービスごとに1件のレポートへ畳み込む
pub struct AggregateReportsUseCase<R: LogRepository> {
    log_repository: Arc<R>,
    policy: MalformedLinePolicy,
}

impl<R: LogRepository> AggregateReportsUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `log_repository` - ログリポジトリ
    /// * `policy` - 不正な行の扱い
    pub fn new(log_repository: Arc<R>, policy: MalformedLinePolicy) -> Self {
        Self {
            log_repository,
            policy,
        }
    }

    /// ファイルを集計してストアに反映する
    ///
    /// ファイルは1つずつ最後まで読み込まれる。ログは台帳に重複なく登録され、
    /// レポートは構造的に等しいものがストアになければ追加される。
    /// ログを1件も含まないサービスのレポートは追加しない。
    ///
    /// # Arguments
    ///
    /// * `services` - サービス名ごとのログファイル
    /// * `store` - 集計先のストア
    ///
    /// # Errors
    ///
    /// ファイルの読み込みに失敗した場合、または `Abort` ポリシーで
    /// 不正な行に出会った場合（`ReportError::MalformedLine`）
    pub async fn execute(
        &self,
        services: &ServiceFiles,
        store: &mut ReportStore,
    ) -> Result<AggregationSummary> {
        let mut summary = AggregationSummary::default();

        for (service_name, files) in services {
            let rotation_count = u32::try_from(files.len().saturating_sub(1)).unwrap_or(u32::MAX);
            let mut report = ReportRecord::new(service_name.as_str(), rotation_count);

            for file in files {
                let lines = self.log_repository.read_log_lines(file).await?;
                summary.files_read += 1;

                for (index, line) in lines.iter().enumerate() {
                    if line.trim().is_empty() {
                        continue;
                    }

                    match parse_line(line) {
                        Ok(log) => {
                            report.record(&log);
                            if store.register_log(log) {
                                summary.logs_registered += 1;
                            }
                        }
                        Err(reason) => match self.policy {
                            MalformedLinePolicy::Abort => {
                                return Err(ReportError::MalformedLine {
                                    file: file.display().to_string(),
                                    line_number: index + 1,
                                    reason,
                                }
                                .into());
                            }
                            MalformedLinePolicy::Skip => {
                                warn!(
                                    "Skipping malformed line {} in {}: {}",
                                    index + 1,
                                    file.display(),
                                    reason
                                );
                                summary.skipped_lines += 1;
                            }
                        },
                    }
                }
            }

            if report.is_empty() {
                debug!("No log lines for service '{}', no report created", service_name);
                continue;
            }

            debug!(
                "Report for '{}': {} logs across {} rotations",
                service_name,
                report.total_logs(),
                report.rotation_count
            );
            if store.insert_report(report) {
                summary.reports_added += 1;
            }
        }

        info!(
            "Aggregated {} files into {} new reports ({} new logs, {} skipped lines)",
            summary.files_read,
            summary.reports_added,
            summary.logs_registered,
            summary.skipped_lines
        );

        Ok(summary)
    }
}
