//! # Discover Logs Use Case
//!
//! ログファイルを発見し、サービスごとのローテーション群にまとめる

use anyhow::Result;
use log::info;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::repositories::log_repository::LogRepository;
use crate::domain::services::service_grouping::group_by_service;

/// サービス名 -> そのサービスのログファイル（発見順）
pub type ServiceFiles = BTreeMap<String, Vec<PathBuf>>;

/// ログファイル発見ユースケース
pub struct DiscoverLogsUseCase<R: LogRepository> {
    log_repository: Arc<R>,
}

impl<R: LogRepository> DiscoverLogsUseCase<R> {
    pub fn new(log_repository: Arc<R>) -> Self {
        Self { log_repository }
    }

    /// パターンに一致するログファイルをサービス名でまとめて返す
    ///
    /// サービス名を取り出せないファイルは除外される。
    ///
    /// # Errors
    ///
    /// パターンが不正な場合
    pub async fn execute(&self, folder_path: &str, service_pattern: &str) -> Result<ServiceFiles> {
        let files = self
            .log_repository
            .discover_log_files(folder_path, service_pattern)
            .await?;

        let services = group_by_service(&files);
        info!(
            "Discovered {} services from {} files for pattern '{}'",
            services.len(),
            files.len(),
            service_pattern
        );

        Ok(services)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::log_repository::MockLogRepository;
    use mockall::predicate::eq;

    fn use_case_returning(files: Vec<PathBuf>) -> DiscoverLogsUseCase<MockLogRepository> {
        let mut mock = MockLogRepository::new();
        mock.expect_discover_log_files()
            .with(eq("/logs"), eq("a"))
            .times(1)
            .returning(move |_, _| Ok(files.clone()));
        DiscoverLogsUseCase::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_groups_rotations_by_service() {
        let use_case = use_case_returning(vec![
            PathBuf::from("/logs/auth.0.log"),
            PathBuf::from("/logs/audit.0.log"),
            PathBuf::from("/logs/auth.1.log"),
        ]);

        let services = use_case.execute("/logs", "a").await.unwrap();

        assert_eq!(services.keys().collect::<Vec<_>>(), vec!["audit", "auth"]);
        assert_eq!(
            services["auth"],
            vec![
                PathBuf::from("/logs/auth.0.log"),
                PathBuf::from("/logs/auth.1.log"),
            ]
        );
    }

    #[tokio::test]
    async fn test_drops_files_without_service_name() {
        let use_case = use_case_returning(vec![PathBuf::from("/logs/.a.log")]);

        let services = use_case.execute("/logs", "a").await.unwrap();

        assert!(services.is_empty());
    }

    #[tokio::test]
    async fn test_propagates_discovery_error() {
        let mut mock = MockLogRepository::new();
        mock.expect_discover_log_files()
            .returning(|_, _| Err(anyhow::anyhow!("bad pattern")));
        let use_case = DiscoverLogsUseCase::new(Arc::new(mock));

        assert!(use_case.execute("/logs", "(").await.is_err());
    }
}
