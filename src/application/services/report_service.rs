//! # Report Service
//!
//! ReportRepository の唯一の実装
//!
//! レポートとログ台帳は1つの `ReportStore` にまとめ、単一のロックで守る。
//! 発見・集計・ソートの間はロックを保持し続けるため、
//! 同時に呼ばれても処理は1件ずつ直列に実行される。

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::dto::report_settings::ReportSettings;
use crate::application::use_cases::aggregate_reports::AggregateReportsUseCase;
use crate::application::use_cases::discover_logs::DiscoverLogsUseCase;
use crate::domain::entities::log_record::LogRecord;
use crate::domain::entities::report::ReportRecord;
use crate::domain::entities::report_store::ReportStore;
use crate::domain::errors::ReportError;
use crate::domain::repositories::log_repository::LogRepository;
use crate::domain::repositories::report_repository::ReportRepository;
use crate::domain::repositories::store_repository::StoreRepository;

/// レポートサービス
pub struct ReportService<L: LogRepository, S: StoreRepository> {
    discover_use_case: DiscoverLogsUseCase<L>,
    aggregate_use_case: AggregateReportsUseCase<L>,
    store_repository: Arc<S>,
    store_path: String,
    store: Mutex<ReportStore>,
}

impl<L: LogRepository, S: StoreRepository> ReportService<L, S> {
    /// 空のストアで新しいサービスを作成
    ///
    /// # Arguments
    ///
    /// * `log_repository` - ログリポジトリ
    /// * `store_repository` - ストアリポジトリ
    /// * `settings` - レポート設定
    pub fn new(log_repository: Arc<L>, store_repository: Arc<S>, settings: ReportSettings) -> Self {
        Self {
            discover_use_case: DiscoverLogsUseCase::new(log_repository.clone()),
            aggregate_use_case: AggregateReportsUseCase::new(
                log_repository,
                settings.malformed_lines,
            ),
            store_repository,
            store_path: settings.store_path,
            store: Mutex::new(ReportStore::new()),
        }
    }
}

#[async_trait]
impl<L: LogRepository, S: StoreRepository> ReportRepository for ReportService<L, S> {
    async fn reports_by_service(
        &self,
        service_name: &str,
        folder_path: &str,
    ) -> Result<Vec<ReportRecord>> {
        let mut store = self.store.lock().await;

        let services = self
            .discover_use_case
            .execute(folder_path, service_name)
            .await?;

        // 失敗時に既存のストアを壊さないよう、新しいストアに集計してから差し替える
        let mut fresh = ReportStore::new();
        self.aggregate_use_case
            .execute(&services, &mut fresh)
            .await
            .with_context(|| format!("Failed to aggregate logs for service '{}'", service_name))?;
        *store = fresh;

        info!(
            "Built {} reports for service pattern '{}'",
            store.len(),
            service_name
        );

        Ok(store.reports().to_vec())
    }

    async fn all_reports(&self) -> Vec<ReportRecord> {
        self.store.lock().await.reports().to_vec()
    }

    async fn all_logs(&self) -> Vec<LogRecord> {
        self.store.lock().await.logs().to_vec()
    }

    async fn clear(&self) {
        self.store.lock().await.clear();
    }

    async fn save(&self) -> Result<()> {
        let store = self.store.lock().await;
        self.store_repository
            .save(&self.store_path, store.reports())
            .await
            .context("Failed to save report store")
    }

    async fn load(&self) -> Result<()> {
        let mut store = self.store.lock().await;

        match self.store_repository.load(&self.store_path).await {
            Ok(reports) => {
                store.replace_reports(reports);
                Ok(())
            }
            Err(e) if ReportError::is_corrupt_store(&e) => {
                warn!("{:#}; starting with an empty report store", e);
                store.replace_reports(Vec::new());
                Ok(())
            }
            Err(e) => Err(e.context("Failed to load report store")),
        }
    }
}
