//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::file_log_repository::FileLogRepository;
use crate::adapter::repositories::json_store_repository::{JsonStoreRepository, ReportRecordJson};
use crate::application::services::report_service::ReportService;
use crate::domain::entities::log_record::LogRecord;
use crate::domain::entities::report::ReportRecord;
use crate::domain::repositories::report_repository::ReportRepository;

use super::cli::{Args, Command};

/// Render reports in the persisted store format
pub fn render_reports(reports: &[ReportRecord]) -> Result<String> {
    let json: Vec<ReportRecordJson> = reports.iter().map(ReportRecordJson::from).collect();
    to_pretty_json(&json)
}

/// Render logs as a JSON array of `{timestamp, category, text}`
pub fn render_logs(logs: &[LogRecord]) -> Result<String> {
    to_pretty_json(logs)
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to render JSON output")
}

/// Report Workflow
pub struct ReportWorkflow {
    repository: Arc<dyn ReportRepository>,
}

impl ReportWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        // Repository implementations
        let log_repo = Arc::new(FileLogRepository::new(
            config.log_dir(),
            config.log_extension.clone(),
        ));
        let store_repo = Arc::new(JsonStoreRepository::new());

        let repository: Arc<dyn ReportRepository> =
            Arc::new(ReportService::new(log_repo, store_repo, config.settings()));

        Self { repository }
    }

    /// Execute the command and return what would be printed
    pub async fn run(&self, command: Command) -> Result<String> {
        self.repository.load().await?;

        match command {
            Command::Service { name, folder, save } => {
                let reports = self.repository.reports_by_service(&name, &folder).await?;
                info!("✓ Built {} reports for '{}'", reports.len(), name);
                if save {
                    self.repository.save().await?;
                    info!("✓ Saved report store");
                }
                render_reports(&reports)
            }
            Command::List => {
                let reports = self.repository.all_reports().await;
                render_reports(&reports)
            }
            Command::Logs { name, folder } => {
                self.repository.reports_by_service(&name, &folder).await?;
                let logs = self.repository.all_logs().await;
                render_logs(&logs)
            }
            Command::Clear => {
                self.repository.clear().await;
                self.repository.save().await?;
                Ok("✓ Report store cleared".to_string())
            }
        }
    }

    /// Execute the workflow and print the result
    pub async fn execute(&self, args: Args) -> Result<()> {
        let output = self.run(args.command).await?;
        println!("{}", output);
        Ok(())
    }
}
