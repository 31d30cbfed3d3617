//! JSON Store Repository Implementation
//!
//! StoreRepositoryのJSON実装（レポート一覧をJSONファイルで永続化）

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use log::info;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::domain::entities::report::ReportRecord;
use crate::domain::errors::ReportError;
use crate::domain::repositories::store_repository::StoreRepository;
use crate::domain::services::line_parser::parse_timestamp;

/// カスタムデシリアライザ: ログ行と同じ規則で日時を解釈する
///
/// 手で編集されたストアの `Z` やオフセット付きの日時も受け付ける
fn deserialize_report_date<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// JSONファイルベースのストアリポジトリ
pub struct JsonStoreRepository;

/// レポート（JSON永続化用の表現）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecordJson {
    pub service_name: String,
    #[serde(deserialize_with = "deserialize_report_date")]
    pub first_report_date: NaiveDateTime,
    #[serde(deserialize_with = "deserialize_report_date")]
    pub last_report_date: NaiveDateTime,
    pub number_of_reports: BTreeMap<String, u64>,
    pub number_of_rotations: u32,
}

impl From<&ReportRecord> for ReportRecordJson {
    fn from(report: &ReportRecord) -> Self {
        Self {
            service_name: report.service_name.clone(),
            first_report_date: report.first_seen,
            last_report_date: report.last_seen,
            number_of_reports: report.category_counts.clone(),
            number_of_rotations: report.rotation_count,
        }
    }
}

impl From<ReportRecordJson> for ReportRecord {
    fn from(json: ReportRecordJson) -> Self {
        Self {
            service_name: json.service_name,
            first_seen: json.first_report_date,
            last_seen: json.last_report_date,
            category_counts: json.number_of_reports,
            rotation_count: json.number_of_rotations,
        }
    }
}

impl JsonStoreRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// ファイルからレポート一覧を読み込む（同期処理）
    ///
    /// ファイルがない、または空の場合は空の一覧を返す。
    fn load_sync(path: &str) -> Result<Vec<ReportRecordJson>> {
        let file_path = Path::new(path);

        if !file_path.exists() {
            info!("No existing report store found at {}, starting empty", path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read report store file: {}", path))?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let reports: Vec<ReportRecordJson> =
            serde_json::from_str(&content).map_err(|source| ReportError::CorruptStore {
                path: path.to_string(),
                source,
            })?;

        info!("Loaded {} reports from {}", reports.len(), path);

        Ok(reports)
    }

    /// ファイルにレポート一覧を保存する（同期処理）
    fn save_sync(path: &str, reports: &[ReportRecordJson]) -> Result<()> {
        let file_path = Path::new(path);

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Failed to create report store directory")?;
        }

        let json =
            serde_json::to_string_pretty(reports).context("Failed to serialize report store")?;

        fs::write(file_path, json)
            .with_context(|| format!("Failed to write report store file: {}", path))?;

        info!("Saved {} reports to {}", reports.len(), path);

        Ok(())
    }
}

#[async_trait]
impl StoreRepository for JsonStoreRepository {
    async fn load(&self, path: &str) -> Result<Vec<ReportRecord>> {
        let path = path.to_string();
        let reports = tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        Ok(reports.into_iter().map(ReportRecord::from).collect())
    }

    async fn save(&self, path: &str, reports: &[ReportRecord]) -> Result<()> {
        let path = path.to_string();
        let json_reports: Vec<ReportRecordJson> =
            reports.iter().map(ReportRecordJson::from).collect();
        tokio::task::spawn_blocking(move || Self::save_sync(&path, &json_reports))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        Ok(())
    }
}

impl Default for JsonStoreRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn sample_report() -> ReportRecord {
        ReportRecord {
            service_name: "auth".to_string(),
            first_seen: at(3, 8),
            last_seen: at(7, 9),
            category_counts: BTreeMap::from([
                ("ERROR".to_string(), 1),
                ("INFO".to_string(), 2),
            ]),
            rotation_count: 2,
        }
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = JsonStoreRepository::load_sync("/nonexistent/path/reports.json");
        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_load_valid_store() {
        let mut file = NamedTempFile::new().unwrap();
        let json = r#"[
            {
                "serviceName": "auth",
                "firstReportDate": "2024-01-03T08:00:00",
                "lastReportDate": "2024-01-07T09:00:00Z",
                "numberOfReports": { "INFO": 2, "ERROR": 1 },
                "numberOfRotations": 2
            }
        ]"#;
        file.write_all(json.as_bytes()).unwrap();

        let reports = JsonStoreRepository::load_sync(file.path().to_str().unwrap()).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(ReportRecord::from(reports[0].clone()), sample_report());
    }

    #[test]
    fn test_load_empty_file() {
        let file = NamedTempFile::new().unwrap();

        let reports = JsonStoreRepository::load_sync(file.path().to_str().unwrap()).unwrap();

        assert!(reports.is_empty());
    }

    #[test]
    fn test_load_invalid_json_is_corrupt_store() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let error = JsonStoreRepository::load_sync(file.path().to_str().unwrap()).unwrap_err();

        assert!(ReportError::is_corrupt_store(&error));
    }

    #[test]
    fn test_load_bad_date_is_corrupt_store() {
        let mut file = NamedTempFile::new().unwrap();
        let json = r#"[{
            "serviceName": "auth",
            "firstReportDate": "someday",
            "lastReportDate": "2024-01-07T09:00:00",
            "numberOfReports": {},
            "numberOfRotations": 0
        }]"#;
        file.write_all(json.as_bytes()).unwrap();

        let error = JsonStoreRepository::load_sync(file.path().to_str().unwrap()).unwrap_err();

        assert!(ReportError::is_corrupt_store(&error));
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(ReportRecordJson::from(&sample_report())).unwrap();

        assert_eq!(json["serviceName"], "auth");
        assert_eq!(json["firstReportDate"], "2024-01-03T08:00:00");
        assert_eq!(json["lastReportDate"], "2024-01-07T09:00:00");
        assert_eq!(json["numberOfReports"]["INFO"], 2);
        assert_eq!(json["numberOfRotations"], 2);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let store_path = temp_dir.path().join("nested").join("reports.json");
        let path = store_path.to_str().unwrap();
        let repo = JsonStoreRepository::new();

        repo.save(path, &[sample_report()]).await.unwrap();
        let loaded = repo.load(path).await.unwrap();

        assert_eq!(loaded, vec![sample_report()]);
    }

    #[tokio::test]
    async fn test_save_overwrites_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let store_path = temp_dir.path().join("reports.json");
        fs::write(&store_path, "garbage").unwrap();
        let path = store_path.to_str().unwrap();
        let repo = JsonStoreRepository::new();

        repo.save(path, &[]).await.unwrap();

        assert!(repo.load(path).await.unwrap().is_empty());
    }
}
