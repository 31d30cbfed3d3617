//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **DiscoverLogsUseCase**: ログファイルの発見とサービスごとのグルーピング
//! - **AggregateReportsUseCase**: ログのパースとレポートへの集計

pub mod aggregate_reports;
pub mod discover_logs;
