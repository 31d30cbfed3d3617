//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **LogRecord**: ログ1行のバリューオブジェクト
//! - **ReportRecord**: サービス単位の集計レポート
//! - **ReportStore**: レポートとログ台帳を所有する集約

pub mod log_record;
pub mod report;
pub mod report_store;
