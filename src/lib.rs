//! # Logreport
//!
//! サービスごとのローテーション済みログファイルを読み込み、
//! メールアドレスを匿名化したうえでサービス単位のレポートに集計するツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: ログ・レポートのエンティティ、パースと匿名化のルール（外部I/Oなし）
//! - **Application層**: 発見・集計のユースケースと ReportRepository の実装
//! - **Adapter層**: ファイルシステム、JSONストア、設定ファイル
//! - **Driver層**: CLI、依存性注入

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
