//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - ファイルシステムやプロセス環境を知らない
//! - 純粋なビジネスロジック（パース、匿名化、集計、並び順）
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（LogRecord, ReportRecord, ReportStore）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（ビジネスルール）
//! - **errors**: ドメインエラー

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
