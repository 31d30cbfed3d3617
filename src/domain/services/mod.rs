//! # Domain Services
//!
//! エンティティに属さない純粋なビジネスルール
//!
//! - **anonymizer**: メールアドレスのマスキング
//! - **line_parser**: ログ行のパース
//! - **report_ordering**: レポートの並び順
//! - **service_grouping**: ファイルのサービス単位のグルーピング

pub mod anonymizer;
pub mod line_parser;
pub mod report_ordering;
pub mod service_grouping;
