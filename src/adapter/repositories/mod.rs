//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod file_log_repository;
pub mod json_store_repository;
