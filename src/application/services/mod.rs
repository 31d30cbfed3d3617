//! # Application Services
//!
//! ユースケースを組み合わせ、Domain層の ReportRepository を実装する

pub mod report_service;
