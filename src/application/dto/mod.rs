//! # Data Transfer Objects
//!
//! レイヤー間で受け渡す設定値

pub mod report_settings;
