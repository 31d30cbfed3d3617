//! # Service Grouping
//!
//! ログファイルをサービス名ごとにまとめる

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// ファイル名からサービス名を取り出す
///
/// `auth.2.log` -> `auth`。ファイル名が `.` で始まる場合など、
/// サービス名が空になるときは `None`。
pub fn service_name_of(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let service = file_name.split('.').next()?;
    if service.is_empty() {
        return None;
    }
    Some(service.to_string())
}

/// ファイルをサービス名でグルーピング
///
/// サービス名の昇順、各グループ内は入力順を保つ。
/// サービス名を取り出せないファイルは除外される。
pub fn group_by_service(files: &[PathBuf]) -> BTreeMap<String, Vec<PathBuf>> {
    let mut groups: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    for file in files {
        match service_name_of(file) {
            Some(service) => groups.entry(service).or_default().push(file.clone()),
            None => log::warn!("Skipping file without service name: {}", file.display()),
        }
    }
    groups
}
