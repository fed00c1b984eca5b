use crate::config::ScanRules;
use crate::error::{Result, SiteError};
use regex::Regex;
use std::path::Path;
use stereo_viewer_common::FolderEntry;
use walkdir::WalkDir;

/// コンパイル済みの除外ルール
#[derive(Debug)]
pub struct FolderFilter<'a> {
    rules: &'a ScanRules,
    include: Option<Regex>,
}

impl<'a> FolderFilter<'a> {
    pub fn new(rules: &'a ScanRules) -> Result<Self> {
        let include = match rules.include_pattern.as_deref() {
            Some(pattern) => Some(Regex::new(pattern)?),
            None => None,
        };
        Ok(Self { rules, include })
    }

    /// このフォルダ名を残すか
    pub fn accepts(&self, name: &str) -> bool {
        if self.rules.skip_hidden && name.starts_with('.') {
            return false;
        }
        if self.rules.exclude_names.iter().any(|n| n == name) {
            return false;
        }
        if self.rules.exclude_suffixes.iter().any(|s| name.ends_with(s.as_str())) {
            return false;
        }
        match &self.include {
            Some(re) => re.is_match(name),
            None => true,
        }
    }
}

/// 直下のサブフォルダを列挙する（ファイルは無視、名前順）
pub fn scan_folders(root: &Path, rules: &ScanRules) -> Result<Vec<FolderEntry>> {
    if !root.is_dir() {
        return Err(SiteError::FolderNotFound(root.display().to_string()));
    }

    let filter = FolderFilter::new(rules)?;
    let mut folders = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            e.into_io_error()
                .map(SiteError::Io)
                .unwrap_or_else(|| SiteError::FolderNotFound(root.display().to_string()))
        })?;

        // シンボリックリンク先のフォルダも対象
        if !entry.path().is_dir() {
            continue;
        }

        // UTF-8でない名前は警告して除外
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            eprintln!("⚠ UTF-8でないフォルダ名をスキップ: {}", entry.path().display());
            continue;
        };
        if !filter.accepts(&name) {
            continue;
        }

        folders.push(FolderEntry::new(name, entry.path()));
    }

    folders.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(folders)
}
