//! インデックスページ生成
//!
//! viewers/ 直下のフォルダを1件ずつサムネイルとして並べる

use crate::config::SiteConfig;
use crate::error::Result;
use crate::scanner;
use crate::writer::{self, WriteOutcome};
use std::path::{Component, Path, PathBuf};
use stereo_viewer_common::template::folder_thumbnail;
use stereo_viewer_common::{parse_folder_name, render_index, render_thumbnail, FolderEntry};

#[derive(Debug, Clone)]
pub struct IndexReport {
    pub output: PathBuf,
    /// 一覧に載せた件数
    pub entries: usize,
    pub outcome: WriteOutcome,
}

/// インデックスページから見たビューアフォルダ群の相対パス
///
/// インデックスの親ディレクトリ配下にない絶対パスはフォルダ名だけを使う
pub fn link_prefix(viewers_root: &Path, output_index: &Path) -> String {
    let base = output_index.parent().unwrap_or_else(|| Path::new(""));
    let relative = if base.as_os_str().is_empty() {
        viewers_root
    } else {
        viewers_root.strip_prefix(base).unwrap_or(viewers_root)
    };

    if relative.is_absolute() {
        return relative
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());
    }

    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

/// フォルダ一覧からインデックスHTMLを組み立てる
///
/// # Returns
/// * `(html, 掲載件数)`
pub fn build_index_html(
    folders: &[FolderEntry],
    config: &SiteConfig,
    prefix: &str,
) -> (String, usize) {
    let mut thumbnails_html = String::new();
    let mut entries = 0;

    for folder in folders {
        let parsed = parse_folder_name(&folder.name);
        if config.skip_unknown && parsed.label.is_unknown() {
            continue;
        }

        let thumbnail_src = if config.use_folder_thumbnails {
            folder_thumbnail(prefix, &folder.name)
        } else {
            config.placeholder_image.clone()
        };

        let thumbnail = render_thumbnail(prefix, &folder.name, &parsed, &thumbnail_src);
        thumbnails_html.push_str(&thumbnail);
        entries += 1;
    }

    (render_index(&thumbnails_html), entries)
}

/// `viewers_dir` をスキャンしてインデックスを生成
pub fn generate_index(config: &SiteConfig, verbose: bool) -> Result<IndexReport> {
    generate_index_for(config, &config.viewers_dir, verbose)
}

/// 指定フォルダをスキャンしてインデックスを生成
pub fn generate_index_for(
    config: &SiteConfig,
    viewers_root: &Path,
    verbose: bool,
) -> Result<IndexReport> {
    let folders = scanner::scan_folders(viewers_root, &config.scan)?;

    if verbose {
        for folder in &folders {
            let parsed = parse_folder_name(&folder.name);
            println!("  - {} → {} [{}]", folder.name, parsed.prompt, parsed.label);
        }
    }

    let prefix = link_prefix(viewers_root, &config.output_index);
    let (html, entries) = build_index_html(&folders, config, &prefix);
    let outcome = writer::write_page(&config.output_index, &html)?;

    Ok(IndexReport {
        output: config.output_index.clone(),
        entries,
        outcome,
    })
}
