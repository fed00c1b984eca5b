//! ビューアページ生成
//!
//! メディアのプロンプトフォルダごとに `<prompt><suffix>/index.html` と
//! stereo.js を出力する

use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::scanner;
use crate::writer::{self, WriteOutcome};
use std::path::PathBuf;
use stereo_viewer_common::{
    folder_name_for, render_image_viewer, render_video_viewer, Label, MediaKind,
};

#[derive(Debug, Clone)]
pub struct ViewerPage {
    pub folder: PathBuf,
    pub prompt: String,
    pub label: Label,
    pub outcome: WriteOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct ViewerReport {
    /// 処理したプロンプト数
    pub prompts: usize,
    pub pages: Vec<ViewerPage>,
}

impl ViewerReport {
    pub fn unchanged(&self) -> usize {
        self.pages
            .iter()
            .filter(|p| p.outcome == WriteOutcome::Unchanged)
            .count()
    }
}

/// メディアURLを組み立てる（ベース末尾の `/` は重ねない）
pub fn media_url(base: &str, parts: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for part in parts {
        url.push('/');
        url.push_str(part);
    }
    url
}

/// 1プロンプト・1ラベル分のビューアHTML
pub fn render_viewer(config: &SiteConfig, prompt: &str, label: Label) -> String {
    let stem = label.asset_stem();
    match config.media {
        MediaKind::Image => {
            let file = format!("{}.png", stem);
            let image_path =
                media_url(&config.media_base_url, &[prompt, "spatial_comparison", file.as_str()]);
            render_image_viewer(&image_path)
        }
        MediaKind::Video => {
            let webm_file = format!("{}.webm", stem);
            let mp4_file = format!("{}.mp4", stem);
            let webm = media_url(&config.media_base_url, &[prompt, webm_file.as_str()]);
            let mp4 = media_url(&config.media_base_url, &[prompt, mp4_file.as_str()]);
            render_video_viewer(&webm, &mp4)
        }
    }
}

pub fn make_viewers(config: &SiteConfig, verbose: bool) -> Result<ViewerReport> {
    // 書き込み前にスクリプトの存在を確認
    let script = config.script_source();
    if !script.is_file() {
        return Err(SiteError::ScriptNotFound(script.display().to_string()));
    }

    let prompts = scanner::scan_folders(&config.media_local_path, &config.scan)?;
    let labels = config.viewer_type.labels(config.media);

    let mut report = ViewerReport {
        prompts: prompts.len(),
        pages: Vec::with_capacity(prompts.len() * labels.len()),
    };

    for prompt in &prompts {
        for &label in &labels {
            let folder = config.save_path.join(folder_name_for(&prompt.name, label));
            writer::ensure_dir(&folder)?;

            let html = render_viewer(config, &prompt.name, label);
            let outcome = writer::write_page(&folder.join("index.html"), &html)?;
            writer::copy_script(script, &folder)?;

            if verbose {
                println!("  - {} ({})", folder.display(), outcome);
            }

            report.pages.push(ViewerPage {
                folder,
                prompt: prompt.name.clone(),
                label,
                outcome,
            });
        }

        println!("✔ {} のHTMLを作成", prompt.name);
    }

    Ok(report)
}
