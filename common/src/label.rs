//! フォルダ名パーサー
//!
//! ビューアフォルダ名の末尾サフィックスから
//! プロンプトと比較ラベルを取り出す

use serde::{Deserialize, Serialize};

/// 比較バリアントのラベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Ours,
    Depthcrafter,
    ComparisonSpatial,
    ComparisonTemporal,
    WarpInpaint,
    Unknown,
}

impl Label {
    /// サフィックス照合の優先順位
    pub const KNOWN: [Label; 5] = [
        Label::ComparisonSpatial,
        Label::ComparisonTemporal,
        Label::WarpInpaint,
        Label::Depthcrafter,
        Label::Ours,
    ];

    /// フォルダ名のサフィックス（Unknownは無し）
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            Label::Ours => Some("_ours"),
            Label::Depthcrafter => Some("_depthc"),
            Label::ComparisonSpatial => Some("_comparison_spatial"),
            Label::ComparisonTemporal => Some("_comparison_temporal"),
            Label::WarpInpaint => Some("_warp_inpaint"),
            Label::Unknown => None,
        }
    }

    /// 表示用タグ
    pub fn tag(&self) -> &'static str {
        match self {
            Label::Ours => "ours",
            Label::Depthcrafter => "depthcrafter",
            Label::ComparisonSpatial => "comparison_spatial",
            Label::ComparisonTemporal => "comparison_temporal",
            Label::WarpInpaint => "warp_inpaint",
            Label::Unknown => "unknown",
        }
    }

    /// メディアファイル名の語幹（`<stem>.png` など）
    pub fn asset_stem(&self) -> &'static str {
        match self {
            Label::Depthcrafter => "depthc",
            other => other.tag(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Label::Unknown)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// パース結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLabel {
    pub prompt: String,
    pub label: Label,
}

impl ParsedLabel {
    /// サムネイルの代替テキスト（"<prompt> <label>"）
    pub fn alt_text(&self) -> String {
        format!("{} {}", self.prompt, self.label)
    }
}

/// フォルダ名からプロンプトとラベルを取り出す
///
/// 一致するサフィックスがなければ、フォルダ名全体をプロンプトとし
/// ラベルは `Unknown` になる。正規化や大文字小文字の同一視はしない。
///
/// # Examples
/// ```
/// use stereo_viewer_common::{parse_folder_name, Label};
///
/// let parsed = parse_folder_name("A_modern_glass_building_ours");
/// assert_eq!(parsed.prompt, "A_modern_glass_building");
/// assert_eq!(parsed.label, Label::Ours);
/// ```
pub fn parse_folder_name(folder_name: &str) -> ParsedLabel {
    for label in Label::KNOWN {
        let Some(suffix) = label.suffix() else {
            continue;
        };
        if let Some(prompt) = folder_name.strip_suffix(suffix) {
            return ParsedLabel {
                prompt: prompt.to_string(),
                label,
            };
        }
    }

    ParsedLabel {
        prompt: folder_name.to_string(),
        label: Label::Unknown,
    }
}

/// プロンプトとラベルからビューアフォルダ名を組み立てる
pub fn folder_name_for(prompt: &str, label: Label) -> String {
    format!("{}{}", prompt, label.suffix().unwrap_or_default())
}
