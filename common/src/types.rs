//! ビューア生成の型定義
//!
//! CLIとテストで共有される型:
//! - FolderEntry: スキャンしたフォルダ1件
//! - ViewerType: ビューアの構成（個別/時間比較/空間比較）
//! - MediaKind: 埋め込むメディアの種類（画像/動画）

use crate::error::Error;
use crate::label::Label;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// スキャンで得たフォルダ（読み取り専用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    /// フォルダ名（パス区切りを含まない）
    pub name: String,
    /// 解決済みのフォルダパス
    pub path: PathBuf,
}

impl FolderEntry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// ビューアの構成
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerType {
    /// 結果ごとに別フォルダ
    #[serde(alias = "seperate")]
    Separate,
    /// 時間方向の比較（1フォルダ）
    TemporalCompare,
    /// 空間方向の比較（1フォルダ、別スクリプト）
    #[default]
    SpatialCompare,
}

impl ViewerType {
    /// このビューア構成で生成するラベル一覧
    ///
    /// `Separate` は媒体によって比較相手が変わる（画像: warp_inpaint, 動画: depthcrafter）
    pub fn labels(&self, media: MediaKind) -> Vec<Label> {
        match (self, media) {
            (ViewerType::Separate, MediaKind::Image) => vec![Label::Ours, Label::WarpInpaint],
            (ViewerType::Separate, MediaKind::Video) => vec![Label::Ours, Label::Depthcrafter],
            (ViewerType::TemporalCompare, _) => vec![Label::ComparisonTemporal],
            (ViewerType::SpatialCompare, _) => vec![Label::ComparisonSpatial],
        }
    }

    /// 別系統（ar2）のスクリプトを使うか
    pub fn uses_alt_script(&self) -> bool {
        matches!(self, ViewerType::SpatialCompare)
    }
}

impl std::str::FromStr for ViewerType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "separate" | "seperate" => Ok(ViewerType::Separate),
            "temporal_compare" | "temporal" => Ok(ViewerType::TemporalCompare),
            "spatial_compare" | "spatial" => Ok(ViewerType::SpatialCompare),
            _ => Err(Error::UnknownViewerType(s.to_string())),
        }
    }
}

impl std::fmt::Display for ViewerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewerType::Separate => write!(f, "separate"),
            ViewerType::TemporalCompare => write!(f, "temporal_compare"),
            ViewerType::SpatialCompare => write!(f, "spatial_compare"),
        }
    }
}

/// 埋め込むメディアの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// SBS静止画（png）
    #[default]
    Image,
    /// SBS動画（webm + mp4）
    Video,
}

impl std::str::FromStr for MediaKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" | "img" => Ok(MediaKind::Image),
            "video" => Ok(MediaKind::Video),
            _ => Err(Error::UnknownMedia(s.to_string())),
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}
