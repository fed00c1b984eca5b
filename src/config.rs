use crate::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stereo_viewer_common::{MediaKind, ViewerType};

/// カレントディレクトリで探す設定ファイル名
pub const LOCAL_CONFIG_FILE: &str = "stereo-viewer.json";

/// フォルダスキャン時の除外ルール
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanRules {
    /// `.` で始まるエントリを除外
    pub skip_hidden: bool,
    /// このサフィックスで終わるフォルダを除外
    pub exclude_suffixes: Vec<String>,
    /// 名前が完全一致するフォルダを除外
    pub exclude_names: Vec<String>,
    /// 指定時はフォルダ名のどこかに一致するものだけ残す（正規表現）
    pub include_pattern: Option<String>,
}

impl Default for ScanRules {
    fn default() -> Self {
        Self {
            skip_hidden: true,
            exclude_suffixes: Vec::new(),
            exclude_names: Vec::new(),
            include_pattern: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// インデックス対象のビューアフォルダ群
    pub viewers_dir: PathBuf,
    /// 出力するインデックスページ
    pub output_index: PathBuf,
    /// サムネイルの代替画像
    pub placeholder_image: String,
    /// `viewers/<folder>/thumbnail.png` を使う
    pub use_folder_thumbnails: bool,
    /// ラベル不明のフォルダをインデックスから外す
    pub skip_unknown: bool,

    /// ビューアフォルダの出力先
    pub save_path: PathBuf,
    /// メディアの公開URL
    pub media_base_url: String,
    /// プロンプトフォルダを列挙するローカルパス
    pub media_local_path: PathBuf,
    /// 標準の stereo.js
    pub stereo_js_source: PathBuf,
    /// 空間比較用の stereo.js
    pub stereo_js_source_alt: PathBuf,
    pub viewer_type: ViewerType,
    pub media: MediaKind,

    pub scan: ScanRules,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            viewers_dir: PathBuf::from("./viewers"),
            output_index: PathBuf::from("index.html"),
            placeholder_image: "images/placeholder.png".into(),
            use_folder_thumbnails: false,
            skip_unknown: false,
            save_path: PathBuf::from("viewers_images"),
            media_base_url: "https://michalgeyer.github.io/vr-viewer-files-webm/pairs_for_shir/".into(),
            media_local_path: PathBuf::from("../vr-viewer-files-webm/pairs_for_shir/"),
            stereo_js_source: PathBuf::from("example/stereo.js"),
            stereo_js_source_alt: PathBuf::from("example_ar2/stereo.js"),
            viewer_type: ViewerType::default(),
            media: MediaKind::default(),
            scan: ScanRules::default(),
        }
    }
}

impl SiteConfig {
    /// 設定を読み込む
    ///
    /// 探索順: 引数のパス → ./stereo-viewer.json → ~/.config/stereo-viewer/config.json → 既定値
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(SiteError::Config(format!(
                    "設定ファイルが見つかりません: {}",
                    path.display()
                )));
            }
            return Self::from_file(path);
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::from_file(&local);
        }

        if let Some(user) = Self::user_config_path() {
            if user.exists() {
                return Self::from_file(&user);
            }
        }

        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SiteConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn user_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("stereo-viewer").join("config.json"))
    }

    /// ビューア構成に応じたコピー元スクリプト
    pub fn script_source(&self) -> &Path {
        if self.viewer_type.uses_alt_script() {
            &self.stereo_js_source_alt
        } else {
            &self.stereo_js_source
        }
    }
}
