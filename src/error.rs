use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("スクリプトが見つかりません: {0}")]
    ScriptNotFound(String),

    #[error("フォルダ名パターンが不正: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] stereo_viewer_common::Error),
}

pub type Result<T> = std::result::Result<T, SiteError>;
