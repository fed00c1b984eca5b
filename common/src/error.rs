//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown viewer type: {0} (use separate, temporal_compare or spatial_compare)")]
    UnknownViewerType(String),

    #[error("unknown media kind: {0} (use image or video)")]
    UnknownMedia(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
