//! Stereo Viewer Common Library
//!
//! フォルダ名パーサー・ページテンプレート・共有型

pub mod error;
pub mod label;
pub mod template;
pub mod types;

pub use error::{Error, Result};
pub use label::{folder_name_for, parse_folder_name, Label, ParsedLabel};
pub use template::{
    render_image_viewer, render_index, render_thumbnail, render_video_viewer, VIEWER_SCRIPT,
};
pub use types::{FolderEntry, MediaKind, ViewerType};
