//! 出力ファイルの書き込み
//!
//! 同じ内容のページは書き直さないので、入力が変わらなければ
//! 何度実行しても出力は同一になる。

use crate::error::{Result, SiteError};
use std::path::{Path, PathBuf};
use stereo_viewer_common::VIEWER_SCRIPT;

/// ページ書き込みの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Updated,
    Unchanged,
}

impl std::fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteOutcome::Created => write!(f, "作成"),
            WriteOutcome::Updated => write!(f, "更新"),
            WriteOutcome::Unchanged => write!(f, "変更なし"),
        }
    }
}

/// フォルダを作成（既存なら何もしない）
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// HTMLを書き込む。内容が同じなら触らない
pub fn write_page(path: &Path, html: &str) -> Result<WriteOutcome> {
    let outcome = match std::fs::read(path) {
        Ok(existing) if existing == html.as_bytes() => return Ok(WriteOutcome::Unchanged),
        Ok(_) => WriteOutcome::Updated,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => WriteOutcome::Created,
        Err(e) => return Err(e.into()),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }
    std::fs::write(path, html)?;
    Ok(outcome)
}

/// ビューアスクリプトを `<dest_dir>/stereo.js` としてコピー（更新日時も引き継ぐ）
pub fn copy_script(source: &Path, dest_dir: &Path) -> Result<PathBuf> {
    if !source.is_file() {
        return Err(SiteError::ScriptNotFound(source.display().to_string()));
    }

    let dest = dest_dir.join(VIEWER_SCRIPT);
    std::fs::copy(source, &dest)?;

    let modified = std::fs::metadata(source)?.modified()?;
    std::fs::OpenOptions::new()
        .write(true)
        .open(&dest)?
        .set_modified(modified)?;

    Ok(dest)
}
