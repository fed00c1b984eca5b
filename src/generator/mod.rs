pub mod index;
pub mod viewers;

pub use index::{generate_index, generate_index_for, IndexReport};
pub use viewers::{make_viewers, ViewerPage, ViewerReport};

use crate::config::SiteConfig;
use crate::error::Result;

/// ビューア生成 → インデックス生成を続けて実行
///
/// インデックスは今回ビューアを書き出した `save_path` を対象にする
pub fn build_all(config: &SiteConfig, verbose: bool) -> Result<(ViewerReport, IndexReport)> {
    println!("[1/2] ビューアを生成中... ({}, {})", config.viewer_type, config.media);
    let viewers = make_viewers(config, verbose)?;
    println!("✔ {}件のビューアを出力\n", viewers.pages.len());

    println!("[2/2] インデックスを生成中...");
    let index = generate_index_for(config, &config.save_path, verbose)?;
    println!("✔ {} ({}件)\n", index.output.display(), index.entries);

    Ok((viewers, index))
}
