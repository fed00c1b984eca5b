use crate::config::SiteConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stereo_viewer_common::{MediaKind, ViewerType};

#[derive(Parser)]
#[command(name = "stereo-viewer")]
#[command(about = "ステレオ比較ビューアとインデックスページの生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 設定ファイル（省略時は ./stereo-viewer.json → ~/.config/stereo-viewer/config.json）
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// viewers/ 直下のフォルダからインデックスページを生成
    Index {
        /// ビューアフォルダのルート
        #[arg(long)]
        viewers_dir: Option<PathBuf>,

        /// 出力HTMLファイル
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 各フォルダの thumbnail.png を使う
        #[arg(long)]
        thumbnails: bool,

        /// ラベル不明のフォルダを除外
        #[arg(long)]
        skip_unknown: bool,
    },

    /// メディアのプロンプトフォルダごとにビューアページを生成
    Viewers {
        /// ビューア構成 (separate/temporal_compare/spatial_compare)
        #[arg(short = 't', long)]
        viewer_type: Option<ViewerType>,

        /// メディアの種類 (image/video)
        #[arg(short, long)]
        media: Option<MediaKind>,

        /// プロンプトフォルダを列挙するローカルパス
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// ビューアフォルダの出力先
        #[arg(long)]
        save_path: Option<PathBuf>,

        /// フォルダ名の絞り込み（正規表現）
        #[arg(short, long)]
        include: Option<String>,
    },

    /// ビューア生成からインデックス生成まで一括実行
    All,

    /// 設定を表示/初期化
    Config {
        /// 現在の設定を表示
        #[arg(long)]
        show: bool,

        /// 既定値の設定ファイルを書き出す
        #[arg(long)]
        init: Option<PathBuf>,
    },
}

impl Commands {
    /// コマンドラインで指定された値で設定を上書きする
    pub fn apply_overrides(&self, config: &mut SiteConfig) {
        match self {
            Commands::Index { viewers_dir, output, thumbnails, skip_unknown } => {
                if let Some(dir) = viewers_dir {
                    config.viewers_dir = dir.clone();
                }
                if let Some(path) = output {
                    config.output_index = path.clone();
                }
                config.use_folder_thumbnails |= *thumbnails;
                config.skip_unknown |= *skip_unknown;
            }
            Commands::Viewers { viewer_type, media, source, save_path, include } => {
                if let Some(viewer_type) = viewer_type {
                    config.viewer_type = *viewer_type;
                }
                if let Some(media) = media {
                    config.media = *media;
                }
                if let Some(source) = source {
                    config.media_local_path = source.clone();
                }
                if let Some(save_path) = save_path {
                    config.save_path = save_path.clone();
                }
                if include.is_some() {
                    config.scan.include_pattern = include.clone();
                }
            }
            Commands::All | Commands::Config { .. } => {}
        }
    }
}
