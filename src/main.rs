use anyhow::Context;
use clap::Parser;
use stereo_viewer_site::{cli, config, generator};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = SiteConfig::load(cli.config.as_deref()).context("設定の読み込みに失敗")?;
    cli.command.apply_overrides(&mut config);

    match cli.command {
        Commands::Index { .. } => {
            println!("🗂  stereo-viewer - インデックス生成\n");

            println!("[1/1] {} をスキャン中...", config.viewers_dir.display());
            let report = generator::generate_index(&config, cli.verbose).with_context(|| {
                format!("インデックス生成に失敗: {}", config.viewers_dir.display())
            })?;

            println!(
                "✔ {} を生成しました ({}件, {})",
                report.output.display(),
                report.entries,
                report.outcome
            );
        }

        Commands::Viewers { .. } => {
            println!("🥽 stereo-viewer - ビューア生成\n");

            println!(
                "[1/1] {} からビューアを生成中... ({}, {})",
                config.media_local_path.display(),
                config.viewer_type,
                config.media
            );
            let report = generator::make_viewers(&config, cli.verbose).context("ビューア生成に失敗")?;

            println!(
                "\n✅ {}件のプロンプトから{}件のビューアを出力 (変更なし: {}件)",
                report.prompts,
                report.pages.len(),
                report.unchanged()
            );
        }

        Commands::All => {
            println!("🚀 stereo-viewer - 一括生成\n");
            let (viewers, index) = generator::build_all(&config, cli.verbose).context("一括生成に失敗")?;
            println!(
                "✅ 完了 (ビューア: {}件, インデックス: {}件)",
                viewers.pages.len(),
                index.entries
            );
        }

        Commands::Config { show, init } => {
            if let Some(path) = init {
                SiteConfig::default()
                    .save(&path)
                    .with_context(|| format!("設定ファイルの書き出しに失敗: {}", path.display()))?;
                println!("✔ 設定ファイルを作成しました: {}", path.display());
            }

            if show {
                println!("設定:");
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}
