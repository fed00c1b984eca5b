//! HTMLテンプレート
//!
//! インデックスページとステレオビューアページを文字列から組み立てる。
//! 値のエスケープは行わない（フォルダ名はファイルシステム上安全な前提）。

use crate::label::ParsedLabel;

/// three.js のCDNバージョン
pub const THREE_VERSION: &str = "0.166.1";

/// ビューアページに同梱するスクリプト名
pub const VIEWER_SCRIPT: &str = "stereo.js";

/// インデックスページの先頭（タイトル・スタイル・一覧コンテナ開始）
pub const INDEX_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>3D Viewer</title>
  <style>
    * {
      margin: 0;
      padding: 0;
      box-sizing: border-box;
    }

    body {
      display: flex;
      flex-direction: column;
      align-items: center;
      font-family: sans-serif;
      min-height: 100vh;
      background-color: #f5f5f5;
      padding: 20px;
    }

    h1 {
      margin: 20px 0;
    }

    .thumbnails {
      display: flex;
      flex-wrap: wrap;
      gap: 20px;
      max-width: 1200px;
      justify-content: center;
    }

    .thumbnail {
      text-align: center;
      text-decoration: none;
      color: #333;
      background-color: #fff;
      border: 1px solid #ddd;
      padding: 10px;
      border-radius: 8px;
      transition: box-shadow 0.3s ease;
      width: 180px;
    }

    .thumbnail:hover {
      box-shadow: 0 0 10px rgba(0,0,0,0.2);
    }

    .thumbnail img {
      width: 150px;
      height: auto;
      display: block;
      margin: 0 auto 10px;
    }

    .thumbnail p {
      margin-top: 5px;
      font-size: 14px;
    }
  </style>
</head>
<body>
  <h1>3D Viewer</h1>
  <div class="thumbnails">
"#;

/// インデックスページの末尾
pub const INDEX_FOOT: &str = r#"  </div>
</body>
</html>
"#;

/// インデックスからビューアページへの相対リンク
///
/// `prefix` はインデックスから見たビューアフォルダ群のパス（例: `viewers`）
pub fn viewer_link(prefix: &str, folder_name: &str) -> String {
    format!("{}/{}/index.html", prefix, folder_name)
}

/// ビューアフォルダ内のサムネイル画像パス
pub fn folder_thumbnail(prefix: &str, folder_name: &str) -> String {
    format!("{}/{}/thumbnail.png", prefix, folder_name)
}

/// サムネイル1件分のHTML
///
/// # Arguments
/// * `prefix` - インデックスから見たビューアフォルダ群のパス
/// * `folder_name` - ビューアフォルダ名
/// * `parsed` - フォルダ名のパース結果
/// * `thumbnail_src` - `<img>` に入れる画像パス
pub fn render_thumbnail(
    prefix: &str,
    folder_name: &str,
    parsed: &ParsedLabel,
    thumbnail_src: &str,
) -> String {
    format!(
        r#"    <a class="thumbnail" href="{href}">
      <img src="{src}" alt="{alt}" />
      <p>{label}</p>
    </a>
"#,
        href = viewer_link(prefix, folder_name),
        src = thumbnail_src,
        alt = parsed.alt_text(),
        label = parsed.label,
    )
}

/// インデックスページ全体
pub fn render_index(thumbnails_html: &str) -> String {
    let capacity = INDEX_HEAD.len() + thumbnails_html.len() + INDEX_FOOT.len() + 1;
    let mut html = String::with_capacity(capacity);
    html.push_str(INDEX_HEAD);
    html.push_str(thumbnails_html);
    html.push('\n');
    html.push_str(INDEX_FOOT);
    html
}

/// ビューアページ共通の `<head>`
fn viewer_head(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>{title}</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0, user-scalable=no">
    <link type="text/css" rel="stylesheet" href="../../css/main.css">
    <script type="importmap">
        {{
          "imports": {{
            "three": "https://cdn.jsdelivr.net/npm/three@{version}/build/three.module.js",
            "three/addons/": "https://cdn.jsdelivr.net/npm/three@{version}/examples/jsm/"
          }}
        }}
    </script>
</head>
<body>
    <div id="container"
         style="position: absolute; top: 50%; left: 50%;
                transform: translate(-50%, -50%); display: flex;
                justify-content: center; align-items: center; width: auto; height: auto;">
    </div>
"#,
        title = title,
        version = THREE_VERSION,
    )
}

fn viewer_foot() -> String {
    format!(
        r#"
    <script type="module" src="{script}"></script>
</body>
</html>
"#,
        script = VIEWER_SCRIPT
    )
}

/// SBS静止画のビューアページ
pub fn render_image_viewer(image_path: &str) -> String {
    let mut html = viewer_head("Stereo Image Viewer");
    html.push_str(&format!(
        r#"
    <!-- Hidden SBS image -->
    <img id="stereoImage"
         src="{image_path}"
         alt="SBS stereo image"
         style="display:none" />
"#
    ));
    html.push_str(&viewer_foot());
    html
}

/// SBS動画のビューアページ（webm と mp4 の2ソース、ループ・ミュート）
pub fn render_video_viewer(webm_src: &str, mp4_src: &str) -> String {
    let mut html = viewer_head("Stereo Video Viewer");
    html.push_str(&format!(
        r#"
    <!-- Hidden SBS video -->
    <video id="video" loop muted crossorigin="anonymous" playsinline style="display:none">
        <source src="{webm_src}" type="video/webm">
        <source src="{mp4_src}" type="video/mp4">
    </video>
"#
    ));
    html.push_str(&viewer_foot());
    html
}
