//! ビューア生成の統合テスト

use std::path::{Path, PathBuf};
use stereo_viewer_common::{Label, MediaKind, ViewerType};
use stereo_viewer_site::config::SiteConfig;
use stereo_viewer_site::generator::{build_all, make_viewers};
use stereo_viewer_site::writer::WriteOutcome;
use tempfile::tempdir;

const PRIMARY_JS: &str = "// primary stereo.js";
const ALT_JS: &str = "// ar2 stereo.js";

fn setup(root: &Path, prompts: &[&str]) -> SiteConfig {
    let media = root.join("pairs");
    for prompt in prompts {
        std::fs::create_dir_all(media.join(prompt)).unwrap();
    }

    let primary = root.join("example").join("stereo.js");
    let alt = root.join("example_ar2").join("stereo.js");
    std::fs::create_dir_all(primary.parent().unwrap()).unwrap();
    std::fs::create_dir_all(alt.parent().unwrap()).unwrap();
    std::fs::write(&primary, PRIMARY_JS).unwrap();
    std::fs::write(&alt, ALT_JS).unwrap();

    SiteConfig {
        media_local_path: media,
        save_path: root.join("viewers"),
        stereo_js_source: primary,
        stereo_js_source_alt: alt,
        media_base_url: "https://example.com/pairs/".to_string(),
        viewers_dir: root.join("viewers"),
        output_index: root.join("index.html"),
        ..Default::default()
    }
}

fn read(path: PathBuf) -> String {
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{} が読めない: {}", path.display(), e))
}

#[test]
fn test_spatial_compare_image_viewer() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = setup(dir.path(), &["kitchen_scene"]);

    let report = make_viewers(&config, false).expect("ビューア生成に失敗");
    assert_eq!(report.prompts, 1);
    assert_eq!(report.pages.len(), 1);
    assert_eq!(report.pages[0].label, Label::ComparisonSpatial);

    let folder = config.save_path.join("kitchen_scene_comparison_spatial");
    let html = read(folder.join("index.html"));
    assert!(html.contains(
        r#"src="https://example.com/pairs/kitchen_scene/spatial_comparison/comparison_spatial.png""#
    ));
    assert_eq!(read(folder.join("stereo.js")), ALT_JS);
}

#[test]
fn test_temporal_compare_uses_primary_script() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut config = setup(dir.path(), &["kitchen_scene"]);
    config.viewer_type = ViewerType::TemporalCompare;

    make_viewers(&config, false).unwrap();

    let folder = config.save_path.join("kitchen_scene_comparison_temporal");
    let html = read(folder.join("index.html"));
    assert!(html.contains("kitchen_scene/spatial_comparison/comparison_temporal.png"));
    assert_eq!(read(folder.join("stereo.js")), PRIMARY_JS);
}

#[test]
fn test_separate_image_creates_two_viewers() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut config = setup(dir.path(), &["kitchen_a", "kitchen_b"]);
    config.viewer_type = ViewerType::Separate;

    let report = make_viewers(&config, false).unwrap();
    assert_eq!(report.prompts, 2);
    assert_eq!(report.pages.len(), 4);

    for prompt in ["kitchen_a", "kitchen_b"] {
        let ours = config.save_path.join(format!("{}_ours", prompt));
        let warp = config.save_path.join(format!("{}_warp_inpaint", prompt));
        assert!(read(ours.join("index.html")).contains(&format!("{}/spatial_comparison/ours.png", prompt)));
        assert!(read(warp.join("index.html")).contains(&format!("{}/spatial_comparison/warp_inpaint.png", prompt)));
        assert_eq!(read(ours.join("stereo.js")), PRIMARY_JS);
        assert_eq!(read(warp.join("stereo.js")), PRIMARY_JS);
    }
}

#[test]
fn test_separate_video_viewers() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut config = setup(dir.path(), &["beach"]);
    config.viewer_type = ViewerType::Separate;
    config.media = MediaKind::Video;

    make_viewers(&config, false).unwrap();

    let html = read(config.save_path.join("beach_depthc").join("index.html"));
    assert!(html.contains(r#"<source src="https://example.com/pairs/beach/depthc.webm" type="video/webm">"#));
    assert!(html.contains(r#"<source src="https://example.com/pairs/beach/depthc.mp4" type="video/mp4">"#));
    assert!(config.save_path.join("beach_ours").join("index.html").exists());
}

#[test]
fn test_include_pattern_and_hidden_folders() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut config = setup(dir.path(), &["kitchen_scene", "garden_scene", ".cache"]);
    config.scan.include_pattern = Some("kitchen".to_string());

    let report = make_viewers(&config, false).unwrap();
    assert_eq!(report.pages.len(), 1);
    assert_eq!(report.pages[0].prompt, "kitchen_scene");
    assert!(!config.save_path.join("garden_scene_comparison_spatial").exists());
    assert!(!config.save_path.join(".cache_comparison_spatial").exists());
}

#[test]
fn test_make_viewers_is_idempotent() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = setup(dir.path(), &["kitchen_scene"]);
    let page = config
        .save_path
        .join("kitchen_scene_comparison_spatial")
        .join("index.html");

    let first = make_viewers(&config, false).unwrap();
    assert_eq!(first.pages[0].outcome, WriteOutcome::Created);
    let first_html = std::fs::read(&page).unwrap();

    let second = make_viewers(&config, false).unwrap();
    assert_eq!(second.unchanged(), 1);
    assert_eq!(std::fs::read(&page).unwrap(), first_html);
}

#[test]
fn test_build_all_links_generated_viewers() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = setup(dir.path(), &["kitchen_scene"]);

    let (viewers, index) = build_all(&config, false).unwrap();
    assert_eq!(viewers.pages.len(), 1);
    assert_eq!(index.entries, 1);

    let html = read(config.output_index.clone());
    assert!(html.contains(r#"href="viewers/kitchen_scene_comparison_spatial/index.html""#));
    assert!(html.contains(r#"alt="kitchen_scene comparison_spatial""#));
    assert!(html.contains("<p>comparison_spatial</p>"));
}

#[test]
fn test_build_all_indexes_save_path_with_default_layout() {
    let dir = tempdir().expect("Failed to create temp dir");
    let defaults = SiteConfig::default();
    let mut config = setup(dir.path(), &["kitchen_scene"]);
    // 既定値どおり save_path と viewers_dir を別フォルダにする
    config.save_path = dir.path().join(&defaults.save_path);
    config.viewers_dir = dir.path().join("viewers");
    assert_ne!(config.save_path, config.viewers_dir);

    let (viewers, index) = build_all(&config, false).unwrap();
    assert_eq!(viewers.pages.len(), 1);
    assert_eq!(index.entries, 1, "生成したビューアがインデックスに載っていない");
    assert!(!config.viewers_dir.exists());

    let html = read(config.output_index.clone());
    assert!(html.contains(
        r#"href="viewers_images/kitchen_scene_comparison_spatial/index.html""#
    ));
}
