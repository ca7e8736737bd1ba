mod mime;

pub use mime::detect_mime;

use crate::error::{InspectorError, Result};
use defect_inspector_common::UploadEvent;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
}

impl ImageInfo {
    fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            file_name,
        }
    }

    /// ファイルを読み込み送信用イベントにする（MIMEは内容から判定）
    pub fn load(&self) -> Result<UploadEvent> {
        let bytes = std::fs::read(&self.path)?;
        let mime = detect_mime(&bytes, &self.file_name);
        Ok(UploadEvent::new(self.file_name.clone(), mime, bytes))
    }
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tif", "tiff", "webp"];

/// 対象を集める
///
/// ファイル指定ならそのファイルのみ（拡張子は問わない、送信前に検証される）。
/// フォルダ指定なら画像拡張子のファイルをファイル名順で返す。
pub fn collect_images(path: &Path, recursive: bool) -> Result<Vec<ImageInfo>> {
    if path.is_file() {
        return Ok(vec![ImageInfo::from_path(path)]);
    }
    scan_folder(path, recursive)
}

pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<ImageInfo>> {
    if !folder.exists() {
        return Err(InspectorError::FileNotFound(folder.display().to_string()));
    }

    let mut walker = WalkDir::new(folder).follow_links(false);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut images: Vec<ImageInfo> = walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| is_image_extension(&ext.to_string_lossy()))
                .unwrap_or(false)
        })
        .map(|e| ImageInfo::from_path(e.path()))
        .collect();

    images.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(images)
}

fn is_image_extension(ext: &str) -> bool {
    let ext = ext.to_ascii_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}
