//! JSONレポート（--json / --output）

use crate::error::Result;
use crate::scanner::ImageInfo;
use defect_inspector_common::{DetectionResult, Inspection, UploadEvent};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 1ファイル分の結果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileReport {
    pub file_name: String,
    pub file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<DetectionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    pub fn new(file_name: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            file_path: file_path.into(),
            ..Default::default()
        }
    }

    /// 送信前に除外したファイル（検証エラー・読み込みエラー）
    pub fn rejected(mut self, error: &impl std::fmt::Display) -> Self {
        self.error = Some(error.to_string());
        self
    }

    /// 送信結果を記録（結果そのものは `UiState::finish` に渡すので参照で受ける）
    pub fn record(mut self, outcome: &defect_inspector_common::Result<Inspection>) -> Self {
        match outcome {
            Ok(inspection) => {
                match &inspection.detection {
                    Ok(result) => self.regions = Some(result.clone()),
                    Err(e) => self.error = Some(e.to_string()),
                }
                self.result_url = inspection.result_url.clone();
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        self
    }

    pub fn defective_regions(&self) -> usize {
        self.regions.as_ref().map(|r| r.defective_regions()).unwrap_or(0)
    }
}

/// ファイルを読み込む
///
/// 読めなかった場合（権限・走査後の削除など）はエラーを記録したレポートを返す
pub fn load_image(image: &ImageInfo) -> std::result::Result<(UploadEvent, FileReport), FileReport> {
    let report = FileReport::new(&image.file_name, image.path.display().to_string());
    match image.load() {
        Ok(event) => Ok((event, report)),
        Err(e) => {
            log::warn!("cannot read {}: {}", image.path.display(), e);
            Err(report.rejected(&e))
        }
    }
}

pub fn write_report(reports: &[FileReport], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(reports)?;
    std::fs::write(path, json)?;
    Ok(())
}
