//! 検出結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Defect: 1件の欠陥（クラス名と信頼度）
//! - RegionResult: 1領域の検査結果
//! - DetectionResult: predictエンドポイントの応答全体
//! - UploadReply / ImageRecord: その他エンドポイントの応答

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 領域ステータス
///
/// `no_defects` 以外の文字列はすべて「欠陥あり」として扱う
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RegionStatus {
    NoDefects,
    DefectsFound,
    Other(String),
}

impl RegionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RegionStatus::NoDefects => "no_defects",
            RegionStatus::DefectsFound => "defects_found",
            RegionStatus::Other(s) => s,
        }
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, RegionStatus::NoDefects)
    }
}

impl Default for RegionStatus {
    fn default() -> Self {
        RegionStatus::Other(String::new())
    }
}

impl From<String> for RegionStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "no_defects" => RegionStatus::NoDefects,
            "defects_found" => RegionStatus::DefectsFound,
            _ => RegionStatus::Other(s),
        }
    }
}

impl From<RegionStatus> for String {
    fn from(status: RegionStatus) -> Self {
        status.as_str().to_string()
    }
}

/// 信頼度（数値または "87.50%" のような文字列）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Number(f64),
    Text(String),
    /// `null` はそのまま "null" と表示する
    Null,
}

impl Default for Confidence {
    fn default() -> Self {
        Confidence::Text(String::new())
    }
}

impl fmt::Display for Confidence {
    /// 0.0〜1.0の数値は割合とみなしてパーセント表記にする
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Number(v) if (0.0..=1.0).contains(v) => write!(f, "{:.2}%", v * 100.0),
            Confidence::Number(v) => write!(f, "{:.2}%", v),
            Confidence::Text(s) => write!(f, "{}", s),
            Confidence::Null => f.write_str("null"),
        }
    }
}

/// 欠陥1件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Defect {
    #[serde(rename = "class", default)]
    pub class_name: String,

    #[serde(default)]
    pub confidence: Confidence,
}

/// 領域ごとの検査結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionResult {
    #[serde(default)]
    pub status: RegionStatus,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub defects: Vec<Defect>,
}

/// `"defects": null` は欠陥なしとして扱う
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// predictエンドポイントの応答（領域順）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetectionResult {
    pub regions: Vec<RegionResult>,
}

impl DetectionResult {
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// 欠陥ありと判定された領域数
    pub fn defective_regions(&self) -> usize {
        self.regions.iter().filter(|r| !r.status.is_clean()).count()
    }

    /// 全領域の欠陥総数
    pub fn total_defects(&self) -> usize {
        self.regions.iter().map(|r| r.defects.len()).sum()
    }
}

/// uploadエンドポイントの応答
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_url: Option<String>,

    /// バックエンドは失敗時も200で `{"error": ...}` を返す
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 保存済み画像のメタデータ（GET /api/image/{id}）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: u64,
    pub filename: String,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // RegionStatus テスト
    // =============================================

    #[test]
    fn test_region_status_known_values() {
        let status: RegionStatus = serde_json::from_str("\"no_defects\"").unwrap();
        assert_eq!(status, RegionStatus::NoDefects);
        assert!(status.is_clean());

        let status: RegionStatus = serde_json::from_str("\"defects_found\"").unwrap();
        assert_eq!(status, RegionStatus::DefectsFound);
        assert!(!status.is_clean());
    }

    #[test]
    fn test_region_status_unknown_is_not_clean() {
        let status: RegionStatus = serde_json::from_str("\"partial\"").unwrap();
        assert_eq!(status, RegionStatus::Other("partial".into()));
        assert!(!status.is_clean());
        assert!(!RegionStatus::default().is_clean());
    }

    #[test]
    fn test_region_status_serialize() {
        let json = serde_json::to_string(&RegionStatus::NoDefects).unwrap();
        assert_eq!(json, "\"no_defects\"");
    }

    // =============================================
    // Confidence テスト
    // =============================================

    #[test]
    fn test_confidence_fraction_display() {
        assert_eq!(Confidence::Number(0.8731).to_string(), "87.31%");
        assert_eq!(Confidence::Number(1.0).to_string(), "100.00%");
    }

    #[test]
    fn test_confidence_percent_number_display() {
        assert_eq!(Confidence::Number(42.5).to_string(), "42.50%");
    }

    #[test]
    fn test_confidence_text_verbatim() {
        let c: Confidence = serde_json::from_str("\"91.20%\"").unwrap();
        assert_eq!(c, Confidence::Text("91.20%".into()));
        assert_eq!(c.to_string(), "91.20%");
    }

    // =============================================
    // RegionResult / DetectionResult テスト
    // =============================================

    #[test]
    fn test_region_missing_defects_is_empty() {
        let region: RegionResult = serde_json::from_str(r#"{"status": "no_defects"}"#).unwrap();
        assert!(region.defects.is_empty());
    }

    #[test]
    fn test_region_null_defects_is_empty() {
        let region: RegionResult =
            serde_json::from_str(r#"{"status": "no_defects", "defects": null}"#).unwrap();
        assert!(region.defects.is_empty());
    }

    #[test]
    fn test_confidence_null_displayed_verbatim() {
        let defect: Defect = serde_json::from_str(r#"{"class": "crack", "confidence": null}"#).unwrap();
        assert_eq!(defect.confidence, Confidence::Null);
        assert_eq!(defect.confidence.to_string(), "null");
    }

    #[test]
    fn test_defect_class_field_name() {
        let defect: Defect = serde_json::from_str(r#"{"class": "crack", "confidence": 0.5}"#).unwrap();
        assert_eq!(defect.class_name, "crack");

        let json = serde_json::to_string(&defect).unwrap();
        assert!(json.contains("\"class\":\"crack\""));
    }

    #[test]
    fn test_detection_result_counts() {
        let json = r#"[
            {"status": "no_defects", "defects": []},
            {"status": "defects_found", "defects": [
                {"class": "crack", "confidence": "88.00%"},
                {"class": "rust", "confidence": "51.10%"}
            ]},
            {"status": "defects_found", "defects": [{"class": "dent", "confidence": 0.4}]}
        ]"#;
        let result: DetectionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result.defective_regions(), 2);
        assert_eq!(result.total_defects(), 3);
    }

    #[test]
    fn test_upload_reply_optional_fields() {
        let reply: UploadReply = serde_json::from_str("{}").unwrap();
        assert!(reply.result_url.is_none());
        assert!(reply.error.is_none());

        let reply: UploadReply =
            serde_json::from_str(r#"{"result_url": "/static/results/processed_a.jpg"}"#).unwrap();
        assert_eq!(reply.result_url.as_deref(), Some("/static/results/processed_a.jpg"));
    }

    #[test]
    fn test_image_record_deserialize() {
        let json = r#"{"id": 7, "filename": "panorama.jpg", "uploaded_at": "2024-05-01T10:20:30.123456"}"#;
        let record: ImageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.filename, "panorama.jpg");
        assert!(record.uploaded_at.is_some());
    }
}
