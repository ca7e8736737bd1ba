//! APIレスポンスパーサー
//!
//! predict / upload エンドポイントの応答本文をパースする

use crate::error::{Error, Result};
use crate::types::{DetectionResult, RegionResult, UploadReply};
use serde_json::Value;

/// predictレスポンスをパース
///
/// 応答は領域結果の配列でなければならない。
/// 配列以外（`{"defects": [...]}` 形式を含む）は `Error::InvalidFormat`。
///
/// # Arguments
/// * `body` - レスポンス本文
///
/// # Returns
/// * `Ok(DetectionResult)` - パース成功
/// * `Err(Error::Json)` - JSONとして不正
/// * `Err(Error::InvalidFormat)` - JSONだが形が違う
///
/// # Examples
/// ```
/// use defect_inspector_common::parse_detection_response;
///
/// let body = r#"[{"status": "no_defects", "defects": []}]"#;
/// let result = parse_detection_response(body).unwrap();
/// assert_eq!(result.len(), 1);
/// ```
pub fn parse_detection_response(body: &str) -> Result<DetectionResult> {
    let value: Value = serde_json::from_str(body.trim())?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(Error::InvalidFormat(format!(
                "expected array, got {}",
                json_kind(&other)
            )))
        }
    };

    let regions = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value::<RegionResult>(item)
                .map_err(|e| Error::InvalidFormat(format!("region {}: {}", i + 1, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(DetectionResult { regions })
}

/// uploadレスポンスをパース
pub fn parse_upload_response(body: &str) -> Result<UploadReply> {
    let reply: UploadReply = serde_json::from_str(body.trim())?;
    Ok(reply)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
