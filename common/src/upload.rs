//! アップロード対象ファイル

use crate::error::{Error, Result};

/// MIMEタイプが不明な場合の値
pub const UNKNOWN_MIME: &str = "application/octet-stream";

/// 拡張子からMIMEタイプを推定するテーブル
const EXTENSION_MIME: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("bmp", "image/bmp"),
    ("gif", "image/gif"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("webp", "image/webp"),
];

/// ユーザーが選択した1ファイル（1回の送信の間だけ存在する）
#[derive(Debug, Clone, PartialEq)]
pub struct UploadEvent {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadEvent {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        is_image_mime(&self.mime_type)
    }

    /// 送信前の検証
    ///
    /// 画像以外・空ファイルはリクエストを送らずに拒否する
    pub fn validate(&self) -> Result<()> {
        validate_file(&self.file_name, &self.mime_type, self.bytes.len() as u64)
    }
}

/// 中身を読む前（ファイル名・MIME・サイズだけ）の検証
///
/// ブラウザでは `File` を読み込む前にこれで拒否する
pub fn validate_file(file_name: &str, mime_type: &str, size: u64) -> Result<()> {
    if !is_image_mime(mime_type) {
        let mime = if mime_type.is_empty() { UNKNOWN_MIME } else { mime_type };
        return Err(Error::NotAnImage(format!("{} ({})", file_name, mime)));
    }
    if size == 0 {
        return Err(Error::EmptyFile(file_name.to_string()));
    }
    Ok(())
}

/// `image/` で始まるMIMEタイプか
pub fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

/// ファイル名の拡張子からMIMEタイプを推定
pub fn mime_from_file_name(file_name: &str) -> &'static str {
    let ext = match file_name.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => return UNKNOWN_MIME,
    };
    EXTENSION_MIME
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or(UNKNOWN_MIME)
}
