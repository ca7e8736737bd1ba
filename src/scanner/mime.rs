use defect_inspector_common::upload::mime_from_file_name;

/// MIMEタイプを判定
///
/// 先頭バイトで画像形式を判定し、判定できなければ拡張子から推定する
pub fn detect_mime(bytes: &[u8], file_name: &str) -> String {
    match image::guess_format(bytes) {
        Ok(format) => format.to_mime_type().to_string(),
        Err(_) => mime_from_file_name(file_name).to_string(),
    }
}
