//! バックエンドのエンドポイント

/// multipartのフィールド名
pub const FILE_FIELD: &str = "file";

pub const PREDICT_PATH: &str = "/api/predict";
pub const UPLOAD_PATH: &str = "/upload";

pub fn image_path(id: u64) -> String {
    format!("/api/image/{}", id)
}

pub fn delete_image_path(id: u64) -> String {
    format!("/api/delete/image/{}", id)
}

/// ベースURLとパスを結合（空のベースURLは同一オリジン）
pub fn join(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// サーバーが返したリンクを解決（絶対URLはそのまま）
pub fn resolve_link(base_url: &str, link: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        link.to_string()
    } else {
        join(base_url, link)
    }
}
