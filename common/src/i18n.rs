//! 表示文言
//!
//! ru はバックエンド付属のWeb UIと同じ文言

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// 表示言語
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
    Ja,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Ru, Locale::En, Locale::Ja];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }

    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::Ru => &RU,
            Locale::En => &EN,
            Locale::Ja => &JA,
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ru" => Ok(Locale::Ru),
            "en" => Ok(Locale::En),
            "ja" | "jp" => Ok(Locale::Ja),
            _ => Err(format!("Unknown locale: {}. Use ru, en, or ja", s)),
        }
    }
}

/// 文言テーブル
#[derive(Debug)]
pub struct Labels {
    pub region: &'static str,
    pub no_defects_status: &'static str,
    pub defects_found_status: &'static str,
    pub defect: &'static str,
    pub confidence: &'static str,
    pub no_defects_placeholder: &'static str,
    pub error_prefix: &'static str,
    pub invalid_format: &'static str,
    pub not_an_image: &'static str,
    pub empty_file: &'static str,
    pub analysis_error: &'static str,
    pub processed_image: &'static str,
    pub drop_hint: &'static str,
    pub accepted_formats: &'static str,
    pub loading: &'static str,
    pub settings: &'static str,
    pub server_url: &'static str,
    pub same_origin: &'static str,
    pub language: &'static str,
    pub fetch_processed_link: &'static str,
}

static RU: Labels = Labels {
    region: "Область",
    no_defects_status: "Без дефектов",
    defects_found_status: "Дефекты обнаружены",
    defect: "Дефект",
    confidence: "Уверенность",
    no_defects_placeholder: "Дефекты не обнаружены",
    error_prefix: "Ошибка",
    invalid_format: "Некорректный формат данных от сервера",
    not_an_image: "Пожалуйста, выберите изображение",
    empty_file: "Файл пуст",
    analysis_error: "Ошибка анализа",
    processed_image: "Обработанное изображение",
    drop_hint: "Перетащите изображение сюда или нажмите для выбора",
    accepted_formats: "Форматы: JPEG, PNG, BMP, TIFF",
    loading: "Анализ изображения...",
    settings: "Настройки",
    server_url: "Адрес сервера",
    same_origin: "(тот же источник)",
    language: "Язык",
    fetch_processed_link: "Ссылка на обработанное изображение",
};

static EN: Labels = Labels {
    region: "Region",
    no_defects_status: "No defects",
    defects_found_status: "Defects found",
    defect: "Defect",
    confidence: "Confidence",
    no_defects_placeholder: "No defects detected",
    error_prefix: "Error",
    invalid_format: "Invalid data format from server",
    not_an_image: "Please select an image",
    empty_file: "File is empty",
    analysis_error: "Analysis error",
    processed_image: "Processed image",
    drop_hint: "Drop an image here or click to select",
    accepted_formats: "Formats: JPEG, PNG, BMP, TIFF",
    loading: "Analyzing image...",
    settings: "Settings",
    server_url: "Server URL",
    same_origin: "(same origin)",
    language: "Language",
    fetch_processed_link: "Processed image link",
};

static JA: Labels = Labels {
    region: "領域",
    no_defects_status: "欠陥なし",
    defects_found_status: "欠陥あり",
    defect: "欠陥",
    confidence: "信頼度",
    no_defects_placeholder: "欠陥は検出されませんでした",
    error_prefix: "エラー",
    invalid_format: "サーバーからのデータ形式が不正です",
    not_an_image: "画像を選択してください",
    empty_file: "ファイルが空です",
    analysis_error: "解析エラー",
    processed_image: "処理済み画像",
    drop_hint: "画像をドラッグ&ドロップ または クリックして選択",
    accepted_formats: "対応形式: JPEG, PNG, BMP, TIFF",
    loading: "解析中...",
    settings: "設定",
    server_url: "サーバーURL",
    same_origin: "（同一オリジン）",
    language: "表示言語",
    fetch_processed_link: "処理済み画像リンクを取得",
};

impl Labels {
    /// 「Область 1: Без дефектов」形式の見出し
    pub fn region_title(&self, index: usize, clean: bool) -> String {
        let status = if clean { self.no_defects_status } else { self.defects_found_status };
        format!("{} {}: {}", self.region, index, status)
    }

    pub fn defect_heading(&self, index: usize) -> String {
        format!("{} {}:", self.defect, index)
    }

    /// ファイル選択時の拒否メッセージ
    pub fn rejection_message(&self, error: &Error) -> String {
        match error {
            Error::EmptyFile(_) => self.empty_file.to_string(),
            _ => self.not_an_image.to_string(),
        }
    }

    /// エラーパネルに表示する本文
    pub fn error_message(&self, error: &Error) -> String {
        match error {
            Error::Http(status) => format!("{}: {}", self.analysis_error, status),
            Error::InvalidFormat(_) => self.invalid_format.to_string(),
            other => other.to_string(),
        }
    }
}
