//! 検出結果のビューモデル
//!
//! WebはLeptosの`view!`、CLIはテキストでこのモデルを描画する

use crate::i18n::Labels;
use crate::types::{DetectionResult, RegionStatus};

/// アイコンのSVG属性（24x24, ストロークのみ）
pub const ICON_VIEW_BOX: &str = "0 0 24 24";
pub const ICON_SIZE: &str = "20";
pub const ICON_STROKE_WIDTH: &str = "2";

/// SVG図形
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvgShape {
    Path(&'static str),
    Polyline(&'static str),
    Line {
        x1: &'static str,
        y1: &'static str,
        x2: &'static str,
        y2: &'static str,
    },
}

const CHECK_SHAPES: &[SvgShape] = &[
    SvgShape::Path("M22 11.08V12a10 10 0 1 1-5.93-9.14"),
    SvgShape::Polyline("22 4 12 14.01 9 11.01"),
];

const WARNING_SHAPES: &[SvgShape] = &[
    SvgShape::Path("M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"),
    SvgShape::Line { x1: "12", y1: "9", x2: "12", y2: "13" },
    SvgShape::Line { x1: "12", y1: "17", x2: "12.01", y2: "17" },
];

/// ステータスアイコン（チェック / 警告三角）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Check,
    Warning,
}

impl StatusIcon {
    pub fn for_status(status: &RegionStatus) -> Self {
        if status.is_clean() {
            StatusIcon::Check
        } else {
            StatusIcon::Warning
        }
    }

    pub fn shapes(&self) -> &'static [SvgShape] {
        match self {
            StatusIcon::Check => CHECK_SHAPES,
            StatusIcon::Warning => WARNING_SHAPES,
        }
    }

    /// テキスト出力用のグリフ
    pub fn glyph(&self) -> &'static str {
        match self {
            StatusIcon::Check => "✔",
            StatusIcon::Warning => "⚠",
        }
    }

    /// CSSクラス
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusIcon::Check => "status-ok",
            StatusIcon::Warning => "status-warning",
        }
    }
}

/// 欠陥1行分
#[derive(Debug, Clone, PartialEq)]
pub struct DefectLine {
    pub heading: String,
    pub class_name: String,
    pub confidence_label: String,
    pub confidence: String,
}

/// 領域1件分
#[derive(Debug, Clone, PartialEq)]
pub struct RegionView {
    /// 1始まり
    pub index: usize,
    pub icon: StatusIcon,
    pub title: String,
    pub defects: Vec<DefectLine>,
    /// 欠陥0件のとき表示する文言
    pub placeholder: Option<String>,
}

/// 結果一覧
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsView {
    pub regions: Vec<RegionView>,
}

impl ResultsView {
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// 検出結果をビューモデルに変換
///
/// 領域ごとに1エントリ。ステータスでアイコンと見出しを切り替え、
/// 欠陥が0件なら「欠陥なし」のプレースホルダを付ける。
pub fn render_results(result: &DetectionResult, labels: &Labels) -> ResultsView {
    let regions = result
        .regions
        .iter()
        .enumerate()
        .map(|(i, region)| {
            let clean = region.status.is_clean();
            let defects: Vec<DefectLine> = region
                .defects
                .iter()
                .enumerate()
                .map(|(j, defect)| DefectLine {
                    heading: labels.defect_heading(j + 1),
                    class_name: defect.class_name.clone(),
                    confidence_label: format!("{}:", labels.confidence),
                    confidence: defect.confidence.to_string(),
                })
                .collect();
            let placeholder = defects
                .is_empty()
                .then(|| labels.no_defects_placeholder.to_string());

            RegionView {
                index: i + 1,
                icon: StatusIcon::for_status(&region.status),
                title: labels.region_title(i + 1, clean),
                defects,
                placeholder,
            }
        })
        .collect();

    ResultsView { regions }
}
