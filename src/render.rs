//! 端末向けの結果表示

use defect_inspector_common::endpoints::resolve_link;
use defect_inspector_common::{Labels, Panel, ResultsView, UiState};
use std::fmt::Write;

/// 結果一覧をテキスト化
pub fn render_results_text(view: &ResultsView) -> String {
    let mut out = String::new();
    for region in &view.regions {
        let _ = writeln!(out, "{} {}", region.icon.glyph(), region.title);
        for line in &region.defects {
            let _ = writeln!(out, "    {} {}", line.heading, line.class_name);
            let _ = writeln!(out, "      {} {}", line.confidence_label, line.confidence);
        }
        if let Some(placeholder) = &region.placeholder {
            let _ = writeln!(out, "    {}", placeholder);
        }
    }
    out
}

/// UI状態を1ファイル分のテキストにする
pub fn render_state(state: &UiState, labels: &Labels, base_url: &str) -> String {
    let mut out = String::new();

    if let Some(notice) = &state.notice {
        let _ = writeln!(out, "✘ {}", notice);
        return out;
    }

    match &state.panel {
        Some(Panel::Results(view)) => out.push_str(&render_results_text(view)),
        Some(Panel::Error(message)) => {
            let _ = writeln!(out, "✘ {}: {}", labels.error_prefix, message);
        }
        Some(Panel::InvalidFormat(message)) => {
            let _ = writeln!(out, "✘ {}", message);
        }
        None => {}
    }

    if let Some(link) = &state.result_link {
        let _ = writeln!(out, "🔗 {}: {}", labels.processed_image, resolve_link(base_url, link));
    }

    out
}
