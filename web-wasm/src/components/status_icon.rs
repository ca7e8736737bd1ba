//! ステータスアイコン（チェック / 警告三角）

use defect_inspector_common::view::{ICON_SIZE, ICON_STROKE_WIDTH, ICON_VIEW_BOX};
use defect_inspector_common::{StatusIcon, SvgShape};
use leptos::prelude::*;

#[component]
pub fn StatusIconSvg(icon: StatusIcon) -> impl IntoView {
    let shapes = icon
        .shapes()
        .iter()
        .map(|shape| match *shape {
            SvgShape::Path(d) => view! { <path d=d /> }.into_any(),
            SvgShape::Polyline(points) => view! { <polyline points=points /> }.into_any(),
            SvgShape::Line { x1, y1, x2, y2 } => {
                view! { <line x1=x1 y1=y1 x2=x2 y2=y2 /> }.into_any()
            }
        })
        .collect_view();

    view! {
        <svg
            class=icon.css_class()
            width=ICON_SIZE
            height=ICON_SIZE
            viewBox=ICON_VIEW_BOX
            fill="none"
            stroke="currentColor"
            stroke-width=ICON_STROKE_WIDTH
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            {shapes}
        </svg>
    }
}
