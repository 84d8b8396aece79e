//! Username lookup hosted by the Search modal.

use gpui::{AnyElement, Context, div, prelude::*, px};

use crate::state::AppState;
use crate::theme;
use crate::views::MainView;

/// Render the View Patient Profile form.
pub fn render_search_form(state: &AppState, cx: &mut Context<MainView>) -> AnyElement {
    let query = state.launcher().username_query().to_string();

    div()
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_3))
        .child(
            div()
                .px(px(theme::SPACE_3))
                .py(px(theme::SPACE_2))
                .min_h(px(36.0))
                .bg(theme::input_bg())
                .rounded(px(theme::RADIUS_MD))
                .border_1()
                .border_color(theme::focus_ring())
                .child(
                    div()
                        .text_size(px(theme::TEXT_BASE))
                        .text_color(if query.is_empty() {
                            theme::placeholder()
                        } else {
                            theme::text_dark()
                        })
                        .child(if query.is_empty() {
                            "Enter Patient Username".to_string()
                        } else {
                            format!("{query}|")
                        }),
                ),
        )
        .child(
            div()
                .id("search-submit")
                .py(px(theme::SPACE_2))
                .rounded(px(theme::RADIUS_MD))
                .flex()
                .justify_center()
                .bg(theme::brand())
                .hover(|style| style.bg(theme::brand_hover()))
                .text_color(theme::text_white())
                .cursor_pointer()
                .on_click(cx.listener(|view, _, _, cx| {
                    view.on_search_submit(cx);
                }))
                .child("View Profile"),
        )
        .into_any_element()
}
