//! Blocking notice dialog.
//!
//! Shown on top of everything, including an open modal, until OK (or
//! Escape/Enter) dismisses it.

use gpui::{AnyElement, Context, FontWeight, div, prelude::*, px};
use patientdesk_core::{Notice, NoticeKind};

use crate::theme;
use crate::views::MainView;

pub fn render_notice_dialog(notice: &Notice, cx: &mut Context<MainView>) -> AnyElement {
    let accent = match notice.kind() {
        NoticeKind::Success => theme::success(),
        NoticeKind::Warning => theme::warning(),
        NoticeKind::Error => theme::ember(),
    };
    let message = notice.to_string();

    div()
        .id("notice-overlay")
        .absolute()
        .inset_0()
        .bg(theme::overlay())
        .flex()
        .justify_center()
        .items_center()
        .child(
            div()
                .id("notice-box")
                .w(px(theme::MODAL_WIDTH))
                .bg(theme::surface())
                .rounded(px(theme::RADIUS_LG))
                .border_t_4()
                .border_color(accent)
                .p(px(theme::SPACE_4))
                .flex()
                .flex_col()
                .gap(px(theme::SPACE_3))
                .child(
                    div()
                        .text_size(px(theme::TEXT_LG))
                        .font_weight(FontWeight::BOLD)
                        .text_color(accent)
                        .child(notice.title()),
                )
                // One element per line; the success text spans three.
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .gap(px(theme::SPACE_1))
                        .text_size(px(theme::TEXT_BASE))
                        .text_color(theme::text_dark())
                        .children(message.lines().map(|line| div().child(line.to_string()))),
                )
                .child(
                    div().flex().justify_end().child(
                        div()
                            .id("notice-ok")
                            .px(px(theme::SPACE_4))
                            .py(px(theme::SPACE_2))
                            .rounded(px(theme::RADIUS_MD))
                            .bg(theme::brand())
                            .hover(|style| style.bg(theme::brand_hover()))
                            .text_color(theme::text_white())
                            .cursor_pointer()
                            .on_click(cx.listener(|view, _, _, cx| {
                                view.on_dismiss_notice(cx);
                            }))
                            .child("OK"),
                    ),
                ),
        )
        .into_any_element()
}
